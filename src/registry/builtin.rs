//! The tools shipped with the suite.
//!
//! Declaration order is the order shown in help output. Every font tool is a
//! standalone program run through [`ExternalTool`]; only `completion` is
//! implemented in-process.

use crate::cli::commands::{CompletionCommand, ExternalTool};

use super::entry::CommandEntry;

fn tool(name: &'static str, description: &'static str) -> CommandEntry {
    CommandEntry::new(name, description, ExternalTool::new(name))
}

/// All built-in entries, in help order.
pub fn entries() -> Vec<CommandEntry> {
    vec![
        // Compiled font tools
        tool("tx", "Font converter and analyzer"),
        tool("sfntedit", "SFNT table editor").abbrev("se"),
        tool("spot", "SFNT font inspector"),
        tool("addfeatures", "Feature file compiler")
            .abbrev("af")
            .early_retirement(),
        tool("detype1", "Type 1 font decompiler")
            .abbrev("dt1")
            .early_retirement(),
        tool("type1", "Type 1 font tool")
            .abbrev("t1")
            .early_retirement(),
        tool("sfntdiff", "Compare SFNT fonts").early_retirement(),
        tool("mergefonts", "Merge font files").abbrev("mf"),
        tool("rotatefont", "Rotate font glyphs").abbrev("rf"),
        // Build and processing tools
        tool("makeotf", "Build OpenType font").abbrev("mo"),
        tool("buildcff2vf", "Build CFF2 variable font").abbrev("bvf"),
        tool("buildmasterotfs", "Build master OTF fonts").abbrev("bmo"),
        tool("makeinstancesufo", "Generate UFO instances").abbrev("miu"),
        tool("checkoutlinesufo", "Check UFO outlines").abbrev("cou"),
        tool("comparefamily", "Compare font family")
            .abbrev("cf")
            .early_retirement(),
        tool("otc2otf", "Extract OTFs from OTC").early_retirement(),
        tool("otf2otc", "Combine OTFs into OTC").early_retirement(),
        tool("otf2ttf", "Convert OTF to TTF"),
        tool("ttfcomponentizer", "Add TTF components").early_retirement(),
        tool("ttfdecomponentizer", "Remove TTF components").early_retirement(),
        tool("ttxn", "TTX wrapper"),
        // Hinting
        tool("otfautohint", "Auto-hint fonts")
            .abbrev("ah")
            .alias("autohint"),
        tool("otfstemhist", "Generate stem histogram")
            .abbrev("sh")
            .alias("stemhist"),
        // Proofing
        tool("charplot", "Generate character proof").early_retirement(),
        tool("digiplot", "Generate digitization proof").early_retirement(),
        tool("fontplot", "Generate font proof").early_retirement(),
        tool("fontplot2", "Generate font proof (v2)").early_retirement(),
        tool("fontsetplot", "Generate font set proof").early_retirement(),
        tool("hintplot", "Generate hint proof").early_retirement(),
        tool("waterfallplot", "Generate waterfall proof"),
        // Suite
        CommandEntry::new(
            "completion",
            "Generate shell completion scripts",
            CompletionCommand,
        )
        .without_wrapper(),
    ]
}
