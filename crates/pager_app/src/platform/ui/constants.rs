/// Glyph rendered for an elided run of pages.
pub const ELLIPSIS_GLYPH: &str = "…";

/// Prompt printed before each command read.
pub const PROMPT: &str = "pager> ";
