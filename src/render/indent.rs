//! Line-break and indentation strategies

use super::Options;

/// Decides what goes between sibling lines and in front of each line
pub trait Indentation {
    /// Separator placed between siblings and around child blocks
    fn line_break<'a>(&self, options: &'a Options) -> &'a str;

    /// Leading whitespace for a line at `depth`
    fn indent(&self, depth: usize, options: &Options) -> String;
}

/// Pretty-printed output: newline separated, one indent unit per level
#[derive(Debug, Clone, Copy, Default)]
pub struct Indented;

/// Compact output with no added whitespace
#[derive(Debug, Clone, Copy, Default)]
pub struct Compact;

impl Indentation for Indented {
    fn line_break<'a>(&self, options: &'a Options) -> &'a str {
        options.line_break.as_deref().unwrap_or("\n")
    }

    fn indent(&self, depth: usize, options: &Options) -> String {
        options.indent.repeat(depth)
    }
}

impl Indentation for Compact {
    fn line_break<'a>(&self, options: &'a Options) -> &'a str {
        options.line_break.as_deref().unwrap_or("")
    }

    fn indent(&self, _depth: usize, _options: &Options) -> String {
        String::new()
    }
}
