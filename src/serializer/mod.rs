//! Dumps a [`crate::Node`] tree back to Luco or JSON text.

pub mod json;
pub mod luco;

/// Indentation knob for [`luco::to_string`]/[`json::to_string`]. Default is
/// four spaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndentStyle {
    pub char: char,
    pub count: usize,
}

impl Default for IndentStyle {
    fn default() -> Self {
        IndentStyle { char: ' ', count: 4 }
    }
}

impl IndentStyle {
    pub fn new(char: char, count: usize) -> Self {
        IndentStyle { char, count }
    }

    pub(crate) fn unit(&self, depth: usize) -> String {
        std::iter::repeat(self.char).take(self.count * depth).collect()
    }
}
