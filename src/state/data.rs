/// Shared data structures for the application state
/// 
/// These types flow between the UI layer and the conversion driver.

use std::fmt;

/// Image format written by a conversion run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Png,
    Jpg,
}

impl OutputFormat {
    /// All formats, in the order shown by the format selector
    pub const ALL: [OutputFormat; 2] = [OutputFormat::Png, OutputFormat::Jpg];

    /// File extension of written images (always lowercase)
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Jpg => "jpg",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OutputFormat::Png => "PNG",
            OutputFormat::Jpg => "JPG",
        })
    }
}
