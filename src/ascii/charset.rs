//! Character ramps for ASCII rendering.

use serde::Deserialize;

/// Standard ASCII density ramp (10 levels).
/// Characters ordered from darkest (space) to brightest (@).
/// Works well on dark terminals.
pub const STANDARD_CHARSET: &[char] = &[' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

/// Block character set (5 levels) using Unicode shading blocks.
pub const BLOCKS_CHARSET: &[char] = &[' ', '░', '▒', '▓', '█'];

/// Minimal character set (4 levels).
pub const MINIMAL_CHARSET: &[char] = &[' ', '.', ':', '#'];

/// Character ramp used to draw frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharSet {
    #[default]
    Standard,
    Blocks,
    Minimal,
}

impl CharSet {
    /// Characters of this ramp, darkest first.
    pub fn chars(&self) -> &'static [char] {
        match self {
            CharSet::Standard => STANDARD_CHARSET,
            CharSet::Blocks => BLOCKS_CHARSET,
            CharSet::Minimal => MINIMAL_CHARSET,
        }
    }

    /// Name used in config files and the CLI.
    pub fn name(&self) -> &'static str {
        match self {
            CharSet::Standard => "standard",
            CharSet::Blocks => "blocks",
            CharSet::Minimal => "minimal",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ramps_start_with_space() {
        for set in [CharSet::Standard, CharSet::Blocks, CharSet::Minimal] {
            assert_eq!(set.chars()[0], ' ', "{} should start dark", set.name());
        }
    }
}
