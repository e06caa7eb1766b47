//! RGB to luminance using ITU-R BT.601.

/// Luminance of one RGB pixel: Y = 0.299*R + 0.587*G + 0.114*B.
///
/// Integer math with coefficients scaled by 1000 (299 + 587 + 114 = 1000).
#[inline]
pub fn luminance(r: u8, g: u8, b: u8) -> u8 {
    ((299 * r as u32 + 587 * g as u32 + 114 * b as u32) / 1000) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primaries() {
        assert_eq!(luminance(255, 0, 0), 76);
        assert_eq!(luminance(0, 255, 0), 149);
        assert_eq!(luminance(0, 0, 255), 29);
    }

    #[test]
    fn test_extremes() {
        assert_eq!(luminance(0, 0, 0), 0);
        assert_eq!(luminance(255, 255, 255), 255);
    }
}
