//! Brightness to character mapping.

/// Map one brightness value (0-255) to a character of `charset`.
///
/// Lower brightness picks earlier (sparser) characters. With `invert` the
/// ramp is read backwards, which suits light terminal themes.
#[inline]
pub fn map_to_char(brightness: u8, charset: &[char], invert: bool) -> char {
    let Some(last) = charset.len().checked_sub(1) else {
        return ' ';
    };
    let b = if invert { 255 - brightness } else { brightness };
    charset[b as usize * last / 255]
}

/// Map brightness values to characters, reusing `buffer`.
///
/// Returns the number of characters written.
pub fn map_to_chars_into(
    brightness: impl IntoIterator<Item = u8>,
    charset: &[char],
    invert: bool,
    buffer: &mut Vec<char>,
) -> usize {
    buffer.clear();
    buffer.extend(
        brightness
            .into_iter()
            .map(|b| map_to_char(b, charset, invert)),
    );
    buffer.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ascii::STANDARD_CHARSET;

    #[test]
    fn test_extremes_hit_ramp_ends() {
        assert_eq!(map_to_char(0, STANDARD_CHARSET, false), ' ');
        assert_eq!(map_to_char(255, STANDARD_CHARSET, false), '@');
    }

    #[test]
    fn test_invert_swaps_ends() {
        assert_eq!(map_to_char(0, STANDARD_CHARSET, true), '@');
        assert_eq!(map_to_char(255, STANDARD_CHARSET, true), ' ');
    }

    #[test]
    fn test_empty_charset_yields_spaces() {
        let mut out = Vec::new();
        assert_eq!(map_to_chars_into([0, 128, 255], &[], false, &mut out), 3);
        assert_eq!(out, vec![' ', ' ', ' ']);
    }

    #[test]
    fn test_buffer_is_reused() {
        let mut out = vec!['x'; 10];
        map_to_chars_into([255], STANDARD_CHARSET, false, &mut out);
        assert_eq!(out, vec!['@']);
    }
}
