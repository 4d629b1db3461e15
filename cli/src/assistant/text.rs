//! # Text Measurement Helpers
//!
//! File: cli/src/assistant/text.rs
//! Author: Christi Mahu
//!
//! Trimming and length rules shared by the name formatter and the reply router.
//! Both follow the web chat widget the replies were written for:
//!
//! - whitespace is the ECMAScript set (Unicode `Zs`, the ASCII controls
//!   `\t \n \v \f \r`, U+2028, U+2029 and the byte-order mark U+FEFF); unlike
//!   [`char::is_whitespace`] it does **not** include U+0085 (NEL)
//! - length is counted in UTF-16 code units, so an emoji outside the Basic
//!   Multilingual Plane counts as two
//!

const BYTE_ORDER_MARK: char = '\u{FEFF}';
const NEXT_LINE: char = '\u{0085}';

/// Whether `c` is whitespace for [`trim`].
pub fn is_whitespace(c: char) -> bool {
    match c {
        BYTE_ORDER_MARK => true,
        NEXT_LINE => false,
        _ => c.is_whitespace(),
    }
}

/// Strips leading and trailing whitespace as defined by [`is_whitespace`].
pub fn trim(text: &str) -> &str {
    text.trim_matches(is_whitespace)
}

/// Length of `text` in UTF-16 code units.
pub fn utf16_len(text: &str) -> usize {
    text.encode_utf16().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_strips_byte_order_mark() {
        assert_eq!(trim("\u{FEFF} priya \u{FEFF}"), "priya");
        assert_eq!(trim("\u{FEFF}"), "");
    }

    #[test]
    fn test_trim_keeps_next_line() {
        assert_eq!(trim("\u{0085}bank\u{0085}"), "\u{0085}bank\u{0085}");
    }

    #[test]
    fn test_trim_common_whitespace() {
        assert_eq!(trim("\t\r\n \u{00A0}pension\u{3000}\u{2028}"), "pension");
    }

    #[test]
    fn test_utf16_len() {
        assert_eq!(utf16_len("xyz"), 3);
        // Devanagari stays in the Basic Multilingual Plane.
        assert_eq!(utf16_len("सहायता"), 6);
        // Each 🙏 is a surrogate pair.
        assert_eq!(utf16_len("🙏🙏🙏🙏"), 8);
    }
}
