//! Entity decoding and Unicode canonicalization.
//!
//! The first pipeline stage. OCR output routinely arrives with raw HTML
//! entities (`&copy;`, `&gt;`), fullwidth Latin, mixed line endings, and
//! non-breaking spaces. This stage flattens all of that into canonical
//! UTF-8 before any cosmetic substitution runs.

use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

static RE_TRAILING_BLANKS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ \t]+\n").unwrap());

/// Decodes HTML entities and applies Unicode/whitespace canonicalization.
///
/// - Named and numeric entities become their literal characters; malformed
///   entities are left as literal text.
/// - NFKC normalization (fullwidth forms to ASCII, compatibility ligatures
///   to base letters).
/// - CRLF and lone CR become LF.
/// - U+00A0 becomes an ordinary space.
/// - Horizontal whitespace immediately before a newline is stripped.
///
/// Total: every input, including the empty string, produces a best-effort
/// output.
///
/// # Example
///
/// ```
/// use lexnorm::decode::decode_and_canonicalize;
///
/// assert_eq!(decode_and_canonicalize("&copy; 2024"), "© 2024");
/// assert_eq!(decode_and_canonicalize("Ａ\u{00A0}Ｂ"), "A B");
/// ```
pub fn decode_and_canonicalize(raw: &str) -> String {
    let decoded = html_escape::decode_html_entities(raw);
    let composed: String = decoded.as_ref().nfkc().collect();

    let mut s = String::with_capacity(composed.len());
    let mut chars = composed.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                s.push('\n');
            }
            '\u{00A0}' => s.push(' '),
            other => s.push(other),
        }
    }

    RE_TRAILING_BLANKS.replace_all(&s, "\n").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_named_entities() {
        assert_eq!(decode_and_canonicalize("&lt;계약&gt; &amp; 부속서"), "<계약> & 부속서");
        // NFKC runs after decoding and decomposes the trademark sign.
        assert_eq!(decode_and_canonicalize("&copy;&reg;&trade;"), "©®TM");
    }

    #[test]
    fn decodes_numeric_entities() {
        assert_eq!(decode_and_canonicalize("&#48;&#x31;"), "01");
    }

    #[test]
    fn malformed_entities_pass_through() {
        assert_eq!(decode_and_canonicalize("&notanentity; 유지"), "&notanentity; 유지");
        assert_eq!(decode_and_canonicalize("손해배상 & 면책"), "손해배상 & 면책");
    }

    #[test]
    fn nfkc_folds_fullwidth_ascii() {
        assert_eq!(decode_and_canonicalize("ＡＢＣ１２３"), "ABC123");
    }

    #[test]
    fn line_endings_become_lf() {
        assert_eq!(decode_and_canonicalize("제1조\r\n제2조\r제3조"), "제1조\n제2조\n제3조");
    }

    #[test]
    fn nbsp_becomes_space() {
        assert_eq!(decode_and_canonicalize("갑\u{00A0}을"), "갑 을");
    }

    #[test]
    fn trailing_blanks_stripped_before_newline() {
        assert_eq!(decode_and_canonicalize("제1조  \t\n제2조"), "제1조\n제2조");
    }

    #[test]
    fn empty_input_is_empty_output() {
        assert_eq!(decode_and_canonicalize(""), "");
    }

    #[test]
    fn entity_decoding_runs_before_nfkc() {
        // A fullwidth entity reference survives decoding and is then folded.
        assert_eq!(decode_and_canonicalize("＆ｇｔ；"), "&gt;");
    }
}
