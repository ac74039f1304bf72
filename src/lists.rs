//! Checklist and list reformatting.
//!
//! Korean contract OCR output carries a recurring "체크리스트:" artifact,
//! checkbox glyphs, semicolon run-on enumerations, and three families of
//! outline markers (가. 나. 다. / a. b. c. / 1. 2. 3.). This stage rewrites
//! all of them into a single canonical bullet form.

use crate::options::ListProfile;
use regex::{Captures, Regex};
use std::sync::LazyLock;
use tracing::warn;

/// The enumerated "체크리스트:" spelling variants, applied in order.
///
/// Deliberately an enumeration of narrow patterns rather than one general
/// one, so the token is only collapsed in the contexts actually produced
/// by the OCR vendor (line start, text start, after whitespace or a line
/// break, with or without space before the colon).
static CHECKLIST_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"체크리스트\s*:",
        r"체크리스트:",
        r"(?m)^체크리스트\s*:",
        r"(?m)^체크리스트:",
        r"\n체크리스트\s*:",
        r"\n체크리스트:",
        r"\r\n체크리스트\s*:",
        r"\r\n체크리스트:",
        r"\s+체크리스트\s*:",
        r"\s+체크리스트:",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

static RE_CHECKBOX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[✓☐□]\s*").unwrap());

/// Safe split: semicolon, at least one whitespace, then content. The
/// captured content character stands in for a lookahead (the regex crate
/// has none) and is re-emitted by the replacement.
static RE_SEMICOLON_SAFE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r";\s+(\S)").unwrap());

/// Contract split: semicolon before any content, whitespace optional.
static RE_SEMICOLON_ALL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r";\s*(\S)").unwrap());

static RE_SEMICOLON_TRAILING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r";\s*$").unwrap());

static RE_MARKER_KOREAN_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*[가-힣]\.\s+").unwrap());

/// Korean enumeration particles also appear mid-line after a clause title
/// ("제2조 가. 내용"); a preceding blank qualifies them as markers.
static RE_MARKER_KOREAN_INLINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([ \t])[가-힣]\.\s+").unwrap());

static RE_MARKER_LATIN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?mi)^\s*[a-z]\.\s+").unwrap());

static RE_MARKER_NUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*\d+\.\s+").unwrap());

/// Collapses every enumerated "체크리스트:" variant to a middle-dot bullet.
pub fn convert_checklist(text: &str) -> String {
    let mut s = text.to_string();
    for pattern in CHECKLIST_PATTERNS.iter() {
        s = pattern.replace_all(&s, "·").into_owned();
    }
    s
}

/// Reformats checklists, semicolon run-ons, and outline markers.
///
/// The `Safe` profile only splits semicolons followed by whitespace and
/// further content, leaving numeric runs like "1;2;3" intact; `Contract`
/// splits on every semicolon before content and additionally rewrites
/// checkbox glyphs. Both remove a bare trailing semicolon.
///
/// # Example
///
/// ```
/// use lexnorm::lists::reformat_lists;
/// use lexnorm::ListProfile;
///
/// let out = reformat_lists("예외사항; 확인필요; 종료", ListProfile::Safe);
/// assert_eq!(out, "예외사항\n확인필요\n종료");
/// ```
pub fn reformat_lists(text: &str, profile: ListProfile) -> String {
    let before = text.encode_utf16().count();

    let mut s = convert_checklist(text);

    if profile == ListProfile::Contract {
        s = RE_CHECKBOX.replace_all(&s, "· ").into_owned();
    }

    let semicolon = match profile {
        ListProfile::Safe => &RE_SEMICOLON_SAFE,
        ListProfile::Contract => &RE_SEMICOLON_ALL,
    };
    s = semicolon.replace_all(&s, "\n${1}").into_owned();
    s = RE_SEMICOLON_TRAILING.replace(&s, "").into_owned();

    s = RE_MARKER_KOREAN_LINE.replace_all(&s, "• ").into_owned();
    s = RE_MARKER_KOREAN_INLINE
        .replace_all(&s, |caps: &Captures| format!("{}• ", &caps[1]))
        .into_owned();
    s = RE_MARKER_LATIN.replace_all(&s, "• ").into_owned();
    s = RE_MARKER_NUMERIC.replace_all(&s, "• ").into_owned();

    let after = s.encode_utf16().count();
    if before != after {
        warn!(
            before,
            after,
            delta = after as i64 - before as i64,
            "list formatting changed text length"
        );
    }

    s
}
