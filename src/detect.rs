//! Special-character detection and normalization summaries.
//!
//! Pure diagnostics over raw/normalized text pairs. Nothing here is
//! persisted; reports are recomputed on demand from their inputs.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static RE_LATEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\\\$[^$]*\\\$").unwrap());
static RE_HTML_ENTITIES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&[a-zA-Z0-9#]+;").unwrap());
static RE_UNICODE_ESCAPES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\u[0-9a-fA-F]{4}").unwrap());
static RE_CONTROL_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\x00-\x1F\x7F-\x{9F}]").unwrap());
static RE_NBSP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\x{A0}").unwrap());
static RE_FULL_WIDTH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\x{FF01}-\x{FF5E}]").unwrap());
static RE_COMBINING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\x{0300}-\x{036F}\x{1AB0}-\x{1AFF}\x{20D0}-\x{20FF}]").unwrap()
});

/// De-duplicated matches per special-character category.
///
/// Each list preserves first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialCharacterReport {
    /// Dollar-delimited LaTeX markup in raw OCR form (`\$...\$`).
    pub latex: Vec<String>,
    /// Undecoded HTML entities (`&copy;`, `&#xa0;`).
    pub html_entities: Vec<String>,
    /// Literal `\uXXXX` escape sequences.
    pub unicode_escapes: Vec<String>,
    /// C0/C1 control characters.
    pub control_chars: Vec<String>,
    /// Non-breaking spaces (U+00A0).
    pub non_breaking_spaces: Vec<String>,
    /// Fullwidth ASCII variants (U+FF01..U+FF5E).
    pub full_width_chars: Vec<String>,
    /// Combining diacritical marks.
    pub combining_marks: Vec<String>,
}

impl SpecialCharacterReport {
    /// Total number of distinct matches across all categories.
    pub fn total(&self) -> usize {
        self.latex.len()
            + self.html_entities.len()
            + self.unicode_escapes.len()
            + self.control_chars.len()
            + self.non_breaking_spaces.len()
            + self.full_width_chars.len()
            + self.combining_marks.len()
    }

    /// Returns true when no category matched.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

fn unique_matches(re: &Regex, text: &str) -> Vec<String> {
    let mut seen = Vec::new();
    for m in re.find_iter(text) {
        if !seen.iter().any(|s: &String| s == m.as_str()) {
            seen.push(m.as_str().to_string());
        }
    }
    seen
}

/// Scans text for special-character categories.
///
/// # Example
///
/// ```
/// use lexnorm::detect::detect;
///
/// let report = detect(r"\$\cdot\$ &copy; Ｆｕｌｌ");
/// assert_eq!(report.latex, vec![r"\$\cdot\$"]);
/// assert_eq!(report.html_entities, vec!["&copy;"]);
/// assert_eq!(report.full_width_chars.len(), 3);
/// ```
pub fn detect(text: &str) -> SpecialCharacterReport {
    SpecialCharacterReport {
        latex: unique_matches(&RE_LATEX, text),
        html_entities: unique_matches(&RE_HTML_ENTITIES, text),
        unicode_escapes: unique_matches(&RE_UNICODE_ESCAPES, text),
        control_chars: unique_matches(&RE_CONTROL_CHARS, text),
        non_breaking_spaces: unique_matches(&RE_NBSP, text),
        full_width_chars: unique_matches(&RE_FULL_WIDTH, text),
        combining_marks: unique_matches(&RE_COMBINING, text),
    }
}

/// Before/after statistics for one normalization pass.
///
/// Lengths are in UTF-16 code units, the indexing convention of the
/// analysis service that consumes the normalized text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizationSummary {
    pub original_length: usize,
    pub normalized_length: usize,
    /// True iff the lengths differ. A deliberate, documented imprecision:
    /// equal-length rewrites are reported as unchanged.
    pub changed: bool,
    /// Distinct special-character matches found in the original.
    pub total_special_chars: usize,
    /// `normalized / original * 100` to one decimal place; `"100.0"` when
    /// nothing changed.
    pub efficiency: String,
}

/// Compares an original/normalized text pair.
pub fn summarize(original: &str, normalized: &str) -> NormalizationSummary {
    let original_length = original.encode_utf16().count();
    let normalized_length = normalized.encode_utf16().count();
    let changed = original_length != normalized_length;

    let efficiency = if changed {
        format!(
            "{:.1}",
            normalized_length as f64 / original_length as f64 * 100.0
        )
    } else {
        "100.0".to_string()
    };

    NormalizationSummary {
        original_length,
        normalized_length,
        changed,
        total_special_chars: detect(original).total(),
        efficiency,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_latex_and_entities() {
        let report = detect(r"\$\cdot\$ 항목 &nbsp;&amp; \$\cdot\$");
        assert_eq!(report.latex, vec![r"\$\cdot\$"]);
        assert_eq!(report.html_entities, vec!["&nbsp;", "&amp;"]);
    }

    #[test]
    fn detects_control_and_nbsp() {
        let report = detect("제1조\u{0007}본문\u{00A0}끝");
        assert_eq!(report.control_chars, vec!["\u{0007}"]);
        assert_eq!(report.non_breaking_spaces, vec!["\u{00A0}"]);
    }

    #[test]
    fn detects_unicode_escapes_and_combining() {
        let report = detect("escape \\u00a0 mark e\u{0301}");
        assert_eq!(report.unicode_escapes, vec!["\\u00a0"]);
        assert_eq!(report.combining_marks, vec!["\u{0301}"]);
    }

    #[test]
    fn deduplicates_preserving_first_seen_order() {
        let report = detect("ＢＡＢ");
        assert_eq!(report.full_width_chars, vec!["Ｂ", "Ａ"]);
    }

    #[test]
    fn clean_text_is_empty_report() {
        let report = detect("제1조 (목적) 이 계약은 갑과 을 사이의 권리를 정한다.");
        assert!(report.is_empty());
    }

    #[test]
    fn summary_unchanged_text() {
        let text = "동일한 내용";
        let summary = summarize(text, text);
        assert!(!summary.changed);
        assert_eq!(summary.efficiency, "100.0");
        assert_eq!(summary.original_length, summary.normalized_length);
    }

    #[test]
    fn summary_shrinking_text() {
        // 100 units down to 97.
        let original = "a".repeat(100);
        let normalized = "a".repeat(97);
        let summary = summarize(&original, &normalized);
        assert!(summary.changed);
        assert_eq!(summary.original_length, 100);
        assert_eq!(summary.normalized_length, 97);
        assert_eq!(summary.efficiency, "97.0");
    }

    #[test]
    fn summary_equal_length_rewrite_reports_unchanged() {
        // Known limitation, kept on purpose: same length means "unchanged".
        let summary = summarize("abcd", "wxyz");
        assert!(!summary.changed);
        assert_eq!(summary.efficiency, "100.0");
    }

    #[test]
    fn summary_lengths_are_utf16_units() {
        // U+1D11E is two UTF-16 code units.
        let summary = summarize("\u{1D11E}", "");
        assert_eq!(summary.original_length, 2);
    }

    #[test]
    fn summary_counts_special_chars_in_original() {
        let summary = summarize(r"\$\cdot\$ &amp;", "· &");
        assert_eq!(summary.total_special_chars, 2);
    }
}
