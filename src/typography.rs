//! Cosmetic typography substitution.
//!
//! Substitutions are restricted to exact literal patterns so that
//! already-correct Unicode text and code-like content are never corrupted.
//! The aggressive level is opt-in because em-dash and bullet rewriting can
//! misfire on arithmetic expressions or prose hyphens.

use crate::options::NormalizationLevel;
use regex::Regex;
use std::sync::LazyLock;

static RE_ELLIPSIS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.{3}").unwrap());
static RE_TRADEMARK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\(tm\)").unwrap());
static RE_COPYRIGHT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\(c\)").unwrap());
static RE_REGISTERED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\(r\)").unwrap());
static RE_EM_DASH: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"--").unwrap());
static RE_LIST_MARKER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^\s*[-*]\s+").unwrap());

/// Applies cosmetic substitutions at the given intensity level.
///
/// - `Off`: identity.
/// - `Conservative` / `Safe`: `...` → `…`, `(tm)`/`(c)`/`(r)`
///   (case-insensitive) → `™`/`©`/`®`, `<=` → `≤`, `>=` → `≥`.
/// - `Aggressive`: the conservative set plus `--` → `—` and line-leading
///   `-`/`*` markers → `• `.
pub fn apply_typography(text: &str, level: NormalizationLevel) -> String {
    if level == NormalizationLevel::Off {
        return text.to_string();
    }

    let mut s = RE_ELLIPSIS.replace_all(text, "…").into_owned();
    s = RE_TRADEMARK.replace_all(&s, "™").into_owned();
    s = RE_COPYRIGHT.replace_all(&s, "©").into_owned();
    s = RE_REGISTERED.replace_all(&s, "®").into_owned();
    s = s.replace("<=", "≤").replace(">=", "≥");

    if level == NormalizationLevel::Aggressive {
        s = RE_EM_DASH.replace_all(&s, "—").into_owned();
        s = RE_LIST_MARKER.replace_all(&s, "• ").into_owned();
    }

    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::NormalizationLevel::*;

    #[test]
    fn off_is_identity() {
        let input = "... (tm) <= -- * 항목";
        assert_eq!(apply_typography(input, Off), input);
    }

    #[test]
    fn conservative_symbol_set() {
        assert_eq!(
            apply_typography("(tm) (c) (r) <= >=", Conservative),
            "™ © ® ≤ ≥"
        );
    }

    #[test]
    fn case_insensitive_marks() {
        assert_eq!(apply_typography("(TM) (C) (R)", Safe), "™ © ®");
    }

    #[test]
    fn ellipsis_from_three_periods() {
        assert_eq!(apply_typography("이하 생략...", Conservative), "이하 생략…");
        // Four periods: the first three collapse, the fourth stays.
        assert_eq!(apply_typography("....", Conservative), "….");
    }

    #[test]
    fn conservative_leaves_dashes_and_markers() {
        assert_eq!(
            apply_typography("- 항목 -- 범위", Conservative),
            "- 항목 -- 범위"
        );
    }

    #[test]
    fn aggressive_em_dash_and_bullets() {
        assert_eq!(apply_typography("범위 -- 한정", Aggressive), "범위 — 한정");
        assert_eq!(
            apply_typography("- 첫째\n* 둘째", Aggressive),
            "• 첫째\n• 둘째"
        );
    }

    #[test]
    fn safe_matches_conservative_set() {
        let input = "... (c) -- 유지";
        assert_eq!(
            apply_typography(input, Safe),
            apply_typography(input, Conservative)
        );
    }
}
