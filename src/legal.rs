//! Legal-symbol normalization.
//!
//! OCR vendors routinely render contract enumeration dots and ellipses as
//! LaTeX math markup (`$\cdot$`, `\ldots`) and wrap plain text in spurious
//! `$...$` delimiters. This stage rewrites only the enumerated idioms into
//! their Unicode glyphs; unknown commands pass through unchanged.

use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Dollar-delimited LaTeX idioms in raw OCR form: backslash-dollar,
/// command, backslash-dollar (e.g. the literal text `\$\cdot\$`).
static RE_ESCAPED_MATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\\$\\(cdots|cdot|ldots|vdots|square)\\\$").unwrap());

/// Bare LaTeX commands. The optional trailing-letter capture stands in for
/// a negative lookahead (the regex crate has none): a command immediately
/// followed by another letter is a longer unknown command and is left
/// alone rather than truncated.
static RE_BARE_COMMAND: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\(cdots|cdot|ldots|vdots|square)([A-Za-z]?)").unwrap());

/// Inline math delimiters around arbitrary non-dollar content.
static RE_INLINE_MATH: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\$([^$]*)\$").unwrap());

/// R&D written with an escaped ampersand: `(R\&D)`.
static RE_RND_ESCAPED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\(R\\&D\)").unwrap());

/// R&D with stray spacing or lowercase: `(R & D)`, `(r&d)`.
static RE_RND_SPACED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\(R\s*&\s*D\)").unwrap());

fn glyph_for(command: &str) -> &'static str {
    match command {
        "cdot" => "·",
        "cdots" => "⋯",
        "ldots" => "…",
        "vdots" => "⋮",
        "square" => "□",
        _ => unreachable!("command alternation covers all arms"),
    }
}

/// Rewrites enumerated LaTeX legal idioms into plain typography.
///
/// Runs in four passes: escaped dollar-delimited forms, bare commands,
/// inline math delimiter stripping (interior preserved verbatim), and
/// R&D canonicalization. Substitutions are pattern-exact; anything not
/// enumerated passes through unchanged.
///
/// # Example
///
/// ```
/// use lexnorm::legal::apply_legal_symbols;
///
/// assert_eq!(apply_legal_symbols(r"$\cdot$"), "·");
/// assert_eq!(apply_legal_symbols(r"(R\&D) 투자"), "(R&D) 투자");
/// ```
pub fn apply_legal_symbols(text: &str) -> String {
    let mut s = RE_ESCAPED_MATH
        .replace_all(text, |caps: &Captures| glyph_for(&caps[1]).to_string())
        .into_owned();

    s = RE_BARE_COMMAND
        .replace_all(&s, |caps: &Captures| {
            if caps[2].is_empty() {
                glyph_for(&caps[1]).to_string()
            } else {
                // Prefix of a longer command: keep the original text.
                caps[0].to_string()
            }
        })
        .into_owned();

    s = RE_INLINE_MATH.replace_all(&s, "${1}").into_owned();

    s = RE_RND_ESCAPED.replace_all(&s, "(R&D)").into_owned();
    RE_RND_SPACED.replace_all(&s, "(R&D)").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escaped_dollar_forms() {
        assert_eq!(apply_legal_symbols(r"\$\cdot\$"), "·");
        assert_eq!(apply_legal_symbols(r"\$\cdots\$"), "⋯");
        assert_eq!(apply_legal_symbols(r"\$\ldots\$"), "…");
        assert_eq!(apply_legal_symbols(r"\$\vdots\$"), "⋮");
        assert_eq!(apply_legal_symbols(r"\$\square\$"), "□");
    }

    #[test]
    fn bare_commands() {
        assert_eq!(apply_legal_symbols(r"제1호 \cdot 제2호"), "제1호 · 제2호");
        assert_eq!(apply_legal_symbols(r"\cdots\vdots"), "⋯⋮");
    }

    #[test]
    fn dollar_wrapped_bare_command() {
        // The bare command fires inside the delimiters, then the
        // delimiters are stripped.
        assert_eq!(apply_legal_symbols(r"$\cdot$"), "·");
    }

    #[test]
    fn longer_unknown_commands_pass_through() {
        assert_eq!(apply_legal_symbols(r"\cdotp"), r"\cdotp");
        assert_eq!(apply_legal_symbols(r"\squared"), r"\squared");
        assert_eq!(apply_legal_symbols(r"\ldotsep"), r"\ldotsep");
    }

    #[test]
    fn adjacent_commands_both_fire() {
        assert_eq!(apply_legal_symbols(r"\cdot\cdot"), "··");
    }

    #[test]
    fn inline_math_content_preserved() {
        assert_eq!(apply_legal_symbols("$제3조 내용$"), "제3조 내용");
        assert_eq!(apply_legal_symbols("$ 공백 포함 $"), " 공백 포함 ");
        // Unpaired dollar stays.
        assert_eq!(apply_legal_symbols("금액 $100"), "금액 $100");
    }

    #[test]
    fn rnd_spellings_canonicalized() {
        assert_eq!(apply_legal_symbols(r"(R\&D)"), "(R&D)");
        assert_eq!(apply_legal_symbols("(R & D)"), "(R&D)");
        assert_eq!(apply_legal_symbols("(r&d)"), "(R&D)");
        assert_eq!(apply_legal_symbols("(R&D)"), "(R&D)");
    }

    #[test]
    fn unrelated_text_unchanged() {
        let input = "제5조 (손해배상) 갑은 을에게 배상한다.";
        assert_eq!(apply_legal_symbols(input), input);
    }
}
