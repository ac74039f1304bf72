//! Normalization pipeline entry points.
//!
//! Raw OCR text flows through decoding, typography, legal-symbol, and
//! list-reformatting stages in that order. Every entry point is a pure
//! function of (text, options); stage boundaries emit `tracing` events
//! for observability without being part of the contract.

use crate::decode::decode_and_canonicalize;
use crate::error::Result;
use crate::legal::apply_legal_symbols;
use crate::lists::reformat_lists;
use crate::options::{NormalizationLevel, NormalizationOptions};
use crate::typography::apply_typography;
use std::path::Path;
use tracing::debug;

/// Decodes, canonicalizes, and applies typography at the given level.
///
/// The base pipeline shared by all profiles: entity decoding and NFKC run
/// unconditionally, cosmetic substitution only when `level` is not `Off`.
pub fn normalize_legal_text(raw: &str, level: NormalizationLevel) -> String {
    let decoded = decode_and_canonicalize(raw);
    debug!(
        stage = "decode",
        before = raw.encode_utf16().count(),
        after = decoded.encode_utf16().count(),
    );

    let shaped = apply_typography(&decoded, level);
    debug!(
        stage = "typography",
        %level,
        before = decoded.encode_utf16().count(),
        after = shaped.encode_utf16().count(),
    );

    shaped
}

/// Runs the full contract-text pipeline.
///
/// # Example
///
/// ```
/// use lexnorm::{normalize_contract_text, NormalizationOptions};
///
/// let out = normalize_contract_text(r"$\cdot$ 손해배상...", &NormalizationOptions::safe());
/// assert_eq!(out, "· 손해배상…");
/// ```
pub fn normalize_contract_text(raw: &str, options: &NormalizationOptions) -> String {
    let mut s = normalize_legal_text(raw, options.typography);

    if options.legal_symbols {
        let rewritten = apply_legal_symbols(&s);
        debug!(
            stage = "legal_symbols",
            before = s.encode_utf16().count(),
            after = rewritten.encode_utf16().count(),
        );
        s = rewritten;
    }

    if options.list_formatting {
        let reformatted = reformat_lists(&s, options.list_profile);
        debug!(
            stage = "lists",
            profile = ?options.list_profile,
            before = s.encode_utf16().count(),
            after = reformatted.encode_utf16().count(),
        );
        s = reformatted;
    }

    s
}

/// Reads a file and normalizes its contents.
///
/// The only fallible surface of the pipeline; the transformation itself
/// cannot fail.
pub fn normalize_file(path: impl AsRef<Path>, options: &NormalizationOptions) -> Result<String> {
    let raw = std::fs::read_to_string(path)?;
    Ok(normalize_contract_text(&raw, options))
}
