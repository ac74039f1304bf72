//! # lexnorm
//!
//! Normalization of noisy OCR contract text and span-based clause
//! highlighting for Korean legal documents.
//!
//! OCR vendors hand back contract text littered with HTML entities,
//! fullwidth characters, LaTeX math markup around enumeration dots, and
//! run-on checklist idioms. This crate canonicalizes that text for an
//! LLM analysis service, and re-highlights the text against the
//! character-offset spans the service returns.
//!
//! ## Quick Start
//!
//! ```
//! use lexnorm::{normalize_contract_text, NormalizationOptions};
//!
//! let raw = r"체크리스트: 위약금 \$\cdot\$ 지체상금 확인; 종료";
//! let clean = normalize_contract_text(raw, &NormalizationOptions::safe());
//! assert_eq!(clean, "· 위약금 · 지체상금 확인\n종료");
//! ```
//!
//! Highlighting consumes spans computed against the exact buffer they
//! index; segments concatenate back to the input:
//!
//! ```
//! use lexnorm::highlight::{highlight, Span};
//!
//! let segments = highlight("ABCDE", &[Span::new(1, 3)]);
//! let joined: String = segments.iter().map(|s| s.text).collect();
//! assert_eq!(joined, "ABCDE");
//! ```
//!
//! ## Pipeline
//!
//! raw text → entity decode + NFKC → typography → legal symbols → list
//! reformatting. Every stage is a pure `&str -> String` function with no
//! shared state; all calls are safe to run on any thread.

pub mod decode;
pub mod detect;
pub mod error;
pub mod highlight;
pub mod legal;
pub mod lists;
pub mod normalize;
pub mod options;
pub mod typography;

// Re-exports
pub use detect::{NormalizationSummary, SpecialCharacterReport};
pub use error::{Error, Result};
pub use highlight::{ClauseAnnotation, RiskLevel, Segment, Span};
pub use normalize::{normalize_contract_text, normalize_file, normalize_legal_text};
pub use options::{ListProfile, NormalizationLevel, NormalizationOptions};
