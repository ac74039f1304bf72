//! Normalization options and intensity levels.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Intensity of cosmetic typography substitution.
///
/// `Off` disables all cosmetic substitution; entity decoding and NFKC
/// canonicalization still run upstream regardless of level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NormalizationLevel {
    /// No cosmetic substitutions.
    Off,
    /// Exact-match substitutions that barely change meaning (default).
    #[default]
    Conservative,
    /// Conservative set plus em-dash and list-marker rewriting.
    /// Opt-in: bullet rewriting can misfire on arithmetic or literal hyphens.
    Aggressive,
    /// The most conservative profile, intended for production use.
    Safe,
}

impl FromStr for NormalizationLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "off" => Ok(Self::Off),
            "conservative" => Ok(Self::Conservative),
            "aggressive" => Ok(Self::Aggressive),
            "safe" => Ok(Self::Safe),
            other => Err(Error::InvalidLevel(other.to_string())),
        }
    }
}

impl std::fmt::Display for NormalizationLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Off => "off",
            Self::Conservative => "conservative",
            Self::Aggressive => "aggressive",
            Self::Safe => "safe",
        };
        write!(f, "{}", name)
    }
}

/// How aggressively list reformatting splits and rewrites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListProfile {
    /// Semicolons split only when followed by whitespace and further
    /// content, so numeric runs like "1;2;3" are left alone. No checkbox
    /// rewriting.
    #[default]
    Safe,
    /// Every semicolon before content splits; checkbox glyphs become
    /// middle-dot bullets.
    Contract,
}

impl FromStr for ListProfile {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "safe" => Ok(Self::Safe),
            "contract" => Ok(Self::Contract),
            other => Err(Error::InvalidProfile(other.to_string())),
        }
    }
}

/// Options for a single normalization call.
///
/// Immutable per call; every normalization is a pure function of
/// (text, options) with no shared state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizationOptions {
    /// Typography substitution intensity.
    pub typography: NormalizationLevel,

    /// Whether to rewrite LaTeX-style legal markup (middle dots, ellipses,
    /// spurious math delimiters, R&D spellings).
    pub legal_symbols: bool,

    /// Whether to reformat checklists, semicolon run-ons, and outline
    /// markers.
    pub list_formatting: bool,

    /// Split/rewrite intensity for list reformatting.
    pub list_profile: ListProfile,
}

impl Default for NormalizationOptions {
    fn default() -> Self {
        Self {
            typography: NormalizationLevel::Conservative,
            legal_symbols: true,
            list_formatting: true,
            list_profile: ListProfile::Safe,
        }
    }
}

impl NormalizationOptions {
    /// Creates options with default settings (conservative typography,
    /// safe list profile, everything enabled).
    pub fn new() -> Self {
        Self::default()
    }

    /// The production profile: safe typography and safe list splitting.
    pub fn safe() -> Self {
        Self {
            typography: NormalizationLevel::Safe,
            ..Self::default()
        }
    }

    /// The contract profile: conservative typography, unconditional
    /// semicolon splitting, checkbox rewriting.
    pub fn contract() -> Self {
        Self {
            typography: NormalizationLevel::Conservative,
            list_profile: ListProfile::Contract,
            ..Self::default()
        }
    }

    /// Sets the typography level.
    pub fn with_typography(mut self, level: NormalizationLevel) -> Self {
        self.typography = level;
        self
    }

    /// Disables legal-symbol rewriting.
    pub fn without_legal_symbols(mut self) -> Self {
        self.legal_symbols = false;
        self
    }

    /// Disables list reformatting.
    pub fn without_list_formatting(mut self) -> Self {
        self.list_formatting = false;
        self
    }

    /// Sets the list reformatting profile.
    pub fn with_list_profile(mut self, profile: ListProfile) -> Self {
        self.list_profile = profile;
        self
    }
}
