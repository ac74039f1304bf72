//! lexnorm CLI - OCR contract text normalization tool
//!
//! Normalizes noisy OCR contract text and inspects special-character
//! artifacts for Korean legal documents.

use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use lexnorm::{
    detect, normalize_contract_text, ListProfile, NormalizationLevel, NormalizationOptions,
};
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

/// OCR contract text normalization and inspection
#[derive(Parser)]
#[command(
    name = "lexnorm",
    author = "iyulab",
    version,
    about = "Normalize OCR contract text for analysis",
    long_about = "lexnorm - OCR contract text normalization tool.\n\n\
                  Decodes entities, canonicalizes Unicode, rewrites LaTeX-style\n\
                  legal markup, and reformats checklists and outline markers.\n\n\
                  Usage:\n  \
                  lexnorm normalize <file>       Normalize a text file\n  \
                  lexnorm normalize -            Normalize stdin\n  \
                  lexnorm inspect <file>         Report special characters"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize a text file (or stdin with "-")
    #[command(visible_alias = "norm")]
    Normalize {
        /// Input file path, or "-" for stdin
        input: PathBuf,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Typography substitution level
        #[arg(long, default_value = "conservative")]
        level: Level,

        /// List reformatting profile
        #[arg(long, default_value = "safe")]
        profile: Profile,

        /// Skip LaTeX/legal-symbol rewriting
        #[arg(long)]
        no_legal: bool,

        /// Skip checklist and list reformatting
        #[arg(long)]
        no_lists: bool,

        /// Print a before/after summary to stderr
        #[arg(short, long)]
        summary: bool,
    },

    /// Report special characters and normalization statistics as JSON
    Inspect {
        /// Input file path, or "-" for stdin
        input: PathBuf,

        /// Typography substitution level used for the comparison pass
        #[arg(long, default_value = "conservative")]
        level: Level,
    },
}

/// Typography level
#[derive(Clone, Copy, ValueEnum)]
enum Level {
    /// No cosmetic substitutions
    Off,
    /// Exact-match substitutions only (default)
    Conservative,
    /// Adds em-dash and bullet rewriting
    Aggressive,
    /// Most conservative production profile
    Safe,
}

impl From<Level> for NormalizationLevel {
    fn from(level: Level) -> Self {
        match level {
            Level::Off => NormalizationLevel::Off,
            Level::Conservative => NormalizationLevel::Conservative,
            Level::Aggressive => NormalizationLevel::Aggressive,
            Level::Safe => NormalizationLevel::Safe,
        }
    }
}

/// List reformatting profile
#[derive(Clone, Copy, ValueEnum)]
enum Profile {
    /// Split semicolons only before spaced content (default)
    Safe,
    /// Split every semicolon, rewrite checkbox glyphs
    Contract,
}

impl From<Profile> for ListProfile {
    fn from(profile: Profile) -> Self {
        match profile {
            Profile::Safe => ListProfile::Safe,
            Profile::Contract => ListProfile::Contract,
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Normalize {
            input,
            output,
            level,
            profile,
            no_legal,
            no_lists,
            summary,
        } => {
            let raw = read_input(&input)?;

            let mut options = NormalizationOptions::new()
                .with_typography(level.into())
                .with_list_profile(profile.into());
            if no_legal {
                options = options.without_legal_symbols();
            }
            if no_lists {
                options = options.without_list_formatting();
            }

            let normalized = normalize_contract_text(&raw, &options);

            if summary {
                print_summary(&raw, &normalized);
            }

            match output {
                Some(path) => {
                    fs::write(&path, &normalized)?;
                    eprintln!("{} {}", "Written:".green().bold(), path.display());
                }
                None => {
                    io::stdout().write_all(normalized.as_bytes())?;
                }
            }
        }

        Commands::Inspect { input, level } => {
            let raw = read_input(&input)?;
            let options = NormalizationOptions::new().with_typography(level.into());
            let normalized = normalize_contract_text(&raw, &options);

            let report = detect::detect(&raw);
            let summary = detect::summarize(&raw, &normalized);

            let out = serde_json::json!({
                "special_characters": report,
                "summary": summary,
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
    }

    Ok(())
}

fn read_input(path: &PathBuf) -> io::Result<String> {
    if path.as_os_str() == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        fs::read_to_string(path)
    }
}

fn print_summary(raw: &str, normalized: &str) {
    let summary = detect::summarize(raw, normalized);
    eprintln!(
        "{} {} -> {} units ({}%), {} special chars, changed: {}",
        "Summary:".cyan().bold(),
        summary.original_length,
        summary.normalized_length,
        summary.efficiency,
        summary.total_special_chars,
        summary.changed,
    );
}
