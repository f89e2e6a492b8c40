//! Command-line definitions for both actions

use clap::Parser;
use launchkit_core::TransformKind;
use std::path::PathBuf;

/// Fetch JSON from a URL and pretty-print it
#[derive(Parser, Debug)]
#[command(name = "fetch-json")]
#[command(version, about = "Fetch JSON from a URL and pretty-print it", long_about = None)]
pub struct FetchCli {
    /// Endpoint URL (default: https://api.github.com, or the configured default)
    pub endpoint: Option<String>,

    /// Extra positional arguments are accepted and ignored
    #[arg(hide = true)]
    pub ignored: Vec<String>,

    /// Request timeout in seconds (overrides config file)
    #[arg(short, long)]
    pub timeout: Option<u64>,

    /// Print non-ASCII characters as-is instead of \uXXXX escapes
    #[arg(long)]
    pub unicode: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Transform the clipboard text in place
#[derive(Parser, Debug)]
#[command(name = "clipboard-transform")]
#[command(version, about = "Transform the clipboard text in place", long_about = None)]
pub struct ClipboardCli {
    /// Transform to apply (overrides config file)
    #[arg(short, long, value_enum)]
    pub transform: Option<TransformArg>,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Flags shared by every action
#[derive(clap::Args, Debug, Default)]
pub struct CommonArgs {
    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Don't load config file
    #[arg(long)]
    pub no_config: bool,

    /// Config file path (default: ~/.config/launchkit/config.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum TransformArg {
    /// Convert to uppercase
    Uppercase,
    /// Convert to lowercase
    Lowercase,
    /// Capitalise every word
    Titlecase,
    /// Strip surrounding whitespace
    Trim,
}

impl From<&TransformArg> for TransformKind {
    fn from(arg: &TransformArg) -> Self {
        match arg {
            TransformArg::Uppercase => TransformKind::Uppercase,
            TransformArg::Lowercase => TransformKind::Lowercase,
            TransformArg::Titlecase => TransformKind::Titlecase,
            TransformArg::Trim => TransformKind::Trim,
        }
    }
}
