//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for qaha
#[derive(Parser, Debug)]
#[command(name = "qaha")]
#[command(author, version, about = "Qur'anic Artificial Hermeneutics Archive viewer")]
#[command(long_about = r#"
qaha compares how different Large Language Models translate and interpret
verses of the Qur'an, side by side.

Without arguments it opens the interactive terminal viewer. With --chapter
and --verse it prints one verse to stdout and exits.

Configuration files are loaded from (in priority order):
1. --config <path>   Explicit config file
2. ./qaha.toml       Project-level config
3. ~/.config/qaha/config.toml   Global config

Example:
  qaha
  qaha --chapter 1 --verse 1
  qaha --chapter 2 --verse 255 -m Claude_opus -m GPT4o
"#)]
pub struct Cli {
    /// Chapter (surah) number for one-shot output
    #[arg(long, value_name = "N")]
    pub chapter: Option<u32>,

    /// Verse (ayah) number for one-shot output
    #[arg(long, value_name = "N")]
    pub verse: Option<u32>,

    /// Models to display, by key (can be specified multiple times; default: all)
    #[arg(short, long, value_name = "MODEL")]
    pub model: Vec<String>,

    /// List the models in the archive catalog and exit
    #[arg(long)]
    pub list_models: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// One-shot console mode instead of the interactive viewer
    pub fn is_one_shot(&self) -> bool {
        self.chapter.is_some() || self.verse.is_some()
    }
}
