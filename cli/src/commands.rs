pub mod interactive;
pub mod orders;
pub mod table;
pub mod translate;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use morse_common::config::{Config, DEFAULT_SEPARATOR};

#[derive(Parser)]
#[command(name = "morse")]
#[command(about = "A Morse code translator.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Definition file with symbol/code pairs
    #[arg(short, long, global = true)]
    pub table: Option<PathBuf>,

    /// Placed between codes when encoding
    #[arg(short, long, global = true, default_value = DEFAULT_SEPARATOR)]
    pub separator: String,

    /// Less output, repeat for even less (-qq)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub quiet: u8,

    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the menu driven translator (default)
    #[command(alias = "i")]
    Interactive,
    /// Encode letters to Morse code
    #[command(alias = "e")]
    Encode {
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// Decode whitespace separated Morse code to letters
    ///
    /// Codes starting with '-' go after `--`: `morse decode -- -... .-`
    #[command(alias = "d")]
    Decode {
        #[arg(required = true)]
        code: Vec<String>,
    },
    /// Show the loaded definition table
    #[command(alias = "t")]
    Table,
    /// Run the order records demo
    #[command(alias = "o")]
    Orders,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn to_config(&self) -> Config {
        Config {
            definition: self.table.clone(),
            separator: self.separator.clone(),
            quiet: self.quiet,
            no_banner: self.no_banner,
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
