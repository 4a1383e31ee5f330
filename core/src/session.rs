//! # Interactive Session
//!
//! The text menu around a [`Translator`]. Works over any buffered reader and
//! writer so the binary can hand it stdin/stdout and tests can hand it
//! in-memory buffers.
//!
//! Prompts and results go to the writer. Diagnostics (load failures,
//! unmapped input) are `tracing` events and end up wherever the subscriber
//! sends them.

use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;

use morse_common::config::{Config, DEFAULT_DEFINITION_FILE, DEFAULT_SEPARATOR};
use morse_common::error::Result;
use morse_common::{error, success, warn};

use crate::translator::{Translation, Translator};

const MENU: [&str; 3] = [
    "1: Convert Morse to alpha.",
    "2: Convert alpha to Morse.",
    "3: Exit the program.",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Decode,
    Encode,
    Exit,
}

impl FromStr for MenuChoice {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().parse::<u8>() {
            Ok(1) => Ok(MenuChoice::Decode),
            Ok(2) => Ok(MenuChoice::Encode),
            Ok(3) => Ok(MenuChoice::Exit),
            _ => Err(format!("invalid menu choice: {s}")),
        }
    }
}

/// What happened during one run of the menu loop.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionSummary {
    pub table_loaded: bool,
    /// The diagnostic reported when the definition could not be loaded.
    pub load_error: Option<String>,
    pub conversions: usize,
    pub rejected_choices: usize,
}

pub struct InteractiveSession<R, W> {
    input: R,
    output: W,
    definition: Option<PathBuf>,
    separator: String,
}

impl<R: BufRead, W: Write> InteractiveSession<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            definition: None,
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }

    pub fn with_config(input: R, output: W, cfg: &Config) -> Self {
        Self {
            input,
            output,
            definition: cfg.definition.clone(),
            separator: cfg.separator.clone(),
        }
    }

    /// Runs until the user exits or the input ends.
    pub fn run(mut self) -> Result<SessionSummary> {
        let mut summary: SessionSummary = SessionSummary::default();

        let path: PathBuf = match self.definition.take() {
            Some(path) => path,
            None => {
                self.prompt("Input filename: ")?;
                match self.read_line()? {
                    Some(name) if !name.trim().is_empty() => PathBuf::from(name.trim()),
                    Some(_) => PathBuf::from(DEFAULT_DEFINITION_FILE),
                    None => return Ok(summary),
                }
            }
        };

        let translator: Translator = match Translator::load(&path) {
            Ok(translator) => {
                success!(
                    "Loaded {} symbol(s) from {}",
                    translator.table().len(),
                    path.display()
                );
                summary.table_loaded = true;
                translator
            }
            Err(err) if err.is_definition_error() => {
                error!("{err}");
                warn!("Continuing without a table, every lookup will miss");
                summary.load_error = Some(err.to_string());
                Translator::empty()
            }
            Err(err) => return Err(err),
        }
        .with_separator(self.separator.clone());

        for line in MENU {
            writeln!(self.output, "{line}")?;
        }

        loop {
            self.prompt("Make your choice: ")?;
            let Some(choice) = self.read_line()? else {
                break;
            };

            match choice.parse::<MenuChoice>() {
                Ok(MenuChoice::Decode) => {
                    self.prompt("Enter Morse code (with spaces): ")?;
                    let Some(codes) = self.read_line()? else {
                        break;
                    };
                    self.report(&translator.decode_text(&codes))?;
                    summary.conversions += 1;
                }
                Ok(MenuChoice::Encode) => {
                    self.prompt("Enter alpha characters (without spaces): ")?;
                    let Some(letters) = self.read_line()? else {
                        break;
                    };
                    self.report(&translator.encode_text(&letters))?;
                    summary.conversions += 1;
                }
                Ok(MenuChoice::Exit) => {
                    writeln!(self.output, "Thank you!")?;
                    break;
                }
                Err(_) => {
                    writeln!(self.output, "Invalid input. Please try again.")?;
                    summary.rejected_choices += 1;
                }
            }
        }

        self.output.flush()?;
        Ok(summary)
    }

    fn prompt(&mut self, text: &str) -> Result<()> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        Ok(())
    }

    /// Next line without its terminator, `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line: String = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn report(&mut self, translation: &Translation) -> Result<()> {
        writeln!(self.output, "Result: {}", translation.output)?;
        if !translation.is_complete() {
            warn!("No mapping for: {}", translation.misses.join(", "));
        }
        Ok(())
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
