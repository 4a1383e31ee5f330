//! Character to code conversion on top of a [`SymbolTable`].
//!
//! Single lookups return `None` on a miss; whole-line conversions collect
//! the misses in [`Translation::misses`] instead of rendering them.

use std::path::Path;

use morse_common::config::DEFAULT_SEPARATOR;
use morse_common::error::Result;

use crate::symbol_table::SymbolTable;

/// Output of converting a whole line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Translation {
    pub output: String,
    /// Input units that had no mapping, in input order.
    pub misses: Vec<String>,
}

impl Translation {
    pub fn is_complete(&self) -> bool {
        self.misses.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct Translator {
    table: SymbolTable,
    separator: String,
}

impl Translator {
    pub fn new(table: SymbolTable) -> Self {
        Self {
            table,
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }

    /// A translator without a table. Every lookup misses.
    pub fn empty() -> Self {
        Self::new(SymbolTable::new())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(SymbolTable::load(path)?))
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn table(&self) -> &SymbolTable {
        &self.table
    }

    /// Exact-case lookup of a single symbol.
    pub fn encode(&self, character: char) -> Option<&str> {
        self.table.code_for(character)
    }

    pub fn decode(&self, code: &str) -> Option<char> {
        self.table.symbol_for(code)
    }

    /// Upper-cases `text` and encodes every non-whitespace character.
    pub fn encode_text(&self, text: &str) -> Translation {
        let mut codes: Vec<&str> = Vec::new();
        let mut misses: Vec<String> = Vec::new();

        for character in text.chars().filter(|c| !c.is_whitespace()) {
            for upper in character.to_uppercase() {
                match self.encode(upper) {
                    Some(code) => codes.push(code),
                    None => misses.push(upper.to_string()),
                }
            }
        }

        Translation {
            output: codes.join(&self.separator),
            misses,
        }
    }

    /// Decodes every whitespace-delimited code in `codes`.
    pub fn decode_text(&self, codes: &str) -> Translation {
        let mut output: String = String::new();
        let mut misses: Vec<String> = Vec::new();

        for code in codes.split_whitespace() {
            match self.decode(code) {
                Some(symbol) => output.push(symbol),
                None => misses.push(code.to_string()),
            }
        }

        Translation { output, misses }
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
