//! # Symbol Table
//!
//! Bidirectional association between single characters and their code
//! strings, loaded once from a definition source.
//!
//! The definition format is a plain stream of whitespace-separated token
//! pairs: `<symbol> <code> <symbol> <code> ...`. The first character of a
//! symbol token is the key; the code token is kept verbatim.
//!
//! Every accepted pair occupies one slot. Lookups go through two direct
//! maps built first-write-wins, so when a symbol or a code appears twice
//! the earlier entry keeps answering.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use morse_common::error::{MorseError, Result};
use morse_common::warn;
use tracing::debug;

/// Slots in a table built with [`SymbolTable::new`].
pub const DEFAULT_CAPACITY: usize = 26;

#[derive(Debug, Clone)]
pub struct SymbolTable {
    capacity: usize,
    entries: Vec<(char, String)>,
    by_symbol: HashMap<char, usize>,
    by_code: HashMap<String, usize>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            entries: Vec::with_capacity(capacity),
            by_symbol: HashMap::with_capacity(capacity),
            by_code: HashMap::with_capacity(capacity),
        }
    }

    /// Appends one association. Returns `false` if every slot is taken.
    pub fn insert(&mut self, symbol: char, code: impl Into<String>) -> bool {
        if self.is_full() {
            return false;
        }

        let code: String = code.into();
        let slot: usize = self.entries.len();

        if let Entry::Vacant(vacant) = self.by_symbol.entry(symbol) {
            vacant.insert(slot);
        } else {
            debug!(%symbol, "duplicate symbol, earlier entry wins");
        }

        if let Entry::Vacant(vacant) = self.by_code.entry(code.clone()) {
            vacant.insert(slot);
        } else {
            debug!(%code, "duplicate code, earlier entry wins");
        }

        self.entries.push((symbol, code));
        true
    }

    /// Builds a table from definition text using the default capacity.
    pub fn parse(text: &str) -> Self {
        Self::parse_with_capacity(text, DEFAULT_CAPACITY)
    }

    pub fn parse_with_capacity(text: &str, capacity: usize) -> Self {
        let mut table: SymbolTable = Self::with_capacity(capacity);
        let mut tokens = text.split_whitespace();
        let mut ignored: usize = 0;

        while let Some(symbol_token) = tokens.next() {
            let Some(code) = tokens.next() else {
                warn!("Definition ends with symbol '{symbol_token}' that has no code, ignoring it");
                break;
            };

            // split_whitespace never yields an empty token
            let symbol: char = symbol_token.chars().next().unwrap_or_default();

            if !table.insert(symbol, code) {
                ignored += 1;
            }
        }

        if ignored > 0 {
            warn!(
                "Definition holds more than {} pairs, {ignored} surplus pair(s) ignored",
                table.capacity
            );
        }

        table
    }

    /// Reads the whole stream, then parses it.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut text: String = String::new();
        reader
            .read_to_string(&mut text)
            .map_err(MorseError::DefinitionRead)?;
        Ok(Self::parse(&text))
    }

    /// Opens and reads a definition file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path: &Path = path.as_ref();
        let file: File = File::open(path).map_err(|source| MorseError::DefinitionSourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;

        let table: SymbolTable = Self::from_reader(file)?;
        debug!(path = %path.display(), entries = table.len(), "definition loaded");
        Ok(table)
    }

    pub fn code_for(&self, symbol: char) -> Option<&str> {
        self.by_symbol
            .get(&symbol)
            .map(|&slot| self.entries[slot].1.as_str())
    }

    pub fn symbol_for(&self, code: &str) -> Option<char> {
        self.by_code.get(code).map(|&slot| self.entries[slot].0)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Entries in insertion order, duplicates included.
    pub fn iter(&self) -> impl Iterator<Item = (char, &str)> {
        self.entries
            .iter()
            .map(|(symbol, code)| (*symbol, code.as_str()))
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
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

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parse_two_pairs() {
        let table: SymbolTable = SymbolTable::parse("A .-\nB -...\n");
        assert_eq!(table.len(), 2);
        assert_eq!(table.code_for('A'), Some(".-"));
        assert_eq!(table.code_for('B'), Some("-..."));
        assert_eq!(table.symbol_for(".-"), Some('A'));
        assert_eq!(table.symbol_for("-..."), Some('B'));
    }

    #[test]
    fn unset_slots_never_match() {
        let table: SymbolTable = SymbolTable::parse("A .-");
        assert_eq!(table.capacity(), DEFAULT_CAPACITY);
        assert_eq!(table.code_for('Z'), None);
        assert_eq!(table.code_for('\0'), None);
        assert_eq!(table.symbol_for(""), None);
        assert_eq!(table.symbol_for("...."), None);
    }

    #[test]
    fn symbol_token_uses_first_character() {
        let table: SymbolTable = SymbolTable::parse("Alpha .- Bravo -...");
        assert_eq!(table.code_for('A'), Some(".-"));
        assert_eq!(table.code_for('B'), Some("-..."));
    }

    #[test]
    fn malformed_code_is_stored_verbatim() {
        let table: SymbolTable = SymbolTable::parse("Q x-?-x");
        assert_eq!(table.code_for('Q'), Some("x-?-x"));
        assert_eq!(table.symbol_for("x-?-x"), Some('Q'));
    }

    #[test]
    fn duplicate_symbol_first_write_wins() {
        let table: SymbolTable = SymbolTable::parse("A .- A ---");
        assert_eq!(table.len(), 2);
        assert_eq!(table.code_for('A'), Some(".-"));
        // the shadowed code still resolves to its own symbol
        assert_eq!(table.symbol_for("---"), Some('A'));
    }

    #[test]
    fn duplicate_code_first_write_wins() {
        let table: SymbolTable = SymbolTable::parse("A .- E .-");
        assert_eq!(table.symbol_for(".-"), Some('A'));
        assert_eq!(table.code_for('E'), Some(".-"));
    }

    #[test]
    fn surplus_pairs_are_ignored() {
        let table: SymbolTable = SymbolTable::parse_with_capacity("A .- B -... C -.-.", 2);
        assert_eq!(table.len(), 2);
        assert!(table.is_full());
        assert_eq!(table.code_for('C'), None);
        assert_eq!(table.symbol_for("-.-."), None);
    }

    #[test]
    fn insert_refuses_when_full() {
        let mut table: SymbolTable = SymbolTable::with_capacity(1);
        assert!(table.insert('A', ".-"));
        assert!(!table.insert('B', "-..."));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn dangling_symbol_is_ignored() {
        let table: SymbolTable = SymbolTable::parse("A .- B");
        assert_eq!(table.len(), 1);
        assert_eq!(table.code_for('B'), None);
    }

    #[test]
    fn empty_definition_gives_empty_table() {
        let table: SymbolTable = SymbolTable::parse(" \n\t ");
        assert!(table.is_empty());
    }

    #[test]
    fn iter_keeps_insertion_order() {
        let table: SymbolTable = SymbolTable::parse("C -.-. A .- B -...");
        let symbols: Vec<char> = table.iter().map(|(symbol, _)| symbol).collect();
        assert_eq!(symbols, vec!['C', 'A', 'B']);
    }

    #[test]
    fn from_reader_rejects_invalid_utf8() {
        let bytes: &[u8] = &[b'A', b' ', 0xff, 0xfe];
        let result = SymbolTable::from_reader(bytes);
        assert!(matches!(result, Err(MorseError::DefinitionRead(_))));
    }

    #[test]
    fn load_missing_file_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");
        match SymbolTable::load(&path) {
            Err(MorseError::DefinitionSourceUnavailable { path: reported, .. }) => {
                assert_eq!(reported, path);
            }
            other => panic!("expected DefinitionSourceUnavailable, got {other:?}"),
        }
    }

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "A .-").unwrap();
        writeln!(file, "B -...").unwrap();

        let table: SymbolTable = SymbolTable::load(file.path()).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.symbol_for("-..."), Some('B'));
    }
}
