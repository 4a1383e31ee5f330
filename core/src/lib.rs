//! # Morse Core
//!
//! * [`symbol_table`]: the symbol/code association loaded from a definition file.
//! * [`translator`]: single and whole-line conversions in both directions.
//! * [`session`]: the interactive menu loop over any reader/writer.
//! * [`orders`]: customer order records.

pub mod orders;
pub mod session;
pub mod symbol_table;
pub mod translator;

pub use symbol_table::SymbolTable;
pub use translator::{Translation, Translator};
