use crate::commands::translate;
use crate::terminal::print;
use morse_common::config::Config;
use morse_common::success;
use morse_core::{SymbolTable, Translator};

const GRID_COLUMNS: usize = 4;

pub fn table(cfg: &Config) -> anyhow::Result<()> {
    let translator: Translator = translate::load(cfg)?;
    let table: &SymbolTable = translator.table();

    print::section("definition table", cfg);

    for row in print::symbol_grid(table.iter(), GRID_COLUMNS) {
        print::print(&format!("  {row}"));
    }

    success!("{} of {} slots in use", table.len(), table.capacity());
    Ok(())
}
