//! Terminal output for the `morse` commands.
//!
//! Every line goes out as a `tracing` event under the print target, so the
//! formatter in [`super::logging`] decides where it lands. The `*_line`
//! helpers only lay text out and are kept free of I/O.

use std::fmt::Display;

use colored::*;
use morse_common::config::Config;
use morse_common::log::PRINT_TARGET;
use morse_common::{success, warn};
use morse_core::Translation;
use tracing::info;
use unicode_width::UnicodeWidthStr;

use crate::terminal::{banner, colors};

pub const WIDTH: usize = 64;

/// Gap between two cells of the symbol grid.
const CELL_GAP: usize = 3;

#[macro_export]
macro_rules! mprint {
    () => {
        $crate::terminal::print::print("");
    };
    ($msg:expr) => {
        $crate::terminal::print::print($msg);
    };
}

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, raw_msg = msg);
}

pub fn banner(cfg: &Config) {
    if cfg.no_banner || cfg.quiet > 0 {
        return;
    }
    banner::print();
    section(&format!("morse v{}", env!("CARGO_PKG_VERSION")), cfg);
}

/// `── TITLE ─────...` across the full width.
pub fn section(title: &str, cfg: &Config) {
    if cfg.quiet > 0 {
        return;
    }
    print(&section_line(title));
}

pub fn section_line(title: &str) -> String {
    let title: String = format!(" {} ", title.to_uppercase());
    let rest: usize = WIDTH.saturating_sub(UnicodeWidthStr::width(title.as_str()) + 2);
    format!(
        "{}{}{}",
        "──".color(colors::SEPARATOR),
        title.color(colors::PRIMARY).bold(),
        "─".repeat(rest).color(colors::SEPARATOR)
    )
}

/// `key....: value`, the key padded to `key_width`.
pub fn field_line(key: &str, value: impl Display, key_width: usize) -> String {
    let dots: String = ".".repeat(key_width.saturating_sub(key.len()) + 1);
    format!(
        "{}{}{} {}",
        key.color(colors::PRIMARY),
        dots.color(colors::SEPARATOR),
        ":".color(colors::SEPARATOR),
        value
    )
}

/// Prints key/value rows with their keys aligned to the longest one.
pub fn fields<V: Display>(rows: &[(&str, V)]) {
    let key_width: usize = rows.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
    for (key, value) in rows {
        print(&format!("  {}", field_line(key, value, key_width)));
    }
}

/// Lays symbol/code pairs out in rows of `columns` cells.
pub fn symbol_grid<'a>(
    entries: impl IntoIterator<Item = (char, &'a str)>,
    columns: usize,
) -> Vec<String> {
    let entries: Vec<(char, &str)> = entries.into_iter().collect();
    let code_width: usize = entries.iter().map(|(_, code)| code.len()).max().unwrap_or(0);

    entries
        .chunks(columns.max(1))
        .map(|row| {
            row.iter()
                .map(|(symbol, code)| {
                    let pad: String = " ".repeat(code_width.saturating_sub(code.len()));
                    format!(
                        "{} {}{}",
                        symbol.to_string().color(colors::SYMBOL).bold(),
                        code.color(colors::CODE),
                        pad
                    )
                })
                .collect::<Vec<String>>()
                .join(&" ".repeat(CELL_GAP))
                .trim_end()
                .to_string()
        })
        .collect()
}

/// `  1. item ........ amount`, dot leader up to the full width.
pub fn receipt_line(position: usize, item: &str, amount: &str) -> String {
    let label: String = format!("{position:>3}. {item} ");
    let used: usize = UnicodeWidthStr::width(label.as_str()) + UnicodeWidthStr::width(amount) + 1;
    let leader: String = ".".repeat(WIDTH.saturating_sub(used).max(2));
    format!(
        "{}{} {}",
        label.color(colors::TEXT_DEFAULT),
        leader.color(colors::SEPARATOR),
        amount.color(colors::PRICE)
    )
}

/// Warns about every input unit the table could not map.
pub fn misses(translation: &Translation) {
    if translation.is_complete() {
        return;
    }
    let listed: String = translation
        .misses
        .iter()
        .map(|miss| format!("'{miss}'"))
        .collect::<Vec<String>>()
        .join(", ");
    warn!("No mapping for {listed}");
}

/// Closing rule with a centered message, or a plain success line when quiet.
pub fn closing(msg: &str, cfg: &Config) {
    if cfg.quiet > 0 {
        mprint!();
        success!("{msg}");
        return;
    }

    let space: String = " ".repeat(WIDTH.saturating_sub(console::measure_text_width(msg)) / 2);
    let rule: ColoredString = "═".repeat(WIDTH).color(colors::SEPARATOR);
    print(&rule.to_string());
    print(&format!("{space}{msg}"));
    print(&rule.to_string());
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
