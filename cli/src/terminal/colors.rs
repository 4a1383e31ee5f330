use colored::Color;

pub const PRIMARY: Color = Color::BrightGreen;
pub const ACCENT: Color = Color::Yellow;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;

pub const SYMBOL: Color = Color::BrightCyan;
pub const CODE: Color = Color::BrightYellow;
pub const PRICE: Color = Color::Green;
