use colored::*;

use crate::terminal::print;

const BANNER: &str = r#"
   -- --- .-. ... .
    __  __    ___    ____    ____    _____
   |  \/  |  / _ \  |  _ \  / ___|  | ____|
   | |\/| | | | | | | |_) | \___ \  |  _|
   | |  | | | |_| | |  _ <   ___) | | |___
   |_|  |_|  \___/  |_| \_\ |____/  |_____|
"#;

pub fn print() {
    print::print(&BANNER.bright_green().to_string());
}
