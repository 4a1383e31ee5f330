use std::path::PathBuf;

/// Definition file used when nothing else was configured.
pub const DEFAULT_DEFINITION_FILE: &str = "morse.txt";

/// Separator placed between codes when encoding a line of text.
pub const DEFAULT_SEPARATOR: &str = " ";

#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the definition source (symbol/code token pairs).
    ///
    /// `None` means the interactive session asks for it on startup.
    pub definition: Option<PathBuf>,
    /// Placed between consecutive codes in encoded output.
    pub separator: String,
    /// 0 prints everything, 1 hides decorations, 2 only results and errors.
    pub quiet: u8,
    pub no_banner: bool,
}

impl Config {
    /// The configured definition path, or [`DEFAULT_DEFINITION_FILE`].
    pub fn definition_or_default(&self) -> PathBuf {
        self.definition
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DEFINITION_FILE))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            definition: None,
            separator: DEFAULT_SEPARATOR.to_string(),
            quiet: 0,
            no_banner: false,
        }
    }
}
