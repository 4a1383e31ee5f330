use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MorseError {
    /// The definition file could not be opened.
    #[error("definition source '{}' is unavailable: {source}", path.display())]
    DefinitionSourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The definition file was opened but could not be read to the end.
    #[error("failed to read definition source: {0}")]
    DefinitionRead(#[source] io::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl MorseError {
    /// True for the failures that leave the translator without a table.
    pub fn is_definition_error(&self) -> bool {
        matches!(
            self,
            MorseError::DefinitionSourceUnavailable { .. } | MorseError::DefinitionRead(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, MorseError>;

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

    fn not_found() -> io::Error {
        io::Error::new(io::ErrorKind::NotFound, "no such file")
    }

    #[test]
    fn definition_errors_are_recognized() {
        let unavailable: MorseError = MorseError::DefinitionSourceUnavailable {
            path: PathBuf::from("morse.txt"),
            source: not_found(),
        };
        assert!(unavailable.is_definition_error());
        assert!(MorseError::DefinitionRead(not_found()).is_definition_error());
        assert!(!MorseError::Io(not_found()).is_definition_error());
    }

    #[test]
    fn unavailable_message_names_the_path() {
        let err: MorseError = MorseError::DefinitionSourceUnavailable {
            path: PathBuf::from("codes/morse.txt"),
            source: not_found(),
        };
        assert_eq!(
            err.to_string(),
            "definition source 'codes/morse.txt' is unavailable: no such file"
        );
    }
}
