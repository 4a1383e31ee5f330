use std::io::Write;

use tempfile::NamedTempFile;

/// International Morse code for A-Z, one pair per line.
pub const LATIN: &str = "\
A .-
B -...
C -.-.
D -..
E .
F ..-.
G --.
H ....
I ..
J .---
K -.-
L .-..
M --
N -.
O ---
P .--.
Q --.-
R .-.
S ...
T -
U ..-
V ...-
W .--
X -..-
Y -.--
Z --..
";

pub fn definition_file(contents: &str) -> NamedTempFile {
    let mut file: NamedTempFile = NamedTempFile::new().expect("failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("failed to write definition");
    file
}

pub fn latin_file() -> NamedTempFile {
    definition_file(LATIN)
}
