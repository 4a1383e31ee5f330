use std::io::Cursor;

use morse_common::config::Config;
use morse_core::session::{InteractiveSession, SessionSummary};
use tempfile::NamedTempFile;

use crate::util;

fn run(cfg: &Config, input: &str) -> (SessionSummary, String) {
    let mut output: Vec<u8> = Vec::new();
    let summary: SessionSummary =
        InteractiveSession::with_config(Cursor::new(input.to_string()), &mut output, cfg)
            .run()
            .unwrap();
    (summary, String::from_utf8(output).unwrap())
}

#[test]
fn full_session_over_latin_table() {
    let file: NamedTempFile = util::latin_file();
    let cfg: Config = Config {
        definition: Some(file.path().to_path_buf()),
        ..Config::default()
    };

    let (summary, output) = run(&cfg, "2\nhello\n1\n.-- --- .-. .-.. -..\n3\n");

    assert!(summary.table_loaded);
    assert_eq!(summary.conversions, 2);
    assert!(output.contains("Result: .... . .-.. .-.. ---\n"));
    assert!(output.contains("Result: WORLD\n"));
    assert!(output.ends_with("Thank you!\n"));
}

#[test]
fn filename_prompt_is_used_without_config() {
    let file: NamedTempFile = util::definition_file("A .-\nB -...\n");
    let input: String = format!("{}\n1\n-... .-\n3\n", file.path().display());

    let (summary, output) = run(&Config::default(), &input);

    assert!(summary.table_loaded);
    assert!(output.starts_with("Input filename: "));
    assert!(output.contains("Result: BA\n"));
}

#[test]
fn unreadable_definition_keeps_session_alive() {
    let dir = tempfile::tempdir().unwrap();
    let cfg: Config = Config {
        definition: Some(dir.path().join("absent.txt")),
        ..Config::default()
    };

    let (summary, output) = run(&cfg, "1\n.-\n9\n3\n");

    assert!(!summary.table_loaded);
    let load_error: &str = summary.load_error.as_deref().unwrap_or_default();
    assert!(load_error.starts_with("definition source"), "got: {load_error}");
    assert!(load_error.contains("absent.txt"), "got: {load_error}");
    assert_eq!(summary.conversions, 1);
    assert_eq!(summary.rejected_choices, 1);
    assert!(output.contains("Result: \n"));
    assert!(output.contains("Invalid input. Please try again.\n"));
}
