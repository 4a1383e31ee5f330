use morse_common::error::MorseError;
use morse_core::symbol_table::DEFAULT_CAPACITY;
use morse_core::{SymbolTable, Translation, Translator};
use tempfile::NamedTempFile;

use crate::util::{self, LATIN};

#[test]
fn latin_table_fills_every_slot() {
    let file: NamedTempFile = util::latin_file();
    let translator: Translator = Translator::load(file.path()).unwrap();

    assert_eq!(translator.table().len(), DEFAULT_CAPACITY);
    assert!(translator.table().is_full());
}

#[test]
fn every_symbol_round_trips() {
    let translator: Translator = Translator::new(SymbolTable::parse(LATIN));

    for symbol in 'A'..='Z' {
        let code: &str = translator.encode(symbol).unwrap();
        assert_eq!(translator.decode(code), Some(symbol), "symbol {symbol}");
    }
}

#[test]
fn every_code_round_trips() {
    let translator: Translator = Translator::new(SymbolTable::parse(LATIN));

    for (_, code) in translator.table().iter() {
        let symbol: char = translator.decode(code).unwrap();
        assert_eq!(translator.encode(symbol), Some(code));
    }
}

#[test]
fn two_pair_scenario() {
    let file: NamedTempFile = util::definition_file("A .-\nB -...\n");
    let translator: Translator = Translator::load(file.path()).unwrap();

    assert_eq!(translator.encode('A'), Some(".-"));
    assert_eq!(translator.encode('B'), Some("-..."));
    assert_eq!(translator.encode('Z'), None);
    assert_eq!(translator.decode(".-"), Some('A'));
    assert_eq!(translator.decode("...."), None);
}

#[test]
fn missing_source_is_reported_not_panicked() {
    let dir = tempfile::tempdir().unwrap();
    let result = Translator::load(dir.path().join("morse.txt"));

    let err: MorseError = result.unwrap_err();
    assert!(err.is_definition_error());
    assert!(err.to_string().contains("morse.txt"));

    let degraded: Translator = Translator::empty();
    for symbol in 'A'..='Z' {
        assert_eq!(degraded.encode(symbol), None);
    }
    assert_eq!(degraded.decode(".-"), None);
}

#[test]
fn sentence_survives_encode_and_decode() {
    let translator: Translator = Translator::new(SymbolTable::parse(LATIN));

    let encoded: Translation = translator.encode_text("the quick brown fox");
    assert!(encoded.is_complete());
    assert!(encoded.output.starts_with("- .... . --.- ..- .. -.-. -.-"));

    let decoded: Translation = translator.decode_text(&encoded.output);
    assert_eq!(decoded.output, "THEQUICKBROWNFOX");
}

#[test]
fn digits_and_punctuation_miss() {
    let translator: Translator = Translator::new(SymbolTable::parse(LATIN));
    let translation: Translation = translator.encode_text("SOS 911!");

    assert_eq!(translation.output, "... --- ...");
    assert_eq!(translation.misses, vec!["9", "1", "1", "!"]);
}
