//! # Listing Loader Tests

use std::io::Write as _;

use mipsim_core::asm::Program;
use mipsim_core::common::{DecodeError, LoadError};
use mipsim_core::sim::loader::{
    counts_match, load_listing, load_listing_program, load_source, parse_hex_listing,
};
use pretty_assertions::assert_eq;
use tempfile::NamedTempFile;

use crate::common::fixtures;

#[test]
fn test_parse_skips_comments_and_blank_lines() {
    let words = parse_hex_listing("# header\n20080023\n\n  0x1000FFFF  \n#trailer\n").unwrap();
    assert_eq!(words, vec![0x2008_0023, 0x1000_FFFF]);
}

#[test]
fn test_parse_rejects_bad_words() {
    for (text, line) in [("20080023\nxyz\n", 2), ("123456789\n", 1), ("-1\n", 1), ("0x\n", 1)] {
        match parse_hex_listing(text) {
            Err(LoadError::BadHexWord { line: got, .. }) => assert_eq!(got, line, "{text:?}"),
            other => panic!("{text:?}: expected BadHexWord, got {other:?}"),
        }
    }
}

#[test]
fn test_parse_empty_listing() {
    assert!(matches!(parse_hex_listing("# only comments\n\n"), Err(LoadError::Empty)));
}

#[test]
fn test_from_words_reports_the_bad_index() {
    let err = Program::from_words(&[0x2008_0023, 0x0800_0000]).unwrap_err();
    assert!(matches!(
        err,
        LoadError::Decode {
            index: 1,
            source: DecodeError::IllegalInstruction { word: 0x0800_0000 },
        }
    ));
    assert!(matches!(Program::from_words(&[]), Err(LoadError::Empty)));
}

#[test]
fn test_from_words_gives_disassembled_source_lines() {
    let program = Program::from_words(&[0x2008_0023]).unwrap();
    let line = program.source_line(0).unwrap();
    assert_eq!(line.line, 1);
    assert_eq!(line.text, "addi $t0, $zero, 35");
    assert!(program.symbols().is_empty());
}

#[test]
fn test_load_listing_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(fixtures::COUNTING_LOOP_LISTING.as_bytes())
        .unwrap();

    let words = load_listing(file.path()).unwrap();
    assert_eq!(words.len(), 7);
    let program = load_listing_program(file.path()).unwrap();
    assert_eq!(program.encode(), words);
}

#[test]
fn test_load_source_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(fixtures::MEMORY.as_bytes()).unwrap();
    assert_eq!(load_source(file.path()).unwrap(), fixtures::MEMORY);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.txt");
    assert!(matches!(load_listing(&missing), Err(LoadError::Io(_))));
    assert!(matches!(load_source(&missing), Err(LoadError::Io(_))));
}

#[test]
fn test_counts_match() {
    let two = Program::from_words(&[0x2008_0023, 0x1000_FFFF]).unwrap();
    let one = Program::from_words(&[0x2008_0023]).unwrap();
    assert!(counts_match(&two, &two.clone()));
    assert!(!counts_match(&two, &one));
}
