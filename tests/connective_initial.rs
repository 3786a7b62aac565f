//! End to end: a small corpus export on disk, through the reader and the extraction, out to CSV

extern crate pdtb2;
extern crate regex;
extern crate tempfile;
#[macro_use] extern crate pretty_assertions;

use std::fs;
use std::io::Write;
use regex::Regex;
use tempfile::NamedTempFile;
use pdtb2::{is_adjacent, ConnectiveInitial, CorpusReader, Datum, Error, Keepers, Relation};

const HEADER: &str = "Relation,Section,FileNumber,Connective_SpanList,Connective_RawText,ConnHead,\
Conn1,Conn2,ConnHeadSemClass1,Arg1_SpanList,Arg1_RawText,Arg2_SpanList,Arg2_RawText,\
Sup1_RawText,Sup2_RawText";

fn corpus_file(rows: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{}", HEADER).unwrap();
    for row in rows {
        writeln!(file, "{}", row).unwrap();
    }
    file.flush().unwrap();
    file
}

fn read(file: &NamedTempFile) -> Vec<Datum> {
    CorpusReader::open(file.path()).unwrap()
        .iter_data()
        .collect::<pdtb2::Result<Vec<Datum>>>()
        .unwrap()
}

const BECAUSE: &str =
    "Explicit,04,22,11..15,because,because,,,Contingency.Cause.Reason,0..10,They left,16..30,it rained hard,,";

#[test]
fn explicit_with_one_character_gaps_is_extracted() {
    let file = corpus_file(&[BECAUSE]);
    let data = read(&file);
    assert!(is_adjacent(&data[0]).unwrap());
    let filter = ConnectiveInitial::new("Contingency").unwrap();
    assert!(filter.is_simple_extractable(&data[0]).unwrap());
}

#[test]
fn connective_nine_characters_away_is_not() {
    let file = corpus_file(&[
        "Explicit,04,22,20..24,because,because,,,Contingency.Cause.Reason,0..10,They left,16..30,it rained hard,,",
    ]);
    let data = read(&file);
    assert!(!is_adjacent(&data[0]).unwrap());
    let filter = ConnectiveInitial::with_regex(Regex::new("Contingency").unwrap());
    assert!(!filter.is_simple_extractable(&data[0]).unwrap());
}

#[test]
fn explicit_without_connective_spans_aborts_the_pass() {
    let file = corpus_file(&[
        BECAUSE,
        "Explicit,05,01,,because,because,,,Contingency.Cause.Reason,0..10,They left,16..30,it rained hard,,",
        "Explicit,06,01,11..15,because,because,,,Contingency.Cause.Reason,0..10,They left,16..30,it rained hard,,",
    ]);
    let filter = ConnectiveInitial::new("Contingency").unwrap();
    match filter.extract(CorpusReader::open(file.path()).unwrap().iter_data()) {
        Err(Error::InvalidRecord(ref info)) => assert!(info.contains("05/01"), "{}", info),
        Err(other) => panic!("expected an invalid record, got {}", other),
        Ok(keepers) => panic!("expected an invalid record, kept {} rows", keepers.len()),
    }
}

#[test]
fn unreadable_rows_abort_the_pass() {
    let file = corpus_file(&[
        "Explicit,04,22,11..15,because,because,,,Contingency.Cause.Reason,zero..ten,They left,16..30,it rained hard,,",
    ]);
    let filter = ConnectiveInitial::new("Contingency").unwrap();
    match filter.extract(CorpusReader::open(file.path()).unwrap().iter_data()) {
        Err(Error::Csv(_)) => (),
        Err(other) => panic!("expected a CSV error, got {}", other),
        Ok(_) => panic!("read a row with a broken span list"),
    }
}

#[test]
fn one_example_per_file_to_csv() {
    let file = corpus_file(&[
        // kept, then replaced by the later match from 04/22
        BECAUSE,
        // wrong class
        "Explicit,04,23,11..15,and,and,,,Expansion.Conjunction,0..10,Prices rose,16..30,sales fell,,",
        // supplementary text
        "Explicit,04,24,11..15,because,because,,,Contingency.Cause.Reason,0..10,They left,16..30,it rained,\"who?\",",
        // Implicit, adjacent, simple
        "Implicit,05,01,,,,\"as a result\",,Contingency.Cause.Result,0..10,\"Prices rose, fast\",12..30,sales fell,,",
        // Implicit with a second connective
        "Implicit,05,02,,,,so,then,Contingency.Cause.Result,0..10,Prices rose,12..30,sales fell,,",
        // the later match from 04/22
        "Explicit,04,22,51..55,since,since,,,Contingency.Cause.Reason,40..50,We stayed,56..70,it was warm,,",
        // Arg2 before Arg1
        "Explicit,06,01,0..5,because,because,,,Contingency.Cause.Reason,20..30,They left,6..18,it rained,,",
        // EntRel never qualifies and has no connective spans to measure
        "EntRel,07,01,,,,,,,0..10,It rained,12..30,The game was off,,",
    ]);
    let filter = ConnectiveInitial::new("Contingency").unwrap();
    let keepers: Keepers = filter.extract(CorpusReader::open(file.path()).unwrap().iter_data())
        .unwrap();
    assert_eq!(keepers.len(), 2);
    assert_eq!(keepers.get("04/22").unwrap().connective, Some("since".to_owned()));
    assert_eq!(keepers.get("05/01").unwrap().relation, Relation::Implicit);

    let out = NamedTempFile::new().unwrap();
    keepers.save(out.path()).unwrap();
    assert_eq!(fs::read_to_string(out.path()).unwrap(),
               "ItemId,Relation,ConnHeadSemClass1,Arg1,Connective,Arg2\n\
                04/22,Explicit,Contingency.Cause.Reason,We stayed,since,it was warm\n\
                05/01,Implicit,Contingency.Cause.Result,\"Prices rose, fast\",as a result,sales fell\n");
}

#[test]
fn bad_pattern_is_rejected_up_front() {
    match ConnectiveInitial::new("[Contingency") {
        Err(Error::Pattern(_)) => (),
        Err(other) => panic!("expected a pattern error, got {}", other),
        Ok(_) => panic!("compiled a broken pattern"),
    }
}
