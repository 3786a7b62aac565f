//! Counting and sampling over a corpus export read from disk

extern crate pdtb2;
extern crate rand;
extern crate tempfile;
#[macro_use] extern crate pretty_assertions;

use std::io::Write;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tempfile::NamedTempFile;
use pdtb2::{ArgOrder, CorpusReader, Relation};
use pdtb2::{report, sample};

const CORPUS: &str = "\
Relation,Section,FileNumber,Connective_SpanList,Connective_RawText,ConnHead,Conn1,ConnHeadSemClass1,Attribution_Source,Attribution_RawText,Arg1_SpanList,Arg1_RawText,Arg2_SpanList,Arg2_RawText,Sup1_RawText,Sup2_RawText
Explicit,00,01,11..14,But,But,,Comparison.Contrast,Wr,,0..10,Sales rose,15..30,profits fell,,
Explicit,00,01,40..47,because,because,,Contingency.Cause.Reason,Ot,analysts said,31..39,It fell,48..60,costs rose,,
Implicit,00,02,,,,so,Contingency.Cause.Result,Wr,,0..10,It rained,12..30,the game was off,,
Implicit,00,03,,,,in fact,Expansion.Restatement,Wr,,0..10,It poured,12..30,it really poured,they said,
AltLex,00,04,31..40,that is why,,,Contingency.Cause.Result,Wr,,0..30,Costs were up,41..60,prices rose,,
EntRel,00,05,,,,,,,,0..10,He left,40..60,The door shut,,
NoRel,00,06,,,,,,,,30..40,Then rain,0..20,Sun before,,
";

fn corpus_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(CORPUS.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn data(file: &NamedTempFile) -> pdtb2::corpus::Data<::std::fs::File> {
    CorpusReader::open(file.path()).unwrap().iter_data()
}

#[test]
fn relation_and_class_counts() {
    let file = corpus_file();
    let relations = report::relation_count(data(&file)).unwrap();
    assert_eq!(relations.total(), 7);
    assert_eq!(relations.get(&Relation::Explicit), 2);
    assert_eq!(relations.get(&Relation::NoRel), 1);

    let classes = report::count_semantic_classes(data(&file)).unwrap();
    assert_eq!(classes.sorted_by_key(), vec![
        ("Comparison.Contrast".to_owned(), 1),
        ("Contingency.Cause.Reason".to_owned(), 1),
        ("Contingency.Cause.Result".to_owned(), 2),
        ("Expansion.Restatement".to_owned(), 1),
    ]);

    let implicit = report::semantic_classes_in_implicit_relations(data(&file)).unwrap();
    assert_eq!(implicit.sorted_by_count(), vec![
        ("Contingency".to_owned(), 1),
        ("Expansion".to_owned(), 1),
    ]);
}

#[test]
fn connectives_and_attributions() {
    let file = corpus_file();
    let dist = report::connective_distribution(data(&file)).unwrap();
    assert_eq!(dist.keys().cloned().collect::<Vec<_>>(),
               vec![Relation::Explicit, Relation::Implicit, Relation::AltLex]);
    assert_eq!(dist[&Relation::Explicit].get(&"but".to_owned()), 1);
    assert_eq!(dist[&Relation::AltLex].get(&"that is why".to_owned()), 1);
    assert!(report::wordle(&dist).contains("that_is_why:1\n"));

    let sources = report::attribution_counts(data(&file)).unwrap();
    assert_eq!(sources.get(&"Wr".to_owned()), 4);
    assert_eq!(sources.get(&"Ot".to_owned()), 1);
    assert_eq!(report::attribution_texts(data(&file)).unwrap(), vec!["analysts said".to_owned()]);
}

#[test]
fn arg_orders() {
    let file = corpus_file();
    let orders = report::distribution_of_relative_arg_order(data(&file)).unwrap();
    assert_eq!(orders.get(&ArgOrder::Arg1First), 6);
    assert_eq!(orders.get(&ArgOrder::Arg2First), 1);
    assert_eq!(orders.get(&ArgOrder::Overlapping), 0);
}

#[test]
fn implicit_sample_skips_supplementary_text() {
    let file = corpus_file();
    let mut rng = StdRng::seed_from_u64(2);
    let rows = sample::random_implicit_subset(data(&file), 30, &mut rng).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].connective, Some("Implicit=so".to_owned()));
    assert_eq!(rows[0].class, "Contingency");
}
