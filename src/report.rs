//! Counts and distributions over the whole corpus
//!
//! Every function makes one pass over the datums it is given and stops at the first error.
use std::io::Write;
use csv;
use indexmap::IndexMap;
use datum::{present, ArgOrder, Datum, Relation};
use tally::Tally;
use errors::*;

/// How often each relation type occurs
pub fn relation_count<I>(data: I) -> Result<Tally<Relation>>
    where I: IntoIterator<Item = Result<Datum>> {
    let mut tally = Tally::new();
    for datum in data {
        tally.add(datum?.relation);
    }
    Ok(tally)
}

/// How often each ConnHeadSemClass1 value occurs
///
/// Only relations with a connective have a class (not EntRel or NoRel), the others are skipped.
pub fn count_semantic_classes<I>(data: I) -> Result<Tally<String>>
    where I: IntoIterator<Item = Result<Datum>> {
    let mut tally = Tally::new();
    for datum in data {
        let datum = datum?;
        if present(&datum.conn_head_sem_class1) {
            tally.extend(datum.conn_head_sem_class1);
        }
    }
    Ok(tally)
}

/// Write semantic class counts as CSV, sorted by name so the super-categories group together
pub fn write_semantic_class_counts<W: Write>(tally: Tally<String>, output: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(output);
    writer.write_record(&["ConnHeadSemClass1", "Count"])?;
    for (class, count) in tally.sorted_by_key() {
        writer.write_record(&[class, count.to_string()])?;
    }
    writer.flush()?;
    Ok(())
}

/// Lowercased connective counts for each relation type
///
/// Relation types come out in the order they first appear in the corpus.
pub fn connective_distribution<I>(data: I) -> Result<IndexMap<Relation, Tally<String>>>
    where I: IntoIterator<Item = Result<Datum>> {
    let mut dist: IndexMap<Relation, Tally<String>> = IndexMap::new();
    for datum in data {
        let datum = datum?;
        // EntRel and NoRel have no connective
        if let Some(conn) = datum.conn_str(false) {
            if !conn.is_empty() {
                dist.entry(datum.relation).or_insert_with(Tally::new).add(conn.to_lowercase());
            }
        }
    }
    Ok(dist)
}

/// Format a connective distribution for pasting into Wordle's advanced mode
///
/// Each relation gets a banner followed by `connective:count` lines, most frequent first.
/// Wordle splits on spaces, so multiword connectives are joined with underscores.
pub fn wordle(dist: &IndexMap<Relation, Tally<String>>) -> String {
    let rule = "=".repeat(70);
    let mut s = String::new();
    for (rel, counts) in dist {
        s.push_str(&format!("{}\n{}\n{}\n", rule, rel, rule));
        for (conn, count) in counts.clone().sorted_by_count() {
            s.push_str(&format!("{}:{}\n", conn.replace(' ', "_"), count));
        }
    }
    s
}

/// How often each attribution source occurs, e.g. `Wr` (writer) or `Ot` (other)
pub fn attribution_counts<I>(data: I) -> Result<Tally<String>>
    where I: IntoIterator<Item = Result<Datum>> {
    let mut tally = Tally::new();
    for datum in data {
        let datum = datum?;
        if present(&datum.attribution_source) {
            tally.extend(datum.attribution_source);
        }
    }
    Ok(tally)
}

/// The text of every attribution, in corpus order
pub fn attribution_texts<I>(data: I) -> Result<Vec<String>>
    where I: IntoIterator<Item = Result<Datum>> {
    let mut texts = vec![];
    for datum in data {
        let datum = datum?;
        if present(&datum.attribution_raw_text) {
            texts.extend(datum.attribution_raw_text);
        }
    }
    Ok(texts)
}

/// Label for Implicit relations that have no semantic class
pub const NO_CLASS: &str = "None";

/// Primary semantic classes of Implicit relations
///
/// Relations without a class are counted under `NO_CLASS`.
pub fn semantic_classes_in_implicit_relations<I>(data: I) -> Result<Tally<String>>
    where I: IntoIterator<Item = Result<Datum>> {
    let mut tally = Tally::new();
    for datum in data {
        let datum = datum?;
        if datum.relation == Relation::Implicit {
            tally.add(datum.primary_semclass1().unwrap_or(NO_CLASS).to_owned());
        }
    }
    Ok(tally)
}

/// How often Arg1 comes first, Arg2 comes first, or they overlap
pub fn distribution_of_relative_arg_order<I>(data: I) -> Result<Tally<ArgOrder>>
    where I: IntoIterator<Item = Result<Datum>> {
    let mut tally = Tally::new();
    for datum in data {
        tally.add(datum?.relative_arg_order()?);
    }
    Ok(tally)
}
