//! Relations of the form Arg1 (connective) Arg2
//!
//! `is_adjacent` checks that the arguments, and for Explicit relations the connective between
//! them, follow one another in the text with at most `GAP_TOLERANCE` characters (a comma and a
//! space, say) in between. `ConnectiveInitial` adds the rest of the filter used to build
//! continuation data: only Explicit or Implicit relations, no supplementary text, a semantic
//! class matching a pattern, and a single-word connective. What passes is kept once per source
//! file in `Keepers`, ready to go out as CSV.
use std::fs::File;
use std::io::Write;
use std::path::Path;
use csv;
use indexmap::IndexMap;
use indexmap::map;
use regex::Regex;
use serde::Serialize;
use datum::{present, Datum, Relation};
use errors::*;

/// Characters allowed between two units that still count as adjacent
pub const GAP_TOLERANCE: usize = 3;

/// Whether the next unit starts at most `GAP_TOLERANCE` characters after `finish`
///
/// A start before `finish` (overlapping or embedded units) counts as close.
fn within_tolerance(finish: usize, start: usize) -> bool {
    start <= finish.saturating_add(GAP_TOLERANCE)
}

/// Whether Arg1, the connective (unless Implicit) and Arg2 follow one another closely
///
/// Arg1 has to come first; relations with Arg2 before Arg1 are never adjacent. Fails with
/// `Error::InvalidRecord` when a unit that has to be measured has no spans.
pub fn is_adjacent(datum: &Datum) -> Result<bool> {
    if !datum.arg1_precedes_arg2()? {
        return Ok(false);
    }
    let (_, arg1_finish) = datum.arg1_bounds()?;
    let (arg2_start, _) = datum.arg2_bounds()?;
    if datum.relation == Relation::Implicit {
        // The connective was inserted by the annotators, there's nothing in between
        Ok(within_tolerance(arg1_finish, arg2_start))
    } else {
        let (conn_start, conn_finish) = datum.connective_bounds()?;
        Ok(within_tolerance(arg1_finish, conn_start)
            && within_tolerance(conn_finish, arg2_start))
    }
}

/// One extracted example, as it goes out to CSV
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeptRow {
    #[serde(rename = "ItemId")]
    pub item_id: String,
    #[serde(rename = "Relation")]
    pub relation: Relation,
    #[serde(rename = "ConnHeadSemClass1")]
    pub sem_class: String,
    #[serde(rename = "Arg1")]
    pub arg1: String,
    #[serde(rename = "Connective")]
    pub connective: Option<String>,
    #[serde(rename = "Arg2")]
    pub arg2: String,
}

impl KeptRow {
    pub fn from_datum(datum: &Datum) -> KeptRow {
        KeptRow {
            item_id: datum.item_id(),
            relation: datum.relation,
            sem_class: datum.conn_head_sem_class1.clone().unwrap_or_default(),
            arg1: datum.arg1_raw_text.clone(),
            // Column 2 already says whether it was Implicit
            connective: datum.conn_str(false),
            arg2: datum.arg2_raw_text.clone(),
        }
    }
}

/// Header of the extraction CSV
pub const KEEPERS_HEADER: [&str; 6] =
    ["ItemId", "Relation", "ConnHeadSemClass1", "Arg1", "Connective", "Arg2"];

/// At most one example per source file
///
/// Keeping another example from a file replaces the earlier one but leaves it where the file was
/// first seen, so the output is in order of first appearance while the rows are the last match
/// from each file.
#[derive(Debug, Clone, Default)]
pub struct Keepers {
    rows: IndexMap<String, KeptRow>,
}

impl Keepers {
    pub fn new() -> Keepers {
        Keepers::default()
    }

    /// Keep `row`, replacing whatever was kept for the same file. Returns the replaced row.
    pub fn keep(&mut self, row: KeptRow) -> Option<KeptRow> {
        self.rows.insert(row.item_id.clone(), row)
    }

    pub fn get(&self, item_id: &str) -> Option<&KeptRow> {
        self.rows.get(item_id)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> map::Values<String, KeptRow> {
        self.rows.values()
    }

    /// Write the kept rows as CSV, with a header even when nothing was kept
    pub fn write_csv<W: Write>(&self, output: W) -> Result<()> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(output);
        writer.write_record(&KEEPERS_HEADER)?;
        for row in self.iter() {
            writer.serialize(row)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Write the kept rows to a CSV file at `path`
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.write_csv(File::create(path)?)
    }
}

/// The connective-initial extraction filter
#[derive(Debug, Clone)]
pub struct ConnectiveInitial {
    sem_re: Regex,
}

impl ConnectiveInitial {
    /// Compile the semantic class pattern. A bad pattern fails here, before any reading.
    pub fn new(pattern: &str) -> Result<ConnectiveInitial> {
        Ok(ConnectiveInitial::with_regex(Regex::new(pattern)?))
    }

    pub fn with_regex(sem_re: Regex) -> ConnectiveInitial {
        ConnectiveInitial { sem_re }
    }

    pub fn pattern(&self) -> &str {
        self.sem_re.as_str()
    }

    /// Whether `datum` is a plain Arg1 (connective) Arg2 example of the wanted class
    pub fn is_simple_extractable(&self, datum: &Datum) -> Result<bool> {
        let rel = datum.relation;
        if rel != Relation::Explicit && rel != Relation::Implicit {
            return Ok(false);
        }
        if present(&datum.sup1_raw_text) || present(&datum.sup2_raw_text) {
            return Ok(false);
        }
        match datum.conn_head_sem_class1 {
            Some(ref class) if self.sem_re.is_match(class) => (),
            _ => return Ok(false),
        }
        if !is_adjacent(datum)? {
            return Ok(false);
        }
        // Stick to simple connectives: Explicit ones are their own head, Implicit ones have no
        // second connective
        Ok(match rel {
            Relation::Explicit => datum.conn_head == datum.connective_raw_text,
            _ => !present(&datum.conn2),
        })
    }

    /// One pass over `data`, keeping the last matching example from each file
    ///
    /// Stops at the first error, whether from reading or from an invalid record.
    pub fn extract<I>(&self, data: I) -> Result<Keepers>
        where I: IntoIterator<Item = Result<Datum>> {
        let mut keepers = Keepers::new();
        self.extract_into(data, &mut keepers, |_| ())?;
        Ok(keepers)
    }

    /// Like `extract`, but into `keepers` and telling `on_keep` about every row kept
    ///
    /// Rows kept before an error stay in `keepers`.
    pub fn extract_into<I, F>(&self, data: I, keepers: &mut Keepers, mut on_keep: F) -> Result<()>
        where I: IntoIterator<Item = Result<Datum>>,
              F: FnMut(&KeptRow) {
        for datum in data {
            let datum = datum?;
            if self.is_simple_extractable(&datum)? {
                let row = KeptRow::from_datum(&datum);
                on_keep(&row);
                keepers.keep(row);
            }
        }
        Ok(())
    }
}
