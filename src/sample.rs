//! Random subsets of Implicit relations, balanced by primary semantic class
use std::io::Write;
use csv;
use indexmap::IndexMap;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;
use datum::{present, Datum, Relation};
use report::NO_CLASS;
use errors::*;

/// Default number of examples from each class
pub const DEFAULT_SAMPLE_SIZE: usize = 30;

/// One sampled example; the columns are named after the datum methods that fill them
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampleRow {
    #[serde(rename = "Arg1_RawText")]
    pub arg1: String,
    #[serde(rename = "conn_str")]
    pub connective: Option<String>,
    #[serde(rename = "Arg2_RawText")]
    pub arg2: String,
    #[serde(rename = "primary_semclass1")]
    pub class: String,
}

/// Up to `sample_size` random Implicit examples from each primary semantic class
///
/// Examples with supplementary text are left out. Classes come out in the order they are first
/// seen in the corpus; the examples within a class in random order.
pub fn random_implicit_subset<I, R>(data: I, sample_size: usize, rng: &mut R)
    -> Result<Vec<SampleRow>>
    where I: IntoIterator<Item = Result<Datum>>, R: Rng + ?Sized {
    let mut by_class: IndexMap<String, Vec<Datum>> = IndexMap::new();
    for datum in data {
        let datum = datum?;
        if datum.relation == Relation::Implicit
            && !present(&datum.sup1_raw_text) && !present(&datum.sup2_raw_text) {
            let class = datum.primary_semclass1().unwrap_or(NO_CLASS).to_owned();
            by_class.entry(class).or_insert_with(Vec::new).push(datum);
        }
    }

    let mut rows = vec![];
    for (class, mut data) in by_class {
        debug!("{} Implicit examples of {}", data.len(), class);
        data.shuffle(rng);
        for datum in data.into_iter().take(sample_size) {
            rows.push(SampleRow {
                connective: datum.conn_str(true),
                arg1: datum.arg1_raw_text,
                arg2: datum.arg2_raw_text,
                class: class.clone(),
            });
        }
    }
    Ok(rows)
}

/// Write a sample as CSV, header first
pub fn write_csv<W: Write>(rows: &[SampleRow], output: W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(output);
    writer.write_record(&["Arg1_RawText", "conn_str", "Arg2_RawText", "primary_semclass1"])?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use span::{Span, SpanList};

    fn implicit(n: usize, class: &str) -> Datum {
        Datum {
            relation: Relation::Implicit,
            section: "12".into(),
            file_number: format!("{:02}", n),
            conn1: Some("so".into()),
            conn_head_sem_class1: Some(class.into()),
            arg1_span_list: SpanList::new(vec![Span::new(0, 10)]),
            arg2_span_list: SpanList::new(vec![Span::new(12, 20)]),
            arg1_raw_text: format!("arg1 #{}", n),
            arg2_raw_text: format!("arg2 #{}", n),
            ..Datum::default()
        }
    }

    fn corpus() -> Vec<Result<Datum>> {
        let mut data = vec![];
        for n in 0..10 {
            data.push(Ok(implicit(n, "Contingency.Cause.Result")));
        }
        for n in 10..12 {
            data.push(Ok(implicit(n, "Expansion.Conjunction")));
        }
        let mut with_sup = implicit(12, "Temporal.Asynchronous");
        with_sup.sup1_raw_text = Some("yesterday".into());
        data.push(Ok(with_sup));
        data.push(Ok(Datum { relation: Relation::Explicit, ..implicit(13, "Temporal.Synchrony") }));
        data
    }

    #[test]
    fn at_most_sample_size_per_class() {
        let mut rng = StdRng::seed_from_u64(7);
        let rows = random_implicit_subset(corpus(), 3, &mut rng).unwrap();
        assert_eq!(rows.len(), 5);
        let classes: Vec<&str> = rows.iter().map(|row| row.class.as_str()).collect();
        assert_eq!(classes, vec!["Contingency", "Contingency", "Contingency",
                                 "Expansion", "Expansion"]);
        for row in &rows {
            assert_eq!(row.connective, Some("Implicit=so".to_owned()));
            assert!(row.arg1.starts_with("arg1 #"));
        }
    }

    #[test]
    fn sample_is_drawn_without_replacement() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut rows = random_implicit_subset(corpus(), 100, &mut rng).unwrap();
        assert_eq!(rows.len(), 12);
        rows.sort_by(|a, b| a.arg1.cmp(&b.arg1));
        rows.dedup_by(|a, b| a.arg1 == b.arg1);
        assert_eq!(rows.len(), 12);
    }

    #[test]
    fn writes_header_and_rows() {
        let rows = vec![SampleRow {
            arg1: "Prices rose".into(),
            connective: Some("Implicit=so".into()),
            arg2: "sales fell".into(),
            class: "Contingency".into(),
        }];
        let mut out = vec![];
        write_csv(&rows, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(),
                   "Arg1_RawText,conn_str,Arg2_RawText,primary_semclass1\n\
                    Prices rose,Implicit=so,sales fell,Contingency\n");
    }
}
