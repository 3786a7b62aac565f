//! One row of the PDTB2 CSV export: a single annotated discourse relation
use std::fmt;
use std::result;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use span::SpanList;
use errors::*;

/// Relation types annotated in the PDTB2
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Relation {
    Explicit,
    Implicit,
    AltLex,
    EntRel,
    #[default]
    NoRel,
}

impl Relation {
    pub fn as_str(&self) -> &'static str {
        match *self {
            Relation::Explicit => "Explicit",
            Relation::Implicit => "Implicit",
            Relation::AltLex => "AltLex",
            Relation::EntRel => "EntRel",
            Relation::NoRel => "NoRel",
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Relation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Relation> {
        match s.trim() {
            "Explicit" => Ok(Relation::Explicit),
            "Implicit" => Ok(Relation::Implicit),
            "AltLex" => Ok(Relation::AltLex),
            "EntRel" => Ok(Relation::EntRel),
            "NoRel" => Ok(Relation::NoRel),
            other => Err(Error::Other(format!("Unknown relation type {:?}", other))),
        }
    }
}

impl<'de> Deserialize<'de> for Relation {
    fn deserialize<D>(deserializer: D) -> result::Result<Relation, D::Error>
        where D: Deserializer<'de> {
        let label = String::deserialize(deserializer)?;
        label.parse().map_err(de::Error::custom)
    }
}

impl Serialize for Relation {
    fn serialize<S>(&self, serializer: S) -> result::Result<S::Ok, S::Error>
        where S: Serializer {
        serializer.serialize_str(self.as_str())
    }
}

/// Where Arg1 sits relative to Arg2
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ArgOrder {
    /// Arg1 is over before Arg2 begins
    Arg1First,
    /// Arg2 is over before Arg1 begins
    Arg2First,
    /// One argument is embedded in or interleaved with the other
    Overlapping,
}

impl fmt::Display for ArgOrder {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            ArgOrder::Arg1First => "arg1 < arg2",
            ArgOrder::Arg2First => "arg2 < arg1",
            ArgOrder::Overlapping => "overlap",
        })
    }
}

/// A discourse relation and its arguments
///
/// Only the columns the exploration tools look at are kept; the rest of the row (Gorn
/// addresses, trees, the full raw text) is skipped while reading. Empty optional columns are
/// `None`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Datum {
    #[serde(rename = "Relation")]
    pub relation: Relation,
    #[serde(rename = "Section")]
    pub section: String,
    #[serde(rename = "FileNumber")]
    pub file_number: String,

    #[serde(rename = "Connective_SpanList", default)]
    pub connective_span_list: SpanList,
    #[serde(rename = "Connective_RawText")]
    pub connective_raw_text: Option<String>,
    #[serde(rename = "ConnHead")]
    pub conn_head: Option<String>,
    #[serde(rename = "Conn1")]
    pub conn1: Option<String>,
    #[serde(rename = "Conn2")]
    pub conn2: Option<String>,
    #[serde(rename = "ConnHeadSemClass1")]
    pub conn_head_sem_class1: Option<String>,
    #[serde(rename = "ConnHeadSemClass2")]
    pub conn_head_sem_class2: Option<String>,
    #[serde(rename = "Conn2SemClass1")]
    pub conn2_sem_class1: Option<String>,
    #[serde(rename = "Conn2SemClass2")]
    pub conn2_sem_class2: Option<String>,

    #[serde(rename = "Attribution_Source")]
    pub attribution_source: Option<String>,
    #[serde(rename = "Attribution_Type")]
    pub attribution_type: Option<String>,
    #[serde(rename = "Attribution_Polarity")]
    pub attribution_polarity: Option<String>,
    #[serde(rename = "Attribution_Determinacy")]
    pub attribution_determinacy: Option<String>,
    #[serde(rename = "Attribution_RawText")]
    pub attribution_raw_text: Option<String>,

    #[serde(rename = "Arg1_SpanList", default)]
    pub arg1_span_list: SpanList,
    #[serde(rename = "Arg1_RawText", default)]
    pub arg1_raw_text: String,
    #[serde(rename = "Arg2_SpanList", default)]
    pub arg2_span_list: SpanList,
    #[serde(rename = "Arg2_RawText", default)]
    pub arg2_raw_text: String,

    #[serde(rename = "Sup1_RawText")]
    pub sup1_raw_text: Option<String>,
    #[serde(rename = "Sup2_RawText")]
    pub sup2_raw_text: Option<String>,
}

/// True for a column that holds any text at all
pub fn present(field: &Option<String>) -> bool {
    field.as_ref().map_or(false, |text| !text.is_empty())
}

impl Datum {
    /// `Section/FileNumber`, which identifies the source document
    pub fn item_id(&self) -> String {
        format!("{}/{}", self.section, self.file_number)
    }

    fn bounds(&self, spans: &SpanList, unit: &str) -> Result<(usize, usize)> {
        match (spans.start(), spans.finish()) {
            (Some(start), Some(finish)) => Ok((start, finish)),
            _ => Err(Error::InvalidRecord(
                format!("{} {} in {} has no {} spans",
                    self.relation, self.conn_label(), self.item_id(), unit))),
        }
    }

    fn conn_label(&self) -> String {
        match self.conn_str(false) {
            Some(conn) => format!("({:?})", conn),
            None => String::from("relation"),
        }
    }

    /// First and last offset covered by Arg1
    pub fn arg1_bounds(&self) -> Result<(usize, usize)> {
        self.bounds(&self.arg1_span_list, "Arg1")
    }

    /// First and last offset covered by Arg2
    pub fn arg2_bounds(&self) -> Result<(usize, usize)> {
        self.bounds(&self.arg2_span_list, "Arg2")
    }

    /// First and last offset covered by the connective
    pub fn connective_bounds(&self) -> Result<(usize, usize)> {
        self.bounds(&self.connective_span_list, "connective")
    }

    /// Whether Arg1 starts before Arg2 does
    pub fn arg1_precedes_arg2(&self) -> Result<bool> {
        let (arg1_start, _) = self.arg1_bounds()?;
        let (arg2_start, _) = self.arg2_bounds()?;
        Ok(arg1_start < arg2_start)
    }

    pub fn relative_arg_order(&self) -> Result<ArgOrder> {
        let (arg1_start, arg1_finish) = self.arg1_bounds()?;
        let (arg2_start, arg2_finish) = self.arg2_bounds()?;
        Ok(if arg1_finish < arg2_start {
            ArgOrder::Arg1First
        } else if arg2_finish < arg1_start {
            ArgOrder::Arg2First
        } else {
            ArgOrder::Overlapping
        })
    }

    /// The connective as a string, if the relation has one
    ///
    /// Explicit relations give their head, AltLex their raw text and Implicit relations the
    /// connective the annotators inserted, marked `Implicit=` when `distinguish_implicit` is
    /// set so that it can't be confused with the same word written in the text.
    pub fn conn_str(&self, distinguish_implicit: bool) -> Option<String> {
        match self.relation {
            Relation::Explicit => self.conn_head.clone(),
            Relation::AltLex => self.connective_raw_text.clone(),
            Relation::Implicit => self.conn1.as_ref().map(|conn| {
                if distinguish_implicit {
                    format!("Implicit={}", conn)
                } else {
                    conn.clone()
                }
            }),
            Relation::EntRel | Relation::NoRel => None,
        }
    }

    /// Top level of ConnHeadSemClass1, e.g. `Contingency` for `Contingency.Cause.Reason`
    pub fn primary_semclass1(&self) -> Option<&str> {
        self.conn_head_sem_class1.as_ref()
            .and_then(|class| class.split('.').next())
    }
}
