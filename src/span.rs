//! Character offset spans, as written in the PDTB2 CSV export
//!
//! A span is written `start..end` and a discontinuous unit lists several of them separated by
//! semicolons, e.g. `9..15;20..25`. Units with no text (the connective of an Implicit relation)
//! have an empty field.
use std::fmt;
use std::iter;
use std::result;
use std::slice;
use std::str::FromStr;
use nom::IResult;
use nom::bytes::complete::tag;
use nom::character::complete::{char, digit1, space0};
use nom::combinator::{all_consuming, map, map_res};
use nom::multi::separated_list0;
use nom::sequence::{delimited, separated_pair};
use serde::Deserialize;
use serde::de::{self, Deserializer};
use errors::*;

/// One contiguous stretch of a document, by character offset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Span {
        Span { start, end }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// All the spans making up one text unit, in annotation order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpanList(Vec<Span>);

impl SpanList {
    pub fn new(spans: Vec<Span>) -> SpanList {
        SpanList(spans)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> slice::Iter<Span> {
        self.0.iter()
    }

    /// Every offset in the list, both ends of every span
    fn offsets<'a>(&'a self) -> impl Iterator<Item = usize> + 'a {
        self.0.iter().flat_map(|span| iter::once(span.start).chain(iter::once(span.end)))
    }

    /// Smallest offset anywhere in the unit, or None for an empty unit
    pub fn start(&self) -> Option<usize> {
        self.offsets().min()
    }

    /// Largest offset anywhere in the unit, or None for an empty unit
    pub fn finish(&self) -> Option<usize> {
        self.offsets().max()
    }
}

impl From<Vec<Span>> for SpanList {
    fn from(spans: Vec<Span>) -> SpanList {
        SpanList(spans)
    }
}

impl<'a> IntoIterator for &'a SpanList {
    type Item = &'a Span;
    type IntoIter = slice::Iter<'a, Span>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for SpanList {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, span) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ";")?;
            }
            write!(f, "{}", span)?;
        }
        Ok(())
    }
}

fn offset(input: &str) -> IResult<&str, usize> {
    map_res(digit1, usize::from_str)(input)
}

fn span(input: &str) -> IResult<&str, Span> {
    map(separated_pair(offset, tag(".."), offset),
        |(start, end)| Span::new(start, end))(input)
}

fn span_list(input: &str) -> IResult<&str, Vec<Span>> {
    separated_list0(delimited(space0, char(';'), space0), span)(input)
}

impl FromStr for SpanList {
    type Err = Error;

    fn from_str(s: &str) -> Result<SpanList> {
        match all_consuming(span_list)(s.trim()) {
            Ok((_, spans)) => Ok(SpanList(spans)),
            Err(_) => Err(Error::SpanList(s.to_owned())),
        }
    }
}

impl<'de> Deserialize<'de> for SpanList {
    fn deserialize<D>(deserializer: D) -> result::Result<SpanList, D::Error>
        where D: Deserializer<'de> {
        let field: Option<String> = Deserialize::deserialize(deserializer)?;
        match field {
            None => Ok(SpanList::default()),
            Some(text) => text.parse().map_err(de::Error::custom),
        }
    }
}
