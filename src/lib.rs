//! Helper functions for exploring the Penn Discourse Treebank 2.0
//!
//! This code is intended to reduce the boilerplate in the included binaries, which each answer
//! one question about the CSV export of the corpus (`pdtb2.csv`). The one piece with real policy
//! in it is `adjacency`, which picks out relations of the form Arg1 (connective) Arg2.


#[macro_use] extern crate log;
extern crate nom;
extern crate csv;
extern crate serde;
extern crate regex;
extern crate rand;
extern crate indexmap;
extern crate farmhash;
#[cfg(test)] #[macro_use] extern crate pretty_assertions;
pub mod errors;
pub mod span;
pub mod datum;
pub mod corpus;
pub mod tally;
pub mod adjacency;
pub mod report;
pub mod sample;

pub use adjacency::{is_adjacent, ConnectiveInitial, Keepers, KeptRow};
pub use corpus::CorpusReader;
pub use datum::{ArgOrder, Datum, Relation};
pub use errors::{Error, Result};
pub use span::{Span, SpanList};
