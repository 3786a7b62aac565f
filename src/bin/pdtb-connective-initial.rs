//! Pull out examples of Explicit or Implicit relations in which
//!
//! 1. Arg1 immediately precedes Arg2, with only the connective intervening for Explicit,
//! 2. there is no supplementary text on either argument,
//! 3. ConnHeadSemClass1 matches the given regular expression, and
//! 4. the connective is simple: its own head if Explicit, no second connective if Implicit.
//!
//! At most one example is kept from each file, so the results don't contain several sentences
//! from the same article. They go into a CSV file with the columns ItemId, Relation,
//! ConnHeadSemClass1, Arg1, Connective and Arg2.
//!
//! e.g. `pdtb-connective-initial Expansion pdtb-continuation-data-expansion.csv`

// argument parsing
#[macro_use] extern crate clap;
// logging
#[macro_use] extern crate log;
extern crate env_logger;
// lastly, this library
extern crate pdtb2;

use clap::Arg;
use pdtb2::adjacency::{ConnectiveInitial, Keepers};
use pdtb2::corpus::{self, CorpusReader};
use pdtb2::errors::*;

pub fn main() {
    // Main can't return a Result, and the ? operator needs the enclosing function to return Result
    if let Err(err) = inner_main() {
        error!("Could not recover. Exiting. {}", err);
        std::process::exit(1);
    }
}
pub fn inner_main() -> Result<()> {
    env_logger::init();
    let args = app_from_crate!()
        .arg_from_usage("<pattern> 'regular expression searched for in ConnHeadSemClass1'")
        .arg_from_usage("<output> 'CSV file in which to store the examples'")
        .arg(Arg::from_usage("[corpus] 'the PDTB2 CSV export'")
            .default_value(corpus::DEFAULT_CORPUS))
        .get_matches();
    let pattern = value_t!(args, "pattern", String).unwrap_or_else(|e| e.exit());
    let outname = value_t!(args, "output", String).unwrap_or_else(|e| e.exit());
    let corpus_filename = value_t!(args, "corpus", String).unwrap_or_else(|e| e.exit());

    // A bad pattern should fail before the corpus is touched
    let filter = ConnectiveInitial::new(&pattern)?;
    let data = CorpusReader::open(&corpus_filename)?.iter_data();

    let mut keepers = Keepers::new();
    filter.extract_into(data, &mut keepers, |row| info!("{}", row.item_id))?;
    keepers.save(&outname)?;
    info!("CSV created.");
    println!("{} examples matching {:?} written to {}", keepers.len(), filter.pattern(), outname);
    Ok(())
}
