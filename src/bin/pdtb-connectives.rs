//! Counts of (lowercased) connectives by relation type
//!
//! With `--wordle` the counts come out in the format Wordle's advanced mode accepts, one block
//! per relation type.

// argument parsing
#[macro_use] extern crate clap;
// logging
#[macro_use] extern crate log;
extern crate env_logger;
// lastly, this library
extern crate pdtb2;

use clap::Arg;
use pdtb2::corpus::{self, CorpusReader};
use pdtb2::errors::*;
use pdtb2::report;

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
        .arg(Arg::from_usage("[corpus] 'the PDTB2 CSV export'")
            .default_value(corpus::DEFAULT_CORPUS))
        .arg_from_usage("-w, --wordle 'print in Wordle format'")
        .get_matches();
    let corpus_filename = value_t!(args, "corpus", String).unwrap_or_else(|e| e.exit());

    let data = CorpusReader::open(&corpus_filename)?
        .iter_data_with_progress(corpus::log_progress);
    let dist = report::connective_distribution(data)?;
    if args.is_present("wordle") {
        print!("{}", report::wordle(&dist));
    } else {
        for (rel, counts) in dist {
            for (conn, count) in counts.sorted_by_count() {
                println!("{}\t{}\t{}", rel, conn, count);
            }
        }
    }
    Ok(())
}
