//! Attribution sources and how often they occur, or with `--texts`, the attribution texts
//! themselves

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
        .arg_from_usage("-t, --texts 'print every attribution text instead of counting sources'")
        .get_matches();
    let corpus_filename = value_t!(args, "corpus", String).unwrap_or_else(|e| e.exit());

    let reader = CorpusReader::open(&corpus_filename)?;
    if args.is_present("texts") {
        for text in report::attribution_texts(reader.iter_data())? {
            println!("{}", text);
        }
    } else {
        let counts = report::attribution_counts(
            reader.iter_data_with_progress(corpus::log_progress))?;
        for (source, count) in counts.sorted_by_count() {
            println!("{} {}", source, count);
        }
    }
    Ok(())
}
