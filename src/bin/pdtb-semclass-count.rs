//! Count the ConnHeadSemClass1 values in the corpus
//!
//! The counts are sorted by class name, so that trends in the super-categories are easy to see,
//! and go to standard output as CSV unless an output file is given.

// argument parsing
#[macro_use] extern crate clap;
// logging
#[macro_use] extern crate log;
extern crate env_logger;
// lastly, this library
extern crate pdtb2;

use std::fs::File;
use std::io;
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
        .arg_from_usage("-o, --output=[FILE] 'write the counts to this CSV file'")
        .get_matches();
    let corpus_filename = value_t!(args, "corpus", String).unwrap_or_else(|e| e.exit());

    let data = CorpusReader::open(&corpus_filename)?
        .iter_data_with_progress(corpus::log_progress);
    let counts = report::count_semantic_classes(data)?;
    info!("{} distinct classes", counts.len());
    match args.value_of("output") {
        Some(outname) => {
            report::write_semantic_class_counts(counts, File::create(outname)?)?;
            info!("Counts written to {}", outname);
        }
        None => {
            let stdout = io::stdout();
            report::write_semantic_class_counts(counts, stdout.lock())?;
        }
    }
    Ok(())
}
