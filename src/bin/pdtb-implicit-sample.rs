//! Random Implicit examples from each of the primary semantic classes
//!
//! Examples with supplementary text are skipped. The output is a CSV file with columns named for
//! the datum fields and methods that determined the values: Arg1_RawText, conn_str, Arg2_RawText
//! and primary_semclass1.

// argument parsing
#[macro_use] extern crate clap;
// logging
#[macro_use] extern crate log;
extern crate env_logger;
// random numbers
extern crate rand;
// lastly, this library
extern crate pdtb2;

use std::fs::File;
use clap::Arg;
use rand::SeedableRng;
use rand::rngs::StdRng;
use pdtb2::corpus::{self, CorpusReader};
use pdtb2::errors::*;
use pdtb2::sample;

pub fn main() {
    // Main can't return a Result, and the ? operator needs the enclosing function to return Result
    if let Err(err) = inner_main() {
        error!("Could not recover. Exiting. {}", err);
        std::process::exit(1);
    }
}
pub fn inner_main() -> Result<()> {
    env_logger::init();
    let default_size = sample::DEFAULT_SAMPLE_SIZE.to_string();
    let args = app_from_crate!()
        .arg(Arg::from_usage("[corpus] 'the PDTB2 CSV export'")
            .default_value(corpus::DEFAULT_CORPUS))
        .arg(Arg::from_usage("-n, --size=[N] 'how many examples to take from each class'")
            .default_value(&default_size))
        .arg(Arg::from_usage("-o, --output=[FILE] 'CSV file in which to store the sample'")
            .default_value("pdtb-random-Implicit-subset.csv"))
        .arg_from_usage("--seed=[SEED] 'seed for the shuffle, for a repeatable sample'")
        .get_matches();
    let corpus_filename = value_t!(args, "corpus", String).unwrap_or_else(|e| e.exit());
    let size = value_t!(args, "size", usize).unwrap_or_else(|e| e.exit());
    let outname = value_t!(args, "output", String).unwrap_or_else(|e| e.exit());

    let mut rng = if args.is_present("seed") {
        StdRng::seed_from_u64(value_t!(args, "seed", u64).unwrap_or_else(|e| e.exit()))
    } else {
        StdRng::from_entropy()
    };

    let data = CorpusReader::open(&corpus_filename)?
        .iter_data_with_progress(corpus::log_progress);
    let rows = sample::random_implicit_subset(data, size, &mut rng)?;
    sample::write_csv(&rows, File::create(&outname)?)?;
    info!("{} examples, up to {} per class, written to {}", rows.len(), size, outname);
    Ok(())
}
