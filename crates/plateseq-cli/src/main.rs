//! Command-line demonstration of plate lookup by sequence index.
//!
//! Prints one `<index>: <plate>` line per requested index. With no
//! arguments, a representative sample is used instead: the start of the
//! sequence, the digit-to-letter transition, plates with increasing letter
//! counts, and the end of the sequence.
//!
//! # Usage
//!
//! ```sh
//! cargo run --bin plateseq
//! ```
//!
//! Look up specific indices:
//!
//! ```sh
//! cargo run --bin plateseq -- 0 999999 1000000 501363135
//! ```

use std::process;

use clap::Parser;
use plateseq_core::{Plate, PlateIndex};

/// Sample indices covering every group transition and both ends of the
/// sequence.
const SAMPLE_INDICES: [u64; 19] = [
    0,
    1,
    999_999,
    1_000_000,
    1_000_001,
    1_000_025,
    1_000_026,
    1_000_052,
    1_000_053,
    3_599_999,
    3_600_000,
    3_600_001,
    3_900_000,
    4_400_000,
    4_400_001,
    10_000_000,
    15_000_000,
    99_999_999,
    501_363_135,
];

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Sequence indices to look up. Defaults to a representative sample.
    #[arg(value_name = "INDEX")]
    indices: Vec<String>,
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    let indices = if args.indices.is_empty() {
        log::debug!("no indices given, using the built-in sample");
        SAMPLE_INDICES.iter().map(ToString::to_string).collect()
    } else {
        args.indices
    };

    for raw in &indices {
        let index = match raw.parse::<PlateIndex>() {
            Ok(index) => index,
            Err(err) => {
                eprintln!("{raw}: {err}");
                process::exit(2);
            }
        };
        println!("{index}: {}", Plate::at(index));
    }
}
