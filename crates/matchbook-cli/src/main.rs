//! `matchbook` binary.
//!
//! Reads order records on stdin and runs exactly one session kind per
//! invocation:
//!
//! ```text
//! matchbook continuous < orders.csv
//! matchbook auction    < orders.csv
//! ```
//!
//! Continuous mode prints one `party,shares,earnings` row per party
//! (sorted by party) on stdout and the total volume on stderr. Auction
//! mode prints the matching price and the maximum transaction amount,
//! `-1` for both when no trade is possible. Exit codes: 0 on success,
//! 2 on usage error, 1 on any feed or processing failure.

use std::io;
use std::process::ExitCode;

use matchbook_feed::{LineEnding, RecordReader, run_auction, run_continuous};
use tracing_subscriber::EnvFilter;

enum Mode {
    Continuous,
    Auction,
}

fn usage(program: &str) {
    eprintln!("usage: {program} <continuous|auction>  (order records on stdin)");
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut args = std::env::args();
    let program = args.next().unwrap_or_else(|| "matchbook".into());
    let mode = match args.next().as_deref() {
        Some("continuous") => Mode::Continuous,
        Some("auction") => Mode::Auction,
        _ => {
            usage(&program);
            return ExitCode::from(2);
        }
    };
    if args.next().is_some() {
        usage(&program);
        return ExitCode::from(2);
    }

    let reader = RecordReader::new(io::stdin().lock(), LineEnding::from_env());
    let outcome = match mode {
        Mode::Continuous => run_continuous(reader).map(|report| {
            for (party, pos) in &report.positions {
                println!("{party},{},{}", pos.shares, pos.earnings);
            }
            eprintln!("volume: {}", report.volume);
        }),
        Mode::Auction => run_auction(reader).map(|(price, amount)| {
            println!("matching price: {price}");
            println!("max transaction amount: {amount}");
        }),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
