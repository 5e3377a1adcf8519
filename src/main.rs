use std::{error::Error, io, process::ExitCode};

use clap::Parser;
use gcd_rs::{DriverConfig, SignConvention, ZeroPolicy};

/// Print the greatest common divisor of two integers read from stdin
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Keep the sign of the truncating Euclidean result instead of printing its magnitude
    #[arg(short, long)]
    signed: bool,
    /// Fail on `0 0` instead of printing 0
    #[arg(short='z', long)]
    reject_zero: bool,
    /// Print parsed inputs and phase timings to stderr
    #[arg(short, long)]
    debug: bool,
}

impl Args {
    fn config(&self) -> DriverConfig {
        DriverConfig::new()
            .with_sign(if self.signed { SignConvention::Truncated } else { SignConvention::NonNegative })
            .with_zero_pair(if self.reject_zero { ZeroPolicy::Reject } else { ZeroPolicy::Zero })
            .with_debug(self.debug)
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    let config = args.config();
    if args.debug {
        eprintln!("Config: {config:?}");
    }

    match gcd_rs::run(io::stdin().lock(), io::stdout().lock(), &config) {
        Ok(outcome) => {
            if args.debug {
                eprintln!("gcd({}, {}) = {}", outcome.a, outcome.b, outcome.result);
                if let Some(tp) = &outcome.profile {
                    eprint!("{tp}");
                    eprintln!("total {:12.6} ms", tp.total_duration().as_secs_f64() * 1000.);
                }
            }
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("Error: {e}");
            let mut source = e.source();
            while let Some(cause) = source {
                eprintln!("Cause: {cause}");
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}
