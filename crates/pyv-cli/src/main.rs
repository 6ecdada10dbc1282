use std::cmp::Ordering;
use std::process::ExitCode;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use log::debug;
use pyv_pep440::{Comparator, Version, VersionParser};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(name = "pyv")]
#[command(about = "PEP 440 version parsing and comparison")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compare two versions and print -1, 0 or 1
    Compare {
        #[arg(value_name = "V1")]
        v1: String,

        #[arg(value_name = "V2")]
        v2: String,
    },

    /// Parse a version and print its structured record as JSON
    Parse {
        #[arg(value_name = "VERSION")]
        version: String,
    },
}

/// One-line record for the `parse` subcommand, field set matching the
/// structured version: canonical strings, classification flags and the
/// rendered qualifier tags (null when absent).
#[derive(Serialize)]
struct ParseReport {
    normalized: String,
    public: String,
    base_version: String,
    is_prerelease: bool,
    is_postrelease: bool,
    is_devrelease: bool,
    epoch: u64,
    release: Vec<u64>,
    pre: Option<String>,
    post: Option<String>,
    dev: Option<String>,
    local: Option<String>,
}

impl ParseReport {
    fn new(version: &Version) -> Self {
        ParseReport {
            normalized: version.normalized(),
            public: version.public(),
            base_version: version.base_version(),
            is_prerelease: version.is_prerelease(),
            is_postrelease: version.is_postrelease(),
            is_devrelease: version.is_devrelease(),
            epoch: version.epoch(),
            release: version.release().to_vec(),
            pre: version.pre_tag(),
            post: version.post_tag(),
            dev: version.dev_tag(),
            local: version.local_tag(),
        }
    }
}

fn ordering_to_int(ordering: Ordering) -> i32 {
    match ordering {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

fn run(args: Args) -> Result<()> {
    let parser = VersionParser::new();

    match args.command {
        Commands::Compare { v1, v2 } => {
            let a = parser.parse(&v1)?;
            let b = parser.parse(&v2)?;
            debug!("comparing {} against {}", a, b);
            println!("{}", ordering_to_int(Comparator::compare(&a, &b)));
        }
        Commands::Parse { version } => {
            let parsed = parser.parse(&version)?;
            debug!("parsed {} as {}", version, parsed);
            println!("{}", serde_json::to_string(&ParseReport::new(&parsed))?);
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    // Uniform exit code 1 on every error path; clap's default would exit 2
    // for malformed arguments.
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            return if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            };
        }
    };

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
