//! Command-line configuration.

use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};

use crate::error::{Error, Result};
use crate::utils::parse_region;

/// Default number of nonsilent-count probabilities reported.
pub const DEFAULT_MAX_K: usize = 10;

/// Default seed for simulations.
pub const DEFAULT_SEED: u64 = 42;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
}

impl Verbosity {
    /// Default log filter directive for this verbosity.
    pub fn filter(&self) -> &'static str {
        match *self {
            Verbosity::Quiet => "error",
            Verbosity::Normal => "warn",
            Verbosity::Verbose => "debug",
        }
    }
}

/// Settings of a single invocation.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// FASTA file holding the coding sequence
    pub fasta: PathBuf,
    /// CSV file holding the per-cycle substitution matrix
    pub matrix: PathBuf,
    /// Number of replication cycles
    pub rounds: u64,
    /// Nucleotide region of interest, 1-based inclusive
    pub region: Option<(u64, u64)>,
    /// Number of Monte Carlo replicates, if a simulation is requested
    pub simulate: Option<usize>,
    pub seed: u64,
    /// Largest k for which P(k nonsilent) is reported
    pub max_k: usize,
    pub verbosity: Verbosity,
}

pub fn command() -> Command {
    Command::new("replimut")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Protein outcomes under biased polymerase substitution over replication cycles")
        .arg(
            Arg::new("fasta")
                .short('f')
                .long("fasta")
                .value_name("FILE")
                .required(true)
                .help("mRNA or DNA FASTA with the coding sequence (AUG...STOP)"),
        )
        .arg(
            Arg::new("bias")
                .short('b')
                .long("bias")
                .value_name("FILE")
                .required(true)
                .help("4x4 CSV with header A,C,G,U (per-cycle substitution matrix)"),
        )
        .arg(
            Arg::new("rounds")
                .short('r')
                .long("rounds")
                .value_name("R")
                .default_value("1")
                .allow_negative_numbers(true)
                .value_parser(value_parser!(i64))
                .help("Replication cycles"),
        )
        .arg(
            Arg::new("region")
                .long("region")
                .value_name("START-END")
                .allow_hyphen_values(true)
                .help("Nucleotide region of interest, e.g. 300-600 (1-based, inclusive)"),
        )
        .arg(
            Arg::new("simulate")
                .long("simulate")
                .value_name("N")
                .value_parser(value_parser!(usize))
                .help("Cross-check with N Monte Carlo replicates"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .value_name("SEED")
                .value_parser(value_parser!(u64))
                .help("Random seed for simulations"),
        )
        .arg(
            Arg::new("max-k")
                .long("max-k")
                .value_name("K")
                .value_parser(value_parser!(usize))
                .help("Report P(k nonsilent) for k up to K (default: 10)"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .conflicts_with("quiet")
                .help("Log progress details"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .action(ArgAction::SetTrue)
                .help("Log errors only"),
        )
}

impl Config {
    /// Build configuration from parsed command-line arguments.
    pub fn from_matches(matches: &ArgMatches) -> Result<Config> {
        let path = |id: &str| matches.get_one::<String>(id).map(PathBuf::from).unwrap_or_default();

        let rounds = matches.get_one::<i64>("rounds").copied().unwrap_or(1);
        if rounds < 0 {
            return Err(Error::InvalidArgument(String::from("rounds must be >= 0")));
        }

        let region = match matches.get_one::<String>("region") {
            Some(x) => Some(parse_region(x)?),
            None => None,
        };

        let verbosity = if matches.get_flag("verbose") {
            Verbosity::Verbose
        } else if matches.get_flag("quiet") {
            Verbosity::Quiet
        } else {
            Verbosity::Normal
        };

        Ok(Config {
            fasta: path("fasta"),
            matrix: path("bias"),
            rounds: rounds as u64,
            region,
            simulate: matches.get_one::<usize>("simulate").copied(),
            seed: matches.get_one::<u64>("seed").copied().unwrap_or(DEFAULT_SEED),
            max_k: matches.get_one::<usize>("max-k").copied().unwrap_or(DEFAULT_MAX_K),
            verbosity,
        })
    }

    /// Check that the input files exist and that settings are usable.
    pub fn validate(&self) -> Result<()> {
        if !self.fasta.exists() {
            return Err(Error::InvalidArgument(format!("FASTA not found: {}", self.fasta.display())));
        }
        if !self.matrix.exists() {
            return Err(Error::InvalidArgument(format!("bias CSV not found: {}", self.matrix.display())));
        }
        if self.simulate == Some(0) {
            return Err(Error::InvalidArgument(String::from("number of simulations must be > 0")));
        }
        Ok(())
    }
}
