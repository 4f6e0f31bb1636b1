use std::io::{self, Write};
use std::process;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use replimut::config::{self, Config};
use replimut::io::{fasta, matrix};
use replimut::report::{write_report, Report};
use replimut::simulate::Simulator;
use replimut::{summarize, CodingSequence, Result};

fn main() {
    let matches = config::command().get_matches();

    let config = match Config::from_matches(&matches) {
        Ok(config) => config,
        Err(why) => {
            eprintln!("error: {}", why);
            process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(why) = run(&config) {
        eprintln!("error: {}", why);
        process::exit(1);
    }
}

fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.verbosity.filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(config: &Config) -> Result<()> {
    config.validate()?;

    let seq = fasta::read_sequence_file(&config.fasta)?;
    let cds = CodingSequence::from_rna(&seq);
    let bias = matrix::load_matrix(&config.matrix)?;
    let tr = bias.power(config.rounds as i64)?;

    let summary = summarize(&cds, &tr, config.region);

    let simulation = match config.simulate {
        Some(replicates) => {
            debug!("simulating {} replicates with seed {}", replicates, config.seed);
            let mut rng = StdRng::seed_from_u64(config.seed);
            Some(Simulator::new(&bias, config.rounds).run(&cds, replicates, &mut rng)?)
        }
        None => None,
    };

    let protein = cds.translate();
    let report = Report {
        fasta: &config.fasta,
        matrix: &config.matrix,
        rounds: config.rounds,
        seq_len: seq.len(),
        protein: &protein,
        summary: &summary,
        simulation: simulation.as_ref(),
        max_k: config.max_k,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, &report)?;
    out.flush()?;

    Ok(())
}
