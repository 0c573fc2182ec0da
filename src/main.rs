#[macro_use] extern crate log;
extern crate simplelog;
extern crate rand;
extern crate percolation;

use rand::rngs::StdRng;
use rand::SeedableRng;
use simplelog::*;
use std::env;
use std::fs::File;
use std::process;

use percolation::{PercolationStats, SimulationConfig};


fn init_logging(config: &SimulationConfig) -> percolation::Result<()> {
	let term_level = if config.verbose { LevelFilter::Debug } else { LevelFilter::Warn };
	let mut loggers: Vec<Box<dyn SharedLogger>> = vec![
		TermLogger::new(
			term_level,
			ConfigBuilder::new().set_time_level(LevelFilter::Off).build(),
			TerminalMode::Stderr,
			ColorChoice::Auto),
	];
	if let Some(ref path) = config.log_file {
		let file = File::create(path).map_err(|e| percolation::PercolationError::Config(
			format!("cannot create log file {}: {}", path.display(), e)))?;
		loggers.push(WriteLogger::new(LevelFilter::Debug, Config::default(), file));
	}
	let _ = CombinedLogger::init(loggers);
	Ok(())
}

fn run(config: &SimulationConfig) -> percolation::Result<PercolationStats> {
	match config.seed {
		Some(seed) => {
			info!("seed: {}", seed);
			PercolationStats::with_rng(config.n, config.trials, &mut StdRng::seed_from_u64(seed))
		}
		None => PercolationStats::new(config.n, config.trials),
	}
}

fn main() {
	if env::args().any(|a| a == "--help" || a == "-h") {
		println!("{}", percolation::config::USAGE);
		return;
	}

	let config = match SimulationConfig::from_args(env::args().skip(1)) {
		Ok(config) => config,
		Err(e) => {
			eprintln!("{}", e);
			process::exit(1);
		}
	};
	if let Err(e) = init_logging(&config) {
		eprintln!("{}", e);
		process::exit(1);
	}
	debug!("{:?}", config);

	match run(&config) {
		Ok(stats) => {
			if config.json {
				println!("{}", stats.to_json());
			} else {
				println!("{}", stats);
			}
		}
		Err(e) => {
			error!("{}", e);
			process::exit(1);
		}
	}
}
