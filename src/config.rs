use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{PercolationError, Result};

pub const USAGE: &str = "usage: percolation <n> <trials> [--seed <u64>] [--json] \
[--config <file.json>] [--log-file <path>] [-v|--verbose]";

/// Everything a run of the binary needs, after the config file and the
/// command line have been merged.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    pub n: usize,
    pub trials: usize,
    pub seed: Option<u64>,
    pub json: bool,
    pub log_file: Option<PathBuf>,
    pub verbose: bool,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct CliArgs {
    pub n: Option<usize>,
    pub trials: Option<usize>,
    pub seed: Option<u64>,
    pub json: bool,
    pub config: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
    pub verbose: bool,
}

impl SimulationConfig {
    /// Parses the arguments (without the program name) and reads `--config` if given.
    pub fn from_args<I: IntoIterator<Item = String>>(args: I) -> Result<SimulationConfig> {
        let cli = parse_args(args)?;
        let file = match cli.config {
            Some(ref path) => Some(read_config_file(path)?),
            None => None,
        };
        SimulationConfig::merge(cli, file.as_ref())
    }

    /// Command-line values win over file values.
    pub fn merge(cli: CliArgs, file: Option<&Value>) -> Result<SimulationConfig> {
        let (file_n, file_trials, file_seed) = match file {
            Some(value) => (
                json_positive(value, "n")?,
                json_positive(value, "trials")?,
                json_seed(value)?,
            ),
            None => (None, None, None),
        };
        let n = cli.n.or(file_n).ok_or_else(|| missing("n"))?;
        let trials = cli.trials.or(file_trials).ok_or_else(|| missing("trials"))?;
        Ok(SimulationConfig {
            n,
            trials,
            seed: cli.seed.or(file_seed),
            json: cli.json,
            log_file: cli.log_file,
            verbose: cli.verbose,
        })
    }
}

pub fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<CliArgs> {
    let mut cli = CliArgs::default();
    let mut positional = Vec::new();
    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--json" => cli.json = true,
            "-v" | "--verbose" => cli.verbose = true,
            "--seed" => {
                let raw = flag_value(&mut iter, "--seed")?;
                cli.seed = Some(raw.parse::<u64>().map_err(|_| PercolationError::InvalidArgument(
                    format!("--seed expects an unsigned integer, got '{}'", raw)))?);
            }
            "--config" => cli.config = Some(PathBuf::from(flag_value(&mut iter, "--config")?)),
            "--log-file" => cli.log_file = Some(PathBuf::from(flag_value(&mut iter, "--log-file")?)),
            s if s.starts_with("--") => {
                return Err(PercolationError::InvalidArgument(format!("unknown option '{}'", s)));
            }
            _ => positional.push(arg),
        }
    }

    if positional.len() > 2 {
        return Err(PercolationError::InvalidArgument(
            format!("expected at most 2 positional arguments, got {}", positional.len())));
    }
    let mut positional = positional.into_iter();
    if let Some(raw) = positional.next() {
        cli.n = Some(parse_positive("n", &raw)?);
    }
    if let Some(raw) = positional.next() {
        cli.trials = Some(parse_positive("trials", &raw)?);
    }
    Ok(cli)
}

/// Parses a strictly positive count. Negative numbers are reported as such
/// rather than as parse failures.
pub fn parse_positive(name: &str, raw: &str) -> Result<usize> {
    match raw.trim().parse::<i64>() {
        Ok(v) if v > 0 => Ok(v as usize),
        Ok(v) => Err(PercolationError::InvalidArgument(
            format!("{} must be positive, got {}", name, v))),
        Err(_) => Err(PercolationError::InvalidArgument(
            format!("{} must be a positive integer, got '{}'", name, raw))),
    }
}

pub fn read_config_file(path: &Path) -> Result<Value> {
    let text = fs::read_to_string(path).map_err(|e| PercolationError::Config(
        format!("cannot read {}: {}", path.display(), e)))?;
    let value: Value = serde_json::from_str(&text).map_err(|e| PercolationError::Config(
        format!("{} is not valid JSON: {}", path.display(), e)))?;
    if !value.is_object() {
        return Err(PercolationError::Config(
            format!("{} must hold a JSON object", path.display())));
    }
    info!("loaded config from {}", path.display());
    Ok(value)
}

fn flag_value<I: Iterator<Item = String>>(iter: &mut I, flag: &str) -> Result<String> {
    iter.next().ok_or_else(|| PercolationError::InvalidArgument(
        format!("{} needs a value", flag)))
}

fn json_positive(value: &Value, key: &str) -> Result<Option<usize>> {
    match value.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(v) => v.as_u64()
            .filter(|&x| x > 0)
            .map(|x| Some(x as usize))
            .ok_or_else(|| PercolationError::InvalidArgument(
                format!("config key '{}' must be a positive integer, got {}", key, v))),
    }
}

fn json_seed(value: &Value) -> Result<Option<u64>> {
    match value.get("seed") {
        None | Some(Value::Null) => Ok(None),
        Some(v) => v.as_u64().map(Some).ok_or_else(|| PercolationError::InvalidArgument(
            format!("config key 'seed' must be an unsigned integer, got {}", v))),
    }
}

fn missing(name: &str) -> PercolationError {
    PercolationError::InvalidArgument(format!("{} is required\n{}", name, USAGE))
}
