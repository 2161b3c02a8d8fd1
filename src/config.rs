//! Run configuration.
//!
//! Options are given as `key=value` arguments (a leading `--` is accepted).
//! A `config=<path>` argument loads a JSON file first; explicit arguments
//! then override the values it sets.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::algorithm::driver::DriverConfig;
use crate::graph::types::VertexId;
use crate::{Error, Result};

/// Options recognised by the `sssp` binary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Edge list file
    pub file: Option<PathBuf>,
    /// Maximum number of passes
    pub niters: u32,
    /// Revisit only vertices whose edges changed
    pub scheduler: bool,
    /// Skip the computation and analyse an existing label file
    pub onlyresult: bool,
    pub source: VertexId,
    /// Vertices per execution window
    pub window: usize,
    /// Run windows on the rayon pool
    pub parallel: bool,
    /// Compare the result with a breadth-first search
    pub verify: bool,
    /// Print usage and exit
    #[serde(skip)]
    pub help: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        let driver = DriverConfig::default();
        RunConfig {
            file: None,
            niters: driver.max_passes,
            scheduler: driver.scheduling,
            onlyresult: false,
            source: driver.source,
            window: driver.window_size,
            parallel: driver.parallel,
            verify: false,
            help: false,
        }
    }
}

impl RunConfig {
    pub fn help() -> &'static str {
        "Usage: sssp file=<edge-list> [options]\n\
         \n\
         Options:\n\
         \x20 file=PATH        edge list, one 'source target' pair per line\n\
         \x20 niters=N         maximum number of passes (default 1000)\n\
         \x20 scheduler=0|1    revisit only vertices whose edges changed (default 0)\n\
         \x20 onlyresult=0|1   skip computation, analyse PATH.sssp.labels (default 0)\n\
         \x20 source=ID        source vertex (default 0)\n\
         \x20 window=N         vertices per execution window (default 1048576)\n\
         \x20 parallel=0|1     run windows on all cores (default 0)\n\
         \x20 verify=0|1       check the result against breadth-first search (default 0)\n\
         \x20 config=PATH      JSON file with any of the options above\n\
         \n\
         Logging is controlled with RUST_LOG, e.g. RUST_LOG=debug."
    }

    /// Parses `key=value` arguments, without the program name
    pub fn from_args(args: &[&str]) -> Result<Self> {
        let mut pairs = Vec::with_capacity(args.len());
        for arg in args {
            let arg = arg.trim_start_matches("--");
            if arg == "help" || arg == "h" || arg == "-h" {
                return Ok(RunConfig {
                    help: true,
                    ..RunConfig::default()
                });
            }
            let (key, value) = arg
                .split_once('=')
                .ok_or_else(|| Error::Config(format!("expected key=value, got '{}'", arg)))?;
            pairs.push((key, value));
        }

        let mut config = match pairs.iter().find(|(key, _)| *key == "config") {
            Some((_, path)) => RunConfig::from_file(path)?,
            None => RunConfig::default(),
        };

        for (key, value) in pairs {
            config.set(key, value)?;
        }
        Ok(config)
    }

    /// Loads a JSON configuration file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| Error::io(path, source))?;
        serde_json::from_str(&text)
            .map_err(|err| Error::Config(format!("{}: {}", path.display(), err)))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "config" => {}
            "file" => self.file = Some(PathBuf::from(value)),
            "niters" => self.niters = parse_number(key, value)?,
            "scheduler" => self.scheduler = parse_bool(key, value)?,
            "onlyresult" => self.onlyresult = parse_bool(key, value)?,
            "source" => self.source = parse_number(key, value)?,
            "window" => self.window = parse_number(key, value)?,
            "parallel" => self.parallel = parse_bool(key, value)?,
            "verify" => self.verify = parse_bool(key, value)?,
            other => return Err(Error::Config(format!("unknown option '{}'", other))),
        }
        Ok(())
    }

    /// The edge list path, which every run needs
    pub fn require_file(&self) -> Result<&Path> {
        self.file
            .as_deref()
            .ok_or_else(|| Error::Config("missing required option file=<path>".to_string()))
    }

    pub fn driver_config(&self) -> DriverConfig {
        DriverConfig {
            max_passes: self.niters,
            scheduling: self.scheduler,
            window_size: self.window,
            parallel: self.parallel,
            source: self.source,
        }
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(Error::Config(format!("{} expects 0 or 1, got '{}'", key, value))),
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| Error::Config(format!("{} expects a non-negative integer, got '{}'", key, value)))
}
