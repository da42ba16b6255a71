//! Run configuration and its validation.
//!
//! A run is described by five values, supplied either as positional command
//! line arguments or as a YAML file:
//!
//! - `num_objects`    – bodies to sample (integer, > 0)
//! - `num_iterations` – ticks to simulate (integer, > 0)
//! - `random_seed`    – seed for initial conditions (integer, > 0)
//! - `size_enclosure` – edge length of the cubic enclosure (real, > 0)
//! - `time_step`      – duration of one tick (real, > 0)
//!
//! # YAML format
//!
//! ```yaml
//! num_objects: 100
//! num_iterations: 50
//! random_seed: 7
//! size_enclosure: 1000.0
//! time_step: 0.1
//! ```
//!
//! Both forms are read as reals first and pass through the same checks, so
//! `3.0` is an acceptable object count while `3.5` is not.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Number of positional arguments a run takes
pub const ARG_COUNT: usize = 5;

const NAMES: [&str; ARG_COUNT] = [
    "num_objects",
    "num_iterations",
    "random_seed",
    "size_enclosure",
    "time_step",
];

/// Which of the two fatal input classes an error belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// Wrong argument count, unparsable value or unreadable config
    Arguments,
    /// Value parsed but is outside its allowed domain
    Domain,
}

impl ErrorClass {
    /// Process exit status for this class
    pub fn exit_code(self) -> u8 {
        match self {
            ErrorClass::Arguments => 255,
            ErrorClass::Domain => 254,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("expected {expected} arguments, found {found}")]
    ArgumentCount { expected: usize, found: usize },

    #[error("{name}: `{value}` is not a number")]
    Malformed { name: &'static str, value: String },

    #[error("{name} must be positive, got {value}")]
    NotPositive { name: &'static str, value: f64 },

    #[error("{name} must be an integer, got {value}")]
    NotIntegral { name: &'static str, value: f64 },

    #[error("{name} must be finite, got {value}")]
    NotFinite { name: &'static str, value: f64 },

    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed config file: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl ConfigError {
    pub fn class(&self) -> ErrorClass {
        match self {
            ConfigError::NotPositive { .. }
            | ConfigError::NotIntegral { .. }
            | ConfigError::NotFinite { .. } => ErrorClass::Domain,
            ConfigError::ArgumentCount { .. }
            | ConfigError::Malformed { .. }
            | ConfigError::Io(_)
            | ConfigError::Yaml(_) => ErrorClass::Arguments,
        }
    }
}

/// Validated run configuration
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub num_objects: usize,
    pub num_iterations: usize,
    pub random_seed: u64,
    pub size_enclosure: f64,
    pub time_step: f64,
}

/// YAML-facing form, all reals until validated
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunConfigFile {
    pub num_objects: f64,
    pub num_iterations: f64,
    pub random_seed: f64,
    pub size_enclosure: f64,
    pub time_step: f64,
}

impl RunConfig {
    /// Parse and validate the five positional arguments, in order
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self, ConfigError> {
        if args.len() != ARG_COUNT {
            return Err(ConfigError::ArgumentCount {
                expected: ARG_COUNT,
                found: args.len(),
            });
        }

        let mut values = [0.0; ARG_COUNT];
        for ((slot, raw), name) in values.iter_mut().zip(args).zip(NAMES) {
            *slot = parse_real(name, raw.as_ref())?;
        }

        Self::from_raw(values)
    }

    /// Load and validate a YAML run file
    pub fn from_yaml_path(path: &Path) -> Result<Self, ConfigError> {
        let file = File::open(path)?;
        Self::from_yaml_reader(BufReader::new(file))
    }

    pub fn from_yaml_reader<R: Read>(reader: R) -> Result<Self, ConfigError> {
        let raw: RunConfigFile = serde_yaml::from_reader(reader)?;
        Self::from_raw([
            raw.num_objects,
            raw.num_iterations,
            raw.random_seed,
            raw.size_enclosure,
            raw.time_step,
        ])
    }

    fn from_raw(values: [f64; ARG_COUNT]) -> Result<Self, ConfigError> {
        let [objects, iterations, seed, size, step] = values;

        // positivity is checked for all five before integrality
        for (value, name) in values.iter().zip(NAMES) {
            if !(*value > 0.0) {
                return Err(ConfigError::NotPositive { name, value: *value });
            }
        }

        Ok(Self {
            num_objects: integral(NAMES[0], objects)? as usize,
            num_iterations: integral(NAMES[1], iterations)? as usize,
            random_seed: integral(NAMES[2], seed)? as u64,
            size_enclosure: finite(NAMES[3], size)?,
            time_step: finite(NAMES[4], step)?,
        })
    }
}

fn parse_real(name: &'static str, raw: &str) -> Result<f64, ConfigError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| ConfigError::Malformed {
            name,
            value: raw.to_string(),
        })
}

fn integral(name: &'static str, value: f64) -> Result<f64, ConfigError> {
    // u64::MAX as f64 rounds up, so the bound is exclusive
    if !value.is_finite() || value.fract() != 0.0 || value >= u64::MAX as f64 {
        return Err(ConfigError::NotIntegral { name, value });
    }
    Ok(value)
}

fn finite(name: &'static str, value: f64) -> Result<f64, ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::NotFinite { name, value });
    }
    Ok(value)
}
