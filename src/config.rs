//! Runtime configuration read from environment variables.
//!
//! | Variable            | Meaning                              | Default          |
//! |---------------------|--------------------------------------|------------------|
//! | `CROSSQUEST_SEED`   | RNG seed (u64)                       | system clock     |
//! | `CROSSQUEST_LOG`    | log file path; logging off if unset  | unset            |
//! | `CROSSQUEST_CELL_W` | terminal columns per grid cell, 1-64 | 3                |
//! | `CROSSQUEST_CELL_H` | terminal rows per grid cell, 1-64    | 1                |

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{bail, Context, Result};

use crate::term::MAX_CELL_SIZE;

pub const SEED_VAR: &str = "CROSSQUEST_SEED";
pub const LOG_VAR: &str = "CROSSQUEST_LOG";
pub const CELL_W_VAR: &str = "CROSSQUEST_CELL_W";
pub const CELL_H_VAR: &str = "CROSSQUEST_CELL_H";

const DEFAULT_CELL_W: u16 = 3;
const DEFAULT_CELL_H: u16 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub seed: u64,
    pub log_file: Option<PathBuf>,
    pub cell_w: u16,
    pub cell_h: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let seed = match lookup(SEED_VAR) {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .with_context(|| format!("{SEED_VAR} must be an unsigned integer, got {raw:?}"))?,
            None => clock_seed(),
        };

        let log_file = lookup(LOG_VAR)
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        let cell_w = parse_cells(&lookup, CELL_W_VAR, DEFAULT_CELL_W)?;
        let cell_h = parse_cells(&lookup, CELL_H_VAR, DEFAULT_CELL_H)?;

        Ok(Self {
            seed,
            log_file,
            cell_w,
            cell_h,
        })
    }
}

fn parse_cells(lookup: &impl Fn(&str) -> Option<String>, var: &str, default: u16) -> Result<u16> {
    let Some(raw) = lookup(var) else {
        return Ok(default);
    };
    let value = raw
        .trim()
        .parse::<u16>()
        .with_context(|| format!("{var} must be a positive integer, got {raw:?}"))?;
    if value == 0 {
        bail!("{var} must be at least 1");
    }
    if value > MAX_CELL_SIZE {
        bail!("{var} must be at most {MAX_CELL_SIZE}, got {value}");
    }
    Ok(value)
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<Config> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = config(&[]).unwrap();
        assert_eq!(cfg.cell_w, 3);
        assert_eq!(cfg.cell_h, 1);
        assert_eq!(cfg.log_file, None);
    }

    #[test]
    fn reads_all_variables() {
        let cfg = config(&[
            (SEED_VAR, "42"),
            (LOG_VAR, "/tmp/crossquest.log"),
            (CELL_W_VAR, "2"),
            (CELL_H_VAR, " 2 "),
        ])
        .unwrap();
        assert_eq!(cfg.seed, 42);
        assert_eq!(cfg.log_file, Some(PathBuf::from("/tmp/crossquest.log")));
        assert_eq!((cfg.cell_w, cfg.cell_h), (2, 2));
    }

    #[test]
    fn empty_log_path_disables_logging() {
        let cfg = config(&[(LOG_VAR, "  ")]).unwrap();
        assert_eq!(cfg.log_file, None);
    }

    #[test]
    fn rejects_bad_values() {
        let err = config(&[(SEED_VAR, "abc")]).unwrap_err();
        assert!(err.to_string().contains(SEED_VAR));

        let err = config(&[(CELL_W_VAR, "0")]).unwrap_err();
        assert!(err.to_string().contains("at least 1"));

        assert!(config(&[(CELL_H_VAR, "-1")]).is_err());

        let err = config(&[(CELL_H_VAR, "5000")]).unwrap_err();
        assert!(err.to_string().contains("at most 64"));
        assert!(config(&[(CELL_W_VAR, "64")]).is_ok());
    }
}
