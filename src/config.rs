use crate::error::{LifeError, Result};
use crate::universe::{cell_count, MAX_CELLS};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Settings for a run of the simulation.
///
/// Every field is optional in the JSON form and falls back to the default run:
/// a 50x50 universe, half populated, for 1000 generations at 100ms each.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// The number of rows in the universe.
    pub rows: usize,
    /// The number of columns in the universe.
    pub cols: usize,
    /// Cells are alive when a draw in `[0, 100)` exceeds this value.
    pub threshold: u8,
    /// The number of generations to advance.
    pub generations: usize,
    /// The delay between two frames, in milliseconds.
    pub delay_ms: u64,
    /// The seed for the random number generator. Seeded from entropy when `None`.
    pub seed: Option<u64>,
    /// A pattern file to start from instead of a random population.
    /// Its dimensions take precedence over `rows` and `cols`.
    pub pattern_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            rows: 50,
            cols: 50,
            threshold: 50,
            generations: 1000,
            delay_ms: 100,
            seed: None,
            pattern_file: None,
        }
    }
}

impl Config {
    pub fn from_json(contents: &str) -> Result<Config> {
        let config: Config = serde_json::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path)?;
        Config::from_json(&contents)
    }

    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(LifeError::InvalidConfig(format!(
                "dimensions must be positive, got {}x{}",
                self.rows, self.cols
            )));
        }

        if cell_count(self.rows, self.cols).is_none() {
            return Err(LifeError::InvalidConfig(format!(
                "{}x{} exceeds the limit of {} cells",
                self.rows, self.cols, MAX_CELLS
            )));
        }

        if self.threshold > 100 {
            return Err(LifeError::InvalidConfig(format!(
                "threshold must be within [0, 100], got {}",
                self.threshold
            )));
        }

        Ok(())
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}
