//! Run configuration, loadable from YAML with defaults for every field.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub grid: GridConfig,
    #[serde(default)]
    pub seed: SeedConfig,
    #[serde(default)]
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Board size used when the starting board is built from a pattern or at random.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub rows: usize,
    pub cols: usize,
}

/// Where the first generation comes from. Checked in order: `input`,
/// `pattern`, `random_seed`; with none set the 5x5 default board is used.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    /// Board file in the plain-text format
    pub input: Option<PathBuf>,
    /// Name from the pattern table
    pub pattern: Option<String>,
    pub origin_row: usize,
    pub origin_col: usize,
    /// Fill about a third of the board pseudo-randomly
    pub random_seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub generations: usize,
    /// Stop once a board repeats within `cycle_history` generations
    pub stop_on_cycle: bool,
    pub cycle_history: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub log_level: String,
    /// Generations between progress reports
    pub report_interval: usize,
}

impl SeedConfig {
    /// Start from a board file, overriding any pattern or random seed.
    pub fn use_input(&mut self, path: PathBuf) {
        self.input = Some(path);
        self.pattern = None;
        self.random_seed = None;
    }

    /// Start from a named pattern, overriding any board file or random seed.
    pub fn use_pattern(&mut self, name: String) {
        self.pattern = Some(name);
        self.input = None;
        self.random_seed = None;
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self { rows: 50, cols: 50 }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            generations: 100,
            stop_on_cycle: true,
            cycle_history: 10,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            report_interval: 10,
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a YAML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let yaml = serde_yaml::to_string(self)?;
        std::fs::write(path, yaml)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.grid.rows == 0 || self.grid.cols == 0 {
            return Err(Error::InvalidConfig(format!(
                "grid must be at least 1x1, got {}x{}",
                self.grid.rows, self.grid.cols
            )));
        }
        if self.grid.rows.checked_mul(self.grid.cols).is_none() {
            return Err(Error::InvalidConfig(format!(
                "grid {}x{} is too large",
                self.grid.rows, self.grid.cols
            )));
        }
        if self.seed.origin_row >= self.grid.rows || self.seed.origin_col >= self.grid.cols {
            return Err(Error::InvalidConfig(
                "pattern origin must lie inside the grid".to_string(),
            ));
        }
        if self.simulation.cycle_history == 0 {
            return Err(Error::InvalidConfig("cycle_history must be > 0".to_string()));
        }
        if self.logging.report_interval == 0 {
            return Err(Error::InvalidConfig("report_interval must be > 0".to_string()));
        }
        Ok(())
    }
}
