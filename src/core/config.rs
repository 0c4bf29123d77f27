//! Configuration
//!
//! `ChartConfig` is read from JSON with a serde default per field, so a
//! config file only needs the keys it changes. Lookup order is an explicit
//! path, then `./.bodygraph.json`, then `<config dir>/bodygraph/config.json`,
//! then built-in defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::error::{ChartError, Result};

/// Name of the per-directory config file.
pub const LOCAL_CONFIG_FILE: &str = ".bodygraph.json";

/// Output format for reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable report (default)
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Engine and report settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Solar arc between the design and birth instants
    #[serde(default = "default_design_arc")]
    pub design_arc_degrees: f64,
    /// Upper bound on design-instant refinement steps
    #[serde(default = "default_solver_iterations")]
    pub solver_iterations: u32,
    /// Stop refining once the Sun is this close to its target, in degrees
    #[serde(default = "default_solver_tolerance")]
    pub solver_tolerance: f64,
    #[serde(default)]
    pub format: OutputFormat,
    /// Include house numbers in text reports
    #[serde(default = "default_true")]
    pub show_houses: bool,
    /// Include the cross points section in text reports
    #[serde(default = "default_true")]
    pub show_cross_points: bool,
}

fn default_design_arc() -> f64 {
    88.0
}

fn default_solver_iterations() -> u32 {
    5
}

fn default_solver_tolerance() -> f64 {
    0.0001
}

fn default_true() -> bool {
    true
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            design_arc_degrees: default_design_arc(),
            solver_iterations: default_solver_iterations(),
            solver_tolerance: default_solver_tolerance(),
            format: OutputFormat::default(),
            show_houses: true,
            show_cross_points: true,
        }
    }
}

impl ChartConfig {
    /// Load from a JSON file; every key is optional.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: ChartConfig = serde_json::from_str(&content).map_err(|e| {
            ChartError::invalid_config(format!("{}: {}", path.display(), e))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the solver cannot work with.
    pub fn validate(&self) -> Result<()> {
        if !(self.design_arc_degrees > 0.0 && self.design_arc_degrees < 360.0) {
            return Err(ChartError::invalid_config(format!(
                "design_arc_degrees must be between 0 and 360, got {}",
                self.design_arc_degrees
            )));
        }
        if !self.solver_tolerance.is_finite() || self.solver_tolerance <= 0.0 {
            return Err(ChartError::invalid_config(format!(
                "solver_tolerance must be positive, got {}",
                self.solver_tolerance
            )));
        }
        Ok(())
    }

    /// Candidate config files in lookup order, excluding an explicit path.
    pub fn search_paths(working_dir: &Path) -> Vec<PathBuf> {
        let mut paths = vec![working_dir.join(LOCAL_CONFIG_FILE)];
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("bodygraph").join("config.json"));
        }
        paths
    }

    /// Resolve the configuration.
    ///
    /// An explicit path must load. Discovered files that fail to load are
    /// skipped with a warning.
    pub fn load(explicit: Option<&Path>, working_dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path).map_err(|e| {
                e.with_context(format!("loading config {}", path.display()))
            });
        }

        for path in Self::search_paths(working_dir) {
            if !path.is_file() {
                continue;
            }
            match Self::from_file(&path) {
                Ok(config) => {
                    debug!(path = %path.display(), "loaded config");
                    return Ok(config);
                }
                Err(e) => warn!(path = %path.display(), error = %e, "ignoring unreadable config"),
            }
        }

        Ok(Self::default())
    }

    pub fn with_design_arc(mut self, degrees: f64) -> Self {
        self.design_arc_degrees = degrees;
        self
    }

    pub fn with_solver(mut self, iterations: u32, tolerance: f64) -> Self {
        self.solver_iterations = iterations;
        self.solver_tolerance = tolerance;
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_houses(mut self, show: bool) -> Self {
        self.show_houses = show;
        self
    }

    pub fn with_cross_points(mut self, show: bool) -> Self {
        self.show_cross_points = show;
        self
    }
}
