//! Shared setup for the `hub` and `sweep` demo binaries.
//!
//! Both binaries take an optional JSON file as their first argument.  Any
//! field it leaves out keeps its default:
//!
//! ```json
//! {
//!   "sim":       { "plb_stands": 35, "horizon": 360, "tie_break": "arrivals_first" },
//!   "generator": { "hours": 6, "arrivals_per_hour": 45, "seed": 42 },
//!   "data_dir":  "data"
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use stand_core::SimConfig;
use stand_schedule::GeneratorConfig;
use tracing_subscriber::EnvFilter;

/// Everything a demo run needs.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HubConfig {
    pub sim:          SimConfig,
    pub generator:    GeneratorConfig,
    /// Input and result tables are written here.
    pub data_dir:     PathBuf,
    pub summary_path: PathBuf,
    /// PLB counts tried by `sweep`.
    pub sweep_counts: Vec<u32>,
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            sim:          SimConfig::default(),
            generator:    GeneratorConfig::default(),
            data_dir:     PathBuf::from("data"),
            summary_path: PathBuf::from("analytics/metrics_summary.txt"),
            sweep_counts: (0..=50).step_by(5).collect(),
        }
    }
}

impl HubConfig {
    /// Read overrides from `path`, or use the defaults when `None`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config = serde_json::from_str(&text)
            .with_context(|| format!("parsing config {}", path.display()))?;
        Ok(config)
    }

    /// Load the config named by the first command-line argument, if any.
    pub fn from_args() -> Result<Self> {
        let arg = std::env::args_os().nth(1).map(PathBuf::from);
        Self::load(arg.as_deref())
    }

    pub fn input_csv(&self) -> PathBuf {
        self.data_dir.join("input_aircraft.csv")
    }
}

/// Install a `fmt` subscriber filtered by `RUST_LOG` (default `info`).
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();
}
