//! Engine configuration

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Configuration for an accrual engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccrualConfig {
    /// Record one `DailyAccrual` row per accrued day
    #[serde(default)]
    pub detailed_output: bool,

    /// Longest accrual horizon accepted at the boundary, in days.
    /// Default 36,600 (about 100 years)
    #[serde(default = "default_max_accrual_days")]
    pub max_accrual_days: u32,
}

fn default_max_accrual_days() -> u32 { 36_600 }

impl Default for AccrualConfig {
    fn default() -> Self {
        Self {
            detailed_output: false,
            max_accrual_days: default_max_accrual_days(),
        }
    }
}

impl AccrualConfig {
    /// Parse from a JSON string, missing fields take their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load from a JSON file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }
}
