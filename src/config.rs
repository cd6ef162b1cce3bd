//! Configuration for the palette extraction pipeline.
//!
//! The original extraction behavior relied on fixed values (seed 42,
//! 10 restarts, 150x150 working resolution). Those are promoted here to
//! explicit parameters so reproducibility is a contract rather than an
//! accident of hard-coded state.
//!
//! # Configuration Loading
//!
//! Configuration can be loaded from JSON files or constructed
//! programmatically:
//!
//! ```no_run
//! use palette_scan::ExtractorConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = ExtractorConfig::from_json_file(Path::new("config.json"))?;
//!
//! // Or use defaults
//! let config = ExtractorConfig::default();
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::constants::{clustering, resize};
use serde::{Deserialize, Serialize};

/// Tunable parameters for normalization and clustering.
///
/// Can be serialized to/from JSON for reproducible runs. Two extractions
/// with the same config and the same input bytes produce identical output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Working resolution width after downsampling
    pub resize_width: u32,

    /// Working resolution height after downsampling
    pub resize_height: u32,

    /// Seed for initial centroid selection
    pub seed: u64,

    /// Number of k-means restarts; the lowest-inertia run is kept
    pub restarts: u32,

    /// Hard cap on iterations per k-means run
    pub max_iterations: usize,

    /// Centroid movement threshold for convergence
    pub convergence: f32,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            resize_width: resize::TARGET_WIDTH,
            resize_height: resize::TARGET_HEIGHT,
            seed: clustering::DEFAULT_SEED,
            restarts: clustering::DEFAULT_RESTARTS,
            max_iterations: clustering::MAX_ITERATIONS,
            convergence: clustering::CONVERGENCE_THRESHOLD,
        }
    }
}

impl ExtractorConfig {
    /// Load configuration from JSON file
    pub fn from_json_file(path: &std::path::Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to JSON file
    pub fn to_json_file(&self, path: &std::path::Path) -> Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
