//! # Palette Scan
//!
//! A Rust crate for extracting a ranked palette of dominant colors from
//! an image.
//!
//! The pipeline normalizes the input (white-composites transparency,
//! downsamples to a small working resolution), clusters the pixels with
//! seeded k-means, ranks the clusters by pixel share, and derives
//! hex/RGB/CMYK representations plus a coarse human-readable name for
//! each cluster. Results are deterministic for a fixed configuration.
//!
//! ## Example
//!
//! ```rust,no_run
//! use palette_scan::{extract_palette, DEFAULT_NUM_COLORS};
//! use std::path::Path;
//!
//! let palette = extract_palette(Path::new("photo.png"), DEFAULT_NUM_COLORS)?;
//! for entry in &palette {
//!     println!("{} {} {:.1}%", entry.color_name, entry.hex, entry.percentage);
//! }
//! # Ok::<(), palette_scan::ExtractionError>(())
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

pub mod cluster;
pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod normalize;

pub use config::ExtractorConfig;
pub use error::{ExtractionError, Result};

use cluster::{cluster_pixels, ClusterColor};
use normalize::{decode_bytes, decode_file, normalize, PixelBatch};

/// Number of colors extracted when the caller does not specify one
pub const DEFAULT_NUM_COLORS: usize = 5;

/// One extracted palette color with all of its output representations
///
/// Entries are immutable once produced; the ordering of the result list
/// is significant (descending by percentage).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteEntry {
    /// Lowercase `#rrggbb` representation
    pub hex: String,
    /// `rgb(r, g, b)` representation
    pub rgb: String,
    /// Raw RGB components, each in [0, 255]
    pub rgb_values: [u8; 3],
    /// `cmyk(c%, m%, y%, k%)` representation
    pub cmyk: String,
    /// Raw CMYK percentages, each in [0, 100]
    pub cmyk_values: [u8; 4],
    /// Share of image pixels in this cluster, rounded to one decimal
    pub percentage: f32,
    /// Coarse categorical color name (e.g. "Red", "Dark Gray")
    pub color_name: String,
}

/// Extract a ranked color palette from an image file
///
/// Uses the default configuration (150x150 working resolution, seed 42,
/// 10 restarts). This is the main entry point for most callers.
///
/// # Arguments
///
/// * `path` - Path to the image file
/// * `num_colors` - Number of clusters to extract (1 to 256)
///
/// # Errors
///
/// Returns `ExtractionError` if the file cannot be decoded, the image is
/// empty, or `num_colors` is out of range.
pub fn extract_palette(path: &Path, num_colors: usize) -> Result<Vec<PaletteEntry>> {
    let image = decode_file(path)?;
    extract_from_image(&image, num_colors, &ExtractorConfig::default())
}

/// Extract a ranked color palette from in-memory image bytes
pub fn extract_palette_from_bytes(bytes: &[u8], num_colors: usize) -> Result<Vec<PaletteEntry>> {
    let image = decode_bytes(bytes)?;
    extract_from_image(&image, num_colors, &ExtractorConfig::default())
}

/// Extract a ranked color palette with explicit configuration
///
/// Exposes the seed, restart count, and working resolution so callers
/// can trade accuracy for speed or pin down reproducibility.
pub fn extract_palette_with_config(
    bytes: &[u8],
    num_colors: usize,
    config: &ExtractorConfig,
) -> Result<Vec<PaletteEntry>> {
    let image = decode_bytes(bytes)?;
    extract_from_image(&image, num_colors, config)
}

fn extract_from_image(
    image: &image::DynamicImage,
    num_colors: usize,
    config: &ExtractorConfig,
) -> Result<Vec<PaletteEntry>> {
    let batch = normalize(image, config)?;
    let clusters = cluster_pixels(&batch, num_colors, config)?;
    Ok(build_entries(&clusters, &batch))
}

/// Assemble the final palette entries from ranked clusters
fn build_entries(clusters: &[ClusterColor], batch: &PixelBatch) -> Vec<PaletteEntry> {
    let total = batch.len() as f32;
    clusters
        .iter()
        .map(|cluster| {
            let rgb_values = color::round_centroid(cluster.centroid);
            let cmyk_values = color::rgb_to_cmyk(rgb_values);
            let percentage = round_one_decimal(cluster.count as f32 / total * 100.0);

            PaletteEntry {
                hex: color::hex(rgb_values),
                rgb: color::rgb_string(rgb_values),
                rgb_values,
                cmyk: color::cmyk_string(cmyk_values),
                cmyk_values,
                percentage,
                color_name: color::color_name(rgb_values).to_string(),
            }
        })
        .collect()
}

/// Round to one decimal place, ties to even
fn round_one_decimal(value: f32) -> f32 {
    (value * 10.0).round_ties_even() / 10.0
}
