//! Pixel clustering and cluster ranking
//!
//! Runs seeded k-means over the normalized RGB samples, keeps the
//! lowest-inertia run out of several restarts, and ranks the resulting
//! clusters by pixel count. Determinism for a fixed seed is part of the
//! contract: the restart seeds are derived from the configured base seed
//! and the best run is selected with a strict comparison, so the first
//! run to reach the lowest score always wins.

use crate::config::ExtractorConfig;
use crate::constants::clustering;
use crate::error::{ExtractionError, Result};
use crate::normalize::PixelBatch;
use kmeans_colors::{get_kmeans, Kmeans};
use palette::Srgb;

/// One cluster of pixels: mean color and population.
///
/// The centroid components are in the [0, 255] range.
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterColor {
    /// Mean RGB position of the cluster
    pub centroid: [f32; 3],
    /// Number of samples assigned to the cluster
    pub count: usize,
}

/// Cluster a pixel batch into `k` groups, ranked by descending count
///
/// Degenerate clusters (zero assigned pixels) are dropped, so the result
/// may hold fewer than `k` entries. Equal-count clusters keep the
/// clustering output order.
///
/// # Errors
///
/// - `InvalidParameter` if `k` is 0, greater than 256, or the configured
///   restart count is 0
/// - `EmptyImage` if the batch holds no samples
/// - `Clustering` if a centroid comes back non-finite
pub fn cluster_pixels(
    batch: &PixelBatch,
    k: usize,
    config: &ExtractorConfig,
) -> Result<Vec<ClusterColor>> {
    if k == 0 || k > clustering::MAX_COLORS {
        return Err(ExtractionError::invalid_parameter("num_colors", k));
    }
    if config.restarts == 0 {
        return Err(ExtractionError::invalid_parameter("restarts", 0));
    }
    if batch.is_empty() {
        return Err(ExtractionError::EmptyImage);
    }

    let samples: Vec<Srgb<f32>> = batch
        .samples()
        .iter()
        .map(|s| s.into_format::<f32>())
        .collect();

    let mut best: Option<Kmeans<Srgb>> = None;
    for run in 0..config.restarts {
        let seed = config.seed.wrapping_add(u64::from(run));
        let result = get_kmeans(
            k,
            config.max_iterations,
            config.convergence,
            false,
            &samples,
            seed,
        );
        if best.as_ref().map_or(true, |b| result.score < b.score) {
            best = Some(result);
        }
    }
    // restarts > 0 was checked above
    let best = best.ok_or_else(|| ExtractionError::Clustering {
        reason: "no clustering run produced a result".into(),
    })?;

    let mut counts = vec![0usize; best.centroids.len()];
    for &index in &best.indices {
        counts[index as usize] += 1;
    }

    let clusters: Vec<ClusterColor> = best
        .centroids
        .iter()
        .zip(counts)
        .map(|(centroid, count)| {
            let centroid = [
                centroid.red * 255.0,
                centroid.green * 255.0,
                centroid.blue * 255.0,
            ];
            ClusterColor { centroid, count }
        })
        .collect();

    for cluster in &clusters {
        if cluster.centroid.iter().any(|c| !c.is_finite()) {
            return Err(ExtractionError::Clustering {
                reason: format!("non-finite centroid: {:?}", cluster.centroid),
            });
        }
    }

    Ok(rank_clusters(clusters))
}

/// Sort clusters by descending count, dropping empty ones.
///
/// The sort is stable, so equal-count clusters preserve their clustering
/// output order.
fn rank_clusters(mut clusters: Vec<ClusterColor>) -> Vec<ClusterColor> {
    clusters.retain(|c| c.count > 0);
    clusters.sort_by(|a, b| b.count.cmp(&a.count));
    clusters
}
