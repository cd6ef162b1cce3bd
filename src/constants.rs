//! Default parameters and fixed thresholds for palette extraction
//!
//! The naming band boundaries are output-compatibility constraints:
//! changing them changes the labels reported for borderline colors.

/// Image normalization parameters
pub mod resize {
    /// Working resolution width after downsampling
    pub const TARGET_WIDTH: u32 = 150;

    /// Working resolution height after downsampling
    pub const TARGET_HEIGHT: u32 = 150;
}

/// K-means clustering defaults
pub mod clustering {
    /// Default seed for initial centroid selection
    pub const DEFAULT_SEED: u64 = 42;

    /// Default number of restarts; the lowest-inertia run is kept
    pub const DEFAULT_RESTARTS: u32 = 10;

    /// Hard cap on iterations per run
    pub const MAX_ITERATIONS: usize = 300;

    /// Centroid movement threshold for convergence
    pub const CONVERGENCE_THRESHOLD: f32 = 1e-4;

    /// Upper bound on requested colors (cluster indices are 8-bit)
    pub const MAX_COLORS: usize = 256;
}

/// HSV band boundaries for color naming
pub mod naming {
    /// Saturation below which a color is treated as a gray shade
    pub const GRAY_SATURATION_MAX: f32 = 0.1;

    /// Value cutoffs for the gray ladder: Black / Dark Gray / Gray / White
    pub const BLACK_VALUE_MAX: f32 = 0.2;
    pub const DARK_GRAY_VALUE_MAX: f32 = 0.5;
    pub const GRAY_VALUE_MAX: f32 = 0.8;

    /// Hue band edges in degrees
    pub const RED_HUE_MAX: f32 = 30.0;
    pub const ORANGE_HUE_MAX: f32 = 50.0;
    pub const YELLOW_HUE_MAX: f32 = 90.0;
    pub const GREEN_HUE_MAX: f32 = 150.0;
    pub const CYAN_HUE_MAX: f32 = 210.0;
    pub const BLUE_HUE_MAX: f32 = 270.0;
    pub const PURPLE_HUE_MAX: f32 = 330.0;

    /// Below this saturation a low-hue color reads as brown, not red
    pub const RED_SATURATION_MIN: f32 = 0.6;

    /// Above this value a high-hue color reads as pink, not red
    pub const PINK_VALUE_MIN: f32 = 0.8;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resize_target_is_nonzero() {
        assert!(resize::TARGET_WIDTH > 0);
        assert!(resize::TARGET_HEIGHT > 0);
    }

    #[test]
    fn test_clustering_defaults_terminate() {
        assert!(clustering::MAX_ITERATIONS > 0);
        assert!(clustering::CONVERGENCE_THRESHOLD > 0.0);
        assert!(clustering::DEFAULT_RESTARTS > 0);
    }

    #[test]
    fn test_naming_bands_are_ordered() {
        assert!(naming::BLACK_VALUE_MAX < naming::DARK_GRAY_VALUE_MAX);
        assert!(naming::DARK_GRAY_VALUE_MAX < naming::GRAY_VALUE_MAX);
        assert!(naming::RED_HUE_MAX < naming::ORANGE_HUE_MAX);
        assert!(naming::ORANGE_HUE_MAX < naming::YELLOW_HUE_MAX);
        assert!(naming::YELLOW_HUE_MAX < naming::GREEN_HUE_MAX);
        assert!(naming::GREEN_HUE_MAX < naming::CYAN_HUE_MAX);
        assert!(naming::CYAN_HUE_MAX < naming::BLUE_HUE_MAX);
        assert!(naming::BLUE_HUE_MAX < naming::PURPLE_HUE_MAX);
        assert!(naming::PURPLE_HUE_MAX < 360.0);
    }
}
