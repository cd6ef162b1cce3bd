//! Color representation and naming module
//!
//! Derives the output-facing representations (hex, RGB, CMYK strings)
//! and the coarse categorical name for a cluster centroid.

pub mod conversion;
pub mod naming;

pub use conversion::{cmyk_string, hex, rgb_string, rgb_to_cmyk, round_centroid};
pub use naming::color_name;
