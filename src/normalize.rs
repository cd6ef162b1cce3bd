//! Image normalization: decode, flatten transparency, downsample
//!
//! Turns arbitrary raster input into a fixed-size batch of opaque RGB
//! samples for clustering. Transparency is composited over an opaque
//! white background first, so alpha never leaks into RGB-space
//! clustering. Resizing always uses bilinear filtering; the same input
//! bytes yield the same batch on every run.

use crate::config::ExtractorConfig;
use crate::error::{ExtractionError, Result};
use image::{imageops, imageops::FilterType, DynamicImage, Rgb, RgbImage};
use palette::Srgb;
use std::path::Path;

/// Flattened sequence of RGB samples from one normalized image.
///
/// Samples are stored in row-major order; `len() == width * height` of
/// the normalized image.
#[derive(Debug, Clone)]
pub struct PixelBatch {
    pixels: Vec<Srgb<u8>>,
    width: u32,
    height: u32,
}

impl PixelBatch {
    /// Number of samples in the batch
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// True if the batch holds no samples
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Dimensions of the normalized image the batch was taken from
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Samples in row-major order
    pub fn samples(&self) -> &[Srgb<u8>] {
        &self.pixels
    }
}

/// Decode an image from raw bytes, auto-detecting the format
pub fn decode_bytes(bytes: &[u8]) -> Result<DynamicImage> {
    image::load_from_memory(bytes)
        .map_err(|e| ExtractionError::decode("input bytes are not a supported image", e))
}

/// Decode an image from disk
pub fn decode_file(path: &Path) -> Result<DynamicImage> {
    let reader = image::ImageReader::open(path).map_err(|e| {
        ExtractionError::decode(format!("failed to open image file: {}", path.display()), e)
    })?;

    reader.decode().map_err(|e| {
        ExtractionError::decode(format!("failed to decode image: {}", path.display()), e)
    })
}

/// Normalize a decoded image into a [`PixelBatch`]
///
/// Composites over white, resizes to the configured working resolution
/// with bilinear filtering, and flattens row-major.
///
/// # Errors
///
/// Returns `ExtractionError::EmptyImage` if the input or the configured
/// working resolution has zero pixels.
pub fn normalize(image: &DynamicImage, config: &ExtractorConfig) -> Result<PixelBatch> {
    let rgba = image.to_rgba8();
    if rgba.width() == 0 || rgba.height() == 0 {
        return Err(ExtractionError::EmptyImage);
    }

    // Flatten transparency onto an opaque white background:
    // out = alpha * fg + (1 - alpha) * 255, per channel.
    let mut composite = RgbImage::new(rgba.width(), rgba.height());
    for (x, y, pixel) in rgba.enumerate_pixels() {
        let [r, g, b, a] = pixel.0;
        let alpha = f32::from(a) / 255.0;
        let blend = |fg: u8| (alpha * f32::from(fg) + (1.0 - alpha) * 255.0).round() as u8;
        composite.put_pixel(x, y, Rgb([blend(r), blend(g), blend(b)]));
    }

    let resized = imageops::resize(
        &composite,
        config.resize_width,
        config.resize_height,
        FilterType::Triangle,
    );

    let (width, height) = resized.dimensions();
    let pixels: Vec<Srgb<u8>> = resized
        .pixels()
        .map(|p| Srgb::new(p.0[0], p.0[1], p.0[2]))
        .collect();

    if pixels.is_empty() {
        return Err(ExtractionError::EmptyImage);
    }

    Ok(PixelBatch {
        pixels,
        width,
        height,
    })
}
