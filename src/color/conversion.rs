//! Color space conversion utilities
//!
//! Converts integer RGB triples into the hex, `rgb(...)`, and CMYK
//! representations reported for each palette entry. CMYK percentages use
//! round-half-to-even, matching the reference behavior; the choice only
//! matters for exact .5 boundaries.

/// Round a float centroid to an integer RGB triple, clamped to [0, 255]
pub fn round_centroid(centroid: [f32; 3]) -> [u8; 3] {
    [
        centroid[0].round().clamp(0.0, 255.0) as u8,
        centroid[1].round().clamp(0.0, 255.0) as u8,
        centroid[2].round().clamp(0.0, 255.0) as u8,
    ]
}

/// Format an RGB triple as a lowercase `#rrggbb` hex string
pub fn hex(rgb: [u8; 3]) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb[0], rgb[1], rgb[2])
}

/// Format an RGB triple as `rgb(r, g, b)`
pub fn rgb_string(rgb: [u8; 3]) -> String {
    format!("rgb({}, {}, {})", rgb[0], rgb[1], rgb[2])
}

/// Convert an RGB triple to CMYK percentages, each in [0, 100]
///
/// Standard subtractive conversion: channels are normalized to [0, 1],
/// `key = 1 - max(r, g, b)`; pure black short-circuits to c = m = y = 0
/// to avoid dividing by zero.
pub fn rgb_to_cmyk(rgb: [u8; 3]) -> [u8; 4] {
    let r = f32::from(rgb[0]) / 255.0;
    let g = f32::from(rgb[1]) / 255.0;
    let b = f32::from(rgb[2]) / 255.0;

    let key = 1.0 - r.max(g).max(b);

    let (c, m, y) = if key >= 1.0 {
        (0.0, 0.0, 0.0)
    } else {
        (
            (1.0 - r - key) / (1.0 - key),
            (1.0 - g - key) / (1.0 - key),
            (1.0 - b - key) / (1.0 - key),
        )
    };

    let percent = |value: f32| (value * 100.0).round_ties_even().clamp(0.0, 100.0) as u8;
    [percent(c), percent(m), percent(y), percent(key)]
}

/// Format a CMYK quadruple as `cmyk(c%, m%, y%, k%)`
pub fn cmyk_string(cmyk: [u8; 4]) -> String {
    format!(
        "cmyk({}%, {}%, {}%, {}%)",
        cmyk[0], cmyk[1], cmyk[2], cmyk[3]
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_centroid_rounds_and_clamps() {
        assert_eq!(round_centroid([254.6, 0.4, 127.5]), [255, 0, 128]);
        assert_eq!(round_centroid([-3.0, 300.0, 128.0]), [0, 255, 128]);
    }

    #[test]
    fn test_hex_is_lowercase() {
        assert_eq!(hex([255, 0, 0]), "#ff0000");
        assert_eq!(hex([0, 0, 0]), "#000000");
        assert_eq!(hex([171, 205, 239]), "#abcdef");
    }

    #[test]
    fn test_rgb_string() {
        assert_eq!(rgb_string([12, 34, 56]), "rgb(12, 34, 56)");
    }

    #[test]
    fn test_cmyk_primaries() {
        assert_eq!(rgb_to_cmyk([255, 0, 0]), [0, 100, 100, 0]);
        assert_eq!(rgb_to_cmyk([0, 255, 0]), [100, 0, 100, 0]);
        assert_eq!(rgb_to_cmyk([0, 0, 255]), [100, 100, 0, 0]);
    }

    #[test]
    fn test_cmyk_black_avoids_division_by_zero() {
        assert_eq!(rgb_to_cmyk([0, 0, 0]), [0, 0, 0, 100]);
    }

    #[test]
    fn test_cmyk_white() {
        assert_eq!(rgb_to_cmyk([255, 255, 255]), [0, 0, 0, 0]);
    }

    #[test]
    fn test_cmyk_mid_gray() {
        let [c, m, y, k] = rgb_to_cmyk([128, 128, 128]);
        assert_eq!((c, m, y), (0, 0, 0));
        assert_eq!(k, 50);
    }

    #[test]
    fn test_cmyk_string() {
        assert_eq!(cmyk_string([0, 100, 100, 0]), "cmyk(0%, 100%, 100%, 0%)");
    }
}
