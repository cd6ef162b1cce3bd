//! Coarse categorical color naming
//!
//! Maps an RGB triple to one of a dozen everyday color names by banding
//! its HSV representation. This is intentionally simple labeling, not
//! perceptual color science; the band boundaries in
//! [`crate::constants::naming`] are fixed for output compatibility.

use crate::constants::naming::*;
use palette::{FromColor, Hsv, Srgb};

/// Estimate a human-readable name for an RGB color
///
/// Near-gray colors (saturation below 0.1) bucket by value into
/// Black / Dark Gray / Gray / White; everything else buckets by hue,
/// with saturation deciding red vs. brown and value deciding pink vs.
/// red at the band edges.
pub fn color_name(rgb: [u8; 3]) -> &'static str {
    let srgb = Srgb::new(rgb[0], rgb[1], rgb[2]).into_format::<f32>();
    let hsv = Hsv::from_color(srgb);

    let hue = hsv.hue.into_positive_degrees();
    let saturation = hsv.saturation;
    let value = hsv.value;

    if saturation < GRAY_SATURATION_MAX {
        return if value < BLACK_VALUE_MAX {
            "Black"
        } else if value < DARK_GRAY_VALUE_MAX {
            "Dark Gray"
        } else if value < GRAY_VALUE_MAX {
            "Gray"
        } else {
            "White"
        };
    }

    if hue < RED_HUE_MAX {
        if saturation > RED_SATURATION_MIN {
            "Red"
        } else {
            "Brown"
        }
    } else if hue < YELLOW_HUE_MAX {
        if hue < ORANGE_HUE_MAX {
            "Orange"
        } else {
            "Yellow"
        }
    } else if hue < GREEN_HUE_MAX {
        "Green"
    } else if hue < CYAN_HUE_MAX {
        "Cyan"
    } else if hue < BLUE_HUE_MAX {
        "Blue"
    } else if hue < PURPLE_HUE_MAX {
        "Purple"
    } else if value > PINK_VALUE_MIN {
        "Pink"
    } else {
        "Red"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gray_ladder() {
        assert_eq!(color_name([0, 0, 0]), "Black");
        assert_eq!(color_name([64, 64, 64]), "Dark Gray");
        assert_eq!(color_name([128, 128, 128]), "Gray");
        assert_eq!(color_name([255, 255, 255]), "White");
    }

    #[test]
    fn test_hue_bands() {
        assert_eq!(color_name([255, 0, 0]), "Red");
        assert_eq!(color_name([255, 165, 0]), "Orange");
        assert_eq!(color_name([255, 255, 0]), "Yellow");
        assert_eq!(color_name([0, 255, 0]), "Green");
        assert_eq!(color_name([0, 255, 255]), "Cyan");
        assert_eq!(color_name([0, 0, 255]), "Blue");
        assert_eq!(color_name([160, 32, 240]), "Purple");
    }

    #[test]
    fn test_low_saturation_red_reads_as_brown() {
        // hue 15, saturation 0.5: inside the red band but too muted
        assert_eq!(color_name([160, 100, 80]), "Brown");
    }

    #[test]
    fn test_high_hue_splits_pink_and_red() {
        // hue 330, bright: pink
        assert_eq!(color_name([255, 105, 180]), "Pink");
        // hue 330, dark: red
        assert_eq!(color_name([120, 30, 75]), "Red");
    }
}
