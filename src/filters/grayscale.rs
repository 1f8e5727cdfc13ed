//! The grayscale filter: collapses a color to the neutral axis at its BT.601 luma. The luma
//! weights match the Y′ of the ycbcr space, so grayscaling and taking the Y′ channel agree.

use crate::error::ColorResult;
use crate::filter::UnaryFilter;
use crate::spaces::channel_map;
use crate::value::ColorValue;

use super::restore;

/// The luma-preserving desaturation filter.
#[derive(Debug, Default, Copy, Clone)]
pub struct Grayscale;

impl UnaryFilter for Grayscale {
    fn name(&self) -> &str {
        "grayscale"
    }

    fn apply(&self, color: &ColorValue) -> ColorResult<ColorValue> {
        let rgb = color.to_rgb()?;
        let luma =
            0.299 * rgb.get("r")? + 0.587 * rgb.get("g")? + 0.114 * rgb.get("b")?;
        let gray = rgb.with(channel_map(&[("r", luma), ("g", luma), ("b", luma)]))?;
        restore(color, &gray)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gray_input_is_unchanged() {
        crate::init();
        let color = ColorValue::rgb(120.0, 120.0, 120.0).unwrap();
        let gray = Grayscale.apply(&color).unwrap();
        for channel in ["r", "g", "b"].iter() {
            assert!((gray.get(channel).unwrap() - 120.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_luma_weights() {
        crate::init();
        let color = ColorValue::rgb(255.0, 0.0, 0.0).unwrap();
        let gray = Grayscale.apply(&color).unwrap();
        assert!((gray.get("r").unwrap() - 0.299 * 255.0).abs() < 1e-6);
        assert_eq!(gray.get("r").unwrap(), gray.get("g").unwrap());
        assert_eq!(gray.get("g").unwrap(), gray.get("b").unwrap());
    }

    #[test]
    fn test_result_in_input_space() {
        crate::init();
        let color = ColorValue::hsl(210.0, 50.0, 40.0).unwrap();
        let gray = Grayscale.apply(&color).unwrap();
        assert_eq!(gray.space_name(), "hsl");
        assert!(gray.get("s").unwrap().abs() < 1e-6);
    }

    #[test]
    fn test_alpha_preserved() {
        crate::init();
        let color = ColorValue::rgba(200.0, 50.0, 10.0, 64.0).unwrap();
        let gray = Grayscale.apply(&color).unwrap();
        assert_eq!(gray.get("a").unwrap(), 64.0);
    }
}
