//! The brightness filter: shifts a color's lightness-like channels by a signed amount expressed
//! on the 0-255 scale, whatever the space. Each space nominates the channels that carry its
//! notion of lightness, and the amount is rescaled to that space's range, so `+51` brightens an
//! `hsl` color by 20 lightness points and an `rgb` color by 51 on each channel. CMYK moves in the
//! opposite direction, since more ink means a darker color. Results clamp into range as usual.

use crate::error::{ColorError, ColorResult};
use crate::filter::{FilterParam, ParameterizedFilter};
use crate::filters::rebuild;
use crate::value::ColorValue;

// scale factor from the 0-255 amount to a percentage channel
const PERCENT_SCALE: f64 = 100.0 / 255.0;

/// The lightness adjustment filter.
#[derive(Debug, Default, Copy, Clone)]
pub struct Brightness;

impl ParameterizedFilter for Brightness {
    fn name(&self) -> &str {
        "brightness"
    }

    fn apply(&self, color: &ColorValue, param: FilterParam) -> ColorResult<ColorValue> {
        let amount = match param {
            FilterParam::Amount(amount) if amount.is_finite() => amount,
            other => {
                return Err(ColorError::InvalidArgument(format!(
                    "brightness needs a finite Amount parameter, got {:?}",
                    other
                )))
            }
        };
        let deltas: &[(&str, f64)] = match color.space_name() {
            "rgb" | "rgba" => &[("r", 1.0), ("g", 1.0), ("b", 1.0)],
            "hsl" | "hsla" => &[("l", PERCENT_SCALE)],
            "hsv" => &[("v", PERCENT_SCALE)],
            "cmyk" => &[
                ("c", -PERCENT_SCALE),
                ("m", -PERCENT_SCALE),
                ("y", -PERCENT_SCALE),
            ],
            "lab" | "lch" => &[("l", PERCENT_SCALE)],
            "xyz" => &[("x", PERCENT_SCALE), ("y", PERCENT_SCALE), ("z", PERCENT_SCALE)],
            "ycbcr" => &[("y", 1.0)],
            other => {
                return Err(ColorError::InvalidArgument(format!(
                    "brightness has no lightness mapping for space {:?}",
                    other
                )))
            }
        };
        let mut values = color.clamped_values();
        for (channel, scale) in deltas {
            let entry = values
                .get_mut(*channel)
                .expect("lightness channel exists in its space");
            *entry += amount * scale;
        }
        Ok(rebuild(color, values))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_shifts_all_channels() {
        crate::init();
        let color = ColorValue::rgb(100.0, 150.0, 200.0).unwrap();
        let brighter = Brightness
            .apply(&color, FilterParam::Amount(40.0))
            .unwrap();
        assert_eq!(brighter.get("r").unwrap(), 140.0);
        assert_eq!(brighter.get("g").unwrap(), 190.0);
        assert_eq!(brighter.get("b").unwrap(), 240.0);
    }

    #[test]
    fn test_amount_rescaled_for_percent_spaces() {
        crate::init();
        let color = ColorValue::hsl(210.0, 50.0, 40.0).unwrap();
        let brighter = Brightness
            .apply(&color, FilterParam::Amount(51.0))
            .unwrap();
        assert!((brighter.get("l").unwrap() - 60.0).abs() < 1e-9);
        assert_eq!(brighter.get("h").unwrap(), 210.0);
        assert_eq!(brighter.get("s").unwrap(), 50.0);
    }

    #[test]
    fn test_cmyk_moves_opposite() {
        crate::init();
        let color = ColorValue::cmyk(50.0, 40.0, 30.0, 20.0).unwrap();
        let brighter = Brightness
            .apply(&color, FilterParam::Amount(25.5))
            .unwrap();
        assert!((brighter.get("c").unwrap() - 40.0).abs() < 1e-9);
        assert!((brighter.get("m").unwrap() - 30.0).abs() < 1e-9);
        assert!((brighter.get("y").unwrap() - 20.0).abs() < 1e-9);
        // black is untouched
        assert_eq!(brighter.get("k").unwrap(), 20.0);
    }

    #[test]
    fn test_negative_amount_darkens_and_clamps() {
        crate::init();
        let color = ColorValue::rgb(30.0, 100.0, 200.0).unwrap();
        let darker = Brightness
            .apply(&color, FilterParam::Amount(-60.0))
            .unwrap();
        assert_eq!(darker.get_raw("r").unwrap(), 0.0);
        assert_eq!(darker.get("g").unwrap(), 40.0);
    }

    #[test]
    fn test_alpha_untouched() {
        crate::init();
        let color = ColorValue::rgba(100.0, 100.0, 100.0, 128.0).unwrap();
        let brighter = Brightness
            .apply(&color, FilterParam::Amount(10.0))
            .unwrap();
        assert_eq!(brighter.get("a").unwrap(), 128.0);
    }

    #[test]
    fn test_wrong_parameter_kind_rejected() {
        crate::init();
        use crate::filters::complement::ComplementMethod;
        let color = ColorValue::rgb(1.0, 2.0, 3.0).unwrap();
        assert!(Brightness
            .apply(&color, FilterParam::Method(ComplementMethod::Artistic))
            .is_err());
        assert!(Brightness
            .apply(&color, FilterParam::Amount(f64::NAN))
            .is_err());
    }
}
