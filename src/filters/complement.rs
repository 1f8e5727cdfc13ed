//! The complement filter, with three notions of "opposite color":
//!
//! - **Artistic**: rotate the HSL hue wheel by 180°, the color-theory complement painters use;
//! - **Perceptual**: rotate the LCh hue by 180°, keeping lightness and chroma perceptually
//!   steady. The default.
//! - **DisplayAccurate**: invert each RGB channel (255 minus the value), the complement a screen
//!   actually displays;
//!
//! Whatever the method, the result comes back in the input's space with its alpha preserved.

use crate::error::{ColorError, ColorResult};
use crate::filter::{FilterParam, ParameterizedFilter, UnaryFilter};
use crate::spaces::channel_map;
use crate::value::ColorValue;

use super::restore;

/// The hue-wheel (or channel-inversion) strategy a [`Complement`] uses.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ComplementMethod {
    /// 180° rotation on the HSL hue wheel.
    Artistic,
    /// 180° rotation on the LCh hue wheel.
    Perceptual,
    /// Per-channel RGB inversion.
    DisplayAccurate,
}

impl Default for ComplementMethod {
    fn default() -> ComplementMethod {
        ComplementMethod::Perceptual
    }
}

/// The complementary color filter.
#[derive(Debug, Default, Copy, Clone)]
pub struct Complement {
    method: ComplementMethod,
}

impl Complement {
    /// Builds a complement filter using the given method.
    pub fn new(method: ComplementMethod) -> Complement {
        Complement { method }
    }

    /// The method this filter rotates or inverts with.
    pub fn method(&self) -> ComplementMethod {
        self.method
    }
}

impl UnaryFilter for Complement {
    fn name(&self) -> &str {
        "complement"
    }

    fn apply(&self, color: &ColorValue) -> ColorResult<ColorValue> {
        let worked = match self.method {
            ComplementMethod::Artistic => {
                let hsl = color.to_hsl()?;
                let hue = (hsl.get("h")? + 180.0) % 360.0;
                hsl.with(channel_map(&[("h", hue)]))?
            }
            ComplementMethod::Perceptual => {
                let lch = color.to_lch(None, None)?;
                let hue = (lch.get("h")? + 180.0) % 360.0;
                lch.with(channel_map(&[("h", hue)]))?
            }
            ComplementMethod::DisplayAccurate => {
                let rgb = color.to_rgb()?;
                rgb.with(channel_map(&[
                    ("r", 255.0 - rgb.get("r")?),
                    ("g", 255.0 - rgb.get("g")?),
                    ("b", 255.0 - rgb.get("b")?),
                ]))?
            }
        };
        restore(color, &worked)
    }
}

// The registry entry: the method arrives as a parameter instead of being frozen at construction,
// so callers can pick Artistic or DisplayAccurate by name.
impl ParameterizedFilter for Complement {
    fn name(&self) -> &str {
        "complement"
    }

    fn apply(&self, color: &ColorValue, param: FilterParam) -> ColorResult<ColorValue> {
        match param {
            FilterParam::Method(method) => UnaryFilter::apply(&Complement::new(method), color),
            other => Err(ColorError::InvalidArgument(format!(
                "complement needs a Method parameter, got {:?}",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // the unary path with an explicit method; both trait impls are in scope here
    fn complement_of(color: &ColorValue, method: ComplementMethod) -> ColorValue {
        UnaryFilter::apply(&Complement::new(method), color).unwrap()
    }

    #[test]
    fn test_display_accurate_inverts_channels() {
        crate::init();
        let color = ColorValue::rgb(255.0, 100.0, 50.0).unwrap();
        let inverted = complement_of(&color, ComplementMethod::DisplayAccurate);
        assert_eq!(inverted.get("r").unwrap(), 0.0);
        assert_eq!(inverted.get("g").unwrap(), 155.0);
        assert_eq!(inverted.get("b").unwrap(), 205.0);
    }

    #[test]
    fn test_artistic_rotates_hue_in_place() {
        crate::init();
        let color = ColorValue::hsl(30.0, 60.0, 50.0).unwrap();
        let complement = complement_of(&color, ComplementMethod::Artistic);
        assert_eq!(complement.space_name(), "hsl");
        assert!((complement.get("h").unwrap() - 210.0).abs() < 1e-6);
        assert!((complement.get("s").unwrap() - 60.0).abs() < 1e-6);
        assert!((complement.get("l").unwrap() - 50.0).abs() < 1e-6);
    }

    #[test]
    fn test_artistic_wraps_past_360() {
        crate::init();
        let color = ColorValue::hsl(300.0, 60.0, 50.0).unwrap();
        let complement = complement_of(&color, ComplementMethod::Artistic);
        assert!((complement.get("h").unwrap() - 120.0).abs() < 1e-6);
    }

    #[test]
    fn test_perceptual_preserves_lightness() {
        crate::init();
        let color = ColorValue::lch(60.0, 40.0, 100.0).unwrap();
        let complement = complement_of(&color, ComplementMethod::default());
        assert_eq!(complement.space_name(), "lch");
        assert!((complement.get("l").unwrap() - 60.0).abs() < 1e-6);
        assert!((complement.get("h").unwrap() - 280.0).abs() < 1e-6);
    }

    #[test]
    fn test_result_in_input_space_with_alpha() {
        crate::init();
        let color = ColorValue::rgba(255.0, 100.0, 50.0, 128.0).unwrap();
        let complement = complement_of(&color, ComplementMethod::DisplayAccurate);
        assert_eq!(complement.space_name(), "rgba");
        assert_eq!(complement.get("a").unwrap(), 128.0);
    }

    #[test]
    fn test_display_accurate_is_an_involution() {
        crate::init();
        let color = ColorValue::rgb(12.0, 200.0, 99.0).unwrap();
        let once = complement_of(&color, ComplementMethod::DisplayAccurate);
        let twice = complement_of(&once, ComplementMethod::DisplayAccurate);
        for channel in ["r", "g", "b"].iter() {
            assert!((twice.get(channel).unwrap() - color.get(channel).unwrap()).abs() < 1e-6);
        }
    }

    #[test]
    fn test_parameterized_rejects_amount() {
        crate::init();
        let color = ColorValue::rgb(1.0, 2.0, 3.0).unwrap();
        let result = ParameterizedFilter::apply(
            &Complement::default(),
            &color,
            FilterParam::Amount(1.0),
        );
        assert!(matches!(result, Err(ColorError::InvalidArgument(_))));
    }
}
