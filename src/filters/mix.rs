//! The mix filter: weighted per-channel interpolation between two colors in the same space. The
//! weight is the share of the second color, so 0 returns the first color, 1 the second, and 0.5
//! degenerates to [`Blend`](crate::filters::blend::Blend).

use crate::error::{ColorError, ColorResult};
use crate::filter::BinaryFilter;
use crate::filters::{rebuild, require_same_space};
use crate::space::Channels;
use crate::value::ColorValue;

/// The weighted interpolation filter.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Mix {
    weight: f64,
}

impl Mix {
    /// Builds a mix filter with the given weight of the second color. Weights outside 0..=1 (and
    /// non-finite ones) fail with [`ColorError::InvalidArgument`].
    pub fn new(weight: f64) -> ColorResult<Mix> {
        if !weight.is_finite() || !(0.0..=1.0).contains(&weight) {
            return Err(ColorError::InvalidArgument(format!(
                "mix weight must be in 0..=1, got {}",
                weight
            )));
        }
        Ok(Mix { weight })
    }

    /// The share of the second color.
    pub fn weight(&self) -> f64 {
        self.weight
    }
}

impl Default for Mix {
    /// An even mix.
    fn default() -> Mix {
        Mix { weight: 0.5 }
    }
}

impl BinaryFilter for Mix {
    fn name(&self) -> &str {
        "mix"
    }

    fn apply(&self, first: &ColorValue, second: &ColorValue) -> ColorResult<ColorValue> {
        require_same_space(first, second)?;
        let a = first.clamped_values();
        let b = second.clamped_values();
        let mixed: Channels = a
            .into_iter()
            .map(|(channel, value)| {
                let other = b[&channel];
                (channel, (1.0 - self.weight) * value + self.weight * other)
            })
            .collect();
        Ok(rebuild(first, mixed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_weights() {
        crate::init();
        let a = ColorValue::rgb(10.0, 20.0, 30.0).unwrap();
        let b = ColorValue::rgb(200.0, 100.0, 0.0).unwrap();
        assert_eq!(Mix::new(0.0).unwrap().apply(&a, &b).unwrap(), a);
        assert_eq!(Mix::new(1.0).unwrap().apply(&a, &b).unwrap(), b);
    }

    #[test]
    fn test_quarter_weight() {
        crate::init();
        let a = ColorValue::rgb(0.0, 0.0, 0.0).unwrap();
        let b = ColorValue::rgb(100.0, 200.0, 40.0).unwrap();
        let mixed = Mix::new(0.25).unwrap().apply(&a, &b).unwrap();
        assert_eq!(mixed.get("r").unwrap(), 25.0);
        assert_eq!(mixed.get("g").unwrap(), 50.0);
        assert_eq!(mixed.get("b").unwrap(), 10.0);
    }

    #[test]
    fn test_default_matches_blend() {
        crate::init();
        use crate::filters::blend::Blend;
        let a = ColorValue::cmyk(10.0, 20.0, 30.0, 40.0).unwrap();
        let b = ColorValue::cmyk(90.0, 10.0, 0.0, 5.0).unwrap();
        assert_eq!(
            Mix::default().apply(&a, &b).unwrap(),
            Blend.apply(&a, &b).unwrap()
        );
    }

    #[test]
    fn test_invalid_weights_rejected() {
        assert!(Mix::new(-0.1).is_err());
        assert!(Mix::new(1.1).is_err());
        assert!(Mix::new(f64::NAN).is_err());
    }
}
