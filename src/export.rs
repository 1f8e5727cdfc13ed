//! The canonical structured serialization of a color: its space name, a map of clamped channel
//! values, and the illuminant/observer codes. The channel map is a `BTreeMap` so that the
//! serialized form is deterministic and can be validated byte-for-byte against fixtures. Clamped
//! values are exported rather than raw ones: the export describes the color a reader would
//! observe, exactly like the read accessors do.

use std::collections::BTreeMap;

use crate::error::{ColorError, ColorResult};
use crate::illuminants::{Illuminant, Observer};
use crate::space::Channels;
use crate::value::{ColorValue, ValidationPolicy};

/// The structured export form of a color value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorExport {
    /// The color space name, e.g. `"rgb"`.
    #[serde(rename = "color-space")]
    pub color_space: String,
    /// The clamped channel values, keyed by channel name.
    pub values: BTreeMap<String, f64>,
    /// The illuminant code, e.g. `"d65"`.
    pub illuminant: String,
    /// The observer code, `"2"` or `"10"`.
    pub observer: String,
}

impl ColorExport {
    /// Builds the export form of a color value.
    pub fn from_color(color: &ColorValue) -> ColorExport {
        ColorExport {
            color_space: color.space_name().to_string(),
            values: color.clamped_values().into_iter().collect(),
            illuminant: color.illuminant().code().to_string(),
            observer: color.observer().code().to_string(),
        }
    }

    /// Reconstructs a color value from its export form, against the process-wide space registry.
    pub fn into_color(self) -> ColorResult<ColorValue> {
        let illuminant = Illuminant::from_code(&self.illuminant).ok_or_else(|| {
            ColorError::InvalidColorValue(format!("unknown illuminant code {:?}", self.illuminant))
        })?;
        let observer = Observer::from_code(&self.observer).ok_or_else(|| {
            ColorError::InvalidColorValue(format!("unknown observer code {:?}", self.observer))
        })?;
        let values: Channels = self.values.into_iter().collect();
        ColorValue::new(
            crate::space::lookup(&self.color_space)?,
            values,
            Some(illuminant),
            Some(observer),
            ValidationPolicy::Clamp,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::ColorValue;

    #[test]
    fn test_export_contract_byte_for_byte() {
        crate::init();
        let color = ColorValue::rgb(255.0, 100.0, 50.0).unwrap();
        let json = serde_json::to_string(&color.export()).unwrap();
        assert_eq!(
            json,
            "{\"color-space\":\"rgb\",\"values\":{\"b\":50.0,\"g\":100.0,\"r\":255.0},\
             \"illuminant\":\"d65\",\"observer\":\"2\"}"
        );
    }

    #[test]
    fn test_export_clamps_raw_values() {
        crate::init();
        let color = ColorValue::rgb(300.0, -20.0, 50.0).unwrap();
        let export = color.export();
        assert_eq!(export.values["r"], 255.0);
        assert_eq!(export.values["g"], 0.0);
    }

    #[test]
    fn test_round_trip_through_json() {
        crate::init();
        let color = ColorValue::lab(54.0, -30.0, 42.0).unwrap();
        let json = serde_json::to_string(&color.export()).unwrap();
        let parsed: ColorExport = serde_json::from_str(&json).unwrap();
        let back = parsed.into_color().unwrap();
        assert_eq!(back.space_name(), "lab");
        assert_eq!(back.get("a").unwrap(), -30.0);
        assert_eq!(back.illuminant().code(), "d65");
    }
}
