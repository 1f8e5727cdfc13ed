//! The HSL cylindrical transformation of sRGB, in both its plain form and the alpha-carrying
//! `hsla` form. Hue runs 0–360 and saturation/lightness are percentages, matching the common web
//! notation; `hsla` alpha runs 0–1 as in CSS. The conversion is the standard hexagonal projection
//! rather than a trigonometric one: values are put on a hexagon that is then "squeezed" into a
//! circle, which can cause tiny variations against implementations that use polar coordinates
//! directly. Gray converts to a hue of 0 degrees, although any hue would do.

use crate::illuminants::CieParams;
use crate::space::{Channels, ColorSpaceDescriptor};
use crate::spaces::{chan, channel_list, channel_map, convert_table, range_map};

/// The descriptor for the `hsl` space.
pub fn hsl_descriptor() -> ColorSpaceDescriptor {
    ColorSpaceDescriptor {
        name: "hsl".to_string(),
        channels: channel_list(&["h", "s", "l"]),
        defaults: channel_map(&[("h", 0.0), ("s", 0.0), ("l", 0.0)]),
        ranges: range_map(&[
            ("h", (0.0, 360.0)),
            ("s", (0.0, 100.0)),
            ("l", (0.0, 100.0)),
        ]),
        has_alpha: false,
        alpha_channel: None,
        supports_illuminant: false,
        supports_observer: false,
        percent_channels: channel_list(&["s", "l"]),
        converters: convert_table(&[("rgb", hsl_to_rgb), ("hsla", hsl_to_hsla)]),
        from_converters: convert_table(&[("rgb", rgb_to_hsl), ("hsla", hsla_to_hsl)]),
    }
}

/// The descriptor for the `hsla` space.
pub fn hsla_descriptor() -> ColorSpaceDescriptor {
    ColorSpaceDescriptor {
        name: "hsla".to_string(),
        channels: channel_list(&["h", "s", "l", "a"]),
        defaults: channel_map(&[("h", 0.0), ("s", 0.0), ("l", 0.0), ("a", 1.0)]),
        ranges: range_map(&[
            ("h", (0.0, 360.0)),
            ("s", (0.0, 100.0)),
            ("l", (0.0, 100.0)),
            ("a", (0.0, 1.0)),
        ]),
        has_alpha: true,
        alpha_channel: Some("a".to_string()),
        supports_illuminant: false,
        supports_observer: false,
        percent_channels: channel_list(&["s", "l"]),
        converters: convert_table(&[("rgb", hsla_to_rgb), ("hsl", hsla_to_hsl)]),
        from_converters: convert_table(&[("rgb", rgb_to_hsla), ("hsl", hsl_to_hsla)]),
    }
}

// The shared hexagonal core, on 0-1 scaled components. Returns (r, g, b) on 0-1.
pub(crate) fn hsl_core_to_rgb(h: f64, s: f64, l: f64) -> (f64, f64, f64) {
    let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
    // the second-largest component, where chroma is the largest and the smallest is 0
    let x = chroma * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    // split based on which edge of the hexagon we're on, i.e., which two components are largest
    let (r1, g1, b1) = if h <= 60.0 {
        (chroma, x, 0.0)
    } else if h <= 120.0 {
        (x, chroma, 0.0)
    } else if h <= 180.0 {
        (0.0, chroma, x)
    } else if h <= 240.0 {
        (0.0, x, chroma)
    } else if h <= 300.0 {
        (x, 0.0, chroma)
    } else {
        (chroma, 0.0, x)
    };
    // add the same offset to every component to hit the right lightness
    let offset = l - chroma / 2.0;
    (r1 + offset, g1 + offset, b1 + offset)
}

// The shared analysis half: 0-1 scaled RGB to (hue, chroma, max, min).
pub(crate) fn rgb_hex_projection(r: f64, g: f64, b: f64) -> (f64, f64, f64, f64) {
    let max_c = r.max(g).max(b);
    let min_c = r.min(g).min(b);
    let chroma = max_c - min_c;
    // hue on the hexagon: no trig, just the proportion of the edge the point sits on, in degrees
    let hue = if chroma == 0.0 {
        // undefined for gray: pick 0 by convention
        0.0
    } else if max_c == r {
        let h = ((g - b) / chroma % 6.0) * 60.0;
        if h < 0.0 {
            h + 360.0
        } else {
            h
        }
    } else if max_c == g {
        ((b - r) / chroma) * 60.0 + 120.0
    } else {
        ((r - g) / chroma) * 60.0 + 240.0
    };
    (hue, chroma, max_c, min_c)
}

/// HSL to sRGB over the hexagonal projection.
pub fn hsl_to_rgb(values: &Channels, _cie: &CieParams) -> Channels {
    let (r, g, b) = hsl_core_to_rgb(
        chan(values, "h"),
        chan(values, "s") / 100.0,
        chan(values, "l") / 100.0,
    );
    channel_map(&[("r", r * 255.0), ("g", g * 255.0), ("b", b * 255.0)])
}

/// sRGB to HSL over the hexagonal projection.
pub fn rgb_to_hsl(values: &Channels, _cie: &CieParams) -> Channels {
    let r = chan(values, "r") / 255.0;
    let g = chan(values, "g") / 255.0;
    let b = chan(values, "b") / 255.0;
    let (hue, chroma, max_c, min_c) = rgb_hex_projection(r, g, b);
    // lightness is the average of the extremes: the "bi-hexcone" model
    let lightness = (max_c + min_c) / 2.0;
    let saturation = if lightness >= 1.0 || lightness <= 0.0 {
        // avoids a division by zero; saturation is meaningless at the poles anyway
        0.0
    } else {
        chroma / (1.0 - (2.0 * lightness - 1.0).abs())
    };
    channel_map(&[
        ("h", hue),
        ("s", saturation * 100.0),
        ("l", lightness * 100.0),
    ])
}

/// Drops the alpha channel and converts the remainder.
pub fn hsla_to_rgb(values: &Channels, cie: &CieParams) -> Channels {
    hsl_to_rgb(&hsla_to_hsl(values, cie), cie)
}

/// Converts and adds a fully opaque alpha channel.
pub fn rgb_to_hsla(values: &Channels, cie: &CieParams) -> Channels {
    hsl_to_hsla(&rgb_to_hsl(values, cie), cie)
}

/// Adds a fully opaque alpha channel.
pub fn hsl_to_hsla(values: &Channels, _cie: &CieParams) -> Channels {
    channel_map(&[
        ("h", chan(values, "h")),
        ("s", chan(values, "s")),
        ("l", chan(values, "l")),
        ("a", 1.0),
    ])
}

/// Drops the alpha channel.
pub fn hsla_to_hsl(values: &Channels, _cie: &CieParams) -> Channels {
    channel_map(&[
        ("h", chan(values, "h")),
        ("s", chan(values, "s")),
        ("l", chan(values, "l")),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hsl_to_rgb_fixture() {
        // hsl(210, 50%, 40%) is the steel blue #336699
        let cie = CieParams::default();
        let hsl = channel_map(&[("h", 210.0), ("s", 50.0), ("l", 40.0)]);
        let rgb = hsl_to_rgb(&hsl, &cie);
        assert!((chan(&rgb, "r") - 51.0).abs() < 1e-9);
        assert!((chan(&rgb, "g") - 102.0).abs() < 1e-9);
        assert!((chan(&rgb, "b") - 153.0).abs() < 1e-9);
    }

    #[test]
    fn test_rgb_to_hsl_primaries() {
        let cie = CieParams::default();
        let red = channel_map(&[("r", 255.0), ("g", 0.0), ("b", 0.0)]);
        let hsl = rgb_to_hsl(&red, &cie);
        assert!(chan(&hsl, "h").abs() < 1e-9);
        assert!((chan(&hsl, "s") - 100.0).abs() < 1e-9);
        assert!((chan(&hsl, "l") - 50.0).abs() < 1e-9);
        // hue stays in 0-360 even when blue dominates the red sector comparison
        let magenta_ish = channel_map(&[("r", 255.0), ("g", 0.0), ("b", 128.0)]);
        let h = chan(&rgb_to_hsl(&magenta_ish, &cie), "h");
        assert!(h > 300.0 && h < 360.0);
    }

    #[test]
    fn test_gray_has_zero_hue_and_saturation() {
        let cie = CieParams::default();
        let gray = channel_map(&[("r", 128.0), ("g", 128.0), ("b", 128.0)]);
        let hsl = rgb_to_hsl(&gray, &cie);
        assert_eq!(chan(&hsl, "h"), 0.0);
        assert_eq!(chan(&hsl, "s"), 0.0);
    }

    #[test]
    fn test_round_trip_within_tolerance() {
        let cie = CieParams::default();
        let original = channel_map(&[("r", 37.0), ("g", 201.0), ("b", 93.0)]);
        let back = hsl_to_rgb(&rgb_to_hsl(&original, &cie), &cie);
        for channel in ["r", "g", "b"].iter() {
            assert!((chan(&back, channel) - chan(&original, channel)).abs() <= 2.0);
        }
    }
}
