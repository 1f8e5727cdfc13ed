//! The CMYK subtractive model used in print work, with all four channels as percentages. The
//! conversion to and from sRGB is the naive device-independent one (no ICC profile involvement):
//! black is extracted as the complement of the largest RGB component and the remaining ink
//! coverage is scaled by what black leaves behind.

use crate::illuminants::CieParams;
use crate::space::{Channels, ColorSpaceDescriptor};
use crate::spaces::{chan, channel_list, channel_map, convert_table, range_map};

/// The descriptor for the `cmyk` space.
pub fn descriptor() -> ColorSpaceDescriptor {
    ColorSpaceDescriptor {
        name: "cmyk".to_string(),
        channels: channel_list(&["c", "m", "y", "k"]),
        defaults: channel_map(&[("c", 0.0), ("m", 0.0), ("y", 0.0), ("k", 0.0)]),
        ranges: range_map(&[
            ("c", (0.0, 100.0)),
            ("m", (0.0, 100.0)),
            ("y", (0.0, 100.0)),
            ("k", (0.0, 100.0)),
        ]),
        has_alpha: false,
        alpha_channel: None,
        supports_illuminant: false,
        supports_observer: false,
        percent_channels: channel_list(&["c", "m", "y", "k"]),
        converters: convert_table(&[("rgb", cmyk_to_rgb)]),
        from_converters: convert_table(&[("rgb", rgb_to_cmyk)]),
    }
}

/// CMYK to sRGB.
pub fn cmyk_to_rgb(values: &Channels, _cie: &CieParams) -> Channels {
    let c = chan(values, "c") / 100.0;
    let m = chan(values, "m") / 100.0;
    let y = chan(values, "y") / 100.0;
    let k = chan(values, "k") / 100.0;
    channel_map(&[
        ("r", 255.0 * (1.0 - c) * (1.0 - k)),
        ("g", 255.0 * (1.0 - m) * (1.0 - k)),
        ("b", 255.0 * (1.0 - y) * (1.0 - k)),
    ])
}

/// sRGB to CMYK.
pub fn rgb_to_cmyk(values: &Channels, _cie: &CieParams) -> Channels {
    let r = chan(values, "r") / 255.0;
    let g = chan(values, "g") / 255.0;
    let b = chan(values, "b") / 255.0;
    let k = 1.0 - r.max(g).max(b);
    if k >= 1.0 {
        // pure black: ink coverage is undefined, so report none
        return channel_map(&[("c", 0.0), ("m", 0.0), ("y", 0.0), ("k", 100.0)]);
    }
    let c = (1.0 - r - k) / (1.0 - k);
    let m = (1.0 - g - k) / (1.0 - k);
    let y = (1.0 - b - k) / (1.0 - k);
    channel_map(&[
        ("c", c * 100.0),
        ("m", m * 100.0),
        ("y", y * 100.0),
        ("k", k * 100.0),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_black_extraction() {
        let cie = CieParams::default();
        let black = channel_map(&[("r", 0.0), ("g", 0.0), ("b", 0.0)]);
        let cmyk = rgb_to_cmyk(&black, &cie);
        assert_eq!(chan(&cmyk, "k"), 100.0);
        assert_eq!(chan(&cmyk, "c"), 0.0);
    }

    #[test]
    fn test_pure_cyan() {
        let cie = CieParams::default();
        let cyan = channel_map(&[("r", 0.0), ("g", 255.0), ("b", 255.0)]);
        let cmyk = rgb_to_cmyk(&cyan, &cie);
        assert!((chan(&cmyk, "c") - 100.0).abs() < 1e-9);
        assert!(chan(&cmyk, "k").abs() < 1e-9);
    }

    #[test]
    fn test_round_trip_within_tolerance() {
        let cie = CieParams::default();
        let original = channel_map(&[("r", 142.0), ("g", 33.0), ("b", 71.0)]);
        let back = cmyk_to_rgb(&rgb_to_cmyk(&original, &cie), &cie);
        for channel in ["r", "g", "b"].iter() {
            assert!((chan(&back, channel) - chan(&original, channel)).abs() <= 2.0);
        }
    }
}
