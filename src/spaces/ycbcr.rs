//! The Y′CbCr luma/chroma encoding of sRGB using the standard BT.601 coefficients in their
//! full-range form: all three channels run 0–255, with the chroma axes centered on 128. This is
//! the JPEG flavor of the encoding, not the studio-swing video one.

use crate::illuminants::CieParams;
use crate::space::{Channels, ColorSpaceDescriptor};
use crate::spaces::{chan, channel_list, channel_map, convert_table, range_map};

/// The descriptor for the `ycbcr` space.
pub fn descriptor() -> ColorSpaceDescriptor {
    ColorSpaceDescriptor {
        name: "ycbcr".to_string(),
        channels: channel_list(&["y", "cb", "cr"]),
        defaults: channel_map(&[("y", 0.0), ("cb", 128.0), ("cr", 128.0)]),
        ranges: range_map(&[
            ("y", (0.0, 255.0)),
            ("cb", (0.0, 255.0)),
            ("cr", (0.0, 255.0)),
        ]),
        has_alpha: false,
        alpha_channel: None,
        supports_illuminant: false,
        supports_observer: false,
        percent_channels: vec![],
        converters: convert_table(&[("rgb", ycbcr_to_rgb)]),
        from_converters: convert_table(&[("rgb", rgb_to_ycbcr)]),
    }
}

/// sRGB to Y′CbCr, BT.601 full range.
pub fn rgb_to_ycbcr(values: &Channels, _cie: &CieParams) -> Channels {
    let r = chan(values, "r");
    let g = chan(values, "g");
    let b = chan(values, "b");
    channel_map(&[
        ("y", 0.299 * r + 0.587 * g + 0.114 * b),
        ("cb", 128.0 - 0.168736 * r - 0.331264 * g + 0.5 * b),
        ("cr", 128.0 + 0.5 * r - 0.418688 * g - 0.081312 * b),
    ])
}

/// Y′CbCr to sRGB, BT.601 full range.
pub fn ycbcr_to_rgb(values: &Channels, _cie: &CieParams) -> Channels {
    let y = chan(values, "y");
    let cb = chan(values, "cb") - 128.0;
    let cr = chan(values, "cr") - 128.0;
    channel_map(&[
        ("r", y + 1.402 * cr),
        ("g", y - 0.344136 * cb - 0.714136 * cr),
        ("b", y + 1.772 * cb),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gray_axis() {
        // neutral colors sit exactly on the luma axis
        let cie = CieParams::default();
        let gray = channel_map(&[("r", 90.0), ("g", 90.0), ("b", 90.0)]);
        let ycbcr = rgb_to_ycbcr(&gray, &cie);
        assert!((chan(&ycbcr, "y") - 90.0).abs() < 1e-9);
        assert!((chan(&ycbcr, "cb") - 128.0).abs() < 1e-9);
        assert!((chan(&ycbcr, "cr") - 128.0).abs() < 1e-9);
    }

    #[test]
    fn test_white_luma() {
        let cie = CieParams::default();
        let white = channel_map(&[("r", 255.0), ("g", 255.0), ("b", 255.0)]);
        assert!((chan(&rgb_to_ycbcr(&white, &cie), "y") - 255.0).abs() < 1e-6);
    }

    #[test]
    fn test_round_trip_within_tolerance() {
        let cie = CieParams::default();
        let original = channel_map(&[("r", 200.0), ("g", 17.0), ("b", 250.0)]);
        let back = ycbcr_to_rgb(&rgb_to_ycbcr(&original, &cie), &cie);
        for channel in ["r", "g", "b"].iter() {
            assert!((chan(&back, channel) - chan(&original, channel)).abs() <= 1.0);
        }
    }
}
