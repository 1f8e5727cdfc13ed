//! The CIELCh space: CIELAB expressed in cylindrical coordinates, with chroma and a hue angle in
//! place of the two opponent axes. Because it is just a reparameterization of Lab, every
//! conversion routes through the Lab module; hue comes out of `atan2` and is normalized into
//! 0–360.

use crate::illuminants::CieParams;
use crate::space::{Channels, ColorSpaceDescriptor};
use crate::spaces::lab::{lab_to_rgb, lab_to_xyz, rgb_to_lab, xyz_to_lab};
use crate::spaces::{chan, channel_list, channel_map, convert_table, range_map};

/// The descriptor for the `lch` space.
pub fn descriptor() -> ColorSpaceDescriptor {
    ColorSpaceDescriptor {
        name: "lch".to_string(),
        channels: channel_list(&["l", "c", "h"]),
        defaults: channel_map(&[("l", 0.0), ("c", 0.0), ("h", 0.0)]),
        ranges: range_map(&[
            ("l", (0.0, 100.0)),
            ("c", (0.0, 140.0)),
            ("h", (0.0, 360.0)),
        ]),
        has_alpha: false,
        alpha_channel: None,
        supports_illuminant: true,
        supports_observer: true,
        percent_channels: vec![],
        converters: convert_table(&[
            ("rgb", lch_to_rgb),
            ("lab", lch_to_lab),
            ("xyz", lch_to_xyz),
        ]),
        from_converters: convert_table(&[
            ("rgb", rgb_to_lch),
            ("lab", lab_to_lch),
            ("xyz", xyz_to_lch),
        ]),
    }
}

/// Lab to LCh: rectangular to polar on the opponent axes.
pub fn lab_to_lch(values: &Channels, _cie: &CieParams) -> Channels {
    let a = chan(values, "a");
    let b = chan(values, "b");
    let c = a.hypot(b);
    let mut h = b.atan2(a).to_degrees();
    if h < 0.0 {
        h += 360.0;
    }
    channel_map(&[("l", chan(values, "l")), ("c", c), ("h", h)])
}

/// LCh to Lab: polar back to rectangular.
pub fn lch_to_lab(values: &Channels, _cie: &CieParams) -> Channels {
    let c = chan(values, "c");
    let h = chan(values, "h").to_radians();
    channel_map(&[
        ("l", chan(values, "l")),
        ("a", c * h.cos()),
        ("b", c * h.sin()),
    ])
}

/// LCh to sRGB through Lab.
pub fn lch_to_rgb(values: &Channels, cie: &CieParams) -> Channels {
    lab_to_rgb(&lch_to_lab(values, cie), cie)
}

/// sRGB to LCh through Lab.
pub fn rgb_to_lch(values: &Channels, cie: &CieParams) -> Channels {
    lab_to_lch(&rgb_to_lab(values, cie), cie)
}

/// LCh to XYZ through Lab, both relative to the white carried in `cie`.
pub fn lch_to_xyz(values: &Channels, cie: &CieParams) -> Channels {
    lab_to_xyz(&lch_to_lab(values, cie), cie)
}

/// XYZ to LCh through Lab, both relative to the white carried in `cie`.
pub fn xyz_to_lch(values: &Channels, cie: &CieParams) -> Channels {
    lab_to_lch(&xyz_to_lab(values, cie), cie)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polar_round_trip() {
        use float_cmp::approx_eq;
        let cie = CieParams::default();
        let original = channel_map(&[("l", 54.0), ("a", -30.0), ("b", 42.0)]);
        let back = lch_to_lab(&lab_to_lch(&original, &cie), &cie);
        for channel in ["l", "a", "b"].iter() {
            assert!(approx_eq!(
                f64,
                chan(&back, channel),
                chan(&original, channel),
                epsilon = 1e-9
            ));
        }
    }

    #[test]
    fn test_hue_normalized() {
        // negative b lands in the lower half plane: atan2 would be negative without normalization
        let cie = CieParams::default();
        let lab = channel_map(&[("l", 50.0), ("a", 10.0), ("b", -10.0)]);
        let lch = lab_to_lch(&lab, &cie);
        assert!((chan(&lch, "h") - 315.0).abs() < 1e-9);
    }

    #[test]
    fn test_neutral_has_zero_chroma() {
        let cie = CieParams::default();
        let gray = channel_map(&[("l", 40.0), ("a", 0.0), ("b", 0.0)]);
        assert_eq!(chan(&lab_to_lch(&gray, &cie), "c"), 0.0);
    }
}
