//! The CIELAB perceptually-uniform space: an L axis for lightness and two opponent color axes for
//! chromaticity. Unlike the classic Photoshop convention of pinning Lab to D50, a Lab color here
//! is relative to whatever illuminant/observer pair it carries, D65/2° by default; chromatic
//! adaptation moves between pairs explicitly. The nonlinearity uses the exact rational constants
//! ε = 216/24389 and κ = 24389/27 rather than their rounded decimal forms, so that the forward and
//! inverse legs agree to machine precision around the 6/29 breakpoint.

use crate::illuminants::CieParams;
use crate::space::{Channels, ColorSpaceDescriptor};
use crate::spaces::xyz::{rgb_triple_to_xyz, xyz_triple_to_rgb};
use crate::spaces::{chan, channel_list, channel_map, convert_table, range_map};
use crate::spaces::lch::{lab_to_lch, lch_to_lab};

const EPSILON: f64 = 216.0 / 24389.0;
const KAPPA: f64 = 24389.0 / 27.0;

/// The descriptor for the `lab` space.
pub fn descriptor() -> ColorSpaceDescriptor {
    ColorSpaceDescriptor {
        name: "lab".to_string(),
        channels: channel_list(&["l", "a", "b"]),
        defaults: channel_map(&[("l", 0.0), ("a", 0.0), ("b", 0.0)]),
        ranges: range_map(&[
            ("l", (0.0, 100.0)),
            ("a", (-128.0, 127.0)),
            ("b", (-128.0, 127.0)),
        ]),
        has_alpha: false,
        alpha_channel: None,
        supports_illuminant: true,
        supports_observer: true,
        percent_channels: vec![],
        converters: convert_table(&[
            ("rgb", lab_to_rgb),
            ("xyz", lab_to_xyz),
            ("lch", lab_to_lch),
        ]),
        from_converters: convert_table(&[
            ("rgb", rgb_to_lab),
            ("xyz", xyz_to_lab),
            ("lch", lch_to_lab),
        ]),
    }
}

// An XYZ triple under the given white to a Lab triple.
pub(crate) fn xyz_triple_to_lab(xyz: [f64; 3], cie: &CieParams) -> [f64; 3] {
    let white = cie.white_point();
    let f = |t: f64| {
        if t > EPSILON {
            t.cbrt()
        } else {
            (KAPPA * t + 16.0) / 116.0
        }
    };
    let fx = f(xyz[0] / white[0]);
    let fy = f(xyz[1] / white[1]);
    let fz = f(xyz[2] / white[2]);
    [
        116.0 * fy - 16.0,
        500.0 * (fx - fy),
        200.0 * (fy - fz),
    ]
}

// A Lab triple to an XYZ triple under the given white.
pub(crate) fn lab_triple_to_xyz(lab: [f64; 3], cie: &CieParams) -> [f64; 3] {
    let white = cie.white_point();
    let (l, a, b) = (lab[0], lab[1], lab[2]);
    let fy = (l + 16.0) / 116.0;
    let fx = fy + a / 500.0;
    let fz = fy - b / 200.0;
    let xr = if fx.powi(3) > EPSILON {
        fx.powi(3)
    } else {
        (116.0 * fx - 16.0) / KAPPA
    };
    let yr = if l > KAPPA * EPSILON {
        fy.powi(3)
    } else {
        l / KAPPA
    };
    let zr = if fz.powi(3) > EPSILON {
        fz.powi(3)
    } else {
        (116.0 * fz - 16.0) / KAPPA
    };
    [xr * white[0], yr * white[1], zr * white[2]]
}

/// XYZ to Lab, both relative to the white carried in `cie`.
pub fn xyz_to_lab(values: &Channels, cie: &CieParams) -> Channels {
    let lab = xyz_triple_to_lab(
        [chan(values, "x"), chan(values, "y"), chan(values, "z")],
        cie,
    );
    channel_map(&[("l", lab[0]), ("a", lab[1]), ("b", lab[2])])
}

/// Lab to XYZ, both relative to the white carried in `cie`.
pub fn lab_to_xyz(values: &Channels, cie: &CieParams) -> Channels {
    let xyz = lab_triple_to_xyz(
        [chan(values, "l"), chan(values, "a"), chan(values, "b")],
        cie,
    );
    channel_map(&[("x", xyz[0]), ("y", xyz[1]), ("z", xyz[2])])
}

/// sRGB to Lab under the white carried in `cie`, through XYZ.
pub fn rgb_to_lab(values: &Channels, cie: &CieParams) -> Channels {
    let xyz = rgb_triple_to_xyz(
        [chan(values, "r"), chan(values, "g"), chan(values, "b")],
        cie,
    );
    let lab = xyz_triple_to_lab(xyz, cie);
    channel_map(&[("l", lab[0]), ("a", lab[1]), ("b", lab[2])])
}

/// Lab under the white carried in `cie` to sRGB, through XYZ.
pub fn lab_to_rgb(values: &Channels, cie: &CieParams) -> Channels {
    let xyz = lab_triple_to_xyz(
        [chan(values, "l"), chan(values, "a"), chan(values, "b")],
        cie,
    );
    let rgb = xyz_triple_to_rgb(xyz, cie);
    channel_map(&[("r", rgb[0]), ("g", rgb[1]), ("b", rgb[2])])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_white_is_l_100() {
        let cie = CieParams::default();
        let white = channel_map(&[("x", 95.047), ("y", 100.0), ("z", 108.883)]);
        let lab = xyz_to_lab(&white, &cie);
        assert!((chan(&lab, "l") - 100.0).abs() < 1e-9);
        assert!(chan(&lab, "a").abs() < 1e-9);
        assert!(chan(&lab, "b").abs() < 1e-9);
    }

    #[test]
    fn test_breakpoint_continuity() {
        // the two branches of the nonlinearity must agree at the 6/29 cusp
        let f_above = (EPSILON + 1e-12f64).cbrt();
        let f_below = (KAPPA * (EPSILON - 1e-12) + 16.0) / 116.0;
        assert!((f_above - f_below).abs() < 1e-9);
    }

    #[test]
    fn test_xyz_round_trip() {
        let cie = CieParams::default();
        let original = channel_map(&[("x", 40.0), ("y", 20.0), ("z", 60.0)]);
        let back = lab_to_xyz(&xyz_to_lab(&original, &cie), &cie);
        for channel in ["x", "y", "z"].iter() {
            assert!((chan(&back, channel) - chan(&original, channel)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_rgb_red_fixture() {
        // sRGB red is L* ~53.2, a* ~80.1, b* ~67.2 under D65/2°
        let cie = CieParams::default();
        let red = channel_map(&[("r", 255.0), ("g", 0.0), ("b", 0.0)]);
        let lab = rgb_to_lab(&red, &cie);
        assert!((chan(&lab, "l") - 53.24).abs() < 0.05);
        assert!((chan(&lab, "a") - 80.09).abs() < 0.05);
        assert!((chan(&lab, "b") - 67.20).abs() < 0.05);
    }
}
