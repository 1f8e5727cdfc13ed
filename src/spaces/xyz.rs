//! The CIE 1931 XYZ tristimulus space, the device-independent anchor for everything perceptual in
//! the crate. Values are scaled so that the Y of the reference white is 100, matching the white
//! point tables in the `illuminants` module. The sRGB relationship is the usual one: undo the
//! sRGB companding curve, multiply by the IEC 61966-2-1 matrix (which is defined for D65 and the
//! 2° observer), and chromatically adapt from there when the color carries a different
//! illuminant/observer pair.

use na::Vector3;

use crate::adapt::{adapt_xyz, AdaptationMethod};
use crate::consts;
use crate::illuminants::CieParams;
use crate::space::{Channels, ColorSpaceDescriptor};
use crate::spaces::{chan, channel_list, channel_map, convert_table, range_map};
use crate::spaces::lab::{lab_to_xyz, xyz_to_lab};

/// The descriptor for the `xyz` space. The declared ranges are the D65 white point axes; like
/// every range in the crate they bound clamping, not storage.
pub fn descriptor() -> ColorSpaceDescriptor {
    ColorSpaceDescriptor {
        name: "xyz".to_string(),
        channels: channel_list(&["x", "y", "z"]),
        defaults: channel_map(&[("x", 0.0), ("y", 0.0), ("z", 0.0)]),
        ranges: range_map(&[
            ("x", (0.0, 95.047)),
            ("y", (0.0, 100.0)),
            ("z", (0.0, 108.883)),
        ]),
        has_alpha: false,
        alpha_channel: None,
        supports_illuminant: true,
        supports_observer: true,
        percent_channels: vec![],
        converters: convert_table(&[("rgb", xyz_to_rgb), ("lab", xyz_to_lab)]),
        from_converters: convert_table(&[("rgb", rgb_to_xyz), ("lab", lab_to_xyz)]),
    }
}

// sRGB companding: gamma-encode a linear component on 0-1.
pub(crate) fn compand(linear: f64) -> f64 {
    if linear <= 0.0031308 {
        12.92 * linear
    } else {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    }
}

// The inverse: linearize a gamma-encoded sRGB component on 0-1.
pub(crate) fn linearize(encoded: f64) -> f64 {
    if encoded <= 0.04045 {
        encoded / 12.92
    } else {
        ((encoded + 0.055) / 1.055).powf(2.4)
    }
}

// An 0-255 sRGB triple to an XYZ triple under the given reference white.
pub(crate) fn rgb_triple_to_xyz(rgb: [f64; 3], cie: &CieParams) -> [f64; 3] {
    let linear = Vector3::new(
        linearize(rgb[0] / 255.0),
        linearize(rgb[1] / 255.0),
        linearize(rgb[2] / 255.0),
    );
    let xyz = consts::STANDARD_RGB_TRANSFORM_MAT() * linear * 100.0;
    // the matrix is a D65/2° constant: re-express for any other reference white
    adapt_xyz(
        [xyz[0], xyz[1], xyz[2]],
        &CieParams::default(),
        cie,
        AdaptationMethod::Bradford,
    )
}

// An XYZ triple under the given reference white to an 0-255 sRGB triple.
pub(crate) fn xyz_triple_to_rgb(xyz: [f64; 3], cie: &CieParams) -> [f64; 3] {
    let at_d65 = adapt_xyz(xyz, cie, &CieParams::default(), AdaptationMethod::Bradford);
    let linear = consts::inv(consts::STANDARD_RGB_TRANSFORM_MAT())
        * Vector3::new(at_d65[0] / 100.0, at_d65[1] / 100.0, at_d65[2] / 100.0);
    [
        compand(linear[0]) * 255.0,
        compand(linear[1]) * 255.0,
        compand(linear[2]) * 255.0,
    ]
}

/// sRGB to XYZ under the illuminant/observer carried in `cie`.
pub fn rgb_to_xyz(values: &Channels, cie: &CieParams) -> Channels {
    let xyz = rgb_triple_to_xyz(
        [chan(values, "r"), chan(values, "g"), chan(values, "b")],
        cie,
    );
    channel_map(&[("x", xyz[0]), ("y", xyz[1]), ("z", xyz[2])])
}

/// XYZ under the illuminant/observer carried in `cie` to sRGB.
pub fn xyz_to_rgb(values: &Channels, cie: &CieParams) -> Channels {
    let rgb = xyz_triple_to_rgb(
        [chan(values, "x"), chan(values, "y"), chan(values, "z")],
        cie,
    );
    channel_map(&[("r", rgb[0]), ("g", rgb[1]), ("b", rgb[2])])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::illuminants::{Illuminant, Observer};

    #[test]
    fn test_white_maps_to_white_point() {
        let cie = CieParams::default();
        let white = channel_map(&[("r", 255.0), ("g", 255.0), ("b", 255.0)]);
        let xyz = rgb_to_xyz(&white, &cie);
        assert!((chan(&xyz, "x") - 95.047).abs() < 0.01);
        assert!((chan(&xyz, "y") - 100.0).abs() < 0.01);
        assert!((chan(&xyz, "z") - 108.883).abs() < 0.01);
    }

    #[test]
    fn test_red_primary() {
        // the first column of the sRGB matrix, times 100
        let cie = CieParams::default();
        let red = channel_map(&[("r", 255.0), ("g", 0.0), ("b", 0.0)]);
        let xyz = rgb_to_xyz(&red, &cie);
        assert!((chan(&xyz, "x") - 41.24564).abs() < 0.001);
        assert!((chan(&xyz, "y") - 21.26729).abs() < 0.001);
        assert!((chan(&xyz, "z") - 1.93339).abs() < 0.001);
    }

    #[test]
    fn test_round_trip_under_d50() {
        let cie = CieParams {
            illuminant: Illuminant::D50,
            observer: Observer::Two,
        };
        let original = channel_map(&[("r", 180.0), ("g", 42.0), ("b", 210.0)]);
        let back = xyz_to_rgb(&rgb_to_xyz(&original, &cie), &cie);
        for channel in ["r", "g", "b"].iter() {
            assert!((chan(&back, channel) - chan(&original, channel)).abs() < 1e-6);
        }
    }
}
