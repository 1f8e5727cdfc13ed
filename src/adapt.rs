//! Chromatic adaptation: re-expressing XYZ tristimulus values under a different illuminant or
//! observer. All three supported methods are 3×3 linear transforms keyed by the source and
//! destination reference whites: project into a cone response space, scale each response by the
//! ratio of the destination and source white points in that space, and project back. They differ
//! only in the cone response matrix used, with XYZ scaling degenerating to the identity.

use na::{Matrix3, Vector3};

use crate::consts;
use crate::illuminants::CieParams;

/// The supported chromatic adaptation transforms. Bradford is the modern default; Von Kries is
/// the classic alternative, and XYZ scaling is the crude wavelength-independent fallback.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum AdaptationMethod {
    /// The Bradford transform, the default and generally the most accurate.
    Bradford,
    /// The Von Kries transform over Hunt-Pointer-Estevez cone responses.
    VonKries,
    /// Plain scaling of the XYZ axes themselves.
    XYZScaling,
}

impl Default for AdaptationMethod {
    fn default() -> AdaptationMethod {
        AdaptationMethod::Bradford
    }
}

impl AdaptationMethod {
    // The cone response matrix this method scales in.
    fn response_matrix(self) -> Matrix3<f64> {
        match self {
            AdaptationMethod::Bradford => consts::BRADFORD_TRANSFORM_MAT(),
            AdaptationMethod::VonKries => consts::VON_KRIES_TRANSFORM_MAT(),
            AdaptationMethod::XYZScaling => Matrix3::identity(),
        }
    }
}

/// Adapts an XYZ triple measured under `from` so that it describes the same surface under `to`.
/// A no-op when the two reference whites coincide.
pub fn adapt_xyz(xyz: [f64; 3], from: &CieParams, to: &CieParams, method: AdaptationMethod) -> [f64; 3] {
    let source_white = from.white_point();
    let dest_white = to.white_point();
    if source_white == dest_white {
        return xyz;
    }
    let m = method.response_matrix();
    let source_response = m * Vector3::from_row_slice(&source_white);
    let dest_response = m * Vector3::from_row_slice(&dest_white);
    let response = m * Vector3::new(xyz[0], xyz[1], xyz[2]);
    let scaled = Vector3::new(
        response[0] * dest_response[0] / source_response[0],
        response[1] * dest_response[1] / source_response[1],
        response[2] * dest_response[2] / source_response[2],
    );
    let adapted = consts::inv(m) * scaled;
    [adapted[0], adapted[1], adapted[2]]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::illuminants::{Illuminant, Observer};

    fn params(illuminant: Illuminant) -> CieParams {
        CieParams {
            illuminant,
            observer: Observer::Two,
        }
    }

    #[test]
    fn test_white_point_maps_to_white_point() {
        // the defining property of any adaptation transform
        let d65 = params(Illuminant::D65);
        let d50 = params(Illuminant::D50);
        for method in [
            AdaptationMethod::Bradford,
            AdaptationMethod::VonKries,
            AdaptationMethod::XYZScaling,
        ]
        .iter()
        {
            let adapted = adapt_xyz(d65.white_point(), &d65, &d50, *method);
            let expected = d50.white_point();
            for i in 0..3 {
                assert!(
                    (adapted[i] - expected[i]).abs() < 1e-6,
                    "{:?} axis {} mapped {} != {}",
                    method,
                    i,
                    adapted[i],
                    expected[i]
                );
            }
        }
    }

    #[test]
    fn test_round_trip_is_identity() {
        let d65 = params(Illuminant::D65);
        let a = params(Illuminant::A);
        let xyz = [41.24, 21.26, 1.93];
        let there = adapt_xyz(xyz, &d65, &a, AdaptationMethod::Bradford);
        let back = adapt_xyz(there, &a, &d65, AdaptationMethod::Bradford);
        for i in 0..3 {
            assert!((back[i] - xyz[i]).abs() < 1e-8);
        }
    }

    #[test]
    fn test_same_white_is_noop() {
        let d65 = params(Illuminant::D65);
        let xyz = [30.0, 40.0, 50.0];
        assert_eq!(adapt_xyz(xyz, &d65, &d65, AdaptationMethod::Bradford), xyz);
    }
}
