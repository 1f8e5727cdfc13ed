//! This file provides constants that are used for matrix multiplication and color space
//! conversion, along with a function for computing inverses. The reason for this method of doing
//! things instead of simple multiplications and additions is because the inverses of these
//! transformations become slightly off, allowing for errors to slowly creep in even when doing
//! things that should not change the result at all, e.g., converting to an illuminant and back
//! again. Thus, this method allows for saner checking of constant values and guaranteed precision
//! in inversion.

use na::Matrix3;

/// Not safe for general use. If `const fn` supported this, it would be used instead. The only
/// reason this is here is to calculate the inverse of constant matrices. This panics on singular
/// matrices!
pub fn inv(m: Matrix3<f64>) -> Matrix3<f64> {
    match m.try_inverse() {
        Some(inverse) => inverse,
        None => panic!("Constant matrix not invertible!"),
    }
}

/// The linear sRGB to CIE XYZ matrix for the D65 white point and 2° observer, per IEC 61966-2-1.
#[allow(non_snake_case)]
pub fn STANDARD_RGB_TRANSFORM_MAT() -> Matrix3<f64> {
    Matrix3::new(
        0.4124564,
        0.3575761,
        0.1804375,
        0.2126729,
        0.7151522,
        0.0721750,
        0.0193339,
        0.1191920,
        0.9503041,
    )
}

/// The Bradford cone response matrix, the default basis for chromatic adaptation.
#[allow(non_snake_case)]
pub fn BRADFORD_TRANSFORM_MAT() -> Matrix3<f64> {
    Matrix3::new(
        00.8951,
        00.2664,
        -0.1614,
        -0.7502,
        01.7135,
        00.0367,
        00.0389,
        -0.0685,
        01.0296,
    )
}

/// The Von Kries (Hunt-Pointer-Estevez) cone response matrix, an alternate adaptation basis.
#[allow(non_snake_case)]
pub fn VON_KRIES_TRANSFORM_MAT() -> Matrix3<f64> {
    Matrix3::new(
        00.4002400,
        00.7076000,
        -0.0808100,
        -0.2263000,
        01.1653200,
        00.0457000,
        00.0000000,
        00.0000000,
        00.9182200,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inv_round_trips() {
        let m = STANDARD_RGB_TRANSFORM_MAT();
        let round_trip = m * inv(m);
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!((round_trip[(i, j)] - expected).abs() < 1e-10);
            }
        }
    }
}
