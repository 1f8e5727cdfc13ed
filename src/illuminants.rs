//! This module provides enums for the CIE standard illuminants and observers supported by the
//! crate, along with a table of white point values for each combination. The source for this table
//! is the [ASTM E308 standard](https://www.astm.org/Standards/E308.htm), which copies it from the
//! CIE standard itself. White points are normalized so that the Y (luminance) value is 100. Every
//! perceptually-anchored space (Lab, LCh, XYZ) carries one illuminant/observer pair, and chromatic
//! adaptation between pairs is a linear transform on XYZ keyed by these white points.

/// A listing of the supported CIE standard illuminants, standards that describe a particular set of
/// lighting conditions. The most common ones for computers are D50 and D65, differing kinds of
/// daylight. Others may be added as time goes on in a backwards-compatible manner.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Illuminant {
    /// Incandescent/tungsten light.
    A,
    /// Obsolete direct-sunlight standard, kept for compatibility.
    B,
    /// Obsolete average-daylight standard, kept for compatibility.
    C,
    /// Horizon light, the common print/photography reference.
    D50,
    /// Mid-morning daylight.
    D55,
    /// Noon daylight: the sRGB and general computing reference, and this crate's default.
    D65,
    /// North-sky daylight.
    D75,
    /// The equal-energy illuminant.
    E,
    /// Cool white fluorescent.
    F2,
    /// Broad-band daylight fluorescent.
    F7,
    /// Narrow-band white fluorescent.
    F11,
}

/// The CIE standard observer: a model of the human field of view used when the white point tables
/// were measured. Almost everything on a computer assumes the 1931 2° observer.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Observer {
    /// The CIE 1931 2° standard observer, the default.
    Two,
    /// The CIE 1964 10° supplementary observer.
    Ten,
}

impl Default for Illuminant {
    fn default() -> Illuminant {
        Illuminant::D65
    }
}

impl Default for Observer {
    fn default() -> Observer {
        Observer::Two
    }
}

/// An array of the supported illuminants, in the same order as the white point tables below.
pub static ILLUMINANTS: [Illuminant; 11] = [
    Illuminant::A,
    Illuminant::B,
    Illuminant::C,
    Illuminant::D50,
    Illuminant::D55,
    Illuminant::D65,
    Illuminant::D75,
    Illuminant::E,
    Illuminant::F2,
    Illuminant::F7,
    Illuminant::F11,
];

/// White point values for each illuminant under the 2° observer, in the order of the `ILLUMINANTS`
/// array. Each row is [X, Y, Z] normalized so that Y is 100.
pub static WHITE_POINTS_2: [[f64; 3]; 11] = [
    [109.850, 100.000, 35.585],
    [99.0927, 100.000, 85.313],
    [98.074, 100.000, 118.232],
    [96.422, 100.000, 82.521],
    [95.682, 100.000, 92.129],
    [95.047, 100.000, 108.883],
    [94.972, 100.000, 122.638],
    [100.000, 100.000, 100.000],
    [99.187, 100.000, 67.395],
    [95.044, 100.000, 108.755],
    [100.966, 100.000, 64.370],
];

/// White point values for each illuminant under the 10° observer, in the order of the
/// `ILLUMINANTS` array.
pub static WHITE_POINTS_10: [[f64; 3]; 11] = [
    [111.144, 100.000, 35.200],
    [99.178, 100.000, 84.3493],
    [97.285, 100.000, 116.145],
    [96.720, 100.000, 81.427],
    [95.799, 100.000, 90.926],
    [94.811, 100.000, 107.304],
    [94.416, 100.000, 120.641],
    [100.000, 100.000, 100.000],
    [103.280, 100.000, 69.026],
    [95.792, 100.000, 107.687],
    [103.866, 100.000, 65.627],
];

impl Illuminant {
    // index into the static tables
    fn index(self) -> usize {
        match self {
            Illuminant::A => 0,
            Illuminant::B => 1,
            Illuminant::C => 2,
            Illuminant::D50 => 3,
            Illuminant::D55 => 4,
            Illuminant::D65 => 5,
            Illuminant::D75 => 6,
            Illuminant::E => 7,
            Illuminant::F2 => 8,
            Illuminant::F7 => 9,
            Illuminant::F11 => 10,
        }
    }

    /// Gets the XYZ coordinates of the white point of this illuminant under the given observer.
    pub fn white_point(&self, observer: Observer) -> [f64; 3] {
        match observer {
            Observer::Two => WHITE_POINTS_2[self.index()],
            Observer::Ten => WHITE_POINTS_10[self.index()],
        }
    }

    /// The short lowercase code used in string formatting and structured export, e.g. `"d65"`.
    pub fn code(&self) -> &'static str {
        match *self {
            Illuminant::A => "a",
            Illuminant::B => "b",
            Illuminant::C => "c",
            Illuminant::D50 => "d50",
            Illuminant::D55 => "d55",
            Illuminant::D65 => "d65",
            Illuminant::D75 => "d75",
            Illuminant::E => "e",
            Illuminant::F2 => "f2",
            Illuminant::F7 => "f7",
            Illuminant::F11 => "f11",
        }
    }

    /// Parses an illuminant from its code, case-insensitively. Returns `None` on unknown codes.
    pub fn from_code(code: &str) -> Option<Illuminant> {
        match code.to_lowercase().as_str() {
            "a" => Some(Illuminant::A),
            "b" => Some(Illuminant::B),
            "c" => Some(Illuminant::C),
            "d50" => Some(Illuminant::D50),
            "d55" => Some(Illuminant::D55),
            "d65" => Some(Illuminant::D65),
            "d75" => Some(Illuminant::D75),
            "e" => Some(Illuminant::E),
            "f2" => Some(Illuminant::F2),
            "f7" => Some(Illuminant::F7),
            "f11" => Some(Illuminant::F11),
            _ => None,
        }
    }
}

impl Observer {
    /// The code used in string formatting and structured export: `"2"` or `"10"`.
    pub fn code(&self) -> &'static str {
        match *self {
            Observer::Two => "2",
            Observer::Ten => "10",
        }
    }

    /// Parses an observer from its code. Returns `None` on unknown codes.
    pub fn from_code(code: &str) -> Option<Observer> {
        match code {
            "2" => Some(Observer::Two),
            "10" => Some(Observer::Ten),
            _ => None,
        }
    }
}

/// An illuminant/observer pair, threaded end to end through every CIE-aware conversion. The
/// default pair (D65, 2°) is what a space gets when the caller doesn't supply explicit parameters.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct CieParams {
    /// The reference light source.
    pub illuminant: Illuminant,
    /// The standard observer the white point was measured against.
    pub observer: Observer,
}

impl CieParams {
    /// Builds a pair from optional parts, filling in the defaults for anything missing.
    pub fn new(illuminant: Option<Illuminant>, observer: Option<Observer>) -> CieParams {
        CieParams {
            illuminant: illuminant.unwrap_or_default(),
            observer: observer.unwrap_or_default(),
        }
    }

    /// The white point of this pair.
    pub fn white_point(&self) -> [f64; 3] {
        self.illuminant.white_point(self.observer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_white_points_normalized() {
        for ill in ILLUMINANTS.iter() {
            for obs in [Observer::Two, Observer::Ten].iter() {
                let wp = ill.white_point(*obs);
                assert!((wp[1] - 100.0).abs() < 1e-10);
            }
        }
    }

    #[test]
    fn test_code_round_trip() {
        for ill in ILLUMINANTS.iter() {
            assert_eq!(Illuminant::from_code(ill.code()), Some(*ill));
        }
        assert_eq!(Observer::from_code("10"), Some(Observer::Ten));
        assert_eq!(Illuminant::from_code("D65"), Some(Illuminant::D65));
        assert_eq!(Illuminant::from_code("d99"), None);
    }

    #[test]
    fn test_default_pair() {
        let params = CieParams::default();
        assert_eq!(params.illuminant, Illuminant::D65);
        assert_eq!(params.observer, Observer::Two);
        assert_eq!(params.white_point(), [95.047, 100.000, 108.883]);
    }
}
