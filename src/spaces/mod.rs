//! The built-in color spaces, one module per family. Each module builds the
//! [`ColorSpaceDescriptor`](crate::space::ColorSpaceDescriptor) for its space(s) and owns the pure
//! conversion functions that appear in the descriptor's converter tables. The conversion formulas
//! here are the domain constants of the crate: standard sRGB companding, the CIE Lab nonlinearity
//! with its 6/29 breakpoint, BT.601 luma/chroma coefficients, and so on. None of these functions
//! clamp their output; the conversion engine clamps once, at the end of every pipeline.

use std::collections::HashMap;

use crate::space::{Channels, ColorSpaceDescriptor, ConvertFn};

pub mod cmyk;
pub mod hsl;
pub mod hsv;
pub mod lab;
pub mod lch;
pub mod rgb;
pub mod xyz;
pub mod ycbcr;

/// Builds the descriptors for all ten built-in spaces, in registration order.
pub fn built_in_descriptors() -> Vec<ColorSpaceDescriptor> {
    vec![
        rgb::rgb_descriptor(),
        rgb::rgba_descriptor(),
        hsl::hsl_descriptor(),
        hsl::hsla_descriptor(),
        hsv::descriptor(),
        cmyk::descriptor(),
        lab::descriptor(),
        lch::descriptor(),
        xyz::descriptor(),
        ycbcr::descriptor(),
    ]
}

// Small constructors that keep the descriptor literals below readable: the descriptor fields all
// want owned Strings, but the spaces are defined with literals.

pub(crate) fn channel_list(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| (*n).to_string()).collect()
}

pub(crate) fn channel_map(pairs: &[(&str, f64)]) -> Channels {
    pairs.iter().map(|(k, v)| ((*k).to_string(), *v)).collect()
}

pub(crate) fn range_map(pairs: &[(&str, (f64, f64))]) -> HashMap<String, (f64, f64)> {
    pairs.iter().map(|(k, v)| ((*k).to_string(), *v)).collect()
}

pub(crate) fn convert_table(pairs: &[(&str, ConvertFn)]) -> HashMap<String, ConvertFn> {
    pairs.iter().map(|(k, v)| ((*k).to_string(), *v)).collect()
}

// Channel access inside conversion functions. The engine guarantees complete channel maps, so a
// missing key is an invariant violation and panics.
pub(crate) fn chan(values: &Channels, key: &str) -> f64 {
    values[key]
}
