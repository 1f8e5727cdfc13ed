//! The HSV cylindrical transformation of sRGB. HSV and HSL share their hue axis exactly, but
//! *value* runs from black straight up to the fully saturated color, whereas HSL's *lightness*
//! continues on to white. Saturation and value are percentages here, hue is 0–360. The same
//! hexagonal projection as the HSL module is used.

use crate::illuminants::CieParams;
use crate::space::{Channels, ColorSpaceDescriptor};
use crate::spaces::hsl::rgb_hex_projection;
use crate::spaces::{chan, channel_list, channel_map, convert_table, range_map};

/// The descriptor for the `hsv` space.
pub fn descriptor() -> ColorSpaceDescriptor {
    ColorSpaceDescriptor {
        name: "hsv".to_string(),
        channels: channel_list(&["h", "s", "v"]),
        defaults: channel_map(&[("h", 0.0), ("s", 0.0), ("v", 0.0)]),
        ranges: range_map(&[
            ("h", (0.0, 360.0)),
            ("s", (0.0, 100.0)),
            ("v", (0.0, 100.0)),
        ]),
        has_alpha: false,
        alpha_channel: None,
        supports_illuminant: false,
        supports_observer: false,
        percent_channels: channel_list(&["s", "v"]),
        converters: convert_table(&[("rgb", hsv_to_rgb)]),
        from_converters: convert_table(&[("rgb", rgb_to_hsv)]),
    }
}

/// HSV to sRGB over the hexagonal projection.
pub fn hsv_to_rgb(values: &Channels, _cie: &CieParams) -> Channels {
    let h = chan(values, "h");
    let s = chan(values, "s") / 100.0;
    let v = chan(values, "v") / 100.0;
    let chroma = v * s;
    let x = chroma * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
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
    // unlike HSL the offset is measured from the top of the cone
    let offset = v - chroma;
    channel_map(&[
        ("r", (r1 + offset) * 255.0),
        ("g", (g1 + offset) * 255.0),
        ("b", (b1 + offset) * 255.0),
    ])
}

/// sRGB to HSV over the hexagonal projection.
pub fn rgb_to_hsv(values: &Channels, _cie: &CieParams) -> Channels {
    let r = chan(values, "r") / 255.0;
    let g = chan(values, "g") / 255.0;
    let b = chan(values, "b") / 255.0;
    let (hue, chroma, max_c, _min_c) = rgb_hex_projection(r, g, b);
    let value = max_c;
    let saturation = if value == 0.0 { 0.0 } else { chroma / value };
    channel_map(&[
        ("h", hue),
        ("s", saturation * 100.0),
        ("v", value * 100.0),
    ])
}
