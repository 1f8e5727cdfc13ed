//! The sRGB space in its two flavors: `rgb` with three 0–255 channels, and `rgba` with a fourth
//! 0–255 alpha channel defaulting to fully opaque. RGB is the hub space of the whole crate: any
//! two registered spaces interoperate as long as each has an RGB leg, so these descriptors carry
//! no converters beyond the trivial rgb↔rgba pair. Everything else reaches RGB through the other
//! space's own tables.

use crate::illuminants::CieParams;
use crate::space::{Channels, ColorSpaceDescriptor};
use crate::spaces::{chan, channel_list, channel_map, convert_table, range_map};

/// The descriptor for the `rgb` space.
pub fn rgb_descriptor() -> ColorSpaceDescriptor {
    ColorSpaceDescriptor {
        name: "rgb".to_string(),
        channels: channel_list(&["r", "g", "b"]),
        defaults: channel_map(&[("r", 0.0), ("g", 0.0), ("b", 0.0)]),
        ranges: range_map(&[
            ("r", (0.0, 255.0)),
            ("g", (0.0, 255.0)),
            ("b", (0.0, 255.0)),
        ]),
        has_alpha: false,
        alpha_channel: None,
        supports_illuminant: false,
        supports_observer: false,
        percent_channels: vec![],
        converters: convert_table(&[("rgba", rgb_to_rgba)]),
        from_converters: convert_table(&[("rgba", rgba_to_rgb)]),
    }
}

/// The descriptor for the `rgba` space.
pub fn rgba_descriptor() -> ColorSpaceDescriptor {
    ColorSpaceDescriptor {
        name: "rgba".to_string(),
        channels: channel_list(&["r", "g", "b", "a"]),
        defaults: channel_map(&[("r", 0.0), ("g", 0.0), ("b", 0.0), ("a", 255.0)]),
        ranges: range_map(&[
            ("r", (0.0, 255.0)),
            ("g", (0.0, 255.0)),
            ("b", (0.0, 255.0)),
            ("a", (0.0, 255.0)),
        ]),
        has_alpha: true,
        alpha_channel: Some("a".to_string()),
        supports_illuminant: false,
        supports_observer: false,
        percent_channels: vec![],
        converters: convert_table(&[("rgb", rgba_to_rgb)]),
        from_converters: convert_table(&[("rgb", rgb_to_rgba)]),
    }
}

/// Drops the alpha channel.
pub fn rgba_to_rgb(values: &Channels, _cie: &CieParams) -> Channels {
    channel_map(&[
        ("r", chan(values, "r")),
        ("g", chan(values, "g")),
        ("b", chan(values, "b")),
    ])
}

/// Adds a fully opaque alpha channel.
pub fn rgb_to_rgba(values: &Channels, _cie: &CieParams) -> Channels {
    channel_map(&[
        ("r", chan(values, "r")),
        ("g", chan(values, "g")),
        ("b", chan(values, "b")),
        ("a", 255.0),
    ])
}
