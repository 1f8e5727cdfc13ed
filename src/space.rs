//! This module describes color spaces as data instead of as types: a [`ColorSpaceDescriptor`] is a
//! static table of everything the rest of the crate needs to know about a space (its ordered
//! channel list, defaults and ranges, alpha and CIE support, and its conversion function tables),
//! and a [`ColorSpaceRegistry`] maps names to descriptors so that any two registered spaces can
//! interoperate by name. The ten built-in spaces are installed by [`register_built_in`], a
//! deliberate bootstrap step that must run once per process before any name-based operation:
//! nothing here registers lazily behind your back.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::error::{ColorError, ColorResult};
use crate::illuminants::CieParams;
use crate::spaces;

/// A channel map: channel name to raw `f64` value. The key set of any map built against a
/// descriptor is exactly the descriptor's channel list, never more or less.
pub type Channels = HashMap<String, f64>;

/// A pure conversion function between two spaces' channel maps. CIE parameters are threaded
/// through so that perceptually-anchored spaces can find their white point; every other space
/// ignores them. Conversion functions never clamp: that happens once, at the end of the pipeline.
pub type ConvertFn = fn(&Channels, &CieParams) -> Channels;

/// Static metadata for one color space. Effectively a singleton per space: built once, shared
/// behind an `Arc` by the registry and by every color value in that space. Equality compares all
/// fields, converter tables included, which `fn` pointers support.
#[derive(Clone, PartialEq)]
pub struct ColorSpaceDescriptor {
    /// The unique registry key, e.g. `"rgb"` or `"lab"`. Lowercase by convention.
    pub name: String,
    /// The channel names in order. The order is significant for string formatting and is never
    /// reordered.
    pub channels: Vec<String>,
    /// The default value for each channel, used when a constructor is given a partial channel map
    /// and by `without`.
    pub defaults: HashMap<String, f64>,
    /// The `(min, max)` range for each channel. Used only for validation and clamping, never for
    /// storage: out-of-range values are stored verbatim in non-strict mode.
    pub ranges: HashMap<String, (f64, f64)>,
    /// Whether the space carries an alpha channel.
    pub has_alpha: bool,
    /// The name of the alpha channel, if there is one.
    pub alpha_channel: Option<String>,
    /// Whether the space is anchored to a CIE illuminant. Only Lab, LCh, and XYZ are.
    pub supports_illuminant: bool,
    /// Whether the space is anchored to a CIE standard observer. Matches `supports_illuminant`
    /// for the built-in spaces.
    pub supports_observer: bool,
    /// Channels rendered with a `%` suffix in the display form, e.g. saturation in HSL. Purely a
    /// compatibility surface: machine parsing never depends on it.
    pub percent_channels: Vec<String>,
    /// Direct converters out of this space, keyed by target space name. Every space carries at
    /// least `"rgb"` here: that is the load-bearing interoperability guarantee behind the RGB hub.
    pub converters: HashMap<String, ConvertFn>,
    /// Converters into this space, keyed by source space name. Every space carries at least
    /// `"rgb"` here as well.
    pub from_converters: HashMap<String, ConvertFn>,
}

impl std::fmt::Debug for ColorSpaceDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        // the function tables aren't printable, so summarize them by key
        let mut to_keys: Vec<&String> = self.converters.keys().collect();
        let mut from_keys: Vec<&String> = self.from_converters.keys().collect();
        to_keys.sort();
        from_keys.sort();
        f.debug_struct("ColorSpaceDescriptor")
            .field("name", &self.name)
            .field("channels", &self.channels)
            .field("has_alpha", &self.has_alpha)
            .field("supports_illuminant", &self.supports_illuminant)
            .field("converters", &to_keys)
            .field("from_converters", &from_keys)
            .finish()
    }
}

impl ColorSpaceDescriptor {
    /// Whether this descriptor has a channel with the given name.
    pub fn has_channel(&self, channel: &str) -> bool {
        self.channels.iter().any(|c| c == channel)
    }

    /// The declared `(min, max)` range of a channel, or `None` for an unknown channel.
    pub fn range(&self, channel: &str) -> Option<(f64, f64)> {
        self.ranges.get(channel).copied()
    }

    /// Whether a value is within the declared range of a channel. Unknown channels and NaN are
    /// never valid.
    pub fn validate(&self, channel: &str, value: f64) -> bool {
        match self.range(channel) {
            Some((min, max)) => value >= min && value <= max,
            None => false,
        }
    }

    /// Clamps a value into the declared range of a channel. Values for unknown channels pass
    /// through untouched: the callers guarantee the channel exists.
    pub fn clamp(&self, channel: &str, value: f64) -> f64 {
        match self.range(channel) {
            Some((min, max)) => {
                if value < min {
                    min
                } else if value > max {
                    max
                } else {
                    value
                }
            }
            None => value,
        }
    }

    /// Clamps a whole channel map into range, consuming the raw map.
    pub fn clamp_all(&self, values: Channels) -> Channels {
        values
            .into_iter()
            .map(|(channel, value)| {
                let clamped = self.clamp(&channel, value);
                (channel, clamped)
            })
            .collect()
    }

    /// The direct converter out of this space into `target`, if one is registered.
    pub fn converter_to(&self, target: &str) -> Option<ConvertFn> {
        self.converters.get(target).copied()
    }

    /// The converter into this space from `source`, if one is registered.
    pub fn converter_from(&self, source: &str) -> Option<ConvertFn> {
        self.from_converters.get(source).copied()
    }
}

/// A name-to-descriptor lookup table. One process-wide instance lives behind [`registry`]; the
/// type is public so tests and embedders can build isolated registries of their own.
#[derive(Debug, Default)]
pub struct ColorSpaceRegistry {
    spaces: HashMap<String, Arc<ColorSpaceDescriptor>>,
}

impl ColorSpaceRegistry {
    /// Creates an empty registry.
    pub fn new() -> ColorSpaceRegistry {
        ColorSpaceRegistry::default()
    }

    /// Inserts a descriptor by its name, silently overwriting any previous registration under the
    /// same name.
    pub fn register(&mut self, descriptor: ColorSpaceDescriptor) {
        self.spaces
            .insert(descriptor.name.clone(), Arc::new(descriptor));
    }

    /// Looks up a descriptor by name.
    pub fn get(&self, name: &str) -> ColorResult<Arc<ColorSpaceDescriptor>> {
        self.spaces
            .get(name)
            .cloned()
            .ok_or_else(|| ColorError::ColorSpaceNotFound(name.to_string()))
    }

    /// Whether a space with the given name is registered.
    pub fn has(&self, name: &str) -> bool {
        self.spaces.contains_key(name)
    }

    /// The registered space names, sorted for deterministic output.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.spaces.keys().cloned().collect();
        names.sort();
        names
    }
}

lazy_static! {
    static ref REGISTRY: RwLock<ColorSpaceRegistry> = RwLock::new(ColorSpaceRegistry::new());
}

/// Registers a descriptor in the process-wide registry, overwriting silently on name collision.
/// Registry mutation is expected to happen only at startup.
pub fn register(descriptor: ColorSpaceDescriptor) {
    REGISTRY
        .write()
        .expect("color space registry lock poisoned")
        .register(descriptor);
}

/// Looks up a descriptor in the process-wide registry.
pub fn lookup(name: &str) -> ColorResult<Arc<ColorSpaceDescriptor>> {
    REGISTRY
        .read()
        .expect("color space registry lock poisoned")
        .get(name)
}

/// Whether a space name is registered process-wide.
pub fn is_registered(name: &str) -> bool {
    REGISTRY
        .read()
        .expect("color space registry lock poisoned")
        .has(name)
}

/// The names of every registered space, sorted.
pub fn registered_names() -> Vec<String> {
    REGISTRY
        .read()
        .expect("color space registry lock poisoned")
        .names()
}

/// Registers the ten built-in spaces: rgb, rgba, hsl, hsla, hsv, cmyk, lab, lch, xyz, and ycbcr.
/// This is the mandatory bootstrap step: no space can be used by name before it runs. It is
/// idempotent, so calling it from every entry point of a program (or every test) is fine.
pub fn register_built_in() {
    let mut registry = REGISTRY
        .write()
        .expect("color space registry lock poisoned");
    for descriptor in spaces::built_in_descriptors() {
        tracing::trace!(space = %descriptor.name, "registering built-in color space");
        registry.register(descriptor);
    }
}
