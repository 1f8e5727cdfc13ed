//! The color value model: a channel map bound to a space descriptor, an illuminant/observer pair,
//! and a validation policy. Two access disciplines share the same validation and conversion code:
//! [`ColorValue`] is immutable and every update returns a fresh value, while
//! [`MutableColorValue`] mutates its own map in place and returns itself for chaining. In both,
//! values are stored exactly as the caller gave them. Out-of-range input is preserved verbatim
//! and only clamped when read, unless the value is in strict mode, in which case construction and
//! mutation fail outright instead of clamping. That soft-validation split is deliberate and load
//! bearing: tests distinguish raw reads, clamped reads, and strict failures.

use std::fmt;
use std::sync::Arc;

use crate::adapt::AdaptationMethod;
use crate::convert;
use crate::error::{ColorError, ColorResult};
use crate::export::ColorExport;
use crate::filter::{BinaryFilter, FilterParam, ParameterizedFilter, UnaryFilter};
use crate::filters::blend::Blend;
use crate::filters::brightness::Brightness;
use crate::filters::complement::{Complement, ComplementMethod};
use crate::filters::grayscale::Grayscale;
use crate::filters::mix::Mix;
use crate::hex;
use crate::illuminants::{CieParams, Illuminant, Observer};
use crate::named;
use crate::space::{self, Channels, ColorSpaceDescriptor};
use crate::spaces::channel_map;

/// How out-of-range channel values are treated. Carried on every value and consulted by one
/// validation function, instead of being re-decided at every call site.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ValidationPolicy {
    /// Store raw values verbatim and clamp them on read. The default.
    Clamp,
    /// Reject out-of-range values at construction and mutation time with
    /// [`ColorError::InvalidColorValue`].
    Strict,
}

impl Default for ValidationPolicy {
    fn default() -> ValidationPolicy {
        ValidationPolicy::Clamp
    }
}

// Shared by both value types: checks one channel update against the descriptor and policy,
// returning the raw value to store.
fn check_update(
    space: &ColorSpaceDescriptor,
    channel: &str,
    value: f64,
    policy: ValidationPolicy,
) -> ColorResult<f64> {
    if !space.has_channel(channel) {
        return Err(ColorError::InvalidColorValue(format!(
            "space {:?} has no channel {:?}",
            space.name, channel
        )));
    }
    if !value.is_finite() {
        return Err(ColorError::InvalidColorValue(format!(
            "channel {:?} value must be a finite number, got {}",
            channel, value
        )));
    }
    if policy == ValidationPolicy::Strict && !space.validate(channel, value) {
        let (min, max) = space.range(channel).expect("known channel has a range");
        return Err(ColorError::InvalidColorValue(format!(
            "channel {:?} value {} out of range {}..{} in strict mode",
            channel, value, min, max
        )));
    }
    Ok(value)
}

// Builds the full channel map for a descriptor from possibly-partial input, filling defaults and
// rejecting unknown channels so the key set is exactly the descriptor's channel set.
fn build_values(
    space: &ColorSpaceDescriptor,
    initial: Channels,
    policy: ValidationPolicy,
) -> ColorResult<Channels> {
    for key in initial.keys() {
        if !space.has_channel(key) {
            return Err(ColorError::InvalidColorValue(format!(
                "space {:?} has no channel {:?}",
                space.name, key
            )));
        }
    }
    let mut values = Channels::new();
    for channel in &space.channels {
        let value = match initial.get(channel) {
            Some(v) => check_update(space, channel, *v, policy)?,
            None => space.defaults[channel],
        };
        values.insert(channel.clone(), value);
    }
    Ok(values)
}

// The shared display form: "{space}({v1}, {v2}, ...)" with clamped values in channel order and a
// % suffix on percentage channels.
fn format_color(space: &ColorSpaceDescriptor, values: &Channels, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "{}(", space.name)?;
    for (i, channel) in space.channels.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        let clamped = space.clamp(channel, values[channel]);
        write!(f, "{}", format_number(clamped))?;
        if space.percent_channels.iter().any(|c| c == channel) {
            write!(f, "%")?;
        }
    }
    write!(f, ")")
}

// Integers print without a trailing ".0"; everything else prints as-is.
pub(crate) fn format_number(value: f64) -> String {
    if (value - value.round()).abs() < 1e-9 {
        format!("{}", value.round() as i64)
    } else {
        format!("{}", value)
    }
}

/// An immutable color: every update or conversion yields a new value sharing no mutable state
/// with the original. Cheap to clone (the descriptor is shared behind an `Arc`) and safe to share
/// across threads read-only.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorValue {
    space: Arc<ColorSpaceDescriptor>,
    values: Channels,
    illuminant: Illuminant,
    observer: Observer,
    policy: ValidationPolicy,
}

impl ColorValue {
    /// Builds a color against a descriptor. Channels absent from `initial` take their descriptor
    /// defaults; unknown channels and non-finite numbers fail with
    /// [`ColorError::InvalidColorValue`], as do out-of-range values under
    /// [`ValidationPolicy::Strict`].
    pub fn new(
        space: Arc<ColorSpaceDescriptor>,
        initial: Channels,
        illuminant: Option<Illuminant>,
        observer: Option<Observer>,
        policy: ValidationPolicy,
    ) -> ColorResult<ColorValue> {
        let values = build_values(&space, initial, policy)?;
        Ok(ColorValue {
            space,
            values,
            illuminant: illuminant.unwrap_or_default(),
            observer: observer.unwrap_or_default(),
            policy,
        })
    }

    // Conversion results arrive pre-clamped with a complete key set, so skip validation.
    pub(crate) fn from_parts(
        space: Arc<ColorSpaceDescriptor>,
        values: Channels,
        cie: CieParams,
        policy: ValidationPolicy,
    ) -> ColorValue {
        ColorValue {
            space,
            values,
            illuminant: cie.illuminant,
            observer: cie.observer,
            policy,
        }
    }

    // ------------------------------------------------------------------
    // per-space factories
    // ------------------------------------------------------------------

    fn factory(name: &str, pairs: &[(&str, f64)]) -> ColorResult<ColorValue> {
        ColorValue::new(
            space::lookup(name)?,
            channel_map(pairs),
            None,
            None,
            ValidationPolicy::Clamp,
        )
    }

    /// An sRGB color with 0–255 channels.
    pub fn rgb(r: f64, g: f64, b: f64) -> ColorResult<ColorValue> {
        ColorValue::factory("rgb", &[("r", r), ("g", g), ("b", b)])
    }

    /// An sRGB color with a 0–255 alpha channel.
    pub fn rgba(r: f64, g: f64, b: f64, a: f64) -> ColorResult<ColorValue> {
        ColorValue::factory("rgba", &[("r", r), ("g", g), ("b", b), ("a", a)])
    }

    /// An HSL color: hue 0–360, saturation and lightness 0–100.
    pub fn hsl(h: f64, s: f64, l: f64) -> ColorResult<ColorValue> {
        ColorValue::factory("hsl", &[("h", h), ("s", s), ("l", l)])
    }

    /// An HSLA color: as [`ColorValue::hsl`] with a 0–1 alpha channel.
    pub fn hsla(h: f64, s: f64, l: f64, a: f64) -> ColorResult<ColorValue> {
        ColorValue::factory("hsla", &[("h", h), ("s", s), ("l", l), ("a", a)])
    }

    /// An HSV color: hue 0–360, saturation and value 0–100.
    pub fn hsv(h: f64, s: f64, v: f64) -> ColorResult<ColorValue> {
        ColorValue::factory("hsv", &[("h", h), ("s", s), ("v", v)])
    }

    /// A CMYK color with percentage channels.
    pub fn cmyk(c: f64, m: f64, y: f64, k: f64) -> ColorResult<ColorValue> {
        ColorValue::factory("cmyk", &[("c", c), ("m", m), ("y", y), ("k", k)])
    }

    /// A CIELAB color under the default D65/2° reference white.
    pub fn lab(l: f64, a: f64, b: f64) -> ColorResult<ColorValue> {
        ColorValue::factory("lab", &[("l", l), ("a", a), ("b", b)])
    }

    /// A CIELAB color under an explicit illuminant/observer pair.
    pub fn lab_with(
        l: f64,
        a: f64,
        b: f64,
        illuminant: Option<Illuminant>,
        observer: Option<Observer>,
    ) -> ColorResult<ColorValue> {
        ColorValue::new(
            space::lookup("lab")?,
            channel_map(&[("l", l), ("a", a), ("b", b)]),
            illuminant,
            observer,
            ValidationPolicy::Clamp,
        )
    }

    /// A CIELCh color under the default D65/2° reference white.
    pub fn lch(l: f64, c: f64, h: f64) -> ColorResult<ColorValue> {
        ColorValue::factory("lch", &[("l", l), ("c", c), ("h", h)])
    }

    /// A CIELCh color under an explicit illuminant/observer pair.
    pub fn lch_with(
        l: f64,
        c: f64,
        h: f64,
        illuminant: Option<Illuminant>,
        observer: Option<Observer>,
    ) -> ColorResult<ColorValue> {
        ColorValue::new(
            space::lookup("lch")?,
            channel_map(&[("l", l), ("c", c), ("h", h)]),
            illuminant,
            observer,
            ValidationPolicy::Clamp,
        )
    }

    /// A CIE XYZ color under the default D65/2° reference white.
    pub fn xyz(x: f64, y: f64, z: f64) -> ColorResult<ColorValue> {
        ColorValue::factory("xyz", &[("x", x), ("y", y), ("z", z)])
    }

    /// A CIE XYZ color under an explicit illuminant/observer pair.
    pub fn xyz_with(
        x: f64,
        y: f64,
        z: f64,
        illuminant: Option<Illuminant>,
        observer: Option<Observer>,
    ) -> ColorResult<ColorValue> {
        ColorValue::new(
            space::lookup("xyz")?,
            channel_map(&[("x", x), ("y", y), ("z", z)]),
            illuminant,
            observer,
            ValidationPolicy::Clamp,
        )
    }

    /// A Y′CbCr color with BT.601 full-range 0–255 channels.
    pub fn ycbcr(y: f64, cb: f64, cr: f64) -> ColorResult<ColorValue> {
        ColorValue::factory("ycbcr", &[("y", y), ("cb", cb), ("cr", cr)])
    }

    /// Parses a hex code into an `rgb` color, or `rgba` when the code has an alpha component.
    pub fn from_hex(code: &str) -> ColorResult<ColorValue> {
        let (r, g, b, a) = hex::parse_hex(code)?;
        match a {
            Some(alpha) => ColorValue::rgba(r as f64, g as f64, b as f64, alpha as f64),
            None => ColorValue::rgb(r as f64, g as f64, b as f64),
        }
    }

    /// Looks a named color up in the stacked named-color registries, scoped to a space.
    pub fn from_name(name: &str, space_name: &str) -> ColorResult<ColorValue> {
        let values = named::lookup(name, space_name)?;
        ColorValue::new(
            space::lookup(space_name)?,
            values,
            None,
            None,
            ValidationPolicy::Clamp,
        )
    }

    /// Parses a color from a bare identifier: a hex code (with or without `#`), or else a named
    /// color in the rgb space. When the identifier names both a color and a registered space, the
    /// named color wins and a warning is logged; it is not an error.
    pub fn parse(input: &str) -> ColorResult<ColorValue> {
        if let Ok(color) = ColorValue::from_hex(input) {
            return Ok(color);
        }
        let name = input.to_lowercase();
        named::warn_on_space_conflict(&name, "rgb");
        ColorValue::from_name(&name, "rgb")
    }

    // ------------------------------------------------------------------
    // accessors
    // ------------------------------------------------------------------

    /// The descriptor of the color's space.
    pub fn space(&self) -> &Arc<ColorSpaceDescriptor> {
        &self.space
    }

    /// The space name, e.g. `"rgb"`.
    pub fn space_name(&self) -> &str {
        &self.space.name
    }

    /// The illuminant this color is anchored to. Meaningful only for CIE-supporting spaces, but
    /// always carried so conversions can thread it end to end.
    pub fn illuminant(&self) -> Illuminant {
        self.illuminant
    }

    /// The standard observer this color is anchored to.
    pub fn observer(&self) -> Observer {
        self.observer
    }

    /// The illuminant/observer pair as one unit.
    pub fn cie_params(&self) -> CieParams {
        CieParams {
            illuminant: self.illuminant,
            observer: self.observer,
        }
    }

    /// The validation policy this color was built under.
    pub fn policy(&self) -> ValidationPolicy {
        self.policy
    }

    /// Reads a channel. Under [`ValidationPolicy::Clamp`] the value is clamped into the declared
    /// range; under strict mode the stored value is already valid and is returned as-is. Unknown
    /// channels fail with [`ColorError::InvalidColorValue`].
    pub fn get(&self, channel: &str) -> ColorResult<f64> {
        let raw = self.get_raw(channel)?;
        Ok(match self.policy {
            ValidationPolicy::Clamp => self.space.clamp(channel, raw),
            ValidationPolicy::Strict => raw,
        })
    }

    /// Reads a channel's stored value verbatim, with no clamping.
    pub fn get_raw(&self, channel: &str) -> ColorResult<f64> {
        self.values.get(channel).copied().ok_or_else(|| {
            ColorError::InvalidColorValue(format!(
                "space {:?} has no channel {:?}",
                self.space.name, channel
            ))
        })
    }

    /// The raw channel map, exactly as stored.
    pub fn raw_values(&self) -> &Channels {
        &self.values
    }

    /// A copy of the channel map with every value clamped into range.
    pub fn clamped_values(&self) -> Channels {
        self.space.clamp_all(self.values.clone())
    }

    // ------------------------------------------------------------------
    // updates
    // ------------------------------------------------------------------

    /// Returns a new color with the given channels replaced. Values are stored raw with no
    /// implicit clamping, but unknown channels fail, and strict mode rejects out-of-range values.
    pub fn with(&self, updates: Channels) -> ColorResult<ColorValue> {
        let mut next = self.clone();
        for (channel, value) in updates {
            let checked = check_update(&self.space, &channel, value, self.policy)?;
            next.values.insert(channel, checked);
        }
        Ok(next)
    }

    /// Returns a new color with the given channels reset to their descriptor defaults.
    pub fn without(&self, channels: &[&str]) -> ColorResult<ColorValue> {
        let mut next = self.clone();
        for channel in channels {
            if !self.space.has_channel(channel) {
                return Err(ColorError::InvalidColorValue(format!(
                    "space {:?} has no channel {:?}",
                    self.space.name, channel
                )));
            }
            next.values
                .insert((*channel).to_string(), self.space.defaults[*channel]);
        }
        Ok(next)
    }

    /// Re-validates the stored values and returns a strict-mode copy, failing if any channel is
    /// currently out of range.
    pub fn into_strict(self) -> ColorResult<ColorValue> {
        for channel in &self.space.channels {
            check_update(
                &self.space,
                channel,
                self.values[channel],
                ValidationPolicy::Strict,
            )?;
        }
        Ok(ColorValue {
            policy: ValidationPolicy::Strict,
            ..self
        })
    }

    /// An in-place-mutating handle over the same channel data. The two variants share all
    /// validation and conversion logic.
    pub fn to_mutable(&self) -> MutableColorValue {
        MutableColorValue {
            inner: self.clone(),
        }
    }

    // ------------------------------------------------------------------
    // conversions
    // ------------------------------------------------------------------

    /// Converts into any registered space by name, with the three-tier resolution described in
    /// the [`convert`](crate::convert) module.
    pub fn convert_to(&self, target: &str) -> ColorResult<ColorValue> {
        convert::convert(self, target, None, None)
    }

    /// As [`ColorValue::convert_to`], with an explicit illuminant/observer pair for the result.
    pub fn convert_to_with(
        &self,
        target: &str,
        illuminant: Option<Illuminant>,
        observer: Option<Observer>,
    ) -> ColorResult<ColorValue> {
        convert::convert(self, target, illuminant, observer)
    }

    /// Converts to `rgb`.
    pub fn to_rgb(&self) -> ColorResult<ColorValue> {
        self.convert_to("rgb")
    }

    /// Converts to `rgba`.
    pub fn to_rgba(&self) -> ColorResult<ColorValue> {
        self.convert_to("rgba")
    }

    /// Converts to `hsl`.
    pub fn to_hsl(&self) -> ColorResult<ColorValue> {
        self.convert_to("hsl")
    }

    /// Converts to `hsla`.
    pub fn to_hsla(&self) -> ColorResult<ColorValue> {
        self.convert_to("hsla")
    }

    /// Converts to `hsv`.
    pub fn to_hsv(&self) -> ColorResult<ColorValue> {
        self.convert_to("hsv")
    }

    /// Converts to `cmyk`.
    pub fn to_cmyk(&self) -> ColorResult<ColorValue> {
        self.convert_to("cmyk")
    }

    /// Converts to `lab`, optionally under an explicit illuminant/observer pair.
    pub fn to_lab(
        &self,
        illuminant: Option<Illuminant>,
        observer: Option<Observer>,
    ) -> ColorResult<ColorValue> {
        self.convert_to_with("lab", illuminant, observer)
    }

    /// Converts to `lch`, optionally under an explicit illuminant/observer pair.
    pub fn to_lch(
        &self,
        illuminant: Option<Illuminant>,
        observer: Option<Observer>,
    ) -> ColorResult<ColorValue> {
        self.convert_to_with("lch", illuminant, observer)
    }

    /// Converts to `xyz`, optionally under an explicit illuminant/observer pair.
    pub fn to_xyz(
        &self,
        illuminant: Option<Illuminant>,
        observer: Option<Observer>,
    ) -> ColorResult<ColorValue> {
        self.convert_to_with("xyz", illuminant, observer)
    }

    /// Converts to `ycbcr`.
    pub fn to_ycbcr(&self) -> ColorResult<ColorValue> {
        self.convert_to("ycbcr")
    }

    /// Formats as an uppercase hex code using the clamped integer channel values: `#RRGGBBAA` for
    /// spaces with alpha, `#RRGGBB` otherwise. Non-RGB spaces convert to RGB first.
    pub fn to_hex(&self) -> ColorResult<String> {
        if self.space.has_alpha {
            let rgba = if self.space_name() == "rgba" {
                self.clone()
            } else {
                self.to_rgba()?
            };
            Ok(hex::format_hex(
                rgba.get("r")?.round() as u8,
                rgba.get("g")?.round() as u8,
                rgba.get("b")?.round() as u8,
                Some(rgba.get("a")?.round() as u8),
            ))
        } else {
            let rgb = if self.space_name() == "rgb" {
                self.clone()
            } else {
                self.to_rgb()?
            };
            Ok(hex::format_hex(
                rgb.get("r")?.round() as u8,
                rgb.get("g")?.round() as u8,
                rgb.get("b")?.round() as u8,
                None,
            ))
        }
    }

    /// Re-expresses this color under another illuminant via chromatic adaptation, converting to
    /// XYZ, adapting, and converting back to the original space. Fails with
    /// [`ColorError::UnsupportedColorSpace`] when the space has no CIE support.
    pub fn adapt_illuminant(
        &self,
        target: Illuminant,
        method: Option<AdaptationMethod>,
    ) -> ColorResult<ColorValue> {
        convert::adapt_value(
            self,
            CieParams {
                illuminant: target,
                observer: self.observer,
            },
            method.unwrap_or_default(),
        )
    }

    /// Re-expresses this color under another standard observer, analogously to
    /// [`ColorValue::adapt_illuminant`].
    pub fn adapt_observer(&self, target: Observer) -> ColorResult<ColorValue> {
        convert::adapt_value(
            self,
            CieParams {
                illuminant: self.illuminant,
                observer: target,
            },
            AdaptationMethod::default(),
        )
    }

    /// The structured export form of this color.
    pub fn export(&self) -> ColorExport {
        ColorExport::from_color(self)
    }

    // ------------------------------------------------------------------
    // filter conveniences
    // ------------------------------------------------------------------

    /// The unweighted per-channel average with another color in the same space.
    pub fn blend(&self, other: &ColorValue) -> ColorResult<ColorValue> {
        Blend.apply(self, other)
    }

    /// Weighted interpolation toward `other`: weight 0 returns `self`, weight 1 returns `other`.
    pub fn mix_with(&self, other: &ColorValue, weight: f64) -> ColorResult<ColorValue> {
        Mix::new(weight)?.apply(self, other)
    }

    /// Adjusts brightness by a signed amount on the 0–255 scale, applied to the space's
    /// lightness-like channels as described in the [`filters`](crate::filters) module.
    pub fn brighten(&self, amount: f64) -> ColorResult<ColorValue> {
        Brightness.apply(self, FilterParam::Amount(amount))
    }

    /// The complementary color, by the given method (Perceptual if `None`), converted back to
    /// this color's space with any alpha channel preserved.
    pub fn complement(&self, method: Option<ComplementMethod>) -> ColorResult<ColorValue> {
        UnaryFilter::apply(&Complement::new(method.unwrap_or_default()), self)
    }

    /// The grayscale version of this color, by BT.601 luma, in this color's space.
    pub fn grayscale(&self) -> ColorResult<ColorValue> {
        Grayscale.apply(self)
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        format_color(&self.space, &self.values, f)
    }
}

/// The mutate-in-place counterpart of [`ColorValue`]. Single-owner by construction: it is `Send`
/// but deliberately offers no shared-mutation story, so concurrent use requires external
/// synchronization. Every method delegates to the same validation and conversion functions as the
/// immutable variant.
#[derive(Debug, Clone, PartialEq)]
pub struct MutableColorValue {
    inner: ColorValue,
}

impl MutableColorValue {
    /// Builds a mutable color with the same contract as [`ColorValue::new`].
    pub fn new(
        space: Arc<ColorSpaceDescriptor>,
        initial: Channels,
        illuminant: Option<Illuminant>,
        observer: Option<Observer>,
        policy: ValidationPolicy,
    ) -> ColorResult<MutableColorValue> {
        Ok(MutableColorValue {
            inner: ColorValue::new(space, initial, illuminant, observer, policy)?,
        })
    }

    /// The space name, e.g. `"rgb"`.
    pub fn space_name(&self) -> &str {
        self.inner.space_name()
    }

    /// Reads a channel, clamped under the clamping policy. See [`ColorValue::get`].
    pub fn get(&self, channel: &str) -> ColorResult<f64> {
        self.inner.get(channel)
    }

    /// Reads a channel's stored value verbatim.
    pub fn get_raw(&self, channel: &str) -> ColorResult<f64> {
        self.inner.get_raw(channel)
    }

    /// Sets a single channel in place, storing the raw value, and returns `self` for chaining.
    pub fn set(&mut self, channel: &str, value: f64) -> ColorResult<&mut MutableColorValue> {
        let checked = check_update(&self.inner.space, channel, value, self.inner.policy)?;
        self.inner.values.insert(channel.to_string(), checked);
        Ok(self)
    }

    /// Replaces the given channels in place. See [`ColorValue::with`].
    pub fn with(&mut self, updates: Channels) -> ColorResult<&mut MutableColorValue> {
        // validate everything before touching the map, so a failed update changes nothing
        let mut checked = Vec::with_capacity(updates.len());
        for (channel, value) in updates {
            let v = check_update(&self.inner.space, &channel, value, self.inner.policy)?;
            checked.push((channel, v));
        }
        for (channel, value) in checked {
            self.inner.values.insert(channel, value);
        }
        Ok(self)
    }

    /// Resets the given channels to their descriptor defaults in place.
    pub fn without(&mut self, channels: &[&str]) -> ColorResult<&mut MutableColorValue> {
        for channel in channels {
            if !self.inner.space.has_channel(channel) {
                return Err(ColorError::InvalidColorValue(format!(
                    "space {:?} has no channel {:?}",
                    self.inner.space.name, channel
                )));
            }
        }
        for channel in channels {
            self.inner
                .values
                .insert((*channel).to_string(), self.inner.space.defaults[*channel]);
        }
        Ok(self)
    }

    /// Converts in place to another registered space: the space reference and channel map are
    /// both replaced.
    pub fn convert_to(&mut self, target: &str) -> ColorResult<&mut MutableColorValue> {
        self.inner = convert::convert(&self.inner, target, None, None)?;
        Ok(self)
    }

    /// Formats as an uppercase hex code. See [`ColorValue::to_hex`].
    pub fn to_hex(&self) -> ColorResult<String> {
        self.inner.to_hex()
    }

    /// A snapshot of the current state as an immutable value.
    pub fn freeze(&self) -> ColorValue {
        self.inner.clone()
    }
}

impl fmt::Display for MutableColorValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        format_color(&self.inner.space, &self.inner.values, f)
    }
}
