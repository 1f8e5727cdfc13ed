//! The conversion engine. Given a source color and a target space name, a conversion path is
//! resolved in three tiers, each consulted only when the one before it fails:
//!
//! 1. **direct**: the source descriptor carries a converter keyed by the target name;
//! 2. **reverse**: the target descriptor carries a `from_converters` entry keyed by the source
//!    name;
//! 3. **hub**: the source's `"rgb"` leg composed with the target's from-`"rgb"` leg. Every
//!    built-in space carries both legs, so any two registered spaces interoperate even when
//!    neither knows about the other.
//!
//! The engine, not the conversion functions, owns three cross-cutting concerns: pre-adapting a
//! CIE-anchored source to a requested illuminant/observer pair before the pipeline runs, carrying
//! alpha across spaces whose alpha ranges differ (rescaled proportionally, e.g. 128 of 255
//! becomes about 0.5 of 1), and clamping, which happens once at the very end. Intermediate
//! values are allowed to leave their nominal ranges, which is what keeps round trips from
//! drifting.

use crate::adapt::{self, AdaptationMethod};
use crate::error::{ColorError, ColorResult};
use crate::illuminants::{CieParams, Illuminant, Observer};
use crate::space::{self, Channels, ColorSpaceDescriptor};
use crate::spaces::chan;
use crate::value::ColorValue;

/// Converts a color into the named target space, optionally under an explicit
/// illuminant/observer pair. When no pair is given, the source's own parameters carry over.
/// Fails with [`ColorError::ColorSpaceNotFound`] for an unregistered target and
/// [`ColorError::ConversionNotSupported`] when no tier yields a path.
pub fn convert(
    color: &ColorValue,
    target: &str,
    illuminant: Option<Illuminant>,
    observer: Option<Observer>,
) -> ColorResult<ColorValue> {
    let source = color.space().clone();
    let target_space = space::lookup(target)?;
    let source_cie = color.cie_params();
    let cie = CieParams {
        illuminant: illuminant.unwrap_or(source_cie.illuminant),
        observer: observer.unwrap_or(source_cie.observer),
    };

    // A CIE-anchored source whose parameters differ from the requested pair is re-expressed
    // under the requested pair first, so the whole pipeline below runs relative to one white.
    let values = if source.supports_illuminant && source_cie != cie {
        adapt_channels(
            &source,
            color.raw_values(),
            &source_cie,
            &cie,
            AdaptationMethod::default(),
        )?
    } else {
        color.raw_values().clone()
    };

    if source.name == target_space.name {
        let clamped = target_space.clamp_all(values);
        return Ok(ColorValue::from_parts(
            target_space,
            clamped,
            cie,
            color.policy(),
        ));
    }

    let mut converted = run_pipeline(&source, &target_space, &values, &cie)?;

    // Alpha crosses space boundaries by proportional position within each range, since the
    // built-in alpha ranges disagree (0-255 for rgba, 0-1 for hsla).
    if let (Some(from_alpha), Some(to_alpha)) =
        (source.alpha_channel.as_ref(), target_space.alpha_channel.as_ref())
    {
        let (from_min, from_max) = source
            .range(from_alpha)
            .expect("alpha channel has a range");
        let (to_min, to_max) = target_space
            .range(to_alpha)
            .expect("alpha channel has a range");
        let position = (source.clamp(from_alpha, chan(&values, from_alpha)) - from_min)
            / (from_max - from_min);
        converted.insert(to_alpha.clone(), to_min + position * (to_max - to_min));
    }

    let clamped = target_space.clamp_all(converted);
    Ok(ColorValue::from_parts(
        target_space,
        clamped,
        cie,
        color.policy(),
    ))
}

// The three-tier path resolution, on bare channel maps.
fn run_pipeline(
    source: &ColorSpaceDescriptor,
    target: &ColorSpaceDescriptor,
    values: &Channels,
    cie: &CieParams,
) -> ColorResult<Channels> {
    if let Some(direct) = source.converter_to(&target.name) {
        return Ok(direct(values, cie));
    }
    if let Some(reverse) = target.converter_from(&source.name) {
        return Ok(reverse(values, cie));
    }
    let to_hub = source.converter_to("rgb");
    let from_hub = target.converter_from("rgb");
    match (to_hub, from_hub) {
        (Some(to_hub), Some(from_hub)) => Ok(from_hub(&to_hub(values, cie), cie)),
        _ => Err(ColorError::ConversionNotSupported {
            from: source.name.clone(),
            to: target.name.clone(),
        }),
    }
}

/// Re-expresses a CIE-anchored color under another illuminant/observer pair: out to XYZ under
/// the source pair, chromatic adaptation in cone space, and back to the source's own space under
/// the target pair. The space does not change; only the parameters and the channel values do.
/// Fails with [`ColorError::UnsupportedColorSpace`] for spaces with no CIE anchoring.
pub fn adapt_value(
    color: &ColorValue,
    target_cie: CieParams,
    method: AdaptationMethod,
) -> ColorResult<ColorValue> {
    let space = color.space().clone();
    if !space.supports_illuminant {
        return Err(ColorError::UnsupportedColorSpace(space.name.clone()));
    }
    let source_cie = color.cie_params();
    if source_cie == target_cie {
        return Ok(color.clone());
    }
    let adapted = adapt_channels(&space, color.raw_values(), &source_cie, &target_cie, method)?;
    let clamped = space.clamp_all(adapted);
    Ok(ColorValue::from_parts(
        space,
        clamped,
        target_cie,
        color.policy(),
    ))
}

// Adaptation on a bare channel map. The xyz space adapts its triple directly; lab and lch route
// through their direct xyz legs.
fn adapt_channels(
    space: &ColorSpaceDescriptor,
    values: &Channels,
    from: &CieParams,
    to: &CieParams,
    method: AdaptationMethod,
) -> ColorResult<Channels> {
    let xyz = if space.name == "xyz" {
        values.clone()
    } else {
        let to_xyz = space.converter_to("xyz").ok_or_else(|| {
            ColorError::UnsupportedColorSpace(space.name.clone())
        })?;
        to_xyz(values, from)
    };
    let triple = adapt::adapt_xyz(
        [chan(&xyz, "x"), chan(&xyz, "y"), chan(&xyz, "z")],
        from,
        to,
        method,
    );
    let adapted: Channels = hashmap! {
        "x".to_string() => triple[0],
        "y".to_string() => triple[1],
        "z".to_string() => triple[2],
    };
    if space.name == "xyz" {
        Ok(adapted)
    } else {
        let from_xyz = space.converter_from("xyz").ok_or_else(|| {
            ColorError::UnsupportedColorSpace(space.name.clone())
        })?;
        Ok(from_xyz(&adapted, to))
    }
}
