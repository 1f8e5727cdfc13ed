//! The built-in filters. Each lives in its own module and implements one of the arity traits
//! from [`filter`](crate::filter); the registry entries for all of them are installed by
//! [`filter::register_built_in`](crate::filter::register_built_in). Binary filters require both
//! inputs in the same space and never convert behind the caller's back; unary filters that need a
//! working space (complement, grayscale) convert there and back, preserving the input's space and
//! alpha.

use crate::error::{ColorError, ColorResult};
use crate::space::Channels;
use crate::value::ColorValue;

pub mod blend;
pub mod brightness;
pub mod complement;
pub mod grayscale;
pub mod mix;

// Binary filters operate channel-by-channel, which is only meaningful when both inputs share a
// space.
pub(crate) fn require_same_space(first: &ColorValue, second: &ColorValue) -> ColorResult<()> {
    if first.space_name() == second.space_name() {
        Ok(())
    } else {
        Err(ColorError::InvalidArgument(format!(
            "binary filters need both colors in the same space, got {:?} and {:?}",
            first.space_name(),
            second.space_name()
        )))
    }
}

// A color in the same space, params, and policy as `like`, from an already-in-range channel map.
pub(crate) fn rebuild(like: &ColorValue, values: Channels) -> ColorValue {
    ColorValue::from_parts(
        like.space().clone(),
        like.space().clamp_all(values),
        like.cie_params(),
        like.policy(),
    )
}

// Converts a filter's working-space result back to the input's space, restoring the input's
// alpha, which round trips through alpha-less working spaces would otherwise reset.
pub(crate) fn restore(original: &ColorValue, worked: &ColorValue) -> ColorResult<ColorValue> {
    let mut back = worked.convert_to_with(
        original.space_name(),
        Some(original.illuminant()),
        Some(original.observer()),
    )?;
    if let Some(alpha) = original.space().alpha_channel.clone() {
        let value = original.get_raw(&alpha)?;
        back = back.with(hashmap! { alpha => value })?;
    }
    Ok(back)
}
