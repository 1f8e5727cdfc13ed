//! The blend filter: the unweighted per-channel average of two colors in the same space. Alpha
//! averages like any other channel. Equivalent to [`Mix`](crate::filters::mix::Mix) at weight
//! 0.5, but kept as its own named filter because it is the common case.

use crate::error::ColorResult;
use crate::filter::BinaryFilter;
use crate::filters::{rebuild, require_same_space};
use crate::space::Channels;
use crate::value::ColorValue;

/// The per-channel averaging filter.
#[derive(Debug, Default, Copy, Clone)]
pub struct Blend;

impl BinaryFilter for Blend {
    fn name(&self) -> &str {
        "blend"
    }

    fn apply(&self, first: &ColorValue, second: &ColorValue) -> ColorResult<ColorValue> {
        require_same_space(first, second)?;
        let a = first.clamped_values();
        let b = second.clamped_values();
        let averaged: Channels = a
            .into_iter()
            .map(|(channel, value)| {
                let other = b[&channel];
                (channel, (value + other) / 2.0)
            })
            .collect();
        Ok(rebuild(first, averaged))
    }
}
