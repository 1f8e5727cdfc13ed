//! This module simply brings the most common Viridian functionality under a single namespace, to
//! prevent excessive imports. As of now, this prelude includes the two color value types and
//! their validation policy, the error type, the CIE illuminant machinery, the filter traits, and
//! the export form, and nothing else. Of particular note is that the per-space conversion
//! functions in the [`spaces`](crate::spaces) module are not included: they are reachable through
//! [`ColorValue`] conversions, which is how they are meant to be used.

pub use crate::adapt::AdaptationMethod;
pub use crate::error::{ColorError, ColorResult};
pub use crate::export::ColorExport;
pub use crate::filter::{BinaryFilter, FilterParam, ParameterizedFilter, UnaryFilter};
pub use crate::filters::complement::ComplementMethod;
pub use crate::illuminants::{CieParams, Illuminant, Observer};
pub use crate::space::{Channels, ColorSpaceDescriptor};
pub use crate::value::{ColorValue, MutableColorValue, ValidationPolicy};
