//! The error taxonomy for every fallible operation in the crate. Each variant corresponds to one
//! user-visible failure mode: registry misses, impossible conversions, strict-mode validation
//! failures, and so on. None of these are ever silently swallowed, with a single deliberate
//! exception: the conversion engine catches failures of individual resolution strategies so it can
//! fall through to the next one before finally reporting [`ColorError::ConversionNotSupported`].

use thiserror::Error;

/// Any error that can arise while constructing, mutating, converting, or filtering colors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorError {
    /// A channel value was rejected: the channel doesn't exist in the color's space, the value
    /// isn't a usable number (NaN or infinite), or strict validation found it out of range.
    #[error("invalid color value: {0}")]
    InvalidColorValue(String),

    /// A color space name was looked up in the registry and not found. Remember that the built-in
    /// spaces only exist after `register_built_in` has run.
    #[error("color space not found: {0}")]
    ColorSpaceNotFound(String),

    /// None of the three resolution strategies (direct, reverse, RGB hub) produced a path between
    /// the two spaces.
    #[error("conversion not supported: {from} -> {to}")]
    ConversionNotSupported {
        /// The source color space.
        from: String,
        /// The target color space.
        to: String,
    },

    /// A CIE operation (illuminant or observer adaptation) was requested on a space that does not
    /// declare CIE support.
    #[error("color space does not support CIE parameters: {0}")]
    UnsupportedColorSpace(String),

    /// No named-color registry holds the requested name/space pair.
    #[error("named color not found: {name} in space {space}")]
    NamedColorNotFound {
        /// The color name that was looked up.
        name: String,
        /// The space the lookup was scoped to.
        space: String,
    },

    /// A filter name was looked up in the filter registry and not found.
    #[error("filter not found: {0}")]
    FilterNotFound(String),

    /// A filter was applied with operands or parameters it cannot work with: mismatched spaces for
    /// a binary filter, a space a filter has no rule for, or a parameter of the wrong kind.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A hex color code could not be parsed.
    #[error("invalid hex code: {0}")]
    InvalidHexCode(String),
}

/// Convenience alias used by every fallible function in the crate.
pub type ColorResult<T> = Result<T, ColorError>;
