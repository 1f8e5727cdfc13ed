//! Viridian is a library for working with color across color spaces without privileging any one
//! of them. The underlying philosophy is that a color space is data, not a type: every space is
//! described by a [`ColorSpaceDescriptor`](space::ColorSpaceDescriptor) in a registry, and a
//! [`ColorValue`](value::ColorValue) is a channel map bound to one of those descriptors. That
//! makes the ten built-in spaces and any space you register yourself exactly equal citizens: if a
//! space is in the registry and carries RGB conversion legs, it can convert to and from every
//! other registered space, appear in filters, parse from names, and export. There are no
//! per-space types and no combinatorial conversion matrix to maintain.
//!
//! The library must be bootstrapped before name-based operations work: call [`init`] once at
//! startup (it is idempotent, so once per test is fine too) to install the built-in color spaces,
//! filters, and CSS named colors.
//!
//! ```
//! use viridian::prelude::*;
//!
//! viridian::init();
//! let steel = ColorValue::hsl(210.0, 50.0, 40.0).unwrap();
//! let rgb = steel.to_rgb().unwrap();
//! assert_eq!(rgb.to_string(), "rgb(51, 102, 153)");
//! assert_eq!(rgb.to_hex().unwrap(), "#336699");
//! ```

#![doc(html_root_url = "https://docs.rs/viridian/0.1.0")]
// we don't mess around with documentation
#![deny(missing_docs)]
// Clippy doesn't like long decimals, but adding separators in decimals isn't any more readable
// compare -0.96924 with -0.96_924
#![allow(clippy::unreadable_literal)]

extern crate csv;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate maplit;
extern crate nalgebra as na;
extern crate regex;
extern crate serde;
#[macro_use]
extern crate serde_derive;
extern crate thiserror;
extern crate tracing;

pub mod adapt;
mod consts;
pub mod convert;
pub mod error;
pub mod export;
pub mod filter;
pub mod filters;
pub mod hex;
pub mod illuminants;
pub mod named;
pub mod prelude;
pub mod space;
pub mod spaces;
pub mod value;

/// Installs the built-in color spaces, filters, and named colors in the process-wide registries.
/// Idempotent; every program (and every test) should call it before using anything by name.
pub fn init() {
    space::register_built_in();
    filter::register_built_in();
    named::register_built_in();
}
