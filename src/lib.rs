//! Typed image-transformation parameters serialized onto CDN image URLs.
//!
//! Pure string computation — no pixel operations, no network I/O, `no_std`
//! compatible (requires `alloc`).
//!
//! A [`Params`] bundle describes the transformations to request from a
//! remote image-processing service; [`translate`] serializes the bundle
//! into the service's query-string dialect and attaches it to an existing
//! image URL, merging with (and never corrupting) query parameters already
//! present.
//!
//! # Example
//!
//! ```
//! use imgquery::{Dimension, Params, Region, translate};
//!
//! let params = Params::new()
//!     .width(200)
//!     .crop(Region::Coord {
//!         width: Dimension::Pixels(1600),
//!         height: Dimension::Pixels(900),
//!         x: Dimension::Pixels(100),
//!         y: Dimension::Percent(50),
//!     });
//!
//! assert_eq!(
//!     translate("https://example.com/image.jpg", &params),
//!     "https://example.com/image.jpg?crop=1600,900,x100,y50p&width=200",
//! );
//! ```
//!
//! # Modules
//!
//! - [`params`] — the parameter bundle and option value types
//! - [`url`] — URL composition: gating, query merging, re-emission
//! - [`html`] — `<img>` tag rendering (feature `html`)
//!
//! # Resilience
//!
//! Translation never fails. Structurally unusable option values (a quality
//! list that is not exactly two values, a smart region used as a canvas)
//! contribute nothing instead of erroring, and raw passthrough strings are
//! forwarded without validation. Callers wanting strict validation do it
//! before calling in.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod color;
pub mod dimension;
#[cfg(feature = "html")]
pub mod html;
pub mod orientation;
pub mod params;
pub mod region;
mod serialize;
pub mod url;

// Re-exports: the full translation surface
pub use color::Color;
pub use dimension::Dimension;
pub use orientation::Orientation;
pub use params::{Fit, Format, Params, Quality, ResizeFilter, Sharpen};
pub use region::{Edges, Region};
pub use url::{Options, translate, translate_with};
