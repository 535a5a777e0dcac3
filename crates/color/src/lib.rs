//! Color model for `swatch`.
//!
//! A single canonical [`Color`] (8-bit RGB plus a fractional alpha) and the
//! pure conversions that derive every displayed notation from it.  Nothing in
//! this crate caches a derived value: each notation is recomputed on demand.

pub mod brightness;
pub mod cmyk;
pub mod color;
pub mod error;
pub mod hsl;
pub mod notation;

pub use brightness::BrightnessTier;
pub use cmyk::Cmyk;
pub use color::Color;
pub use error::ParseColorError;
pub use hsl::Hsla;
pub use notation::{Notation, NotationSet, RenderOptions, Variant};
