//! # Swatch SVG
//!
//! This crate renders **groups of color swatches as SVG documents**. It knows
//! nothing about color science. Instead, a color only needs to implement the
//! narrow [`Swatch`] trait, which provides the color's hexadecimal code and
//! derives lighter and darker tones for shading.
//!
//! Rendering takes two steps:
//!
//!   * Pick a layout implementing [`Render`]: [`ColorStack`] draws each group
//!     as a row of overlapping circles, [`CircleGrid`], [`SquareGrid`], and
//!     [`BallGrid`] flatten all groups into a near-square grid, and
//!     [`GradientBar`] blends each group into one horizontal bar. Geometry
//!     comes from [`opt::Options`].
//!   * Call [`Render::to_document`] for an SVG [`doc::Document`], which
//!     builds its markup with the [`svg`] crate. The document implements
//!     [`Display`](std::fmt::Display) and writes itself to any
//!     [`Write`](std::io::Write). Alternatively, call [`Render::render`] with
//!     your own [`doc::Canvas`].
//!
//!
//! # Example
//!
//! ```
//! # use swatchsvg::{ColorStack, Render, Swatch};
//! # use swatchsvg::opt::Options;
//! struct Hex(&'static str);
//!
//! impl Swatch for Hex {
//!     fn hex_code(&self) -> &str {
//!         self.0
//!     }
//!
//!     fn scale_hsv(&self, _: [f64; 3]) -> Self {
//!         Hex(self.0)
//!     }
//! }
//!
//! let groups = vec![
//!     vec![Hex("ff0000"), Hex("ff8800")],
//!     vec![Hex("0000ff")],
//! ];
//!
//! let stack = ColorStack::new(&Options::with_size(32.0, 16.0));
//! let svg = stack.to_document(&groups).to_string();
//! assert!(svg.starts_with("<svg"));
//! assert!(svg.contains(r#"viewBox="0 0 128 176""#));
//! ```
//!
//! Rendering never fails. Only writing a document to an I/O stream may.

pub mod doc;
pub mod opt;
mod render;

pub use render::{BallGrid, CircleGrid, ColorStack, GradientBar, Render, SquareGrid, Swatch};
