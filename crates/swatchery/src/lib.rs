//! Swatchery classifies colors into named buckets and orders each bucket.
//!
//! A [`Color`] carries a normalized six-digit hex code alongside its RGB and
//! HSV components, all in the unit range. [`Range`]s over single components
//! make for the simplest [`collect::Collector`]s, which combine into chains
//! and into ordered [`group::Buckets`]. Grouping then places each distinct
//! color into the first bucket that accepts it, and the [`sort`] module
//! orders the colors within each bucket.
//!
//! ```
//! # use swatchery::collect::{basic_hue_wheel, grays_then, DARK_GRAY};
//! # use swatchery::group::group_hex_codes;
//! # use swatchery::sort::{Order, SortKey};
//! # use swatchery::error::InvalidColorError;
//! let buckets = grays_then(basic_hue_wheel());
//! let grouping = group_hex_codes(["#000", "#333", "f00", "00ffff"], &buckets)?;
//! assert_eq!(grouping.get(DARK_GRAY).map(<[_]>::len), Some(2));
//!
//! let groups = grouping.into_sorted_groups(SortKey::Value, Order::Descending);
//! assert_eq!(groups.len(), 3);
//! assert_eq!(groups[0][0].hex(), "333333");
//! # Ok::<(), InvalidColorError>(())
//! ```
//!
//! With the default `svg` feature, colors are also
//! [`swatchsvg::Swatch`](https://docs.rs/swatchsvg)es and the sorted groups
//! can be rendered as SVG documents.
#![cfg_attr(
    feature = "pyffi",
    doc = "Items that are only available in Python are decorated with <i
    class=python-only>Python only!</i>."
)]

/// The floating point type in use.
#[cfg(feature = "f64")]
pub type Float = f64;
/// The floating point type in use.
#[cfg(not(feature = "f64"))]
pub type Float = f32;

pub mod collect;
mod core;
pub mod error;
pub mod group;
mod object;
mod range;
pub mod sort;

pub use core::{normalize_hex, relative_luminance, Component};
pub use object::{Color, ColorBuilder};
pub use range::Range;

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

/// Normalize the hex code. <i class=python-only>Python only!</i>
#[cfg(feature = "pyffi")]
#[pyfunction]
#[pyo3(name = "normalize_hex")]
pub fn py_normalize_hex(code: &str) -> PyResult<String> {
    Ok(normalize_hex(code)?)
}

#[doc(hidden)]
#[cfg(feature = "pyffi")]
#[pymodule]
pub fn color(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(py_normalize_hex, m)?)?;

    m.add_class::<Color>()?;
    m.add_class::<Component>()?;
    m.add_class::<Range>()?;
    m.add_class::<collect::HsvCollector>()?;
    Ok(())
}
