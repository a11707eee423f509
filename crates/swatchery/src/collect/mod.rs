//! Collectors, i.e., predicates over colors, and preset bucket layouts.
//!
//! A [`Collector`] decides whether a color belongs into a bucket. The
//! [`HsvCollector`] tests one HSV component against a [`Range`](crate::Range)
//! and the [`CollectorChain`] requires all its members to agree. The presets
//! slice the hue circle into equal segments and separate grays from more
//! colorful colors.

mod collector;
mod preset;

pub use collector::{from_fn, Collector, CollectorChain, FromFn, HsvCollector};
pub use preset::{
    basic_hue_wheel, gray_buckets, grays_then, hue_slices, martian_hue_wheel, BASIC_HUE_NAMES,
    DARK_GRAY, LIGHT_GRAY, MARTIAN_HUE_NAMES,
};
