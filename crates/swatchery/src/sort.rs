//! Sort keys for ordering the colors within a bucket.
//!
//! The four key functions map a color to a comparable value. Floating point
//! keys are compared with [`Float::total_cmp`] after folding negative zero
//! into positive zero, so that sorting is total and deterministic. In
//! practice, only not-a-number could upset the order, and valid colors have
//! none.
//!
//! [`SortKey`] selects one of the key functions at run time and [`Order`]
//! selects the direction. [`sort_colors`] combines the two and is stable, so
//! colors with equal keys retain their relative order.

use std::cmp::Ordering;
use std::num::NonZeroU32;

use crate::{Color, Float};

/// The default number of hue and value bands for the step key.
pub const DEFAULT_REPETITIONS: NonZeroU32 = NonZeroU32::MIN.saturating_add(7);

/// Get the saturation.
///
/// Sorting by this key in ascending order runs from grays to vivid colors.
pub fn saturation_key(color: &Color) -> Float {
    color.saturation()
}

/// Get the value, i.e., brightness.
pub fn value_key(color: &Color) -> Float {
    color.value()
}

/// Get relative luminance, saturation, and value.
///
/// Luminance orders colors by perceived brightness. Saturation and value only
/// break ties.
pub fn luminance_key(color: &Color) -> (Float, Float, Float) {
    (color.luminance(), color.saturation(), color.value())
}

/// Get the hue band, relative luminance, and value band.
///
/// This key quantizes hue and value into `repetitions` bands each. Sorting by
/// hue band first and luminance second keeps similar hues together while
/// smoothing the transitions within each band. Fewer repetitions make for
/// coarser bands.
///
/// ```
/// # use std::num::NonZeroU32;
/// # use swatchery::{Color, sort::hue_luminance_step_key};
/// # use swatchery::error::InvalidColorError;
/// let color = Color::from_hsv(0.3, 1.0, 0.6)?;
/// let four = NonZeroU32::new(4).unwrap_or(NonZeroU32::MIN);
/// let (hue, _, value) = hue_luminance_step_key(&color, four);
/// assert_eq!((hue, value), (1, 2));
/// # Ok::<(), InvalidColorError>(())
/// ```
pub fn hue_luminance_step_key(color: &Color, repetitions: NonZeroU32) -> (u32, Float, u32) {
    let bands = repetitions.get() as Float;
    let hue = (color.hue() * bands).floor() as u32;
    let value = (color.value() * bands).floor() as u32;
    (hue, color.luminance(), value)
}

#[inline]
fn fold_zero(value: Float) -> Float {
    // Both zeros compare equal, so this replaces -0.0 with 0.0.
    if value == 0.0 {
        0.0
    } else {
        value
    }
}

#[inline]
fn compare_floats(a: Float, b: Float) -> Ordering {
    fold_zero(a).total_cmp(&fold_zero(b))
}

// ====================================================================================================================

/// A choice of sort key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SortKey {
    /// Sort by [`saturation_key`].
    Saturation,
    /// Sort by [`value_key`].
    Value,
    /// Sort by [`luminance_key`].
    Luminance,
    /// Sort by [`hue_luminance_step_key`] with the given repetitions.
    HueLuminanceStep(NonZeroU32),
}

impl SortKey {
    /// The step key with the default eight repetitions.
    pub const STEP: SortKey = SortKey::HueLuminanceStep(DEFAULT_REPETITIONS);

    /// Compare the two colors by this key.
    pub fn compare(&self, a: &Color, b: &Color) -> Ordering {
        match *self {
            Self::Saturation => compare_floats(saturation_key(a), saturation_key(b)),
            Self::Value => compare_floats(value_key(a), value_key(b)),
            Self::Luminance => {
                let (l1, s1, v1) = luminance_key(a);
                let (l2, s2, v2) = luminance_key(b);
                compare_floats(l1, l2)
                    .then_with(|| compare_floats(s1, s2))
                    .then_with(|| compare_floats(v1, v2))
            }
            Self::HueLuminanceStep(repetitions) => {
                let (h1, l1, v1) = hue_luminance_step_key(a, repetitions);
                let (h2, l2, v2) = hue_luminance_step_key(b, repetitions);
                h1.cmp(&h2)
                    .then_with(|| compare_floats(l1, l2))
                    .then_with(|| v1.cmp(&v2))
            }
        }
    }
}

impl Default for SortKey {
    fn default() -> Self {
        Self::STEP
    }
}

/// A choice of sort direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Order {
    #[default]
    Ascending,
    Descending,
}

/// Sort the colors by the key in the given order.
///
/// The sort is stable in both directions.
pub fn sort_colors(colors: &mut [Color], key: SortKey, order: Order) {
    match order {
        Order::Ascending => colors.sort_by(|a, b| key.compare(a, b)),
        Order::Descending => colors.sort_by(|a, b| key.compare(b, a)),
    }
}

// ====================================================================================================================
