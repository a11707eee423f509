use super::{CollectorChain, HsvCollector};
use crate::core::Component;
use crate::group::Buckets;
use crate::{Float, Range};

/// The names of the basic twelve-hue wheel, starting with red.
pub const BASIC_HUE_NAMES: [&str; 12] = [
    "01 red",
    "02 orange",
    "03 yellow",
    "04 yellow-green",
    "05 green",
    "06 blue-green",
    "07 cyan",
    "08 blue",
    "09 indigo",
    "10 violet",
    "11 purple",
    "12 pink",
];

/// The names of Warren Mars' 24-hue wheel, starting with red.
pub const MARTIAN_HUE_NAMES: [&str; 24] = [
    "01 red",
    "02 orange",
    "03 turmeric",
    "04 yellow cheese",
    "05 yellow",
    "06 green grape",
    "07 chartreuse",
    "08 green pea",
    "09 green",
    "10 clover",
    "11 emerald",
    "12 malachite",
    "13 cyan",
    "14 turquoise",
    "15 azure",
    "16 royal blue",
    "17 blue",
    "18 dioxazine",
    "19 violet",
    "20 aniline",
    "21 magenta",
    "22 pink",
    "23 prickly pear",
    "24 red plum",
];

/// The name of the bucket for dark grays and black.
pub const DARK_GRAY: &str = "00 dark gray";

/// The name of the bucket for light grays and white.
pub const LIGHT_GRAY: &str = "00 light gray";

// Saturation below this bound counts as achromatic.
const GRAY_SATURATION: Float = 0.15;

/// Slice the hue circle into equal, consecutive, half-open segments, one per
/// name.
///
/// Slice `i` of `n` accepts hues in `[i/n, (i+1)/n)`. Together, the slices
/// cover all hues, since a color's hue always is less than 1. Since names are unique, a repeated name replaces the slice of its first
/// occurrence.
pub fn hue_slices<S: AsRef<str>>(names: &[S]) -> Buckets {
    let count = names.len() as Float;
    let mut buckets = Buckets::new();

    for (index, name) in names.iter().enumerate() {
        let min = index as Float / count;
        let max = (index + 1) as Float / count;
        let range = Range::new_unchecked(min, max, true, false);
        buckets.push(name.as_ref(), HsvCollector::new(Component::Hue, range));
    }

    buckets
}

/// Create the basic twelve-hue wheel.
///
/// ```
/// # use swatchery::{Color, collect::basic_hue_wheel, group::group_hex_codes};
/// # use swatchery::error::InvalidColorError;
/// let grouping = group_hex_codes(["ff8000", "00ffff"], &basic_hue_wheel())?;
/// assert_eq!(grouping.get("02 orange").map(<[Color]>::len), Some(1));
/// assert_eq!(grouping.get("07 cyan").map(<[Color]>::len), Some(1));
/// # Ok::<(), InvalidColorError>(())
/// ```
pub fn basic_hue_wheel() -> Buckets {
    hue_slices(&BASIC_HUE_NAMES)
}

/// Create Warren Mars' 24-hue wheel.
pub fn martian_hue_wheel() -> Buckets {
    hue_slices(&MARTIAN_HUE_NAMES)
}

fn gray_chain(value: Range) -> CollectorChain {
    CollectorChain::new()
        .with(HsvCollector::new(
            Component::Saturation,
            Range::new_unchecked(0.0, GRAY_SATURATION, true, false),
        ))
        .with(HsvCollector::new(Component::Value, value))
}

/// Create the buckets for achromatic colors.
///
/// Both buckets accept saturation in `[0, 0.15)`. [`DARK_GRAY`] further
/// requires value in `[0, 0.5)` and [`LIGHT_GRAY`] value in `[0.5, 1]`.
pub fn gray_buckets() -> Buckets {
    Buckets::new()
        .with(DARK_GRAY, gray_chain(Range::new_unchecked(0.0, 0.5, true, false)))
        .with(LIGHT_GRAY, gray_chain(Range::new_unchecked(0.5, 1.0, true, true)))
}

/// Place the gray buckets ahead of the wheel.
///
/// Since grays have hue 0, they would otherwise end up in the first hue
/// slice.
pub fn grays_then(wheel: Buckets) -> Buckets {
    let mut buckets = gray_buckets();
    buckets.extend(wheel);
    buckets
}

// ====================================================================================================================
