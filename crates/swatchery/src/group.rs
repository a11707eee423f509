//! Grouping colors into named buckets.
//!
//! [`Buckets`] is an ordered list of named [`Collector`]s. [`group_colors`]
//! first removes duplicate colors and then assigns each remaining color to
//! the first bucket, in list order, whose collector accepts it. Hence bucket
//! order matters whenever collectors overlap. For example, placing
//! achromatic carve-outs ahead of a hue wheel, as
//! [`grays_then`](crate::collect::grays_then) does, keeps grays out of the
//! red bucket, since grays have hue zero.
//!
//! The resulting [`Grouping`] has one entry per bucket, in bucket order and
//! including empty buckets. Colors no bucket accepts are not an error; they
//! are reported separately through [`Grouping::unmatched`].
//!
//! ```
//! # use swatchery::{Color, collect::HsvCollector, group::{group_hex_codes, Buckets}};
//! # use swatchery::error::Error;
//! let buckets = Buckets::new()
//!     .with("cool", HsvCollector::hue(0.25, 0.75)?)
//!     .with("dark", HsvCollector::value(0.0, 0.5)?);
//!
//! let grouping = group_hex_codes(["00ffff", "#003333", "003333", "ff0000"], &buckets)?;
//! assert_eq!(grouping.get("cool").map(<[Color]>::len), Some(2));
//! assert_eq!(grouping.get("dark").map(<[Color]>::len), Some(0));
//! assert_eq!(grouping.unmatched().len(), 1);
//! # Ok::<(), Error>(())
//! ```

use std::collections::HashSet;

use tracing::{debug, trace};

use crate::collect::Collector;
use crate::error::InvalidColorError;
use crate::sort::{sort_colors, Order, SortKey};
use crate::Color;

/// A collector that can be shared between threads.
pub type BoxedCollector = Box<dyn Collector + Send + Sync>;

/// An ordered list of named collectors.
///
/// Names are unique. Adding a collector under an existing name replaces the
/// previous collector while keeping its position.
#[derive(Default)]
pub struct Buckets {
    entries: Vec<(String, BoxedCollector)>,
}

impl Buckets {
    /// Create a new, empty list of buckets.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a named bucket.
    pub fn push<C: Collector + Send + Sync + 'static>(&mut self, name: &str, collector: C) {
        self.push_boxed(name, Box::new(collector));
    }

    /// Add a named bucket with an already boxed collector.
    pub fn push_boxed(&mut self, name: &str, collector: BoxedCollector) {
        if let Some(entry) = self.entries.iter_mut().find(|(n, _)| n == name) {
            entry.1 = collector;
            return;
        }

        self.entries.push((name.to_owned(), collector));
    }

    /// Add a named bucket.
    #[must_use = "the buckets are consumed and returned"]
    pub fn with<C: Collector + Send + Sync + 'static>(mut self, name: &str, collector: C) -> Self {
        self.push(name, collector);
        self
    }

    /// Append all buckets from the other list, in order.
    pub fn extend(&mut self, other: Buckets) {
        for (name, collector) in other.entries {
            self.push_boxed(&name, collector);
        }
    }

    /// Get the number of buckets.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Determine whether there are no buckets.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the bucket names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Find the index of the first bucket accepting the color.
    pub fn classify(&self, color: &Color) -> Option<usize> {
        self.entries
            .iter()
            .position(|(_, collector)| collector.contains(color))
    }
}

impl std::fmt::Debug for Buckets {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

// ====================================================================================================================

/// The result of grouping colors.
///
/// A grouping has one entry per bucket, in bucket order, each with the
/// bucket's colors in first-occurrence order. No color appears twice, neither
/// within nor across buckets and unmatched colors.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Grouping {
    groups: Vec<(String, Vec<Color>)>,
    unmatched: Vec<Color>,
}

impl Grouping {
    /// Get the number of groups, which equals the number of buckets.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Determine whether there are no groups.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Get the colors of the named group.
    pub fn get(&self, name: &str) -> Option<&[Color]> {
        self.groups
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, colors)| colors.as_slice())
    }

    /// Iterate over the names and colors of all groups, in bucket order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Color])> {
        self.groups
            .iter()
            .map(|(name, colors)| (name.as_str(), colors.as_slice()))
    }

    /// Get the colors no bucket accepted, in first-occurrence order.
    pub fn unmatched(&self) -> &[Color] {
        &self.unmatched
    }

    /// Count the colors in all groups.
    pub fn matched_count(&self) -> usize {
        self.groups.iter().map(|(_, colors)| colors.len()).sum()
    }

    /// Sort the colors of each group.
    pub fn sort_by(&mut self, key: SortKey, order: Order) {
        for (_, colors) in &mut self.groups {
            sort_colors(colors, key, order);
        }
    }

    /// Convert into the groups ready for rendering.
    ///
    /// This method drops empty groups, orders the remaining groups by name,
    /// and sorts the colors of each group. It drops the unmatched colors, too.
    pub fn into_sorted_groups(self, key: SortKey, order: Order) -> Vec<Vec<Color>> {
        let mut groups: Vec<_> = self
            .groups
            .into_iter()
            .filter(|(_, colors)| !colors.is_empty())
            .collect();
        groups.sort_by(|(n1, _), (n2, _)| n1.cmp(n2));

        groups
            .into_iter()
            .map(|(_, mut colors)| {
                sort_colors(&mut colors, key, order);
                colors
            })
            .collect()
    }
}

// ====================================================================================================================

/// Group the colors into the buckets.
///
/// This function removes duplicates, keeping only the first occurrence of
/// each color, and then adds each color to the first bucket that accepts it.
/// Each collector is invoked at most once per distinct color.
pub fn group_colors<I>(colors: I, buckets: &Buckets) -> Grouping
where
    I: IntoIterator<Item = Color>,
{
    let mut groups: Vec<(String, Vec<Color>)> = buckets
        .names()
        .map(|name| (name.to_owned(), Vec::new()))
        .collect();
    let mut unmatched = Vec::new();
    let mut seen = HashSet::new();

    for color in colors {
        if !seen.insert(color.hex().to_owned()) {
            continue;
        }

        let Some(index) = buckets.classify(&color) else {
            trace!(%color, "no bucket accepts color");
            unmatched.push(color);
            continue;
        };
        groups[index].1.push(color);
    }

    let grouping = Grouping { groups, unmatched };
    debug!(
        buckets = buckets.len(),
        distinct = seen.len(),
        matched = grouping.matched_count(),
        unmatched = grouping.unmatched.len(),
        "grouped colors"
    );
    grouping
}

/// Parse the hexadecimal color codes and group them into the buckets.
///
/// This function fails on the first malformed code.
pub fn group_hex_codes<I, S>(codes: I, buckets: &Buckets) -> Result<Grouping, InvalidColorError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let colors = codes
        .into_iter()
        .map(|code| Color::from_hex(code.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(group_colors(colors, buckets))
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{group_colors, group_hex_codes, Buckets, Grouping};
    use crate::collect::{basic_hue_wheel, from_fn, HsvCollector};
    use crate::error::{Error, InvalidColorError};
    use crate::sort::{Order, SortKey};
    use crate::{Color, Range};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn quadrants() -> Result<Buckets, Error> {
        Ok(Buckets::new()
            .with("00", HsvCollector::hue(0.0, 0.25)?)
            .with("01", HsvCollector::hue(0.25, 0.5)?)
            .with("02", HsvCollector::hue(0.5, 0.75)?)
            .with("03", HsvCollector::hue(0.75, 1.01)?))
    }

    fn hex_codes(colors: &[Color]) -> Vec<&str> {
        colors.iter().map(Color::hex).collect()
    }

    #[test]
    fn test_quadrants() -> Result<(), Error> {
        let grouping = group_hex_codes(
            [
                "00ff00", "ff00ff", "1122ff", "111111", "ffffff", "00ff00", "00ffff", "0000ff",
            ],
            &quadrants()?,
        )?;

        assert_eq!(grouping.len(), 4);
        let groups: Vec<_> = grouping
            .iter()
            .map(|(name, colors)| (name, hex_codes(colors)))
            .collect();
        assert_eq!(
            groups,
            [
                ("00", vec!["111111", "ffffff"]),
                ("01", vec!["00ff00"]),
                ("02", vec!["1122ff", "00ffff", "0000ff"]),
                ("03", vec!["ff00ff"]),
            ]
        );
        assert!(grouping.unmatched().is_empty());
        assert_eq!(grouping.matched_count(), 7);
        Ok(())
    }

    #[test]
    fn test_first_match() -> Result<(), Error> {
        let both = Color::from_hsv(0.5, 0.5, 0.5)?;
        let buckets = Buckets::new()
            .with("first", HsvCollector::hue(0.0, 1.0)?)
            .with("second", HsvCollector::saturation(0.0, 1.0)?);
        let grouping = group_colors([both.clone()], &buckets);
        assert_eq!(grouping.get("first"), Some([both.clone()].as_slice()));
        assert_eq!(grouping.get("second"), Some([].as_slice()));

        // Reordering the buckets changes the outcome.
        let buckets = Buckets::new()
            .with("second", HsvCollector::saturation(0.0, 1.0)?)
            .with("first", HsvCollector::hue(0.0, 1.0)?);
        let grouping = group_colors([both.clone()], &buckets);
        assert_eq!(grouping.get("second"), Some([both].as_slice()));
        assert_eq!(grouping.get("first").map(<[Color]>::len), Some(0));
        assert_eq!(grouping.get("third"), None);
        Ok(())
    }

    #[test]
    fn test_dedupe_and_unmatched() -> Result<(), Error> {
        let buckets = Buckets::new().with("red", HsvCollector::hue(0.0, 0.05)?);
        let grouping = group_hex_codes(
            ["#f00", "00f", "ff0000", "0000FF", "0f0", "FF0000"],
            &buckets,
        )?;

        assert_eq!(hex_codes(grouping.get("red").unwrap_or_default()), ["ff0000"]);
        assert_eq!(hex_codes(grouping.unmatched()), ["0000ff", "00ff00"]);
        assert_eq!(grouping.matched_count() + grouping.unmatched().len(), 3);
        Ok(())
    }

    #[test]
    fn test_equal_colors_classify_alike() -> Result<(), InvalidColorError> {
        let wheel = basic_hue_wheel();
        let red = Color::from_hex("f00")?;
        let wrapped = Color::from_hsv(1.0, 1.0, 1.0)?;
        assert_eq!(red, wrapped);
        assert_eq!(wheel.classify(&red), wheel.classify(&wrapped));

        let forward = group_colors([red.clone(), wrapped.clone()], &wheel);
        let backward = group_colors([wrapped, red], &wheel);
        assert_eq!(forward, backward);
        assert_eq!(hex_codes(forward.get("01 red").unwrap_or_default()), ["ff0000"]);
        assert!(forward.unmatched().is_empty());

        // Components within one 8-bit level make the same color.
        let colors = [
            Color::from_rgb(0.5, 0.25, 0.75)?,
            Color::from_rgb(0.501, 0.251, 0.7505)?,
            Color::from_hex("8040bf")?,
        ];
        for color in &colors[1..] {
            assert_eq!(color, &colors[0]);
            assert_eq!(wheel.classify(color), wheel.classify(&colors[0]));
        }
        Ok(())
    }

    #[test]
    fn test_tests_each_color_once() -> Result<(), InvalidColorError> {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let buckets = Buckets::new()
            .with(
                "never",
                from_fn(move |_: &Color| {
                    counter.fetch_add(1, Ordering::Relaxed);
                    false
                }),
            );

        let grouping = group_hex_codes(["abc", "aabbcc", "#ABC", "123", "123456"], &buckets)?;
        assert_eq!(calls.load(Ordering::Relaxed), 3);
        assert_eq!(grouping.unmatched().len(), 3);
        Ok(())
    }

    #[test]
    fn test_empty() -> Result<(), Error> {
        let grouping = group_colors(Vec::new(), &quadrants()?);
        assert_eq!(grouping.len(), 4);
        assert!(grouping.iter().all(|(_, colors)| colors.is_empty()));

        let grouping = group_hex_codes(["fff", "000"], &Buckets::new())?;
        assert!(grouping.is_empty());
        assert_eq!(grouping.unmatched().len(), 2);
        assert_eq!(group_colors(Vec::new(), &Buckets::new()), Grouping::default());
        Ok(())
    }

    #[test]
    fn test_malformed_code() -> Result<(), Error> {
        assert_eq!(
            group_hex_codes(["fff", "#12345", "zzz"], &quadrants()?),
            Err(InvalidColorError::UnexpectedLength(5))
        );
        Ok(())
    }

    #[test]
    fn test_buckets() -> Result<(), Error> {
        let mut buckets = Buckets::new()
            .with("a", HsvCollector::hue(0.0, 0.5)?)
            .with("b", HsvCollector::hue(0.5, 1.0)?);

        // Replacing keeps the position.
        buckets.push(
            "a",
            HsvCollector::new(crate::core::Component::Value, Range::closed(0.0, 1.0)?),
        );
        let mut more = Buckets::new();
        more.push("c", HsvCollector::saturation(0.0, 1.0)?);
        buckets.extend(more);

        assert_eq!(buckets.len(), 3);
        assert_eq!(buckets.names().collect::<Vec<_>>(), ["a", "b", "c"]);
        assert_eq!(format!("{:?}", buckets), r#"["a", "b", "c"]"#);
        assert_eq!(buckets.classify(&Color::from_hsv(0.7, 0.0, 0.0)?), Some(0));
        Ok(())
    }

    #[test]
    fn test_sorted_groups() -> Result<(), Error> {
        let buckets = Buckets::new()
            .with("b", HsvCollector::hue(0.5, 1.0)?)
            .with("z", HsvCollector::hue(0.4, 0.5)?)
            .with("a", HsvCollector::hue(0.0, 0.5)?);
        let mut grouping =
            group_hex_codes(["000080", "0000ff", "ff0000", "800000", "0000c0"], &buckets)?;

        let mut copy = grouping.clone();
        copy.sort_by(SortKey::Value, Order::Ascending);
        assert_eq!(
            hex_codes(copy.get("b").unwrap_or_default()),
            ["000080", "0000c0", "0000ff"]
        );

        grouping.sort_by(SortKey::Value, Order::Descending);
        let groups = grouping.into_sorted_groups(SortKey::Value, Order::Descending);
        let groups: Vec<_> = groups.iter().map(|colors| hex_codes(colors)).collect();
        assert_eq!(
            groups,
            [vec!["ff0000", "800000"], vec!["0000ff", "0000c0", "000080"]]
        );
        Ok(())
    }

    mod proptests {
        use super::super::group_hex_codes;
        use crate::collect::{grays_then, martian_hue_wheel};
        use proptest::prelude::*;
        use std::collections::{HashMap, HashSet};

        // Four levels per channel make for 64 colors, so longer lists repeat.
        fn palette_codes() -> impl Strategy<Value = Vec<String>> {
            prop::collection::vec((0_u8..4, 0_u8..4, 0_u8..4), 0..48).prop_map(|levels| {
                levels
                    .into_iter()
                    .map(|(r, g, b)| format!("{:02x}{:02x}{:02x}", r * 0x55, g * 0x55, b * 0x55))
                    .collect()
            })
        }

        proptest! {
            #[test]
            fn each_distinct_color_lands_once(codes in palette_codes()) {
                let buckets = grays_then(martian_hue_wheel());
                let grouping = group_hex_codes(&codes, &buckets)
                    .map_err(|e| TestCaseError::fail(e.to_string()))?;

                let distinct: HashSet<&str> = codes.iter().map(String::as_str).collect();
                prop_assert_eq!(
                    grouping.matched_count() + grouping.unmatched().len(),
                    distinct.len()
                );

                let mut seen: HashMap<&str, usize> = HashMap::new();
                let placed = grouping
                    .iter()
                    .flat_map(|(_, colors)| colors.iter())
                    .chain(grouping.unmatched());
                for color in placed {
                    *seen.entry(color.hex()).or_default() += 1;
                }
                prop_assert_eq!(seen.len(), distinct.len());
                for (code, count) in seen {
                    prop_assert!(distinct.contains(code));
                    prop_assert_eq!(count, 1);
                }

                // Every color is a gray or has a hue slice.
                prop_assert!(grouping.unmatched().is_empty());
            }
        }
    }
}
