#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::core::Component;
use crate::error::Error;
use crate::{Color, Float, Range};

/// A predicate that determines whether a color belongs into a bucket.
///
/// Collectors must be pure: Given the same color, they must always give the
/// same answer. The grouping engine relies on that when it tests each
/// distinct color exactly once.
///
/// Besides [`HsvCollector`] and [`CollectorChain`], references and boxes of
/// collectors are collectors, too. Closures become collectors with
/// [`from_fn`].
pub trait Collector {
    /// Determine whether the color belongs to this collector's bucket.
    fn contains(&self, color: &Color) -> bool;
}

impl<C: Collector + ?Sized> Collector for &C {
    fn contains(&self, color: &Color) -> bool {
        (**self).contains(color)
    }
}

impl<C: Collector + ?Sized> Collector for Box<C> {
    fn contains(&self, color: &Color) -> bool {
        (**self).contains(color)
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// A collector that wraps a closure.
///
/// Use [`from_fn`] to create instances.
#[derive(Clone, Copy)]
pub struct FromFn<F>(F);

impl<F: Fn(&Color) -> bool> Collector for FromFn<F> {
    fn contains(&self, color: &Color) -> bool {
        (self.0)(color)
    }
}

impl<F> std::fmt::Debug for FromFn<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("FromFn(..)")
    }
}

/// Create a new collector from the closure.
///
/// ```
/// # use swatchery::{Color, collect::{from_fn, Collector}, error::InvalidColorError};
/// let bright = from_fn(|color: &Color| 0.9 <= color.luminance());
/// assert!(bright.contains(&Color::from_hex("fff")?));
/// assert!(!bright.contains(&Color::from_hex("f00")?));
/// # Ok::<(), InvalidColorError>(())
/// ```
pub fn from_fn<F: Fn(&Color) -> bool>(f: F) -> FromFn<F> {
    FromFn(f)
}

// ====================================================================================================================

/// A collector testing one HSV component against a range.
///
/// ```
/// # use swatchery::{Color, Range, collect::{Collector, HsvCollector}};
/// # use swatchery::error::Error;
/// let greenish_blue = HsvCollector::parse("h", 0.25, 0.75)?;
/// assert!(greenish_blue.contains(&Color::from_hsv(0.5, 1.0, 1.0)?));
/// assert!(!greenish_blue.contains(&Color::from_hsv(0.833, 1.0, 1.0)?));
///
/// assert!(HsvCollector::parse("x", 0.0, 1.0).is_err());
/// assert!(HsvCollector::parse("s", 1.0, 0.0).is_err());
/// # Ok::<(), Error>(())
/// ```
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, frozen, module = "swatchery.color")
)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HsvCollector {
    component: Component,
    range: Range,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl HsvCollector {
    /// Create a new collector for the named component and the half-open
    /// range. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[new]
    pub fn py_new(component: &str, min: Float, max: Float) -> Result<Self, Error> {
        Self::parse(component, min, max)
    }

    /// Get the tested component.
    pub const fn component(&self) -> Component {
        self.component
    }

    /// Get the range.
    pub const fn range(&self) -> Range {
        self.range
    }

    /// Determine whether the color's component falls into the range. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[pyo3(name = "contains")]
    pub fn py_contains(&self, color: &Color) -> bool {
        Collector::contains(self, color)
    }

    /// Convert this collector to its debug representation. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __repr__(&self) -> String {
        format!("{:?}", self)
    }
}

impl HsvCollector {
    /// Create a new collector for the component and range.
    pub const fn new(component: Component, range: Range) -> Self {
        Self { component, range }
    }

    /// Create a new collector for the named component and the half-open range
    /// `[min, max)`.
    ///
    /// This function fails if the component name is not one of `h`, `s`, or
    /// `v` or if the range is empty.
    pub fn parse(component: &str, min: Float, max: Float) -> Result<Self, Error> {
        let component = component.parse::<Component>()?;
        let range = Range::new(min, max)?;
        Ok(Self::new(component, range))
    }

    /// Create a new hue collector for the half-open range `[min, max)`.
    pub fn hue(min: Float, max: Float) -> Result<Self, Error> {
        Ok(Self::new(Component::Hue, Range::new(min, max)?))
    }

    /// Create a new saturation collector for the half-open range `[min, max)`.
    pub fn saturation(min: Float, max: Float) -> Result<Self, Error> {
        Ok(Self::new(Component::Saturation, Range::new(min, max)?))
    }

    /// Create a new value collector for the half-open range `[min, max)`.
    pub fn value(min: Float, max: Float) -> Result<Self, Error> {
        Ok(Self::new(Component::Value, Range::new(min, max)?))
    }
}

impl Collector for HsvCollector {
    fn contains(&self, color: &Color) -> bool {
        self.range.contains(color[self.component])
    }
}

impl std::fmt::Display for HsvCollector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{} in {}", self.component, self.range))
    }
}

// ====================================================================================================================

/// A conjunction of collectors.
///
/// A chain accepts a color only if all of its members do. Evaluation stops at
/// the first member that rejects the color. An empty chain accepts every
/// color.
///
/// ```
/// # use swatchery::{Color, collect::{Collector, CollectorChain, HsvCollector}};
/// # use swatchery::error::Error;
/// let chain = CollectorChain::new()
///     .with(HsvCollector::hue(0.25, 0.75)?)
///     .with(HsvCollector::saturation(0.33, 0.66)?);
///
/// assert!(chain.contains(&Color::from_hsv(0.5, 0.5, 1.0)?));
/// assert!(!chain.contains(&Color::from_hsv(0.8, 0.5, 1.0)?));
/// # Ok::<(), Error>(())
/// ```
#[derive(Default)]
pub struct CollectorChain {
    members: Vec<Box<dyn Collector + Send + Sync>>,
}

impl CollectorChain {
    /// Create a new, empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a collector to this chain.
    #[must_use = "the chain is consumed and returned"]
    pub fn with<C: Collector + Send + Sync + 'static>(mut self, collector: C) -> Self {
        self.members.push(Box::new(collector));
        self
    }

    /// Add a collector to this chain.
    pub fn push<C: Collector + Send + Sync + 'static>(&mut self, collector: C) {
        self.members.push(Box::new(collector));
    }

    /// Get the number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Determine whether this chain has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl Collector for CollectorChain {
    fn contains(&self, color: &Color) -> bool {
        self.members.iter().all(|member| member.contains(color))
    }
}

impl std::fmt::Debug for CollectorChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("CollectorChain(<{} members>)", self.members.len()))
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{from_fn, Collector, CollectorChain, HsvCollector};
    use crate::core::Component;
    use crate::error::{Error, InvalidArgumentError, InvalidRangeError};
    use crate::{Color, Range};

    #[test]
    fn test_hue_collector() -> Result<(), Error> {
        let collector = HsvCollector::parse("h", 0.25, 0.75)?;

        for [h, s, v] in [
            [0.333, 1.0, 1.0],
            [0.655, 0.93, 1.0],
            [0.5, 1.0, 1.0],
            [0.667, 1.0, 1.0],
        ] {
            assert!(collector.contains(&Color::from_hsv(h, s, v)?));
        }

        for [h, s, v] in [[0.833, 1.0, 1.0], [0.0, 0.0, 0.07], [0.0, 0.0, 1.0]] {
            assert!(!collector.contains(&Color::from_hsv(h, s, v)?));
        }

        Ok(())
    }

    #[test]
    fn test_saturation_collector() -> Result<(), Error> {
        let collector = HsvCollector::parse("s", 0.0, 0.085)?;
        assert_eq!(collector.component(), Component::Saturation);

        assert!(collector.contains(&Color::from_hsv(0.0, 0.0, 0.07)?));
        assert!(collector.contains(&Color::from_hsv(0.7, 0.08, 1.0)?));
        assert!(!collector.contains(&Color::from_hsv(0.0, 0.085, 1.0)?));
        assert!(!collector.contains(&Color::from_hsv(0.5, 1.0, 1.0)?));
        Ok(())
    }

    #[test]
    fn test_invalid_collector() {
        assert_eq!(
            HsvCollector::parse("hue", 0.0, 1.0),
            Err(Error::Argument(InvalidArgumentError::new("hue")))
        );
        assert_eq!(
            HsvCollector::parse("v", 0.5, 0.5),
            Err(Error::Range(InvalidRangeError { min: 0.5, max: 0.5 }))
        );
    }

    #[test]
    fn test_chain() -> Result<(), Error> {
        let chain = CollectorChain::new()
            .with(HsvCollector::parse("h", 0.25, 0.75)?)
            .with(HsvCollector::parse("s", 0.33, 0.66)?);
        assert_eq!(chain.len(), 2);

        // Hue 0.5 and 0.25 with saturation 0.5 and 0.4.
        assert!(chain.contains(&Color::from_hex("80ffff")?));
        assert!(chain.contains(&Color::from_hex("ccff99")?));
        // Hue 0.75, saturation 1, and hue 0.83.
        assert!(!chain.contains(&Color::from_hex("cc99ff")?));
        assert!(!chain.contains(&Color::from_hex("00ffff")?));
        assert!(!chain.contains(&Color::from_hex("ff80ff")?));

        // Member order does not change the outcome.
        let reversed = CollectorChain::new()
            .with(HsvCollector::parse("s", 0.33, 0.66)?)
            .with(HsvCollector::parse("h", 0.25, 0.75)?);
        for code in ["80ffff", "ccff99", "cc99ff", "00ffff", "ff80ff"] {
            let color = Color::from_hex(code)?;
            assert_eq!(chain.contains(&color), reversed.contains(&color));
        }

        Ok(())
    }

    #[test]
    fn test_empty_chain() -> Result<(), Error> {
        let chain = CollectorChain::new();
        assert!(chain.is_empty());
        assert!(chain.contains(&Color::from_hex("000")?));
        assert!(chain.contains(&Color::from_hex("fff")?));
        Ok(())
    }

    #[test]
    fn test_composition() -> Result<(), Error> {
        let value = HsvCollector::new(Component::Value, Range::closed(0.5, 1.0)?);
        let mut chain = CollectorChain::new()
            .with(from_fn(|color: &Color| color.hex().starts_with("ff")));
        chain.push(value);

        let boxed: Box<dyn Collector> = Box::new(chain);
        assert!(boxed.contains(&Color::from_hex("ff8000")?));
        assert!(!boxed.contains(&Color::from_hex("808080")?));
        assert!((&boxed).contains(&Color::from_hex("ffffff")?));

        assert_eq!(format!("{}", value), "v in [0.5, 1]");
        Ok(())
    }
}
