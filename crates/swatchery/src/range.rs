#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::error::InvalidRangeError;
use crate::Float;

/// An interval over the real numbers.
///
/// A range has a minimum and a maximum, with the maximum strictly greater than
/// the minimum, and each bound may or may not be part of the range. By
/// default, ranges are half-open, i.e., include the minimum but exclude the
/// maximum. That way, consecutive ranges such as `[0, 0.5)` and `[0.5, 1)`
/// tile an interval without gaps or overlap.
///
/// The display representation uses interval notation, whereas the debug
/// representation spells out the bounds and both flags:
///
/// ```
/// # use swatchery::{Range, error::InvalidRangeError};
/// let range = Range::new(0.0, 10.0)?;
/// assert!(range.contains(0.0));
/// assert!(!range.contains(10.0));
/// assert_eq!(format!("{}", range), "[0, 10)");
/// assert_eq!(format!("{:?}", range), "Range(0, 10, true, false)");
///
/// assert!(Range::closed(0.0, 10.0)?.contains(10.0));
/// assert!(Range::new(10.0, 10.0).is_err());
/// # Ok::<(), InvalidRangeError>(())
/// ```
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, frozen, module = "swatchery.color")
)]
#[derive(Clone, Copy, PartialEq)]
pub struct Range {
    min: Float,
    max: Float,
    min_inclusive: bool,
    max_inclusive: bool,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl Range {
    /// Create a new range. <i class=python-only>Python only!</i>
    ///
    /// The range is half-open by default.
    #[cfg(feature = "pyffi")]
    #[new]
    #[pyo3(signature = (min, max, min_inclusive=true, max_inclusive=false))]
    pub fn py_new(
        min: Float,
        max: Float,
        min_inclusive: bool,
        max_inclusive: bool,
    ) -> Result<Self, InvalidRangeError> {
        Self::with_bounds(min, max, min_inclusive, max_inclusive)
    }

    /// Get the minimum.
    pub const fn min(&self) -> Float {
        self.min
    }

    /// Get the maximum.
    pub const fn max(&self) -> Float {
        self.max
    }

    /// Determine whether the minimum is part of this range.
    pub const fn min_inclusive(&self) -> bool {
        self.min_inclusive
    }

    /// Determine whether the maximum is part of this range.
    pub const fn max_inclusive(&self) -> bool {
        self.max_inclusive
    }

    /// Determine whether this range contains the value.
    ///
    /// Not-a-number is never contained.
    pub fn contains(&self, value: Float) -> bool {
        let above = if self.min_inclusive {
            self.min <= value
        } else {
            self.min < value
        };

        let below = if self.max_inclusive {
            value <= self.max
        } else {
            value < self.max
        };

        above && below
    }

    /// Convert this range to its debug representation. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __repr__(&self) -> String {
        format!("{:?}", self)
    }

    /// Convert this range to interval notation. <i class=python-only>Python
    /// only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __str__(&self) -> String {
        format!("{}", self)
    }

    /// Determine whether this range contains the value. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __contains__(&self, value: Float) -> bool {
        self.contains(value)
    }
}

impl Range {
    /// Create a new half-open range `[min, max)`.
    ///
    /// This function fails if the maximum is not greater than the minimum,
    /// which includes either bound being not-a-number.
    pub fn new(min: Float, max: Float) -> Result<Self, InvalidRangeError> {
        Self::with_bounds(min, max, true, false)
    }

    /// Create a new closed range `[min, max]`.
    pub fn closed(min: Float, max: Float) -> Result<Self, InvalidRangeError> {
        Self::with_bounds(min, max, true, true)
    }

    /// Create a new range with the given bounds.
    pub fn with_bounds(
        min: Float,
        max: Float,
        min_inclusive: bool,
        max_inclusive: bool,
    ) -> Result<Self, InvalidRangeError> {
        // Not-a-number is unordered and fails, too.
        if min.partial_cmp(&max) != Some(std::cmp::Ordering::Less) {
            return Err(InvalidRangeError { min, max });
        }

        Ok(Self::new_unchecked(min, max, min_inclusive, max_inclusive))
    }

    /// Create a new range without checking the bounds.
    ///
    /// The caller must ensure that `min < max`.
    pub(crate) const fn new_unchecked(
        min: Float,
        max: Float,
        min_inclusive: bool,
        max_inclusive: bool,
    ) -> Self {
        Self {
            min,
            max,
            min_inclusive,
            max_inclusive,
        }
    }
}

impl std::fmt::Debug for Range {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "Range({}, {}, {}, {})",
            self.min, self.max, self.min_inclusive, self.max_inclusive
        ))
    }
}

impl std::fmt::Display for Range {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let open = if self.min_inclusive { '[' } else { '(' };
        let close = if self.max_inclusive { ']' } else { ')' };
        f.write_fmt(format_args!("{}{}, {}{}", open, self.min, self.max, close))
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::Range;
    use crate::error::InvalidRangeError;

    #[test]
    fn test_contains() -> Result<(), InvalidRangeError> {
        let range = Range::new(0.0, 10.0)?;
        assert!(range.contains(0.0));
        assert!(range.contains(5.0));
        assert!(range.contains(9.999));
        assert!(!range.contains(10.0));
        assert!(!range.contains(-0.001));
        assert!(!range.contains(crate::Float::NAN));

        let range = Range::closed(0.0, 10.0)?;
        assert!(range.contains(0.0));
        assert!(range.contains(10.0));

        let range = Range::with_bounds(0.0, 10.0, false, true)?;
        assert!(!range.contains(0.0));
        assert!(range.contains(10.0));

        let range = Range::with_bounds(0.0, 10.0, false, false)?;
        assert!(!range.contains(0.0));
        assert!(!range.contains(10.0));
        assert!(range.contains(0.5));
        Ok(())
    }

    #[test]
    fn test_invalid() {
        assert_eq!(
            Range::new(10.0, 0.0),
            Err(InvalidRangeError {
                min: 10.0,
                max: 0.0
            })
        );
        assert!(Range::new(10.0, 10.0).is_err());
        assert!(Range::closed(10.0, 10.0).is_err());
        assert!(Range::new(crate::Float::NAN, 1.0).is_err());
        assert!(Range::new(0.0, crate::Float::NAN).is_err());
    }

    #[test]
    fn test_format() -> Result<(), InvalidRangeError> {
        let range = Range::new(0.0, 10.0)?;
        assert_eq!(format!("{:?}", range), "Range(0, 10, true, false)");
        assert_eq!(format!("{}", range), "[0, 10)");

        let range = Range::with_bounds(0.25, 0.5, false, true)?;
        assert_eq!(format!("{:?}", range), "Range(0.25, 0.5, false, true)");
        assert_eq!(format!("{}", range), "(0.25, 0.5]");
        Ok(())
    }

    #[test]
    fn test_tiling() -> Result<(), InvalidRangeError> {
        let ranges = [Range::new(0.0, 0.5)?, Range::new(0.5, 1.0)?];
        for value in [0.0, 0.25, 0.4999, 0.5, 0.75, 0.9999] {
            assert_eq!(ranges.iter().filter(|r| r.contains(value)).count(), 1);
        }
        Ok(())
    }
}
