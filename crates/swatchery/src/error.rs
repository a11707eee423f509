//! Utility module with swatchery's errors.
//!
//! Every error is raised synchronously, at the point where the offending input
//! is turned into a [`Color`](crate::Color), [`Range`](crate::Range), or
//! [`HsvCollector`](crate::collect::HsvCollector). Grouping colors never fails;
//! colors that no bucket accepts simply end up unmatched.

#[cfg(feature = "pyffi")]
use pyo3::{exceptions::PyValueError, prelude::*};

use crate::Float;

/// The color model of a component that failed validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorModel {
    Rgb,
    Hsv,
}

impl ColorModel {
    /// Get the names of this model's three components.
    pub const fn component_names(&self) -> [&'static str; 3] {
        match *self {
            Self::Rgb => ["red", "green", "blue"],
            Self::Hsv => ["hue", "saturation", "value"],
        }
    }
}

impl std::fmt::Display for ColorModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match *self {
            Self::Rgb => "RGB",
            Self::Hsv => "HSV",
        })
    }
}

// ====================================================================================================================

/// An invalid color.
///
/// Colors are rejected when their hexadecimal code has the wrong number of
/// digits or contains something other than hexadecimal digits, when an RGB or
/// HSV component falls outside the unit range, or when a
/// [`ColorBuilder`](crate::ColorBuilder) has nothing to build from.
#[derive(Clone, Debug, PartialEq)]
pub enum InvalidColorError {
    /// A hexadecimal code that, after stripping `#` and white space, does not
    /// have 3, 4, 6, or 8 digits. For example, `#12345` has five.
    UnexpectedLength(usize),

    /// A hexadecimal code with the right length but characters that are not
    /// hexadecimal digits. For example, `ffffxx`.
    MalformedHex,

    /// An RGB or HSV component outside of `0..=1`, including not-a-number.
    OutOfRange {
        model: ColorModel,
        index: usize,
        value: Float,
    },

    /// A color builder without hexadecimal code, RGB, or HSV components.
    NoRepresentation,
}

impl std::fmt::Display for InvalidColorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use InvalidColorError::*;

        match *self {
            UnexpectedLength(length) => f.write_fmt(format_args!(
                "hexadecimal color should have 3, 4, 6, or 8 digits but has {}",
                length
            )),
            MalformedHex => f.write_str("hexadecimal color should contain only hexadecimal digits"),
            OutOfRange {
                model,
                index,
                value,
            } => f.write_fmt(format_args!(
                "{} {} component should be in 0..=1 but is {}",
                model,
                model.component_names()[index.min(2)],
                value
            )),
            NoRepresentation => {
                f.write_str("color needs one of hexadecimal code, RGB, or HSV components")
            }
        }
    }
}

impl std::error::Error for InvalidColorError {}

#[cfg(feature = "pyffi")]
impl From<InvalidColorError> for PyErr {
    fn from(value: InvalidColorError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}

// ====================================================================================================================

/// An invalid range, i.e., one whose maximum does not exceed its minimum.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InvalidRangeError {
    pub min: Float,
    pub max: Float,
}

impl std::fmt::Display for InvalidRangeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "range maximum {} should be greater than minimum {}",
            self.max, self.min
        ))
    }
}

impl std::error::Error for InvalidRangeError {}

#[cfg(feature = "pyffi")]
impl From<InvalidRangeError> for PyErr {
    fn from(value: InvalidRangeError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}

// ====================================================================================================================

/// An unknown HSV component name.
///
/// Component names are the single letters `h`, `s`, and `v`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvalidArgumentError {
    pub name: String,
}

impl InvalidArgumentError {
    /// Create a new invalid argument error.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
        }
    }
}

impl std::fmt::Display for InvalidArgumentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "component should be one of `h`, `s`, or `v` but is `{}`",
            self.name
        ))
    }
}

impl std::error::Error for InvalidArgumentError {}

#[cfg(feature = "pyffi")]
impl From<InvalidArgumentError> for PyErr {
    fn from(value: InvalidArgumentError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}

// ====================================================================================================================

/// Any of swatchery's errors.
///
/// This enumeration lets code that constructs colors, ranges, and collectors
/// in one go propagate all of them with `?`.
#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    Color(InvalidColorError),
    Range(InvalidRangeError),
    Argument(InvalidArgumentError),
}

impl From<InvalidColorError> for Error {
    fn from(value: InvalidColorError) -> Self {
        Self::Color(value)
    }
}

impl From<InvalidRangeError> for Error {
    fn from(value: InvalidRangeError) -> Self {
        Self::Range(value)
    }
}

impl From<InvalidArgumentError> for Error {
    fn from(value: InvalidArgumentError) -> Self {
        Self::Argument(value)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Color(error) => std::fmt::Display::fmt(error, f),
            Self::Range(error) => std::fmt::Display::fmt(error, f),
            Self::Argument(error) => std::fmt::Display::fmt(error, f),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Color(error) => Some(error),
            Self::Range(error) => Some(error),
            Self::Argument(error) => Some(error),
        }
    }
}

#[cfg(feature = "pyffi")]
impl From<Error> for PyErr {
    fn from(value: Error) -> Self {
        PyValueError::new_err(value.to_string())
    }
}
