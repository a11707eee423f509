#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::error::InvalidArgumentError;

/// The enumeration of HSV components.
///
/// Collectors test exactly one component of a color's HSV view against a
/// [`Range`](crate::Range). All three components are normalized to the unit
/// range, with hue expressed as a fraction of a full turn. Hue is less than 1,
/// so red always sits at hue 0.
///
/// Components have single-letter names `h`, `s`, and `v`, which [`FromStr`]
/// parses and [`Display`](std::fmt::Display) prints. Any other name is an
/// [`InvalidArgumentError`].
///
/// [`FromStr`]: std::str::FromStr
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, module = "swatchery.color")
)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Component {
    Hue,
    Saturation,
    Value,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl Component {
    /// Parse a component name. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn parse(name: &str) -> Result<Self, InvalidArgumentError> {
        name.parse()
    }

    /// Get this component's index into an HSV triple.
    pub const fn index(&self) -> usize {
        match *self {
            Self::Hue => 0,
            Self::Saturation => 1,
            Self::Value => 2,
        }
    }

    /// Get this component's single-letter name.
    pub const fn name(&self) -> &'static str {
        match *self {
            Self::Hue => "h",
            Self::Saturation => "s",
            Self::Value => "v",
        }
    }

    /// Create a human-readable representation for this component. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __str__(&self) -> String {
        format!("{}", self)
    }
}

impl Component {
    /// All components, in HSV order.
    pub const ALL: [Component; 3] = [Self::Hue, Self::Saturation, Self::Value];
}

impl std::str::FromStr for Component {
    type Err = InvalidArgumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "h" => Ok(Self::Hue),
            "s" => Ok(Self::Saturation),
            "v" => Ok(Self::Value),
            _ => Err(InvalidArgumentError::new(s)),
        }
    }
}

impl TryFrom<&str> for Component {
    type Error = InvalidArgumentError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl std::fmt::Display for Component {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ====================================================================================================================
