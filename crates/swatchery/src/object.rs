use std::str::FromStr;

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::core::{
    format_hex, from_24bit, hsv_to_rgb, normalize_hex, parse_hex, relative_luminance, rgb_to_hsv,
    to_24bit, Component,
};
use crate::error::{ColorModel, InvalidColorError};
use crate::Float;

/// Check that all components have unit range. Not-a-number fails the check.
fn check_unit_range(model: ColorModel, components: &[Float; 3]) -> Result<(), InvalidColorError> {
    for (index, value) in components.iter().enumerate() {
        if !(0.0..=1.0).contains(value) {
            return Err(InvalidColorError::OutOfRange {
                model,
                index,
                value: *value,
            });
        }
    }

    Ok(())
}

/// Clamp a scaled component into unit range, with not-a-number becoming zero.
fn clamp_unit(value: Float) -> Float {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// An immutable color with synchronized hexadecimal, RGB, and HSV views.
///
/// All three views are computed once, when the color is created, and always
/// describe the same color. The hexadecimal view is a six-digit, lower-case
/// code without `#`. It serves as the color's identity: Equality, ordering,
/// and hashing use the code only. The RGB and HSV views are derived from the
/// code, so equal colors have identical views and classify alike.
/// Consequently, two colors created from RGB or HSV components that differ by
/// less than one 8-bit level are the same color in every respect.
///
/// # Creating Colors
///
/// [`Color::from_hex`] accepts three-, four-, six-, and eight-digit codes with
/// or without `#` and in any case; see [`normalize_hex`] for details.
/// [`Color::from_rgb`] and [`Color::from_hsv`] accept unit-range components.
/// They round each RGB component to the nearest of 256 levels and derive all
/// views from the resulting code. In particular, hue 1 becomes hue 0.
///
/// Since a color's identity is its code, [`FromStr`], `TryFrom<&str>`, and
/// `TryFrom<String>` all parse hexadecimal codes. When the representation is
/// only known at run time, [`Color::builder`] picks hexadecimal code over RGB
/// over HSV.
///
/// ```
/// # use swatchery::{Color, error::InvalidColorError};
/// let pink = Color::from_hex("#FF0080")?;
/// assert_eq!(pink.hex(), "ff0080");
/// assert_eq!(pink.rgb(), [1.0, 0.0, 128.0 / 255.0]);
///
/// let same = Color::from_rgb(1.0, 0.0, 0.5)?;
/// assert_eq!(pink, same);
/// # Ok::<(), InvalidColorError>(())
/// ```
///
/// # Deriving Tones
///
/// [`Color::hsv_transform`] and [`Color::rgb_transform`] scale each component
/// and clamp the result into unit range. Swatch renderers use the former to
/// derive highlights and shadows.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, ord, frozen, hash, module = "swatchery.color")
)]
#[derive(Clone)]
pub struct Color {
    hex: String,
    rgb: [Float; 3],
    hsv: [Float; 3],
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl Color {
    // As usual, the constructors come in pairs, since #[staticmethod] does not
    // work inside #[cfg_attr()].

    /// Create a new color from its hexadecimal code.
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn from_hex(code: &str) -> Result<Self, InvalidColorError> {
        Self::parse_hex_code(code)
    }

    /// Create a new color from its hexadecimal code.
    ///
    /// The code is normalized first, which makes `#FFF`, `fff`, `ffffff`, and
    /// `#ffffffcc` all the same color.
    ///
    /// ```
    /// # use swatchery::{Color, error::InvalidColorError};
    /// assert_eq!(Color::from_hex("#FFF")?.hex(), "ffffff");
    /// assert_eq!(
    ///     Color::from_hex("#55555"),
    ///     Err(InvalidColorError::UnexpectedLength(5))
    /// );
    /// # Ok::<(), InvalidColorError>(())
    /// ```
    #[cfg(not(feature = "pyffi"))]
    pub fn from_hex(code: &str) -> Result<Self, InvalidColorError> {
        Self::parse_hex_code(code)
    }

    /// Create a new color from unit-range red, green, and blue components.
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn from_rgb(r: Float, g: Float, b: Float) -> Result<Self, InvalidColorError> {
        let rgb = [r, g, b];
        check_unit_range(ColorModel::Rgb, &rgb)?;
        Ok(Self::with_rgb(rgb))
    }

    /// Create a new color from unit-range red, green, and blue components.
    ///
    /// This method fails if any component is outside `0..=1` or not a number.
    #[cfg(not(feature = "pyffi"))]
    pub fn from_rgb(r: Float, g: Float, b: Float) -> Result<Self, InvalidColorError> {
        let rgb = [r, g, b];
        check_unit_range(ColorModel::Rgb, &rgb)?;
        Ok(Self::with_rgb(rgb))
    }

    /// Create a new color from unit-range hue, saturation, and value.
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn from_hsv(h: Float, s: Float, v: Float) -> Result<Self, InvalidColorError> {
        let hsv = [h, s, v];
        check_unit_range(ColorModel::Hsv, &hsv)?;
        Ok(Self::with_hsv(hsv))
    }

    /// Create a new color from unit-range hue, saturation, and value.
    ///
    /// The hue is a fraction of a full turn, so that 0 and 1 both are red.
    /// Either way, the color's hue is 0. This method fails if any component is outside `0..=1` or not a number.
    #[cfg(not(feature = "pyffi"))]
    pub fn from_hsv(h: Float, s: Float, v: Float) -> Result<Self, InvalidColorError> {
        let hsv = [h, s, v];
        check_unit_range(ColorModel::Hsv, &hsv)?;
        Ok(Self::with_hsv(hsv))
    }

    /// Get this color's hexadecimal code. <i class=python-only>Python
    /// only!</i>
    #[cfg(feature = "pyffi")]
    #[pyo3(name = "hex")]
    pub fn py_hex(&self) -> String {
        self.hex.clone()
    }

    /// Get this color's red, green, and blue components.
    pub fn rgb(&self) -> [Float; 3] {
        self.rgb
    }

    /// Get this color's hue, saturation, and value.
    pub fn hsv(&self) -> [Float; 3] {
        self.hsv
    }

    /// Get this color's hue.
    pub fn hue(&self) -> Float {
        self.hsv[0]
    }

    /// Get this color's saturation.
    pub fn saturation(&self) -> Float {
        self.hsv[1]
    }

    /// Get this color's value, i.e., brightness.
    pub fn value(&self) -> Float {
        self.hsv[2]
    }

    /// Get the HSV component.
    pub fn component(&self, component: Component) -> Float {
        self.hsv[component.index()]
    }

    /// Get this color's 8-bit red, green, and blue components.
    ///
    /// These are the components encoded by the hexadecimal code.
    pub fn to_24bit(&self) -> [u8; 3] {
        to_24bit(&self.rgb)
    }

    /// Compute this color's relative luminance.
    ///
    /// ```
    /// # use swatchery::{Color, error::InvalidColorError};
    /// let green = Color::from_hex("0f0")?;
    /// let red = Color::from_hex("f00")?;
    /// assert!(red.luminance() < green.luminance());
    /// # Ok::<(), InvalidColorError>(())
    /// ```
    pub fn luminance(&self) -> Float {
        relative_luminance(&self.rgb)
    }

    /// Scale hue, saturation, and value.
    ///
    /// This method multiplies each HSV component by the corresponding factor
    /// and clamps the result into unit range. Hue does not wrap around.
    ///
    /// ```
    /// # use swatchery::{Color, error::InvalidColorError};
    /// let cyan = Color::from_hsv(0.5, 1.0, 1.0)?;
    /// assert_eq!(cyan.hsv_transform(2.0, 1.0, 1.0), Color::from_hsv(1.0, 1.0, 1.0)?);
    /// assert_eq!(cyan.hsv_transform(1.0, -2.0, -2.0), Color::from_hsv(0.5, 0.0, 0.0)?);
    /// # Ok::<(), InvalidColorError>(())
    /// ```
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn hsv_transform(&self, h: Float, s: Float, v: Float) -> Self {
        let [h0, s0, v0] = self.hsv;
        Self::with_hsv([clamp_unit(h0 * h), clamp_unit(s0 * s), clamp_unit(v0 * v)])
    }

    /// Scale red, green, and blue.
    ///
    /// This method multiplies each RGB component by the corresponding factor
    /// and clamps the result into unit range.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn rgb_transform(&self, r: Float, g: Float, b: Float) -> Self {
        let [r0, g0, b0] = self.rgb;
        Self::with_rgb([clamp_unit(r0 * r), clamp_unit(g0 * g), clamp_unit(b0 * b)])
    }

    /// Read an HSV component by index. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __getitem__(&self, index: isize) -> PyResult<Float> {
        match index {
            -3..=-1 => Ok(self.hsv[(3 + index) as usize]),
            0..=2 => Ok(self.hsv[index as usize]),
            _ => Err(pyo3::exceptions::PyIndexError::new_err(
                "Invalid component index",
            )),
        }
    }

    /// Convert this color to its debug representation. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __repr__(&self) -> String {
        format!("{:?}", self)
    }

    /// Convert this color to its hashed hexadecimal representation. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __str__(&self) -> String {
        format!("{}", self)
    }
}

// --------------------------------------------------------------------------------------------------------------------

// Not exposed to Python.
impl Color {
    /// Create a new color builder.
    ///
    /// ```
    /// # use swatchery::{Color, error::InvalidColorError};
    /// let color = Color::builder()
    ///     .hsv([0.0, 1.0, 1.0])
    ///     .hex("#00f")
    ///     .build()?;
    /// assert_eq!(color.hex(), "0000ff");
    /// # Ok::<(), InvalidColorError>(())
    /// ```
    pub fn builder() -> ColorBuilder {
        ColorBuilder::default()
    }

    /// Get this color's hexadecimal code.
    ///
    /// The code has six lower-case digits and no leading `#`.
    pub fn hex(&self) -> &str {
        &self.hex
    }

    fn parse_hex_code(code: &str) -> Result<Self, InvalidColorError> {
        let hex = normalize_hex(code)?;
        let bytes = parse_hex(&hex)?;
        Ok(Self::with_24bit(hex, bytes))
    }

    /// Create a new color from its normalized code and the code's bytes. All
    /// other constructors funnel through here.
    fn with_24bit(hex: String, bytes: [u8; 3]) -> Self {
        let rgb = from_24bit(bytes);
        let hsv = rgb_to_hsv(&rgb);
        Self { hex, rgb, hsv }
    }

    // The components must have unit range.
    fn with_rgb(rgb: [Float; 3]) -> Self {
        let bytes = to_24bit(&rgb);
        Self::with_24bit(format_hex(bytes), bytes)
    }

    // The components must have unit range.
    fn with_hsv(hsv: [Float; 3]) -> Self {
        Self::with_rgb(hsv_to_rgb(&hsv))
    }
}

impl FromStr for Color {
    type Err = InvalidColorError;

    /// Parse a hexadecimal color code.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_hex_code(s)
    }
}

impl TryFrom<&str> for Color {
    type Error = InvalidColorError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Color::from_str(value)
    }
}

impl TryFrom<String> for Color {
    type Error = InvalidColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::from_str(value.as_str())
    }
}

impl AsRef<str> for Color {
    fn as_ref(&self) -> &str {
        &self.hex
    }
}

impl std::ops::Index<Component> for Color {
    type Output = Float;

    /// Access the HSV component.
    #[inline]
    fn index(&self, index: Component) -> &Self::Output {
        &self.hsv[index.index()]
    }
}

impl std::hash::Hash for Color {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.hex.hash(state);
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.hex == other.hex
    }
}

impl Eq for Color {}

impl PartialOrd for Color {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Color {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.hex.cmp(&other.hex)
    }
}

impl std::fmt::Debug for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("Color({})", self.hex))
    }
}

impl std::fmt::Display for Color {
    /// Format this color as hashed hexadecimal code, e.g., `#ff0080`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("#{}", self.hex))
    }
}

#[cfg(feature = "svg")]
impl swatchsvg::Swatch for Color {
    fn hex_code(&self) -> &str {
        &self.hex
    }

    fn scale_hsv(&self, factors: [f64; 3]) -> Self {
        let [h, s, v] = factors;
        self.hsv_transform(h as Float, s as Float, v as Float)
    }
}

// ====================================================================================================================

/// A builder for colors whose representation is only known at run time.
///
/// If more than one representation is set, the hexadecimal code takes
/// precedence over RGB, which takes precedence over HSV. Only the chosen
/// representation is validated.
#[derive(Clone, Debug, Default)]
pub struct ColorBuilder {
    hex: Option<String>,
    rgb: Option<[Float; 3]>,
    hsv: Option<[Float; 3]>,
}

impl ColorBuilder {
    pub fn hex(&mut self, code: &str) -> &mut Self {
        self.hex = Some(code.to_owned());
        self
    }

    pub fn rgb(&mut self, rgb: [Float; 3]) -> &mut Self {
        self.rgb = Some(rgb);
        self
    }

    pub fn hsv(&mut self, hsv: [Float; 3]) -> &mut Self {
        self.hsv = Some(hsv);
        self
    }

    /// Build the color.
    ///
    /// This method fails with [`InvalidColorError::NoRepresentation`] if no
    /// representation has been set.
    pub fn build(&self) -> Result<Color, InvalidColorError> {
        if let Some(code) = &self.hex {
            Color::from_hex(code)
        } else if let Some([r, g, b]) = self.rgb {
            Color::from_rgb(r, g, b)
        } else if let Some([h, s, v]) = self.hsv {
            Color::from_hsv(h, s, v)
        } else {
            Err(InvalidColorError::NoRepresentation)
        }
    }
}

// ====================================================================================================================
