//! Helper module with the geometry options for swatch renderers.
//!
//! All renderers share one set of options. The swatch size is the radius of
//! the overlapping circles in a [`ColorStack`](crate::ColorStack), the
//! diameter or edge length of grid swatches, and the height of gradient bars.
//! Padding defaults to a fraction of the size that depends on the renderer.
//!
//!
//! # Example
//!
//! ```
//! # use swatchsvg::opt::Options;
//! let options = Options::builder()
//!     .size(24.0)
//!     .padding(4.0)
//!     .build();
//!
//! assert_eq!(options.size(), 24.0);
//! assert_eq!(options.padding(), Some(4.0));
//! assert_eq!(options.padding_or(0.5), 4.0);
//! ```

#[derive(Clone, Debug, PartialEq)]
struct OptionData {
    size: f64,
    padding: Option<f64>,
    bar_width: f64,
}

impl OptionData {
    pub const fn new() -> Self {
        Self {
            size: 32.0,
            padding: None,
            bar_width: 256.0,
        }
    }
}

/// A builder of options.
#[derive(Debug)]
pub struct OptionBuilder(OptionData);

impl OptionBuilder {
    /// Set the swatch size. Negative sizes become zero.
    pub fn size(&mut self, size: f64) -> &mut Self {
        self.0.size = size.max(0.0);
        self
    }

    /// Set the padding. Negative padding becomes zero.
    pub fn padding(&mut self, padding: f64) -> &mut Self {
        self.0.padding = Some(padding.max(0.0));
        self
    }

    /// Use the renderer's default padding.
    pub fn default_padding(&mut self) -> &mut Self {
        self.0.padding = None;
        self
    }

    /// Set the width of gradient bars. Negative widths become zero.
    pub fn bar_width(&mut self, width: f64) -> &mut Self {
        self.0.bar_width = width.max(0.0);
        self
    }

    /// Build the options.
    pub fn build(&self) -> Options {
        Options(self.0.clone())
    }
}

/// Options for swatch renderers.
///
/// By default, swatches have size 32, padding is the renderer's default, and
/// gradient bars are 256 wide.
#[derive(Clone, Debug, PartialEq)]
pub struct Options(OptionData);

impl Default for Options {
    fn default() -> Self {
        Options(OptionData::new())
    }
}

impl Options {
    /// Create a new options builder.
    pub fn builder() -> OptionBuilder {
        OptionBuilder(OptionData::new())
    }

    /// Create new options with the given size and padding.
    pub fn with_size(size: f64, padding: f64) -> Options {
        Self::builder().size(size).padding(padding).build()
    }

    /// Get the swatch size.
    pub fn size(&self) -> f64 {
        self.0.size
    }

    /// Get the padding, if set.
    pub fn padding(&self) -> Option<f64> {
        self.0.padding
    }

    /// Get the padding or, if not set, the size scaled by the factor.
    pub fn padding_or(&self, factor: f64) -> f64 {
        self.0.padding.unwrap_or(self.0.size * factor)
    }

    /// Get the width of gradient bars.
    pub fn bar_width(&self) -> f64 {
        self.0.bar_width
    }
}
