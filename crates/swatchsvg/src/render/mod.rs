//! Swatch renderers.
//!
//! A renderer lays out groups of swatches. Groups typically are the buckets of
//! a color classification, each sorted already, in display order.
//! [`Render::compute_size`] determines the view box and [`Render::render`]
//! draws onto a [`Canvas`]. Empty groups take no space.

mod bar;
mod grid;
mod stack;

pub use bar::GradientBar;
pub use grid::{BallGrid, CircleGrid, SquareGrid};
pub use stack::ColorStack;

use crate::doc::{Canvas, Document};

/// A color that can be rendered as a swatch.
pub trait Swatch: Sized {
    /// Get the color's six-digit, lower-case hexadecimal code without `#`.
    fn hex_code(&self) -> &str;

    /// Derive a tone by multiplying hue, saturation, and value by the factors,
    /// clamping the results into unit range.
    #[must_use = "method returns a new swatch and does not mutate original value"]
    fn scale_hsv(&self, factors: [f64; 3]) -> Self;
}

/// A swatch layout.
pub trait Render {
    /// Compute the width and height of the view box for the groups.
    fn compute_size<S: Swatch>(&self, groups: &[Vec<S>]) -> (f64, f64);

    /// Draw the groups onto the canvas.
    fn render<S: Swatch>(&self, groups: &[Vec<S>], canvas: &mut dyn Canvas);

    /// Render the groups into a new SVG document.
    fn to_document<S: Swatch>(&self, groups: &[Vec<S>]) -> Document {
        let (width, height) = self.compute_size(groups);
        let mut document = Document::new(width, height);
        self.render(groups, &mut document);
        document
    }
}

/// Compute the number of columns and rows of a near-square grid.
///
/// The grid has `floor(sqrt(count))` columns, with as many rows as needed. No
/// swatches make for an empty grid.
pub(crate) fn grid_size(count: usize) -> (usize, usize) {
    if count == 0 {
        return (0, 0);
    }

    let mut columns = (count as f64).sqrt() as usize;
    // Correct for rounding in the square root.
    while (columns + 1) * (columns + 1) <= count {
        columns += 1;
    }
    while count < columns * columns {
        columns -= 1;
    }

    (columns, count.div_ceil(columns))
}

/// Iterate over the swatches of all groups in order.
pub(crate) fn flatten<S>(groups: &[Vec<S>]) -> impl Iterator<Item = &S> {
    groups.iter().flat_map(|group| group.iter())
}
