use tracing::debug;

use super::{Render, Swatch};
use crate::doc::{Canvas, Circle, Fill};
use crate::opt::Options;

/// Rows of overlapping circles, one row per group.
///
/// Each circle is offset from its predecessor by one radius, so neighbors
/// overlap by half. Rows are `2·radius + padding` apart and the whole stack
/// has a margin of `padding`. The default padding is half the radius.
///
/// ```
/// # use swatchsvg::{ColorStack, Render, Swatch};
/// # struct Gray(&'static str);
/// # impl Swatch for Gray {
/// #     fn hex_code(&self) -> &str { self.0 }
/// #     fn scale_hsv(&self, _: [f64; 3]) -> Self { Gray(self.0) }
/// # }
/// let stack = ColorStack::with_radius(32.0, 16.0);
/// let groups = vec![vec![Gray("333333"), Gray("666666")], vec![], vec![Gray("999999")]];
/// assert_eq!(stack.compute_size(&groups), (128.0, 176.0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStack {
    radius: f64,
    padding: f64,
}

impl ColorStack {
    /// Create a new color stack from the options.
    pub fn new(options: &Options) -> Self {
        Self::with_radius(options.size(), options.padding_or(0.5))
    }

    /// Create a new color stack with the radius and padding.
    pub const fn with_radius(radius: f64, padding: f64) -> Self {
        Self { radius, padding }
    }

    /// Get the distance between rows.
    fn row_step(&self) -> f64 {
        2.0 * self.radius + self.padding
    }
}

impl Default for ColorStack {
    fn default() -> Self {
        Self::new(&Options::default())
    }
}

impl Render for ColorStack {
    fn compute_size<S: Swatch>(&self, groups: &[Vec<S>]) -> (f64, f64) {
        let rows = groups.iter().filter(|group| !group.is_empty()).count();
        if rows == 0 {
            return (0.0, 0.0);
        }

        let columns = groups.iter().map(Vec::len).max().unwrap_or(0);
        let width = (columns + 1) as f64 * self.radius + 2.0 * self.padding;
        let height = rows as f64 * self.row_step() + self.padding;
        (width, height)
    }

    fn render<S: Swatch>(&self, groups: &[Vec<S>], canvas: &mut dyn Canvas) {
        let mut cy = self.padding + self.radius;
        let mut rows = 0;

        for group in groups.iter().filter(|group| !group.is_empty()) {
            canvas.begin_group(None);

            let mut cx = self.padding + self.radius;
            for swatch in group {
                canvas.circle(Circle::new(cx, cy, self.radius, Fill::color(swatch.hex_code())));
                cx += self.radius;
            }

            canvas.end_group();
            cy += self.row_step();
            rows += 1;
        }

        debug!(rows, radius = self.radius, "rendered color stack");
    }
}
