use tracing::debug;

use super::{Render, Swatch};
use crate::doc::{Canvas, Fill, Gradient, Rect};
use crate::opt::Options;

/// One horizontal gradient bar per group.
///
/// A bar is as wide as the options' bar width and as high as the swatch size.
/// Its gradient has one stop per swatch, with the stop for swatch `i` of `n`
/// at offset `(i + 1) / n`. Hence the first color fills the bar's leading
/// `1 / n` and the last color sits at the trailing edge. Bars have no padding.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientBar {
    width: f64,
    height: f64,
}

impl GradientBar {
    pub fn new(options: &Options) -> Self {
        Self {
            width: options.bar_width(),
            height: options.size(),
        }
    }
}

impl Default for GradientBar {
    fn default() -> Self {
        Self::new(&Options::default())
    }
}

impl Render for GradientBar {
    fn compute_size<S: Swatch>(&self, groups: &[Vec<S>]) -> (f64, f64) {
        let rows = groups.iter().filter(|group| !group.is_empty()).count();
        if rows == 0 {
            (0.0, 0.0)
        } else {
            (self.width, rows as f64 * self.height)
        }
    }

    fn render<S: Swatch>(&self, groups: &[Vec<S>], canvas: &mut dyn Canvas) {
        let mut rows = 0;

        for group in groups.iter().filter(|group| !group.is_empty()) {
            let gradient_id = format!("lingrad-{}", rows);
            let count = group.len() as f64;

            let gradient = group.iter().enumerate().fold(
                Gradient::linear(gradient_id.clone()),
                |gradient, (index, swatch)| {
                    gradient.with_stop((index + 1) as f64 / count, swatch.hex_code())
                },
            );

            canvas.define(gradient);
            canvas.rect(
                Rect::new(
                    0.0,
                    rows as f64 * self.height,
                    self.width,
                    self.height,
                    Fill::Gradient(gradient_id),
                )
                .with_id(format!("bar-{}", rows)),
            );
            rows += 1;
        }

        debug!(rows, width = self.width, "rendered gradient bars");
    }
}
