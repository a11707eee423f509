use std::collections::HashSet;

use tracing::debug;

use super::{flatten, grid_size, Render, Swatch};
use crate::doc::{Canvas, Circle, Fill, Gradient, Rect};
use crate::opt::Options;

const HIGHLIGHT: [f64; 3] = [1.0, 0.5, 1.5];
const SHADOW: [f64; 3] = [1.0, 1.5, 0.5];

/// The layout shared by all grids.
///
/// Groups are flattened into one sequence of swatches, which fills a
/// near-square grid row by row. Each cell is `size + 2·padding` wide and
/// high, with the swatch centered inside.
#[derive(Clone, Copy, Debug, PartialEq)]
struct GridLayout {
    size: f64,
    cell: f64,
}

impl GridLayout {
    fn new(options: &Options) -> Self {
        let size = options.size();
        let padding = options.padding_or(0.125);
        Self {
            size,
            cell: size + 2.0 * padding,
        }
    }

    fn compute_size<S: Swatch>(&self, groups: &[Vec<S>]) -> (f64, f64) {
        let (columns, rows) = grid_size(flatten(groups).count());
        (columns as f64 * self.cell, rows as f64 * self.cell)
    }

    /// Invoke the callback with the center of each swatch's cell.
    fn each_cell<S: Swatch, F>(&self, groups: &[Vec<S>], mut callback: F) -> usize
    where
        F: FnMut(&S, f64, f64),
    {
        let count = flatten(groups).count();
        let (columns, _) = grid_size(count);
        let half = self.cell / 2.0;

        for (index, swatch) in flatten(groups).enumerate() {
            let column = index % columns;
            let row = index / columns;
            callback(
                swatch,
                column as f64 * self.cell + half,
                row as f64 * self.cell + half,
            );
        }

        count
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// A grid of solid circles.
///
/// The default padding is an eighth of the size, which leaves a quarter of
/// the size between neighboring circles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CircleGrid(GridLayout);

impl CircleGrid {
    pub fn new(options: &Options) -> Self {
        Self(GridLayout::new(options))
    }
}

impl Default for CircleGrid {
    fn default() -> Self {
        Self::new(&Options::default())
    }
}

impl Render for CircleGrid {
    fn compute_size<S: Swatch>(&self, groups: &[Vec<S>]) -> (f64, f64) {
        self.0.compute_size(groups)
    }

    fn render<S: Swatch>(&self, groups: &[Vec<S>], canvas: &mut dyn Canvas) {
        let radius = self.0.size / 2.0;

        canvas.begin_group(Some("circle-grid"));
        let count = self.0.each_cell(groups, |swatch, cx, cy| {
            let hex = swatch.hex_code();
            canvas.circle(
                Circle::new(cx, cy, radius, Fill::color(hex)).with_id(format!("circle-{}", hex)),
            );
        });
        canvas.end_group();

        debug!(count, "rendered circle grid");
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// A grid of solid squares.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SquareGrid(GridLayout);

impl SquareGrid {
    pub fn new(options: &Options) -> Self {
        Self(GridLayout::new(options))
    }
}

impl Default for SquareGrid {
    fn default() -> Self {
        Self::new(&Options::default())
    }
}

impl Render for SquareGrid {
    fn compute_size<S: Swatch>(&self, groups: &[Vec<S>]) -> (f64, f64) {
        self.0.compute_size(groups)
    }

    fn render<S: Swatch>(&self, groups: &[Vec<S>], canvas: &mut dyn Canvas) {
        let size = self.0.size;
        let half = size / 2.0;

        canvas.begin_group(Some("square-grid"));
        let count = self.0.each_cell(groups, |swatch, cx, cy| {
            let hex = swatch.hex_code();
            canvas.rect(
                Rect::new(cx - half, cy - half, size, size, Fill::color(hex))
                    .with_id(format!("square-{}", hex)),
            );
        });
        canvas.end_group();

        debug!(count, "rendered square grid");
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// A grid of shaded balls.
///
/// Each ball is filled with a radial gradient that runs from a highlight,
/// which is less saturated and brighter than the color, through the color
/// itself, to a shadow, which is more saturated and darker. The gradient's
/// focal point sits towards the top left.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BallGrid(GridLayout);

impl BallGrid {
    pub fn new(options: &Options) -> Self {
        Self(GridLayout::new(options))
    }

    fn gradient<S: Swatch>(id: String, swatch: &S) -> Gradient {
        let base = swatch.hex_code();
        Gradient::radial(id, 50.0, 25.0, 10.0)
            .with_stop(0.0, swatch.scale_hsv(HIGHLIGHT).hex_code())
            .with_stop(0.33, base)
            .with_stop(0.75, base)
            .with_stop(1.0, swatch.scale_hsv(SHADOW).hex_code())
    }
}

impl Default for BallGrid {
    fn default() -> Self {
        Self::new(&Options::default())
    }
}

impl Render for BallGrid {
    fn compute_size<S: Swatch>(&self, groups: &[Vec<S>]) -> (f64, f64) {
        self.0.compute_size(groups)
    }

    fn render<S: Swatch>(&self, groups: &[Vec<S>], canvas: &mut dyn Canvas) {
        let radius = self.0.size / 2.0;
        let mut defined = HashSet::new();

        canvas.begin_group(Some("ball-grid"));
        let count = self.0.each_cell(groups, |swatch, cx, cy| {
            let hex = swatch.hex_code();
            let gradient_id = format!("radgrad-{}", hex);

            if defined.insert(hex.to_owned()) {
                canvas.define(Self::gradient(gradient_id.clone(), swatch));
            }

            canvas.circle(
                Circle::new(cx, cy, radius, Fill::Gradient(gradient_id))
                    .with_id(format!("ball-{}", hex)),
            );
        });
        canvas.end_group();

        debug!(count, gradients = defined.len(), "rendered ball grid");
    }
}

// ====================================================================================================================
