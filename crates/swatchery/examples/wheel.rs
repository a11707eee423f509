//! # wheel: Rendering a Swatch Card
//!
//! This example groups hex codes into the grays and the basic hue wheel,
//! orders each group by the hue/luminance step key, and writes the result as
//! an SVG document to standard output. The first argument selects the layout,
//! which is one of `stack`, `circles`, `squares`, `balls`, or `bars`. Any
//! further arguments are hex codes, which replace the built-in palette. Colors that fit
//! no bucket are logged as warnings on standard error. Set `RUST_LOG=debug` to
//! trace the grouping and rendering, too.
use std::io::Write;

use swatchery::collect::{basic_hue_wheel, grays_then};
use swatchery::group::group_hex_codes;
use swatchery::sort::{Order, SortKey};
use swatchery::Color;
use swatchsvg::opt::Options;
use swatchsvg::{BallGrid, CircleGrid, ColorStack, GradientBar, Render, SquareGrid};
use tracing::warn;
use tracing_subscriber::EnvFilter;

const PALETTE: [&str; 24] = [
    "#000", "#444", "#888", "#ccc", "#fff", "#c0ffee", "#f00", "#c33", "#f80", "#b85", "#ff0",
    "#bb5", "#8f0", "#0f0", "#5b5", "#0f8", "#0ff", "#5bb", "#08f", "#00f", "#55b", "#80f",
    "#f0f", "#b5b",
];

fn emit<R: Render>(renderer: &R, groups: &[Vec<Color>]) -> std::io::Result<()> {
    let mut stdout = std::io::stdout().lock();
    renderer.to_document(groups).write_to(&mut stdout)?;
    writeln!(stdout)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let layout = args.next().unwrap_or_else(|| "stack".to_string());
    let codes: Vec<String> = args.collect();

    let buckets = grays_then(basic_hue_wheel());
    let grouping = if codes.is_empty() {
        group_hex_codes(PALETTE, &buckets)?
    } else {
        group_hex_codes(&codes, &buckets)?
    };

    for color in grouping.unmatched() {
        warn!(%color, "color fits no bucket");
    }

    let groups = grouping.into_sorted_groups(SortKey::STEP, Order::Descending);
    let options = Options::with_size(32.0, 16.0);

    match layout.as_str() {
        "stack" => emit(&ColorStack::new(&options), &groups)?,
        "circles" => emit(&CircleGrid::new(&options), &groups)?,
        "squares" => emit(&SquareGrid::new(&options), &groups)?,
        "balls" => emit(&BallGrid::new(&options), &groups)?,
        "bars" => emit(&GradientBar::new(&options), &groups)?,
        other => return Err(format!("unknown layout {}", other).into()),
    }

    Ok(())
}
