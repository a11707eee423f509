//! Drawing targets and the SVG document.
//!
//! Renderers draw through the [`Canvas`] trait, which has just enough
//! operations for swatches: grouping, circles, rectangles, and gradient
//! definitions. [`Document`] is the canvas that produces SVG markup, using the
//! [`svg`] crate's element tree.
//!
//! Coordinates are printed with Rust's shortest round-trip representation, so
//! whole numbers have no decimal point:
//!
//! ```
//! # use swatchsvg::doc::{Canvas, Circle, Document, Fill};
//! let mut doc = Document::new(64.0, 64.0);
//! doc.begin_group(None);
//! doc.circle(Circle::new(32.0, 32.0, 16.0, Fill::color("c0ffee")));
//! doc.end_group();
//!
//! let svg = doc.to_string();
//! assert!(svg.starts_with("<svg"));
//! assert!(svg.contains(r#"viewBox="0 0 64 64""#));
//! assert!(svg.contains(r#"cx="32""#));
//! assert!(svg.contains(r##"fill="#c0ffee""##));
//! ```

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::io;

use svg::node::element;
use svg::Node;

/// The SVG namespace.
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// How to fill a shape.
///
/// The [`Display`] implementation produces the `fill` attribute's value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Fill {
    /// A solid color, given as six-digit hexadecimal code without `#`.
    Color(String),
    /// A gradient, given by its identifier.
    Gradient(String),
}

impl Fill {
    /// Create a solid fill from a hexadecimal code without `#`.
    pub fn color(hex: &str) -> Self {
        Self::Color(hex.to_owned())
    }

    /// Create a gradient fill that references the identifier.
    pub fn gradient(id: &str) -> Self {
        Self::Gradient(id.to_owned())
    }
}

impl Display for Fill {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Color(hex) => write!(f, "#{}", hex),
            Self::Gradient(id) => write!(f, "url(#{})", id),
        }
    }
}

// --------------------------------------------------------------------------------------------------------------------

fn assign_id<N: Node>(node: &mut N, id: Option<&str>) {
    if let Some(id) = id {
        node.assign("id", id);
    }
}

/// A circle.
#[derive(Clone, Debug, PartialEq)]
pub struct Circle {
    pub id: Option<String>,
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
    pub fill: Fill,
}

impl Circle {
    /// Create a new circle without identifier.
    pub fn new(cx: f64, cy: f64, r: f64, fill: Fill) -> Self {
        Self {
            id: None,
            cx,
            cy,
            r,
            fill,
        }
    }

    /// Set the identifier.
    #[must_use = "the circle is consumed and returned"]
    pub fn with_id(mut self, id: String) -> Self {
        self.id = Some(id);
        self
    }

    fn to_element(&self) -> element::Circle {
        let mut circle = element::Circle::new()
            .set("cx", self.cx)
            .set("cy", self.cy)
            .set("r", self.r)
            .set("stroke", "none")
            .set("fill", self.fill.to_string());
        assign_id(&mut circle, self.id.as_deref());
        circle
    }
}

/// A rectangle.
#[derive(Clone, Debug, PartialEq)]
pub struct Rect {
    pub id: Option<String>,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: Fill,
}

impl Rect {
    /// Create a new rectangle without identifier.
    pub fn new(x: f64, y: f64, width: f64, height: f64, fill: Fill) -> Self {
        Self {
            id: None,
            x,
            y,
            width,
            height,
            fill,
        }
    }

    /// Set the identifier.
    #[must_use = "the rectangle is consumed and returned"]
    pub fn with_id(mut self, id: String) -> Self {
        self.id = Some(id);
        self
    }

    fn to_element(&self) -> element::Rectangle {
        let mut rect = element::Rectangle::new()
            .set("x", self.x)
            .set("y", self.y)
            .set("width", self.width)
            .set("height", self.height)
            .set("stroke", "none")
            .set("fill", self.fill.to_string());
        assign_id(&mut rect, self.id.as_deref());
        rect
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// A gradient's color stop.
#[derive(Clone, Debug, PartialEq)]
pub struct Stop {
    /// The offset as fraction of the gradient vector.
    pub offset: f64,
    /// The color as six-digit hexadecimal code without `#`.
    pub color: String,
}

impl Stop {
    pub fn new(offset: f64, color: &str) -> Self {
        Self {
            offset,
            color: color.to_owned(),
        }
    }

    fn to_element(&self) -> element::Stop {
        element::Stop::new()
            .set("offset", self.offset)
            .set("stop-color", format!("#{}", self.color))
    }
}

/// The shape of a gradient.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GradientKind {
    /// A left-to-right linear gradient across the bounding box.
    Linear,
    /// A radial gradient centered on the bounding box, with the focal point
    /// moved towards the top left, as if lit from there. All values are
    /// percentages.
    Radial {
        center: f64,
        focus: f64,
        focal_radius: f64,
    },
}

/// A gradient definition.
#[derive(Clone, Debug, PartialEq)]
pub struct Gradient {
    pub id: String,
    pub kind: GradientKind,
    pub stops: Vec<Stop>,
}

impl Gradient {
    /// Create a new linear gradient without stops.
    pub fn linear(id: String) -> Self {
        Self {
            id,
            kind: GradientKind::Linear,
            stops: Vec::new(),
        }
    }

    /// Create a new radial gradient without stops.
    pub fn radial(id: String, center: f64, focus: f64, focal_radius: f64) -> Self {
        Self {
            id,
            kind: GradientKind::Radial {
                center,
                focus,
                focal_radius,
            },
            stops: Vec::new(),
        }
    }

    /// Add a stop.
    #[must_use = "the gradient is consumed and returned"]
    pub fn with_stop(mut self, offset: f64, color: &str) -> Self {
        self.stops.push(Stop::new(offset, color));
        self
    }

    fn with_stops<N: Node>(&self, mut node: N) -> N {
        for stop in &self.stops {
            node.append(stop.to_element());
        }
        node
    }

    fn append_to(&self, defs: &mut element::Definitions) {
        match self.kind {
            GradientKind::Linear => {
                defs.append(self.with_stops(element::LinearGradient::new().set("id", self.id.as_str())));
            }
            GradientKind::Radial {
                center,
                focus,
                focal_radius,
            } => {
                let gradient = element::RadialGradient::new()
                    .set("id", self.id.as_str())
                    .set("cx", format!("{}%", center))
                    .set("cy", format!("{}%", center))
                    .set("fx", format!("{}%", focus))
                    .set("fy", format!("{}%", focus))
                    .set("fr", format!("{}%", focal_radius));
                defs.append(self.with_stops(gradient));
            }
        }
    }
}

// ====================================================================================================================

/// A drawing target.
///
/// Groups nest. Implementations decide how to handle an unbalanced
/// [`Canvas::end_group`].
pub trait Canvas {
    /// Start a new group, optionally with an identifier.
    fn begin_group(&mut self, id: Option<&str>);

    /// End the innermost group.
    fn end_group(&mut self);

    /// Draw a circle.
    fn circle(&mut self, circle: Circle);

    /// Draw a rectangle.
    fn rect(&mut self, rect: Rect);

    /// Define a gradient, which shapes can then reference by identifier.
    fn define(&mut self, gradient: Gradient);
}

#[derive(Clone, Debug, PartialEq)]
enum Item {
    BeginGroup(Option<String>),
    EndGroup,
    Circle(Circle),
    Rect(Rect),
}

// Append the node to the innermost open group or, without one, the root.
fn place<N>(root: &mut svg::Document, open: &mut [element::Group], node: N)
where
    N: Into<Box<dyn Node>>,
{
    if let Some(group) = open.last_mut() {
        group.append(node);
        return;
    }
    root.append(node);
}

/// An SVG document.
///
/// The document has a view box anchored at the origin. It records drawing
/// operations and builds the [`svg`] element tree when written. Gradient
/// definitions go into a leading `<defs>` element. Unbalanced group ends are
/// ignored and groups still open when the document is written are closed.
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    width: f64,
    height: f64,
    defs: Vec<Gradient>,
    body: Vec<Item>,
    depth: usize,
}

impl Document {
    /// Create a new, empty document with the view box size.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            defs: Vec::new(),
            body: Vec::new(),
            depth: 0,
        }
    }

    /// Get the gradient definitions.
    pub fn definitions(&self) -> &[Gradient] {
        &self.defs
    }

    /// Count the shapes drawn so far.
    pub fn shape_count(&self) -> usize {
        self.body
            .iter()
            .filter(|item| matches!(item, Item::Circle(_) | Item::Rect(_)))
            .count()
    }

    /// Build the element tree.
    fn to_svg(&self) -> svg::Document {
        let mut root = svg::Document::new()
            .set("viewBox", format!("0 0 {} {}", self.width, self.height))
            .set("xmlns", SVG_NAMESPACE);

        if !self.defs.is_empty() {
            let mut defs = element::Definitions::new();
            for gradient in &self.defs {
                gradient.append_to(&mut defs);
            }
            root.append(defs);
        }

        let mut open: Vec<element::Group> = Vec::new();
        for item in &self.body {
            match item {
                Item::BeginGroup(id) => {
                    let mut group = element::Group::new();
                    assign_id(&mut group, id.as_deref());
                    open.push(group);
                }
                Item::EndGroup => {
                    if let Some(group) = open.pop() {
                        place(&mut root, &mut open, group);
                    }
                }
                Item::Circle(circle) => place(&mut root, &mut open, circle.to_element()),
                Item::Rect(rect) => place(&mut root, &mut open, rect.to_element()),
            }
        }

        while let Some(group) = open.pop() {
            place(&mut root, &mut open, group);
        }

        root
    }

    /// Write the SVG markup.
    ///
    /// # Errors
    ///
    /// This method fails only if the writer fails.
    pub fn write_to<W: io::Write>(&self, writer: &mut W) -> io::Result<()> {
        svg::write(writer, &self.to_svg())
    }
}

impl Canvas for Document {
    fn begin_group(&mut self, id: Option<&str>) {
        self.depth += 1;
        self.body.push(Item::BeginGroup(id.map(str::to_owned)));
    }

    fn end_group(&mut self) {
        if 0 < self.depth {
            self.depth -= 1;
            self.body.push(Item::EndGroup);
        }
    }

    fn circle(&mut self, circle: Circle) {
        self.body.push(Item::Circle(circle));
    }

    fn rect(&mut self, rect: Rect) {
        self.body.push(Item::Rect(rect));
    }

    fn define(&mut self, gradient: Gradient) {
        self.defs.push(gradient);
    }
}

impl Display for Document {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.to_svg(), f)
    }
}

// ====================================================================================================================

/// Markup comparison for tests, independent of attribute order, whitespace
/// between tags, and self-closing tags.
#[cfg(test)]
pub(crate) mod markup {
    /// Split markup into tags. Attributes are sorted by name and a
    /// self-closing tag becomes a start tag followed by an end tag.
    pub(crate) fn tags(markup: &str) -> Vec<String> {
        let mut tags = Vec::new();
        let mut rest = markup;

        while let Some(start) = rest.find('<') {
            let Some(length) = rest[start..].find('>') else {
                break;
            };
            let tag = &rest[start + 1..start + length];
            rest = &rest[start + length + 1..];

            if let Some(name) = tag.strip_prefix('/') {
                tags.push(format!("/{}", name.trim()));
                continue;
            }

            let empty = tag.ends_with('/');
            let tag = tag.trim_end_matches('/').trim();
            let (name, mut attributes) = tag.split_once(char::is_whitespace).unwrap_or((tag, ""));

            let mut pairs = Vec::new();
            while let Some((key, value)) = attributes.split_once('=') {
                let Some(quote) = value.chars().next() else {
                    break;
                };
                let Some((value, remainder)) = value[1..].split_once(quote) else {
                    break;
                };
                pairs.push(format!("{}={}", key.trim(), value));
                attributes = remainder;
            }
            pairs.sort();

            let mut normalized = name.to_owned();
            for pair in pairs {
                normalized.push(' ');
                normalized.push_str(&pair);
            }
            tags.push(normalized);
            if empty {
                tags.push(format!("/{}", name));
            }
        }

        tags
    }

    /// Determine whether the markup contains the other markup's tags as a
    /// contiguous run.
    pub(crate) fn contains(markup: &str, other: &str) -> bool {
        let haystack = tags(markup);
        let needle = tags(other);
        needle.is_empty() || haystack.windows(needle.len()).any(|run| run == needle.as_slice())
    }

    #[test]
    fn test_tags() {
        assert_eq!(
            tags("<a z=\"1\" b='2'/>\n<c>\n</c>"),
            ["a b=2 z=1", "/a", "c", "/c"]
        );
        assert!(contains("<a><b x=\"0\"/></a>", "<b x=\"0\"></b>"));
        assert!(!contains("<a><b x=\"0\"/></a>", "<b x=\"1\"/>"));
    }
}

#[cfg(test)]
mod test {
    use super::markup::{contains, tags};
    use super::{Canvas, Circle, Document, Fill, Gradient, Rect};

    fn single<F: FnOnce(&mut Document)>(draw: F) -> String {
        let mut doc = Document::new(10.0, 10.0);
        draw(&mut doc);
        doc.to_string()
    }

    #[test]
    fn test_elements() {
        let svg = single(|doc| doc.circle(Circle::new(48.0, 48.0, 32.0, Fill::color("ff0000"))));
        assert!(contains(
            &svg,
            r##"<circle cx="48" cy="48" r="32" stroke="none" fill="#ff0000" />"##
        ));

        let svg = single(|doc| {
            doc.circle(
                Circle::new(2.5, 3.0, 1.25, Fill::gradient("radgrad-ff0000"))
                    .with_id("ball-ff0000".to_owned()),
            )
        });
        assert!(contains(
            &svg,
            r#"<circle id="ball-ff0000" cx="2.5" cy="3" r="1.25" stroke="none" fill="url(#radgrad-ff0000)" />"#
        ));

        let svg = single(|doc| {
            doc.rect(
                Rect::new(4.0, 4.0, 32.0, 32.0, Fill::color("00ff00"))
                    .with_id("square-00ff00".to_owned()),
            )
        });
        assert!(contains(
            &svg,
            r##"<rect id="square-00ff00" x="4" y="4" width="32" height="32" stroke="none" fill="#00ff00" />"##
        ));
    }

    #[test]
    fn test_gradients() {
        let svg = single(|doc| {
            doc.define(
                Gradient::radial("radgrad-808080".to_owned(), 50.0, 25.0, 10.0)
                    .with_stop(0.0, "c0c0c0")
                    .with_stop(1.0, "404040"),
            )
        });
        assert!(contains(
            &svg,
            concat!(
                r#"<defs><radialGradient id="radgrad-808080" cx="50%" cy="50%" fx="25%" fy="25%" fr="10%">"#,
                r##"<stop offset="0" stop-color="#c0c0c0" />"##,
                r##"<stop offset="1" stop-color="#404040" />"##,
                "</radialGradient></defs>"
            )
        ));

        let svg = single(|doc| doc.define(Gradient::linear("bar-0".to_owned()).with_stop(0.5, "ffffff")));
        assert!(contains(
            &svg,
            r##"<linearGradient id="bar-0"><stop offset="0.5" stop-color="#ffffff" /></linearGradient>"##
        ));
    }

    #[test]
    fn test_document() -> std::io::Result<()> {
        let mut doc = Document::new(10.0, 20.0);
        assert_eq!(
            tags(&doc.to_string()),
            tags(r#"<svg viewBox="0 0 10 20" xmlns="http://www.w3.org/2000/svg"></svg>"#)
        );

        doc.end_group();
        doc.define(Gradient::linear("g".to_owned()));
        doc.begin_group(Some("outer"));
        doc.begin_group(None);
        doc.rect(Rect::new(0.0, 0.0, 10.0, 20.0, Fill::gradient("g")));
        doc.end_group();
        assert_eq!(doc.shape_count(), 1);
        assert_eq!(doc.definitions().len(), 1);

        let expected = tags(concat!(
            r#"<svg viewBox="0 0 10 20" xmlns="http://www.w3.org/2000/svg">"#,
            r#"<defs><linearGradient id="g"></linearGradient></defs>"#,
            r#"<g id="outer"><g><rect x="0" y="0" width="10" height="20" stroke="none" fill="url(#g)" /></g></g>"#,
            "</svg>"
        ));
        let svg = doc.to_string();
        assert_eq!(tags(&svg), expected);

        let mut buffer = Vec::new();
        doc.write_to(&mut buffer)?;
        assert_eq!(String::from_utf8_lossy(&buffer), svg);
        Ok(())
    }
}
