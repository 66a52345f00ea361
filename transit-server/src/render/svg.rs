//! Minimal SVG document model.
//!
//! Only the elements the map needs: circles, polylines and text. Elements are
//! built with chained setters and rendered in insertion order.

use std::fmt::{self, Display};

use askama::Template;
use serde::Deserialize;

/// A paint value.
///
/// Deserializes from a color name (`"red"`), `[r, g, b]` or
/// `[r, g, b, opacity]`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "ColorRepr")]
pub enum Color {
    #[default]
    None,
    Named(String),
    Rgb(u8, u8, u8),
    Rgba(u8, u8, u8, f64),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ColorRepr {
    Named(String),
    Rgb((u8, u8, u8)),
    Rgba((u8, u8, u8, f64)),
}

impl From<ColorRepr> for Color {
    fn from(repr: ColorRepr) -> Self {
        match repr {
            ColorRepr::Named(name) => Color::Named(name),
            ColorRepr::Rgb((r, g, b)) => Color::Rgb(r, g, b),
            ColorRepr::Rgba((r, g, b, a)) => Color::Rgba(r, g, b, a),
        }
    }
}

impl From<&str> for Color {
    fn from(name: &str) -> Self {
        Color::Named(name.to_string())
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::None => f.write_str("none"),
            Color::Named(name) => f.write_str(name),
            Color::Rgb(r, g, b) => write!(f, "rgb({r},{g},{b})"),
            Color::Rgba(r, g, b, a) => write!(f, "rgba({r},{g},{b},{a})"),
        }
    }
}

/// A point in canvas coordinates. Also used for label offsets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(from = "[f64; 2]")]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeLineCap {
    Butt,
    Round,
    Square,
}

impl Display for StrokeLineCap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StrokeLineCap::Butt => "butt",
            StrokeLineCap::Round => "round",
            StrokeLineCap::Square => "square",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeLineJoin {
    Arcs,
    Bevel,
    Miter,
    MiterClip,
    Round,
}

impl Display for StrokeLineJoin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StrokeLineJoin::Arcs => "arcs",
            StrokeLineJoin::Bevel => "bevel",
            StrokeLineJoin::Miter => "miter",
            StrokeLineJoin::MiterClip => "miter-clip",
            StrokeLineJoin::Round => "round",
        })
    }
}

/// Fill and stroke attributes shared by every element. Unset attributes are
/// not written.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Paint {
    fill: Option<Color>,
    stroke: Option<Color>,
    stroke_width: Option<f64>,
    line_cap: Option<StrokeLineCap>,
    line_join: Option<StrokeLineJoin>,
}

impl Paint {
    /// The attributes that are set, in output order.
    fn attrs(&self) -> Vec<Attr> {
        let mut attrs = Vec::new();
        if let Some(fill) = &self.fill {
            attrs.push(Attr::new("fill", fill));
        }
        if let Some(stroke) = &self.stroke {
            attrs.push(Attr::new("stroke", stroke));
        }
        if let Some(width) = self.stroke_width {
            attrs.push(Attr::new("stroke-width", width));
        }
        if let Some(cap) = self.line_cap {
            attrs.push(Attr::new("stroke-linecap", cap));
        }
        if let Some(join) = self.line_join {
            attrs.push(Attr::new("stroke-linejoin", join));
        }
        attrs
    }
}

/// A rendered `name="value"` pair; the template escapes the value.
#[derive(Debug, Clone, PartialEq)]
struct Attr {
    name: &'static str,
    value: String,
}

impl Attr {
    fn new(name: &'static str, value: impl Display) -> Self {
        Self {
            name,
            value: value.to_string(),
        }
    }
}

/// Chained setters for the shared paint attributes.
pub trait Painted: Sized {
    fn paint_mut(&mut self) -> &mut Paint;

    fn fill(mut self, color: impl Into<Color>) -> Self {
        self.paint_mut().fill = Some(color.into());
        self
    }

    fn stroke(mut self, color: impl Into<Color>) -> Self {
        self.paint_mut().stroke = Some(color.into());
        self
    }

    fn stroke_width(mut self, width: f64) -> Self {
        self.paint_mut().stroke_width = Some(width);
        self
    }

    fn line_cap(mut self, cap: StrokeLineCap) -> Self {
        self.paint_mut().line_cap = Some(cap);
        self
    }

    fn line_join(mut self, join: StrokeLineJoin) -> Self {
        self.paint_mut().line_join = Some(join);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    center: Point,
    radius: f64,
    paint: Paint,
}

impl Circle {
    pub fn new(center: Point, radius: f64) -> Self {
        Self {
            center,
            radius,
            paint: Paint::default(),
        }
    }
}

impl Painted for Circle {
    fn paint_mut(&mut self) -> &mut Paint {
        &mut self.paint
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polyline {
    points: Vec<Point>,
    paint: Paint,
}

impl Polyline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn point(mut self, point: Point) -> Self {
        self.points.push(point);
        self
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The `points` attribute: `x,y` pairs separated by spaces.
    fn points_attr(&self) -> String {
        self.points
            .iter()
            .map(|p| format!("{},{}", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl FromIterator<Point> for Polyline {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
            paint: Paint::default(),
        }
    }
}

impl Painted for Polyline {
    fn paint_mut(&mut self) -> &mut Paint {
        &mut self.paint
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Text {
    position: Point,
    offset: Point,
    font_size: u32,
    font_family: Option<String>,
    font_weight: Option<String>,
    data: String,
    paint: Paint,
}

impl Text {
    pub fn new(data: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            font_size: 1,
            ..Self::default()
        }
    }

    pub fn position(mut self, position: Point) -> Self {
        self.position = position;
        self
    }

    /// Offset relative to the position (`dx`, `dy`).
    pub fn offset(mut self, offset: Point) -> Self {
        self.offset = offset;
        self
    }

    pub fn font_size(mut self, size: u32) -> Self {
        self.font_size = size;
        self
    }

    pub fn font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = Some(family.into());
        self
    }

    pub fn font_weight(mut self, weight: impl Into<String>) -> Self {
        self.font_weight = Some(weight.into());
        self
    }

    pub fn data(&self) -> &str {
        &self.data
    }

    fn font_attrs(&self) -> Vec<Attr> {
        let mut attrs = Vec::new();
        if let Some(family) = &self.font_family {
            attrs.push(Attr::new("font-family", family));
        }
        if let Some(weight) = &self.font_weight {
            attrs.push(Attr::new("font-weight", weight));
        }
        attrs
    }
}

impl Painted for Text {
    fn paint_mut(&mut self) -> &mut Paint {
        &mut self.paint
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Circle(Circle),
    Polyline(Polyline),
    Text(Text),
}

impl From<Circle> for Element {
    fn from(circle: Circle) -> Self {
        Element::Circle(circle)
    }
}

impl From<Polyline> for Element {
    fn from(polyline: Polyline) -> Self {
        Element::Polyline(polyline)
    }
}

impl From<Text> for Element {
    fn from(text: Text) -> Self {
        Element::Text(text)
    }
}

/// An SVG document: elements rendered in insertion order through
/// `templates/map.svg`. Text content and attribute values are escaped by the
/// template.
#[derive(Debug, Clone, Default, PartialEq, Template)]
#[template(path = "map.svg", escape = "html")]
pub struct Document {
    elements: Vec<Element>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, element: impl Into<Element>) {
        self.elements.push(element.into());
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl<E: Into<Element>> Extend<E> for Document {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        self.elements.extend(iter.into_iter().map(Into::into));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_display() {
        assert_eq!(Color::None.to_string(), "none");
        assert_eq!(Color::from("red").to_string(), "red");
        assert_eq!(Color::Rgb(255, 16, 12).to_string(), "rgb(255,16,12)");
        assert_eq!(Color::Rgba(255, 200, 23, 0.85).to_string(), "rgba(255,200,23,0.85)");
    }

    #[test]
    fn color_from_json() {
        let colors: Vec<Color> =
            serde_json::from_str(r#"["green", [255, 160, 0], [255, 200, 23, 0.5]]"#).unwrap();
        assert_eq!(
            colors,
            vec![
                Color::Named("green".into()),
                Color::Rgb(255, 160, 0),
                Color::Rgba(255, 200, 23, 0.5),
            ]
        );
    }

    #[test]
    fn color_rejects_bad_arrays() {
        assert!(serde_json::from_str::<Color>("[1, 2]").is_err());
        assert!(serde_json::from_str::<Color>("[300, 0, 0]").is_err());
        assert!(serde_json::from_str::<Color>("12").is_err());
    }

    #[test]
    fn point_from_json() {
        let p: Point = serde_json::from_str("[7, -3.5]").unwrap();
        assert_eq!(p, Point::new(7.0, -3.5));
    }

    /// Render a one-element document and return the element's line.
    fn render_one(element: impl Into<Element>) -> String {
        let mut doc = Document::new();
        doc.add(element);
        let svg = doc.render().unwrap();
        let line = svg.lines().nth(2).unwrap();
        line.strip_prefix("  ").unwrap().to_string()
    }

    #[test]
    fn circle_rendering() {
        let circle = Circle::new(Point::new(20.0, 20.5), 5.0).fill("white");
        assert_eq!(
            render_one(circle),
            r#"<circle cx="20" cy="20.5" r="5" fill="white"/>"#
        );
    }

    #[test]
    fn polyline_rendering() {
        let line = Polyline::new()
            .point(Point::new(0.0, 0.0))
            .point(Point::new(10.0, 5.5))
            .fill(Color::None)
            .stroke(Color::Rgb(1, 2, 3))
            .stroke_width(14.0)
            .line_cap(StrokeLineCap::Round)
            .line_join(StrokeLineJoin::Round);
        assert_eq!(
            render_one(line),
            r#"<polyline points="0,0 10,5.5" fill="none" stroke="rgb(1,2,3)" stroke-width="14" stroke-linecap="round" stroke-linejoin="round"/>"#
        );
    }

    #[test]
    fn text_rendering_escapes_data() {
        let text = Text::new("Tom & Jerry")
            .position(Point::new(1.0, 2.0))
            .offset(Point::new(7.0, -3.0))
            .font_size(20)
            .font_family("Verdana")
            .font_weight("bold")
            .fill("black");
        assert_eq!(
            render_one(text),
            r#"<text fill="black" x="1" y="2" dx="7" dy="-3" font-size="20" font-family="Verdana" font-weight="bold">Tom &amp; Jerry</text>"#
        );
    }

    #[test]
    fn markup_in_text_and_attributes_is_escaped() {
        let text = Text::new(r#"<"Tom" & 'Jerry'>"#).fill(r#"red" onload="x"#);
        let line = render_one(text);

        assert!(line.contains(">&lt;&quot;Tom&quot; &amp; "));
        assert!(line.contains("&gt;</text>"));
        assert!(!line.contains("'Jerry'"));
        assert!(line.contains(r#"fill="red&quot; onload=&quot;x""#));
    }

    #[test]
    fn empty_document() {
        let doc = Document::new();
        assert!(doc.is_empty());
        assert_eq!(
            doc.render().unwrap().trim_end(),
            "<?xml version=\"1.0\" encoding=\"UTF-8\" ?>\n\
             <svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\">\n\
             </svg>"
        );
    }

    #[test]
    fn document_keeps_insertion_order() {
        let mut doc = Document::new();
        doc.add(Text::new("b"));
        doc.add(Circle::new(Point::default(), 1.0));
        doc.extend([Text::new("a")]);

        assert_eq!(doc.len(), 3);
        assert!(matches!(doc.elements()[0], Element::Text(ref t) if t.data() == "b"));
        assert!(matches!(doc.elements()[1], Element::Circle(_)));
        assert!(matches!(doc.elements()[2], Element::Text(ref t) if t.data() == "a"));

        let rendered = doc.render().unwrap();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 6);
        assert!(lines[2].starts_with("  <text") && lines[2].ends_with(">b</text>"));
        assert!(lines[3].starts_with("  <circle"));
        assert!(lines[4].ends_with(">a</text>"));
        assert_eq!(lines[5], "</svg>");
    }
}
