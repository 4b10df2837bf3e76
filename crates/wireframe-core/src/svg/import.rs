//! SVG import.
//!
//! Walks the parsed document in order and maps `rect`, `circle`, `line` and
//! `text` elements to shapes, flattening groups and ignoring transforms.
//! Everything else is skipped.

use super::{BACKGROUND_ROLE, SvgError, SvgResult};
use crate::shapes::{
    Circle, Line, Rectangle, SerializableColor, Shape, ShapeStyle, Text, sanitize_extent,
};
use kurbo::Point;
use roxmltree::{Document, Node, ParsingOptions};

/// Values used where the document leaves style unspecified.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportOptions {
    /// Style for missing or unparseable style attributes.
    pub style: ShapeStyle,
    /// Font size for text without a `font-size`.
    pub font_size: f64,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            style: ShapeStyle::default(),
            font_size: Text::DEFAULT_FONT_SIZE,
        }
    }
}

/// Parse SVG text into shapes, in document order.
///
/// Fails when the input is not well-formed XML or its root element is not
/// `<svg>`.
pub fn import_document(svg: &str, options: &ImportOptions) -> SvgResult<Vec<Shape>> {
    let parse_options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let doc = Document::parse_with_options(svg, parse_options)
        .map_err(|e| SvgError::Malformed(e.to_string()))?;

    let root = doc.root_element();
    if root.tag_name().name() != "svg" {
        return Err(SvgError::MissingRoot);
    }

    let mut shapes = Vec::new();
    let mut skipped = 0usize;
    for node in root.descendants().filter(Node::is_element) {
        if node == root || inside_text(node) {
            continue;
        }
        match element_shape(node, options) {
            Some(shape) => shapes.push(shape),
            None => skipped += 1,
        }
    }

    log::info!(
        "imported {} shapes from SVG ({} other elements skipped)",
        shapes.len(),
        skipped
    );
    Ok(shapes)
}

/// Whether `node` is markup nested in a `<text>` element, such as `<tspan>`.
fn inside_text(node: Node) -> bool {
    node.ancestors()
        .skip(1)
        .any(|a| a.is_element() && a.tag_name().name() == "text")
}

fn element_shape(node: Node, options: &ImportOptions) -> Option<Shape> {
    let el = Element(node);
    let shape = match node.tag_name().name() {
        "rect" => {
            if el.attr("data-role") == Some(BACKGROUND_ROLE) {
                return None;
            }
            let mut rect = Rectangle::new(
                Point::new(el.number("x"), el.number("y")),
                el.number("width"),
                el.number("height"),
            );
            rect.style = el.style(&options.style);
            Shape::Rectangle(rect)
        }
        "circle" => {
            let mut circle =
                Circle::new(Point::new(el.number("cx"), el.number("cy")), el.number("r"));
            circle.style = el.style(&options.style);
            Shape::Circle(circle)
        }
        "line" => {
            let mut line = Line::new(
                Point::new(el.number("x1"), el.number("y1")),
                Point::new(el.number("x2"), el.number("y2")),
            );
            line.style = el.style(&options.style);
            Shape::Line(line)
        }
        "text" => {
            // Character data of the element and any nested spans
            let content: String = node
                .descendants()
                .filter(Node::is_text)
                .filter_map(|n| n.text())
                .collect();
            let mut text = Text::new(Point::new(el.number("x"), el.number("y")), content);
            text.set_font_size(el.number_or("font-size", options.font_size));
            text.style = el.style(&options.style);
            Shape::Text(text)
        }
        _ => return None,
    };
    Some(shape)
}

/// Attribute access for a shape element.
#[derive(Clone, Copy)]
struct Element<'a, 'input>(Node<'a, 'input>);

impl<'a> Element<'a, '_> {
    fn attr(&self, name: &str) -> Option<&'a str> {
        self.0.attribute(name)
    }

    /// Style property from the `style` attribute, falling back to the
    /// presentation attribute of the same name.
    fn property(&self, name: &str) -> Option<&'a str> {
        self.attr("style")
            .and_then(|style| {
                style.split(';').find_map(|decl| {
                    let (key, value) = decl.split_once(':')?;
                    (key.trim() == name).then(|| value.trim())
                })
            })
            .or_else(|| self.attr(name))
    }

    fn number(&self, name: &str) -> f64 {
        self.number_or(name, 0.0)
    }

    fn number_or(&self, name: &str, default: f64) -> f64 {
        self.property(name)
            .and_then(parse_number)
            .unwrap_or(default)
    }

    fn style(&self, defaults: &ShapeStyle) -> ShapeStyle {
        let fill_color = match self.property("fill") {
            None => defaults.fill_color,
            Some(v) if is_no_paint(v) => None,
            Some(v) => parse_color(v).or(defaults.fill_color),
        };
        let stroke_color = match self.property("stroke") {
            None => defaults.stroke_color,
            Some(v) if is_no_paint(v) => SerializableColor::transparent(),
            Some(v) => parse_color(v).unwrap_or(defaults.stroke_color),
        };
        let stroke_width = self
            .property("stroke-width")
            .and_then(parse_number)
            .map(sanitize_extent)
            .unwrap_or(defaults.stroke_width);

        ShapeStyle {
            fill_color,
            stroke_color,
            stroke_width,
        }
    }
}

fn parse_number(value: &str) -> Option<f64> {
    let value = value.trim();
    let value = value.strip_suffix("px").unwrap_or(value);
    value.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn is_no_paint(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "none" | "transparent")
}

fn parse_color(value: &str) -> Option<SerializableColor> {
    let color = SerializableColor::from_css(value);
    if color.is_none() {
        log::warn!("unrecognized color {value:?}, using default");
    }
    color
}
