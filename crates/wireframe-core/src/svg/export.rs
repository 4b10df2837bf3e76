//! SVG export.

use super::BACKGROUND_ROLE;
use crate::canvas::CanvasDocument;
use crate::shapes::{Shape, ShapeStyle};
use xmlwriter::{Indent, Options, XmlWriter};

/// Serialize the canvas to SVG text.
///
/// The background is written first as a marked `<rect>`, then one element
/// per shape back to front. Numbers use the shortest representation that
/// parses back to the same value.
pub fn export_document(doc: &CanvasDocument) -> String {
    let size = doc.size();
    let (w, h) = (size.width, size.height);
    let mut xml = XmlWriter::new(Options {
        indent: Indent::Spaces(2),
        ..Options::default()
    });

    xml.start_element("svg");
    xml.write_attribute("xmlns", "http://www.w3.org/2000/svg");
    xml.write_attribute("width", &w);
    xml.write_attribute("height", &h);
    xml.write_attribute_fmt("viewBox", format_args!("0 0 {w} {h}"));

    xml.start_element("rect");
    xml.write_attribute("data-role", BACKGROUND_ROLE);
    xml.write_attribute("x", &0);
    xml.write_attribute("y", &0);
    xml.write_attribute("width", &w);
    xml.write_attribute("height", &h);
    xml.write_attribute("fill", &doc.background.to_css());
    xml.write_attribute("stroke", "none");
    xml.end_element();

    for shape in doc.shapes() {
        write_shape(&mut xml, shape);
    }

    let mut svg = xml.end_document();
    svg.push('\n');
    log::info!("exported {} shapes to SVG", doc.len());
    svg
}

fn write_shape(xml: &mut XmlWriter, shape: &Shape) {
    match shape {
        Shape::Rectangle(r) => {
            xml.start_element("rect");
            xml.write_attribute("x", &r.position.x);
            xml.write_attribute("y", &r.position.y);
            xml.write_attribute("width", &r.width);
            xml.write_attribute("height", &r.height);
            write_style(xml, shape.style());
        }
        Shape::Circle(c) => {
            xml.start_element("circle");
            xml.write_attribute("cx", &c.center.x);
            xml.write_attribute("cy", &c.center.y);
            xml.write_attribute("r", &c.radius);
            write_style(xml, shape.style());
        }
        Shape::Line(l) => {
            xml.start_element("line");
            xml.write_attribute("x1", &l.start.x);
            xml.write_attribute("y1", &l.start.y);
            xml.write_attribute("x2", &l.end.x);
            xml.write_attribute("y2", &l.end.y);
            write_style(xml, shape.style());
        }
        Shape::Text(t) => {
            xml.start_element("text");
            xml.write_attribute("x", &t.position.x);
            xml.write_attribute("y", &t.position.y);
            xml.write_attribute("font-size", &t.font_size);
            write_style(xml, shape.style());
            // Content is kept verbatim, without indentation around it
            xml.set_preserve_whitespaces(true);
            xml.write_text(&t.content);
            xml.end_element();
            xml.set_preserve_whitespaces(false);
            return;
        }
    }
    xml.end_element();
}

fn write_style(xml: &mut XmlWriter, style: &ShapeStyle) {
    match style.fill_color {
        Some(fill) => xml.write_attribute("fill", &fill.to_css()),
        None => xml.write_attribute("fill", "none"),
    }
    xml.write_attribute("stroke", &style.stroke_color.to_css());
    xml.write_attribute("stroke-width", &style.stroke_width);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{Circle, Line, Rectangle, Text};
    use kurbo::{Point, Size};

    #[test]
    fn test_root_and_background() {
        let doc = CanvasDocument::new(Size::new(1200.0, 800.0));
        let svg = export_document(&doc);
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(r#"width="1200" height="800" viewBox="0 0 1200 800""#));
        assert!(svg.contains(r#"data-role="background""#));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_shape_elements() {
        let mut doc = CanvasDocument::default();
        doc.add_shape(Shape::Rectangle(Rectangle::new(Point::new(100.0, 150.0), 200.0, 150.0)));
        doc.add_shape(Shape::Circle(Circle::new(Point::new(10.0, 10.0), 20.0)));
        doc.add_shape(Shape::Line(Line::new(Point::new(1.5, 2.0), Point::new(3.0, 4.0))));
        doc.add_shape(Shape::Text(Text::new(Point::new(5.0, 6.0), "a&b".to_string())));

        let svg = export_document(&doc);
        assert!(svg.contains(
            r##"<rect x="100" y="150" width="200" height="150" fill="#ffffff" stroke="#000000" stroke-width="2""##
        ));
        assert!(svg.contains(r#"<circle cx="10" cy="10" r="20""#));
        assert!(svg.contains(r#"<line x1="1.5" y1="2" x2="3" y2="4""#));
        assert!(svg.contains(r#"<text x="5" y="6" font-size="16""#));
        assert!(svg.contains(">a&amp;b</text>"));
    }

    #[test]
    fn test_no_fill_is_none() {
        let mut doc = CanvasDocument::default();
        let mut rect = Rectangle::new(Point::ZERO, 1.0, 1.0);
        rect.style.fill_color = None;
        doc.add_shape(Shape::Rectangle(rect));
        let svg = export_document(&doc);
        assert!(svg.contains(r#"<rect x="0" y="0" width="1" height="1" fill="none""#));
    }

    #[test]
    fn test_z_order_preserved() {
        let mut doc = CanvasDocument::default();
        doc.add_shape(Shape::Line(Line::new(Point::ZERO, Point::new(1.0, 1.0))));
        doc.add_shape(Shape::Circle(Circle::new(Point::ZERO, 1.0)));
        let svg = export_document(&doc);
        let line_at = svg.find("<line").unwrap();
        let circle_at = svg.find("<circle").unwrap();
        assert!(line_at < circle_at);
    }
}
