//! SVG document surface.
//!
//! Surface coordinates are Y-up; SVG is Y-down, so every primitive is
//! flipped against the document height on the way in.

use super::Surface;
use std::fmt::Write;
use turtlekit_core::{Color, Point, RenderError, TextAlign};

const FONT_FAMILY: &str = "Arial";

#[derive(Debug, Clone)]
pub struct SvgSurface {
    width: f64,
    height: f64,
    background: Color,
    elements: Vec<String>,
}

impl SvgSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self::with_background(width, height, Color::WHITE)
    }

    pub fn with_background(width: f64, height: f64, background: Color) -> Self {
        Self {
            width,
            height,
            background,
            elements: Vec::new(),
        }
    }

    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// SVG has no spelling for NaN or infinite coordinates.
    fn flip(&self, point: Point) -> Result<(f64, f64), RenderError> {
        let (x, y) = (point.x, self.height - point.y);
        if x.is_finite() && y.is_finite() {
            Ok((x, y))
        } else {
            Err(RenderError::Backend {
                reason: format!("non-finite SVG coordinate ({}, {})", point.x, point.y),
            })
        }
    }

    /// Render the full document.
    pub fn to_svg_string(&self) -> String {
        let mut svg = String::with_capacity(256 + self.elements.len() * 96);
        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w:.0}" height="{h:.0}" viewBox="0 0 {w:.2} {h:.2}">"#,
            w = self.width,
            h = self.height
        );
        let _ = writeln!(
            svg,
            r#"  <rect width="100%" height="100%" fill="{}"/>"#,
            self.background.to_hex()
        );
        for element in &self.elements {
            svg.push_str("  ");
            svg.push_str(element);
            svg.push('\n');
        }
        svg.push_str("</svg>\n");
        svg
    }
}

impl Surface for SvgSurface {
    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    fn line(
        &mut self,
        from: Point,
        to: Point,
        color: Color,
        width: f64,
    ) -> Result<(), RenderError> {
        let (x1, y1) = self.flip(from)?;
        let (x2, y2) = self.flip(to)?;
        self.elements.push(format!(
            r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}" stroke-width="{:.2}" stroke-linecap="round"/>"#,
            x1,
            y1,
            x2,
            y2,
            color.to_hex(),
            width
        ));
        Ok(())
    }

    fn dot(&mut self, center: Point, diameter: f64, color: Color) -> Result<(), RenderError> {
        let (cx, cy) = self.flip(center)?;
        self.elements.push(format!(
            r#"<circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="{}"/>"#,
            cx,
            cy,
            diameter / 2.0,
            color.to_hex()
        ));
        Ok(())
    }

    fn text(
        &mut self,
        anchor: Point,
        text: &str,
        font_size: f64,
        align: TextAlign,
        color: Color,
    ) -> Result<(), RenderError> {
        let (x, y) = self.flip(anchor)?;
        let text_anchor = match align {
            TextAlign::Left => "start",
            TextAlign::Center => "middle",
        };
        self.elements.push(format!(
            r#"<text x="{:.2}" y="{:.2}" font-family="{}" font-size="{:.0}" font-weight="bold" text-anchor="{}" fill="{}">{}</text>"#,
            x,
            y,
            FONT_FAMILY,
            font_size,
            text_anchor,
            color.to_hex(),
            escape_xml(text)
        ));
        Ok(())
    }

    fn clear(&mut self) -> Result<(), RenderError> {
        self.elements.clear();
        Ok(())
    }
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_is_flipped() {
        let mut surface = SvgSurface::new(800.0, 600.0);
        surface
            .line(
                Point::new(0.0, 0.0),
                Point::new(100.0, 50.0),
                Color::BLUE,
                2.0,
            )
            .unwrap();
        let svg = surface.to_svg_string();
        assert!(svg.contains(r#"x1="0.00" y1="600.00" x2="100.00" y2="550.00""#));
        assert!(svg.contains(r##"stroke="#0000ff""##));
    }

    #[test]
    fn test_dot_radius_is_half_diameter() {
        let mut surface = SvgSurface::new(100.0, 100.0);
        surface.dot(Point::new(10.0, 10.0), 8.0, Color::RED).unwrap();
        assert!(surface.to_svg_string().contains(r#"r="4.00""#));
    }

    #[test]
    fn test_text_alignment_and_escaping() {
        let mut surface = SvgSurface::new(100.0, 100.0);
        surface
            .text(Point::ORIGIN, "a<b", 10.0, TextAlign::Center, Color::BLACK)
            .unwrap();
        let svg = surface.to_svg_string();
        assert!(svg.contains(r#"text-anchor="middle""#));
        assert!(svg.contains("a&lt;b</text>"));
    }

    #[test]
    fn test_clear_keeps_background() {
        let mut surface = SvgSurface::with_background(50.0, 50.0, Color::YELLOW);
        surface.dot(Point::ORIGIN, 6.0, Color::RED).unwrap();
        surface.clear().unwrap();
        assert_eq!(surface.element_count(), 0);
        assert!(surface.to_svg_string().contains(r##"fill="#ffff00""##));
    }

    #[test]
    fn test_non_finite_coordinates_are_rejected() {
        let mut surface = SvgSurface::new(100.0, 100.0);
        let err = surface
            .dot(Point::new(f64::NAN, 0.0), 6.0, Color::RED)
            .unwrap_err();
        assert!(matches!(err, RenderError::Backend { .. }));
        assert!(surface
            .line(Point::ORIGIN, Point::new(0.0, f64::INFINITY), Color::RED, 1.0)
            .is_err());
        assert_eq!(surface.element_count(), 0);
    }
}
