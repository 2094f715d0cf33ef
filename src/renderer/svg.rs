//! SVG generation from shape lists

use super::shapes::{Shape, ShapeList};
use super::RenderConfig;

/// Build SVG elements incrementally
pub struct SvgBuilder<'a> {
    config: &'a RenderConfig,
    elements: Vec<String>,
    overlays: Vec<String>,
}

impl<'a> SvgBuilder<'a> {
    /// Create a new SVG builder
    pub fn new(config: &'a RenderConfig) -> Self {
        Self {
            config,
            elements: vec![],
            overlays: vec![],
        }
    }

    fn prefix(&self) -> String {
        self.config
            .class_prefix
            .as_deref()
            .map(escape_xml)
            .unwrap_or_default()
    }

    fn indent_str(&self) -> &str {
        if self.config.pretty_print {
            "  "
        } else {
            ""
        }
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    /// Add the full-canvas background rectangle
    pub fn add_background(&mut self, width: f64, height: f64, radius: f64, fill: &str) {
        let prefix = self.prefix();
        self.elements.push(format!(
            r#"{}<rect class="{}background" x="0" y="0" width="{}" height="{}" rx="{}" ry="{}" fill="{}"/>"#,
            self.indent_str(),
            prefix,
            width,
            height,
            radius,
            radius,
            fill
        ));
    }

    /// Add a module dot
    pub fn add_dot(&mut self, cx: f64, cy: f64, r: f64, region: &str, fill: &str) {
        let prefix = self.prefix();
        self.elements.push(format!(
            r#"{}<circle class="{}dot {}{}" cx="{}" cy="{}" r="{}" fill="{}"/>"#,
            self.indent_str(),
            prefix,
            prefix,
            region,
            cx,
            cy,
            r,
            fill
        ));
    }

    /// Add a hollow frame; frames are written after every dot
    #[allow(clippy::too_many_arguments)]
    pub fn add_frame(
        &mut self,
        corner: &str,
        x: f64,
        y: f64,
        size: f64,
        radius: f64,
        stroke: &str,
        stroke_width: f64,
    ) {
        let prefix = self.prefix();
        self.overlays.push(format!(
            r#"{}<rect class="{}frame {}frame-{}" x="{}" y="{}" width="{}" height="{}" rx="{}" ry="{}" fill="none" stroke="{}" stroke-width="{}"/>"#,
            self.indent_str(),
            prefix,
            prefix,
            corner,
            x,
            y,
            size,
            size,
            radius,
            radius,
            stroke,
            stroke_width
        ));
    }

    /// Build the final SVG string
    pub fn build(self, width: f64, height: f64) -> String {
        let nl = self.newline();

        let mut svg = String::new();

        // XML declaration for standalone
        if self.config.standalone {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push_str(nl);
        }

        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
            width, height, width, height
        ));
        svg.push_str(nl);

        for elem in &self.elements {
            svg.push_str(elem);
            svg.push_str(nl);
        }

        // Frames (rendered on top)
        for overlay in &self.overlays {
            svg.push_str(overlay);
            svg.push_str(nl);
        }

        svg.push_str("</svg>");
        svg.push_str(nl);

        svg
    }
}

/// Serialize a shape list to SVG markup
pub fn render_svg(list: &ShapeList, config: &RenderConfig) -> String {
    let mut builder = SvgBuilder::new(config);

    for shape in &list.shapes {
        match shape {
            Shape::Background {
                width,
                height,
                corner_radius,
                fill,
            } => builder.add_background(*width, *height, *corner_radius, fill),
            Shape::Dot {
                center,
                radius,
                region,
                fill,
                ..
            } => {
                let class = match region {
                    super::Region::Body => "body",
                    super::Region::Accent => "accent",
                };
                builder.add_dot(center.x, center.y, *radius, class, fill);
            }
            Shape::Frame {
                corner,
                origin,
                size,
                corner_radius,
                stroke,
                stroke_width,
            } => builder.add_frame(
                corner.name(),
                origin.x,
                origin.y,
                *size,
                *corner_radius,
                stroke,
                *stroke_width,
            ),
        }
    }

    builder.build(list.width, list.height)
}

/// Escape special XML characters
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
