//! Configuration for styled QR rendering

use crate::error::RenderError;

/// Geometry, palette and output options for the styled renderer
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Distance between adjacent module centers
    pub module_size: f64,

    /// Padding between the canvas edge and the first module
    pub border: f64,

    /// Corner rounding of the background and the finder frames
    pub corner_radius: f64,

    /// Radius of the dot drawn for each lit module
    pub dot_radius: f64,

    /// Canvas fill
    pub background: String,

    /// Fill for dots in the data region
    pub body: String,

    /// Fill for dots inside the finder patterns
    pub accent: String,

    /// Stroke for the finder frames
    pub frame: String,

    /// Whether to include the XML declaration
    pub standalone: bool,

    /// Whether to format output with indentation
    pub pretty_print: bool,

    /// Prefix for CSS class names (e.g., "qr-" for "qr-dot")
    pub class_prefix: Option<String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            module_size: 20.0,
            border: 20.0,
            corner_radius: 40.0,
            dot_radius: 10.0,
            background: "#0B0A0C".to_string(),
            body: "#B9C0CD".to_string(),
            accent: "#23C0DC".to_string(),
            frame: "#343B57".to_string(),
            standalone: false,
            pretty_print: true,
            class_prefix: Some("qr-".to_string()),
        }
    }
}

impl RenderConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the module pitch
    pub fn with_module_size(mut self, size: f64) -> Self {
        self.module_size = size;
        self
    }

    /// Set the outer padding
    pub fn with_border(mut self, border: f64) -> Self {
        self.border = border;
        self
    }

    /// Set the corner radius of background and frames
    pub fn with_corner_radius(mut self, radius: f64) -> Self {
        self.corner_radius = radius;
        self
    }

    /// Set the dot radius
    pub fn with_dot_radius(mut self, radius: f64) -> Self {
        self.dot_radius = radius;
        self
    }

    /// Set the background fill
    pub fn with_background(mut self, color: impl Into<String>) -> Self {
        self.background = color.into();
        self
    }

    /// Set the data-region dot fill
    pub fn with_body(mut self, color: impl Into<String>) -> Self {
        self.body = color.into();
        self
    }

    /// Set the finder-interior dot fill
    pub fn with_accent(mut self, color: impl Into<String>) -> Self {
        self.accent = color.into();
        self
    }

    /// Set the finder frame stroke
    pub fn with_frame(mut self, color: impl Into<String>) -> Self {
        self.frame = color.into();
        self
    }

    /// Set whether output is standalone
    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }

    /// Set whether to pretty-print output
    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    /// Set the CSS class prefix
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = Some(prefix.into());
        self
    }

    /// Remove the CSS class prefix
    pub fn without_class_prefix(mut self) -> Self {
        self.class_prefix = None;
        self
    }

    /// Check every geometric field and colour before rendering
    ///
    /// Geometric fields must be finite and positive, and a dot may not be
    /// wider than the module pitch.
    pub fn validate(&self) -> Result<(), RenderError> {
        positive("module_size", self.module_size)?;
        positive("border", self.border)?;
        positive("corner_radius", self.corner_radius)?;
        positive("dot_radius", self.dot_radius)?;

        if 2.0 * self.dot_radius > self.module_size {
            return Err(RenderError::invalid_config(
                "dot_radius",
                format!(
                    "dot diameter {} exceeds module size {}",
                    2.0 * self.dot_radius,
                    self.module_size
                ),
            ));
        }

        color("background", &self.background)?;
        color("body", &self.body)?;
        color("accent", &self.accent)?;
        color("frame", &self.frame)?;
        Ok(())
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), RenderError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(RenderError::invalid_config(
            field,
            format!("must be a positive number, got {}", value),
        ))
    }
}

fn color(field: &'static str, value: &str) -> Result<(), RenderError> {
    if value.trim().is_empty() {
        return Err(RenderError::invalid_config(field, "colour is empty"));
    }
    if let Some(c) = value.chars().find(|c| matches!(c, '"' | '<' | '>' | '&')) {
        return Err(RenderError::invalid_config(
            field,
            format!("colour {:?} contains {:?}", value, c),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RenderConfig::default();
        assert_eq!(config.module_size, 20.0);
        assert_eq!(config.border, 20.0);
        assert_eq!(config.corner_radius, 40.0);
        assert_eq!(config.dot_radius, 10.0);
        assert_eq!(config.background, "#0B0A0C");
        assert_eq!(config.body, "#B9C0CD");
        assert_eq!(config.accent, "#23C0DC");
        assert_eq!(config.frame, "#343B57");
        assert!(!config.standalone);
        assert!(config.pretty_print);
        assert_eq!(config.class_prefix, Some("qr-".to_string()));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = RenderConfig::new()
            .with_module_size(8.0)
            .with_dot_radius(3.0)
            .with_body("white")
            .with_pretty_print(false)
            .without_class_prefix();

        assert_eq!(config.module_size, 8.0);
        assert_eq!(config.dot_radius, 3.0);
        assert_eq!(config.body, "white");
        assert!(!config.pretty_print);
        assert_eq!(config.class_prefix, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_non_positive_geometry() {
        for config in [
            RenderConfig::new().with_module_size(0.0),
            RenderConfig::new().with_border(-1.0),
            RenderConfig::new().with_corner_radius(0.0),
            RenderConfig::new().with_dot_radius(0.0),
            RenderConfig::new().with_dot_radius(f64::NAN),
        ] {
            assert!(matches!(
                config.validate(),
                Err(RenderError::InvalidConfig { .. })
            ));
        }
    }

    #[test]
    fn test_rejects_overlapping_dots() {
        let err = RenderConfig::new().with_dot_radius(10.5).validate().unwrap_err();
        assert!(matches!(
            err,
            RenderError::InvalidConfig {
                field: "dot_radius",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_unsafe_colours() {
        let err = RenderConfig::new()
            .with_accent(r#"red" onload="x"#)
            .validate()
            .unwrap_err();
        assert!(matches!(err, RenderError::InvalidConfig { field: "accent", .. }));

        let err = RenderConfig::new().with_frame("  ").validate().unwrap_err();
        assert!(matches!(err, RenderError::InvalidConfig { field: "frame", .. }));
    }
}
