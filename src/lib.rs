//! Styled QR - stylized SVG rendering of QR module matrices
//!
//! Takes a finished QR code's module grid and draws it as a rounded dark
//! card: one dot per lit module, finder-pattern interiors in an accent
//! color, and hollow rounded frames over the three finder patterns. QR
//! encoding itself happens upstream; this crate only consumes the matrix.
//!
//! # Example
//!
//! ```rust
//! use styled_qr::{render, ModuleMatrix, RenderConfig};
//!
//! let matrix: ModuleMatrix = "###\n#.#\n###\n".parse().unwrap();
//! let svg = render(&matrix, "demo", &RenderConfig::default()).unwrap();
//! assert!(svg.contains(r#"width="100""#));
//! ```

pub mod batch;
pub mod error;
pub mod locator;
pub mod matrix;
pub mod parser;
pub mod renderer;
pub mod theme;

pub use batch::{render_batch, BatchItem, BatchOutcome, BatchOutput};
pub use error::{MatrixParseError, RenderError, ThemeError};
pub use locator::{locate, locate_at};
pub use matrix::ModuleMatrix;
pub use parser::parse;
pub use renderer::{render_svg, Region, RenderConfig, Shape, ShapeList};
pub use theme::Theme;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Compute the shape list for `matrix` without serializing it
///
/// Fails before emitting anything when the config is out of range or the
/// matrix has no lit modules.
pub fn build_shapes(
    matrix: &ModuleMatrix,
    config: &RenderConfig,
) -> Result<ShapeList, RenderError> {
    config.validate()?;

    let lit = matrix.lit_count();
    if lit == 0 {
        return Err(RenderError::invalid_matrix("matrix has no lit modules"));
    }

    let pattern_size = locate(matrix);
    let list = renderer::layout(matrix, pattern_size, config);
    log::trace!(
        "{} lit modules: {} body dots, {} accent dots",
        lit,
        list.dots(Region::Body).count(),
        list.dots(Region::Accent).count()
    );
    Ok(list)
}

/// Render a module matrix to SVG text
///
/// `label` identifies the request in log output only; it never changes the
/// document, so identical matrix and config always give identical bytes.
///
/// # Example
///
/// ```rust
/// use styled_qr::{render, ModuleMatrix, RenderConfig, RenderError};
///
/// let blank = ModuleMatrix::from_fn(21, |_, _| false).unwrap();
/// let err = render(&blank, "blank", &RenderConfig::default()).unwrap_err();
/// assert!(matches!(err, RenderError::InvalidMatrix { .. }));
/// ```
pub fn render(
    matrix: &ModuleMatrix,
    label: &str,
    config: &RenderConfig,
) -> Result<String, RenderError> {
    let list = build_shapes(matrix, config)?;
    log::debug!(
        "rendering '{}': {}x{} modules, finder pattern {}",
        label,
        matrix.size(),
        matrix.size(),
        list.pattern_size
    );
    Ok(render_svg(&list, config))
}

/// Render row vectors, validating shape before anything else
pub fn render_rows(
    rows: Vec<Vec<bool>>,
    label: &str,
    config: &RenderConfig,
) -> Result<String, RenderError> {
    let matrix = ModuleMatrix::from_rows(rows)?;
    render(&matrix, label, config)
}

/// Wrap SVG text in a base64 `data:` URI for embedding in HTML or JSON
pub fn to_data_uri(svg: &str) -> String {
    format!("data:image/svg+xml;base64,{}", STANDARD.encode(svg))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn version_one_like() -> ModuleMatrix {
        // Solid 7x7 corners at the three finder positions, checkerboard elsewhere
        ModuleMatrix::from_fn(21, |r, c| {
            let corner = (r < 7 && c < 7) || (r < 7 && c >= 14) || (r >= 14 && c < 7);
            corner || (r + c) % 2 == 0
        })
        .unwrap()
    }

    #[test]
    fn test_render_canvas_size() {
        let svg = render(&version_one_like(), "v1", &RenderConfig::default()).unwrap();
        assert!(svg.contains(r#"width="460" height="460""#));
    }

    #[test]
    fn test_render_is_deterministic() {
        let m = version_one_like();
        let config = RenderConfig::default();
        let a = render(&m, "first", &config).unwrap();
        let b = render(&m, "second", &config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_render_rejects_blank_matrix() {
        let blank = ModuleMatrix::from_fn(3, |_, _| false).unwrap();
        let result = render(&blank, "blank", &RenderConfig::default());
        assert!(matches!(result, Err(RenderError::InvalidMatrix { .. })));
    }

    #[test]
    fn test_render_rejects_bad_config_first() {
        let blank = ModuleMatrix::from_fn(3, |_, _| false).unwrap();
        let config = RenderConfig::default().with_dot_radius(0.0);
        let result = render(&blank, "blank", &config);
        assert!(matches!(result, Err(RenderError::InvalidConfig { .. })));
    }

    #[test]
    fn test_render_rows_rejects_non_square() {
        let result = render_rows(vec![vec![true, true]], "row", &RenderConfig::default());
        assert!(matches!(result, Err(RenderError::InvalidMatrix { .. })));
        let result = render_rows(vec![], "empty", &RenderConfig::default());
        assert!(matches!(result, Err(RenderError::InvalidMatrix { .. })));
    }

    #[test]
    fn test_build_shapes_pattern_size() {
        let list = build_shapes(&version_one_like(), &RenderConfig::default()).unwrap();
        assert_eq!(list.pattern_size, 7);
        assert_eq!(list.dots(Region::Accent).count(), 75);
    }

    #[test]
    fn test_data_uri() {
        assert_eq!(to_data_uri("<svg/>"), "data:image/svg+xml;base64,PHN2Zy8+");
    }
}
