//! Styled renderer for QR module matrices
//!
//! Classifies every lit module into the data body or a finder interior,
//! emits a shape list (background, dots, finder frames) and serializes it
//! to SVG.

pub mod config;
pub mod shapes;
pub mod svg;

pub use config::RenderConfig;
pub use shapes::{classify, layout, Corner, Point, Region, Shape, ShapeList};
pub use svg::render_svg;
