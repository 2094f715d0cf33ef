//! Region classification and shape emission
//!
//! The matrix is walked once in row-major order. Each lit module becomes at
//! most one dot, colored by the region it falls in. The three finder frames
//! are appended after every dot so their strokes paint over the dots below.

use crate::matrix::ModuleMatrix;

use super::RenderConfig;

/// A 2D point on the output canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Region a lit module belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// Data area outside the three finder squares
    Body,
    /// Interior of a finder square, inside its outer ring
    Accent,
}

/// Finder-pattern corners of a QR code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
}

impl Corner {
    pub const ALL: [Corner; 3] = [Corner::TopLeft, Corner::TopRight, Corner::BottomLeft];

    /// Kebab-case name used in CSS classes
    pub fn name(&self) -> &'static str {
        match self {
            Corner::TopLeft => "top-left",
            Corner::TopRight => "top-right",
            Corner::BottomLeft => "bottom-left",
        }
    }
}

/// A drawing primitive, in paint order
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Rounded rectangle spanning the whole canvas
    Background {
        width: f64,
        height: f64,
        corner_radius: f64,
        fill: String,
    },
    /// Circle for one lit module
    Dot {
        row: usize,
        col: usize,
        center: Point,
        radius: f64,
        region: Region,
        fill: String,
    },
    /// Hollow rounded square over a finder pattern
    Frame {
        corner: Corner,
        origin: Point,
        size: f64,
        corner_radius: f64,
        stroke: String,
        stroke_width: f64,
    },
}

/// Shapes for one render, with the canvas they are drawn on
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeList {
    pub width: f64,
    pub height: f64,
    pub pattern_size: usize,
    pub shapes: Vec<Shape>,
}

impl ShapeList {
    /// Dots of the given region, in emission order
    pub fn dots(&self, region: Region) -> impl Iterator<Item = &Shape> {
        self.shapes
            .iter()
            .filter(move |s| matches!(s, Shape::Dot { region: r, .. } if *r == region))
    }
}

/// Classify the module at `(row, col)` of an `n x n` matrix
///
/// `pattern` is the finder-pattern side length. Finder interiors take
/// precedence over the body; modules on a finder's outer ring belong to
/// neither region because the frame stroke covers them.
pub fn classify(row: usize, col: usize, n: usize, pattern: usize) -> Option<Region> {
    if is_accent(row, col, n, pattern) {
        Some(Region::Accent)
    } else if is_body(row, col, n, pattern) {
        Some(Region::Body)
    } else {
        None
    }
}

fn is_body(row: usize, col: usize, n: usize, p: usize) -> bool {
    let far = n.saturating_sub(p);
    (p..far).contains(&col)
        || ((0..p).contains(&col) && (p..far).contains(&row))
        || ((far..n).contains(&col) && (p..n).contains(&row))
}

fn is_accent(row: usize, col: usize, n: usize, p: usize) -> bool {
    // Strictly inside the ring: 0 < i < p - 1 near the start, n - p < i < n - 1 near the end.
    let near = |i: usize| i > 0 && i + 1 < p;
    let far = |i: usize| i + p > n && i + 1 < n;
    (near(row) && (near(col) || far(col))) || (far(row) && near(col))
}

/// Lay out every shape for `matrix` with a precomputed pattern size
pub fn layout(matrix: &ModuleMatrix, pattern_size: usize, config: &RenderConfig) -> ShapeList {
    let n = matrix.size();
    let pitch = config.module_size;
    let side = n as f64 * pitch + 2.0 * config.border;
    let half = pitch / 2.0;

    let mut shapes = Vec::with_capacity(matrix.lit_count() + 4);
    shapes.push(Shape::Background {
        width: side,
        height: side,
        corner_radius: config.corner_radius,
        fill: config.background.clone(),
    });

    let mut y = config.border + half;
    for (row, modules) in matrix.rows().enumerate() {
        let mut x = config.border + half;
        for (col, &lit) in modules.iter().enumerate() {
            if lit {
                if let Some(region) = classify(row, col, n, pattern_size) {
                    let fill = match region {
                        Region::Body => &config.body,
                        Region::Accent => &config.accent,
                    };
                    shapes.push(Shape::Dot {
                        row,
                        col,
                        center: Point::new(x, y),
                        radius: config.dot_radius,
                        region,
                        fill: fill.clone(),
                    });
                }
            }
            x += pitch;
        }
        y += pitch;
    }

    let frame_size = pattern_size.saturating_sub(1) as f64 * pitch;
    let near = config.border + half;
    let far = config.border + n.saturating_sub(pattern_size) as f64 * pitch + half;
    for corner in Corner::ALL {
        let origin = match corner {
            Corner::TopLeft => Point::new(near, near),
            Corner::TopRight => Point::new(far, near),
            Corner::BottomLeft => Point::new(near, far),
        };
        shapes.push(Shape::Frame {
            corner,
            origin,
            size: frame_size,
            corner_radius: config.corner_radius,
            stroke: config.frame.clone(),
            stroke_width: 2.0 * config.dot_radius,
        });
    }

    ShapeList {
        width: side,
        height: side,
        pattern_size,
        shapes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locator::locate;

    #[test]
    fn test_classify_standard_version_one() {
        // 21x21 with 7x7 finders
        let (n, p) = (21, 7);
        // Outer ring of the finders
        assert_eq!(classify(0, 0, n, p), None);
        assert_eq!(classify(6, 3, n, p), None);
        assert_eq!(classify(0, 20, n, p), None);
        assert_eq!(classify(20, 0, n, p), None);
        // Finder interiors
        assert_eq!(classify(1, 1, n, p), Some(Region::Accent));
        assert_eq!(classify(3, 3, n, p), Some(Region::Accent));
        assert_eq!(classify(5, 5, n, p), Some(Region::Accent));
        assert_eq!(classify(3, 17, n, p), Some(Region::Accent));
        assert_eq!(classify(17, 3, n, p), Some(Region::Accent));
        // No finder at the bottom-right
        assert_eq!(classify(17, 17, n, p), Some(Region::Body));
        assert_eq!(classify(20, 20, n, p), Some(Region::Body));
        // Data area between and beside finders
        assert_eq!(classify(0, 10, n, p), Some(Region::Body));
        assert_eq!(classify(10, 0, n, p), Some(Region::Body));
        assert_eq!(classify(10, 20, n, p), Some(Region::Body));
        assert_eq!(classify(20, 10, n, p), Some(Region::Body));
    }

    #[test]
    fn test_classify_separator_band_is_body() {
        // Column 7 sits just right of the top-left finder
        assert_eq!(classify(3, 7, 21, 7), Some(Region::Body));
        assert_eq!(classify(7, 3, 21, 7), Some(Region::Body));
    }

    #[test]
    fn test_classify_zero_pattern_is_all_body() {
        for row in 0..5 {
            for col in 0..5 {
                assert_eq!(classify(row, col, 5, 0), Some(Region::Body));
            }
        }
    }

    #[test]
    fn test_layout_all_lit_seven() {
        let m = ModuleMatrix::from_fn(7, |_, _| true).unwrap();
        let list = layout(&m, locate(&m), &RenderConfig::default());
        assert_eq!(list.pattern_size, 7);
        assert_eq!(list.dots(Region::Accent).count(), 25);
        assert_eq!(list.dots(Region::Body).count(), 0);
        // background + 25 dots + 3 frames
        assert_eq!(list.shapes.len(), 29);
    }

    #[test]
    fn test_layout_dot_positions() {
        let m = ModuleMatrix::from_fn(2, |r, c| r == 1 && c == 1).unwrap();
        let list = layout(&m, 0, &RenderConfig::default());
        let dot = list.dots(Region::Body).next().unwrap();
        match dot {
            Shape::Dot { center, radius, .. } => {
                assert_eq!(*center, Point::new(50.0, 50.0));
                assert_eq!(*radius, 10.0);
            }
            other => panic!("expected dot, got {:?}", other),
        }
    }

    #[test]
    fn test_layout_frame_geometry() {
        let m = ModuleMatrix::from_fn(21, |r, c| r < 7 && c < 7).unwrap();
        let list = layout(&m, 7, &RenderConfig::default());
        let frames: Vec<_> = list
            .shapes
            .iter()
            .filter_map(|s| match s {
                Shape::Frame {
                    corner,
                    origin,
                    size,
                    stroke_width,
                    ..
                } => Some((*corner, *origin, *size, *stroke_width)),
                _ => None,
            })
            .collect();
        assert_eq!(
            frames,
            vec![
                (Corner::TopLeft, Point::new(30.0, 30.0), 120.0, 20.0),
                (Corner::TopRight, Point::new(310.0, 30.0), 120.0, 20.0),
                (Corner::BottomLeft, Point::new(30.0, 310.0), 120.0, 20.0),
            ]
        );
        assert_eq!(list.width, 460.0);
    }
}
