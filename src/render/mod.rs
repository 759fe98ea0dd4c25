//! Rasterization of primitives into pixel sequences.
//!
//! Every function here is pure: it reads control points and appends pixels
//! to an output vector, so a render can be repeated at any time and always
//! reflects the current geometry.
//!
//! # Algorithms
//!
//! - **DDA**: floating-point incremental line drawing
//! - **Bresenham's Line**: integer-only incremental line drawing
//! - **Midpoint Ellipse**: two-region decision algorithm with quadrant symmetry
//! - **De Casteljau**: Bezier evaluation by repeated linear interpolation
//! - **Uniform cubic B-spline**: per-span basis function evaluation
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Van Aken, J. R. (1984). "An Efficient Ellipse-Drawing Algorithm." IEEE CG&A.

mod curve;
mod ellipse;
mod line;

pub use curve::{draw_bezier, draw_bspline, MAX_ADAPTIVE_STEPS};
pub use ellipse::draw_ellipse;
pub use line::{draw_line, draw_line_bresenham, draw_line_dda, draw_polygon};

use crate::geometry::Point;
use crate::primitive::{CurveAlgorithm, Shape};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Sampling options for curve rasterization.
///
/// `None` selects an adaptive sample count derived from the length of the
/// control polygon, which keeps consecutive samples about a pixel apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RasterOptions {
    /// Fixed number of parametric steps for a whole Bezier curve.
    pub curve_steps: Option<u32>,
    /// Fixed number of parametric steps per B-spline knot span.
    pub spline_steps: Option<u32>,
}

/// Rasterize control points according to a shape.
///
/// Dispatches on the shape variant and its algorithm selector. The
/// returned sequence is freshly computed on every call.
#[must_use]
pub fn rasterize(shape: Shape, points: &[Point], options: &RasterOptions) -> Vec<Point> {
    let mut out = Vec::new();
    match shape {
        Shape::Line(algorithm) | Shape::Polygon(algorithm) => {
            draw_polygon(&mut out, points, algorithm);
        }
        Shape::Ellipse => match points {
            [c0, c1, ..] => draw_ellipse(&mut out, *c0, *c1),
            [p] => out.push(*p),
            [] => {}
        },
        Shape::Curve(CurveAlgorithm::Bezier) => draw_bezier(&mut out, points, options),
        Shape::Curve(CurveAlgorithm::BSpline) => draw_bspline(&mut out, points, options),
    }
    out
}
