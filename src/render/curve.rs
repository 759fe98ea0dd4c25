//! Parametric curve rasterization (Bezier and uniform cubic B-spline).
//!
//! Curves are sampled in floating point and the rounded samples are joined
//! with Bresenham segments, so the output is always an 8-connected path.

use super::line::draw_line_bresenham;
use super::RasterOptions;
use crate::geometry::Point;

/// Upper bound on adaptive sample counts, per curve or per knot span.
pub const MAX_ADAPTIVE_STEPS: usize = 16_384;

/// Floating-point curve sample.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Sample {
    x: f64,
    y: f64,
}

impl Sample {
    fn lerp(self, other: Self, t: f64) -> Self {
        Self {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }

    fn distance(self, other: Self) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

impl From<Point> for Sample {
    fn from(p: Point) -> Self {
        Self {
            x: f64::from(p.x),
            y: f64::from(p.y),
        }
    }
}

/// Joins successive samples into a connected pixel path.
struct PathTracer<'a> {
    out: &'a mut Vec<Point>,
    last: Option<Point>,
}

impl<'a> PathTracer<'a> {
    fn new(out: &'a mut Vec<Point>) -> Self {
        Self { out, last: None }
    }

    fn visit(&mut self, s: Sample) {
        let p = Point::from_f64(s.x, s.y);
        match self.last {
            None => self.out.push(p),
            Some(prev) if prev == p => return,
            Some(prev) => {
                let start = self.out.len();
                draw_line_bresenham(self.out, prev, p);
                // `prev` is already on the path
                self.out.remove(start);
            }
        }
        self.last = Some(p);
    }
}

/// Sample count so that consecutive samples are about a pixel apart.
///
/// The control polygon is never shorter than the curve it defines.
fn adaptive_steps(ctrl: &[Sample]) -> usize {
    let length: f64 = ctrl.windows(2).map(|w| w[0].distance(w[1])).sum();
    if length.is_finite() {
        (length.ceil() as usize).clamp(1, MAX_ADAPTIVE_STEPS)
    } else {
        MAX_ADAPTIVE_STEPS
    }
}

fn de_casteljau(ctrl: &[Sample], t: f64, scratch: &mut Vec<Sample>) -> Sample {
    scratch.clear();
    scratch.extend_from_slice(ctrl);
    for level in (1..scratch.len()).rev() {
        for i in 0..level {
            scratch[i] = scratch[i].lerp(scratch[i + 1], t);
        }
    }
    scratch[0]
}

/// Rasterize a Bezier curve of degree `control.len() - 1`.
///
/// Samples are evaluated with De Casteljau's algorithm at evenly spaced
/// `t` over `[0, 1]`. The first and last pixels are exactly the first and
/// last control points. Coincident control points yield a single pixel.
pub fn draw_bezier(out: &mut Vec<Point>, control: &[Point], options: &RasterOptions) {
    if control.is_empty() {
        return;
    }

    let ctrl: Vec<Sample> = control.iter().copied().map(Sample::from).collect();
    let steps = options
        .curve_steps
        .map_or_else(|| adaptive_steps(&ctrl), |n| n.max(1) as usize);

    let mut scratch = Vec::with_capacity(ctrl.len());
    let mut tracer = PathTracer::new(out);
    for i in 0..=steps {
        let t = i as f64 / steps as f64;
        tracer.visit(de_casteljau(&ctrl, t, &mut scratch));
    }
}

/// Evaluate one uniform cubic B-spline span at `t` in `[0, 1]`.
fn bspline_point(p: &[Sample], t: f64) -> Sample {
    let t2 = t * t;
    let t3 = t2 * t;
    let u = 1.0 - t;

    let b0 = u * u * u / 6.0;
    let b1 = (3.0 * t3 - 6.0 * t2 + 4.0) / 6.0;
    let b2 = (-3.0 * t3 + 3.0 * t2 + 3.0 * t + 1.0) / 6.0;
    let b3 = t3 / 6.0;

    Sample {
        x: b0 * p[0].x + b1 * p[1].x + b2 * p[2].x + b3 * p[3].x,
        y: b0 * p[0].y + b1 * p[1].y + b2 * p[2].y + b3 * p[3].y,
    }
}

/// Rasterize a uniform cubic B-spline.
///
/// Every window of four consecutive control points defines one knot span,
/// so `n` control points produce `n - 3` spans. Fewer than four control
/// points produce no pixels. The curve approximates rather than
/// interpolates its control points.
pub fn draw_bspline(out: &mut Vec<Point>, control: &[Point], options: &RasterOptions) {
    if control.len() < 4 {
        return;
    }

    let ctrl: Vec<Sample> = control.iter().copied().map(Sample::from).collect();
    let mut tracer = PathTracer::new(out);

    for (span, window) in ctrl.windows(4).enumerate() {
        let steps = options
            .spline_steps
            .map_or_else(|| adaptive_steps(window), |n| n.max(1) as usize);
        // t = 0 of this span equals t = 1 of the previous one
        let first = usize::from(span > 0);
        for i in first..=steps {
            let t = i as f64 / steps as f64;
            tracer.visit(bspline_point(window, t));
        }
    }
}
