//! Line clipping against an axis-aligned window.
//!
//! Both algorithms work in `f64` on the original integer segment and round
//! only the final endpoints, so they agree on visibility: a segment is
//! visible iff at least one of its points lies inside the window, edges
//! inclusive.
//!
//! # References
//!
//! - Newman, W. M., & Sproull, R. F. (1979). *Principles of Interactive Computer Graphics*.
//! - Liang, Y.-D., & Barsky, B. A. (1984). "A New Concept and Method for Line Clipping."
//!   *ACM Transactions on Graphics*, 3(1), 1-22.

use std::fmt;

use crate::geometry::{Point, Window};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Line clipping algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ClipAlgorithm {
    /// Region outcode algorithm.
    #[default]
    CohenSutherland,
    /// Parametric algorithm.
    LiangBarsky,
}

impl fmt::Display for ClipAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::CohenSutherland => "Cohen-Sutherland",
            Self::LiangBarsky => "Liang-Barsky",
        })
    }
}

/// Cohen–Sutherland region code of a point relative to a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Outcode(u8);

impl Outcode {
    /// Inside the window.
    pub const INSIDE: Self = Self(0);
    /// Left of `xmin`.
    pub const LEFT: Self = Self(0b0001);
    /// Right of `xmax`.
    pub const RIGHT: Self = Self(0b0010);
    /// Below `ymin`.
    pub const BELOW: Self = Self(0b0100);
    /// Above `ymax`.
    pub const ABOVE: Self = Self(0b1000);

    /// Classify a point.
    #[must_use]
    pub fn of(x: f64, y: f64, window: &Window) -> Self {
        let mut code = 0;
        if x < f64::from(window.xmin()) {
            code |= Self::LEFT.0;
        } else if x > f64::from(window.xmax()) {
            code |= Self::RIGHT.0;
        }
        if y < f64::from(window.ymin()) {
            code |= Self::BELOW.0;
        } else if y > f64::from(window.ymax()) {
            code |= Self::ABOVE.0;
        }
        Self(code)
    }

    /// Raw 4-bit value.
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// True when every bit of `other` is set in `self`.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// True when the point is inside the window.
    #[must_use]
    pub const fn is_inside(self) -> bool {
        self.0 == 0
    }

    /// True when both codes share an outside half-plane.
    #[must_use]
    pub const fn shares_side(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }
}

/// Boundary crossings needed by the worst-case segment: two per endpoint,
/// with headroom for corner re-classification.
const MAX_CLIPS: usize = 8;

/// Clip a segment with the Cohen–Sutherland algorithm.
///
/// Returns the visible sub-segment with endpoints rounded to the nearest
/// pixel, or `None` when the segment lies entirely outside the window.
#[must_use]
pub fn cohen_sutherland(p0: Point, p1: Point, window: Window) -> Option<(Point, Point)> {
    let (x0, y0) = (f64::from(p0.x), f64::from(p0.y));
    let dx = f64::from(p1.x) - x0;
    let dy = f64::from(p1.y) - y0;

    let (xmin, xmax) = (f64::from(window.xmin()), f64::from(window.xmax()));
    let (ymin, ymax) = (f64::from(window.ymin()), f64::from(window.ymax()));

    let mut a = (x0, y0);
    let mut b = (f64::from(p1.x), f64::from(p1.y));
    let mut code_a = Outcode::of(a.0, a.1, &window);
    let mut code_b = Outcode::of(b.0, b.1, &window);

    for _ in 0..=MAX_CLIPS {
        if code_a.is_inside() && code_b.is_inside() {
            return Some((Point::from_f64(a.0, a.1), Point::from_f64(b.0, b.1)));
        }
        if code_a.shares_side(code_b) {
            return None;
        }

        let clip_a = !code_a.is_inside();
        let out = if clip_a { code_a } else { code_b };

        // Intersections are taken on the original segment; a code bit on
        // one axis implies a non-zero delta on that axis.
        let hit = if out.contains(Outcode::ABOVE) {
            (x0 + dx * (ymax - y0) / dy, ymax)
        } else if out.contains(Outcode::BELOW) {
            (x0 + dx * (ymin - y0) / dy, ymin)
        } else if out.contains(Outcode::RIGHT) {
            (xmax, y0 + dy * (xmax - x0) / dx)
        } else {
            (xmin, y0 + dy * (xmin - x0) / dx)
        };

        if clip_a {
            a = hit;
            code_a = Outcode::of(a.0, a.1, &window);
        } else {
            b = hit;
            code_b = Outcode::of(b.0, b.1, &window);
        }
    }

    None
}

/// Clip a segment with the Liang–Barsky algorithm.
///
/// Returns `P(tmin)` and `P(tmax)` rounded to the nearest pixel, or `None`
/// when `tmin > tmax`.
#[must_use]
pub fn liang_barsky(p0: Point, p1: Point, window: Window) -> Option<(Point, Point)> {
    let (x0, y0) = (f64::from(p0.x), f64::from(p0.y));
    let dx = f64::from(p1.x) - x0;
    let dy = f64::from(p1.y) - y0;

    let edges = [
        (-dx, x0 - f64::from(window.xmin())),
        (dx, f64::from(window.xmax()) - x0),
        (-dy, y0 - f64::from(window.ymin())),
        (dy, f64::from(window.ymax()) - y0),
    ];

    let mut t_min = 0.0_f64;
    let mut t_max = 1.0_f64;

    for (p, q) in edges {
        if p == 0.0 {
            // Parallel to this edge: outside iff on the far side
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            t_min = t_min.max(r);
        } else {
            t_max = t_max.min(r);
        }
        if t_min > t_max {
            return None;
        }
    }

    let start = if t_min > 0.0 {
        Point::from_f64(x0 + t_min * dx, y0 + t_min * dy)
    } else {
        p0
    };
    let end = if t_max < 1.0 {
        Point::from_f64(x0 + t_max * dx, y0 + t_max * dy)
    } else {
        p1
    };
    Some((start, end))
}

/// Clip a segment with the selected algorithm.
#[must_use]
pub fn clip_line(
    p0: Point,
    p1: Point,
    window: Window,
    algorithm: ClipAlgorithm,
) -> Option<(Point, Point)> {
    match algorithm {
        ClipAlgorithm::CohenSutherland => cohen_sutherland(p0, p1, window),
        ClipAlgorithm::LiangBarsky => liang_barsky(p0, p1, window),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOTH: [ClipAlgorithm; 2] = [ClipAlgorithm::CohenSutherland, ClipAlgorithm::LiangBarsky];

    fn p(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn test_outcode_regions() {
        let w = Window::new(0, 0, 10, 10);
        assert_eq!(Outcode::of(5.0, 5.0, &w), Outcode::INSIDE);
        assert_eq!(Outcode::of(-1.0, 5.0, &w), Outcode::LEFT);
        assert_eq!(Outcode::of(11.0, 5.0, &w), Outcode::RIGHT);
        assert_eq!(Outcode::of(5.0, -1.0, &w), Outcode::BELOW);
        assert_eq!(Outcode::of(5.0, 11.0, &w), Outcode::ABOVE);
        assert_eq!(Outcode::of(-1.0, 11.0, &w).bits(), 0b1001);
        assert!(Outcode::of(10.0, 0.0, &w).is_inside());
    }

    #[test]
    fn test_fully_inside_unchanged() {
        let w = Window::new(0, 0, 100, 100);
        for algorithm in BOTH {
            assert_eq!(clip_line(p(10, 20), p(80, 90), w, algorithm), Some((p(10, 20), p(80, 90))));
        }
    }

    #[test]
    fn test_trivially_outside() {
        let w = Window::new(0, 0, 100, 100);
        for algorithm in BOTH {
            assert_eq!(clip_line(p(-50, 10), p(-5, 90), w, algorithm), None);
            assert_eq!(clip_line(p(10, 150), p(90, 101), w, algorithm), None);
        }
    }

    #[test]
    fn test_outside_across_corner() {
        // Both endpoints in different outside regions, segment misses the window
        let w = Window::new(0, 0, 10, 10);
        for algorithm in BOTH {
            assert_eq!(clip_line(p(-10, 5), p(5, 20), w, algorithm), None, "{algorithm}");
        }
    }

    #[test]
    fn test_crossing_whole_window() {
        let w = Window::new(0, 0, 10, 10);
        for algorithm in BOTH {
            assert_eq!(clip_line(p(-5, 5), p(15, 5), w, algorithm), Some((p(0, 5), p(10, 5))));
            assert_eq!(clip_line(p(3, 20), p(3, -20), w, algorithm), Some((p(3, 10), p(3, 0))));
        }
    }

    #[test]
    fn test_reference_scenario() {
        // y = 500 - x enters at (150, 350) and ends inside at (300, 200)
        let w = Window::new(150, 150, 350, 350);
        for algorithm in BOTH {
            assert_eq!(
                clip_line(p(100, 400), p(300, 200), w, algorithm),
                Some((p(150, 350), p(300, 200))),
                "{algorithm}"
            );
        }
    }

    #[test]
    fn test_touching_corner_only() {
        let w = Window::new(0, 0, 10, 10);
        for algorithm in BOTH {
            assert_eq!(clip_line(p(-5, 5), p(5, -5), w, algorithm), Some((p(0, 0), p(0, 0))));
        }
    }

    #[test]
    fn test_collinear_with_edge() {
        let w = Window::new(0, 0, 10, 10);
        for algorithm in BOTH {
            assert_eq!(clip_line(p(-5, 10), p(20, 10), w, algorithm), Some((p(0, 10), p(10, 10))));
            assert_eq!(clip_line(p(-5, 11), p(20, 11), w, algorithm), None);
        }
    }

    #[test]
    fn test_degenerate_point() {
        let w = Window::new(0, 0, 10, 10);
        for algorithm in BOTH {
            assert_eq!(clip_line(p(4, 4), p(4, 4), w, algorithm), Some((p(4, 4), p(4, 4))));
            assert_eq!(clip_line(p(40, 4), p(40, 4), w, algorithm), None);
        }
    }

    #[test]
    fn test_rounded_intersection() {
        // y = x / 3 meets x = 10 at y = 3.33
        let w = Window::new(0, 0, 10, 10);
        for algorithm in BOTH {
            assert_eq!(clip_line(p(0, 0), p(30, 10), w, algorithm), Some((p(0, 0), p(10, 3))));
        }
    }
}
