//! Geometric value types shared by every stage of the pipeline.
//!
//! Coordinates are integers: sub-pixel positions are never stored. Every
//! floating-point computation in the crate converts back through
//! [`round_coord`], so the rounding policy lives in exactly one place.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Round a floating-point coordinate to the nearest integer pixel.
///
/// Ties round away from zero (`2.5 -> 3`, `-2.5 -> -3`). Values outside the
/// `i32` range saturate and `NaN` maps to `0`, so the conversion is total.
#[inline]
#[must_use]
pub fn round_coord(v: f64) -> i32 {
    v.round() as i32
}

/// A 2D point with integer coordinates.
///
/// Used both as a control point and as a rasterized pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
}

impl Point {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Create a point from floating-point coordinates using [`round_coord`].
    #[must_use]
    pub fn from_f64(x: f64, y: f64) -> Self {
        Self::new(round_coord(x), round_coord(y))
    }

    /// Offset this point by `(dx, dy)`, saturating at the `i32` range.
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// An axis-aligned rectangle defined by position and size.
///
/// The size is unsigned so that it spans any two `i32` coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rect {
    /// X coordinate of the top-left corner.
    pub x: i32,
    /// Y coordinate of the top-left corner.
    pub y: i32,
    /// Width of the rectangle.
    pub width: u32,
    /// Height of the rectangle.
    pub height: u32,
}

impl Rect {
    /// Create a new rectangle.
    #[must_use]
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Smallest rectangle containing every point, or `None` for an empty slice.
    #[must_use]
    pub fn bounding(points: &[Point]) -> Option<Self> {
        let first = points.first()?;
        let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
        for p in &points[1..] {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        Some(Self::new(min_x, min_y, span(min_x, max_x), span(min_y, max_y)))
    }

    /// Check if a point is inside the rectangle (edges inclusive).
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        let (px, py) = (i64::from(point.x), i64::from(point.y));
        let (x, y) = (i64::from(self.x), i64::from(self.y));
        px >= x && px <= x + i64::from(self.width) && py >= y && py <= y + i64::from(self.height)
    }

    /// Get the area of the rectangle.
    #[must_use]
    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

/// Distance from `min` to `max`; always fits in `u32`.
fn span(min: i32, max: i32) -> u32 {
    (i64::from(max) - i64::from(min)) as u32
}

/// Axis-aligned clip window with normalized bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "RawWindow"))]
pub struct Window {
    xmin: i32,
    ymin: i32,
    xmax: i32,
    ymax: i32,
}

/// Unnormalized wire form of a [`Window`].
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawWindow {
    xmin: i32,
    ymin: i32,
    xmax: i32,
    ymax: i32,
}

#[cfg(feature = "serde")]
impl From<RawWindow> for Window {
    fn from(raw: RawWindow) -> Self {
        Self::new(raw.xmin, raw.ymin, raw.xmax, raw.ymax)
    }
}

impl Window {
    /// Create a window from two opposite corners in any order.
    #[must_use]
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            xmin: x0.min(x1),
            ymin: y0.min(y1),
            xmax: x0.max(x1),
            ymax: y0.max(y1),
        }
    }

    /// Create a window from two corner points.
    #[must_use]
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self::new(a.x, a.y, b.x, b.y)
    }

    /// Minimum x bound.
    #[must_use]
    pub const fn xmin(&self) -> i32 {
        self.xmin
    }

    /// Minimum y bound.
    #[must_use]
    pub const fn ymin(&self) -> i32 {
        self.ymin
    }

    /// Maximum x bound.
    #[must_use]
    pub const fn xmax(&self) -> i32 {
        self.xmax
    }

    /// Maximum y bound.
    #[must_use]
    pub const fn ymax(&self) -> i32 {
        self.ymax
    }

    /// Check if a point lies inside the window (edges inclusive).
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        (self.xmin..=self.xmax).contains(&point.x) && (self.ymin..=self.ymax).contains(&point.y)
    }
}
