//! Primitive model and facade.
//!
//! A [`Primitive`] is a [`Shape`] (kind plus algorithm selector, fixed for the
//! primitive's lifetime) and an ordered, never-empty list of integer control
//! points. The facade methods dispatch to the rasterization, transform and
//! clipping modules and replace the control points wholesale, so a reader
//! never observes a half-updated shape.

use std::fmt;

use crate::clip::{clip_line, ClipAlgorithm};
use crate::error::{Error, Result};
use crate::geometry::{Point, Rect, Window};
use crate::render::{rasterize, RasterOptions};
use crate::transform::Transform;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Discriminator for the primitive variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PrimitiveKind {
    /// Straight segment between two points.
    Line,
    /// Closed outline through its vertices.
    Polygon,
    /// Axis-aligned ellipse inscribed in a bounding box.
    Ellipse,
    /// Parametric curve through or near its control points.
    Curve,
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Line => "Line",
            Self::Polygon => "Polygon",
            Self::Ellipse => "Ellipse",
            Self::Curve => "Curve",
        };
        f.write_str(name)
    }
}

/// Line rasterization algorithm, used by lines and polygon edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LineAlgorithm {
    /// Digital differential analyzer.
    Dda,
    /// Bresenham's integer algorithm.
    #[default]
    Bresenham,
}

impl fmt::Display for LineAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Dda => "DDA",
            Self::Bresenham => "Bresenham",
        })
    }
}

/// Curve evaluation algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CurveAlgorithm {
    /// Single Bezier curve over all control points.
    #[default]
    Bezier,
    /// Uniform cubic B-spline.
    BSpline,
}

impl fmt::Display for CurveAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Bezier => "Bezier",
            Self::BSpline => "B-spline",
        })
    }
}

/// Primitive variant together with its algorithm selector.
///
/// Ellipses carry no selector: they are always drawn with the midpoint
/// algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Shape {
    /// Line drawn with the given algorithm.
    Line(LineAlgorithm),
    /// Polygon whose edges are drawn with the given algorithm.
    Polygon(LineAlgorithm),
    /// Midpoint ellipse.
    Ellipse,
    /// Curve evaluated with the given algorithm.
    Curve(CurveAlgorithm),
}

impl Shape {
    /// The kind discriminator of this shape.
    #[must_use]
    pub const fn kind(self) -> PrimitiveKind {
        match self {
            Self::Line(_) => PrimitiveKind::Line,
            Self::Polygon(_) => PrimitiveKind::Polygon,
            Self::Ellipse => PrimitiveKind::Ellipse,
            Self::Curve(_) => PrimitiveKind::Curve,
        }
    }

    /// Check a control point count against this shape's requirement.
    fn validate(self, count: usize) -> Result<()> {
        let (ok, required) = match self {
            Self::Line(_) | Self::Ellipse => (count == 2, "exactly 2"),
            Self::Polygon(_) => (count >= 1, "at least 1"),
            Self::Curve(_) => (count >= 2, "at least 2"),
        };
        if ok {
            Ok(())
        } else {
            Err(Error::InvalidGeometry {
                kind: self.kind(),
                required,
                actual: count,
            })
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Line(a) | Self::Polygon(a) => write!(f, "{}({a})", self.kind()),
            Self::Ellipse => write!(f, "{}", self.kind()),
            Self::Curve(a) => write!(f, "{}({a})", self.kind()),
        }
    }
}

/// A geometric primitive: shape plus current control points.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawPrimitive"))]
pub struct Primitive {
    shape: Shape,
    points: Vec<Point>,
}

/// Unvalidated wire form of a [`Primitive`].
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawPrimitive {
    shape: Shape,
    points: Vec<Point>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawPrimitive> for Primitive {
    type Error = Error;

    fn try_from(raw: RawPrimitive) -> Result<Self> {
        Self::new(raw.shape, raw.points)
    }
}

impl Primitive {
    /// Create a primitive, validating the control point count.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidGeometry`] when a line or ellipse does not have
    /// exactly 2 points, a polygon has none, or a curve has fewer than 2.
    pub fn new(shape: Shape, points: Vec<Point>) -> Result<Self> {
        shape.validate(points.len())?;
        Ok(Self { shape, points })
    }

    /// Create a line from its endpoints.
    #[must_use]
    pub fn line(start: Point, end: Point, algorithm: LineAlgorithm) -> Self {
        Self {
            shape: Shape::Line(algorithm),
            points: vec![start, end],
        }
    }

    /// Create a polygon from its vertices.
    pub fn polygon(vertices: Vec<Point>, algorithm: LineAlgorithm) -> Result<Self> {
        Self::new(Shape::Polygon(algorithm), vertices)
    }

    /// Create an ellipse from two opposite corners of its bounding box.
    #[must_use]
    pub fn ellipse(corner0: Point, corner1: Point) -> Self {
        Self {
            shape: Shape::Ellipse,
            points: vec![corner0, corner1],
        }
    }

    /// Create a curve from its control points.
    pub fn curve(control: Vec<Point>, algorithm: CurveAlgorithm) -> Result<Self> {
        Self::new(Shape::Curve(algorithm), control)
    }

    /// Create a primitive from a flat `x0 y0 x1 y1 ...` coordinate list.
    ///
    /// A trailing unpaired value is ignored.
    pub fn from_coords(shape: Shape, coords: &[i32]) -> Result<Self> {
        let points = coords
            .chunks_exact(2)
            .map(|xy| Point::new(xy[0], xy[1]))
            .collect();
        Self::new(shape, points)
    }

    /// The shape (kind and algorithm selector).
    #[must_use]
    pub const fn shape(&self) -> Shape {
        self.shape
    }

    /// The kind discriminator.
    #[must_use]
    pub const fn kind(&self) -> PrimitiveKind {
        self.shape.kind()
    }

    /// Current control points.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Rasterize with default [`RasterOptions`].
    #[must_use]
    pub fn render(&self) -> Vec<Point> {
        self.render_with(&RasterOptions::default())
    }

    /// Rasterize with explicit sampling options.
    #[must_use]
    pub fn render_with(&self, options: &RasterOptions) -> Vec<Point> {
        rasterize(self.shape, &self.points, options)
    }

    /// Axis-aligned bounding box of the control points.
    ///
    /// Computed from control points rather than pixels. For Bezier and
    /// B-spline curves the box encloses the curve, since both lie in the
    /// convex hull of their control points.
    #[must_use]
    pub fn bounding_rect(&self) -> Rect {
        Rect::bounding(&self.points).unwrap_or_default()
    }

    /// Apply an affine transform to every control point.
    pub fn apply(&mut self, transform: Transform) {
        self.points = transform.apply(&self.points);
    }

    /// Translate by `(dx, dy)`.
    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.apply(Transform::Translate { dx, dy });
    }

    /// Rotate by `degrees` about `pivot`.
    pub fn rotate(&mut self, pivot: Point, degrees: f64) {
        self.apply(Transform::Rotate { pivot, degrees });
    }

    /// Scale by `rate` about `pivot`.
    pub fn scale(&mut self, pivot: Point, rate: f64) {
        self.apply(Transform::Scale { pivot, rate });
    }

    /// Clip a line against a window.
    ///
    /// Returns `Ok(true)` and replaces the endpoints with the visible part
    /// when any of the line lies inside the window. Returns `Ok(false)` and
    /// leaves the line unchanged when it lies entirely outside; the owner is
    /// expected to discard it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotClippable`] for anything other than a line.
    pub fn clip(&mut self, window: Window, algorithm: ClipAlgorithm) -> Result<bool> {
        let (Shape::Line(_), [p0, p1]) = (self.shape, self.points.as_slice()) else {
            return Err(Error::NotClippable(self.kind()));
        };
        match clip_line(*p0, *p1, window, algorithm) {
            Some((q0, q1)) => {
                self.points = vec![q0, q1];
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [", self.shape)?;
        for (i, p) in self.points.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{p}")?;
        }
        f.write_str("]")
    }
}
