//! Affine transforms over control points.
//!
//! Transforms operate on points only and know nothing about primitive
//! kinds. Rotation and scaling are computed in `f64` and rounded back with
//! [`round_coord`](crate::geometry::round_coord); every operation is total.

use crate::geometry::Point;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An affine transform applied uniformly to every control point.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Transform {
    /// Offset by `(dx, dy)`.
    Translate {
        /// Horizontal offset.
        dx: i32,
        /// Vertical offset.
        dy: i32,
    },
    /// Rotate about `pivot`.
    ///
    /// Positive angles turn +x toward +y, which is clockwise on a y-down
    /// screen.
    Rotate {
        /// Fixed point of the rotation.
        pivot: Point,
        /// Angle in degrees, unbounded.
        degrees: f64,
    },
    /// Scale uniformly about `pivot`.
    ///
    /// A rate of zero collapses every point onto the pivot.
    Scale {
        /// Fixed point of the scaling.
        pivot: Point,
        /// Scale factor.
        rate: f64,
    },
}

impl Transform {
    /// Map a single point.
    #[must_use]
    pub fn apply_point(&self, p: Point) -> Point {
        match *self {
            Self::Translate { dx, dy } => p.offset(dx, dy),
            Self::Rotate { pivot, degrees } => {
                let (sin, cos) = degrees.to_radians().sin_cos();
                let (rx, ry) = relative(p, pivot);
                Point::from_f64(
                    f64::from(pivot.x) + rx * cos - ry * sin,
                    f64::from(pivot.y) + rx * sin + ry * cos,
                )
            }
            Self::Scale { pivot, rate } => {
                let (rx, ry) = relative(p, pivot);
                Point::from_f64(f64::from(pivot.x) + rx * rate, f64::from(pivot.y) + ry * rate)
            }
        }
    }

    /// Map every point, producing a new sequence.
    #[must_use]
    pub fn apply(&self, points: &[Point]) -> Vec<Point> {
        points.iter().map(|&p| self.apply_point(p)).collect()
    }
}

#[inline]
fn relative(p: Point, pivot: Point) -> (f64, f64) {
    (
        f64::from(p.x) - f64::from(pivot.x),
        f64::from(p.y) - f64::from(pivot.y),
    )
}
