//! # Trueno-Draw
//!
//! Deterministic 2D rasterization, affine transform and line clipping kernel.
//!
//! Primitives (lines, polygons, ellipses, Bezier and B-spline curves) are
//! described by integer control points. The kernel turns them into pixel
//! sequences, transforms them in place about arbitrary pivots, and clips
//! lines against rectangular windows. Everything is pure computation over
//! in-memory point lists: no I/O, no global state, no hidden caches.
//!
//! ## Features
//!
//! - **Lines**: DDA and Bresenham rasterization
//! - **Ellipses**: midpoint algorithm with four-way symmetry
//! - **Curves**: De Casteljau Bezier and uniform cubic B-spline, always connected
//! - **Transforms**: translate, rotate and scale about a pivot, rounded to pixels
//! - **Clipping**: Cohen–Sutherland and Liang–Barsky, agreeing on visibility
//! - **Scene**: headless element collection with hit-testing and clip-discard
//!
//! ## Quick Start
//!
//! ```rust
//! use trueno_draw::prelude::*;
//!
//! let mut line = Primitive::line(Point::new(100, 400), Point::new(300, 200), LineAlgorithm::Dda);
//! assert_eq!(line.render().len(), 201);
//!
//! let visible = line.clip(Window::new(150, 150, 350, 350), ClipAlgorithm::LiangBarsky)?;
//! assert!(visible);
//! assert_eq!(line.points(), &[Point::new(150, 350), Point::new(300, 200)]);
//! # Ok::<(), trueno_draw::Error>(())
//! ```
//!
//! ## Rounding
//!
//! Every float-to-pixel conversion rounds to the nearest integer with ties
//! away from zero; see [`geometry::round_coord`].
//!
//! ## Feature Flags
//!
//! - `serde`: Serialize/deserialize primitives, scenes and options
//! - `config`: YAML configuration loading
//! - `full`: All features enabled

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in rasterization code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::float_cmp)]

// ============================================================================
// Core Modules
// ============================================================================

/// Points, rectangles, clip windows and the rounding policy.
pub mod geometry;

/// Primitive model and facade.
pub mod primitive;

// ============================================================================
// Algorithm Modules
// ============================================================================

/// Rasterization of primitives into pixel sequences.
pub mod render;

/// Affine transforms over control points.
pub mod transform;

/// Line clipping against rectangular windows.
pub mod clip;

// ============================================================================
// Scene Modules
// ============================================================================

/// Element colors.
pub mod color;

/// Scene and raster configuration.
pub mod config;

/// Headless element collection.
pub mod scene;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for trueno-draw operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust
/// use trueno_draw::prelude::*;
/// ```
pub mod prelude {
    pub use crate::clip::ClipAlgorithm;
    pub use crate::color::Rgba;
    pub use crate::config::SceneConfig;
    pub use crate::error::{Error, Result};
    pub use crate::geometry::{Point, Rect, Window};
    pub use crate::primitive::{CurveAlgorithm, LineAlgorithm, Primitive, PrimitiveKind, Shape};
    pub use crate::render::RasterOptions;
    pub use crate::scene::{ClipOutcome, Element, ElementId, Scene};
    pub use crate::transform::Transform;
}

// ============================================================================
// Tests
// ============================================================================
