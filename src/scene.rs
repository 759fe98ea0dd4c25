//! Headless scene: an owning collection of colored primitives.
//!
//! The scene assigns element ids, routes transform and clip requests to the
//! right primitive, removes lines that a clip leaves invisible, and answers
//! hit-test queries from bounding rectangles. It does not draw: [`Scene::render`]
//! returns pixel lists for a compositor to consume.

use std::collections::BTreeMap;
use std::fmt;

use crate::clip::ClipAlgorithm;
use crate::color::Rgba;
use crate::config::SceneConfig;
use crate::error::{Error, Result};
use crate::geometry::{Point, Rect, Window};
use crate::primitive::Primitive;
use crate::render::RasterOptions;
use crate::transform::Transform;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Smallest accepted canvas edge, in pixels.
pub const MIN_CANVAS_SIZE: u32 = 100;
/// Largest accepted canvas edge, in pixels.
pub const MAX_CANVAS_SIZE: u32 = 1000;

/// Identifier of a scene element. Ids start at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ElementId(u64);

impl ElementId {
    /// Wrap a raw id.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A primitive owned by a scene, with its draw color.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Element {
    /// Element id.
    pub id: ElementId,
    /// Geometry.
    pub primitive: Primitive,
    /// Draw color.
    pub color: Rgba,
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.id, self.primitive)
    }
}

/// Result of clipping a scene element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipOutcome {
    /// The line was shortened to its visible part and stays in the scene.
    Kept,
    /// The line was entirely outside the window and has been removed.
    Removed,
}

/// Pixels of one element, ready for compositing.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedElement {
    /// Element id.
    pub id: ElementId,
    /// Draw color.
    pub color: Rgba,
    /// Rasterized pixels that fall on the canvas.
    pub pixels: Vec<Point>,
}

/// Owning collection of elements on a fixed-size canvas.
#[derive(Debug, Clone)]
pub struct Scene {
    width: u32,
    height: u32,
    options: RasterOptions,
    next_id: u64,
    elements: BTreeMap<ElementId, Element>,
}

fn validate_size(width: u32, height: u32) -> Result<()> {
    let range = MIN_CANVAS_SIZE..=MAX_CANVAS_SIZE;
    if range.contains(&width) && range.contains(&height) {
        Ok(())
    } else {
        Err(Error::InvalidDimensions { width, height })
    }
}

impl Scene {
    /// Create an empty scene.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] unless both edges are within
    /// [`MIN_CANVAS_SIZE`]..=[`MAX_CANVAS_SIZE`].
    pub fn new(width: u32, height: u32) -> Result<Self> {
        validate_size(width, height)?;
        Ok(Self {
            width,
            height,
            options: RasterOptions::default(),
            next_id: 1,
            elements: BTreeMap::new(),
        })
    }

    /// Create an empty scene from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] for an out-of-range canvas size.
    pub fn from_config(config: &SceneConfig) -> Result<Self> {
        let mut scene = Self::new(config.width, config.height)?;
        scene.options = config.raster;
        Ok(scene)
    }

    /// Canvas width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Canvas height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Sampling options used by [`Scene::render`].
    #[must_use]
    pub const fn raster_options(&self) -> &RasterOptions {
        &self.options
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// True when the scene holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Add a primitive and return its new id.
    pub fn add(&mut self, primitive: Primitive, color: Rgba) -> ElementId {
        let id = ElementId(self.next_id);
        self.next_id += 1;
        tracing::debug!(%id, kind = %primitive.kind(), "element added");
        self.elements.insert(
            id,
            Element {
                id,
                primitive,
                color,
            },
        );
        id
    }

    /// Remove an element, returning it if it existed.
    pub fn remove(&mut self, id: ElementId) -> Option<Element> {
        let removed = self.elements.remove(&id);
        if removed.is_some() {
            tracing::debug!(%id, "element removed");
        }
        removed
    }

    /// Look up an element.
    #[must_use]
    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(&id)
    }

    /// Elements in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &Element> {
        self.elements.values()
    }

    /// Remove every element. Ids keep counting from where they were.
    pub fn clear(&mut self) {
        tracing::debug!(count = self.elements.len(), "scene cleared");
        self.elements.clear();
    }

    /// Resize the canvas, remove every element and restart ids at 1.
    ///
    /// An invalid size leaves the scene untouched.
    pub fn reset(&mut self, width: u32, height: u32) -> Result<()> {
        validate_size(width, height)?;
        tracing::debug!(width, height, "scene reset");
        self.width = width;
        self.height = height;
        self.next_id = 1;
        self.elements.clear();
        Ok(())
    }

    fn primitive_mut(&mut self, id: ElementId) -> Result<&mut Primitive> {
        self.elements
            .get_mut(&id)
            .map(|e| &mut e.primitive)
            .ok_or(Error::UnknownElement(id))
    }

    /// Apply an affine transform to one element.
    pub fn transform(&mut self, id: ElementId, transform: Transform) -> Result<()> {
        tracing::trace!(%id, ?transform, "transform element");
        self.primitive_mut(id)?.apply(transform);
        Ok(())
    }

    /// Translate one element.
    pub fn translate(&mut self, id: ElementId, dx: i32, dy: i32) -> Result<()> {
        self.transform(id, Transform::Translate { dx, dy })
    }

    /// Rotate one element about `pivot`.
    pub fn rotate(&mut self, id: ElementId, pivot: Point, degrees: f64) -> Result<()> {
        self.transform(id, Transform::Rotate { pivot, degrees })
    }

    /// Scale one element about `pivot`.
    pub fn scale(&mut self, id: ElementId, pivot: Point, rate: f64) -> Result<()> {
        self.transform(id, Transform::Scale { pivot, rate })
    }

    /// Clip a line element, removing it when nothing remains visible.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownElement`] for a missing id and [`Error::NotClippable`]
    /// when the element is not a line.
    pub fn clip(
        &mut self,
        id: ElementId,
        window: Window,
        algorithm: ClipAlgorithm,
    ) -> Result<ClipOutcome> {
        if self.primitive_mut(id)?.clip(window, algorithm)? {
            Ok(ClipOutcome::Kept)
        } else {
            tracing::debug!(%id, %algorithm, "line clipped away");
            self.elements.remove(&id);
            Ok(ClipOutcome::Removed)
        }
    }

    /// Element under `point`.
    ///
    /// Picks the element whose bounding rectangle contains the point and has
    /// the smallest area; ties go to the lowest id.
    #[must_use]
    pub fn pick(&self, point: Point) -> Option<ElementId> {
        let mut best: Option<(u64, ElementId)> = None;
        for element in self.elements.values() {
            let rect = element.primitive.bounding_rect();
            if !rect.contains(point) {
                continue;
            }
            let area = rect.area();
            if best.map_or(true, |(a, _)| area < a) {
                best = Some((area, element.id));
            }
        }
        best.map(|(_, id)| id)
    }

    /// Rasterize every element, dropping pixels that fall off the canvas.
    #[must_use]
    pub fn render(&self) -> Vec<RenderedElement> {
        let canvas = Rect::new(0, 0, self.width.saturating_sub(1), self.height.saturating_sub(1));
        self.elements
            .values()
            .map(|e| RenderedElement {
                id: e.id,
                color: e.color,
                pixels: e
                    .primitive
                    .render_with(&self.options)
                    .into_iter()
                    .filter(|p| canvas.contains(*p))
                    .collect(),
            })
            .collect()
    }
}

impl Default for Scene {
    /// A 500x500 empty scene.
    fn default() -> Self {
        Self {
            width: 500,
            height: 500,
            options: RasterOptions::default(),
            next_id: 1,
            elements: BTreeMap::new(),
        }
    }
}
