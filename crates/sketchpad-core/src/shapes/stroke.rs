//! Freehand marker stroke.

use super::{DrawableId, DrawableTrait, SerializableColor};
use kurbo::{BezPath, Point, Rect};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A freehand stroke (series of points drawn with one fixed width).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub(crate) id: DrawableId,
    /// Points in the order they were drawn. Never empty.
    points: Vec<Point>,
    /// Line width, fixed at creation.
    width: f64,
    /// Stroke color.
    pub color: SerializableColor,
}

impl Stroke {
    /// Start a new stroke at `start`.
    pub fn new(start: Point, width: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            points: vec![start],
            width,
            color: SerializableColor::black(),
        }
    }

    /// Start a new stroke with an explicit color.
    pub fn with_color(start: Point, width: f64, color: SerializableColor) -> Self {
        Self {
            color,
            ..Self::new(start, width)
        }
    }

    /// Append a point to the path.
    pub fn extend(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Points of the path, oldest first.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Line width this stroke was created with.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Get the number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Strokes always hold their starting point.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether the stroke has enough points to produce a visible line.
    pub fn is_renderable(&self) -> bool {
        self.points.len() >= 2
    }

    /// Polyline through every point, or `None` when there is nothing to draw.
    pub fn to_path(&self) -> Option<BezPath> {
        if !self.is_renderable() {
            return None;
        }

        let mut path = BezPath::new();
        path.move_to(self.points[0]);
        for point in &self.points[1..] {
            path.line_to(*point);
        }
        Some(path)
    }
}

impl DrawableTrait for Stroke {
    fn id(&self) -> DrawableId {
        self.id
    }

    fn bounds(&self) -> Rect {
        let Some(first) = self.points.first() else {
            return Rect::ZERO;
        };

        let bounds = self
            .points
            .iter()
            .fold(Rect::from_points(*first, *first), |rect, p| {
                rect.union_pt(*p)
            });
        let half = self.width / 2.0;
        bounds.inflate(half, half)
    }

    fn drag(&mut self, point: Point) {
        self.extend(point);
    }
}
