//! Free-hand scratch work drawn beside a problem.
//!
//! Strokes are an append-only log: completed strokes never change, at most one
//! stroke is in progress, undo drops the newest completed stroke.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A pointer position on the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, derive_new::new)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f32,
    /// Vertical coordinate.
    pub y: f32,
}

/// A finished stroke: the points visited between pointer down and up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    points: Vec<Point>,
}

impl Stroke {
    /// Points in drawing order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }
}

/// Scratch work for the current problem.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scratchpad {
    strokes: Vec<Stroke>,
    current: Option<Vec<Point>>,
}

impl Scratchpad {
    /// Creates an empty scratch pad.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a stroke at `point`, finishing any stroke still in progress.
    #[instrument(skip(self))]
    pub fn begin_stroke(&mut self, point: Point) {
        self.end_stroke();
        self.current = Some(vec![point]);
    }

    /// Adds a point to the stroke in progress. Ignored when none is.
    pub fn extend_stroke(&mut self, point: Point) {
        match self.current.as_mut() {
            Some(points) => points.push(point),
            None => debug!("Point received with no stroke in progress"),
        }
    }

    /// Completes the stroke in progress, if any.
    #[instrument(skip(self))]
    pub fn end_stroke(&mut self) {
        if let Some(points) = self.current.take() {
            self.strokes.push(Stroke { points });
        }
    }

    /// Removes and returns the most recent completed stroke.
    #[instrument(skip(self), fields(strokes = self.strokes.len()))]
    pub fn undo(&mut self) -> Option<Stroke> {
        self.strokes.pop()
    }

    /// Removes every stroke, including the one in progress.
    #[instrument(skip(self))]
    pub fn clear(&mut self) {
        self.strokes.clear();
        self.current = None;
    }

    /// Completed strokes, oldest first.
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    /// Points of the stroke in progress.
    pub fn current(&self) -> Option<&[Point]> {
        self.current.as_deref()
    }

    /// True when nothing has been drawn.
    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty() && self.current.is_none()
    }
}
