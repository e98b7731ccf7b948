//! Bounded trajectory history for bodies
//!
//! A `Trail` is a fixed-capacity ring buffer of past positions. It is purely
//! observational: nothing in the physics reads it.

use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// Ring buffer of the most recent positions of a body
///
/// Holds at most `capacity` points. Once full, each push overwrites the
/// oldest point, so eviction is O(1).
///
/// # Examples
///
/// ```
/// use gravity_sandbox::trail::Trail;
/// use nalgebra::Point2;
///
/// let mut trail = Trail::with_capacity(2);
/// trail.push(Point2::new(0.0, 0.0));
/// trail.push(Point2::new(1.0, 0.0));
/// trail.push(Point2::new(2.0, 0.0));
///
/// let points: Vec<_> = trail.iter().collect();
/// assert_eq!(points, vec![Point2::new(1.0, 0.0), Point2::new(2.0, 0.0)]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trail {
    points: Vec<Point2<f64>>,
    /// Index of the oldest point once the buffer is full
    head: usize,
    capacity: usize,
}

impl Trail {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
            head: 0,
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Appends a position, evicting the oldest one if the trail is full
    pub fn push(&mut self, point: Point2<f64>) {
        if self.capacity == 0 {
            return;
        }

        if self.points.len() < self.capacity {
            self.points.push(point);
        } else {
            self.points[self.head] = point;
            self.head = (self.head + 1) % self.capacity;
        }
    }

    /// Changes the capacity, keeping the most recent points that still fit
    pub fn set_capacity(&mut self, capacity: usize) {
        if capacity == self.capacity {
            return;
        }

        let skip = self.len().saturating_sub(capacity);
        let kept: Vec<Point2<f64>> = self.iter().skip(skip).collect();

        self.points = kept;
        self.points.reserve(capacity.saturating_sub(self.points.len()));
        self.head = 0;
        self.capacity = capacity;
    }

    pub fn clear(&mut self) {
        self.points.clear();
        self.head = 0;
    }

    /// Iterates from the oldest to the most recent point
    pub fn iter(&self) -> impl Iterator<Item = Point2<f64>> + '_ {
        let (newer, older) = self.points.split_at(self.head);
        older.iter().chain(newer.iter()).copied()
    }

    /// Most recently recorded position
    pub fn latest(&self) -> Option<Point2<f64>> {
        if self.points.is_empty() {
            None
        } else if self.head == 0 {
            self.points.last().copied()
        } else {
            Some(self.points[self.head - 1])
        }
    }

    /// Splits the trail into drawable polylines
    ///
    /// A step longer than `jump_threshold` (a wrap-around teleport) starts a
    /// new segment. Segments with fewer than two points are dropped since
    /// they cannot be drawn as lines.
    pub fn segments(&self, jump_threshold: f64) -> Vec<Vec<Point2<f64>>> {
        let mut segments = Vec::new();
        let mut current: Vec<Point2<f64>> = Vec::new();

        for point in self.iter() {
            let jumped = current
                .last()
                .is_some_and(|last| (point - *last).magnitude() > jump_threshold);

            if jumped {
                if current.len() > 1 {
                    segments.push(std::mem::take(&mut current));
                } else {
                    current.clear();
                }
            }
            current.push(point);
        }

        if current.len() > 1 {
            segments.push(current);
        }

        segments
    }
}
