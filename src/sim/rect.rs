//! Axis-aligned bounding boxes
//!
//! Every entity collides as an integer rectangle in window space:
//! - pos: top-left corner (x grows right, y grows down)
//! - size: width and height in pixels

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// An integer axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: IVec2,
    /// Width and height
    pub size: IVec2,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            pos: IVec2::new(x, y),
            size: IVec2::new(width, height),
        }
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.pos.x
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.pos.y
    }

    /// Exclusive right edge
    #[inline]
    pub fn right(&self) -> i32 {
        self.pos.x + self.size.x
    }

    /// Exclusive bottom edge
    #[inline]
    pub fn bottom(&self) -> i32 {
        self.pos.y + self.size.y
    }

    /// True if the rectangle covers no pixels
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size.x <= 0 || self.size.y <= 0
    }

    /// Check if two rectangles overlap
    ///
    /// Rectangles that only share an edge do not intersect, and an empty
    /// rectangle never intersects anything.
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }

        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}
