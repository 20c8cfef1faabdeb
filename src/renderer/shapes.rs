//! Shape generation for 2D primitives
//!
//! All shapes are emitted as triangle lists in window pixel coordinates.

use glam::Vec2;
use std::f32::consts::TAU;

use super::vertex::Vertex;
use crate::sim::Rect;

/// Segments used for the ball outline
pub const CIRCLE_SEGMENTS: u32 = 32;

/// Generate vertices for a filled circle inscribed in a bounding box
///
/// A fan of `CIRCLE_SEGMENTS` triangles around the box center.
pub fn inscribed_circle(bounds: Rect, color: [f32; 4]) -> Vec<Vertex> {
    let size = bounds.size.as_vec2();
    let center = bounds.pos.as_vec2() + size / 2.0;
    let radius = size.x.min(size.y) / 2.0;
    let rim = |i: u32| {
        let theta = i as f32 / CIRCLE_SEGMENTS as f32 * TAU;
        center + radius * Vec2::from_angle(theta)
    };

    (0..CIRCLE_SEGMENTS)
        .flat_map(|i| [center, rim(i), rim(i + 1)])
        .map(|p| Vertex::new(p.x, p.y, color))
        .collect()
}

/// Generate vertices for a filled axis-aligned quad
pub fn quad(min: Vec2, max: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    vec![
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(max.x, max.y, color),
    ]
}

/// Generate vertices for a filled rectangle
pub fn filled_rect(rect: Rect, color: [f32; 4]) -> Vec<Vertex> {
    let min = rect.pos.as_vec2();
    quad(min, min + rect.size.as_vec2(), color)
}

/// Generate vertices for a one pixel rectangle outline
///
/// Matches a stroked rectangle: the outline covers `width + 1` by
/// `height + 1` pixels, so the right and bottom lines sit just outside the
/// filled area.
pub fn rect_outline(rect: Rect, color: [f32; 4]) -> Vec<Vertex> {
    let min = rect.pos.as_vec2();
    let max = min + rect.size.as_vec2();

    let mut vertices = Vec::with_capacity(24);
    // Top and bottom
    vertices.extend(quad(min, Vec2::new(max.x + 1.0, min.y + 1.0), color));
    vertices.extend(quad(Vec2::new(min.x, max.y), max + 1.0, color));
    // Left and right
    vertices.extend(quad(Vec2::new(min.x, min.y + 1.0), Vec2::new(min.x + 1.0, max.y), color));
    vertices.extend(quad(Vec2::new(max.x, min.y + 1.0), Vec2::new(max.x + 1.0, max.y), color));
    vertices
}
