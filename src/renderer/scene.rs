//! Frame building
//!
//! Turns a read-only view of the game state into one triangle list. Draw
//! order is ball, paddle, then bricks.

use super::shapes::{filled_rect, inscribed_circle, rect_outline};
use super::vertex::{Vertex, colors};
use crate::sim::GameState;

/// Build the vertices for one frame
pub fn build_frame(state: &GameState) -> Vec<Vertex> {
    let mut vertices = inscribed_circle(state.ball.bounds(), colors::BALL);
    vertices.extend(filled_rect(state.paddle.bounds(), colors::PADDLE));

    for brick in state.bricks.iter().filter(|b| b.is_visible()) {
        vertices.extend(filled_rect(brick.bounds(), colors::BRICK));
        vertices.extend(rect_outline(brick.bounds(), colors::BRICK_OUTLINE));
    }

    vertices
}
