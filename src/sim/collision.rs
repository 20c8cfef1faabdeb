//! Collision detection and response
//!
//! Runs once per tick after the ball has moved. Everything is a bounding box
//! overlap test; there is no swept collision, so a fast ball can tunnel.

use super::state::{Ball, BrickGrid, Paddle};

/// Result of resolving collisions for one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionResult {
    /// Ball overlapped the paddle and had its y-velocity flipped
    pub paddle_hit: bool,
    /// Grid index of the brick destroyed this tick
    pub brick: Option<usize>,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self::default()
    }
}

/// Check whether the ball overlaps the paddle
pub fn ball_paddle_collision(ball: &Ball, paddle: &Paddle) -> bool {
    ball.bounds().intersects(&paddle.bounds())
}

/// Find the first visible brick the ball overlaps, in grid order
pub fn first_brick_hit(ball: &Ball, bricks: &BrickGrid) -> Option<usize> {
    let bounds = ball.bounds();
    bricks
        .iter()
        .position(|brick| brick.is_visible() && brick.bounds().intersects(&bounds))
}

/// Apply paddle then brick collisions to the ball
///
/// The paddle flips the ball's y-velocity on every tick of overlap. At most
/// one brick is destroyed per tick: the first visible one in row-major order.
pub fn resolve_collisions(
    ball: &mut Ball,
    paddle: &Paddle,
    bricks: &mut BrickGrid,
) -> CollisionResult {
    let mut result = CollisionResult::miss();

    if ball_paddle_collision(ball, paddle) {
        ball.reverse_y();
        result.paddle_hit = true;
    }

    if let Some(index) = first_brick_hit(ball, bricks) {
        bricks.hide(index);
        ball.reverse_y();
        result.brick = Some(index);
    }

    result
}
