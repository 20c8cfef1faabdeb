//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Integer pixel math only
//! - One tick per call, no clocks
//! - Stable iteration order (bricks are scanned row-major)
//! - No rendering or platform dependencies

pub mod collision;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{CollisionResult, ball_paddle_collision, first_brick_hit, resolve_collisions};
pub use rect::Rect;
pub use state::{Ball, BoundaryContacts, Brick, BrickGrid, GameEvent, GameState, Paddle};
pub use tick::{TickInput, tick};
