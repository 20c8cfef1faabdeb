//! Fixed timestep simulation tick
//!
//! Core game loop step that advances the simulation deterministically.

use super::collision::resolve_collisions;
use super::state::{GameEvent, GameState};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Signed paddle moves queued since the last tick, in arrival order
    pub paddle_steps: Vec<i32>,
}

impl TickInput {
    /// Input with a single paddle move
    pub fn shift(offset: i32) -> Self {
        Self {
            paddle_steps: vec![offset],
        }
    }
}

/// Advance the game state by one tick
///
/// Order: queued paddle moves, ball movement, paddle collision, brick
/// collision. `state.events` is replaced with what happened this tick.
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.events.clear();
    state.time_ticks += 1;

    // Each step clamps on its own, so order matters at a wall
    for &step in &input.paddle_steps {
        state.paddle.shift(step);
    }

    let contacts = state.ball.advance();
    if contacts.side_wall {
        state.events.push(GameEvent::WallBounce);
    }
    if contacts.ceiling {
        state.events.push(GameEvent::CeilingBounce);
    }
    if contacts.lost {
        state.balls_lost += 1;
        state.events.push(GameEvent::BallLost);
        log::info!("Ball lost (total {}), respawning", state.balls_lost);
    }

    let result = resolve_collisions(&mut state.ball, &state.paddle, &mut state.bricks);
    if result.paddle_hit {
        state.events.push(GameEvent::PaddleHit);
    }
    if let Some(index) = result.brick {
        state.events.push(GameEvent::BrickDestroyed { index });
        let remaining = state.bricks.visible_count();
        log::debug!("Brick {} destroyed, {} remaining", index, remaining);

        if remaining == 0 {
            state.events.push(GameEvent::AllBricksCleared);
            log::info!("All bricks cleared after {} ticks", state.time_ticks);
        }
    }

    log::trace!(
        "tick {} ball={:?} vel={:?} paddle_x={}",
        state.time_ticks,
        state.ball.pos,
        state.ball.vel,
        state.paddle.pos.x
    );
}
