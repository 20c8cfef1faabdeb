//! Fixed timestep scheduler
//!
//! Owns the game state and the input handler. The window feeds it elapsed
//! wall time; it runs as many whole ticks as fit and keeps the remainder.

use std::time::Duration;

use crate::input::{InputHandler, Key};
use crate::settings::Settings;
use crate::sim::{GameState, tick};

/// Longest frame accounted for; anything beyond is treated as a stall
const MAX_FRAME_TIME: Duration = Duration::from_millis(100);

/// Game instance holding all state
#[derive(Debug, Clone)]
pub struct Game {
    state: GameState,
    input: InputHandler,
    accumulator: Duration,
    tick_interval: Duration,
    max_substeps: u32,
}

impl Game {
    pub fn new(settings: &Settings) -> Self {
        Self {
            state: GameState::new(),
            input: InputHandler::from_settings(settings),
            accumulator: Duration::ZERO,
            tick_interval: settings.tick_interval(),
            max_substeps: settings.max_substeps.max(1),
        }
    }

    /// Current state, for rendering
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn key_down(&mut self, key: Key, repeat: bool) {
        self.input.key_down(key, repeat);
    }

    pub fn key_up(&mut self, key: Key) {
        self.input.key_up(key);
    }

    pub fn focus_lost(&mut self) {
        self.input.release_all();
    }

    /// Run ticks for `elapsed` wall time, returning how many ran
    pub fn update(&mut self, elapsed: Duration) -> u32 {
        self.accumulator += elapsed.min(MAX_FRAME_TIME);

        let mut substeps = 0;
        while self.accumulator >= self.tick_interval && substeps < self.max_substeps {
            let input = self.input.next_tick_input();
            tick(&mut self.state, &input);
            self.accumulator -= self.tick_interval;
            substeps += 1;
        }

        // Too far behind: drop the backlog instead of spiralling
        if self.accumulator >= self.tick_interval {
            log::debug!(
                "Dropping {:?} of tick backlog after {} substeps",
                self.accumulator,
                substeps
            );
            self.accumulator = Duration::ZERO;
        }

        substeps
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(&Settings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::InputModel;
    use glam::IVec2;

    #[test]
    fn test_update_runs_whole_ticks() {
        let mut game = Game::default();
        assert_eq!(game.update(Duration::from_millis(25)), 2);
        assert_eq!(game.state().time_ticks, 2);

        // 5ms carried over + 5ms completes a third tick
        assert_eq!(game.update(Duration::from_millis(5)), 1);
        assert_eq!(game.state().time_ticks, 3);
        assert_eq!(game.state().ball.pos, IVec2::new(406, 294));
    }

    #[test]
    fn test_short_frames_accumulate() {
        let mut game = Game::default();
        for _ in 0..3 {
            assert_eq!(game.update(Duration::from_millis(3)), 0);
        }
        assert_eq!(game.update(Duration::from_millis(3)), 1);
    }

    #[test]
    fn test_substeps_are_capped() {
        let mut game = Game::default();
        assert_eq!(game.update(Duration::from_millis(95)), 8);
        // Backlog was dropped
        assert_eq!(game.update(Duration::ZERO), 0);
    }

    #[test]
    fn test_long_stall_is_clamped() {
        let settings = Settings {
            max_substeps: 1000,
            ..Settings::default()
        };
        let mut game = Game::new(&settings);
        assert_eq!(game.update(Duration::from_secs(5)), 10);
    }

    #[test]
    fn test_input_reaches_paddle() {
        let mut game = Game::default();
        game.key_down(Key::Left, false);
        game.update(Duration::from_millis(10));
        assert_eq!(game.state().paddle.pos.x, 335);

        game.key_up(Key::Left);
        game.update(Duration::from_millis(50));
        assert_eq!(game.state().paddle.pos.x, 335);
    }

    #[test]
    fn test_presses_each_clamp_at_wall() {
        let settings = Settings {
            input_model: InputModel::Discrete,
            ..Settings::default()
        };
        let mut game = Game::new(&settings);
        while game.state().paddle.pos.x > 0 {
            game.key_down(Key::Left, false);
            game.update(Duration::from_millis(10));
        }

        game.key_down(Key::Left, false);
        game.key_down(Key::Right, false);
        game.update(Duration::from_millis(10));
        assert_eq!(game.state().paddle.pos.x, 15);
    }

    #[test]
    fn test_focus_lost_stops_held_key() {
        let mut game = Game::default();
        game.key_down(Key::Right, false);
        game.focus_lost();
        game.update(Duration::from_millis(80));
        // Only the initial tap
        assert_eq!(game.state().paddle.pos.x, 365);
    }
}
