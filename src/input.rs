//! Keyboard input handling
//!
//! Window events are recorded here as they arrive and drained once per tick
//! into a [`TickInput`], so the paddle only ever moves at a tick boundary.

use crate::consts::PADDLE_STEP;
use crate::settings::{InputModel, Settings};
use crate::sim::TickInput;

/// Keys the game listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
}

impl Key {
    /// Paddle offset for one step in this direction
    pub fn step(self) -> i32 {
        match self {
            Key::Left => -PADDLE_STEP,
            Key::Right => PADDLE_STEP,
        }
    }
}

/// Held state of one key for the continuous model
#[derive(Debug, Clone, Copy, Default)]
struct HeldKey {
    down: bool,
    /// Ticks left until the next repeated step
    countdown: u32,
}

/// Turns key events into per-tick paddle offsets
#[derive(Debug, Clone)]
pub struct InputHandler {
    model: InputModel,
    repeat_ticks: u32,
    /// Steps queued by key presses, applied in order on the next tick
    pending: Vec<i32>,
    left: HeldKey,
    right: HeldKey,
}

impl InputHandler {
    pub fn new(model: InputModel, repeat_ticks: u32) -> Self {
        Self {
            model,
            repeat_ticks: repeat_ticks.max(1),
            pending: Vec::new(),
            left: HeldKey::default(),
            right: HeldKey::default(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.input_model, settings.repeat_ticks())
    }

    fn held_mut(&mut self, key: Key) -> &mut HeldKey {
        match key {
            Key::Left => &mut self.left,
            Key::Right => &mut self.right,
        }
    }

    /// Record a key-down event; `repeat` marks host key-repeat events
    pub fn key_down(&mut self, key: Key, repeat: bool) {
        match self.model {
            InputModel::Discrete => self.pending.push(key.step()),
            InputModel::Continuous => {
                if repeat || self.held_mut(key).down {
                    return;
                }
                // A tap moves one step even if released before the next tick
                self.pending.push(key.step());
                // The tick that applies the tap also counts down
                let countdown = self.repeat_ticks.saturating_add(1);
                let held = self.held_mut(key);
                held.down = true;
                held.countdown = countdown;
            }
        }
    }

    pub fn key_up(&mut self, key: Key) {
        *self.held_mut(key) = HeldKey::default();
    }

    /// Forget held keys, e.g. when the window loses focus
    pub fn release_all(&mut self) {
        self.left = HeldKey::default();
        self.right = HeldKey::default();
    }

    /// Drain queued movement for the next tick
    pub fn next_tick_input(&mut self) -> TickInput {
        let mut steps = std::mem::take(&mut self.pending);

        if self.model == InputModel::Continuous {
            let repeat_ticks = self.repeat_ticks;
            for (key, held) in [(Key::Left, &mut self.left), (Key::Right, &mut self.right)] {
                if !held.down {
                    continue;
                }
                held.countdown = held.countdown.saturating_sub(1);
                if held.countdown == 0 {
                    steps.push(key.step());
                    held.countdown = repeat_ticks;
                }
            }
        }

        TickInput {
            paddle_steps: steps,
        }
    }
}
