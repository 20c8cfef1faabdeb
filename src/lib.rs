//! Brick Breaker - A single-screen arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball, paddle, bricks, collisions, tick)
//! - `input`: Arrow key handling, turned into per-tick paddle offsets
//! - `game`: Fixed timestep scheduler around the simulation
//! - `renderer`: wgpu rendering pipeline
//! - `app`: winit window and event loop
//! - `settings`: Runtime configuration

pub mod app;
pub mod error;
pub mod game;
pub mod input;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{Error, Result};
pub use game::Game;
pub use settings::{InputModel, Settings};

/// Game configuration constants
pub mod consts {
    use glam::IVec2;

    /// Window dimensions (logical pixels)
    pub const WINDOW_WIDTH: i32 = 800;
    pub const WINDOW_HEIGHT: i32 = 600;
    pub const WINDOW_TITLE: &str = "Brick Breaker";

    /// Fixed simulation timestep in milliseconds (~100 ticks per second)
    pub const TICK_INTERVAL_MS: u64 = 10;
    /// Maximum ticks per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Ball defaults
    pub const BALL_DIAMETER: i32 = 20;
    pub const BALL_SPAWN: IVec2 = IVec2::new(400, 300);
    pub const BALL_START_VEL: IVec2 = IVec2::new(2, -2);

    /// Paddle defaults
    pub const PADDLE_WIDTH: i32 = 100;
    pub const PADDLE_HEIGHT: i32 = 15;
    pub const PADDLE_START: IVec2 = IVec2::new(350, 550);
    /// Pixels moved per arrow key step
    pub const PADDLE_STEP: i32 = 15;
    /// Rightmost paddle x (800 - 100)
    pub const PADDLE_MAX_X: i32 = WINDOW_WIDTH - PADDLE_WIDTH;

    /// Brick grid layout
    pub const BRICK_WIDTH: i32 = 60;
    pub const BRICK_HEIGHT: i32 = 20;
    pub const BRICK_ROWS: usize = 5;
    pub const BRICK_COLS: usize = 10;
    pub const BRICK_ORIGIN: IVec2 = IVec2::new(80, 50);
    /// Distance between the top-left corners of neighbouring bricks
    pub const BRICK_SPACING: IVec2 = IVec2::new(70, 30);
}
