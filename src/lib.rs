//! Brick Breaker - A single-screen Breakout arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, collisions, win/lose)
//! - `renderer`: Display list for the sprite renderer
//! - `platform`: Frame scheduling and the animation timer
//! - `assets`: Preload tracking with opaque handles
//! - `input`: Key codes to paddle commands

pub mod assets;
pub mod audio;
pub mod error;
pub mod input;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{Error, Result};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (one tick per display refresh)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Largest frame delta accepted from the host (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// World dimensions
    pub const WORLD_WIDTH: f32 = 640.0;
    pub const WORLD_HEIGHT: f32 = 360.0;

    /// Ball defaults - starts resting on the paddle
    pub const BALL_START_X: f32 = 320.0;
    pub const BALL_START_Y: f32 = 280.0;
    pub const BALL_SIZE: f32 = 20.0;
    pub const BALL_VELOCITY: f32 = 3.0;

    /// Ball sprite sheet: 4 frames laid out horizontally
    pub const BALL_FRAME_COUNT: u8 = 4;
    /// Seconds between sprite frames (100ms)
    pub const BALL_FRAME_INTERVAL: f32 = 0.1;

    /// Paddle defaults
    pub const PADDLE_START_X: f32 = 280.0;
    pub const PADDLE_START_Y: f32 = 300.0;
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 14.0;
    pub const PADDLE_VELOCITY: f32 = 6.0;

    /// Block layout
    pub const BLOCK_WIDTH: f32 = 60.0;
    pub const BLOCK_HEIGHT: f32 = 20.0;
    pub const BLOCK_ROWS: usize = 4;
    pub const BLOCK_COLS: usize = 8;
    pub const BLOCK_COL_SPACING: f32 = 64.0;
    pub const BLOCK_ROW_SPACING: f32 = 24.0;
    pub const BLOCK_X_OFFSET: f32 = 65.0;
    pub const BLOCK_Y_OFFSET: f32 = 30.0;

    /// Score readout position
    pub const SCORE_TEXT_X: f32 = 15.0;
    pub const SCORE_TEXT_Y: f32 = 20.0;
}
