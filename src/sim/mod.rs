//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per tick, no wall-clock time
//! - Seeded RNG only
//! - Blocks are visited in grid order
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{Rect, Side, boundary_violation, intersects};
pub use state::{
    Ball, Block, BlockGrid, Command, Direction, GameEvent, GamePhase, GameRng, GameState, Outcome,
    Paddle, SpriteAnimation,
};
pub use tick::tick;
