//! Plain-data view of what is on screen

use glam::Vec2;
use serde::Serialize;

use crate::sim::{GamePhase, GameState};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BallView {
    pub pos: Vec2,
    pub size: Vec2,
    pub frame: u8,
}

/// Read-only copy of the visible state for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderSnapshot {
    pub phase: GamePhase,
    pub ball: BallView,
    pub paddle: Vec2,
    /// Top-left corners of the blocks still standing
    pub blocks: Vec<Vec2>,
    pub score: u32,
}

impl RenderSnapshot {
    pub fn capture(state: &GameState) -> Self {
        Self {
            phase: state.phase,
            ball: BallView {
                pos: state.ball.pos,
                size: state.ball.size,
                frame: state.ball.frame(),
            },
            paddle: state.paddle.pos,
            blocks: state.grid.iter_active().map(|(_, b)| b.pos).collect(),
            score: state.score,
        }
    }
}
