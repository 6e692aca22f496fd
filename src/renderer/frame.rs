//! Display list for a sprite renderer

use glam::Vec2;

use crate::assets::{AssetHandle, Sprites};
use crate::consts::{SCORE_TEXT_X, SCORE_TEXT_Y};
use crate::sim::{GameState, Rect};

/// One drawing operation, executed in order
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Clear the whole canvas
    Clear { width: f32, height: f32 },
    /// Draw a full sprite with its top-left corner at `pos`
    Sprite { sprite: AssetHandle, pos: Vec2 },
    /// Draw the `src` region of a sprite sheet into `dst`
    SpriteRegion {
        sprite: AssetHandle,
        src: Rect,
        dst: Rect,
    },
    /// Draw a text line with its baseline at `pos`
    Text { text: String, pos: Vec2 },
}

/// Build the draw list for the current state.
///
/// Order: background, ball, paddle, active blocks, score readout.
pub fn build_frame(state: &GameState, sprites: &Sprites) -> Vec<DrawCommand> {
    let world = state.world;
    let ball = &state.ball;
    let mut cmds = Vec::with_capacity(state.grid.total() + 5);

    cmds.push(DrawCommand::Clear {
        width: world.w,
        height: world.h,
    });
    cmds.push(DrawCommand::Sprite {
        sprite: sprites.background,
        pos: Vec2::ZERO,
    });

    // Ball sheet: frames side by side, one ball-width apart
    let column = f32::from(ball.frame()) * ball.size.x;
    cmds.push(DrawCommand::SpriteRegion {
        sprite: sprites.ball,
        src: Rect::new(column, 0.0, ball.size.x, ball.size.y),
        dst: ball.rect(),
    });

    cmds.push(DrawCommand::Sprite {
        sprite: sprites.platform,
        pos: state.paddle.pos,
    });

    cmds.extend(state.grid.iter_active().map(|(_, block)| DrawCommand::Sprite {
        sprite: sprites.block,
        pos: block.pos,
    }));

    cmds.push(DrawCommand::Text {
        text: format!("Score: {}", state.score),
        pos: Vec2::new(SCORE_TEXT_X, SCORE_TEXT_Y),
    });
    cmds
}
