//! Fixed-order simulation tick
//!
//! Core game loop step. Collisions are tested against where things will be
//! after this tick's move, before anything moves.

use super::collision::Side;
use super::state::{GameEvent, GameState, Outcome};

/// Advance the session by one tick. Does nothing unless the session is playing.
pub fn tick(state: &mut GameState) {
    if !state.is_running() {
        return;
    }
    state.time_ticks += 1;

    collide_blocks(state);
    if !state.is_running() {
        return;
    }
    collide_paddle(state);

    let world = state.world;
    match state.ball.resolve_world_bounds(&world) {
        Some(Side::Bottom) => {
            state.end(Outcome::Lost);
            return;
        }
        Some(side) => {
            log::debug!("Wall bounce: {:?}", side);
            state.push_event(GameEvent::Bump);
        }
        None => {}
    }
    state.paddle.resolve_world_bounds(&world);

    let moved = state.paddle.tick();
    if state.paddle.holding_ball {
        state.ball.carry(moved);
    }
    state.ball.tick();
}

/// Destroy the first active block the ball is about to hit, in grid order
fn collide_blocks(state: &mut GameState) {
    let hit = state
        .grid
        .iter_active()
        .find(|(_, block)| state.ball.collides_with(&block.rect()))
        .map(|(index, _)| index);

    let Some(index) = hit else { return };
    if let Some(block) = state.grid.get_mut(index) {
        state.ball.bounce_off_block(block);
    }
    log::debug!("Block {} destroyed", index);
    state.push_event(GameEvent::BlockDestroyed { index });
    state.push_event(GameEvent::Bump);
    state.add_score();
}

fn collide_paddle(state: &mut GameState) {
    if state.ball.collides_with(&state.paddle.rect()) {
        state.ball.bounce_off_paddle(&state.paddle);
        state.push_event(GameEvent::Bump);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::state::{Command, Direction, GamePhase};
    use glam::Vec2;
    use proptest::prelude::*;

    fn playing(seed: u64) -> GameState {
        let mut state = GameState::new(seed);
        state.assets_ready();
        state
    }

    fn launched(seed: u64) -> GameState {
        let mut state = playing(seed);
        state.apply(Command::Fire);
        state.drain_events();
        state
    }

    #[test]
    fn test_loading_does_not_tick() {
        let mut state = GameState::new(1);
        state.ball.vel = Vec2::new(3.0, -3.0);
        tick(&mut state);
        assert_eq!(state.time_ticks, 0);
        assert_eq!(state.ball.pos, Vec2::new(BALL_START_X, BALL_START_Y));
    }

    #[test]
    fn test_held_ball_is_carried() {
        let mut state = playing(1);
        state.apply(Command::Start(Direction::Right));
        for _ in 0..10 {
            tick(&mut state);
        }
        assert_eq!(state.ball.pos.x, BALL_START_X + 60.0);
        assert_eq!(state.paddle.pos.x, PADDLE_START_X + 60.0);
        assert_eq!(state.ball.vel, Vec2::ZERO);
    }

    #[test]
    fn test_launched_ball_is_not_carried() {
        let mut state = launched(1);
        state.ball.vel = Vec2::new(0.0, -3.0);
        let x = state.ball.pos.x;
        state.apply(Command::Start(Direction::Left));
        tick(&mut state);
        assert_eq!(state.ball.pos.x, x);
        assert_eq!(state.paddle.pos.x, PADDLE_START_X - PADDLE_VELOCITY);
    }

    #[test]
    fn test_bottom_exit_loses_without_clamp() {
        let mut state = launched(1);
        state.ball.pos = Vec2::new(500.0, 350.0);
        state.ball.vel = Vec2::new(0.0, 3.0);
        tick(&mut state);
        assert_eq!(state.phase, GamePhase::Lost);
        assert_eq!(state.ball.pos, Vec2::new(500.0, 350.0));
        assert_eq!(
            state.drain_events(),
            vec![GameEvent::Ended {
                outcome: Outcome::Lost
            }]
        );

        // Frozen afterwards
        tick(&mut state);
        assert_eq!(state.ball.pos, Vec2::new(500.0, 350.0));
        assert!(state.drain_events().is_empty());
    }

    #[test]
    fn test_center_paddle_hit_goes_straight_up() {
        let mut state = launched(1);
        let paddle_x = state.paddle.pos.x;
        state.ball.pos = Vec2::new(paddle_x + PADDLE_WIDTH / 2.0 - BALL_SIZE / 2.0, 282.0);
        state.ball.vel = Vec2::new(0.0, 3.0);
        tick(&mut state);
        assert_eq!(state.ball.vel, Vec2::new(0.0, -BALL_VELOCITY));
        assert_eq!(state.drain_events(), vec![GameEvent::Bump]);
    }

    #[test]
    fn test_moving_paddle_nudges_ball() {
        let mut state = launched(1);
        state.apply(Command::Start(Direction::Right));
        let paddle_x = state.paddle.pos.x;
        state.ball.pos = Vec2::new(paddle_x + 40.0, 282.0);
        state.ball.vel = Vec2::new(0.0, 3.0);
        tick(&mut state);
        // Nudged by +6, center now 6px right of paddle center: offset 0.12
        assert!((state.ball.vel.x - BALL_VELOCITY * 0.12).abs() < 1e-5);
        assert_eq!(state.ball.vel.y, -BALL_VELOCITY);
        assert_eq!(state.ball.pos.x, paddle_x + 46.0 + state.ball.vel.x);
    }

    #[test]
    fn test_block_hit_scores_and_bounces() {
        let mut state = launched(1);
        let target = state.grid.blocks()[20].pos;
        state.ball.pos = Vec2::new(target.x + 20.0, target.y + BLOCK_HEIGHT);
        state.ball.vel = Vec2::new(1.0, -3.0);
        tick(&mut state);
        assert_eq!(state.score, 1);
        assert!(!state.grid.blocks()[20].is_active());
        assert_eq!(state.ball.vel, Vec2::new(1.0, 3.0));
        assert_eq!(
            state.drain_events(),
            vec![GameEvent::BlockDestroyed { index: 20 }, GameEvent::Bump]
        );
    }

    #[test]
    fn test_only_first_block_per_tick() {
        let mut state = launched(1);
        // Straddle the gap between blocks 0 and 1 from below
        let left = state.grid.blocks()[0].pos;
        state.ball.pos = Vec2::new(left.x + 50.0, left.y + BLOCK_HEIGHT);
        state.ball.vel = Vec2::new(0.0, -3.0);
        tick(&mut state);
        assert_eq!(state.score, 1);
        assert!(!state.grid.blocks()[0].is_active());
        assert!(state.grid.blocks()[1].is_active());
    }

    #[test]
    fn test_clearing_grid_wins_once() {
        let mut state = launched(1);
        let total = state.grid.total();
        assert_eq!(total, 32);

        let mut ended = 0;
        for i in 0..total {
            assert_eq!(state.phase, GamePhase::Playing, "still playing before hit {i}");
            let target = state.grid.blocks()[i].pos;
            state.ball.pos = Vec2::new(target.x + 20.0, target.y + BLOCK_HEIGHT);
            state.ball.vel = Vec2::new(0.0, -3.0);
            tick(&mut state);
            assert_eq!(state.score as usize, i + 1);
            ended += state
                .drain_events()
                .iter()
                .filter(|e| matches!(e, GameEvent::Ended { .. }))
                .count();
        }
        assert_eq!(state.phase, GamePhase::Won);
        assert_eq!(ended, 1);

        let ticks = state.time_ticks;
        tick(&mut state);
        assert_eq!(state.time_ticks, ticks);
    }

    #[test]
    fn test_wall_bounce_emits_bump() {
        let mut state = launched(1);
        state.ball.pos = Vec2::new(300.0, 1.0);
        state.ball.vel = Vec2::new(0.0, -3.0);
        tick(&mut state);
        assert_eq!(state.ball.vel.y, BALL_VELOCITY);
        assert_eq!(state.drain_events(), vec![GameEvent::Bump]);
    }

    #[test]
    fn test_determinism() {
        let mut a = playing(99999);
        let mut b = playing(99999);
        for s in [&mut a, &mut b] {
            s.apply(Command::Fire);
            for _ in 0..500 {
                tick(s);
            }
        }
        assert_eq!(a.ball.pos, b.ball.pos);
        assert_eq!(a.ball.vel, b.ball.vel);
        assert_eq!(a.score, b.score);
        assert_eq!(a.phase, b.phase);
    }

    fn command_strategy() -> impl Strategy<Value = Command> {
        prop_oneof![
            Just(Command::Start(Direction::Left)),
            Just(Command::Start(Direction::Right)),
            Just(Command::Stop),
            Just(Command::Fire),
        ]
    }

    proptest! {
        #[test]
        fn prop_session_invariants(
            seed in any::<u64>(),
            script in prop::collection::vec((command_strategy(), 1usize..40), 1..40),
        ) {
            let mut state = playing(seed);
            let total = state.grid.total();
            let mut was_active: Vec<bool> = state.grid.blocks().iter().map(|b| b.is_active()).collect();
            let mut ended = 0;

            for (command, ticks) in script {
                state.apply(command);
                for _ in 0..ticks {
                    let before = state.time_ticks;
                    let was_running = state.is_running();
                    tick(&mut state);
                    if !was_running {
                        prop_assert_eq!(state.time_ticks, before);
                    }

                    prop_assert!(state.ball.vel.x.abs() <= BALL_VELOCITY);
                    prop_assert!(state.ball.vel.y.abs() <= BALL_VELOCITY);
                    prop_assert!(state.paddle.pos.x >= 0.0);
                    prop_assert!(state.paddle.pos.x <= WORLD_WIDTH - PADDLE_WIDTH);
                    prop_assert_eq!(state.score as usize, total - state.grid.active_count());

                    for (i, block) in state.grid.blocks().iter().enumerate() {
                        prop_assert!(was_active[i] || !block.is_active());
                        was_active[i] = block.is_active();
                    }
                    ended += state
                        .drain_events()
                        .iter()
                        .filter(|e| matches!(e, GameEvent::Ended { .. }))
                        .count();
                }
            }

            prop_assert!(ended <= 1);
            prop_assert_eq!(ended == 1, state.phase.is_terminal());
            if state.phase == GamePhase::Won {
                prop_assert_eq!(state.score as usize, total);
            }
        }

        #[test]
        fn prop_paddle_stays_in_world(start in 0.0f32..=540.0, right in any::<bool>(), ticks in 1usize..200) {
            let mut state = playing(0);
            state.paddle.pos.x = start;
            state.apply(Command::Start(if right { Direction::Right } else { Direction::Left }));
            for _ in 0..ticks {
                tick(&mut state);
                prop_assert!(state.paddle.pos.x >= 0.0);
                prop_assert!(state.paddle.pos.x <= WORLD_WIDTH - PADDLE_WIDTH);
            }
        }

        #[test]
        fn prop_touch_offset_monotonic(a in 280.0f32..=380.0, b in 280.0f32..=380.0) {
            let state = playing(0);
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let paddle = &state.paddle;
            prop_assert!(paddle.touch_offset(lo) <= paddle.touch_offset(hi));
            prop_assert!(paddle.touch_offset(lo) >= -1.0);
            prop_assert!(paddle.touch_offset(hi) <= 1.0);
        }
    }
}
