//! Game state and core simulation types
//!
//! The session owns every simulated object by value. Nothing here reaches
//! back into a shared record: the paddle reports how far it moved and the
//! session carries the ball, the ball reads the paddle only when bouncing.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::Serialize;

use super::collision::{Rect, Side, boundary_violation, intersects};
use crate::consts::*;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GamePhase {
    /// Waiting for the loader to report all assets ready
    Loading,
    /// Simulation is running
    Playing,
    /// Every block destroyed
    Won,
    /// Ball left through the bottom of the world
    Lost,
}

impl GamePhase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, GamePhase::Won | GamePhase::Lost)
    }
}

/// How a finished session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
}

impl Outcome {
    /// Message shown to the player before restarting
    pub fn message(&self) -> &'static str {
        match self {
            Outcome::Won => "You win!",
            Outcome::Lost => "You lose",
        }
    }

    fn phase(&self) -> GamePhase {
        match self {
            Outcome::Won => GamePhase::Won,
            Outcome::Lost => GamePhase::Lost,
        }
    }
}

/// Things that happened during a tick, for the audio and lifecycle hosts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Ball bounced off a wall, block or the paddle
    Bump,
    /// Block at this grid index was destroyed
    BlockDestroyed { index: usize },
    /// Ball left the paddle
    Launched,
    /// Session reached a terminal state (emitted once)
    Ended { outcome: Outcome },
}

/// Horizontal movement command for the paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

/// Seeded session RNG
#[derive(Debug, Clone)]
pub struct GameRng {
    seed: u64,
    rng: Pcg32,
}

impl GameRng {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform integer in `[min, max]`, both ends included
    pub fn range_inclusive(&mut self, min: i32, max: i32) -> i32 {
        self.rng.random_range(min..=max)
    }
}

/// Sprite frame cycling on its own wall-clock cadence
#[derive(Debug, Clone, Default)]
pub struct SpriteAnimation {
    /// Current frame (0..BALL_FRAME_COUNT)
    pub frame: u8,
    /// Time banked toward the next frame
    elapsed: f32,
    running: bool,
}

impl SpriteAnimation {
    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Bank `dt` seconds and step one frame per elapsed interval
    pub fn advance(&mut self, dt: f32) {
        if !self.running {
            return;
        }
        self.elapsed += dt;
        while self.elapsed >= BALL_FRAME_INTERVAL {
            self.elapsed -= BALL_FRAME_INTERVAL;
            self.frame = (self.frame + 1) % BALL_FRAME_COUNT;
        }
    }
}

/// The ball
#[derive(Debug, Clone)]
pub struct Ball {
    /// Top-left corner
    pub pos: Vec2,
    /// Per-tick displacement (dx, dy)
    pub vel: Vec2,
    pub size: Vec2,
    /// Speed magnitude per axis; only the direction changes
    pub speed: f32,
    pub anim: SpriteAnimation,
}

impl Default for Ball {
    fn default() -> Self {
        Self {
            pos: Vec2::new(BALL_START_X, BALL_START_Y),
            vel: Vec2::ZERO,
            size: Vec2::splat(BALL_SIZE),
            speed: BALL_VELOCITY,
            anim: SpriteAnimation::default(),
        }
    }
}

impl Ball {
    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    /// Where the ball will be after this tick's move
    pub fn next_rect(&self) -> Rect {
        self.rect().translated(self.vel)
    }

    pub fn center_x(&self) -> f32 {
        self.pos.x + self.size.x / 2.0
    }

    pub fn frame(&self) -> u8 {
        self.anim.frame
    }

    /// Send the ball upward with a random horizontal component
    pub fn launch(&mut self, rng: &mut GameRng) {
        let v = self.speed as i32;
        self.vel.y = -self.speed;
        self.vel.x = rng.range_inclusive(-v, v) as f32;
        self.anim.start();
    }

    /// Move along with the paddle while held
    pub fn carry(&mut self, dx: f32) {
        self.pos.x += dx;
    }

    /// Apply this tick's displacement
    pub fn tick(&mut self) {
        if self.vel.y != 0.0 {
            self.pos.y += self.vel.y;
        }
        if self.vel.x != 0.0 {
            self.pos.x += self.vel.x;
        }
    }

    /// Bounce off the left, right and top walls.
    ///
    /// Returns the side that was hit. `Side::Bottom` means the ball is leaving
    /// the world; it is left where it is.
    pub fn resolve_world_bounds(&mut self, world: &Rect) -> Option<Side> {
        let side = boundary_violation(&self.next_rect(), world)?;
        match side {
            Side::Left => {
                self.pos.x = world.left();
                self.vel.x = self.speed;
            }
            Side::Right => {
                self.pos.x = world.right() - self.size.x;
                self.vel.x = -self.speed;
            }
            Side::Top => {
                self.pos.y = world.top();
                self.vel.y = self.speed;
            }
            Side::Bottom => {}
        }
        Some(side)
    }

    /// Look-ahead overlap test against the ball's next position
    pub fn collides_with(&self, rect: &Rect) -> bool {
        intersects(&self.next_rect(), rect)
    }

    pub fn bounce_off_block(&mut self, block: &mut Block) {
        self.vel.y = -self.vel.y;
        block.deactivate();
    }

    /// Rebound off the paddle, angled by where it landed
    pub fn bounce_off_paddle(&mut self, paddle: &Paddle) {
        if paddle.dx != 0.0 {
            self.pos.x += paddle.dx;
        }
        // Already heading up: this contact was resolved on an earlier tick
        if self.vel.y > 0.0 {
            self.vel.y = -self.speed;
            self.vel.x = self.speed * paddle.touch_offset(self.center_x());
        }
    }
}

/// The player's paddle
#[derive(Debug, Clone)]
pub struct Paddle {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    pub speed: f32,
    /// Horizontal displacement per tick: -speed, 0 or +speed
    pub dx: f32,
    /// Ball still resting on the paddle (before the first launch)
    pub holding_ball: bool,
}

impl Default for Paddle {
    fn default() -> Self {
        Self {
            pos: Vec2::new(PADDLE_START_X, PADDLE_START_Y),
            size: Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT),
            speed: PADDLE_VELOCITY,
            dx: 0.0,
            holding_ball: true,
        }
    }
}

impl Paddle {
    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    pub fn start_move(&mut self, direction: Direction) {
        self.dx = match direction {
            Direction::Left => -self.speed,
            Direction::Right => self.speed,
        };
    }

    pub fn stop_move(&mut self) {
        self.dx = 0.0;
    }

    /// Move by `dx` and report how far the paddle actually went
    pub fn tick(&mut self) -> f32 {
        if self.dx == 0.0 {
            return 0.0;
        }
        self.pos.x += self.dx;
        self.dx
    }

    /// Release the held ball. Returns false if it was already launched.
    pub fn launch_ball(&mut self, ball: &mut Ball, rng: &mut GameRng) -> bool {
        if !self.holding_ball {
            return false;
        }
        ball.launch(rng);
        self.holding_ball = false;
        true
    }

    /// Contact point along the paddle mapped to [-1, 1] (left edge to right edge)
    pub fn touch_offset(&self, x: f32) -> f32 {
        let diff = (self.pos.x + self.size.x) - x;
        let offset = self.size.x - diff;
        (2.0 * offset / self.size.x - 1.0).clamp(-1.0, 1.0)
    }

    /// Stop at the walls instead of clamping
    pub fn resolve_world_bounds(&mut self, world: &Rect) {
        let left = self.pos.x + self.dx;
        let right = left + self.size.x;
        if left < world.left() || right > world.right() {
            self.dx = 0.0;
        }
    }
}

/// A destructible block
#[derive(Debug, Clone)]
pub struct Block {
    pub pos: Vec2,
    pub size: Vec2,
    active: bool,
}

impl Block {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            size: Vec2::new(BLOCK_WIDTH, BLOCK_HEIGHT),
            active: true,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// One-way: a destroyed block never comes back
    pub fn deactivate(&mut self) {
        self.active = false;
    }
}

/// Fixed rows x cols arrangement of blocks, stored row-major
#[derive(Debug, Clone)]
pub struct BlockGrid {
    pub rows: usize,
    pub cols: usize,
    blocks: Vec<Block>,
}

impl BlockGrid {
    pub fn populate(rows: usize, cols: usize) -> Self {
        let mut blocks = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                let x = BLOCK_COL_SPACING * col as f32 + BLOCK_X_OFFSET;
                let y = BLOCK_ROW_SPACING * row as f32 + BLOCK_Y_OFFSET;
                blocks.push(Block::new(Vec2::new(x, y)));
            }
        }
        Self { rows, cols, blocks }
    }

    pub fn total(&self) -> usize {
        self.blocks.len()
    }

    pub fn active_count(&self) -> usize {
        self.blocks.iter().filter(|b| b.is_active()).count()
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Block> {
        self.blocks.get_mut(index)
    }

    /// Active blocks with their grid index, in grid order
    pub fn iter_active(&self) -> impl Iterator<Item = (usize, &Block)> {
        self.blocks.iter().enumerate().filter(|(_, b)| b.is_active())
    }
}

/// Paddle command delivered by the input layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start(Direction),
    Stop,
    Fire,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    pub phase: GamePhase,
    pub score: u32,
    pub world: Rect,
    pub ball: Ball,
    pub paddle: Paddle,
    pub grid: BlockGrid,
    pub rng: GameRng,
    /// Simulation tick counter
    pub time_ticks: u64,
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a session waiting on its assets
    pub fn new(seed: u64) -> Self {
        Self {
            phase: GamePhase::Loading,
            score: 0,
            world: Rect::new(0.0, 0.0, WORLD_WIDTH, WORLD_HEIGHT),
            ball: Ball::default(),
            paddle: Paddle::default(),
            grid: BlockGrid::populate(BLOCK_ROWS, BLOCK_COLS),
            rng: GameRng::new(seed),
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    /// Loader finished: start simulating. Ignored outside `Loading`.
    pub fn assets_ready(&mut self) {
        if self.phase != GamePhase::Loading {
            log::debug!("assets_ready ignored in {:?}", self.phase);
            return;
        }
        log::info!(
            "Assets ready, starting with {}x{} blocks (seed {})",
            self.grid.rows,
            self.grid.cols,
            self.rng.seed()
        );
        self.phase = GamePhase::Playing;
    }

    /// Apply a paddle command. Commands outside `Playing` are dropped.
    pub fn apply(&mut self, command: Command) {
        if !self.is_running() {
            log::debug!("{:?} ignored in {:?}", command, self.phase);
            return;
        }
        match command {
            Command::Start(direction) => self.paddle.start_move(direction),
            Command::Stop => self.paddle.stop_move(),
            Command::Fire => self.fire(),
        }
    }

    fn fire(&mut self) {
        if self.paddle.launch_ball(&mut self.ball, &mut self.rng) {
            log::info!("Ball launched with dx={}", self.ball.vel.x);
            self.events.push(GameEvent::Launched);
        }
    }

    pub fn add_score(&mut self) {
        self.score += 1;
        if self.score as usize >= self.grid.total() {
            self.end(Outcome::Won);
        }
    }

    /// Enter a terminal phase. Only the first call has any effect.
    pub fn end(&mut self, outcome: Outcome) {
        if !self.is_running() {
            return;
        }
        log::info!("Game over: {:?} with score {}", outcome, self.score);
        self.phase = outcome.phase();
        self.ball.anim.stop();
        self.events.push(GameEvent::Ended { outcome });
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            GamePhase::Won => Some(Outcome::Won),
            GamePhase::Lost => Some(Outcome::Lost),
            _ => None,
        }
    }

    /// Advance the ball sprite. Clocked separately from `tick`.
    pub fn animate(&mut self, dt: f32) {
        self.ball.anim.advance(dt);
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take the events produced since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
