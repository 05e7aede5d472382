use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use glam::IVec2;

use crate::{Config, GameMap, GameRng, Rect};

/// One of the two players. Player one owns the left paddle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    pub fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::One => f.write_str("Player 1"),
            Player::Two => f.write_str("Player 2"),
        }
    }
}

/// Held-key state for one paddle.
///
/// Shared between the input handler, which writes it from key events, and the
/// paddle, which reads it once per tick. Each flag is an independent atomic so
/// no lock is needed.
#[derive(Debug, Default)]
pub struct PaddleIntent {
    up: AtomicBool,
    down: AtomicBool,
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, up: bool, down: bool) {
        self.set_up(up);
        self.set_down(down);
    }

    pub fn set_up(&self, up: bool) {
        self.up.store(up, Ordering::Relaxed);
    }

    pub fn set_down(&self, down: bool) {
        self.down.store(down, Ordering::Relaxed);
    }

    pub fn up(&self) -> bool {
        self.up.load(Ordering::Relaxed)
    }

    pub fn down(&self) -> bool {
        self.down.load(Ordering::Relaxed)
    }
}

/// Paddle component - vertical-only rectangle with a fixed x
#[derive(Debug, Clone)]
pub struct Paddle {
    pub player: Player,
    pub pos: IVec2, // top-left corner
    pub size: IVec2,
    speed: i32,
    max_y: i32,
    intent: Arc<PaddleIntent>,
}

impl Paddle {
    pub fn new(player: Player, map: &GameMap, config: &Config) -> Self {
        Self {
            player,
            pos: map.paddle_spawn(player),
            size: IVec2::new(config.paddle_width, config.paddle_height),
            speed: config.paddle_speed,
            max_y: config.paddle_max_y(),
            intent: Arc::new(PaddleIntent::new()),
        }
    }

    /// Handle to the intent flags, for wiring up an input source
    pub fn intent(&self) -> Arc<PaddleIntent> {
        Arc::clone(&self.intent)
    }

    pub fn set_intent(&self, up: bool, down: bool) {
        self.intent.set(up, down);
    }

    /// Vertical speed for the current intent. Up wins when both are held.
    pub fn speed(&self) -> i32 {
        if self.intent.up() {
            -self.speed
        } else if self.intent.down() {
            self.speed
        } else {
            0
        }
    }

    /// Move one tick along the current intent, staying on the board
    pub fn advance(&mut self) {
        let y = self.pos.y + self.speed();
        self.pos.y = y.clamp(0, self.max_y);
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.size.x, self.size.y)
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ball {
    pub pos: IVec2, // top-left corner of the bounding square
    pub vel: IVec2,
    pub size: i32,
}

impl Ball {
    pub fn new(pos: IVec2, vel: IVec2, size: i32) -> Self {
        Self { pos, vel, size }
    }

    /// A fresh ball at the board centre, each axis independently heading
    /// either way with equal odds
    pub fn serve(map: &GameMap, config: &Config, rng: &mut GameRng) -> Self {
        let mut ball = Self::new(
            map.ball_spawn(),
            IVec2::splat(config.ball_speed),
            config.ball_size,
        );
        if rng.coin_flip() {
            ball.reverse_x();
        }
        if rng.coin_flip() {
            ball.reverse_y();
        }
        ball
    }

    pub fn advance(&mut self) {
        self.pos += self.vel;
    }

    pub fn reverse_x(&mut self) {
        self.vel.x = -self.vel.x;
    }

    pub fn reverse_y(&mut self) {
        self.vel.y = -self.vel.y;
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.size, self.size)
    }
}
