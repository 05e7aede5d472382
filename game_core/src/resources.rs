use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::Player;

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub one: u32, // Left player score
    pub two: u32, // Right player score
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, player: Player) -> u32 {
        match player {
            Player::One => self.one,
            Player::Two => self.two,
        }
    }

    pub fn increment(&mut self, player: Player) {
        match player {
            Player::One => self.one += 1,
            Player::Two => self.two += 1,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Player one is checked first, so it wins a (never expected) tie
    pub fn has_winner(&self, win_score: u32) -> Option<Player> {
        if self.one >= win_score {
            Some(Player::One)
        } else if self.two >= win_score {
            Some(Player::Two)
        } else {
            None
        }
    }
}

/// Bounces during the last tick. Points are reported by `TickOutcome`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Events {
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Random number generator
pub struct GameRng(pub StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self(StdRng::from_entropy())
    }

    pub fn coin_flip(&mut self) -> bool {
        self.0.gen_bool(0.5)
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}
