use glam::IVec2;

use crate::{Config, Player};

/// Axis-aligned bounding box, anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub min: IVec2,
    pub size: IVec2,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            min: IVec2::new(x, y),
            size: IVec2::new(width, height),
        }
    }

    pub fn max(&self) -> IVec2 {
        self.min + self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size.x <= 0 || self.size.y <= 0
    }

    /// True when the interiors overlap. Rectangles that only share an edge
    /// do not intersect, and an empty rectangle intersects nothing.
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        let (a_max, b_max) = (self.max(), other.max());
        a_max.x > other.min.x
            && a_max.y > other.min.y
            && b_max.x > self.min.x
            && b_max.y > self.min.y
    }
}

/// Board geometry and spawn points
#[derive(Debug, Clone)]
pub struct GameMap {
    pub width: i32,
    pub height: i32,
    paddle_spawns: [IVec2; 2],
    ball_spawn: IVec2,
}

impl GameMap {
    pub fn new(config: &Config) -> Self {
        let paddle_y = config.board_height / 2 - config.paddle_height / 2;
        let half_ball = config.ball_size / 2;
        Self {
            width: config.board_width,
            height: config.board_height,
            paddle_spawns: [
                IVec2::new(config.paddle_x(Player::One), paddle_y),
                IVec2::new(config.paddle_x(Player::Two), paddle_y),
            ],
            ball_spawn: IVec2::new(
                config.board_width / 2 - half_ball,
                config.board_height / 2 - half_ball,
            ),
        }
    }

    /// Top-left corner of a player's paddle at game start
    pub fn paddle_spawn(&self, player: Player) -> IVec2 {
        self.paddle_spawns[player.index()]
    }

    /// Top-left corner of a freshly served ball
    pub fn ball_spawn(&self) -> IVec2 {
        self.ball_spawn
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }
}

impl Default for GameMap {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
