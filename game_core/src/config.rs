use crate::params::Params;
use crate::Player;

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub board_width: i32,
    pub board_height: i32,
    pub paddle_width: i32,
    pub paddle_height: i32,
    pub paddle_speed: i32,
    pub paddle_inset: i32,
    pub ball_size: i32,
    pub ball_speed: i32,
    pub wall_margin: i32,
    pub win_score: u32,
    pub ticks_per_second: f64,
    pub max_frame_ms: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            board_width: Params::BOARD_WIDTH,
            board_height: Params::BOARD_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            paddle_inset: Params::PADDLE_INSET,
            ball_size: Params::BALL_SIZE,
            ball_speed: Params::BALL_SPEED,
            wall_margin: Params::WALL_MARGIN,
            win_score: Params::WIN_SCORE,
            ticks_per_second: Params::TICKS_PER_SECOND,
            max_frame_ms: Params::MAX_FRAME_MS,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get X position (left edge) for a player's paddle
    pub fn paddle_x(&self, player: Player) -> i32 {
        match player {
            Player::One => self.paddle_inset,
            Player::Two => self.board_width - self.paddle_inset - self.paddle_width,
        }
    }

    /// Largest y a paddle's top edge may take
    pub fn paddle_max_y(&self) -> i32 {
        self.board_height - self.paddle_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_paddle_x() {
        let config = Config::new();
        assert_eq!(config.paddle_x(Player::One), 20, "Left paddle X position");
        assert_eq!(config.paddle_x(Player::Two), 760, "Right paddle X position");
    }

    #[test]
    fn test_config_paddle_max_y() {
        let config = Config::new();
        assert_eq!(config.paddle_max_y(), 500);
    }
}
