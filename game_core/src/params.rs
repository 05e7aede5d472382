/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Board (logical pixels, origin top-left, y grows downwards)
    pub const BOARD_WIDTH: i32 = 800;
    pub const BOARD_HEIGHT: i32 = 600;

    // Paddle
    pub const PADDLE_WIDTH: i32 = 20;
    pub const PADDLE_HEIGHT: i32 = 100;
    pub const PADDLE_SPEED: i32 = 5; // pixels per tick
    pub const PADDLE_INSET: i32 = 20; // gap between board edge and paddle

    // Ball
    pub const BALL_SIZE: i32 = 20;
    pub const BALL_SPEED: i32 = 5; // per axis, only the sign ever changes

    // Bottom and right bounds are checked against this, not BALL_SIZE
    pub const WALL_MARGIN: i32 = 30;

    // Score
    pub const WIN_SCORE: u32 = 5;

    // Loop
    pub const TICKS_PER_SECOND: f64 = 60.0;
    pub const MAX_FRAME_MS: f64 = 100.0; // Longest gap turned into ticks in one call
}
