use crate::{Ball, Paddle};

/// Apply paddle movement based on intents, player one first
pub fn move_paddles(paddles: &mut [Paddle; 2]) {
    for paddle in paddles.iter_mut() {
        paddle.advance();
    }
}

/// Move ball based on velocity
pub fn move_ball(ball: &mut Ball) {
    ball.advance();
}
