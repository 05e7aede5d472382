use crate::{Ball, Config, Events, GameMap, Paddle};

/// Check ball collisions with paddles and walls.
///
/// Both checks run every tick and are independent of each other. A paddle hit
/// only flips the horizontal direction, a wall hit only the vertical one.
pub fn check_collisions(
    ball: &mut Ball,
    paddles: &[Paddle; 2],
    map: &GameMap,
    config: &Config,
    events: &mut Events,
) {
    let ball_bounds = ball.bounds();

    // Paddles sit on opposite sides, so at most one reversal per tick
    if paddles
        .iter()
        .any(|paddle| ball_bounds.intersects(&paddle.bounds()))
    {
        ball.reverse_x();
        events.ball_hit_paddle = true;
    }

    if ball.pos.y <= 0 || ball.pos.y >= map.height - config.wall_margin {
        ball.reverse_y();
        events.ball_hit_wall = true;
    }
}
