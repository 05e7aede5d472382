use log::debug;

use crate::{Ball, Config, GameMap, GameRng, Player, Score};

/// Check if the ball reached a side edge. The scorer gets a point and a fresh
/// ball is served from the centre.
pub fn check_scoring(
    ball: &mut Ball,
    map: &GameMap,
    config: &Config,
    score: &mut Score,
    rng: &mut GameRng,
) -> Option<Player> {
    let scorer = if ball.pos.x <= 0 {
        Player::Two
    } else if ball.pos.x >= map.width - config.wall_margin {
        Player::One
    } else {
        return None;
    };

    score.increment(scorer);
    *ball = Ball::serve(map, config, rng);
    debug!(
        "{} scores ({} - {}), serving {:?}",
        scorer, score.one, score.two, ball.vel
    );

    Some(scorer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::IVec2;

    fn setup() -> (Config, GameMap, Score, GameRng) {
        let config = Config::new();
        let map = GameMap::new(&config);
        (config, map, Score::new(), GameRng::new(12345))
    }

    #[test]
    fn test_right_player_scores_when_ball_exits_left() {
        let (config, map, mut score, mut rng) = setup();
        let mut ball = Ball::new(IVec2::new(0, 300), IVec2::new(-5, 5), 20);

        let scorer = check_scoring(&mut ball, &map, &config, &mut score, &mut rng);

        assert_eq!(scorer, Some(Player::Two));
        assert_eq!(score, Score { one: 0, two: 1 });
    }

    #[test]
    fn test_left_player_scores_at_right_margin() {
        let (config, map, mut score, mut rng) = setup();
        let mut ball = Ball::new(IVec2::new(770, 300), IVec2::new(5, 5), 20);

        let scorer = check_scoring(&mut ball, &map, &config, &mut score, &mut rng);

        assert_eq!(scorer, Some(Player::One));
        assert_eq!(score, Score { one: 1, two: 0 });
    }

    #[test]
    fn test_ball_resets_after_scoring() {
        let (config, map, mut score, mut rng) = setup();
        let mut ball = Ball::new(IVec2::new(-5, 100), IVec2::new(-5, -5), 20);

        check_scoring(&mut ball, &map, &config, &mut score, &mut rng);

        assert_eq!(ball.pos, map.ball_spawn());
        assert_eq!(ball.vel.abs(), IVec2::splat(config.ball_speed));
    }

    #[test]
    fn test_no_scoring_when_ball_in_bounds() {
        let (config, map, mut score, mut rng) = setup();
        let start = Ball::new(IVec2::new(769, 300), IVec2::new(5, 5), 20);
        let mut ball = start;

        let scorer = check_scoring(&mut ball, &map, &config, &mut score, &mut rng);

        assert_eq!(scorer, None);
        assert_eq!(ball, start);
        assert_eq!(score, Score::new());
    }
}
