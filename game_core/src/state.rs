use log::info;

use crate::systems::*;
use crate::{Ball, Config, Events, GameMap, GameRng, Paddle, Player, Score};

/// What a single call to [`GameState::update`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Paddles and ball moved, nobody scored
    Advanced,
    /// Paddles and ball moved and the player scored a point
    Scored(Player),
    /// A win carried over from an earlier tick was announced. Scores were
    /// reset, a new ball served, and nothing moved.
    GameWon(Player),
}

/// The whole match: two paddles, one ball, the score
pub struct GameState {
    pub config: Config,
    pub map: GameMap,
    pub paddles: [Paddle; 2],
    pub ball: Ball,
    pub score: Score,
    pub events: Events,
    rng: GameRng,
}

impl GameState {
    pub fn new(config: Config, mut rng: GameRng) -> Self {
        let map = GameMap::new(&config);
        let paddles = [
            Paddle::new(Player::One, &map, &config),
            Paddle::new(Player::Two, &map, &config),
        ];
        let ball = Ball::serve(&map, &config, &mut rng);

        Self {
            config,
            map,
            paddles,
            ball,
            score: Score::new(),
            events: Events::new(),
            rng,
        }
    }

    /// Default board with a fixed seed
    pub fn with_seed(seed: u64) -> Self {
        Self::new(Config::default(), GameRng::new(seed))
    }

    pub fn paddle(&self, player: Player) -> &Paddle {
        &self.paddles[player.index()]
    }

    pub fn paddle_mut(&mut self, player: Player) -> &mut Paddle {
        &mut self.paddles[player.index()]
    }

    /// The player who has reached the win score, if any
    pub fn winner(&self) -> Option<Player> {
        self.score.has_winner(self.config.win_score)
    }

    /// Run one tick.
    ///
    /// A win is only noticed at the start of the tick after the deciding
    /// point, so the ball and paddles get one more tick of movement first.
    pub fn update(&mut self) -> TickOutcome {
        self.events.clear();

        if let Some(winner) = self.winner() {
            info!(
                "{} wins the game ({} - {})",
                winner, self.score.one, self.score.two
            );
            self.score.reset();
            self.serve();
            return TickOutcome::GameWon(winner);
        }

        // 1. Move paddles based on intents
        move_paddles(&mut self.paddles);

        // 2. Move ball
        move_ball(&mut self.ball);

        // 3. Check collisions (ball vs paddles, walls)
        check_collisions(
            &mut self.ball,
            &self.paddles,
            &self.map,
            &self.config,
            &mut self.events,
        );

        // 4. Check scoring (ball reached a side edge)
        match check_scoring(
            &mut self.ball,
            &self.map,
            &self.config,
            &mut self.score,
            &mut self.rng,
        ) {
            Some(scorer) => TickOutcome::Scored(scorer),
            None => TickOutcome::Advanced,
        }
    }

    /// Replace the ball with a fresh one at the centre
    pub fn serve(&mut self) {
        self.ball = Ball::serve(&self.map, &self.config, &mut self.rng);
    }

    /// Start over: zero scores, paddles back at their spawns, new ball.
    /// Held keys stay held.
    pub fn reset(&mut self) {
        self.score.reset();
        self.events.clear();
        for player in Player::ALL {
            let spawn = self.map.paddle_spawn(player);
            self.paddle_mut(player).pos = spawn;
        }
        self.serve();
        info!("Game reset");
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Config::default(), GameRng::default())
    }
}
