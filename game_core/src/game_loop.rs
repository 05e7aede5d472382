//! Fixed-timestep driver
//!
//! The host calls [`GameLoop::advance`] whenever it gets control (a frame
//! callback, a spin loop). Elapsed wall time is converted into ticks owed and
//! every whole tick runs one update followed by one render, so the update rate
//! stays at the configured tick rate whatever the host refresh rate is.
//!
//! A single call never accounts for more than `Config::max_frame_ms` of wall
//! time. Hosts that stop calling for a while (a hidden browser tab, a
//! debugger pause) resume where they left off instead of replaying the gap.

use log::trace;

use crate::{Config, GameState, Player, TickOutcome};

/// Monotonic time source in milliseconds
pub trait Clock {
    fn now_ms(&self) -> f64;
}

/// Draws the state after every tick
pub trait Renderer {
    fn render(&mut self, state: &GameState);
}

/// Tells the players who won. May block until acknowledged.
pub trait WinNotifier {
    fn announce_winner(&mut self, winner: Player);
}

/// Fractional tick accumulator
#[derive(Debug, Clone)]
pub struct FixedTimestep {
    tick_ms: f64,
    max_elapsed_ms: f64,
    owed: f64,
}

impl FixedTimestep {
    pub fn new(ticks_per_second: f64, max_elapsed_ms: f64) -> Self {
        Self {
            tick_ms: 1000.0 / ticks_per_second,
            max_elapsed_ms,
            owed: 0.0,
        }
    }

    pub fn tick_ms(&self) -> f64 {
        self.tick_ms
    }

    /// Ticks owed, including the fractional part carried to the next call
    pub fn owed(&self) -> f64 {
        self.owed
    }

    /// Convert elapsed time into ticks owed. A clock running backwards
    /// contributes nothing, and gaps longer than the cap count as the cap.
    pub fn accumulate(&mut self, elapsed_ms: f64) {
        self.owed += elapsed_ms.clamp(0.0, self.max_elapsed_ms) / self.tick_ms;
    }

    /// Consume one whole tick if one is owed
    pub fn take_tick(&mut self) -> bool {
        if self.owed >= 1.0 {
            self.owed -= 1.0;
            true
        } else {
            false
        }
    }

    pub fn clear(&mut self) {
        self.owed = 0.0;
    }
}

/// Drives a [`GameState`] at a fixed tick rate
pub struct GameLoop<C: Clock> {
    clock: C,
    last_ms: f64,
    timestep: FixedTimestep,
}

impl<C: Clock> GameLoop<C> {
    pub fn new(clock: C, config: &Config) -> Self {
        let last_ms = clock.now_ms();
        Self {
            clock,
            last_ms,
            timestep: FixedTimestep::new(config.ticks_per_second, config.max_frame_ms),
        }
    }

    pub fn timestep(&self) -> &FixedTimestep {
        &self.timestep
    }

    /// Run every tick owed since the previous call, rendering after each.
    /// Returns how many ticks ran.
    pub fn advance<R, N>(
        &mut self,
        state: &mut GameState,
        renderer: &mut R,
        notifier: &mut N,
    ) -> u32
    where
        R: Renderer + ?Sized,
        N: WinNotifier + ?Sized,
    {
        let now = self.clock.now_ms();
        self.timestep.accumulate(now - self.last_ms);
        self.last_ms = now;

        let mut ran = 0;
        while self.timestep.take_tick() {
            let outcome = state.update();
            ran += 1;

            if state.events.ball_hit_paddle {
                trace!("ball hit paddle at {:?}", state.ball.pos);
            }
            if state.events.ball_hit_wall {
                trace!("ball hit wall at {:?}", state.ball.pos);
            }

            if let TickOutcome::GameWon(winner) = outcome {
                notifier.announce_winner(winner);
                // Time spent waiting on the notification is not owed
                self.last_ms = self.clock.now_ms();
                self.timestep.clear();
            }

            renderer.render(state);
        }

        if ran > 1 {
            trace!("caught up {} ticks, {:.2} owed", ran, self.timestep.owed());
        }
        ran
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Score;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct ManualClock(Rc<Cell<f64>>);

    impl ManualClock {
        fn advance(&self, ms: f64) {
            self.0.set(self.0.get() + ms);
        }
    }

    impl Clock for ManualClock {
        fn now_ms(&self) -> f64 {
            self.0.get()
        }
    }

    #[derive(Default)]
    struct CountingRenderer {
        frames: u32,
    }

    impl Renderer for CountingRenderer {
        fn render(&mut self, _state: &GameState) {
            self.frames += 1;
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        winners: Vec<Player>,
    }

    impl WinNotifier for RecordingNotifier {
        fn announce_winner(&mut self, winner: Player) {
            self.winners.push(winner);
        }
    }

    #[test]
    fn test_timestep_carries_remainder() {
        let mut timestep = FixedTimestep::new(60.0, 100.0);
        timestep.accumulate(timestep.tick_ms() * 2.5);

        let mut ticks = 0;
        while timestep.take_tick() {
            ticks += 1;
        }

        assert_eq!(ticks, 2);
        assert!((timestep.owed() - 0.5).abs() < 1e-9);

        timestep.accumulate(timestep.tick_ms() * 0.75);
        assert!(timestep.take_tick());
        assert!(!timestep.take_tick());
    }

    #[test]
    fn test_timestep_ignores_negative_elapsed() {
        let mut timestep = FixedTimestep::new(60.0, 100.0);
        timestep.accumulate(-100.0);
        assert_eq!(timestep.owed(), 0.0);
    }

    #[test]
    fn test_timestep_caps_long_gaps() {
        let tick_ms = 1000.0 / 60.0;
        let mut timestep = FixedTimestep::new(60.0, tick_ms * 6.5);
        timestep.accumulate(600_000.0);
        assert!((timestep.owed() - 6.5).abs() < 1e-9);
    }

    #[test]
    fn test_loop_resumes_after_long_pause_without_replaying_it() {
        let clock = ManualClock::default();
        let config = Config {
            max_frame_ms: 1000.0 / 60.0 * 6.5,
            ..Config::default()
        };
        let mut game_loop = GameLoop::new(clock.clone(), &config);
        let mut state = GameState::with_seed(1);
        let mut renderer = CountingRenderer::default();
        let mut notifier = RecordingNotifier::default();

        // Ten minutes without a frame callback
        clock.advance(600_000.0);
        let ran = game_loop.advance(&mut state, &mut renderer, &mut notifier);

        assert_eq!(ran, 6);
        assert_eq!(renderer.frames, 6);
        assert_eq!(state.score, Score::new());
        assert!(notifier.winners.is_empty());

        // Normal pacing afterwards
        clock.advance(game_loop.timestep().tick_ms());
        assert_eq!(game_loop.advance(&mut state, &mut renderer, &mut notifier), 1);
    }

    #[test]
    fn test_loop_runs_nothing_before_a_full_tick() {
        let clock = ManualClock::default();
        let mut game_loop = GameLoop::new(clock.clone(), &Config::default());
        let mut state = GameState::with_seed(1);
        let mut renderer = CountingRenderer::default();
        let mut notifier = RecordingNotifier::default();

        clock.advance(10.0);
        assert_eq!(game_loop.advance(&mut state, &mut renderer, &mut notifier), 0);
        assert_eq!(renderer.frames, 0);
    }

    #[test]
    fn test_loop_renders_after_every_tick() {
        let clock = ManualClock::default();
        let mut game_loop = GameLoop::new(clock.clone(), &Config::default());
        let mut state = GameState::with_seed(1);
        let mut renderer = CountingRenderer::default();
        let mut notifier = RecordingNotifier::default();

        clock.advance(game_loop.timestep().tick_ms() * 2.5);
        let ran = game_loop.advance(&mut state, &mut renderer, &mut notifier);

        assert_eq!(ran, 2);
        assert_eq!(renderer.frames, 2);
        assert!((game_loop.timestep().owed() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_loop_announces_winner_and_drops_backlog() {
        let clock = ManualClock::default();
        let mut game_loop = GameLoop::new(clock.clone(), &Config::default());
        let mut state = GameState::with_seed(1);
        state.score = Score { one: 0, two: 5 };
        let mut renderer = CountingRenderer::default();
        let mut notifier = RecordingNotifier::default();

        clock.advance(game_loop.timestep().tick_ms() * 4.0);
        let ran = game_loop.advance(&mut state, &mut renderer, &mut notifier);

        assert_eq!(ran, 1);
        assert_eq!(renderer.frames, 1);
        assert_eq!(notifier.winners, vec![Player::Two]);
        assert_eq!(state.score, Score::new());
        assert_eq!(game_loop.timestep().owed(), 0.0);
    }
}
