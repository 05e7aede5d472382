use std::sync::Arc;

use crate::{GameState, PaddleIntent, Player};

/// The four logical controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    PlayerOneUp,
    PlayerOneDown,
    PlayerTwoUp,
    PlayerTwoDown,
}

impl Control {
    pub fn player(self) -> Player {
        match self {
            Control::PlayerOneUp | Control::PlayerOneDown => Player::One,
            Control::PlayerTwoUp | Control::PlayerTwoDown => Player::Two,
        }
    }

    pub fn is_up(self) -> bool {
        matches!(self, Control::PlayerOneUp | Control::PlayerTwoUp)
    }
}

/// Routes key presses and releases to the paddle intents.
///
/// Holds its own handles to the intent flags, so it can live on a different
/// thread or in an event callback without borrowing the game state.
#[derive(Debug, Clone)]
pub struct InputBinding {
    intents: [Arc<PaddleIntent>; 2],
}

impl InputBinding {
    pub fn new(state: &GameState) -> Self {
        Self {
            intents: [
                state.paddle(Player::One).intent(),
                state.paddle(Player::Two).intent(),
            ],
        }
    }

    /// Record a control being pressed (`true`) or released (`false`)
    pub fn apply(&self, control: Control, pressed: bool) {
        let intent = &self.intents[control.player().index()];
        if control.is_up() {
            intent.set_up(pressed);
        } else {
            intent.set_down(pressed);
        }
    }

    pub fn key_down(&self, control: Control) {
        self.apply(control, true);
    }

    pub fn key_up(&self, control: Control) {
        self.apply(control, false);
    }

    /// Release everything, e.g. when the window loses focus
    pub fn release_all(&self) {
        for intent in &self.intents {
            intent.set(false, false);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_controls_reach_the_right_paddle() {
        let mut state = GameState::with_seed(1);
        let input = InputBinding::new(&state);

        input.key_down(Control::PlayerOneDown);
        input.key_down(Control::PlayerTwoUp);
        state.update();

        assert_eq!(state.paddle(Player::One).pos.y, 255);
        assert_eq!(state.paddle(Player::Two).pos.y, 245);
    }

    #[test]
    fn test_key_up_stops_paddle() {
        let mut state = GameState::with_seed(1);
        let input = InputBinding::new(&state);

        input.key_down(Control::PlayerOneUp);
        state.update();
        input.key_up(Control::PlayerOneUp);
        state.update();

        assert_eq!(state.paddle(Player::One).pos.y, 245);
    }

    #[test]
    fn test_releasing_up_while_down_held() {
        let state = GameState::with_seed(1);
        let input = InputBinding::new(&state);

        input.key_down(Control::PlayerTwoDown);
        input.key_down(Control::PlayerTwoUp);
        assert_eq!(state.paddle(Player::Two).speed(), -5);
        input.key_up(Control::PlayerTwoUp);
        assert_eq!(state.paddle(Player::Two).speed(), 5);
    }

    #[test]
    fn test_release_all() {
        let state = GameState::with_seed(1);
        let input = InputBinding::new(&state);
        input.key_down(Control::PlayerOneUp);
        input.key_down(Control::PlayerTwoDown);

        input.release_all();

        assert_eq!(state.paddle(Player::One).speed(), 0);
        assert_eq!(state.paddle(Player::Two).speed(), 0);
    }

    #[test]
    fn test_input_from_another_thread() {
        let state = GameState::with_seed(1);
        let input = InputBinding::new(&state);

        std::thread::spawn(move || input.key_down(Control::PlayerOneDown))
            .join()
            .unwrap();

        assert_eq!(state.paddle(Player::One).speed(), 5);
    }
}
