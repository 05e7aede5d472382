//! Score display
//!
//! The two score strings are DOM elements laid over the canvas at fixed
//! positions, so no text rendering is needed on the GPU side.

use game_core::{Player, Score};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

pub const FONT_SIZE_PX: i32 = 30;

/// Text baseline position of a player's score label, in board pixels
pub fn label_baseline(player: Player, board_width: i32) -> (i32, i32) {
    match player {
        Player::One => (20, 30),
        Player::Two => (board_width - 180, 30),
    }
}

pub fn score_label(player: Player, score: &Score) -> String {
    format!("{}: {}", player, score.get(player))
}

pub struct Hud {
    labels: [HtmlElement; 2],
    shown: Option<Score>,
}

impl Hud {
    /// Create both labels inside `container`, which must be positioned
    pub fn new(document: &Document, container: &Element, board_width: i32) -> Result<Self, String> {
        let make_label = |player: Player| -> Result<HtmlElement, String> {
            let (x, baseline) = label_baseline(player, board_width);
            let label: HtmlElement = create_element(document, "div")?;
            label.set_id(&format!("score-{}", player.index() + 1));
            let style = format!(
                "position:absolute;left:{}px;top:{}px;line-height:{}px;\
                 font:bold {}px Arial,sans-serif;color:white;pointer-events:none;\
                 user-select:none;",
                x,
                baseline - FONT_SIZE_PX,
                FONT_SIZE_PX,
                FONT_SIZE_PX,
            );
            label
                .set_attribute("style", &style)
                .map_err(|e| format!("Failed to style score label: {:?}", e))?;
            container
                .append_child(&label)
                .map_err(|e| format!("Failed to add score label: {:?}", e))?;
            Ok(label)
        };

        Ok(Self {
            labels: [make_label(Player::One)?, make_label(Player::Two)?],
            shown: None,
        })
    }

    /// Rewrite the labels if the score changed since the last call
    pub fn update(&mut self, score: &Score) {
        if self.shown.as_ref() == Some(score) {
            return;
        }
        for player in Player::ALL {
            let text = score_label(player, score);
            self.labels[player.index()].set_text_content(Some(&text));
        }
        self.shown = Some(*score);
    }
}

pub fn create_element<T: JsCast>(document: &Document, tag: &str) -> Result<T, String> {
    document
        .create_element(tag)
        .map_err(|e| format!("Failed to create <{}>: {:?}", tag, e))?
        .dyn_into::<T>()
        .map_err(|_| format!("<{}> has an unexpected type", tag))
}
