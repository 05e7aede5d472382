//! Keyboard input handling

use game_core::{Control, InputBinding};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, Window};

/// Map a `KeyboardEvent.key` value to a control.
/// W/S drive the left paddle, the arrow keys the right one.
pub fn control_for_key(key: &str) -> Option<Control> {
    match key {
        "w" | "W" => Some(Control::PlayerOneUp),
        "s" | "S" => Some(Control::PlayerOneDown),
        "ArrowUp" => Some(Control::PlayerTwoUp),
        "ArrowDown" => Some(Control::PlayerTwoDown),
        _ => None,
    }
}

/// Forward key presses and releases on `window` to the paddle intents.
/// Listeners stay registered for the lifetime of the page.
pub fn attach_keyboard(window: &Window, binding: InputBinding) -> Result<(), String> {
    for (event_name, pressed) in [("keydown", true), ("keyup", false)] {
        let binding = binding.clone();
        let handler = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
            if let Some(control) = control_for_key(&event.key()) {
                // Arrow keys would otherwise scroll the page
                event.prevent_default();
                binding.apply(control, pressed);
            }
        });
        window
            .add_event_listener_with_callback(event_name, handler.as_ref().unchecked_ref())
            .map_err(|e| format!("Failed to add {} listener: {:?}", event_name, e))?;
        handler.forget();
    }

    // Key-up events are lost while the page is unfocused
    let handler = Closure::<dyn FnMut()>::new(move || binding.release_all());
    window
        .add_event_listener_with_callback("blur", handler.as_ref().unchecked_ref())
        .map_err(|e| format!("Failed to add blur listener: {:?}", e))?;
    handler.forget();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_one_keys() {
        assert_eq!(control_for_key("w"), Some(Control::PlayerOneUp));
        assert_eq!(control_for_key("W"), Some(Control::PlayerOneUp));
        assert_eq!(control_for_key("s"), Some(Control::PlayerOneDown));
        assert_eq!(control_for_key("S"), Some(Control::PlayerOneDown));
    }

    #[test]
    fn test_player_two_keys() {
        assert_eq!(control_for_key("ArrowUp"), Some(Control::PlayerTwoUp));
        assert_eq!(control_for_key("ArrowDown"), Some(Control::PlayerTwoDown));
    }

    #[test]
    fn test_other_keys_ignored() {
        for key in ["a", "d", "ArrowLeft", "Enter", " ", "Escape"] {
            assert_eq!(control_for_key(key), None, "{:?}", key);
        }
    }
}
