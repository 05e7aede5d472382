//! WebGPU client for local two-player Pong
//!
//! Engine-free rendering using wgpu for the WebGPU API. The game itself lives
//! in `game_core`; this crate supplies the page, the keyboard, the drawing and
//! the frame loop.
//!
//! The canvas surface is only available when compiling for wasm32, so the
//! host modules are gated on that target.

pub mod camera;
pub mod hud;
pub mod input;
pub mod logger;
pub mod mesh;
pub mod scene;

#[cfg(target_arch = "wasm32")]
pub mod app;
#[cfg(target_arch = "wasm32")]
pub mod renderer;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Entry point, run once the module is instantiated
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    logger::init(log::LevelFilter::Debug)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    wasm_bindgen_futures::spawn_local(async {
        if let Err(e) = app::run().await {
            log::error!("Pong failed to start: {}", e);
        }
    });

    Ok(())
}
