//! Browser host: owns the game state and drives it from animation frames

use std::cell::RefCell;
use std::rc::Rc;

use game_core::{Clock, Config, GameLoop, GameRng, GameState, InputBinding, Player, WinNotifier};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlCanvasElement, HtmlElement, Performance, Window};

use crate::hud::{create_element, Hud};
use crate::input::attach_keyboard;
use crate::renderer::Renderer;

pub const WINDOW_TITLE: &str = "Pong Game";

/// `performance.now()`
pub struct PerformanceClock(Performance);

impl Clock for PerformanceClock {
    fn now_ms(&self) -> f64 {
        self.0.now()
    }
}

/// Blocking `window.alert`, which also holds back the animation loop
pub struct AlertNotifier(Window);

impl WinNotifier for AlertNotifier {
    fn announce_winner(&mut self, winner: Player) {
        if let Err(e) = self.0.alert_with_message(&format!("{} wins the game!", winner)) {
            log::error!("Failed to show winner: {:?}", e);
        }
    }
}

/// Canvas plus score labels
pub struct View {
    renderer: Renderer,
    hud: Hud,
}

impl game_core::Renderer for View {
    fn render(&mut self, state: &GameState) {
        if let Err(e) = self.renderer.draw(state) {
            log::error!("{}", e);
        }
        self.hud.update(&state.score);
    }
}

pub struct App {
    state: GameState,
    game_loop: GameLoop<PerformanceClock>,
    view: View,
    notifier: AlertNotifier,
}

impl App {
    fn frame(&mut self) {
        self.game_loop
            .advance(&mut self.state, &mut self.view, &mut self.notifier);
    }
}

/// Build the page, wire up input and start the frame loop
pub async fn run() -> Result<(), String> {
    let window = web_sys::window().ok_or("No window")?;
    let document = window.document().ok_or("No document")?;
    let performance = window.performance().ok_or("No performance timer")?;
    document.set_title(WINDOW_TITLE);

    let config = Config::default();
    let (container, canvas) = create_board(&document, &config)?;
    let hud = Hud::new(&document, &container, config.board_width)?;
    let renderer = Renderer::new(canvas, config.board_width, config.board_height).await?;

    let ticks_per_second = config.ticks_per_second;
    let game_loop = GameLoop::new(PerformanceClock(performance), &config);
    let state = GameState::new(config, GameRng::from_entropy());
    attach_keyboard(&window, InputBinding::new(&state))?;

    let mut view = View { renderer, hud };
    game_core::Renderer::render(&mut view, &state);

    let app = App {
        state,
        game_loop,
        view,
        notifier: AlertNotifier(window.clone()),
    };
    log::info!("Pong started at {} ticks/s", ticks_per_second);

    start_animation_loop(window, app)
}

/// Fixed-size board: a positioned container holding the canvas, so the
/// score labels can sit on top of it
fn create_board(
    document: &Document,
    config: &Config,
) -> Result<(HtmlElement, HtmlCanvasElement), String> {
    let body = document.body().ok_or("No document body")?;
    body.set_attribute("style", "margin:0;background:#000;")
        .map_err(|e| format!("Failed to style body: {:?}", e))?;

    let container: HtmlElement = create_element(document, "div")?;
    container
        .set_attribute(
            "style",
            &format!(
                "position:relative;width:{}px;height:{}px;margin:0 auto;",
                config.board_width, config.board_height
            ),
        )
        .map_err(|e| format!("Failed to style container: {:?}", e))?;

    let canvas: HtmlCanvasElement = create_element(document, "canvas")?;
    canvas.set_width(config.board_width as u32);
    canvas.set_height(config.board_height as u32);
    canvas
        .set_attribute("style", "display:block;")
        .map_err(|e| format!("Failed to style canvas: {:?}", e))?;

    container
        .append_child(&canvas)
        .map_err(|e| format!("Failed to add canvas: {:?}", e))?;
    body.append_child(&container)
        .map_err(|e| format!("Failed to add board: {:?}", e))?;

    Ok((container, canvas))
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Re-arms itself every frame for the lifetime of the page
fn start_animation_loop(window: Window, mut app: App) -> Result<(), String> {
    let callback: FrameCallback = Rc::new(RefCell::new(None));
    let next = Rc::clone(&callback);
    let frame_window = window.clone();

    *callback.borrow_mut() = Some(Closure::new(move || {
        app.frame();
        if let Some(cb) = next.borrow().as_ref() {
            if let Err(e) = request_frame(&frame_window, cb) {
                log::error!("{}", e);
            }
        }
    }));

    let first = callback.borrow();
    let cb = first.as_ref().ok_or("Frame callback missing")?;
    request_frame(&window, cb)
}

fn request_frame(window: &Window, cb: &Closure<dyn FnMut()>) -> Result<(), String> {
    window
        .request_animation_frame(cb.as_ref().unchecked_ref())
        .map(|_| ())
        .map_err(|e| format!("Failed to request animation frame: {:?}", e))
}
