pub mod components;
pub mod config;
pub mod game_loop;
pub mod input;
pub mod map;
pub mod params;
pub mod resources;
pub mod state;
pub mod systems;

pub use components::*;
pub use config::*;
pub use game_loop::*;
pub use input::*;
pub use map::*;
pub use params::*;
pub use resources::*;
pub use state::*;
