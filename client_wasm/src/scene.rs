//! What gets drawn for a game state, independent of the GPU

use game_core::{GameState, Player, Rect};

/// Instance data for rendering (matches shader InstanceInput).
/// Must use `repr(C)` and `bytemuck` to safely cast to raw bytes for the GPU buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceData {
    pub transform: [f32; 4], // x, y, width, height (top-left anchored)
    pub tint: [f32; 4],      // rgba
}

impl InstanceData {
    fn from_rect(rect: Rect, tint: [f32; 4]) -> Self {
        Self {
            transform: [
                rect.min.x as f32,
                rect.min.y as f32,
                rect.size.x as f32,
                rect.size.y as f32,
            ],
            tint,
        }
    }
}

pub const BACKGROUND: wgpu::Color = wgpu::Color::BLACK;
pub const FOREGROUND: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
pub const CENTRE_LINE_WIDTH: i32 = 1;

/// Instances drawn with the rectangle mesh: centre line, then both paddles
pub const RECT_COUNT: usize = 3;
/// Total instances, the ball last (drawn with the circle mesh)
pub const INSTANCE_COUNT: usize = RECT_COUNT + 1;

/// Every shape on the board, in instance buffer order
pub fn scene_instances(state: &GameState) -> [InstanceData; INSTANCE_COUNT] {
    let board = state.map.bounds();
    let centre_line = Rect::new(
        board.min.x + board.size.x / 2,
        board.min.y,
        CENTRE_LINE_WIDTH,
        board.size.y,
    );

    [
        InstanceData::from_rect(centre_line, FOREGROUND),
        InstanceData::from_rect(state.paddle(Player::One).bounds(), FOREGROUND),
        InstanceData::from_rect(state.paddle(Player::Two).bounds(), FOREGROUND),
        InstanceData::from_rect(state.ball.bounds(), FOREGROUND),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::IVec2;

    #[test]
    fn test_scene_layout() {
        let mut state = GameState::with_seed(1);
        state.ball.pos = IVec2::new(100, 120);

        let instances = scene_instances(&state);

        assert_eq!(instances[0].transform, [400.0, 0.0, 1.0, 600.0]);
        assert_eq!(instances[1].transform, [20.0, 250.0, 20.0, 100.0]);
        assert_eq!(instances[2].transform, [760.0, 250.0, 20.0, 100.0]);
        assert_eq!(instances[3].transform, [100.0, 120.0, 20.0, 20.0]);
    }

    #[test]
    fn test_instance_stride() {
        assert_eq!(std::mem::size_of::<InstanceData>(), 32);
    }
}
