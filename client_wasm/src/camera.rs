//! Camera for Pong game
//!
//! 2D orthographic camera over the board in logical pixels, origin at the
//! top-left corner and y growing downwards

use glam::{Mat4, Vec4};

/// Camera struct
pub struct Camera {
    pub view: Mat4,
    pub projection: Mat4,
}

impl Camera {
    /// Create an orthographic camera for a `width` x `height` board
    pub fn orthographic(width: f32, height: f32) -> Self {
        // Top and bottom swapped so that y = 0 is the top edge
        let projection = Mat4::orthographic_rh(0.0, width, height, 0.0, -1.0, 1.0);

        Self {
            view: Mat4::IDENTITY,
            projection,
        }
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection * self.view
    }

    /// Board position to clip space
    pub fn project(&self, x: f32, y: f32) -> Vec4 {
        self.view_proj() * Vec4::new(x, y, 0.0, 1.0)
    }
}

/// Camera uniform data (matches WGSL struct, 256-byte aligned)
#[repr(C, align(256))]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    view_proj: [[f32; 4]; 4], // 64 bytes (mat4x4)
    _padding: [f32; 48],      // 192 bytes padding (48 * 4) to reach 256 bytes
}

impl CameraUniform {
    pub fn from_camera(camera: &Camera) -> Self {
        Self {
            view_proj: camera.view_proj().to_cols_array_2d(),
            _padding: [0.0; 48],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_clip(v: Vec4, x: f32, y: f32) {
        assert!((v.x - x).abs() < 1e-5, "x: {} != {}", v.x, x);
        assert!((v.y - y).abs() < 1e-5, "y: {} != {}", v.y, y);
    }

    #[test]
    fn test_top_left_maps_to_clip_top_left() {
        let camera = Camera::orthographic(800.0, 600.0);
        assert_clip(camera.project(0.0, 0.0), -1.0, 1.0);
    }

    #[test]
    fn test_bottom_right_maps_to_clip_bottom_right() {
        let camera = Camera::orthographic(800.0, 600.0);
        assert_clip(camera.project(800.0, 600.0), 1.0, -1.0);
    }

    #[test]
    fn test_centre_maps_to_origin() {
        let camera = Camera::orthographic(800.0, 600.0);
        assert_clip(camera.project(400.0, 300.0), 0.0, 0.0);
    }

    #[test]
    fn test_uniform_is_256_bytes() {
        assert_eq!(std::mem::size_of::<CameraUniform>(), 256);
    }
}
