//! Mesh generation for Pong
//!
//! Both meshes live in the unit square with the origin at its top-left
//! corner. An instance transform scales and offsets them onto the board.

use wgpu::util::DeviceExt;
use wgpu::*;

/// Vertex data for meshes
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
}

/// Unit square, two triangles
pub fn rectangle_geometry() -> (Vec<Vertex>, Vec<u16>) {
    let vertices = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]]
        .map(|position| Vertex { position })
        .to_vec();
    let indices = vec![0, 1, 2, 2, 3, 0];

    (vertices, indices)
}

/// Circle inscribed in the unit square, as a triangle fan around its centre
pub fn circle_geometry(segments: u16) -> (Vec<Vertex>, Vec<u16>) {
    let mut vertices = Vec::with_capacity(segments as usize + 1);
    let mut indices = Vec::with_capacity(segments as usize * 3);

    vertices.push(Vertex {
        position: [0.5, 0.5],
    });
    for i in 0..segments {
        let angle = std::f32::consts::TAU * i as f32 / segments as f32;
        vertices.push(Vertex {
            position: [0.5 + 0.5 * angle.cos(), 0.5 + 0.5 * angle.sin()],
        });
    }

    for i in 0..segments {
        let current = i + 1;
        let next = (i + 1) % segments + 1;
        indices.extend_from_slice(&[0, current, next]);
    }

    (vertices, indices)
}

/// Mesh data with GPU buffers
pub struct Mesh {
    pub vertex_buffer: Buffer,
    pub index_buffer: Buffer,
    pub index_count: u32,
}

impl Mesh {
    /// Upload once; shapes never change after start-up
    pub fn upload(
        device: &Device,
        label: &str,
        (vertices, indices): (Vec<Vertex>, Vec<u16>),
    ) -> Self {
        let vertex_buffer = device.create_buffer_init(&util::BufferInitDescriptor {
            label: Some(&format!("{} Vertices", label)),
            contents: bytemuck::cast_slice(&vertices),
            usage: BufferUsages::VERTEX,
        });
        // create_buffer_init pads odd u16 counts to the copy alignment
        let index_buffer = device.create_buffer_init(&util::BufferInitDescriptor {
            label: Some(&format!("{} Indices", label)),
            contents: bytemuck::cast_slice(&indices),
            usage: BufferUsages::INDEX,
        });

        Self {
            vertex_buffer,
            index_buffer,
            index_count: indices.len() as u32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangle_covers_unit_square() {
        let (vertices, indices) = rectangle_geometry();
        assert_eq!(vertices.len(), 4);
        assert_eq!(indices.len(), 6);
        for v in &vertices {
            assert!(v.position.iter().all(|c| *c == 0.0 || *c == 1.0));
        }
    }

    #[test]
    fn test_circle_stays_inside_unit_square() {
        let (vertices, indices) = circle_geometry(32);
        assert_eq!(vertices.len(), 33);
        assert_eq!(indices.len(), 96);
        for v in &vertices {
            let dx = v.position[0] - 0.5;
            let dy = v.position[1] - 0.5;
            assert!(dx * dx + dy * dy <= 0.25 + 1e-6);
        }
    }

    #[test]
    fn test_circle_fan_closes() {
        let (vertices, indices) = circle_geometry(8);
        assert!(indices.iter().all(|&i| (i as usize) < vertices.len()));
        // Last triangle wraps back to the first ring vertex
        assert_eq!(&indices[indices.len() - 3..], &[0, 8, 1]);
    }
}
