use crate::camera::{Camera, CameraUniform};
use crate::scene::{InstanceData, INSTANCE_COUNT};
use wgpu::util::DeviceExt;
use wgpu::*;

pub struct SceneBuffers {
    pub camera: Buffer,
    pub instances: Buffer,
}

pub fn create_buffers(device: &Device, camera: &Camera) -> SceneBuffers {
    let camera_uniform = CameraUniform::from_camera(camera);
    let camera_buffer = device.create_buffer_init(&util::BufferInitDescriptor {
        label: Some("Camera Buffer"),
        contents: bytemuck::cast_slice(&[camera_uniform]),
        usage: BufferUsages::UNIFORM | BufferUsages::COPY_DST,
    });

    // Centre line, both paddles, then the ball
    let instances = device.create_buffer(&BufferDescriptor {
        label: Some("Scene Instance Buffer"),
        size: (std::mem::size_of::<InstanceData>() * INSTANCE_COUNT) as u64,
        usage: BufferUsages::VERTEX | BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });

    SceneBuffers {
        camera: camera_buffer,
        instances,
    }
}
