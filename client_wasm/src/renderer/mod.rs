pub mod draw;
pub mod init;
pub mod pipeline;
pub mod resources;
pub mod shaders;

use crate::camera::Camera;
use crate::mesh::{circle_geometry, rectangle_geometry, Mesh};
use crate::scene::{InstanceData, INSTANCE_COUNT};
use game_core::GameState;
use resources::SceneBuffers;
use wgpu::*;

const CIRCLE_SEGMENTS: u16 = 32;

pub struct Renderer {
    pub device: Device,
    pub queue: Queue,
    pub surface: Surface<'static>,
    pub surface_config: SurfaceConfiguration,
    pub pipeline: RenderPipeline,
    pub camera_bind_group: BindGroup,
    pub buffers: SceneBuffers,
    pub meshes: (Mesh, Mesh), // rect, circle
    pub last_instances: Option<[InstanceData; INSTANCE_COUNT]>,
}

impl Renderer {
    /// Set up WebGPU on `canvas`, with a camera covering the whole board
    pub async fn new(
        canvas: web_sys::HtmlCanvasElement,
        board_width: i32,
        board_height: i32,
    ) -> Result<Self, String> {
        let ctx = init::init_wgpu(canvas).await?;
        let camera = Camera::orthographic(board_width as f32, board_height as f32);

        let buffers = resources::create_buffers(&ctx.device, &camera);
        let pipes = pipeline::create_pipeline(&ctx.device, ctx.config.format);

        let rect_mesh = Mesh::upload(&ctx.device, "Rectangle", rectangle_geometry());
        let circle_mesh = Mesh::upload(&ctx.device, "Circle", circle_geometry(CIRCLE_SEGMENTS));

        let camera_bind_group = ctx.device.create_bind_group(&BindGroupDescriptor {
            label: Some("Camera Bind Group"),
            layout: &pipes.camera_layout,
            entries: &[BindGroupEntry {
                binding: 0,
                resource: buffers.camera.as_entire_binding(),
            }],
        });

        log::info!(
            "Renderer ready: {}x{} {:?}",
            ctx.config.width,
            ctx.config.height,
            ctx.config.format
        );

        Ok(Self {
            device: ctx.device,
            queue: ctx.queue,
            surface: ctx.surface,
            surface_config: ctx.config,
            pipeline: pipes.pipeline,
            camera_bind_group,
            buffers,
            meshes: (rect_mesh, circle_mesh),
            last_instances: None,
        })
    }

    pub fn draw(&mut self, state: &GameState) -> Result<(), String> {
        draw::draw_frame(self, state)
    }

    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.surface_config);
    }
}
