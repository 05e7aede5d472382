use super::Renderer;
use crate::scene::{scene_instances, BACKGROUND, INSTANCE_COUNT, RECT_COUNT};
use game_core::GameState;
use wgpu::*;

pub fn draw_frame(renderer: &mut Renderer, state: &GameState) -> Result<(), String> {
    let output = match renderer.surface.get_current_texture() {
        Ok(output) => output,
        Err(SurfaceError::Lost | SurfaceError::Outdated) => {
            log::warn!("Surface lost, reconfiguring");
            renderer.reconfigure();
            return Ok(());
        }
        Err(e) => return Err(format!("Failed to get current texture: {:?}", e)),
    };
    let view = output.texture.create_view(&TextureViewDescriptor::default());
    let mut encoder = renderer
        .device
        .create_command_encoder(&CommandEncoderDescriptor {
            label: Some("Render Encoder"),
        });

    update_buffers(renderer, state);

    {
        let mut pass = encoder.begin_render_pass(&RenderPassDescriptor {
            label: Some("Main Pass"),
            color_attachments: &[Some(RenderPassColorAttachment {
                view: &view,
                resolve_target: None,
                ops: Operations {
                    load: LoadOp::Clear(BACKGROUND),
                    store: StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });
        draw_objects(renderer, &mut pass);
    }

    renderer.queue.submit(std::iter::once(encoder.finish()));
    output.present();

    Ok(())
}

fn update_buffers(renderer: &mut Renderer, state: &GameState) {
    let current = scene_instances(state);
    if renderer.last_instances.as_ref() == Some(&current) {
        return;
    }
    renderer
        .queue
        .write_buffer(&renderer.buffers.instances, 0, bytemuck::cast_slice(&current));
    renderer.last_instances = Some(current);
}

fn draw_objects(renderer: &Renderer, pass: &mut RenderPass<'_>) {
    let (rect, circle) = &renderer.meshes;

    pass.set_pipeline(&renderer.pipeline);
    pass.set_bind_group(0, &renderer.camera_bind_group, &[]);
    pass.set_vertex_buffer(1, renderer.buffers.instances.slice(..));

    // Centre line and paddles
    pass.set_vertex_buffer(0, rect.vertex_buffer.slice(..));
    pass.set_index_buffer(rect.index_buffer.slice(..), IndexFormat::Uint16);
    pass.draw_indexed(0..rect.index_count, 0, 0..RECT_COUNT as u32);

    // Ball
    pass.set_vertex_buffer(0, circle.vertex_buffer.slice(..));
    pass.set_index_buffer(circle.index_buffer.slice(..), IndexFormat::Uint16);
    pass.draw_indexed(
        0..circle.index_count,
        0,
        RECT_COUNT as u32..INSTANCE_COUNT as u32,
    );
}
