//! egui overlay drawn on top of the wgpu surface
//!
//! Owns the egui context, the winit input bridge and the egui wgpu
//! renderer. A frame is `run` (build the UI) followed by `paint`.

use winit::{event::WindowEvent, window::Window};

use crate::{GraphicsContext, CLEAR_COLOR};

pub struct EguiOverlay {
    pub context: egui::Context,
    state: egui_winit::State,
    renderer: egui_wgpu::Renderer,
}

impl EguiOverlay {
    pub fn new(ctx: &GraphicsContext) -> Self {
        let context = egui::Context::default();
        context.set_visuals(egui::Visuals::dark());

        let viewport_id = context.viewport_id();
        let state = egui_winit::State::new(
            context.clone(),
            viewport_id,
            &*ctx.window,
            Some(ctx.window.scale_factor() as f32),
            None,
        );
        let renderer = egui_wgpu::Renderer::new(&ctx.device, ctx.config.format, None, 1);

        Self {
            context,
            state,
            renderer,
        }
    }

    /// Feed a window event to egui
    pub fn on_window_event(
        &mut self,
        window: &Window,
        event: &WindowEvent,
    ) -> egui_winit::EventResponse {
        self.state.on_window_event(window, event)
    }

    /// Build one UI frame
    pub fn run(&mut self, window: &Window, build_ui: impl FnMut(&egui::Context)) -> egui::FullOutput {
        let raw_input = self.state.take_egui_input(window);
        self.context.run(raw_input, build_ui)
    }

    /// Clear `view` and paint the tessellated frame into it.
    ///
    /// Returns the command buffers egui recorded for its own uploads; submit
    /// them before the encoder.
    pub fn paint(
        &mut self,
        ctx: &GraphicsContext,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        output: egui::FullOutput,
    ) -> Vec<wgpu::CommandBuffer> {
        self.state
            .handle_platform_output(&ctx.window, output.platform_output);

        let paint_jobs = self
            .context
            .tessellate(output.shapes, output.pixels_per_point);
        let screen = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [ctx.config.width, ctx.config.height],
            pixels_per_point: output.pixels_per_point,
        };

        for (id, delta) in &output.textures_delta.set {
            self.renderer
                .update_texture(&ctx.device, &ctx.queue, *id, delta);
        }

        let uploads = self.renderer.update_buffers(
            &ctx.device,
            &ctx.queue,
            encoder,
            &paint_jobs,
            &screen,
        );

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("egui Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            self.renderer.render(&mut render_pass, &paint_jobs, &screen);
        }

        for id in &output.textures_delta.free {
            self.renderer.free_texture(id);
        }

        uploads
    }
}
