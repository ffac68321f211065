//! The egui side of a frame: input state, shape tessellation and the wgpu
//! renderer that draws the demo's shapes over the cleared background.

use std::sync::Arc;
use winit::window::Window;

/// egui context, winit input state and wgpu renderer for the demo window.
pub struct EguiIntegration {
    pub ctx: egui::Context,
    state: egui_winit::State,
    renderer: egui_wgpu::Renderer,
}

/// A painted and tessellated egui pass, waiting to be drawn.
pub struct PaintedFrame {
    primitives: Vec<egui::ClippedPrimitive>,
    textures: egui::TexturesDelta,
    screen: egui_wgpu::ScreenDescriptor,
}

impl PaintedFrame {
    fn tessellate(ctx: &egui::Context, output: egui::FullOutput, size_in_pixels: [u32; 2]) -> Self {
        Self {
            primitives: ctx.tessellate(output.shapes, output.pixels_per_point),
            textures: output.textures_delta,
            screen: egui_wgpu::ScreenDescriptor {
                size_in_pixels,
                pixels_per_point: output.pixels_per_point,
            },
        }
    }
}

impl EguiIntegration {
    pub fn new(device: &wgpu::Device, output_format: wgpu::TextureFormat, window: &Arc<Window>) -> Self {
        let ctx = egui::Context::default();

        let state = egui_winit::State::new(
            ctx.clone(),
            egui::ViewportId::ROOT,
            window.as_ref(),
            Some(window.scale_factor() as f32),
            None,
            None,
        );

        // No depth buffer, no MSAA, no dithering: flat 2D shapes only.
        let renderer = egui_wgpu::Renderer::new(device, output_format, None, 1, false);

        Self { ctx, state, renderer }
    }

    /// Forward a winit event so egui tracks size and scale changes.
    pub fn on_window_event(&mut self, window: &Window, event: &winit::event::WindowEvent) {
        let _ = self.state.on_window_event(window, event);
    }

    /// Run `paint` inside one egui pass and tessellate the result for a
    /// target of `size_in_pixels`.
    pub fn paint(
        &mut self,
        window: &Window,
        size_in_pixels: [u32; 2],
        paint: impl FnOnce(&egui::Context),
    ) -> PaintedFrame {
        let raw_input = self.state.take_egui_input(window);
        self.ctx.begin_pass(raw_input);
        paint(&self.ctx);
        let mut output = self.ctx.end_pass();
        let platform_output = std::mem::take(&mut output.platform_output);
        self.state.handle_platform_output(window, platform_output);

        PaintedFrame::tessellate(&self.ctx, output, size_in_pixels)
    }

    /// Upload `frame` and record a pass that clears `view` to `background`
    /// and draws the frame's shapes.
    ///
    /// Returns command buffers from paint callbacks, to submit before
    /// `encoder`.
    pub fn draw(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        background: wgpu::Color,
        frame: &PaintedFrame,
    ) -> Vec<wgpu::CommandBuffer> {
        for (id, delta) in &frame.textures.set {
            self.renderer.update_texture(device, queue, *id, delta);
        }
        let callback_buffers =
            self.renderer
                .update_buffers(device, queue, encoder, &frame.primitives, &frame.screen);

        let mut render_pass = encoder
            .begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Demo Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(background),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            })
            .forget_lifetime();
        self.renderer
            .render(&mut render_pass, &frame.primitives, &frame.screen);

        callback_buffers
    }

    /// Release textures egui no longer needs once `frame` has been presented.
    pub fn finish(&mut self, frame: PaintedFrame) {
        for id in &frame.textures.free {
            self.renderer.free_texture(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_headless(paint: impl FnMut(&egui::Context)) -> PaintedFrame {
        let ctx = egui::Context::default();
        let output = ctx.run(egui::RawInput::default(), paint);
        PaintedFrame::tessellate(&ctx, output, [1000, 650])
    }

    #[test]
    fn test_painted_frame_carries_shapes_and_size() {
        let frame = run_headless(|ctx| {
            ctx.layer_painter(egui::LayerId::background()).circle_filled(
                egui::pos2(500.0, 325.0),
                22.0,
                egui::Color32::from_rgb(0xff, 0x54, 0x54),
            );
        });

        assert_eq!(frame.primitives.len(), 1);
        assert_eq!(frame.screen.size_in_pixels, [1000, 650]);
        assert_eq!(frame.screen.pixels_per_point, 1.0);
        // The first pass uploads the font atlas.
        assert!(!frame.textures.set.is_empty());
    }

    #[test]
    fn test_empty_pass_has_no_primitives() {
        let frame = run_headless(|_| {});
        assert!(frame.primitives.is_empty());
        assert!(frame.textures.free.is_empty());
    }
}
