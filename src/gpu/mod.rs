//! GPU presentation: a wgpu surface that shows one egui pass per frame.
//!
//! The demos never touch wgpu directly. They paint through
//! [`EguiSurface`], which turns draw calls into egui shapes; [`GpuState`]
//! tessellates those shapes and renders them into the window.

mod egui_integration;
mod surface;

use std::sync::Arc;

use winit::window::Window;

use crate::error::GpuError;
use crate::visuals::Rgb;
use egui_integration::EguiIntegration;
pub use surface::EguiSurface;

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    pub config: wgpu::SurfaceConfiguration,
    egui: EguiIntegration,
}

impl GpuState {
    pub async fn new(window: Arc<Window>) -> Result<Self, GpuError> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });

        let surface = instance.create_surface(window.clone())?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or(GpuError::NoAdapter)?;

        let info = adapter.get_info();
        log::info!("using GPU adapter {} ({:?})", info.name, info.backend);

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("Device"),
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::downlevel_webgl2_defaults()
                        .using_resolution(adapter.limits()),
                    memory_hints: Default::default(),
                },
                None,
            )
            .await?;

        // egui writes gamma-space colors, so prefer a non-sRGB target.
        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| !f.is_srgb())
            .copied()
            .unwrap_or(surface_caps.formats[0]);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let egui = EguiIntegration::new(&device, surface_format, &window);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            egui,
        })
    }

    /// The egui context, for loading textures.
    pub fn egui_context(&self) -> &egui::Context {
        &self.egui.ctx
    }

    pub fn on_window_event(&mut self, window: &Window, event: &winit::event::WindowEvent) {
        self.egui.on_window_event(window, event);
    }

    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.config.width = new_size.width;
            self.config.height = new_size.height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    /// Reconfigure the surface with its current size, after it was lost.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    /// Clear to `background`, run `paint` inside an egui pass and present
    /// the result.
    pub fn render(
        &mut self,
        window: &Window,
        background: Rgb,
        paint: impl FnOnce(&egui::Context),
    ) -> Result<(), wgpu::SurfaceError> {
        let frame = self
            .egui
            .paint(window, [self.config.width, self.config.height], paint);

        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        let callback_buffers = self.egui.draw(
            &self.device,
            &self.queue,
            &mut encoder,
            &view,
            clear_color(background),
            &frame,
        );

        self.queue.submit(
            callback_buffers
                .into_iter()
                .chain(std::iter::once(encoder.finish())),
        );
        output.present();
        self.egui.finish(frame);

        Ok(())
    }
}

fn clear_color(c: Rgb) -> wgpu::Color {
    wgpu::Color {
        r: c.r as f64 / 255.0,
        g: c.g as f64 / 255.0,
        b: c.b as f64 / 255.0,
        a: 1.0,
    }
}
