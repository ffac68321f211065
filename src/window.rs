//! Window host: drives a [`Demo`] at a fixed tick rate and redraws it every
//! frame.

use std::sync::Arc;
use std::time::Duration;

use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::error::RunError;
use crate::gpu::{EguiSurface, GpuState};
use crate::logo::LogoImage;
use crate::render::RenderSurface;
use crate::time::Time;
use crate::visuals::Rgb;

/// An animation the host can run.
///
/// The host calls [`Demo::tick`] as many times as the fixed interval dictates,
/// then [`Demo::draw`] once per displayed frame.
pub trait Demo {
    /// Window title.
    fn title(&self) -> &str;

    /// Window size in logical pixels.
    fn window_size(&self) -> (u32, u32);

    /// Delay between ticks.
    fn tick_interval(&self) -> Duration;

    /// Color the window is cleared to underneath the painted frame.
    fn background(&self) -> Rgb;

    /// Images to upload at startup. `ImageHandle(i)` refers to the `i`-th entry.
    fn images(&self) -> Vec<&LogoImage> {
        Vec::new()
    }

    /// Advance the animation by one tick.
    fn tick(&mut self);

    /// Paint the current state.
    fn draw(&mut self, surface: &mut dyn RenderSurface);
}

struct App<D: Demo> {
    demo: D,
    window: Option<Arc<Window>>,
    gpu_state: Option<GpuState>,
    images: Vec<egui::TextureHandle>,
    time: Time,
    error: Option<RunError>,
}

impl<D: Demo> App<D> {
    fn new(demo: D) -> Self {
        let time = Time::new(demo.tick_interval());
        Self {
            demo,
            window: None,
            gpu_state: None,
            images: Vec::new(),
            time,
            error: None,
        }
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<(), RunError> {
        let (width, height) = self.demo.window_size();
        let window_attrs = Window::default_attributes()
            .with_title(self.demo.title())
            .with_inner_size(winit::dpi::LogicalSize::new(width, height))
            .with_resizable(false);

        let window = Arc::new(event_loop.create_window(window_attrs)?);
        log::info!("opened window '{}' ({}x{})", self.demo.title(), width, height);

        let gpu_state = pollster::block_on(GpuState::new(window.clone()))?;

        self.images = self
            .demo
            .images()
            .into_iter()
            .map(|image| {
                let pixels = egui::ColorImage::from_rgba_unmultiplied(
                    [image.width as usize, image.height as usize],
                    &image.rgba,
                );
                gpu_state.egui_context().load_texture(
                    image.path.display().to_string(),
                    pixels,
                    egui::TextureOptions::LINEAR,
                )
            })
            .collect();

        log::debug!("{} images uploaded", self.images.len());

        window.request_redraw();
        self.window = Some(window);
        self.gpu_state = Some(gpu_state);
        Ok(())
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let (Some(window), Some(gpu_state)) = (self.window.as_ref(), self.gpu_state.as_mut()) else {
            return;
        };

        for _ in 0..self.time.update() {
            self.demo.tick();
        }

        let background = self.demo.background();
        let demo = &mut self.demo;
        let images = &self.images;
        let result = gpu_state.render(window, background, |ctx| {
            let painter = ctx.layer_painter(egui::LayerId::background());
            let mut surface = EguiSurface::new(&painter, images);
            demo.draw(&mut surface);
        });

        match result {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => gpu_state.reconfigure(),
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("GPU out of memory, exiting");
                event_loop.exit();
            }
            Err(e) => log::warn!("render error: {:?}", e),
        }

        window.request_redraw();
    }
}

impl<D: Demo> ApplicationHandler for App<D> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.init(event_loop) {
            self.error = Some(e);
            event_loop.exit();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        if let (Some(window), Some(gpu_state)) = (&self.window, &mut self.gpu_state) {
            gpu_state.on_window_event(window, &event);
        }

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                if let Some(gpu_state) = &mut self.gpu_state {
                    gpu_state.resize(physical_size);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }
}

/// Open a window and run `demo` until it is closed.
pub fn run<D: Demo>(demo: D) -> Result<(), RunError> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(demo);
    event_loop.run_app(&mut app)?;

    match app.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
