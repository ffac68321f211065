//! The drawing interface the demos paint through.
//!
//! Frame renderers only ever talk to a [`RenderSurface`]. Coordinates are in
//! logical pixels, centered on the window, with y pointing up. The egui host
//! converts them to screen space; [`RecordingSurface`] just stores the calls
//! so tests can inspect a frame.

use glam::Vec2;

use crate::visuals::Rgb;

/// Index of an image registered with the host (see `Demo::images`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageHandle(pub usize);

/// Where text is anchored relative to its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAnchor {
    /// Position is the text's center.
    #[default]
    Center,
    /// Position is the bottom-left corner of the text.
    BottomLeft,
}

/// Font settings for [`RenderSurface::draw_text`].
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub color: Rgb,
    pub bold: bool,
    pub anchor: TextAnchor,
}

impl TextStyle {
    pub fn new(size: f32, color: Rgb) -> Self {
        Self {
            size,
            color,
            bold: false,
            anchor: TextAnchor::Center,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn anchored(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }
}

/// Immediate-mode drawing primitives.
pub trait RenderSurface {
    /// Fill the whole frame with `background`.
    fn clear_frame(&mut self, background: Rgb);

    /// Stroke a circle outline.
    fn draw_circle_outline(&mut self, center: Vec2, radius: f32, color: Rgb, stroke_width: f32);

    /// Fill a round dot.
    fn draw_filled_dot(&mut self, position: Vec2, radius: f32, color: Rgb);

    /// Draw a line of text.
    fn draw_text(&mut self, position: Vec2, text: &str, style: &TextStyle);

    /// Draw a registered image at its native size, centered on `center`.
    fn draw_image(&mut self, center: Vec2, image: ImageHandle);
}

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Rgb),
    CircleOutline {
        center: Vec2,
        radius: f32,
        color: Rgb,
        stroke_width: f32,
    },
    Dot {
        position: Vec2,
        radius: f32,
        color: Rgb,
    },
    Text {
        position: Vec2,
        text: String,
        style: TextStyle,
    },
    Image {
        center: Vec2,
        image: ImageHandle,
    },
}

/// A surface that records every call instead of drawing.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop everything recorded so far.
    pub fn reset(&mut self) {
        self.commands.clear();
    }

    /// Recorded dots, in draw order.
    pub fn dots(&self) -> impl Iterator<Item = (Vec2, f32, Rgb)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Dot { position, radius, color } => Some((*position, *radius, *color)),
            _ => None,
        })
    }

    /// Recorded circle outlines as `(center, radius, color, width)`.
    pub fn outlines(&self) -> impl Iterator<Item = (Vec2, f32, Rgb, f32)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::CircleOutline {
                center,
                radius,
                color,
                stroke_width,
            } => Some((*center, *radius, *color, *stroke_width)),
            _ => None,
        })
    }

    /// Recorded text strings, in draw order.
    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl RenderSurface for RecordingSurface {
    fn clear_frame(&mut self, background: Rgb) {
        self.commands.push(DrawCommand::Clear(background));
    }

    fn draw_circle_outline(&mut self, center: Vec2, radius: f32, color: Rgb, stroke_width: f32) {
        self.commands.push(DrawCommand::CircleOutline {
            center,
            radius,
            color,
            stroke_width,
        });
    }

    fn draw_filled_dot(&mut self, position: Vec2, radius: f32, color: Rgb) {
        self.commands.push(DrawCommand::Dot { position, radius, color });
    }

    fn draw_text(&mut self, position: Vec2, text: &str, style: &TextStyle) {
        self.commands.push(DrawCommand::Text {
            position,
            text: text.to_string(),
            style: style.clone(),
        });
    }

    fn draw_image(&mut self, center: Vec2, image: ImageHandle) {
        self.commands.push(DrawCommand::Image { center, image });
    }
}
