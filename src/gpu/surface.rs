//! [`RenderSurface`] backed by an egui painter.

use egui::{pos2, Align2, Color32, FontId, Painter, Pos2, Rect, Stroke, TextureHandle};
use glam::Vec2;

use crate::render::{ImageHandle, RenderSurface, TextAnchor, TextStyle};
use crate::visuals::Rgb;

/// Offset of the second stroke used to thicken bold text.
const BOLD_OFFSET: f32 = 0.6;

/// Paints into an egui layer.
///
/// Surface coordinates (centered, y up) are mapped onto the painter's clip
/// rectangle with `origin` at its center.
pub struct EguiSurface<'a> {
    painter: &'a Painter,
    origin: Pos2,
    images: &'a [TextureHandle],
}

impl<'a> EguiSurface<'a> {
    pub fn new(painter: &'a Painter, images: &'a [TextureHandle]) -> Self {
        Self {
            painter,
            origin: painter.clip_rect().center(),
            images,
        }
    }

    fn to_screen(&self, p: Vec2) -> Pos2 {
        pos2(self.origin.x + p.x, self.origin.y - p.y)
    }
}

fn color32(c: Rgb) -> Color32 {
    Color32::from_rgb(c.r, c.g, c.b)
}

impl RenderSurface for EguiSurface<'_> {
    fn clear_frame(&mut self, background: Rgb) {
        self.painter
            .rect_filled(self.painter.clip_rect(), 0.0, color32(background));
    }

    fn draw_circle_outline(&mut self, center: Vec2, radius: f32, color: Rgb, stroke_width: f32) {
        self.painter.circle_stroke(
            self.to_screen(center),
            radius,
            Stroke::new(stroke_width, color32(color)),
        );
    }

    fn draw_filled_dot(&mut self, position: Vec2, radius: f32, color: Rgb) {
        self.painter
            .circle_filled(self.to_screen(position), radius, color32(color));
    }

    fn draw_text(&mut self, position: Vec2, text: &str, style: &TextStyle) {
        let anchor = match style.anchor {
            TextAnchor::Center => Align2::CENTER_CENTER,
            TextAnchor::BottomLeft => Align2::LEFT_BOTTOM,
        };
        let font = FontId::proportional(style.size);
        let color = color32(style.color);
        let pos = self.to_screen(position);

        // The default egui fonts have no bold face.
        if style.bold {
            let shifted = pos + egui::vec2(BOLD_OFFSET, 0.0);
            self.painter.text(shifted, anchor, text, font.clone(), color);
        }
        self.painter.text(pos, anchor, text, font, color);
    }

    fn draw_image(&mut self, center: Vec2, image: ImageHandle) {
        let Some(texture) = self.images.get(image.0) else {
            log::warn!("draw_image: unknown image handle {}", image.0);
            return;
        };
        let rect = Rect::from_center_size(self.to_screen(center), texture.size_vec2());
        let uv = Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0));
        self.painter.image(texture.id(), rect, uv, Color32::WHITE);
    }
}
