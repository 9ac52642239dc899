//! Minimap painting onto an egui [`Painter`](egui::Painter).

use crate::surface::{MinimapSurface, Stroke};
use crate::{CanvasGeometry, PointerEvent, Size};
use egui::{Color32, Pos2, Rect, StrokeKind, Vec2};
use found_core::{Color, Point};

fn color32(color: Color) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
}

fn egui_stroke(stroke: Stroke) -> egui::Stroke {
    egui::Stroke::new(stroke.width as f32, color32(stroke.color))
}

/// Paints minimap pixels into a screen region of an egui painter.
///
/// Minimap pixel `(0, 0)` maps to `origin`; one minimap pixel is one point.
pub struct EguiSurface<'a> {
    painter: &'a egui::Painter,
    origin: Pos2,
    size: Vec2,
    background: Color32,
}

impl<'a> EguiSurface<'a> {
    pub fn new(painter: &'a egui::Painter, origin: Pos2, background: Color) -> Self {
        Self {
            painter,
            origin,
            size: Vec2::ZERO,
            background: color32(background),
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_min_size(self.origin, self.size)
    }

    fn pos(&self, point: Point) -> Pos2 {
        self.origin + Vec2::new(point.x as f32, point.y as f32)
    }
}

impl MinimapSurface for EguiSurface<'_> {
    fn resize(&mut self, width: u32, height: u32) {
        self.size = Vec2::new(width as f32, height as f32);
    }

    fn clear(&mut self) {
        self.painter.rect_filled(self.rect(), 0.0, self.background);
    }

    fn stroke_line(&mut self, from: Point, to: Point, stroke: Stroke) {
        self.painter
            .line_segment([self.pos(from), self.pos(to)], egui_stroke(stroke));
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Color) {
        self.painter
            .circle_filled(self.pos(center), radius as f32, color32(color));
    }

    fn stroke_rect(&mut self, corner_a: Point, corner_b: Point, stroke: Stroke) {
        self.painter.rect_stroke(
            Rect::from_two_pos(self.pos(corner_a), self.pos(corner_b)),
            0.0,
            egui_stroke(stroke),
            StrokeKind::Middle,
        );
    }
}

/// Canvas geometry of a minimap widget laid out at `response.rect`.
pub fn canvas_geometry(response: &egui::Response) -> CanvasGeometry {
    let rect = response.rect;
    CanvasGeometry::new(
        Point::new(rect.min.x as f64, rect.min.y as f64),
        Size::new(rect.width() as f64, rect.height() as f64),
    )
}

/// The click on a minimap widget this frame, if any.
pub fn clicked_pointer(response: &egui::Response) -> Option<PointerEvent> {
    if !response.clicked() {
        return None;
    }
    let pos = response.interact_pointer_pos()?;
    Some(PointerEvent::new(pos.x as f64, pos.y as f64))
}
