use found_core::{Color, Point};

/// Line color and width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
}

impl Stroke {
    pub const fn new(width: f64, color: Color) -> Self {
        Self { color, width }
    }
}

/// A 2D drawable surface the minimap is painted onto.
///
/// Coordinates are minimap pixels with the origin at the top-left corner.
pub trait MinimapSurface {
    /// Whether the surface can currently be drawn on.
    fn is_ready(&self) -> bool {
        true
    }

    /// Sets the logical size of the surface. Discards previous content.
    fn resize(&mut self, width: u32, height: u32);

    fn clear(&mut self);

    fn stroke_line(&mut self, from: Point, to: Point, stroke: Stroke);

    fn fill_circle(&mut self, center: Point, radius: f64, color: Color);

    /// Strokes the axis-aligned rectangle spanned by two opposite corners.
    fn stroke_rect(&mut self, corner_a: Point, corner_b: Point, stroke: Stroke);
}

impl<S: MinimapSurface + ?Sized> MinimapSurface for &mut S {
    fn is_ready(&self) -> bool {
        (**self).is_ready()
    }

    fn resize(&mut self, width: u32, height: u32) {
        (**self).resize(width, height)
    }

    fn clear(&mut self) {
        (**self).clear()
    }

    fn stroke_line(&mut self, from: Point, to: Point, stroke: Stroke) {
        (**self).stroke_line(from, to, stroke)
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Color) {
        (**self).fill_circle(center, radius, color)
    }

    fn stroke_rect(&mut self, corner_a: Point, corner_b: Point, stroke: Stroke) {
        (**self).stroke_rect(corner_a, corner_b, stroke)
    }
}

/// A single call made against a [`MinimapSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Resize { width: u32, height: u32 },
    Clear,
    Line {
        from: Point,
        to: Point,
        stroke: Stroke,
    },
    Circle {
        center: Point,
        radius: f64,
        color: Color,
    },
    Rect {
        corner_a: Point,
        corner_b: Point,
        stroke: Stroke,
    },
}

/// Surface that records every call instead of drawing.
///
/// Like a canvas, resizing wipes whatever was recorded before.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
    size: (u32, u32),
    unavailable: bool,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// A surface whose drawing context cannot be acquired.
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    pub fn lines(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
    }

    pub fn circles(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
    }

    pub fn rects(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Rect { .. }))
    }
}

impl MinimapSurface for RecordingSurface {
    fn is_ready(&self) -> bool {
        !self.unavailable
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.size = (width, height);
        self.commands.clear();
        self.commands.push(DrawCommand::Resize { width, height });
    }

    fn clear(&mut self) {
        self.commands.push(DrawCommand::Clear);
    }

    fn stroke_line(&mut self, from: Point, to: Point, stroke: Stroke) {
        self.commands.push(DrawCommand::Line { from, to, stroke });
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Color) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn stroke_rect(&mut self, corner_a: Point, corner_b: Point, stroke: Stroke) {
        self.commands.push(DrawCommand::Rect {
            corner_a,
            corner_b,
            stroke,
        });
    }
}
