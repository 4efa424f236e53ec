//=========================================================================
// Recording Surface (test support)
//=========================================================================
//
// A `Surface` that records draw calls instead of rasterizing them, so
// renderer tests can assert on exact geometry.
//
//=========================================================================

use super::Surface;
use crate::core::geometry::PixelPoint;

/// A single recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum DrawCommand {
    Clear,
    ClearRect(f32, f32, f32, f32),
    Line(PixelPoint, PixelPoint),
    Circle(PixelPoint, f32),
}

/// Surface that appends every call to `commands`.
#[derive(Debug, Default)]
pub(crate) struct RecordingSurface {
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub(crate) fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.commands.clear();
    }

    fn clear(&mut self) {
        self.commands.push(DrawCommand::Clear);
    }

    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.commands.push(DrawCommand::ClearRect(x, y, width, height));
    }

    fn stroke_line(&mut self, from: PixelPoint, to: PixelPoint) {
        self.commands.push(DrawCommand::Line(from, to));
    }

    fn stroke_circle(&mut self, center: PixelPoint, radius: f32) {
        self.commands.push(DrawCommand::Circle(center, radius));
    }
}
