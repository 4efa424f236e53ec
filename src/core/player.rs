//=========================================================================
// Players
//=========================================================================
//
// A player is a label, a point value and a mark-rendering capability.
//
// Point values are assigned by registration order (+1, then -1). With two
// players only a full line of one player's marks can reach magnitude N,
// which is what makes the accumulator win check exact.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::fmt;

//=== Internal Dependencies ===============================================

use super::geometry::PixelPoint;
use super::render::Surface;

//=== PlayerId ============================================================

/// Roster slot of a registered player; also fixes turn order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerId {
    First,
    Second,
}

impl PlayerId {
    /// Number of roster slots.
    pub const COUNT: usize = 2;

    pub fn index(self) -> usize {
        match self {
            PlayerId::First => 0,
            PlayerId::Second => 1,
        }
    }

    /// Slot whose turn it is after `turn` completed turns (round-robin).
    pub fn for_turn(turn: u32) -> Self {
        if turn as usize % Self::COUNT == 0 {
            PlayerId::First
        } else {
            PlayerId::Second
        }
    }

    /// Point value carried by this slot.
    pub fn point_value(self) -> PointValue {
        match self {
            PlayerId::First => PointValue::PLUS,
            PlayerId::Second => PointValue::MINUS,
        }
    }
}

//=== PointValue ==========================================================

/// Signed contribution of one mark to each line accumulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PointValue(i32);

impl PointValue {
    pub const PLUS: PointValue = PointValue(1);
    pub const MINUS: PointValue = PointValue(-1);

    pub fn get(self) -> i32 {
        self.0
    }
}

//=== MarkRenderer ========================================================

/// Draws a player's mark into a cell rectangle.
///
/// `origin` is the cell's top-left pixel; `width` and `height` its size.
pub trait MarkRenderer: Send {
    fn render(&self, surface: &mut dyn Surface, origin: PixelPoint, width: f32, height: f32);
}

/// Two diagonals spanning the cell.
#[derive(Debug, Clone, Copy, Default)]
pub struct CrossMark;

impl MarkRenderer for CrossMark {
    fn render(&self, surface: &mut dyn Surface, origin: PixelPoint, width: f32, height: f32) {
        let PixelPoint { x, y } = origin;
        surface.stroke_line(PixelPoint::new(x, y), PixelPoint::new(x + width, y + height));
        surface.stroke_line(PixelPoint::new(x + width, y), PixelPoint::new(x, y + height));
    }
}

/// Circle centred in the cell, touching its shorter side.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoughtMark;

impl MarkRenderer for NoughtMark {
    fn render(&self, surface: &mut dyn Surface, origin: PixelPoint, width: f32, height: f32) {
        let x_radius = width / 2.0;
        let y_radius = height / 2.0;
        let center = PixelPoint::new(origin.x + x_radius, origin.y + y_radius);
        surface.stroke_circle(center, x_radius.min(y_radius));
    }
}

//=== Player ==============================================================

/// A registered participant.
pub struct Player {
    label: String,
    points: PointValue,
    renderer: Box<dyn MarkRenderer>,
}

impl Player {
    /// Creates a player for roster slot `id`.
    pub(crate) fn new(label: impl Into<String>, id: PlayerId, renderer: Box<dyn MarkRenderer>) -> Self {
        Self {
            label: label.into(),
            points: id.point_value(),
            renderer,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn point_value(&self) -> PointValue {
        self.points
    }

    /// Draws this player's mark into the given cell rectangle.
    pub fn render_mark(&self, surface: &mut dyn Surface, origin: PixelPoint, width: f32, height: f32) {
        self.renderer.render(surface, origin, width, height);
    }
}

impl fmt::Debug for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Player")
            .field("label", &self.label)
            .field("points", &self.points)
            .finish_non_exhaustive()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
