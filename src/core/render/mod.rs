//=========================================================================
// Board Rendering
//=========================================================================
//
// Draws the grid and player marks onto an abstract drawing surface.
//
// Architecture:
// ```text
//   BoardRenderer ──uses──> Geometry (cell ↔ pixel)
//        │
//        └──draws──> dyn Surface  (FrameBuffer, or any other backend)
//                        ↑
//   Player::render_mark ─┘ (MarkRenderer capability)
// ```
//
// The renderer never reads pixels back; it is driven by the session:
// a delta `draw_mark` after each accepted move, a full `redraw_all`
// after a resize or restart.
//
//=========================================================================

//=== Module Declarations =================================================

mod frame_buffer;

#[cfg(test)]
pub(crate) mod testing;

//=== Public API ==========================================================

pub use frame_buffer::{FrameBuffer, Rgba};

//=== External Dependencies ===============================================

use log::{debug, trace};

//=== Internal Dependencies ===============================================

use super::board::GRID_SIZE;
use super::geometry::{Geometry, PixelPoint};
use super::player::Player;
use super::state::GameState;

//=== Surface Trait =======================================================

/// A 2D drawing target with a single stroke style.
///
/// Coordinates are surface pixels with a top-left origin. Implementations
/// clip anything falling outside `size()`.
pub trait Surface {
    /// Current `(width, height)` in pixels.
    fn size(&self) -> (u32, u32);

    /// Changes the surface dimensions. Contents are discarded.
    fn resize(&mut self, width: u32, height: u32);

    /// Fills the whole surface with the background.
    fn clear(&mut self);

    /// Fills a rectangle with the background.
    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32);

    /// Strokes a straight segment.
    fn stroke_line(&mut self, from: PixelPoint, to: PixelPoint);

    /// Strokes a circle outline.
    fn stroke_circle(&mut self, center: PixelPoint, radius: f32);
}

//=== BoardRenderer =======================================================

/// Draws the board using the current surface geometry.
#[derive(Debug, Clone)]
pub struct BoardRenderer {
    geometry: Geometry,
    inset: f32,
}

impl BoardRenderer {
    /// Creates a renderer for a `width × height` surface.
    ///
    /// `inset` is the margin kept clear around a cell's interior when it
    /// is wiped, so neighbouring grid lines survive.
    pub fn new(width: u32, height: u32, inset: f32) -> Self {
        Self {
            geometry: Geometry::new(width, height),
            inset,
        }
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Resizes `surface` and recomputes cell geometry.
    ///
    /// Absolute pixel positions change, so callers follow this with
    /// [`BoardRenderer::redraw_all`].
    pub fn resize(&mut self, surface: &mut dyn Surface, width: u32, height: u32) {
        debug!(target: "game::render", "Surface resized to {}x{}", width, height);
        surface.resize(width, height);
        self.geometry.resize(width, height);
    }

    /// Clears the surface and strokes the `N - 1` interior lines each way.
    pub fn draw_grid(&self, surface: &mut dyn Surface) {
        surface.clear();

        let width = self.geometry.width();
        let height = self.geometry.height();
        let (col_width, row_height) = self.geometry.cell_size();

        for r in 1..GRID_SIZE {
            let y = r as f32 * row_height;
            surface.stroke_line(PixelPoint::new(0.0, y), PixelPoint::new(width, y));
        }

        for c in 1..GRID_SIZE {
            let x = c as f32 * col_width;
            surface.stroke_line(PixelPoint::new(x, 0.0), PixelPoint::new(x, height));
        }
    }

    /// Wipes the interior of `(row, col)` and draws `player`'s mark there.
    pub fn draw_mark(&self, surface: &mut dyn Surface, row: usize, col: usize, player: &Player) {
        trace!(target: "game::render", "Drawing {} at ({}, {})", player.label(), row, col);

        let origin = self.geometry.cell_origin(row, col);
        let (col_width, row_height) = self.geometry.cell_size();

        let inner_width = (col_width - 2.0 * self.inset).max(0.0);
        let inner_height = (row_height - 2.0 * self.inset).max(0.0);
        surface.clear_rect(origin.x + self.inset, origin.y + self.inset, inner_width, inner_height);

        player.render_mark(surface, origin, col_width, row_height);
    }

    /// Clears, draws the grid, then every placed mark.
    pub fn redraw_all(&self, surface: &mut dyn Surface, state: &GameState) {
        self.draw_grid(surface);

        for (row, col, mark) in state.board().iter() {
            if let Some(player) = mark.player().and_then(|id| state.player(id)) {
                self.draw_mark(surface, row, col, player);
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::testing::{DrawCommand, RecordingSurface};
    use super::*;
    use crate::core::player::{CrossMark, NoughtMark, PlayerId};

    fn two_player_state() -> GameState {
        let mut state = GameState::new();
        state.register_player("X", Box::new(CrossMark)).unwrap();
        state.register_player("O", Box::new(NoughtMark)).unwrap();
        state.reset();
        state
    }

    fn lines(commands: &[DrawCommand]) -> usize {
        commands.iter().filter(|c| matches!(c, DrawCommand::Line(..))).count()
    }

    //=====================================================================
    // Grid Tests
    //=====================================================================

    #[test]
    fn grid_clears_then_strokes_interior_lines() {
        let renderer = BoardRenderer::new(300, 300, 4.0);
        let mut surface = RecordingSurface::new(300, 300);

        renderer.draw_grid(&mut surface);

        assert_eq!(surface.commands[0], DrawCommand::Clear, "Grid must start from a clear surface");
        assert_eq!(lines(&surface.commands), 2 * (GRID_SIZE - 1));
        assert!(surface.commands.contains(&DrawCommand::Line(
            PixelPoint::new(0.0, 100.0),
            PixelPoint::new(300.0, 100.0)
        )));
        assert!(surface.commands.contains(&DrawCommand::Line(
            PixelPoint::new(200.0, 0.0),
            PixelPoint::new(200.0, 300.0)
        )));
    }

    //=====================================================================
    // Mark Tests
    //=====================================================================

    #[test]
    fn mark_clears_inset_interior_first() {
        let renderer = BoardRenderer::new(300, 300, 4.0);
        let mut surface = RecordingSurface::new(300, 300);
        let state = two_player_state();
        let player = state.player(PlayerId::Second).unwrap();

        renderer.draw_mark(&mut surface, 1, 2, player);

        assert_eq!(
            surface.commands,
            vec![
                DrawCommand::ClearRect(204.0, 104.0, 92.0, 92.0),
                DrawCommand::Circle(PixelPoint::new(250.0, 150.0), 50.0),
            ]
        );
    }

    #[test]
    fn oversized_inset_clears_nothing() {
        let renderer = BoardRenderer::new(30, 30, 20.0);
        let mut surface = RecordingSurface::new(30, 30);
        let state = two_player_state();
        let player = state.player(PlayerId::First).unwrap();

        renderer.draw_mark(&mut surface, 0, 0, player);

        assert_eq!(surface.commands[0], DrawCommand::ClearRect(20.0, 20.0, 0.0, 0.0));
    }

    //=====================================================================
    // Redraw Tests
    //=====================================================================

    #[test]
    fn redraw_all_draws_grid_and_every_mark() {
        let renderer = BoardRenderer::new(300, 300, 4.0);
        let mut surface = RecordingSurface::new(300, 300);
        let mut state = two_player_state();
        state.place_mark(0, 0, PlayerId::First).unwrap();
        state.place_mark(1, 1, PlayerId::Second).unwrap();

        renderer.redraw_all(&mut surface, &state);

        let clear_rects = surface
            .commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::ClearRect(..)))
            .count();
        let circles = surface
            .commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle(..)))
            .count();

        assert_eq!(clear_rects, 2, "One wipe per placed mark");
        assert_eq!(circles, 1);
        assert_eq!(lines(&surface.commands), 2 * (GRID_SIZE - 1) + 2, "Grid plus two cross strokes");
    }

    #[test]
    fn resize_updates_surface_and_geometry() {
        let mut renderer = BoardRenderer::new(300, 300, 4.0);
        let mut surface = RecordingSurface::new(300, 300);

        renderer.resize(&mut surface, 600, 900);

        assert_eq!(surface.size(), (600, 900));
        assert_eq!(renderer.geometry().cell_size(), (200.0, 300.0));
    }
}
