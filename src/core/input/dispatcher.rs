//=========================================================================
// Input Dispatcher
//=========================================================================
//
// Translates raw input events into typed game events.
//
// Architecture:
//   InputEvent ──translate(geometry)──> Option<GameEvent>
//
//   PointerPressed(Left, x, y) → Geometry::cell_at → CellSelected
//   Resized(w, h)              → SurfaceResized
//   KeyDown(bound key)         → RestartConfirmed / RestartDeclined
//
// Pixels that land off the grid are dropped here, so the turn controller
// never sees an out-of-range index coming from the pointer.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

use log::{debug, trace};

//=== Internal Dependencies ===============================================

use super::event::{InputEvent, KeyCode, MouseButton};
use crate::core::geometry::Geometry;

//=== GameEvent ===========================================================

/// Typed request for the game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameEvent {
    /// The player picked a cell.
    CellSelected { row: usize, col: usize },

    /// The drawing surface has new dimensions.
    SurfaceResized { width: u32, height: u32 },

    /// Affirmative answer to the restart prompt.
    RestartConfirmed,

    /// Negative answer to the restart prompt.
    RestartDeclined,
}

//=== RestartChoice =======================================================

/// Answer a key gives to the restart prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RestartChoice {
    Confirm,
    Decline,
}

//=== InputDispatcher =====================================================

/// Maps input events to game events via pointer geometry and key bindings.
#[derive(Debug, Clone)]
pub struct InputDispatcher {
    /// Key bindings: key → prompt answer
    key_bindings: HashMap<KeyCode, RestartChoice>,

    /// Button that selects cells
    select_button: MouseButton,
}

impl InputDispatcher {
    /// Creates a dispatcher with the default bindings:
    /// left click selects, `Y`/`Enter` confirm, `N`/`Escape` decline.
    pub fn new() -> Self {
        let mut dispatcher = Self {
            key_bindings: HashMap::new(),
            select_button: MouseButton::Left,
        };

        dispatcher.bind_key(KeyCode::KeyY, RestartChoice::Confirm);
        dispatcher.bind_key(KeyCode::Enter, RestartChoice::Confirm);
        dispatcher.bind_key(KeyCode::KeyN, RestartChoice::Decline);
        dispatcher.bind_key(KeyCode::Escape, RestartChoice::Decline);
        dispatcher
    }

    //--- Binding API ------------------------------------------------------

    /// Binds a key to a restart prompt answer, replacing any previous one.
    pub fn bind_key(&mut self, key: KeyCode, choice: RestartChoice) {
        self.key_bindings.insert(key, choice);
    }

    /// Removes a key binding.
    pub fn unbind_key(&mut self, key: KeyCode) {
        self.key_bindings.remove(&key);
    }

    /// Changes which mouse button selects cells.
    pub fn set_select_button(&mut self, button: MouseButton) {
        self.select_button = button;
    }

    //--- Translation ------------------------------------------------------

    /// Translates one input event using the current surface geometry.
    ///
    /// Returns `None` for events with no game meaning, including clicks
    /// that land outside the grid.
    pub fn translate(&self, event: &InputEvent, geometry: &Geometry) -> Option<GameEvent> {
        match *event {
            InputEvent::PointerPressed { button, x, y } if button == self.select_button => {
                match geometry.cell_at(x, y) {
                    Some(cell) => Some(GameEvent::CellSelected {
                        row: cell.row,
                        col: cell.col,
                    }),
                    None => {
                        debug!(target: "game", "Click at ({}, {}) is off the grid, ignored", x, y);
                        None
                    }
                }
            }

            InputEvent::Resized { width, height } => {
                Some(GameEvent::SurfaceResized { width, height })
            }

            InputEvent::KeyDown(key) => match self.key_bindings.get(&key)? {
                RestartChoice::Confirm => Some(GameEvent::RestartConfirmed),
                RestartChoice::Decline => Some(GameEvent::RestartDeclined),
            },

            _ => {
                trace!(target: "game", "Input {:?} has no game binding", event);
                None
            }
        }
    }
}

impl Default for InputDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn click(x: f32, y: f32) -> InputEvent {
        InputEvent::PointerPressed {
            button: MouseButton::Left,
            x,
            y,
        }
    }

    //=====================================================================
    // Pointer Tests
    //=====================================================================

    #[test]
    fn click_maps_to_cell() {
        let dispatcher = InputDispatcher::new();
        let geometry = Geometry::new(300, 300);

        assert_eq!(
            dispatcher.translate(&click(250.0, 20.0), &geometry),
            Some(GameEvent::CellSelected { row: 0, col: 2 })
        );
    }

    #[test]
    fn click_off_grid_is_dropped() {
        let dispatcher = InputDispatcher::new();
        let geometry = Geometry::new(300, 300);

        assert_eq!(dispatcher.translate(&click(-5.0, 20.0), &geometry), None);
        assert_eq!(dispatcher.translate(&click(20.0, 301.0), &geometry), None);
    }

    #[test]
    fn other_buttons_and_releases_are_ignored() {
        let dispatcher = InputDispatcher::new();
        let geometry = Geometry::new(300, 300);

        let right = InputEvent::PointerPressed {
            button: MouseButton::Right,
            x: 10.0,
            y: 10.0,
        };
        let release = InputEvent::PointerReleased {
            button: MouseButton::Left,
        };

        assert_eq!(dispatcher.translate(&right, &geometry), None);
        assert_eq!(dispatcher.translate(&release, &geometry), None);
        assert_eq!(
            dispatcher.translate(&InputEvent::PointerMoved { x: 1.0, y: 1.0 }, &geometry),
            None
        );
    }

    #[test]
    fn select_button_is_configurable() {
        let mut dispatcher = InputDispatcher::new();
        dispatcher.set_select_button(MouseButton::Right);
        let geometry = Geometry::new(300, 300);

        let right = InputEvent::PointerPressed {
            button: MouseButton::Right,
            x: 150.0,
            y: 150.0,
        };

        assert_eq!(
            dispatcher.translate(&right, &geometry),
            Some(GameEvent::CellSelected { row: 1, col: 1 })
        );
        assert_eq!(dispatcher.translate(&click(150.0, 150.0), &geometry), None);
    }

    #[test]
    fn geometry_decides_the_cell() {
        let dispatcher = InputDispatcher::new();
        let event = click(150.0, 150.0);

        assert_eq!(
            dispatcher.translate(&event, &Geometry::new(300, 300)),
            Some(GameEvent::CellSelected { row: 1, col: 1 })
        );
        assert_eq!(
            dispatcher.translate(&event, &Geometry::new(900, 900)),
            Some(GameEvent::CellSelected { row: 0, col: 0 })
        );
    }

    //=====================================================================
    // Resize & Key Tests
    //=====================================================================

    #[test]
    fn resize_passes_through() {
        let dispatcher = InputDispatcher::new();
        let geometry = Geometry::new(300, 300);

        assert_eq!(
            dispatcher.translate(&InputEvent::Resized { width: 640, height: 480 }, &geometry),
            Some(GameEvent::SurfaceResized { width: 640, height: 480 })
        );
    }

    #[test]
    fn default_prompt_keys() {
        let dispatcher = InputDispatcher::new();
        let geometry = Geometry::new(300, 300);
        let key = |k| dispatcher.translate(&InputEvent::KeyDown(k), &geometry);

        assert_eq!(key(KeyCode::KeyY), Some(GameEvent::RestartConfirmed));
        assert_eq!(key(KeyCode::Enter), Some(GameEvent::RestartConfirmed));
        assert_eq!(key(KeyCode::KeyN), Some(GameEvent::RestartDeclined));
        assert_eq!(key(KeyCode::Escape), Some(GameEvent::RestartDeclined));
        assert_eq!(key(KeyCode::Space), None);
    }

    #[test]
    fn rebinding_keys() {
        let mut dispatcher = InputDispatcher::new();
        let geometry = Geometry::new(300, 300);

        dispatcher.bind_key(KeyCode::KeyR, RestartChoice::Confirm);
        dispatcher.unbind_key(KeyCode::Enter);

        assert_eq!(
            dispatcher.translate(&InputEvent::KeyDown(KeyCode::KeyR), &geometry),
            Some(GameEvent::RestartConfirmed)
        );
        assert_eq!(dispatcher.translate(&InputEvent::KeyDown(KeyCode::Enter), &geometry), None);
    }
}
