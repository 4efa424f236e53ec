//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use gridmark::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Game entry point
pub use crate::game::{Game, GameBuilder};

// Rules and state
pub use crate::core::controller::{ControllerError, Outcome, TurnController, TurnPhase};
pub use crate::core::state::{GameState, MoveError};
pub use crate::core::board::{Line, Mark, GRID_SIZE};
pub use crate::core::player::{MarkRenderer, PlayerId};

// Session and drawing
pub use crate::core::session::GameSession;
pub use crate::core::render::{FrameBuffer, Rgba, Surface};

// Input
pub use crate::core::input::{GameEvent, InputEvent, KeyCode, MouseButton};
