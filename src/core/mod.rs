//=========================================================================
// Core Systems
//
// Everything that does not depend on a windowing backend: board and
// scoring, turn control, geometry, drawing, input translation and the
// session that ties them together.
//
// Responsibilities:
// - Hold the state of one game and enforce its rules
// - Convert surface coordinates and keys into game requests
// - Describe drawing in terms of the `Surface` capability only
//
// Notes:
// The platform layer talks to this module exclusively through the event
// queue (`platform_bridge`) and the `Surface` it presents. Core code can
// be driven entirely from tests without a window.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod board;
pub mod controller;
pub mod geometry;
pub mod input;
pub mod platform_bridge;
pub mod player;
pub mod render;
pub mod session;
pub mod state;

//=== Public API ==========================================================

pub use board::{Board, Line, Mark, ScoreAccumulators, GRID_SIZE};
pub use controller::{ControllerError, Outcome, Placement, TurnController, TurnPhase};
pub use geometry::{CellIndex, Geometry, PixelPoint};
pub use input::{GameEvent, InputDispatcher, InputEvent, KeyCode, MouseButton, RestartChoice};
pub use platform_bridge::PlatformError;
pub use player::{CrossMark, MarkRenderer, NoughtMark, Player, PlayerId, PointValue};
pub use render::{BoardRenderer, FrameBuffer, Rgba, Surface};
pub use session::GameSession;
pub use state::{GameState, MoveError, RegisterError};
