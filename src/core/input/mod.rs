//=========================================================================
// Input System
//=========================================================================
//
// Platform-neutral input types and their translation into game events.
//
// Architecture:
//   Platform → InputEvent → InputDispatcher → GameEvent → GameSession
//
// The dispatcher is the boundary between raw coordinates/keys and logical
// requests; nothing past it deals with pixels.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod event;
mod dispatcher;

//=== Public API ==========================================================

pub use dispatcher::{GameEvent, InputDispatcher, RestartChoice};
pub use event::{InputEvent, KeyCode, MouseButton};
