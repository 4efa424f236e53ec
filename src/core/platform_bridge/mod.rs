//=========================================================================
// Platform Bridge
//=========================================================================
//
// Bridges the platform layer (winit/SDL/etc.) with the game session.
//
// This module defines the contract between platform implementations and
// game logic, so a platform backend can be swapped without touching the
// session, controller or renderer.
//
// Components:
// - `interface`: Event types and error definitions (the contract)
// - `event_collector`: Session-side draining of the event queue
//
//=========================================================================

//=== Module Declarations =================================================

pub(crate) mod event_collector;
pub(crate) mod interface;

//=== Internal API ========================================================

pub(crate) use event_collector::{EventCollector, TickControl};
pub(crate) use interface::PlatformEvent;
pub use interface::PlatformError;
