//=========================================================================
// Platform Bridge Interface
//=========================================================================
//
// Platform-to-core interface types (events and errors).
//
// Defines the contract for communication between the platform layer and
// the game session over the event queue.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::input::InputEvent;

//=== PlatformEvent =======================================================

/// Messages sent from the platform to the session queue.
#[derive(Debug, Clone)]
pub(crate) enum PlatformEvent {
    /// Input events buffered during one frame, in arrival order.
    Inputs(Vec<InputEvent>),

    /// Window close requested.
    WindowClosed,
}

//=== PlatformError =======================================================

/// Platform initialization and runtime errors.
///
/// These are fatal: without an event loop, a window and a presentation
/// surface the game cannot run.
#[derive(Debug)]
pub enum PlatformError {
    /// Event loop creation failed (OS-level issue).
    EventLoopCreation(String),

    /// Event loop execution error.
    EventLoopExecution(String),

    /// The OS refused to create the window.
    WindowCreation(String),

    /// The pixel surface could not be created, resized or presented.
    Presentation(String),
}

impl std::fmt::Display for PlatformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EventLoopCreation(e) => write!(f, "Event loop creation failed: {}", e),
            Self::EventLoopExecution(e) => write!(f, "Event loop error: {}", e),
            Self::WindowCreation(e) => write!(f, "Window creation failed: {}", e),
            Self::Presentation(e) => write!(f, "Presentation failed: {}", e),
        }
    }
}

impl std::error::Error for PlatformError {}

//=========================================================================
// Unit Tests
//=========================================================================
