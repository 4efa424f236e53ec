//=========================================================================
// Input Event Types
//
// Defines the internal representation of low-level input events.
//
// This module abstracts away platform-specific input (e.g. Winit, SDL)
// into a unified, game-friendly format consumed by the input dispatcher.
//
// Responsibilities:
// - Represent pointer, keyboard and surface events in a portable way
// - Carry the pointer position on presses, so a click is self-contained
// - Classify events as discrete (order significant) or continuous
//   (only the latest value matters)
//
// Event Flow:
// ```text
// Platform Layer (Winit)
//         ↓
//    InputEvent (this module)
//         ↓
//    InputDispatcher (pixel → cell, key → restart choice)
//         ↓
//    GameEvent (consumed by the session)
// ```
//
//=========================================================================

//=== MouseButton =========================================================

/// Physical mouse button identifier.
///
/// The `Other` variant covers side buttons, macro buttons, and any
/// non-standard inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary button (typically left).
    Left,

    /// Secondary button (typically right).
    Right,

    /// Middle button (wheel click).
    Middle,

    /// Any other button.
    Other,
}

//=== KeyCode =============================================================

/// Physical keyboard key identifier.
///
/// Only the keys the game reacts to are named; everything else maps to
/// `Unidentified` and is dropped by the platform layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    KeyN,
    KeyR,
    KeyY,

    /// Return/Enter key
    Enter,

    /// Escape key
    Escape,

    /// Spacebar
    Space,

    /// Fallback for keys not explicitly mapped by the input layer.
    Unidentified,
}

//=== InputEvent ==========================================================

/// Low-level input event from the platform layer.
///
/// Coordinates are in surface space (pixels, top-left origin).
///
/// # Event Types
///
/// - **PointerPressed/PointerReleased**: Discrete button events; presses
///   carry the cursor position at the time of the press
/// - **PointerMoved**: Continuous cursor position updates
/// - **KeyDown**: Discrete keyboard press
/// - **Resized**: Continuous surface size change
/// - **Unidentified**: Unknown/unsupported events (ignored)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Mouse button pressed at `(x, y)`.
    PointerPressed { button: MouseButton, x: f32, y: f32 },

    /// Mouse button released.
    PointerReleased { button: MouseButton },

    /// Cursor moved to a new position.
    PointerMoved { x: f32, y: f32 },

    /// Key pressed down.
    KeyDown(KeyCode),

    /// Drawing surface changed size.
    Resized { width: u32, height: u32 },

    /// Unrecognized or unsupported event.
    Unidentified,
}

impl InputEvent {
    /// Returns `true` for events where only the latest value matters.
    ///
    /// Consecutive continuous events of the same kind can be coalesced
    /// without changing behaviour.
    pub fn is_continuous(&self) -> bool {
        matches!(self, Self::PointerMoved { .. } | Self::Resized { .. })
    }

    /// Returns `true` if `self` and `other` are the same kind of event,
    /// ignoring payload.
    pub fn same_kind(&self, other: &Self) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
