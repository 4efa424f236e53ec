//=========================================================================
// Input Processor
//=========================================================================
//
// Converts platform-specific Winit events into game InputEvents.
//
// Architecture:
//   Winit Events → InputProcessor → InputEvent (core type) → InputBuffer
//
// Stateful cursor tracking: Winit reports button presses without a
// position, so the last CursorMoved position is cached and stamped onto
// each press. Unmapped keys and key repeats are filtered (returns None).
//
//=========================================================================

//=== External Dependencies ===============================================

use winit::{
    event::ElementState,
    event::{KeyEvent, MouseButton as WinitMouseButton},
    keyboard::{KeyCode as WinitKeyCode, PhysicalKey},
};

//=== Internal Dependencies ===============================================

use crate::core::input::{InputEvent, KeyCode, MouseButton};

//=== InputProcessor ======================================================

/// Converts Winit events to InputEvents with stateful cursor tracking.
pub(crate) struct InputProcessor {
    cursor: Option<(f32, f32)>,
}

impl InputProcessor {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new() -> Self {
        Self { cursor: None }
    }

    //--- Cursor State Management ------------------------------------------

    /// Last known cursor position in surface pixels.
    #[cfg(test)]
    pub(crate) fn cursor(&self) -> Option<(f32, f32)> {
        self.cursor
    }

    /// Forgets the cursor position (cursor left the window).
    pub(crate) fn clear_cursor(&mut self) {
        self.cursor = None;
    }

    //--- Event Processing -------------------------------------------------

    /// Converts a Winit KeyEvent to an InputEvent.
    pub(crate) fn process_key_event(&self, key_event: &KeyEvent) -> Option<InputEvent> {
        self.process_key(key_event.physical_key, key_event.state, key_event.repeat)
    }

    /// Only fresh presses of mapped keys produce an event.
    pub(crate) fn process_key(
        &self,
        physical_key: PhysicalKey,
        state: ElementState,
        repeat: bool,
    ) -> Option<InputEvent> {
        let key_code = match physical_key {
            PhysicalKey::Code(code) => KeyCode::from(code),
            _ => return None,
        };

        if matches!(key_code, KeyCode::Unidentified) || repeat {
            return None;
        }

        match state {
            ElementState::Pressed => Some(InputEvent::KeyDown(key_code)),
            ElementState::Released => None,
        }
    }

    /// Converts a Winit mouse button event to an InputEvent.
    ///
    /// A press before any cursor movement has no position and is dropped.
    pub(crate) fn process_mouse_button(
        &self,
        button: WinitMouseButton,
        state: ElementState,
    ) -> Option<InputEvent> {
        let button = MouseButton::from(button);

        match state {
            ElementState::Pressed => {
                let (x, y) = self.cursor?;
                Some(InputEvent::PointerPressed { button, x, y })
            }
            ElementState::Released => Some(InputEvent::PointerReleased { button }),
        }
    }

    /// Records the cursor position and creates a move event.
    pub(crate) fn process_mouse_move(&mut self, x: f32, y: f32) -> InputEvent {
        self.cursor = Some((x, y));
        InputEvent::PointerMoved { x, y }
    }

    /// Creates a resize event (physical pixels).
    pub(crate) fn process_resize(&self, width: u32, height: u32) -> InputEvent {
        InputEvent::Resized { width, height }
    }
}

//=========================================================================
// Winit Conversions
//=========================================================================

/// Converts Winit physical key codes to game key codes.
///
/// Only the prompt and restart keys are mapped; everything else returns
/// `KeyCode::Unidentified`.
impl From<WinitKeyCode> for KeyCode {
    fn from(code: WinitKeyCode) -> Self {
        use WinitKeyCode::*;
        match code {
            KeyN => KeyCode::KeyN,
            KeyR => KeyCode::KeyR,
            KeyY => KeyCode::KeyY,

            Enter | NumpadEnter => KeyCode::Enter,
            Escape => KeyCode::Escape,
            Space => KeyCode::Space,

            _ => KeyCode::Unidentified,
        }
    }
}

/// Converts Winit mouse buttons to game buttons.
///
/// Left/Right/Middle mapped directly; Back/Forward/Other → Other.
impl From<WinitMouseButton> for MouseButton {
    fn from(button: WinitMouseButton) -> Self {
        match button {
            WinitMouseButton::Left => MouseButton::Left,
            WinitMouseButton::Right => MouseButton::Right,
            WinitMouseButton::Middle => MouseButton::Middle,
            _ => MouseButton::Other,
        }
    }
}

//=========================================================================
// Tests
//=========================================================================
