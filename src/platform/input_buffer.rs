//=========================================================================
// Input Buffer
//
// Collects input events for one frame, in arrival order, as a transient
// aggregator between the InputProcessor and the event queue.
//
// Responsibilities:
// - Store incoming platform events per frame
// - Keep discrete inputs (presses, keys) exactly as they arrived
// - Coalesce runs of continuous inputs (cursor moves, resizes) so only
//   the latest value of a run is kept
// - Hand the whole frame over via `drain()`
//
// Notes:
// Coalescing only merges *consecutive* events of the same kind, so a
// resize followed by a click followed by another resize still reaches
// the session in that order.
//=========================================================================

//=== Internal Modules ====================================================

use crate::core::input::InputEvent;

//=== InputBuffer Struct ==================================================

/// Ordered event store for one frame of input.
pub(crate) struct InputBuffer {
    events: Vec<InputEvent>,
}

impl InputBuffer {
    //--- Construction -----------------------------------------------------
    //
    // Preallocates for typical per-frame volume.
    //
    pub(crate) fn new() -> Self {
        const BASE_CAPACITY: usize = 32;

        Self {
            events: Vec::with_capacity(BASE_CAPACITY),
        }
    }

    //--- Event Handling --------------------------------------------------
    //
    // Appends an event. A continuous event replaces the previous one when
    // that one is the same kind.
    //
    pub(crate) fn push(&mut self, event: InputEvent) {
        if event.is_continuous() {
            if let Some(last) = self.events.last_mut() {
                if last.same_kind(&event) {
                    *last = event;
                    return;
                }
            }
        }
        self.events.push(event);
    }

    //--- Drain ------------------------------------------------------------
    //
    // Returns this frame's events and clears the buffer.
    // Returns None when nothing was buffered, so empty frames are not sent.
    //
    pub(crate) fn drain(&mut self) -> Option<Vec<InputEvent>> {
        if self.events.is_empty() {
            return None;
        }
        Some(std::mem::take(&mut self.events))
    }

    //--- Utilities --------------------------------------------------------
    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.events.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
