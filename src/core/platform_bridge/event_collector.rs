//=========================================================================
// Event Collector
//=========================================================================
//
// Queue consumer: drains platform events with bounded polling and
// shutdown detection.
//
// Architecture:
//   Receiver<PlatformEvent> → collect_frame() → events (arrival order) → TickControl
//
// Bounded polling prevents a flood of input from stalling a frame.
// The collector never blocks; an empty queue simply yields no events.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{Receiver, TryRecvError};
use log::warn;

//=== Internal Dependencies ===============================================

use super::PlatformEvent;
use crate::core::input::InputEvent;

//=== TickControl =========================================================

/// Update loop control signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TickControl {
    Continue,
    Exit,
}

//=== EventCollector ======================================================

/// Collects queued platform events into a flat, ordered list per frame.
pub(crate) struct EventCollector {
    receiver: Receiver<PlatformEvent>,
    events: Vec<InputEvent>,
}

impl EventCollector {
    const MAX_BATCHES_PER_FRAME: usize = 100;

    pub(crate) fn new(receiver: Receiver<PlatformEvent>) -> Self {
        Self {
            receiver,
            events: Vec::with_capacity(16),
        }
    }

    /// Collects pending platform events (bounded to prevent starvation).
    ///
    /// Events left in the queue past the bound are picked up next frame,
    /// still in order.
    pub(crate) fn collect_frame(&mut self) -> TickControl {
        self.events.clear();
        let mut drained = 0;

        while drained < Self::MAX_BATCHES_PER_FRAME {
            match self.receiver.try_recv() {
                Ok(PlatformEvent::Inputs(batch)) => {
                    self.events.extend(batch);
                    drained += 1;
                }
                Ok(PlatformEvent::WindowClosed) => return TickControl::Exit,
                Err(TryRecvError::Disconnected) => return TickControl::Exit,
                Err(TryRecvError::Empty) => break,
            }
        }

        if drained >= Self::MAX_BATCHES_PER_FRAME {
            warn!(target: "platform::input", "Event queue backlog: drained {} batches this frame", drained);
        }

        TickControl::Continue
    }

    /// Returns collected events for this frame.
    #[cfg(test)]
    pub(crate) fn events(&self) -> &[InputEvent] {
        &self.events
    }

    /// Takes ownership of collected events, leaving an empty vec.
    pub(crate) fn take_events(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::{KeyCode, MouseButton};
    use crossbeam_channel::unbounded;

    fn press(x: f32, y: f32) -> InputEvent {
        InputEvent::PointerPressed {
            button: MouseButton::Left,
            x,
            y,
        }
    }

    #[test]
    fn collect_handles_empty_queue() {
        let (_tx, rx) = unbounded::<PlatformEvent>();
        let mut collector = EventCollector::new(rx);

        let result = collector.collect_frame();

        assert_eq!(result, TickControl::Continue);
        assert!(collector.events().is_empty());
    }

    #[test]
    fn collect_preserves_arrival_order_across_batches() {
        let (tx, rx) = unbounded();
        let mut collector = EventCollector::new(rx);

        tx.send(PlatformEvent::Inputs(vec![press(1.0, 1.0), InputEvent::KeyDown(KeyCode::KeyY)]))
            .unwrap();
        tx.send(PlatformEvent::Inputs(vec![InputEvent::Resized { width: 10, height: 10 }]))
            .unwrap();

        let result = collector.collect_frame();

        assert_eq!(result, TickControl::Continue);
        assert_eq!(
            collector.events(),
            &[
                press(1.0, 1.0),
                InputEvent::KeyDown(KeyCode::KeyY),
                InputEvent::Resized { width: 10, height: 10 },
            ]
        );
    }

    #[test]
    fn collect_returns_exit_on_window_closed() {
        let (tx, rx) = unbounded();
        let mut collector = EventCollector::new(rx);

        tx.send(PlatformEvent::WindowClosed).unwrap();

        assert_eq!(collector.collect_frame(), TickControl::Exit);
    }

    #[test]
    fn collect_clears_previous_events() {
        let (tx, rx) = unbounded();
        let mut collector = EventCollector::new(rx);

        tx.send(PlatformEvent::Inputs(vec![press(5.0, 5.0)])).unwrap();
        collector.collect_frame();
        assert_eq!(collector.events().len(), 1);

        tx.send(PlatformEvent::Inputs(vec![])).unwrap();
        collector.collect_frame();
        assert!(collector.events().is_empty());
    }

    #[test]
    fn collect_returns_exit_on_disconnect() {
        let (tx, rx) = unbounded::<PlatformEvent>();
        let mut collector = EventCollector::new(rx);

        drop(tx);

        assert_eq!(collector.collect_frame(), TickControl::Exit);
    }

    #[test]
    fn backlog_is_bounded_and_carried_over() {
        let (tx, rx) = unbounded();
        let mut collector = EventCollector::new(rx);

        for i in 0..(EventCollector::MAX_BATCHES_PER_FRAME + 5) {
            tx.send(PlatformEvent::Inputs(vec![press(i as f32, 0.0)])).unwrap();
        }

        collector.collect_frame();
        assert_eq!(collector.events().len(), EventCollector::MAX_BATCHES_PER_FRAME);

        collector.collect_frame();
        assert_eq!(collector.events().len(), 5, "Remaining batches arrive next frame");
        assert_eq!(
            collector.events()[0],
            press(EventCollector::MAX_BATCHES_PER_FRAME as f32, 0.0)
        );
    }

    #[test]
    fn take_events_empties_collector() {
        let (tx, rx) = unbounded();
        let mut collector = EventCollector::new(rx);

        tx.send(PlatformEvent::Inputs(vec![press(0.0, 0.0)])).unwrap();
        collector.collect_frame();

        let events = collector.take_events();
        assert_eq!(events.len(), 1);
        assert!(collector.events().is_empty());
    }
}
