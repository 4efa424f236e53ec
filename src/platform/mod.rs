//=========================================================================
// Platform Subsystem
//
// Bridges Winit (OS-level events) with the game session via the event
// queue, and presents the session's frame buffer through `pixels`.
//
// Architecture:
// ```text
//  Main Thread:
//  ┌─────────────────────────────────────────────────────────────┐
//  │  Winit Event Loop                                           │
//  │   ↓                                                         │
//  │  InputProcessor (converts Winit, tracks cursor)             │
//  │   ↓                                                         │
//  │  InputBuffer (ordered, continuous events coalesced)         │
//  │   ↓                                                         │
//  │  RedrawRequested                                            │
//  │   ├─ flush ──> Channel ──> EventCollector ──> GameSession   │
//  │   └─ present: FrameBuffer ──copy──> Pixels ──> window       │
//  └─────────────────────────────────────────────────────────────┘
//
//  Frame Boundary: RedrawRequested
//    → All buffered input sent as one batch
//    → Session handles every event in arrival order
//    → Frame presented, window title updated
//    → Empty buffers NOT sent
// ```
//
// Key Design Decisions:
// - **RedrawRequested = frame boundary**: Batches all input atomically,
//   ensuring deterministic order even with high event rates
// - **Single thread**: The session is drained on the main thread right
//   after each flush, so the queue never holds more than a frame or two
// - **Graceful channel overflow**: A full or disconnected queue drops
//   the batch with a warning instead of blocking the event loop
// - **Main thread requirement**: Winit mandates main thread on macOS/iOS,
//   so this runs on the thread that called `Game::run()`
//
// Responsibilities:
// - Create and manage the OS window and pixel surface
// - Convert Winit types → core InputEvents
// - Buffer input until frame boundary
// - Feed the session and present its frame
//
//=========================================================================

//=== Submodules ==========================================================

mod input_buffer;
mod input_processor;

//=== External Crates =====================================================

use std::sync::Arc;

use crossbeam_channel::{Receiver, Sender, TrySendError};
use log::*;
use pixels::{Pixels, SurfaceTexture};
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowAttributes},
};

//=== Internal Imports ====================================================

use crate::core::platform_bridge::{EventCollector, PlatformError, PlatformEvent, TickControl};
use crate::core::render::{FrameBuffer, Surface};
use crate::core::session::GameSession;
use input_buffer::InputBuffer;
use input_processor::InputProcessor;

//=== Platform ============================================================

/// Window manager, input aggregator and frame presenter.
///
/// Runs on the main thread (Winit requirement on macOS/iOS).
///
/// # Lifecycle
///
/// 1. **Construction**: `Platform::new(...)` - initializes subsystems
/// 2. **Execution**: `platform.run()` - runs the event loop until exit
/// 3. **Event processing**: Winit calls `ApplicationHandler` methods
/// 4. **Shutdown**: User closes window → sends `WindowClosed` → exits
///
/// # Fields
///
/// - `window`/`pixels`: Created lazily in `resumed()` (mobile compatibility)
/// - `buffer`: Accumulates events until `RedrawRequested`
/// - `event_sender`/`collector`: Both ends of the event queue
/// - `session`: The game being played and its frame buffer
pub(crate) struct Platform {
    /// Window title prefix; the session status is appended.
    title: String,

    /// OS window handle (None until `resumed()` called).
    window: Option<Arc<Window>>,

    /// Presentation surface bound to `window`.
    pixels: Option<Pixels<'static>>,

    /// Buffers input until frame boundary.
    buffer: InputBuffer,

    /// Producer end of the event queue.
    event_sender: Sender<PlatformEvent>,

    /// Consumer end of the event queue.
    collector: EventCollector,

    /// Converts Winit events to core InputEvents.
    input_processor: InputProcessor,

    session: GameSession<FrameBuffer>,

    /// Last title pushed to the window, to avoid redundant updates.
    shown_title: String,

    /// First fatal error seen inside the event loop.
    fatal: Option<PlatformError>,
}

impl Platform {
    //--- Construction -----------------------------------------------------

    /// Creates a new platform around both queue ends and a session.
    ///
    /// Does not create the window yet - that happens lazily in `resumed()`.
    pub(crate) fn new(
        title: impl Into<String>,
        event_sender: Sender<PlatformEvent>,
        event_receiver: Receiver<PlatformEvent>,
        session: GameSession<FrameBuffer>,
    ) -> Self {
        info!(target: "platform", "Platform subsystem initialized");
        Self {
            title: title.into(),
            window: None,
            pixels: None,
            buffer: InputBuffer::new(),
            event_sender,
            collector: EventCollector::new(event_receiver),
            input_processor: InputProcessor::new(),
            session,
            shown_title: String::new(),
            fatal: None,
        }
    }

    //--- Execution --------------------------------------------------------

    /// Runs the event loop until the window is closed.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if the event loop cannot start, or the
    /// first fatal error (window or presentation failure) that ended it.
    ///
    /// # Panics
    ///
    /// Panics if called off the main thread (macOS/iOS Winit requirement).
    pub(crate) fn run(mut self) -> Result<(), PlatformError> {
        debug!(target: "platform", "Starting Winit event loop");

        let event_loop =
            EventLoop::new().map_err(|e| PlatformError::EventLoopCreation(e.to_string()))?;

        event_loop
            .run_app(&mut self)
            .map_err(|e| PlatformError::EventLoopExecution(e.to_string()))?;

        match self.fatal.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    //--- Internal Helpers -------------------------------------------------

    /// Flushes buffered input events onto the queue.
    ///
    /// # Error Handling
    ///
    /// If the queue is full or disconnected, logs a warning and drops the
    /// batch. Blocking here would stall the only thread that drains it.
    fn flush_input_buffer(&mut self) {
        if let Some(events) = self.buffer.drain() {
            let count = events.len();
            trace!(target: "platform::input", "Flushing {} events", count);

            match self.event_sender.try_send(PlatformEvent::Inputs(events)) {
                Ok(()) => {}
                Err(TrySendError::Full(_)) => {
                    warn!(target: "platform::input", "Event queue full, dropping {} events", count);
                }
                Err(TrySendError::Disconnected(_)) => {
                    warn!(target: "platform::input", "Channel disconnected, dropping {} events", count);
                }
            }
        }
    }

    /// Drains the queue into the session, one event at a time in order.
    fn pump_session(&mut self) -> TickControl {
        if let TickControl::Exit = self.collector.collect_frame() {
            info!(target: "platform", "Event queue closed, stopping session");
            return TickControl::Exit;
        }

        for event in self.collector.take_events() {
            if let Err(e) = self.session.handle_input(&event) {
                debug!(target: "game", "Input {:?} refused: {}", event, e);
            }
        }

        TickControl::Continue
    }

    /// Title for the window: configured prefix plus session status.
    fn window_title(&self) -> String {
        format!("{} - {}", self.title, self.session.status_line())
    }

    /// Copies the session frame into the pixel surface and presents it.
    fn present(&mut self) -> Result<(), PlatformError> {
        let title = self.window_title();
        if let Some(window) = &self.window {
            if title != self.shown_title {
                window.set_title(&title);
                self.shown_title = title;
            }
        }

        let Some(pixels) = self.pixels.as_mut() else {
            return Ok(());
        };

        let source = self.session.surface().frame();
        let target = pixels.frame_mut();

        // Sizes differ for the frame between a window resize and the
        // session handling it; keep the previous image until then.
        if source.len() == target.len() {
            target.copy_from_slice(source);
        }

        pixels
            .render()
            .map_err(|e| PlatformError::Presentation(e.to_string()))
    }

    fn resize_pixels(&mut self, size: PhysicalSize<u32>) -> Result<(), PlatformError> {
        if size.width == 0 || size.height == 0 {
            return Ok(());
        }

        if let Some(pixels) = self.pixels.as_mut() {
            pixels
                .resize_surface(size.width, size.height)
                .map_err(|e| PlatformError::Presentation(e.to_string()))?;
            pixels
                .resize_buffer(size.width, size.height)
                .map_err(|e| PlatformError::Presentation(e.to_string()))?;
        }
        Ok(())
    }

    /// Records a fatal error and stops the event loop.
    fn fail(&mut self, event_loop: &ActiveEventLoop, error: PlatformError) {
        error!(target: "platform", "{}", error);
        if self.fatal.is_none() {
            self.fatal = Some(error);
        }
        let _ = self.event_sender.try_send(PlatformEvent::WindowClosed);
        event_loop.exit();
    }

    fn create_surface(&mut self, event_loop: &ActiveEventLoop) -> Result<(), PlatformError> {
        let (width, height) = self.session.surface().size();

        let attrs = WindowAttributes::default()
            .with_title(self.window_title())
            .with_inner_size(PhysicalSize::new(width, height));

        let window = event_loop
            .create_window(attrs)
            .map(Arc::new)
            .map_err(|e| PlatformError::WindowCreation(e.to_string()))?;

        let size = window.inner_size();
        info!(
            target: "platform",
            "Window created: {}x{} @ {}x DPI",
            size.width,
            size.height,
            window.scale_factor()
        );

        let texture = SurfaceTexture::new(size.width, size.height, Arc::clone(&window));
        let pixels = Pixels::new(size.width, size.height, texture)
            .map_err(|e| PlatformError::Presentation(e.to_string()))?;

        // The OS may not honour the requested size exactly.
        if (size.width, size.height) != (width, height) {
            self.buffer
                .push(self.input_processor.process_resize(size.width, size.height));
        }

        window.request_redraw();
        self.window = Some(window);
        self.pixels = Some(pixels);
        Ok(())
    }

    //--- Test Accessors ---------------------------------------------------

    #[cfg(test)]
    pub(crate) fn window(&self) -> Option<&Window> {
        self.window.as_deref()
    }
}

//=== Winit Integration ===================================================

impl ApplicationHandler for Platform {
    /// Called when app becomes active (startup or mobile resume).
    ///
    /// Creates the window if it doesn't exist yet.
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Window already exists (mobile resume?)");
            return;
        }

        if let Err(e) = self.create_surface(event_loop) {
            self.fail(event_loop, e);
        }
    }

    /// Handles per-window events.
    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        match &event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                let _ = self.event_sender.try_send(PlatformEvent::WindowClosed);
                event_loop.exit();
            }

            WindowEvent::CursorMoved { position, .. } => {
                let event = self
                    .input_processor
                    .process_mouse_move(position.x as f32, position.y as f32);
                self.buffer.push(event);
            }

            WindowEvent::CursorLeft { .. } => {
                self.input_processor.clear_cursor();
            }

            WindowEvent::KeyboardInput { event: key_event, .. } => {
                if let Some(event) = self.input_processor.process_key_event(key_event) {
                    self.buffer.push(event);
                } else {
                    trace!(target: "platform::input", "Unmapped key ignored");
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                if let Some(event) = self.input_processor.process_mouse_button(*button, *state) {
                    self.buffer.push(event);
                }
            }

            WindowEvent::Resized(size) => {
                debug!(target: "platform", "Window resized to {}x{}", size.width, size.height);
                if let Err(e) = self.resize_pixels(*size) {
                    self.fail(event_loop, e);
                    return;
                }
                self.buffer
                    .push(self.input_processor.process_resize(size.width, size.height));

                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            WindowEvent::RedrawRequested => {
                // Frame boundary: flush input, let the session catch up
                self.flush_input_buffer();

                if let TickControl::Exit = self.pump_session() {
                    event_loop.exit();
                    return;
                }

                if let Err(e) = self.present() {
                    self.fail(event_loop, e);
                }
            }

            _ => {
                // Ignore: Focused, ScaleFactorChanged, etc.
            }
        }
    }

    /// Redraws only when input arrived; the board is static otherwise.
    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if self.buffer.is_empty() {
            return;
        }
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
