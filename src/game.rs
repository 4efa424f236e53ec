//=========================================================================
// Gridmark Game
//
// Main entry point: configuration and runtime for one windowed game.
//
// Architecture:
// ```text
//     GameBuilder  ──build()──>  Game  ──run()──>  [Event Loop]
//         │                        │
//         ├─ with_title()          ├─ creates the event queue
//         ├─ with_window_size()    ├─ builds session + frame buffer
//         ├─ with_channel_capacity()  runs platform
//         ├─ with_mark_inset()     └─ blocks until exit
//         └─ with_player_labels()
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{bounded, Receiver, Sender};
use log::info;

//=== Internal Dependencies ===============================================

use crate::core::controller::TurnController;
use crate::core::platform_bridge::{PlatformError, PlatformEvent};
use crate::core::render::{FrameBuffer, Rgba};
use crate::core::session::GameSession;
use crate::platform::Platform;

//=== GameBuilder =========================================================

/// Builder for configuring and constructing a [`Game`].
///
/// # Default Values
///
/// - **Title**: `"Gridmark"`
/// - **Window size**: 600 × 600 pixels
/// - **Channel capacity**: 128 batches
/// - **Mark inset**: 4.0 pixels
/// - **Player labels**: `"X"` (first, crosses) and `"O"` (second, noughts)
///
/// # Examples
///
/// Simple usage with defaults:
/// ```no_run
/// use gridmark::GameBuilder;
///
/// GameBuilder::new().build().run().unwrap();
/// ```
///
/// Custom configuration:
/// ```no_run
/// use gridmark::GameBuilder;
///
/// GameBuilder::new()
///     .with_title("Noughts and Crosses")
///     .with_window_size(900, 900)
///     .with_player_labels("Alice", "Bob")
///     .build()
///     .run()
///     .unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct GameBuilder {
    title: String,
    width: u32,
    height: u32,
    channel_capacity: usize,
    mark_inset: f32,
    labels: (String, String),
}

impl GameBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            title: "Gridmark".to_string(),
            width: 600,
            height: 600,
            channel_capacity: 128,
            mark_inset: 4.0,
            labels: ("X".to_string(), "O".to_string()),
        }
    }

    /// Sets the window title prefix. The game status is shown after it.
    ///
    /// Default: `"Gridmark"`
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the initial window size in physical pixels.
    ///
    /// Default: 600 × 600
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn with_window_size(mut self, width: u32, height: u32) -> Self {
        assert!(
            width > 0 && height > 0,
            "Window size must be positive, got {}x{}",
            width,
            height
        );
        self.width = width;
        self.height = height;
        self
    }

    /// Sets the queue capacity for platform → session communication.
    ///
    /// One batch is queued per frame and drained right after, so the
    /// default leaves plenty of headroom. Batches that do not fit are
    /// dropped with a warning.
    ///
    /// Default: 128
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.channel_capacity = capacity;
        self
    }

    /// Sets the margin kept clear around a cell when a mark is drawn, so
    /// the grid lines bordering it survive.
    ///
    /// Default: 4.0
    ///
    /// # Panics
    ///
    /// Panics if `inset` is negative or not finite.
    pub fn with_mark_inset(mut self, inset: f32) -> Self {
        assert!(
            inset.is_finite() && inset >= 0.0,
            "Mark inset must be finite and non-negative, got {}",
            inset
        );
        self.mark_inset = inset;
        self
    }

    /// Sets the player labels, in turn order. The first player draws
    /// crosses, the second noughts.
    ///
    /// Default: `("X", "O")`
    ///
    /// # Panics
    ///
    /// Panics if either label is empty.
    pub fn with_player_labels(mut self, first: impl Into<String>, second: impl Into<String>) -> Self {
        let (first, second) = (first.into(), second.into());
        assert!(
            !first.is_empty() && !second.is_empty(),
            "Player labels must not be empty"
        );
        self.labels = (first, second);
        self
    }

    /// Builds the game instance.
    pub fn build(self) -> Game {
        info!(
            "Building game ({}x{}, channel: {}, players: {} vs {})",
            self.width, self.height, self.channel_capacity, self.labels.0, self.labels.1
        );

        Game {
            title: self.title,
            width: self.width,
            height: self.height,
            channel_capacity: self.channel_capacity,
            mark_inset: self.mark_inset,
            labels: self.labels,
        }
    }
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Game ================================================================

/// Windowed game runtime.
///
/// Create via [`GameBuilder`] with `GameBuilder::new().build()`.
///
/// # Architecture
///
/// ```text
/// Game (Main Thread)
///   └─► Platform (Event Loop)
///         ├─► Window, Input Polling, Pixels
///         └─► GameSession (drained at each frame boundary)
///               └─► TurnController, BoardRenderer, FrameBuffer
///
/// Communication: crossbeam channel (PlatformEvent)
/// ```
#[derive(Debug)]
pub struct Game {
    title: String,
    width: u32,
    height: u32,
    channel_capacity: usize,
    mark_inset: f32,
    labels: (String, String),
}

impl Game {
    /// Creates a fresh session on a frame buffer of the configured size.
    pub(crate) fn new_session(&self) -> GameSession<FrameBuffer> {
        let controller = TurnController::with_players(self.labels.0.as_str(), self.labels.1.as_str());
        let surface = FrameBuffer::new(self.width, self.height, Rgba::WHITE, Rgba::BLACK);
        GameSession::new(controller, surface, self.mark_inset)
    }

    //--- Execution --------------------------------------------------------

    /// Opens the window and blocks until it is closed.
    ///
    /// # Lifecycle
    ///
    /// 1. Creates the event queue (bounded crossbeam channel)
    /// 2. Builds the session and its frame buffer
    /// 3. Runs the platform event loop (blocks here)
    /// 4. On window close: platform exits → session dropped
    ///
    /// # Errors
    ///
    /// [`PlatformError`] if the event loop, window or pixel surface cannot
    /// be created, or presentation fails while running.
    pub fn run(self) -> Result<(), PlatformError> {
        info!("Starting game runtime");

        //--- 1. Create communication channel -----------------------------
        let (tx, rx): (Sender<PlatformEvent>, Receiver<PlatformEvent>) =
            bounded(self.channel_capacity);

        info!("Event queue created (capacity: {})", self.channel_capacity);

        //--- 2. Build the session -----------------------------------------
        let session = self.new_session();

        //--- 3. Launch the platform subsystem -----------------------------
        let platform = Platform::new(self.title, tx, rx, session);
        info!("Platform initialized, entering event loop");

        let result = platform.run();

        info!("Game shutdown complete");
        result
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::render::Surface;

    //=====================================================================
    // GameBuilder Tests
    //=====================================================================

    #[test]
    fn builder_defaults() {
        let builder = GameBuilder::new();
        assert_eq!(builder.title, "Gridmark");
        assert_eq!((builder.width, builder.height), (600, 600));
        assert_eq!(builder.channel_capacity, 128);
        assert_eq!(builder.mark_inset, 4.0);
        assert_eq!(builder.labels, ("X".to_string(), "O".to_string()));
    }

    #[test]
    fn builder_with_title() {
        let builder = GameBuilder::new().with_title("Tic");
        assert_eq!(builder.title, "Tic");
    }

    #[test]
    fn builder_with_window_size() {
        let builder = GameBuilder::new().with_window_size(800, 450);
        assert_eq!((builder.width, builder.height), (800, 450));
    }

    #[test]
    #[should_panic(expected = "Window size must be positive")]
    fn builder_with_window_size_panics_on_zero() {
        GameBuilder::new().with_window_size(0, 600);
    }

    #[test]
    fn builder_with_channel_capacity() {
        let builder = GameBuilder::new().with_channel_capacity(256);
        assert_eq!(builder.channel_capacity, 256);
    }

    #[test]
    #[should_panic(expected = "Channel capacity must be positive")]
    fn builder_with_channel_capacity_panics_on_zero() {
        GameBuilder::new().with_channel_capacity(0);
    }

    #[test]
    fn builder_with_mark_inset() {
        let builder = GameBuilder::new().with_mark_inset(0.0);
        assert_eq!(builder.mark_inset, 0.0);
    }

    #[test]
    #[should_panic(expected = "Mark inset must be finite and non-negative")]
    fn builder_with_mark_inset_panics_on_negative() {
        GameBuilder::new().with_mark_inset(-1.0);
    }

    #[test]
    #[should_panic(expected = "Mark inset must be finite and non-negative")]
    fn builder_with_mark_inset_panics_on_nan() {
        GameBuilder::new().with_mark_inset(f32::NAN);
    }

    #[test]
    #[should_panic(expected = "Player labels must not be empty")]
    fn builder_with_empty_label_panics() {
        GameBuilder::new().with_player_labels("", "O");
    }

    #[test]
    fn builder_chaining() {
        let game = GameBuilder::new()
            .with_window_size(300, 300)
            .with_channel_capacity(8)
            .with_player_labels("Ann", "Bob")
            .build();

        assert_eq!(game.channel_capacity, 8);
        assert_eq!(game.labels.0, "Ann");
    }

    #[test]
    fn builder_default_trait() {
        let builder = GameBuilder::default();
        assert_eq!(builder.channel_capacity, 128);
    }

    //=====================================================================
    // Game Tests
    //=====================================================================

    #[test]
    fn session_uses_configuration() {
        let game = GameBuilder::new()
            .with_window_size(300, 150)
            .with_player_labels("Ann", "Bob")
            .build();

        let session = game.new_session();

        assert_eq!(session.surface().size(), (300, 150));
        assert_eq!(session.renderer().geometry().cell_size(), (100.0, 50.0));
        assert_eq!(session.status_line(), "Ann to move");
        assert!(
            session.surface().stroked_pixel_count() > 0,
            "Grid drawn before the first frame"
        );
    }
}
