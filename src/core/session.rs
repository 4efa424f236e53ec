//=========================================================================
// Game Session
//=========================================================================
//
// One running game: controller, renderer, dispatcher and surface.
//
// Architecture:
// ```text
//   InputEvent ──InputDispatcher──> GameEvent ──handle()──> TurnController
//                                                   │
//                                                   └──> BoardRenderer → Surface
// ```
//
// Events are processed one at a time and to completion, in the order
// they were received. Nothing is shared: the session owns every part of
// its game, so several sessions never interfere.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, info};

//=== Internal Dependencies ===============================================

use super::controller::{ControllerError, TurnController};
use super::input::{GameEvent, InputDispatcher, InputEvent};
use super::render::{BoardRenderer, Surface};

//=== GameSession =========================================================

/// Drives one game from typed events and keeps its surface up to date.
#[derive(Debug)]
pub struct GameSession<S: Surface> {
    controller: TurnController,
    renderer: BoardRenderer,
    dispatcher: InputDispatcher,
    surface: S,

    /// User-facing message from the last rejected move
    notice: Option<String>,

    /// Set when the player declined the restart prompt
    prompt_dismissed: bool,
}

impl<S: Surface> GameSession<S> {
    /// Wraps `controller` and draws the initial board on `surface`.
    ///
    /// `inset` is the margin kept clear around a cell when a mark is drawn.
    pub fn new(controller: TurnController, mut surface: S, inset: f32) -> Self {
        let (width, height) = surface.size();
        let renderer = BoardRenderer::new(width, height, inset);
        renderer.redraw_all(&mut surface, controller.state());

        info!(target: "game", "Session started on a {}x{} surface", width, height);

        Self {
            controller,
            renderer,
            dispatcher: InputDispatcher::new(),
            surface,
            notice: None,
            prompt_dismissed: false,
        }
    }

    //--- Event Handling ---------------------------------------------------

    /// Translates a raw input event and handles the result, if any.
    ///
    /// Events without game meaning (cursor moves, unbound keys, clicks
    /// off the grid) are ignored.
    pub fn handle_input(&mut self, event: &InputEvent) -> Result<(), ControllerError> {
        match self.dispatcher.translate(event, self.renderer.geometry()) {
            Some(game_event) => self.handle(game_event),
            None => Ok(()),
        }
    }

    /// Processes one game event to completion.
    ///
    /// # Errors
    ///
    /// The controller's refusal, if any. The session stays consistent in
    /// every case; an invalid move also sets [`GameSession::notice`].
    pub fn handle(&mut self, event: GameEvent) -> Result<(), ControllerError> {
        debug!(target: "game", "Handling {:?}", event);

        match event {
            GameEvent::CellSelected { row, col } => self.select_cell(row, col),

            GameEvent::SurfaceResized { width, height } => {
                self.renderer.resize(&mut self.surface, width, height);
                self.renderer.redraw_all(&mut self.surface, self.controller.state());
                Ok(())
            }

            GameEvent::RestartConfirmed => {
                self.controller.request_restart()?;
                self.notice = None;
                self.prompt_dismissed = false;
                self.renderer.redraw_all(&mut self.surface, self.controller.state());
                Ok(())
            }

            GameEvent::RestartDeclined => {
                if self.controller.is_terminal() {
                    info!(target: "game", "Restart declined");
                    self.prompt_dismissed = true;
                }
                Ok(())
            }
        }
    }

    fn select_cell(&mut self, row: usize, col: usize) -> Result<(), ControllerError> {
        match self.controller.submit_move(row, col) {
            Ok(placement) => {
                self.notice = None;

                if let Some(player) = self.controller.state().player(placement.player) {
                    self.renderer.draw_mark(&mut self.surface, row, col, player);
                }

                if let Some(prompt) = self.controller.restart_prompt() {
                    info!(target: "game", "{}", prompt);
                }
                Ok(())
            }
            Err(ControllerError::InvalidMove(e)) => {
                self.notice = Some(e.to_string());
                Err(ControllerError::InvalidMove(e))
            }
            Err(e) => Err(e),
        }
    }

    //--- Configuration ----------------------------------------------------

    /// Mutable access to key and button bindings.
    pub fn dispatcher_mut(&mut self) -> &mut InputDispatcher {
        &mut self.dispatcher
    }

    //--- Query API --------------------------------------------------------

    pub fn controller(&self) -> &TurnController {
        &self.controller
    }

    pub fn renderer(&self) -> &BoardRenderer {
        &self.renderer
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Message explaining the last rejected move, until the next accepted one.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Restart prompt while the game is over and the player has not
    /// declined it.
    pub fn prompt(&self) -> Option<String> {
        if self.prompt_dismissed {
            return None;
        }
        self.controller.restart_prompt()
    }

    /// One-line status: the prompt, the game result, the last notice, or
    /// whose turn it is, in that order of precedence.
    pub fn status_line(&self) -> String {
        if let Some(prompt) = self.prompt() {
            return prompt;
        }

        if let Some(label) = self.controller.winner_label() {
            return format!("Game over. Winner is {}.", label);
        }

        if let Some(notice) = self.notice() {
            return notice.to_string();
        }

        match self.controller.state().current_player() {
            Some(player) => format!("{} to move", player.label()),
            None => String::new(),
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
