//=========================================================================
// Turn Controller
//=========================================================================
//
// The turn state machine wrapped around one owned `GameState`.
//
// ```text
//   AwaitingMove ──submit_move()──> Evaluating ──┬─> AwaitingMove (next player)
//        ↑                                       └─> Terminal(Win | Stalemate)
//        └──────────── request_restart() ─────────────────┘
// ```
//
// Rules:
// - A rejected move changes nothing and leaves the phase at AwaitingMove.
// - Terminal is absorbing; only `request_restart()` leaves it.
// - Win detection is a single pass over the accumulators:
//   `score == GRID_SIZE * point_value` for some player.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::fmt;

//=== External Dependencies ===============================================

use log::{debug, info, warn};

//=== Internal Dependencies ===============================================

use super::board::{Line, GRID_SIZE};
use super::player::PlayerId;
use super::state::{GameState, MoveError};

//=== Outcome =============================================================

/// Result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// A full line of this player's marks.
    Win(PlayerId),

    /// Board full, no winning line.
    Stalemate,
}

//=== TurnPhase ===========================================================

/// Controller state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnPhase {
    /// Waiting for the current player's move.
    AwaitingMove,

    /// A move was applied and terminal conditions are being checked.
    Evaluating,

    /// Game over; moves are refused until restart.
    Terminal(Outcome),
}

//=== ControllerError =====================================================

/// Reasons a controller operation was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerError {
    /// The move itself is illegal (cell occupied or off the board).
    InvalidMove(MoveError),

    /// A move was submitted after the game ended.
    GameOver,

    /// Restart requested while the game is still running.
    NotTerminal,

    /// The controller was built before both players were registered.
    PlayersNotReady,
}

impl fmt::Display for ControllerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidMove(e) => write!(f, "{}", e),
            Self::GameOver => write!(f, "The game is over, restart to play again."),
            Self::NotTerminal => write!(f, "The game is still in progress."),
            Self::PlayersNotReady => {
                write!(f, "Both players must be registered before the game starts.")
            }
        }
    }
}

impl std::error::Error for ControllerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidMove(e) => Some(e),
            _ => None,
        }
    }
}

impl From<MoveError> for ControllerError {
    fn from(e: MoveError) -> Self {
        Self::InvalidMove(e)
    }
}

//=== Placement ===========================================================

/// An accepted move and what it led to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub row: usize,
    pub col: usize,
    pub player: PlayerId,

    /// `Some` if this move ended the game.
    pub outcome: Option<Outcome>,
}

//=== TurnController ======================================================

/// Validates moves, mutates the owned [`GameState`] and tracks the phase.
#[derive(Debug)]
pub struct TurnController {
    state: GameState,
    phase: TurnPhase,
}

impl TurnController {
    //--- Construction -----------------------------------------------------

    /// Takes ownership of a fully registered state and starts a fresh game.
    ///
    /// # Errors
    ///
    /// [`ControllerError::PlayersNotReady`] if fewer than two players are
    /// registered.
    pub fn new(mut state: GameState) -> Result<Self, ControllerError> {
        if !state.is_ready() {
            return Err(ControllerError::PlayersNotReady);
        }

        state.reset();
        Ok(Self {
            state,
            phase: TurnPhase::AwaitingMove,
        })
    }

    /// Starts a fresh two-player game: `first` plays crosses, `second`
    /// noughts.
    pub fn with_players(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            state: GameState::with_players(first, second),
            phase: TurnPhase::AwaitingMove,
        }
    }

    //--- Moves ------------------------------------------------------------

    /// Places the current player's mark at `(row, col)`.
    ///
    /// On success the turn is evaluated and either the next player is up
    /// or the game is over. On failure nothing changes.
    ///
    /// # Errors
    ///
    /// - [`ControllerError::GameOver`] while Terminal
    /// - [`ControllerError::InvalidMove`] for an occupied or off-board cell
    pub fn submit_move(&mut self, row: usize, col: usize) -> Result<Placement, ControllerError> {
        if let TurnPhase::Terminal(_) = self.phase {
            debug!(target: "game::turn", "Move ({}, {}) refused: game over", row, col);
            return Err(ControllerError::GameOver);
        }

        let player = self.state.current_player_id();

        if let Err(e) = self.state.place_mark(row, col, player) {
            warn!(target: "game::turn", "Invalid move by {:?}: {}", player, e);
            return Err(e.into());
        }

        debug!(
            target: "game::turn",
            "Turn {}: {:?} marked ({}, {})",
            self.state.turn(),
            player,
            row,
            col
        );

        self.phase = TurnPhase::Evaluating;
        let outcome = self.evaluate();

        match outcome {
            Some(outcome) => {
                info!(target: "game::turn", "Game over: {:?}", outcome);
                self.phase = TurnPhase::Terminal(outcome);
            }
            None => {
                self.state.advance_turn();
                self.phase = TurnPhase::AwaitingMove;
            }
        }

        Ok(Placement {
            row,
            col,
            player,
            outcome,
        })
    }

    /// Starts a new game. Only valid from Terminal.
    ///
    /// # Errors
    ///
    /// [`ControllerError::NotTerminal`] while a game is in progress.
    pub fn request_restart(&mut self) -> Result<(), ControllerError> {
        if !self.is_terminal() {
            return Err(ControllerError::NotTerminal);
        }

        info!(target: "game::turn", "Restarting game");
        self.state.reset();
        self.phase = TurnPhase::AwaitingMove;
        Ok(())
    }

    //--- Evaluation -------------------------------------------------------

    /// Scans the accumulators once for a winner, then checks for a full
    /// board. The first matching line and player in roster order wins.
    fn evaluate(&self) -> Option<Outcome> {
        let full_line = GRID_SIZE as i32;

        for (index, &score) in self.state.scores().as_slice().iter().enumerate() {
            for id in [PlayerId::First, PlayerId::Second] {
                if score == full_line * id.point_value().get() {
                    debug!(
                        target: "game::turn",
                        "Winning line {:?} for {:?}",
                        Line::from_index(index),
                        id
                    );
                    return Some(Outcome::Win(id));
                }
            }
        }

        if self.state.board().is_full() {
            return Some(Outcome::Stalemate);
        }

        None
    }

    //--- Query API --------------------------------------------------------

    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self.phase, TurnPhase::Terminal(_))
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            TurnPhase::Terminal(outcome) => Some(outcome),
            _ => None,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Label of the winner, `"nobody"` for a stalemate, `None` while
    /// the game is running.
    pub fn winner_label(&self) -> Option<&str> {
        match self.outcome()? {
            Outcome::Win(id) => self.state.player(id).map(|p| p.label()),
            Outcome::Stalemate => Some("nobody"),
        }
    }

    /// Restart prompt text for the current result, e.g.
    /// `"Winner is X! Restart?"`.
    pub fn restart_prompt(&self) -> Option<String> {
        self.winner_label()
            .map(|label| format!("Winner is {}! Restart?", label))
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
