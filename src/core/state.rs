//=========================================================================
// Game State
//=========================================================================
//
// Owns everything one game instance needs: the board, the line
// accumulators, the player roster, the current player and turn counter.
//
// There is no global state; each `GameState` is an independent game.
// Mutation happens only through `place_mark`, `advance_turn` and `reset`,
// all of which are driven by the turn controller.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::fmt;

//=== Internal Dependencies ===============================================

use super::board::{Board, Line, Mark, ScoreAccumulators};
use super::player::{CrossMark, MarkRenderer, NoughtMark, Player, PlayerId};

//=== MoveError ===========================================================

/// A proposed move that cannot be applied.
///
/// The state is left untouched in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// Row or column outside `[0, GRID_SIZE)`.
    OutOfRange { row: usize, col: usize },

    /// The cell already carries a mark.
    Occupied { row: usize, col: usize },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { row, col } => {
                write!(f, "Cell ({}, {}) is off the board, choose again.", row, col)
            }
            Self::Occupied { .. } => write!(f, "Already marked, choose again."),
        }
    }
}

impl std::error::Error for MoveError {}

//=== RegisterError =======================================================

/// Player registration failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterError {
    /// Both roster slots are taken.
    RosterFull,
}

impl fmt::Display for RegisterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RosterFull => write!(f, "Exactly {} players can be registered", PlayerId::COUNT),
        }
    }
}

impl std::error::Error for RegisterError {}

//=== GameState ===========================================================

/// Board, accumulators, roster and turn bookkeeping for one game.
#[derive(Debug)]
pub struct GameState {
    board: Board,
    scores: ScoreAccumulators,
    players: Vec<Player>,
    current: PlayerId,
    turn: u32,
}

impl GameState {
    //--- Construction -----------------------------------------------------

    /// Creates an empty game with no registered players.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            scores: ScoreAccumulators::new(),
            players: Vec::with_capacity(PlayerId::COUNT),
            current: PlayerId::First,
            turn: 0,
        }
    }

    /// Creates a ready game: `first` plays crosses, `second` noughts.
    pub fn with_players(first: impl Into<String>, second: impl Into<String>) -> Self {
        let mut state = Self::new();
        state.players.push(Player::new(first, PlayerId::First, Box::new(CrossMark)));
        state.players.push(Player::new(second, PlayerId::Second, Box::new(NoughtMark)));
        state
    }

    //--- Roster -----------------------------------------------------------

    /// Registers the next player. Registration order fixes turn order and
    /// point values (+1 for the first, -1 for the second).
    pub fn register_player(
        &mut self,
        label: impl Into<String>,
        renderer: Box<dyn MarkRenderer>,
    ) -> Result<PlayerId, RegisterError> {
        let id = match self.players.len() {
            0 => PlayerId::First,
            1 => PlayerId::Second,
            _ => return Err(RegisterError::RosterFull),
        };

        self.players.push(Player::new(label, id, renderer));
        Ok(id)
    }

    /// Returns `true` once both players are registered.
    pub fn is_ready(&self) -> bool {
        self.players.len() == PlayerId::COUNT
    }

    //--- Lifecycle --------------------------------------------------------

    /// Zeroes board and accumulators; first registrant to move, turn 0.
    pub fn reset(&mut self) {
        self.board.clear();
        self.scores.clear();
        self.current = PlayerId::First;
        self.turn = 0;
    }

    /// Places `player`'s mark at `(row, col)` and updates every line
    /// accumulator through that cell.
    ///
    /// # Errors
    ///
    /// [`MoveError::OutOfRange`] or [`MoveError::Occupied`]; no mutation
    /// happens in either case.
    pub fn place_mark(&mut self, row: usize, col: usize, player: PlayerId) -> Result<(), MoveError> {
        match self.board.get(row, col) {
            None => Err(MoveError::OutOfRange { row, col }),
            Some(Mark::Player(_)) => Err(MoveError::Occupied { row, col }),
            Some(Mark::Empty) => {
                self.board.set(row, col, Mark::Player(player));
                self.scores.apply(row, col, player.point_value());
                Ok(())
            }
        }
    }

    /// Moves to the next turn and the next player in round-robin order.
    pub(crate) fn advance_turn(&mut self) {
        self.turn += 1;
        self.current = PlayerId::for_turn(self.turn);
    }

    //--- Accessors --------------------------------------------------------

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mark at `(row, col)`, or `None` when out of range.
    pub fn cell(&self, row: usize, col: usize) -> Option<Mark> {
        self.board.get(row, col)
    }

    pub fn scores(&self) -> &ScoreAccumulators {
        &self.scores
    }

    pub fn score(&self, line: Line) -> i32 {
        self.scores.get(line)
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.index())
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn current_player_id(&self) -> PlayerId {
        self.current
    }

    pub fn current_player(&self) -> Option<&Player> {
        self.player(self.current)
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
