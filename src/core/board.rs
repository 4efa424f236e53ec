//=========================================================================
// Board & Score Accumulators
//=========================================================================
//
// The N×N mark grid and the running per-line sums used for win detection.
//
// Line layout (2N + 2 accumulators):
// ```text
//   [0 .. N)        rows
//   [N .. 2N)       columns
//   2N              main diagonal      (row == col)
//   2N + 1          anti-diagonal      (row == N - 1 - col)
// ```
//
// A placement adds the player's point value to every line through the
// cell, so a win is a single equality check per line and never needs a
// rescan of the board.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::player::{PlayerId, PointValue};

//=== Constants ===========================================================

/// Width and height of the board.
pub const GRID_SIZE: usize = 3;

/// Number of win-checkable lines: rows, columns and both diagonals.
pub const LINE_COUNT: usize = 2 * GRID_SIZE + 2;

//=== Mark ================================================================

/// Content of a single board cell.
///
/// Once a cell leaves `Empty` it keeps its mark until the board is reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mark {
    #[default]
    Empty,
    Player(PlayerId),
}

impl Mark {
    /// Returns `true` if no player has marked this cell.
    pub fn is_empty(self) -> bool {
        matches!(self, Mark::Empty)
    }

    /// Returns the owning player, if any.
    pub fn player(self) -> Option<PlayerId> {
        match self {
            Mark::Empty => None,
            Mark::Player(id) => Some(id),
        }
    }
}

//=== Line ================================================================

/// One of the `2N + 2` win-checkable cell sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Line {
    Row(usize),
    Column(usize),
    MainDiagonal,
    AntiDiagonal,
}

impl Line {
    /// Position of this line's accumulator.
    pub fn index(self) -> usize {
        match self {
            Line::Row(r) => r,
            Line::Column(c) => GRID_SIZE + c,
            Line::MainDiagonal => 2 * GRID_SIZE,
            Line::AntiDiagonal => 2 * GRID_SIZE + 1,
        }
    }

    /// Inverse of [`Line::index`].
    pub fn from_index(index: usize) -> Option<Line> {
        match index {
            i if i < GRID_SIZE => Some(Line::Row(i)),
            i if i < 2 * GRID_SIZE => Some(Line::Column(i - GRID_SIZE)),
            i if i == 2 * GRID_SIZE => Some(Line::MainDiagonal),
            i if i == 2 * GRID_SIZE + 1 => Some(Line::AntiDiagonal),
            _ => None,
        }
    }

    /// All lines in accumulator order.
    pub fn all() -> impl Iterator<Item = Line> {
        (0..LINE_COUNT).filter_map(Line::from_index)
    }

    /// Lines passing through `(row, col)`.
    ///
    /// Every cell lies on its row and column; the centre of an odd board
    /// lies on both diagonals.
    pub fn through(row: usize, col: usize) -> impl Iterator<Item = Line> {
        let main = (row == col).then_some(Line::MainDiagonal);
        let anti = (row == GRID_SIZE - 1 - col).then_some(Line::AntiDiagonal);

        [Some(Line::Row(row)), Some(Line::Column(col)), main, anti]
            .into_iter()
            .flatten()
    }

    /// Cells making up this line, in order.
    pub fn cells(self) -> impl Iterator<Item = (usize, usize)> {
        (0..GRID_SIZE).map(move |i| match self {
            Line::Row(r) => (r, i),
            Line::Column(c) => (i, c),
            Line::MainDiagonal => (i, i),
            Line::AntiDiagonal => (i, GRID_SIZE - 1 - i),
        })
    }
}

//=== Board ===============================================================

/// Ordered N×N grid of cell marks.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    cells: [[Mark; GRID_SIZE]; GRID_SIZE],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if `(row, col)` addresses a cell on the board.
    pub fn in_bounds(row: usize, col: usize) -> bool {
        row < GRID_SIZE && col < GRID_SIZE
    }

    /// Mark at `(row, col)`, or `None` when out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<Mark> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, mark: Mark) {
        self.cells[row][col] = mark;
    }

    /// Resets every cell to `Empty`.
    pub fn clear(&mut self) {
        self.cells = [[Mark::Empty; GRID_SIZE]; GRID_SIZE];
    }

    /// Returns `true` if no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|m| !m.is_empty())
    }

    /// Number of marked cells.
    pub fn marked_count(&self) -> usize {
        self.cells.iter().flatten().filter(|m| !m.is_empty()).count()
    }

    /// Iterates `(row, col, mark)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Mark)> + '_ {
        self.cells.iter().enumerate().flat_map(|(r, row)| {
            row.iter().enumerate().map(move |(c, &mark)| (r, c, mark))
        })
    }
}

//=== ScoreAccumulators ===================================================

/// Running signed sum of point values along every line.
///
/// Invariant: `get(line)` equals the sum of point values of the marks
/// currently on that line's cells.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScoreAccumulators {
    sums: [i32; LINE_COUNT],
}

impl ScoreAccumulators {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `points` to every line through `(row, col)`.
    pub(crate) fn apply(&mut self, row: usize, col: usize, points: PointValue) {
        for line in Line::through(row, col) {
            self.sums[line.index()] += points.get();
        }
    }

    pub fn get(&self, line: Line) -> i32 {
        self.sums[line.index()]
    }

    /// Raw accumulator values in line order.
    pub fn as_slice(&self) -> &[i32] {
        &self.sums
    }

    pub fn clear(&mut self) {
        self.sums = [0; LINE_COUNT];
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
