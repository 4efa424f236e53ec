//=========================================================================
// Gridmark - Library Root
//
// A two-player grid-marking game: players alternate placing marks on a
// 3×3 board, and the first full row, column or diagonal wins.
//
// Responsibilities:
// - Expose the game facade (`Game`, `GameBuilder`)
// - Expose the platform-independent core (board, turns, drawing, input)
//   so a game can be driven without a window
// - Keep the windowing backend (`platform`) hidden from users
//
// Typical usage:
// ```no_run
// use gridmark::GameBuilder;
//
// fn main() {
//     GameBuilder::new().build().run().unwrap();
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` contains all game rules, drawing and input translation.
// It is public so sessions can be driven headless (tests, tools).
//
pub mod core;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `platform` contains OS-specific logic (window, Winit integration,
// pixels presentation) and is not part of the public API surface.
//
// `game` defines the main entry point and configuration.
//
mod game;
mod platform;

//--- Public Exports ------------------------------------------------------

pub use game::{Game, GameBuilder};
