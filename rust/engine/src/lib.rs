//! # focus-engine: Focus Board Game Rules Engine
//!
//! A rules engine for the two-player stacking game Focus, played on a 6x6
//! board of piece stacks. Players slide the top of stacks they control onto
//! other stacks; stacks taller than five collapse from the bottom, sending
//! the mover's own pieces to reserve and capturing the opponent's. Six
//! captures win.
//!
//! The engine validates and applies moves and answers queries. Reading
//! player input, drawing the board and choosing moves belong to the caller.
//!
//! ## Core Modules
//!
//! - [`board`] - Coordinates, stacks and the 6x6 board
//! - [`player`] - Piece colors and per-player reserve/capture tallies
//! - [`rules`] - Move legality checks
//! - [`engine`] - Turn handling, move application, collapse and win detection
//! - [`config`] - Rule tuning from TOML and the environment
//! - [`logging`] - Tracing setup and log capture for tests
//! - [`errors`] - Rejection reasons and configuration errors
//!
//! ## Quick Start
//!
//! ```rust
//! use focus_engine::engine::{FocusGame, MoveOutcome};
//!
//! let mut game = FocusGame::new(("PlayerA", 'R'), ("PlayerB", 'G')).unwrap();
//!
//! assert_eq!(game.move_piece("PlayerA", (0, 0), (0, 1), 1), Ok(MoveOutcome::Moved));
//! assert_eq!(game.move_piece("PlayerB", (0, 2), (0, 1), 1), Ok(MoveOutcome::Moved));
//! assert_eq!(game.show_pieces((0, 1)).unwrap().len(), 3);
//! assert_eq!(game.show_reserve("PlayerA"), 0);
//! assert_eq!(game.show_captured("Nobody"), 0);
//! ```
//!
//! ## Rejected Moves
//!
//! Every rejection names its reason and leaves the game untouched:
//!
//! ```rust
//! use focus_engine::engine::FocusGame;
//! use focus_engine::errors::GameError;
//!
//! let mut game = FocusGame::new(("PlayerA", 'R'), ("PlayerB", 'G')).unwrap();
//!
//! // Diagonal moves are never legal
//! let err = game.move_piece("PlayerA", (0, 0), (1, 1), 1).unwrap_err();
//! assert!(matches!(err, GameError::NotOrthogonal { .. }));
//!
//! // No reserve pieces yet
//! let err = game.reserved_move("PlayerA", (3, 3)).unwrap_err();
//! assert!(matches!(err, GameError::EmptyReserve { .. }));
//! assert_eq!(game.active_player().name(), "PlayerA");
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod errors;
pub mod logging;
pub mod player;
pub mod rules;

pub use board::{Board, Coord, Stack, BOARD_SIZE};
pub use config::RuleConfig;
pub use engine::{FocusGame, MoveOutcome};
pub use errors::{ConfigError, GameError};
pub use player::{Color, PlayerRecord, PlayerSpec};
