use std::fmt;
use tracing::{debug, info};

use crate::board::{Board, Coord};
use crate::config::RuleConfig;
use crate::errors::GameError;
use crate::player::{Color, PlayerRecord, PlayerSpec};
use crate::rules::{validate_reserve, validate_slide};

/// Result of an accepted move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move was applied and the turn passed to the opponent
    Moved,
    /// The move was applied and ended the game
    Won { winner: String },
}

impl fmt::Display for MoveOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveOutcome::Moved => write!(f, "successfully moved"),
            MoveOutcome::Won { winner } => write!(f, "{} Wins", winner),
        }
    }
}

/// Rules engine for one two-player game of Focus.
///
/// Owns the board and both players. Every move is validated in full before
/// anything changes, so a rejected move leaves the game exactly as it was.
///
/// # Examples
///
/// ```
/// use focus_engine::engine::{FocusGame, MoveOutcome};
/// use focus_engine::player::Color;
///
/// let mut game = FocusGame::new(("PlayerA", 'R'), ("PlayerB", 'G')).unwrap();
///
/// // PlayerA slides one piece onto the neighbouring stack
/// let outcome = game.move_piece("PlayerA", (0, 0), (0, 1), 1).unwrap();
/// assert_eq!(outcome, MoveOutcome::Moved);
/// assert_eq!(game.show_pieces((0, 1)).unwrap(), &[Color('R'), Color('R')]);
///
/// // It is PlayerB's turn now
/// assert!(game.move_piece("PlayerA", (0, 4), (0, 5), 1).is_err());
/// assert_eq!(game.active_player().name(), "PlayerB");
/// ```
#[derive(Debug, Clone)]
pub struct FocusGame {
    board: Board,
    /// Exactly two seats, in the order they were supplied
    players: [PlayerRecord; 2],
    /// Index into `players` of whoever moves next
    current: usize,
    config: RuleConfig,
}

impl FocusGame {
    /// Starts a game under standard rules. The first player moves first.
    ///
    /// # Errors
    ///
    /// [`GameError::DuplicateName`] or [`GameError::DuplicateColor`] when the
    /// two players cannot be told apart.
    pub fn new(
        first: impl Into<PlayerSpec>,
        second: impl Into<PlayerSpec>,
    ) -> Result<Self, GameError> {
        Self::with_config(first, second, RuleConfig::default())
    }

    /// Starts a game under custom rules.
    ///
    /// # Errors
    ///
    /// As [`FocusGame::new`], plus [`GameError::InvalidConfig`] when `config`
    /// fails [`RuleConfig::validate`].
    pub fn with_config(
        first: impl Into<PlayerSpec>,
        second: impl Into<PlayerSpec>,
        config: RuleConfig,
    ) -> Result<Self, GameError> {
        config
            .validate()
            .map_err(|e| GameError::InvalidConfig(e.to_string()))?;
        let (first, second) = (first.into(), second.into());
        if first.name == second.name {
            return Err(GameError::DuplicateName(first.name));
        }
        if first.color == second.color {
            return Err(GameError::DuplicateColor(first.color));
        }
        let board = Board::new(first.color, second.color);
        debug!(first = %first.name, second = %second.name, "game created");
        Ok(Self {
            board,
            players: [PlayerRecord::new(first), PlayerRecord::new(second)],
            current: 0,
            config,
        })
    }

    /// Slides the top `count` pieces of `from` onto the top of `to`.
    ///
    /// The moved pieces keep their order. If the destination grows past the
    /// stack limit it collapses from the bottom, crediting the mover.
    ///
    /// # Errors
    ///
    /// Any [`GameError`] from turn authorization or
    /// [`validate_slide`](crate::rules::validate_slide). Nothing changes on error.
    pub fn move_piece(
        &mut self,
        player_name: &str,
        from: impl Into<Coord>,
        to: impl Into<Coord>,
        count: usize,
    ) -> Result<MoveOutcome, GameError> {
        let (from, to) = (from.into(), to.into());
        let slide = self
            .authorize(player_name)
            .and_then(|mover| validate_slide(&self.board, mover.color(), from, to, count))
            .inspect_err(|e| debug!(player = player_name, reason = %e, "slide rejected"))?;

        let pieces = self.board.take_top(slide.from, slide.count)?;
        self.board.place(slide.to, &pieces)?;
        debug!(
            player = player_name,
            from = %slide.from,
            to = %slide.to,
            count = slide.count,
            "slide applied"
        );
        self.finish_move(slide.to)
    }

    /// Drops one piece from the mover's reserve onto the top of `to`.
    ///
    /// # Errors
    ///
    /// Turn authorization errors, [`GameError::OutOfBounds`], or
    /// [`GameError::EmptyReserve`]. Nothing changes on error.
    pub fn reserved_move(
        &mut self,
        player_name: &str,
        to: impl Into<Coord>,
    ) -> Result<MoveOutcome, GameError> {
        let to = to.into();
        let to = self
            .authorize(player_name)
            .and_then(|mover| validate_reserve(mover.name(), mover.reserved(), to))
            .inspect_err(|e| debug!(player = player_name, reason = %e, "reserve move rejected"))?;

        let mover = &mut self.players[self.current];
        mover.take_reserve();
        let color = mover.color();
        self.board.place(to, &[color])?;
        debug!(player = player_name, to = %to, "reserve piece placed");
        self.finish_move(to)
    }

    /// Pieces at `at`, bottom first.
    pub fn show_pieces(&self, at: impl Into<Coord>) -> Result<&[Color], GameError> {
        let at = at.into().checked()?;
        self.board
            .stack(at)
            .map(|s| s.pieces())
            .ok_or(GameError::OutOfBounds {
                row: at.row,
                col: at.col,
            })
    }

    /// Reserve count for `player_name`, or 0 for an unknown name.
    pub fn show_reserve(&self, player_name: &str) -> u32 {
        self.player(player_name).map_or(0, PlayerRecord::reserved)
    }

    /// Capture count for `player_name`, or 0 for an unknown name.
    pub fn show_captured(&self, player_name: &str) -> u32 {
        self.player(player_name).map_or(0, PlayerRecord::captured)
    }

    pub fn player(&self, player_name: &str) -> Option<&PlayerRecord> {
        self.players.iter().find(|p| p.name() == player_name)
    }

    pub fn players(&self) -> &[PlayerRecord; 2] {
        &self.players
    }

    /// Whoever moves next. After a win this stays the winner.
    pub fn active_player(&self) -> &PlayerRecord {
        &self.players[self.current]
    }

    /// The player who reached the capture target, if any.
    pub fn winner(&self) -> Option<&PlayerRecord> {
        self.players
            .iter()
            .find(|p| p.captured() >= self.config.captures_to_win)
    }

    pub fn is_over(&self) -> bool {
        self.winner().is_some()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &RuleConfig {
        &self.config
    }

    /// Confirms the game is still running and `player_name` holds the turn.
    fn authorize(&self, player_name: &str) -> Result<&PlayerRecord, GameError> {
        if let Some(winner) = self.winner() {
            return Err(GameError::GameOver {
                winner: winner.name().to_string(),
            });
        }
        let mover = &self.players[self.current];
        if mover.name() != player_name {
            return Err(GameError::NotPlayersTurn {
                expected: mover.name().to_string(),
                actual: player_name.to_string(),
            });
        }
        Ok(mover)
    }

    /// Collapses the stack at `at`, then either declares the mover the
    /// winner or hands the turn over.
    fn finish_move(&mut self, at: Coord) -> Result<MoveOutcome, GameError> {
        let removed = self.board.collapse(at, self.config.max_stack_height)?;
        let mover = &mut self.players[self.current];
        if !removed.is_empty() {
            let (before_reserved, before_captured) = (mover.reserved(), mover.captured());
            for piece in removed {
                mover.credit(piece);
            }
            debug!(
                at = %at,
                reserved = mover.reserved() - before_reserved,
                captured = mover.captured() - before_captured,
                "stack collapsed"
            );
        }

        if mover.captured() >= self.config.captures_to_win {
            info!(player = mover.name(), captured = mover.captured(), "player wins");
            return Ok(MoveOutcome::Won {
                winner: mover.name().to_string(),
            });
        }
        self.current = 1 - self.current;
        Ok(MoveOutcome::Moved)
    }
}
