use crate::board::{Board, Coord};
use crate::errors::GameError;
use crate::player::Color;

/// A slide that passed every legality check and can be applied as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedSlide {
    pub from: Coord,
    pub to: Coord,
    pub count: usize,
}

/// Number of cells between two locations along the row and column axes.
pub fn distance(from: Coord, to: Coord) -> usize {
    from.row.abs_diff(to.row) + from.col.abs_diff(to.col)
}

/// Checks that the `mover` may slide the top `count` pieces from `from` to `to`.
///
/// Turn ownership is not checked here; the engine authorizes the caller
/// before asking about the board.
///
/// # Errors
///
/// Checks run in this order and the first failure is returned:
/// - [`GameError::OutOfBounds`] - either location is off the board
/// - [`GameError::NotOrthogonal`] - the move changes both row and column
/// - [`GameError::ZeroDistance`] - source and destination are the same cell
/// - [`GameError::InvalidPieceCount`] - `count` is zero or taller than the source
/// - [`GameError::NotStackOwner`] - the source's top piece is not `mover`
/// - [`GameError::DistanceExceedsCount`] - the move is longer than `count`
///
/// # Examples
///
/// ```
/// use focus_engine::board::{Board, Coord};
/// use focus_engine::errors::GameError;
/// use focus_engine::player::Color;
/// use focus_engine::rules::validate_slide;
///
/// let board = Board::new(Color('R'), Color('G'));
///
/// let ok = validate_slide(&board, Color('R'), Coord::new(0, 0), Coord::new(0, 1), 1);
/// assert!(ok.is_ok());
///
/// // One piece cannot travel two cells
/// let far = validate_slide(&board, Color('R'), Coord::new(0, 0), Coord::new(2, 0), 1);
/// assert!(matches!(far, Err(GameError::DistanceExceedsCount { distance: 2, count: 1 })));
/// ```
pub fn validate_slide(
    board: &Board,
    mover: Color,
    from: Coord,
    to: Coord,
    count: usize,
) -> Result<ValidatedSlide, GameError> {
    from.checked()?;
    to.checked()?;
    if from.row != to.row && from.col != to.col {
        return Err(GameError::NotOrthogonal { from, to });
    }
    if from == to {
        return Err(GameError::ZeroDistance { at: from });
    }
    let source = board.stack(from).ok_or(GameError::OutOfBounds {
        row: from.row,
        col: from.col,
    })?;
    if count < 1 || count > source.height() {
        return Err(GameError::InvalidPieceCount {
            count,
            height: source.height(),
        });
    }
    if source.top() != Some(mover) {
        return Err(GameError::NotStackOwner {
            at: from,
            color: mover,
        });
    }
    let moved = distance(from, to);
    if moved > count {
        return Err(GameError::DistanceExceedsCount {
            distance: moved,
            count,
        });
    }
    Ok(ValidatedSlide { from, to, count })
}

/// Checks that a player holding `reserved` pieces may drop one on `to`.
///
/// # Errors
///
/// - [`GameError::OutOfBounds`] - `to` is off the board
/// - [`GameError::EmptyReserve`] - `reserved` is zero
pub fn validate_reserve(name: &str, reserved: u32, to: Coord) -> Result<Coord, GameError> {
    to.checked()?;
    if reserved == 0 {
        return Err(GameError::EmptyReserve {
            name: name.to_string(),
        });
    }
    Ok(to)
}
