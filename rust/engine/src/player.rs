use serde::{Deserialize, Serialize};
use std::fmt;

/// A single-character token marking which player owns a piece.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Color(pub char);

impl Color {
    pub fn as_char(self) -> char {
        self.0
    }
}

impl From<char> for Color {
    fn from(c: char) -> Self {
        Color(c)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Name and color a caller supplies for one seat when starting a game.
///
/// Converts from a `(name, color)` tuple so games can be started with
/// `FocusGame::new(("PlayerA", 'R'), ("PlayerB", 'G'))`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct PlayerSpec {
    pub name: String,
    pub color: Color,
}

impl PlayerSpec {
    pub fn new(name: impl Into<String>, color: impl Into<Color>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
        }
    }
}

impl<N: Into<String>, C: Into<Color>> From<(N, C)> for PlayerSpec {
    fn from((name, color): (N, C)) -> Self {
        Self::new(name, color)
    }
}

/// One seat at the board with its reserve and capture tallies.
/// Tallies only change through engine moves.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct PlayerRecord {
    /// Name used to authorize moves and look up tallies
    name: String,
    /// Color of the pieces this player owns
    color: Color,
    /// Own pieces removed by collapse, available for reserve moves
    reserved: u32,
    /// Opponent pieces removed by collapse
    captured: u32,
}

impl PlayerRecord {
    pub fn new(spec: PlayerSpec) -> Self {
        Self {
            name: spec.name,
            color: spec.color,
            reserved: 0,
            captured: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn color(&self) -> Color {
        self.color
    }
    pub fn reserved(&self) -> u32 {
        self.reserved
    }
    pub fn captured(&self) -> u32 {
        self.captured
    }

    /// Credits a piece removed from the bottom of a collapsing stack.
    /// Own pieces go to reserve, anything else counts as captured.
    pub(crate) fn credit(&mut self, piece: Color) {
        if piece == self.color {
            self.reserved = self.reserved.saturating_add(1);
        } else {
            self.captured = self.captured.saturating_add(1);
        }
    }

    /// Takes one piece out of reserve. Callers check the reserve first.
    pub(crate) fn take_reserve(&mut self) {
        self.reserved = self.reserved.saturating_sub(1);
    }
}
