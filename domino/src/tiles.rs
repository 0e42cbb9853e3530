use std::str::FromStr;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// The highest pip value in a double-six set.
pub const MAX_PIP: u8 = 6;

/// The number of tiles in a double-six set.
pub const FULL_SET_SIZE: usize = 28;

/// A domino tile.
///
/// In a hand or in the stock the orientation carries no meaning. Once the
/// tile is placed in the [chain](crate::Chain), `left` and `right` are the
/// faces pointing towards the left and right end respectively.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    pub left: u8,
    pub right: u8,
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.left, self.right)
    }
}

impl Tile {
    pub const fn new(left: u8, right: u8) -> Self {
        Self { left, right }
    }

    pub fn is_double(&self) -> bool {
        self.left == self.right
    }

    /// The same tile, turned around.
    #[must_use]
    pub fn flipped(&self) -> Self {
        Self {
            left: self.right,
            right: self.left,
        }
    }

    /// The tile oriented with its higher face first.
    ///
    /// Two tiles are the same domino iff their canonical forms are equal.
    #[must_use]
    pub fn canonical(&self) -> Self {
        Self {
            left: self.left.max(self.right),
            right: self.left.min(self.right),
        }
    }

    pub fn same_domino(&self, other: Tile) -> bool {
        self.canonical() == other.canonical()
    }

    /// The key used to rank tiles when deciding who starts: the higher face,
    /// then the lower face, compared lexicographically.
    ///
    /// This is a total order on dominoes, so two distinct tiles never tie.
    pub fn rank_key(&self) -> (u8, u8) {
        let Tile { left, right } = self.canonical();
        (left, right)
    }

    /// How many of the two faces show `pip`. A double counts twice.
    pub fn count_pip(&self, pip: u8) -> usize {
        usize::from(self.left == pip) + usize::from(self.right == pip)
    }

    pub fn is_valid(&self) -> bool {
        self.left <= MAX_PIP && self.right <= MAX_PIP
    }
}

/// Generates the 28 tiles of a double-six set, `(x, y)` for `0 <= y <= x <= 6`.
///
/// The order is fixed: `[0, 0], [1, 0], [1, 1], [2, 0], ...`.
pub fn full_set() -> Vec<Tile> {
    let mut tiles = Vec::with_capacity(FULL_SET_SIZE);
    for x in 0..=MAX_PIP {
        for y in 0..=x {
            tiles.push(Tile::new(x, y));
        }
    }
    tiles
}

/// Uniformly permutes the tiles. Pass a seeded RNG for reproducible games.
pub fn shuffle<R: Rng + ?Sized>(tiles: &mut [Tile], rng: &mut R) {
    tiles.shuffle(rng);
}

/// The error type for the [`FromStr`] instance of [`Tile`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TileFromStrErr {
    LessThanTwoChars,
    MoreThanTwoChars,
    InvalidPip,
}

impl std::error::Error for TileFromStrErr {}

impl std::fmt::Display for TileFromStrErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TileFromStrErr::LessThanTwoChars => write!(f, "A tile needs two pip characters"),
            TileFromStrErr::MoreThanTwoChars => write!(f, "A tile has only two pip characters"),
            TileFromStrErr::InvalidPip => write!(f, "Pips must be digits from 0 to {}", MAX_PIP),
        }
    }
}

impl FromStr for Tile {
    type Err = TileFromStrErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let left_char = chars.next().ok_or(TileFromStrErr::LessThanTwoChars)?;
        let right_char = chars.next().ok_or(TileFromStrErr::LessThanTwoChars)?;
        if chars.next().is_some() {
            return Err(TileFromStrErr::MoreThanTwoChars);
        }
        let pip = |c: char| -> Result<u8, TileFromStrErr> {
            match c.to_digit(10) {
                Some(d) if d <= u32::from(MAX_PIP) => Ok(d as u8),
                _ => Err(TileFromStrErr::InvalidPip),
            }
        };
        Ok(Tile::new(pip(left_char)?, pip(right_char)?))
    }
}

/// Shorthand for creating tiles from a two-character string.
///
/// The first character is the left face, the second the right face.
///
/// This macro is just calling the [`FromStr`] instance of [`Tile`].
/// ```
/// # use domino::{tile, Tile};
/// assert_eq!(tile!("62"), Tile { left: 6, right: 2 });
/// ```
#[macro_export]
macro_rules! tile {
    ($s:literal) => {
        <$crate::Tile as std::str::FromStr>::from_str($s)
            .expect("Invalid tile code given to tile! macro")
    };
}
#[allow(unused_imports)]
pub(crate) use tile;
