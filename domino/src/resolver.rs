use serde::{Deserialize, Serialize};

use crate::{Chain, Tile};

/// One of the two open ends of the chain.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// Where and how a tile is attached to the chain.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub side: Side,
    /// Whether the tile is turned around before it is attached.
    pub flip: bool,
}

impl Placement {
    pub const RIGHT: Placement = Placement {
        side: Side::Right,
        flip: false,
    };
    pub const RIGHT_FLIPPED: Placement = Placement {
        side: Side::Right,
        flip: true,
    };
    pub const LEFT: Placement = Placement {
        side: Side::Left,
        flip: false,
    };
    pub const LEFT_FLIPPED: Placement = Placement {
        side: Side::Left,
        flip: true,
    };

    /// Attaches the tile to the chain.
    ///
    /// Panics if the placement is not legal for this tile, see [`Chain::append_right()`].
    pub fn apply(self, chain: &mut Chain, tile: Tile) {
        match self.side {
            Side::Right => chain.append_right(tile, self.flip),
            Side::Left => chain.append_left(tile, self.flip),
        }
    }
}

/// Finds how `tile` can be attached to one particular end.
///
/// Attaching without turning the tile is preferred when both would work,
/// which can only happen for a double.
pub fn resolve_side(tile: Tile, (left_end, right_end): (u8, u8), side: Side) -> Option<Placement> {
    match side {
        Side::Right if tile.left == right_end => Some(Placement::RIGHT),
        Side::Right if tile.right == right_end => Some(Placement::RIGHT_FLIPPED),
        Side::Left if tile.right == left_end => Some(Placement::LEFT),
        Side::Left if tile.left == left_end => Some(Placement::LEFT_FLIPPED),
        _ => None,
    }
}

/// Finds how `tile` can be attached to either end, or `None` if it fits
/// nowhere.
///
/// The right end is always tried before the left end. The order is part of
/// the game's observable behaviour and must not change.
pub fn resolve(tile: Tile, open_ends: (u8, u8)) -> Option<Placement> {
    resolve_side(tile, open_ends, Side::Right).or_else(|| resolve_side(tile, open_ends, Side::Left))
}
