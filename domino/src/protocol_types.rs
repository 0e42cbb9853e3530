use serde::{Deserialize, Serialize};

use crate::{Decision, GameStatus, Placement, Side, Tile};

/// A player command, as handed over by the console.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Command {
    /// Play the tile at `index` (0-based) on the given end.
    Play { index: usize, side: Side },
    /// Draw a tile from the stock, or pass when it is empty.
    DrawOrPass,
}

impl Command {
    /// Converts the signed console notation: `k > 0` plays tile `k` on the
    /// right end, `k < 0` plays tile `|k|` on the left end, `0` draws.
    ///
    /// Tiles are numbered from 1 here, as shown to the player.
    pub fn from_signed(k: i64) -> Self {
        let index = k.unsigned_abs() as usize;
        match k.signum() {
            1 => Command::Play {
                index: index - 1,
                side: Side::Right,
            },
            -1 => Command::Play {
                index: index - 1,
                side: Side::Left,
            },
            _ => Command::DrawOrPass,
        }
    }

    pub fn to_signed(self) -> i64 {
        match self {
            Command::Play {
                index,
                side: Side::Right,
            } => index as i64 + 1,
            Command::Play {
                index,
                side: Side::Left,
            } => -(index as i64 + 1),
            Command::DrawOrPass => 0,
        }
    }
}

/// The command that carries out a decision made for the player's hand.
impl From<Decision> for Command {
    fn from(decision: Decision) -> Self {
        match decision {
            Decision::Play { index, placement } => Command::Play {
                index,
                side: placement.side,
            },
            Decision::DrawOrPass => Command::DrawOrPass,
        }
    }
}

/// What happened during a turn.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TurnAction {
    /// The tile (as it was held) was attached to the chain.
    Played { tile: Tile, placement: Placement },
    Drew { tile: Tile },
    Passed,
}

/// Summarizes the outcome of playing a turn.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnOutcome {
    pub action: TurnAction,
    /// The status after the turn, i.e. whose turn is next or how the game ended.
    pub status: GameStatus,
}

/// Everything the console may show about a game.
///
/// The opponent's hand and the stock are hidden; only their sizes are given.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// The chain from left to right.
    pub chain: Vec<Tile>,
    pub player_hand: Vec<Tile>,
    pub opponent_hand_size: usize,
    pub stock_size: usize,
    pub status: GameStatus,
}
