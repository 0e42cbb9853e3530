use std::collections::HashSet;

use rand::Rng;

use crate::{full_set, shuffle, Hand, SetupError, Stock, Tile, FULL_SET_SIZE};

pub const HAND_SIZE: usize = 7;
pub const STOCK_SIZE: usize = FULL_SET_SIZE - 2 * HAND_SIZE;

/// The three disjoint piles a shuffled set is split into.
#[derive(Clone, Debug)]
pub struct Deal {
    pub player: Hand,
    pub opponent: Hand,
    pub stock: Stock,
}

impl Deal {
    /// Generates, shuffles and deals a fresh set.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Result<Self, SetupError> {
        let mut tiles = full_set();
        shuffle(&mut tiles, rng);
        deal(tiles)
    }

    /// Checks that the piles split a double-six set 7/7/14.
    pub fn validate(&self) -> Result<(), SetupError> {
        let piles = [
            (self.player.len(), HAND_SIZE),
            (self.opponent.len(), HAND_SIZE),
            (self.stock.len(), STOCK_SIZE),
        ];
        for (actual, expected) in piles {
            if actual != expected {
                return Err(SetupError::WrongPileSize { expected, actual });
            }
        }
        check_set(
            self.player
                .iter()
                .chain(self.opponent.iter())
                .chain(self.stock.iter()),
        )
    }
}

/// Every tile has valid pips and no domino occurs twice.
fn check_set(tiles: impl IntoIterator<Item = Tile>) -> Result<(), SetupError> {
    let mut seen = HashSet::with_capacity(FULL_SET_SIZE);
    for tile in tiles {
        if !tile.is_valid() {
            return Err(SetupError::PipOutOfRange(tile));
        }
        if !seen.insert(tile.canonical()) {
            return Err(SetupError::DuplicateTile(tile));
        }
    }
    Ok(())
}

/// Deals the first 7 tiles to the player, the next 7 to the opponent, and
/// leaves the remaining 14 in the stock, keeping their order.
pub fn deal(mut tiles: Vec<Tile>) -> Result<Deal, SetupError> {
    if tiles.len() != FULL_SET_SIZE {
        return Err(SetupError::WrongTileCount {
            expected: FULL_SET_SIZE,
            actual: tiles.len(),
        });
    }
    check_set(tiles.iter().copied())?;

    let stock = tiles.split_off(2 * HAND_SIZE);
    let opponent = tiles.split_off(HAND_SIZE);
    Ok(Deal {
        player: Hand::from(tiles),
        opponent: Hand::from(opponent),
        stock: Stock::from(stock),
    })
}
