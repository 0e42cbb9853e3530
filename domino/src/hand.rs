use serde::{Deserialize, Serialize};

use crate::Tile;

/// The tiles held by one side.
///
/// The order is the order tiles were dealt or drawn in; player commands
/// address tiles by their position in it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    tiles: Vec<Tile>,
}

impl Hand {
    pub fn new() -> Self {
        Self { tiles: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Tile> {
        self.tiles.get(index).copied()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = Tile> + '_ {
        self.tiles.iter().copied()
    }

    pub fn as_slice(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn push(&mut self, tile: Tile) {
        self.tiles.push(tile);
    }

    /// Removes the tile at `index`, keeping the order of the others.
    ///
    /// Panics if `index` is out of range.
    pub fn remove(&mut self, index: usize) -> Tile {
        self.tiles.remove(index)
    }

    /// Index of the highest-ranked tile, see [`Tile::rank_key()`].
    pub fn max_tile_index(&self) -> Option<usize> {
        self.tiles
            .iter()
            .enumerate()
            .max_by_key(|(_, tile)| tile.rank_key())
            .map(|(idx, _)| idx)
    }
}

impl From<Vec<Tile>> for Hand {
    fn from(tiles: Vec<Tile>) -> Self {
        Self { tiles }
    }
}

impl FromIterator<Tile> for Hand {
    fn from_iter<T: IntoIterator<Item = Tile>>(iter: T) -> Self {
        Self {
            tiles: iter.into_iter().collect(),
        }
    }
}

/// The undealt tiles (the boneyard).
///
/// Tiles are always drawn from the end of the sequence, i.e. the tile that
/// came last in the shuffled order is drawn first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stock {
    tiles: Vec<Tile>,
}

impl Stock {
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = Tile> + '_ {
        self.tiles.iter().copied()
    }

    /// Takes the tile at the draw point, if any is left.
    pub fn draw(&mut self) -> Option<Tile> {
        self.tiles.pop()
    }
}

impl From<Vec<Tile>> for Stock {
    fn from(tiles: Vec<Tile>) -> Self {
        Self { tiles }
    }
}
