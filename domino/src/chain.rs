use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::Tile;

/// The line of played tiles (the "snake").
///
/// Always holds at least one tile, and is always connected: the right face
/// of every tile equals the left face of the tile after it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chain {
    tiles: VecDeque<Tile>,
}

impl Chain {
    /// Starts a chain with a single tile, as it is oriented.
    pub fn seed(tile: Tile) -> Self {
        Self {
            tiles: VecDeque::from([tile]),
        }
    }

    /// The exposed faces at the (left, right) extremities.
    pub fn open_ends(&self) -> (u8, u8) {
        // Non-empty by construction
        (self.tiles[0].left, self.tiles[self.tiles.len() - 1].right)
    }

    pub fn left_end(&self) -> u8 {
        self.open_ends().0
    }

    pub fn right_end(&self) -> u8 {
        self.open_ends().1
    }

    /// Attaches a tile at the right end, turning it around first if `flip`.
    ///
    /// Panics if the (possibly flipped) tile's left face does not match the
    /// right end. Use [`crate::resolve()`] to find a legal placement.
    pub fn append_right(&mut self, tile: Tile, flip: bool) {
        let tile = if flip { tile.flipped() } else { tile };
        assert_eq!(
            tile.left,
            self.right_end(),
            "{} does not match the right end of the chain",
            tile
        );
        self.tiles.push_back(tile);
    }

    /// Attaches a tile at the left end, turning it around first if `flip`.
    ///
    /// Panics if the (possibly flipped) tile's right face does not match the
    /// left end.
    pub fn append_left(&mut self, tile: Tile, flip: bool) {
        let tile = if flip { tile.flipped() } else { tile };
        assert_eq!(
            tile.right,
            self.left_end(),
            "{} does not match the left end of the chain",
            tile
        );
        self.tiles.push_front(tile);
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Always false, a chain is never empty.
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// The tiles from left to right, in their placed orientation.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = Tile> + DoubleEndedIterator + '_ {
        self.tiles.iter().copied()
    }

    /// How often `pip` shows on the faces of all placed tiles.
    pub fn count_pip(&self, pip: u8) -> usize {
        self.tiles.iter().map(|tile| tile.count_pip(pip)).sum()
    }

    /// Checks that neighbouring faces match. Holds for every chain built
    /// through the public API.
    pub fn is_connected(&self) -> bool {
        self.tiles
            .iter()
            .zip(self.tiles.iter().skip(1))
            .all(|(a, b)| a.right == b.left)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile;

    #[test]
    fn seed_sets_both_ends() {
        let chain = Chain::seed(tile!("56"));
        assert_eq!(chain.open_ends(), (5, 6));
        assert_eq!(chain.len(), 1);
    }

    #[test]
    fn append_with_and_without_flip() {
        let mut chain = Chain::seed(tile!("56"));
        chain.append_right(tile!("62"), false);
        chain.append_right(tile!("32"), true);
        chain.append_left(tile!("15"), false);
        chain.append_left(tile!("14"), true);
        assert_eq!(chain.open_ends(), (4, 3));
        assert!(chain.is_connected());
        assert_eq!(
            chain.iter().collect::<Vec<_>>(),
            vec![tile!("41"), tile!("15"), tile!("56"), tile!("62"), tile!("23")]
        );
    }

    #[test]
    #[should_panic]
    fn append_right_mismatch_panics() {
        let mut chain = Chain::seed(tile!("56"));
        chain.append_right(tile!("26"), false);
    }

    #[test]
    #[should_panic]
    fn append_left_mismatch_panics() {
        let mut chain = Chain::seed(tile!("56"));
        chain.append_left(tile!("15"), true);
    }

    #[test]
    fn count_pip_counts_both_faces() {
        let mut chain = Chain::seed(tile!("33"));
        chain.append_right(tile!("31"), false);
        assert_eq!(chain.count_pip(3), 3);
        assert_eq!(chain.count_pip(1), 1);
        assert_eq!(chain.count_pip(0), 0);
    }
}
