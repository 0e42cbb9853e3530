use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::{resolve, Chain, Hand, Placement, Tile, MAX_PIP};

/// What a side decided to do on its turn.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    /// Play the tile at `index` in the hand.
    Play { index: usize, placement: Placement },
    /// No tile fits: draw from the stock, or pass if it is empty.
    DrawOrPass,
}

/// Chooses a move for a hand given the current chain.
pub trait Strategy {
    fn decide(&self, hand: &Hand, chain: &Chain) -> Decision;
}

/// How often each pip value shows, indexed by pip.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PipCounts([usize; MAX_PIP as usize + 1]);

impl PipCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts both faces of every tile. A double adds two to its pip.
    pub fn add(&mut self, tile: Tile) {
        self.0[tile.left as usize] += 1;
        self.0[tile.right as usize] += 1;
    }

    pub fn get(&self, pip: u8) -> usize {
        self.0[pip as usize]
    }
}

impl FromIterator<Tile> for PipCounts {
    fn from_iter<T: IntoIterator<Item = Tile>>(iter: T) -> Self {
        let mut counts = Self::new();
        for tile in iter {
            counts.add(tile);
        }
        counts
    }
}

/// The computer's heuristic.
///
/// Pip values are counted over the own hand and the chain, and a tile scores
/// the counts of both its faces. The highest-scoring tile that fits anywhere
/// is played; equal scores go by hand order.
#[derive(Clone, Copy, Debug, Default)]
pub struct PipPressure;

impl PipPressure {
    /// The score of every tile in the hand, in hand order.
    pub fn scores(hand: &Hand, chain: &Chain) -> Vec<usize> {
        let counts: PipCounts = hand.iter().chain(chain.iter()).collect();
        hand.iter()
            .map(|tile| counts.get(tile.left) + counts.get(tile.right))
            .collect()
    }

    /// Hand indices, best candidate first.
    pub fn ranked_candidates(hand: &Hand, chain: &Chain) -> Vec<usize> {
        let scores = Self::scores(hand, chain);
        let mut indices: Vec<usize> = (0..hand.len()).collect();
        // Stable, so ties keep hand order
        indices.sort_by(|&a, &b| scores[b].cmp(&scores[a]));
        trace!(?scores, ?indices, "Ranked candidates");
        indices
    }
}

impl Strategy for PipPressure {
    fn decide(&self, hand: &Hand, chain: &Chain) -> Decision {
        let open_ends = chain.open_ends();
        Self::ranked_candidates(hand, chain)
            .into_iter()
            .find_map(|index| {
                let tile = hand.get(index)?;
                resolve(tile, open_ends).map(|placement| Decision::Play { index, placement })
            })
            .unwrap_or(Decision::DrawOrPass)
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;
    use crate::tile;

    #[test]
    fn scores_count_hand_and_chain() {
        let hand = Hand::from(vec![tile!("66"), tile!("61"), tile!("20")]);
        let chain = Chain::seed(tile!("56"));
        // 6: 2 + 1 + 1 = 4, 1: 1, 2: 1, 0: 1
        assert_eq!(PipPressure::scores(&hand, &chain), vec![8, 5, 2]);
    }

    #[test]
    fn plays_highest_score_that_fits() {
        // [6, 6] scores highest but does not fit (5, 3).
        let hand = Hand::from(vec![tile!("66"), tile!("61"), tile!("63"), tile!("50")]);
        let chain = Chain::seed(tile!("53"));
        assert_eq!(
            PipPressure.decide(&hand, &chain),
            Decision::Play {
                index: 2,
                placement: Placement::RIGHT_FLIPPED
            }
        );
    }

    #[test]
    fn ties_go_by_hand_order() {
        let hand = Hand::from(vec![tile!("41"), tile!("20"), tile!("45")]);
        let chain = Chain::seed(tile!("34"));
        // [4, 1] and [4, 5] both score 4; [4, 1] comes first.
        assert_eq!(PipPressure::ranked_candidates(&hand, &chain), vec![0, 2, 1]);
        assert_eq!(
            PipPressure.decide(&hand, &chain),
            Decision::Play {
                index: 0,
                placement: Placement::RIGHT
            }
        );
    }

    #[test]
    fn nothing_fits() {
        let hand = Hand::from(vec![tile!("00"), tile!("11")]);
        let chain = Chain::seed(tile!("56"));
        assert_eq!(PipPressure.decide(&hand, &chain), Decision::DrawOrPass);
    }

    quickcheck! {
        fn decision_is_legal(tiles: Vec<Tile>, seed: Tile) -> bool {
            let hand = Hand::from(tiles);
            let chain = Chain::seed(seed);
            match PipPressure.decide(&hand, &chain) {
                Decision::Play { index, placement } => {
                    let tile = hand.as_slice()[index];
                    resolve(tile, chain.open_ends()) == Some(placement)
                }
                Decision::DrawOrPass => hand.iter().all(|t| resolve(t, chain.open_ends()).is_none()),
            }
        }
    }
}
