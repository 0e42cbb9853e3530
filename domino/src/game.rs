use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Chain, Deal, Hand, SetupError, Snapshot, Stock, FULL_SET_SIZE, HAND_SIZE};

/// A chain closed on a pip that shows this often can never be extended.
///
/// Every pip shows exactly 8 times in a double-six set.
pub const LOCKED_GAME_OCCURRENCES: usize = 8;

/// The two sides of a game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Participant {
    /// The human.
    Player,
    /// The computer.
    Opponent,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    AwaitingPlayerMove,
    AwaitingOpponentMove,
    PlayerWins,
    OpponentWins,
    Draw,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            GameStatus::PlayerWins | GameStatus::OpponentWins | GameStatus::Draw
        )
    }

    /// Whose turn it is, or `None` once the game is over.
    pub fn to_move(self) -> Option<Participant> {
        match self {
            GameStatus::AwaitingPlayerMove => Some(Participant::Player),
            GameStatus::AwaitingOpponentMove => Some(Participant::Opponent),
            _ => None,
        }
    }
}

/// Whether the chain is closed on one pip that has been used up.
pub fn is_locked(chain: &Chain) -> bool {
    let (left_end, right_end) = chain.open_ends();
    left_end == right_end && chain.count_pip(left_end) >= LOCKED_GAME_OCCURRENCES
}

/// The complete state of one game.
///
/// All changes go through [`Game::play_player_turn()`] and
/// [`Game::play_opponent_turn()`].
#[derive(Clone, Debug)]
pub struct Game {
    pub(crate) player: Hand,
    pub(crate) opponent: Hand,
    pub(crate) stock: Stock,
    pub(crate) chain: Chain,
    pub(crate) status: GameStatus,
    pub(crate) consecutive_passes: usize,
}

impl Game {
    /// Shuffles and deals a new set, then seeds the chain.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Result<Self, SetupError> {
        Self::from_deal(Deal::shuffled(rng)?)
    }

    /// Determines who starts and seeds the chain.
    ///
    /// The side holding the highest tile (see [`crate::Tile::rank_key()`])
    /// places it as the first tile of the chain, and the other side takes the
    /// first turn. As all tiles are distinct there are no ties; if there were,
    /// the player would seed.
    ///
    /// The deal must pass [`Deal::validate()`].
    pub fn from_deal(deal: Deal) -> Result<Self, SetupError> {
        deal.validate()?;
        let Deal {
            mut player,
            mut opponent,
            stock,
        } = deal;
        let (Some(player_max), Some(opponent_max)) =
            (player.max_tile_index(), opponent.max_tile_index())
        else {
            return Err(SetupError::WrongPileSize {
                expected: HAND_SIZE,
                actual: 0,
            });
        };

        let opponent_seeds = opponent.as_slice()[opponent_max].rank_key()
            > player.as_slice()[player_max].rank_key();
        let (seed, status) = if opponent_seeds {
            (opponent.remove(opponent_max), GameStatus::AwaitingPlayerMove)
        } else {
            (player.remove(player_max), GameStatus::AwaitingOpponentMove)
        };
        debug!(%seed, ?status, "Seeded the chain");

        let mut game = Self::from_parts(player, opponent, stock, Chain::seed(seed), status);
        if let Some(terminal) = game.terminal_status() {
            game.status = terminal;
        }
        Ok(game)
    }

    /// Assembles a game from its parts, as-is.
    ///
    /// Mostly useful for setting up specific situations in tests. No check is
    /// made that the parts form a double-six set.
    pub fn from_parts(
        player: Hand,
        opponent: Hand,
        stock: Stock,
        chain: Chain,
        status: GameStatus,
    ) -> Self {
        Self {
            player,
            opponent,
            stock,
            chain,
            status,
            consecutive_passes: 0,
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn chain(&self) -> &Chain {
        &self.chain
    }

    pub fn player_hand(&self) -> &Hand {
        &self.player
    }

    pub fn opponent_hand(&self) -> &Hand {
        &self.opponent
    }

    pub fn stock(&self) -> &Stock {
        &self.stock
    }

    /// How many turns in a row ended in a pass.
    pub fn consecutive_passes(&self) -> usize {
        self.consecutive_passes
    }

    /// Both sides passed in a row with an empty stock.
    ///
    /// The status stays non-terminal; it is up to the caller whether to keep
    /// going.
    pub fn is_stalled(&self) -> bool {
        self.consecutive_passes >= 2
    }

    /// Tiles in both hands, the stock and the chain. Always 28 for a game
    /// created by [`Game::new()`].
    pub fn tile_count(&self) -> usize {
        self.player.len() + self.opponent.len() + self.stock.len() + self.chain.len()
    }

    pub fn is_full_set(&self) -> bool {
        self.tile_count() == FULL_SET_SIZE
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            chain: self.chain.iter().collect(),
            player_hand: self.player.as_slice().to_vec(),
            opponent_hand_size: self.opponent.len(),
            stock_size: self.stock.len(),
            status: self.status,
        }
    }

    /// The status the game ends with, if it is over.
    pub(crate) fn terminal_status(&self) -> Option<GameStatus> {
        if self.player.is_empty() {
            Some(GameStatus::PlayerWins)
        } else if self.opponent.is_empty() {
            Some(GameStatus::OpponentWins)
        } else if is_locked(&self.chain) {
            Some(GameStatus::Draw)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::{deal, full_set, resolve, shuffle, tile, Tile};

    /// Deals the given hands and puts the rest of the set into the stock.
    fn deal_hands(player: [&str; 7], opponent: [&str; 7]) -> Deal {
        let held: Vec<Tile> = player
            .iter()
            .chain(opponent.iter())
            .map(|t| t.parse::<Tile>().unwrap())
            .collect();
        let mut tiles = held.clone();
        tiles.extend(
            full_set()
                .into_iter()
                .filter(|t| !held.iter().any(|h| h.same_domino(*t))),
        );
        deal(tiles).unwrap()
    }

    #[test]
    fn higher_tile_seeds_the_chain() {
        let deal = deal_hands(
            ["10", "33", "21", "00", "11", "20", "22"],
            ["30", "56", "42", "31", "32", "40", "41"],
        );
        let game = Game::from_deal(deal).unwrap();
        assert_eq!(game.chain().iter().collect::<Vec<_>>(), vec![tile!("56")]);
        assert_eq!(game.chain().open_ends(), (5, 6));
        assert_eq!(game.status(), GameStatus::AwaitingPlayerMove);
        assert_eq!(game.opponent_hand().len(), 6);
        assert_eq!(game.player_hand().len(), 7);
        assert!(game.is_full_set());
    }

    #[test]
    fn player_seeds_when_holding_the_highest_tile() {
        let deal = deal_hands(
            ["10", "60", "00", "11", "20", "21", "22"],
            ["55", "54", "30", "31", "32", "33", "40"],
        );
        let game = Game::from_deal(deal).unwrap();
        assert_eq!(game.chain().open_ends(), (6, 0));
        assert_eq!(game.player_hand().len(), 6);
        assert!(!game.player_hand().iter().any(|t| t == tile!("60")));
        assert_eq!(game.status(), GameStatus::AwaitingOpponentMove);
    }

    #[test]
    fn deal_with_bad_pips_cannot_start() {
        let mut deal = deal_hands(
            ["10", "60", "00", "11", "20", "21", "22"],
            ["55", "54", "30", "31", "32", "33", "40"],
        );
        let mut player: Vec<Tile> = deal.player.iter().collect();
        player[0] = Tile::new(9, 9);
        deal.player = Hand::from(player);
        assert_eq!(
            Game::from_deal(deal).unwrap_err(),
            SetupError::PipOutOfRange(Tile::new(9, 9))
        );
    }

    #[test]
    fn deal_with_duplicates_cannot_start() {
        let mut deal = deal_hands(
            ["10", "60", "00", "11", "20", "21", "22"],
            ["55", "54", "30", "31", "32", "33", "40"],
        );
        // The same domino held by both sides, once the other way round.
        let mut opponent: Vec<Tile> = deal.opponent.iter().collect();
        opponent[6] = tile!("01");
        deal.opponent = Hand::from(opponent);
        assert_eq!(
            Game::from_deal(deal).unwrap_err(),
            SetupError::DuplicateTile(tile!("01"))
        );

        let deal = Deal {
            player: Hand::from(vec![tile!("10"); 7]),
            opponent: Hand::from(vec![tile!("66"); 7]),
            stock: Stock::from(full_set().split_off(14)),
        };
        assert_eq!(
            Game::from_deal(deal).unwrap_err(),
            SetupError::DuplicateTile(tile!("10"))
        );
    }

    #[test]
    fn deal_with_wrong_pile_sizes_cannot_start() {
        let mut deal = deal_hands(
            ["10", "60", "00", "11", "20", "21", "22"],
            ["55", "54", "30", "31", "32", "33", "40"],
        );
        let mut stock: Vec<Tile> = deal.stock.iter().collect();
        stock.push(deal.player.remove(0));
        deal.stock = Stock::from(stock);
        assert_eq!(
            Game::from_deal(deal).unwrap_err(),
            SetupError::WrongPileSize {
                expected: 7,
                actual: 6
            }
        );

        let deal = Deal {
            player: Hand::new(),
            opponent: Hand::from(vec![tile!("55")]),
            stock: Stock::default(),
        };
        assert_eq!(
            Game::from_deal(deal).unwrap_err(),
            SetupError::WrongPileSize {
                expected: 7,
                actual: 0
            }
        );

        let mut deal = deal_hands(
            ["10", "60", "00", "11", "20", "21", "22"],
            ["55", "54", "30", "31", "32", "33", "40"],
        );
        let mut stock: Vec<Tile> = deal.stock.iter().collect();
        stock.pop();
        deal.stock = Stock::from(stock);
        assert_eq!(
            Game::from_deal(deal).unwrap_err(),
            SetupError::WrongPileSize {
                expected: 14,
                actual: 13
            }
        );
    }

    #[test]
    fn new_game_is_consistent() {
        let game = Game::new(&mut StdRng::seed_from_u64(7)).unwrap();
        assert!(game.is_full_set());
        assert_eq!(game.chain().len(), 1);
        assert_eq!(game.player_hand().len() + game.opponent_hand().len(), 13);
        assert_eq!(game.stock().len(), 14);
        let snapshot = game.snapshot();
        assert_eq!(snapshot.stock_size, 14);
        assert_eq!(snapshot.status, game.status());
        assert!(!game.status().is_terminal());
    }

    #[test]
    fn locked_chain() {
        let mut chain = Chain::seed(tile!("60"));
        for tile in ["01", "16", "66", "62", "23", "36", "64", "45"] {
            chain.append_right(tile.parse().unwrap(), false);
        }
        assert!(!is_locked(&chain));
        chain.append_right(tile!("56"), false);
        assert_eq!(chain.open_ends(), (6, 6));
        assert_eq!(chain.count_pip(6), 8);
        assert!(is_locked(&chain));
    }

    #[test]
    fn closed_but_not_locked() {
        let mut chain = Chain::seed(tile!("30"));
        chain.append_right(tile!("01"), false);
        chain.append_right(tile!("13"), false);
        assert_eq!(chain.open_ends(), (3, 3));
        assert!(!is_locked(&chain));
    }

    #[test]
    fn six_of_eight_on_closed_ends_is_not_locked() {
        let mut chain = Chain::seed(tile!("60"));
        for tile in ["01", "16", "66", "62", "23", "36"] {
            chain.append_right(tile.parse().unwrap(), false);
        }
        assert_eq!(chain.open_ends(), (6, 6));
        assert_eq!(chain.count_pip(6), 6);
        assert!(!is_locked(&chain));
    }

    quickcheck! {
        fn locked_iff_no_unplayed_tile_fits(seed: u64) -> bool {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut unplayed = full_set();
            shuffle(&mut unplayed, &mut rng);
            let mut chain = Chain::seed(unplayed.remove(0));
            let mut agrees = true;
            // Keep attaching the first unplayed tile that fits somewhere.
            loop {
                let ends = chain.open_ends();
                let next = unplayed
                    .iter()
                    .enumerate()
                    .find_map(|(i, &tile)| resolve(tile, ends).map(|p| (i, p)));
                let Some((index, placement)) = next else {
                    break;
                };
                let tile = unplayed.remove(index);
                placement.apply(&mut chain, tile);
                let (l, r) = chain.open_ends();
                let blocked = l == r && unplayed.iter().all(|t| t.count_pip(l) == 0);
                agrees &= is_locked(&chain) == blocked;
            }
            agrees
        }
    }
}
