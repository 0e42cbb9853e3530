use crate::{GameStatus, Side, Tile};

/// The error type for setting up a game. The game cannot start with tiles
/// that are not a double-six set.
#[derive(Debug, PartialEq, Eq)]
pub enum SetupError {
    WrongTileCount { expected: usize, actual: usize },
    DuplicateTile(Tile),
    PipOutOfRange(Tile),
    WrongPileSize { expected: usize, actual: usize },
}

impl std::error::Error for SetupError {}

impl std::fmt::Display for SetupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SetupError::WrongTileCount { expected, actual } => write!(
                f,
                "Expected a set of {} tiles to deal, but got {}",
                expected, actual
            ),
            SetupError::DuplicateTile(tile) => {
                write!(f, "The tile {} occurs more than once in the set", tile)
            }
            SetupError::PipOutOfRange(tile) => {
                write!(f, "The tile {} has a face outside of 0 to 6", tile)
            }
            SetupError::WrongPileSize { expected, actual } => write!(
                f,
                "Expected a pile of {} tiles in the deal, but got {}",
                expected, actual
            ),
        }
    }
}

/// The error type for one turn. The game state is unchanged when a move is
/// rejected, so the same side can simply try again.
#[derive(Debug, PartialEq, Eq)]
pub enum IllegalMove {
    NotPlayersTurn { status: GameStatus },
    NotOpponentsTurn { status: GameStatus },
    IndexOutOfRange { index: usize, hand_size: usize },
    IllegalAttachment { tile: Tile, side: Side },
}

impl std::error::Error for IllegalMove {}

impl std::fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalMove::NotPlayersTurn { status } => {
                write!(f, "It is not the player's turn (status: {:?})", status)
            }
            IllegalMove::NotOpponentsTurn { status } => {
                write!(f, "It is not the opponent's turn (status: {:?})", status)
            }
            IllegalMove::IndexOutOfRange { index, hand_size } => write!(
                f,
                "Tried to play tile {} from a hand of {} tiles",
                index + 1,
                hand_size
            ),
            IllegalMove::IllegalAttachment { tile, side } => {
                write!(f, "The tile {} does not fit the {} end of the chain", tile, side)
            }
        }
    }
}
