pub use chain::*;
pub use deal::*;
pub use errors::*;
pub use game::*;
pub use hand::*;
pub use protocol_types::*;
pub use resolver::*;
pub use strategy::*;
pub use tiles::*;
pub use visualization::*;

#[cfg(test)]
mod arbitrary;
mod chain;
mod deal;
mod errors;
mod game;
mod hand;
mod protocol_types;
mod resolver;
mod strategy;
mod tiles;
mod turn;
mod visualization;
