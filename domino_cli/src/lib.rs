mod command;
mod console;
mod game;
mod recording;
mod simulate;
pub use command::*;
pub use console::*;
pub use game::*;
pub use recording::*;
pub use simulate::*;

pub struct Config {
    pub rng: rand::rngs::StdRng,
    pub recorder: Option<recording::Recorder>,
}
