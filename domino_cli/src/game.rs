use std::io::{BufRead, Write};

use domino::{Game, GameStatus, IllegalMove, Participant};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::command::parse_command;
use crate::console::render_interface;
use crate::Config;

/// Reads one line into `buf`. Returns false at end of input.
fn read_line<R: BufRead>(input: &mut R, buf: &mut String) -> std::io::Result<bool> {
    buf.clear(); // because read_line() appends to the buffer
    Ok(input.read_line(buf)? > 0)
}

/// Deals a new game from a fresh seed drawn from the config's RNG.
///
/// Each game gets its own seed so that it can be replayed on its own.
pub(crate) fn new_game(config: &mut Config) -> anyhow::Result<(u64, Game)> {
    let seed: u64 = config.rng.gen();
    let game = Game::new(&mut StdRng::seed_from_u64(seed))?;
    if let Some(recorder) = &mut config.recorder {
        recorder.start_game(seed, game.snapshot());
    }
    Ok((seed, game))
}

/// Plays one interactive game against the computer.
///
/// Returns the final status, or `None` if the input ended first. Only I/O
/// failures are errors; invalid commands are answered by asking again.
pub fn play_game<R: BufRead, W: Write>(
    config: &mut Config,
    input: &mut R,
    output: &mut W,
) -> anyhow::Result<Option<GameStatus>> {
    let (seed, game) = new_game(config)?;
    info!(seed, "New game");
    play_dealt_game(config, game, input, output)
}

/// Plays an already dealt game interactively until it ends or the input does.
pub fn play_dealt_game<R: BufRead, W: Write>(
    config: &mut Config,
    mut game: Game,
    input: &mut R,
    output: &mut W,
) -> anyhow::Result<Option<GameStatus>> {
    let mut buf = String::new();

    let result = loop {
        writeln!(output, "{}", render_interface(&game.snapshot()))?;
        output.flush()?;

        let outcome = match game.status() {
            GameStatus::AwaitingPlayerMove => loop {
                if !read_line(input, &mut buf)? {
                    break None;
                }
                let command = match parse_command(&buf, game.player_hand().len()) {
                    Ok(command) => command,
                    Err(err) => {
                        debug!(%err, "Invalid command");
                        writeln!(output, "Invalid input. Please try again.")?;
                        continue;
                    }
                };
                match game.play_player_turn(command) {
                    Ok(outcome) => break Some((Participant::Player, outcome)),
                    Err(err @ IllegalMove::IllegalAttachment { .. }) => {
                        debug!(%err, "Illegal move");
                        writeln!(output, "Illegal move. Please try again.")?;
                    }
                    Err(err) => return Err(err.into()),
                }
            },
            GameStatus::AwaitingOpponentMove => {
                // Wait for Enter
                if read_line(input, &mut buf)? {
                    Some((Participant::Opponent, game.play_opponent_turn()?))
                } else {
                    None
                }
            }
            terminal => break Some(terminal),
        };

        match outcome {
            Some((participant, outcome)) => {
                if let Some(recorder) = &mut config.recorder {
                    recorder.store_turn(participant, outcome);
                }
                if game.is_stalled() {
                    debug!("Neither side can move");
                }
            }
            None => break None,
        }
    };

    if let Some(recorder) = &mut config.recorder {
        recorder.write_game_recording(result)?;
    }
    info!(?result, "Game ended");
    Ok(result)
}
