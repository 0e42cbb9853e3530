use domino::{Command, GameStatus, Participant, PipPressure, Strategy};
use tracing::{debug, info};

use crate::game::new_game;
use crate::Config;

/// How a self-played game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    Finished(GameStatus),
    /// Both sides passed with an empty stock and the chain is not locked.
    Stalled,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct MatchScore {
    pub player_wins: usize,
    pub opponent_wins: usize,
    pub draws: usize,
    pub stalled: usize,
}

impl MatchScore {
    pub fn num_games(&self) -> usize {
        self.player_wins + self.opponent_wins + self.draws + self.stalled
    }
}

/// Plays one game where the heuristic also moves for the player.
pub fn self_play_game(config: &mut Config) -> anyhow::Result<GameResult> {
    let (seed, mut game) = new_game(config)?;
    debug!(seed, "New self-play game");

    let result = loop {
        let (participant, outcome) = match game.status().to_move() {
            Some(Participant::Player) => {
                let decision = PipPressure.decide(game.player_hand(), game.chain());
                (Participant::Player, game.play_player_turn(Command::from(decision))?)
            }
            Some(Participant::Opponent) => (Participant::Opponent, game.play_opponent_turn()?),
            None => break GameResult::Finished(game.status()),
        };
        if let Some(recorder) = &mut config.recorder {
            recorder.store_turn(participant, outcome);
        }
        if game.is_stalled() {
            break GameResult::Stalled;
        }
    };

    if let Some(recorder) = &mut config.recorder {
        let status = match result {
            GameResult::Finished(status) => Some(status),
            GameResult::Stalled => None,
        };
        recorder.write_game_recording(status)?;
    }
    Ok(result)
}

pub fn play_matchup(config: &mut Config, num_games: usize) -> anyhow::Result<MatchScore> {
    let mut score = MatchScore::default();
    for game_idx in 0..num_games {
        let result = self_play_game(config)?;
        debug!(game_idx, ?result);
        match result {
            GameResult::Finished(GameStatus::PlayerWins) => score.player_wins += 1,
            GameResult::Finished(GameStatus::OpponentWins) => score.opponent_wins += 1,
            GameResult::Finished(GameStatus::Draw) => score.draws += 1,
            GameResult::Finished(status) => {
                anyhow::bail!("Self-play stopped in non-terminal status {:?}", status)
            }
            GameResult::Stalled => score.stalled += 1,
        }
    }
    info!(?score, "Simulation finished");
    Ok(score)
}

pub fn print_match_score(score: &MatchScore) {
    let percentage = |n: usize| n as f32 / score.num_games().max(1) as f32 * 100.0;
    eprintln!(
        "End result after {} games:\n- {} ({:.1}%) won by the player side\n- {} ({:.1}%) won by the computer\n- {} ({:.1}%) locked draws\n- {} ({:.1}%) stalled",
        score.num_games(),
        score.player_wins,
        percentage(score.player_wins),
        score.opponent_wins,
        percentage(score.opponent_wins),
        score.draws,
        percentage(score.draws),
        score.stalled,
        percentage(score.stalled),
    );
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn every_game_is_counted() {
        let mut config = Config {
            rng: StdRng::seed_from_u64(5),
            recorder: None,
        };
        let score = play_matchup(&mut config, 25).unwrap();
        assert_eq!(score.num_games(), 25);
    }

    #[test]
    fn same_seed_same_results() {
        let run = |seed| {
            let mut config = Config {
                rng: StdRng::seed_from_u64(seed),
                recorder: None,
            };
            play_matchup(&mut config, 10).unwrap()
        };
        assert_eq!(run(99), run(99));
    }
}
