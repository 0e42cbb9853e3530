use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use domino::{GameStatus, Participant, Snapshot, TurnAction, TurnOutcome};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Writes one JSON file per game into a directory.
pub struct Recorder {
    num: usize,
    directory: PathBuf,
    current: Option<GameRecording>,
}

impl Recorder {
    pub fn new(directory: PathBuf) -> anyhow::Result<Self> {
        if !directory.is_dir() {
            anyhow::bail!("Directory '{}' does not exist", directory.display());
        }
        Ok(Self {
            num: 1,
            directory,
            current: None,
        })
    }

    /// Begins a new recording, dropping any unfinished one.
    pub fn start_game(&mut self, seed: u64, initial: Snapshot) {
        self.current = Some(GameRecording {
            seed,
            initial,
            turns: Vec::new(),
            result: None,
        });
    }

    pub fn store_turn(&mut self, participant: Participant, outcome: TurnOutcome) {
        if let Some(recording) = &mut self.current {
            recording.turns.push(RecordedTurn {
                participant,
                action: outcome.action,
                status: outcome.status,
            });
        }
    }

    /// Writes the current game to `game_<num>.json` and returns the path.
    ///
    /// `result` is `None` for a game that was abandoned or got stuck.
    pub fn write_game_recording(
        &mut self,
        result: Option<GameStatus>,
    ) -> anyhow::Result<Option<PathBuf>> {
        let Some(mut recording) = self.current.take() else {
            return Ok(None);
        };
        recording.result = result;
        let filepath = self.directory.join(format!("game_{:0>6}.json", self.num));
        let writer = BufWriter::new(File::create(&filepath)?);
        serde_json::to_writer_pretty(writer, &recording)?;
        debug!(path = %filepath.display(), "Wrote game recording");
        self.num += 1;
        Ok(Some(filepath))
    }
}

#[derive(Serialize, Deserialize)]
pub struct GameRecording {
    /// The seed the game was dealt from.
    pub seed: u64,
    pub initial: Snapshot,
    pub turns: Vec<RecordedTurn>,
    pub result: Option<GameStatus>,
}

#[derive(Serialize, Deserialize)]
pub struct RecordedTurn {
    pub participant: Participant,
    pub action: TurnAction,
    pub status: GameStatus,
}
