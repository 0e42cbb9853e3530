use domino::{render_line_of_tiles, GameStatus, Snapshot};

pub fn status_line(status: GameStatus) -> &'static str {
    match status {
        GameStatus::AwaitingPlayerMove => {
            "Status: It's your turn to make a move. Enter your command."
        }
        GameStatus::AwaitingOpponentMove => {
            "Status: Computer is about to make a move. Press Enter to continue..."
        }
        GameStatus::PlayerWins => "Status: The game is over. You won!",
        GameStatus::OpponentWins => "Status: The game is over. The computer won!",
        GameStatus::Draw => "Status: The game is over. It's a draw!",
    }
}

/// Renders the whole table as the player sees it.
pub fn render_interface(snapshot: &Snapshot) -> String {
    let mut result = "=".repeat(70);
    result += &format!("\nStock size: {}", snapshot.stock_size);
    result += &format!("\nComputer pieces: {}\n\n", snapshot.opponent_hand_size);
    result += &render_line_of_tiles(&snapshot.chain);
    result += "\n\nYour pieces:";
    for (i, tile) in snapshot.player_hand.iter().enumerate() {
        result += &format!("\n{}:{}", i + 1, tile);
    }
    result += "\n\n";
    result += status_line(snapshot.status);
    result
}
