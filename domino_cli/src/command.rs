use domino::Command;

/// Error type for reading a command typed by the player.
#[derive(Debug, PartialEq, Eq)]
pub enum CommandError {
    /// Not an integer.
    Malformed,
    MultipleSigns,
    OutOfRange { magnitude: usize, hand_size: usize },
}

impl std::error::Error for CommandError {}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::Malformed => write!(f, "The command is not a whole number"),
            CommandError::MultipleSigns => write!(f, "The command has more than one minus sign"),
            CommandError::OutOfRange {
                magnitude,
                hand_size,
            } => write!(
                f,
                "There is no tile {} in a hand of {} tiles",
                magnitude, hand_size
            ),
        }
    }
}

/// Parses a line typed by the player into a [`Command`].
///
/// `3` plays the third tile on the right end, `-3` on the left end. `0` or a
/// blank line draws from the stock, or passes if it is empty.
pub fn parse_command(input: &str, hand_size: usize) -> Result<Command, CommandError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(Command::DrawOrPass);
    }
    if input.matches('-').count() > 1 {
        return Err(CommandError::MultipleSigns);
    }
    let (negative, digits) = match input.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, input),
    };
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(CommandError::Malformed);
    }
    let magnitude: usize = digits.parse().map_err(|_| CommandError::Malformed)?;
    if magnitude > hand_size {
        return Err(CommandError::OutOfRange {
            magnitude,
            hand_size,
        });
    }
    let k = magnitude as i64;
    Ok(Command::from_signed(if negative { -k } else { k }))
}
