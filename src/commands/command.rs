//! Parsing of player input.
//!
//! Both front-ends read the same two inputs: a number of players, then a
//! winner announcement of the form `<name> wins`.

use log::debug;

use crate::commands::CommandParseError;

/// Suffix closing a winner announcement.
const WINS_SUFFIX: &str = " wins";

/// Parses the number of players.
///
/// Surrounding whitespace, including the line ending, is ignored. The sign is
/// kept so the game can reject non-positive counts itself.
///
/// # Errors
///
/// Returns [`CommandParseError::BadPlayerCount`] if the input is not an integer.
///
/// # Examples
///
/// ```
/// # use poker::commands::parse_player_count;
/// assert_eq!(parse_player_count("7\n").unwrap(), 7);
/// ```
pub fn parse_player_count(input: &str) -> Result<i64, CommandParseError> {
    let player_count = input
        .trim()
        .parse::<i64>()
        .map_err(|_| CommandParseError::BadPlayerCount)?;

    debug!("parsed player count {}", player_count);

    Ok(player_count)
}

/// Extracts the winner name from a `<name> wins` announcement.
///
/// # Errors
///
/// Returns [`CommandParseError::BadWinner`] if the announcement does not end
/// with ` wins` or the name is empty.
///
/// # Examples
///
/// ```
/// # use poker::commands::extract_winner;
/// assert_eq!(extract_winner("Chris wins").unwrap(), "Chris");
/// ```
pub fn extract_winner(input: &str) -> Result<String, CommandParseError> {
    let winner = input
        .trim()
        .strip_suffix(WINS_SUFFIX)
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .ok_or(CommandParseError::BadWinner)?;

    debug!("parsed winner {}", winner);

    Ok(winner.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_player_count() {
        assert!(matches!(parse_player_count("5"), Ok(5)));
    }

    #[test]
    fn test_parse_player_count_with_line_ending() {
        assert!(matches!(parse_player_count(" 8\r\n"), Ok(8)));
    }

    #[test]
    fn test_parse_player_count_keeps_sign() {
        assert!(matches!(parse_player_count("-1"), Ok(-1)));
    }

    #[test]
    fn test_parse_player_count_non_numeric() {
        assert!(matches!(
            parse_player_count("Non Numeric"),
            Err(CommandParseError::BadPlayerCount)
        ));
    }

    #[test]
    fn test_parse_player_count_empty() {
        assert!(matches!(
            parse_player_count(""),
            Err(CommandParseError::BadPlayerCount)
        ));
    }

    #[test]
    fn test_extract_winner() {
        assert_eq!(extract_winner("Chris wins").unwrap(), "Chris");
    }

    #[test]
    fn test_extract_winner_with_line_ending() {
        assert_eq!(extract_winner("Cleo wins\n").unwrap(), "Cleo");
    }

    #[test]
    fn test_extract_winner_with_spaces_in_name() {
        assert_eq!(extract_winner("Ada Lovelace wins").unwrap(), "Ada Lovelace");
    }

    #[test]
    fn test_extract_winner_without_suffix() {
        assert!(matches!(
            extract_winner("Chris Incorrectly Entered String"),
            Err(CommandParseError::BadWinner)
        ));
    }

    #[test]
    fn test_extract_winner_suffix_in_the_middle() {
        assert!(matches!(
            extract_winner("Chris wins the game"),
            Err(CommandParseError::BadWinner)
        ));
    }

    #[test]
    fn test_extract_winner_without_name() {
        assert!(matches!(
            extract_winner(" wins"),
            Err(CommandParseError::BadWinner)
        ));
    }
}
