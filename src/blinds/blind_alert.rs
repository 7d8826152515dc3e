//! Blind alert values and the blind schedule calculator.
//!
//! This module provides the [`BlindAlert`] struct and the [`calculate`] function
//! that turns a number of players into the ordered list of blind levels for a
//! Texas Hold'em session.

use std::{fmt, time::Duration};

use thiserror::Error;

/// Blind amounts in emission order.
pub const BLIND_AMOUNTS: [u32; 11] = [100, 200, 300, 400, 500, 600, 800, 1000, 2000, 4000, 8000];

/// Default base interval in minutes between two blind levels.
pub const DEFAULT_BASE_INTERVAL_MINUTES: u64 = 5;

/// A timed blind level.
///
/// The `delay` is relative to the session start, not an absolute instant.
///
/// # Examples
///
/// ```
/// # use std::time::Duration;
/// # use poker::blinds::BlindAlert;
/// let alert = BlindAlert { delay: Duration::from_secs(600), amount: 200 };
/// assert_eq!(alert.message(), "Blind is now 200\n");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlindAlert {
    /// Time elapsed since the session start before this level applies
    pub delay: Duration,
    /// Blind amount in chips
    pub amount: u32,
}

impl BlindAlert {
    /// Text sent to the sink when the alert fires.
    pub fn message(&self) -> String {
        format!("Blind is now {}\n", self.amount)
    }
}

impl fmt::Display for BlindAlert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} chips at {:?}", self.amount, self.delay)
    }
}

/// The player count given to the calculator is not positive, or so large
/// that the blind delays do not fit in a [`Duration`].
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid player count {0}, a game needs at least one player and a representable blind interval")]
pub struct InvalidPlayerCount(pub i64);

/// Computes the blind schedule for a game.
///
/// The first level applies immediately, each following level comes one blind
/// interval later. The interval is `base_interval_minutes + player_count`
/// minutes, so larger tables get longer levels.
///
/// # Arguments
///
/// * `player_count` - Number of players at the table
/// * `base_interval_minutes` - Minutes added to the player count to get the interval
///
/// # Errors
///
/// Returns [`InvalidPlayerCount`] if `player_count` is zero or negative, or if
/// the delay of the last level overflows.
///
/// # Examples
///
/// ```
/// # use poker::blinds::calculate;
/// let schedule = calculate(5, 5).unwrap();
/// assert_eq!(schedule[0].amount, 100);
/// assert_eq!(schedule[1].delay, std::time::Duration::from_secs(10 * 60));
/// ```
pub fn calculate(
    player_count: i64,
    base_interval_minutes: u64,
) -> Result<Vec<BlindAlert>, InvalidPlayerCount> {
    let invalid = || InvalidPlayerCount(player_count);

    let players = u64::try_from(player_count)
        .ok()
        .filter(|&players| players > 0)
        .ok_or_else(invalid)?;

    let interval = players
        .checked_add(base_interval_minutes)
        .and_then(|minutes| minutes.checked_mul(60))
        .map(Duration::from_secs)
        .ok_or_else(invalid)?;

    // Delays grow with the level, so the last one bounds them all
    let last_level = BLIND_AMOUNTS.len() as u32 - 1;
    interval.checked_mul(last_level).ok_or_else(invalid)?;

    Ok(BLIND_AMOUNTS
        .iter()
        .zip(0u32..)
        .map(|(&amount, level)| BlindAlert {
            delay: interval * level,
            amount,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_five_players() {
        let schedule = calculate(5, DEFAULT_BASE_INTERVAL_MINUTES).unwrap();

        let expected: Vec<BlindAlert> = [
            (0, 100),
            (10, 200),
            (20, 300),
            (30, 400),
            (40, 500),
            (50, 600),
            (60, 800),
            (70, 1000),
            (80, 2000),
            (90, 4000),
            (100, 8000),
        ]
        .into_iter()
        .map(|(minutes, amount)| BlindAlert {
            delay: Duration::from_secs(minutes * 60),
            amount,
        })
        .collect();

        assert_eq!(schedule, expected);
    }

    #[test]
    fn test_calculate_seven_players() {
        let schedule = calculate(7, DEFAULT_BASE_INTERVAL_MINUTES).unwrap();

        assert_eq!(schedule[0].delay, Duration::ZERO);
        assert_eq!(schedule[1].delay, Duration::from_secs(12 * 60));
        assert_eq!(schedule[2].delay, Duration::from_secs(24 * 60));
    }

    #[test]
    fn test_calculate_is_strictly_increasing() {
        for player_count in 1..=20 {
            let schedule = calculate(player_count, DEFAULT_BASE_INTERVAL_MINUTES).unwrap();
            assert!(!schedule.is_empty());
            assert!(schedule.windows(2).all(|w| w[0].delay < w[1].delay));
            assert!(schedule.windows(2).all(|w| w[0].amount <= w[1].amount));
        }
    }

    #[test]
    fn test_calculate_with_zero_base_interval() {
        let schedule = calculate(1, 0).unwrap();
        assert_eq!(schedule[1].delay, Duration::from_secs(60));
        assert!(schedule.windows(2).all(|w| w[0].delay < w[1].delay));
    }

    #[test]
    fn test_calculate_rejects_zero_players() {
        assert_eq!(calculate(0, 5), Err(InvalidPlayerCount(0)));
    }

    #[test]
    fn test_calculate_rejects_negative_players() {
        assert_eq!(calculate(-3, 5), Err(InvalidPlayerCount(-3)));
    }

    #[test]
    fn test_calculate_rejects_overflowing_player_count() {
        assert_eq!(calculate(i64::MAX, 5), Err(InvalidPlayerCount(i64::MAX)));
    }

    #[test]
    fn test_calculate_rejects_overflowing_base_interval() {
        assert_eq!(calculate(5, u64::MAX), Err(InvalidPlayerCount(5)));
        assert_eq!(calculate(1, u64::MAX / 60), Err(InvalidPlayerCount(1)));
    }

    #[test]
    fn test_calculate_accepts_large_player_count() {
        let schedule = calculate(1_000_000, 5).unwrap();

        assert_eq!(schedule[1].delay, Duration::from_secs(1_000_005 * 60));
        assert!(schedule.windows(2).all(|w| w[0].delay < w[1].delay));
    }

    #[test]
    fn test_calculate_is_deterministic() {
        assert_eq!(calculate(4, 5).unwrap(), calculate(4, 5).unwrap());
    }

    #[test]
    fn test_message() {
        let alert = BlindAlert {
            delay: Duration::ZERO,
            amount: 4000,
        };
        assert_eq!(alert.message(), "Blind is now 4000\n");
    }

    #[test]
    fn test_display() {
        let alert = BlindAlert {
            delay: Duration::from_secs(60),
            amount: 100,
        };
        assert_eq!(alert.to_string(), "100 chips at 60s");
    }
}
