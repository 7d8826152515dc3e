//! League data structures.

use serde::{Deserialize, Serialize};

/// A player of the league with the number of games won.
///
/// Field names are capitalised in JSON to stay readable by existing league files:
///
/// ```json
/// { "Name": "Cleo", "Wins": 32 }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Player {
    /// Player name, unique in the league
    pub name: String,
    /// Number of games won
    pub wins: u32,
}

impl Player {
    pub fn new(name: &str, wins: u32) -> Self {
        Player {
            name: name.to_string(),
            wins,
        }
    }
}

/// Ordered list of league players.
pub type League = Vec<Player>;

/// Returns the player with the given name.
pub fn find<'a>(league: &'a [Player], name: &str) -> Option<&'a Player> {
    league.iter().find(|player| player.name == name)
}

/// Sorts a league by wins, highest first.
///
/// The sort is stable so players with the same number of wins keep their order.
pub fn sort_by_wins(league: &mut League) {
    league.sort_by(|a, b| b.wins.cmp(&a.wins));
}
