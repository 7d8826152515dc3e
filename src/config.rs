//! Configuration of the poker application.
//!
//! The configuration is read from an optional YAML file merged over the
//! defaults, then overridden by environment variables with the `POKER_` prefix.
//!
//! # Configuration File Format
//!
//! ```yaml
//! # HTTP server
//! server:
//!   address: "0.0.0.0"
//!   port: 5000
//!
//! # Blind timer
//! blinds:
//!   # Minutes added to the number of players to get the blind interval
//!   base_interval: 5
//!
//! # League store
//! store:
//!   # File name of the league, relative to the data directory
//!   file: "game.db.json"
//! ```
//!
//! # Environment Variable Overrides
//!
//! Sections and keys are separated by `__`:
//!
//! ```bash
//! export POKER_SERVER__PORT=8080
//! export POKER_BLINDS__BASE_INTERVAL=10
//! ```

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Yaml},
};
use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// HTTP server configuration
    pub server: Server,
    /// Blind timer configuration
    pub blinds: Blinds,
    /// League store configuration
    pub store: Store,
}

/// HTTP server configuration.
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Server {
    /// Address to listen on
    pub address: String,
    /// Port to listen on
    pub port: u16,
}

impl Default for Server {
    fn default() -> Self {
        Server {
            address: "0.0.0.0".to_owned(),
            port: 5000,
        }
    }
}

/// Blind timer configuration.
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Blinds {
    /// Minutes added to the number of players to get the blind interval.
    ///
    /// With the default of 5, a game of 3 players raises the blinds every 8
    /// minutes.
    pub base_interval: u64,
}

impl Default for Blinds {
    fn default() -> Self {
        Blinds {
            base_interval: crate::blinds::DEFAULT_BASE_INTERVAL_MINUTES,
        }
    }
}

/// League store configuration.
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Store {
    /// File name of the league, relative to the data directory
    pub file: String,
}

impl Default for Store {
    fn default() -> Self {
        Store {
            file: "game.db.json".to_owned(),
        }
    }
}

impl Config {
    /// Loads the configuration.
    ///
    /// Values are taken, from lowest to highest priority, from the defaults,
    /// the YAML file at `path` and the `POKER_` environment variables. A
    /// missing file leaves the defaults untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is not valid YAML or a value has the wrong
    /// type.
    pub fn load(path: Option<&str>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));

        if let Some(path) = path {
            figment = figment.merge(Yaml::file(path));
        }

        figment
            .merge(Env::prefixed("POKER_").split("__"))
            .extract()
    }

    /// Address the HTTP server listens on, as `address:port`.
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.address, self.server.port)
    }
}
