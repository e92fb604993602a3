// Swap Router – Plans the swaps for a sequence of desired interactions
// Copyright (C) 2026  Neil Roberts
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

//! Tuning knobs for the router, read from a JSON file.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    Serde(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    /// How many levels deeper than the closest candidate the search
    /// keeps collecting candidates.
    pub extra_levels: i64,
    /// Replay every swap after each interaction and compare the
    /// result against the permutation.
    pub verify_replay: bool,
}

impl Default for RouterConfig {
    fn default() -> RouterConfig {
        RouterConfig {
            extra_levels: 0,
            verify_replay: true,
        }
    }
}

impl RouterConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<RouterConfig, ConfigError> {
        let data = std::fs::read(path)?;
        RouterConfig::from_slice(&data)
    }

    pub fn from_slice(data: &[u8]) -> Result<RouterConfig, ConfigError> {
        Ok(serde_json::from_slice(data)?)
    }

    /// The search tolerance, with negative values treated as zero.
    pub fn extra_levels(&self) -> usize {
        self.extra_levels.max(0) as usize
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn defaults() {
        assert_eq!(
            RouterConfig::from_slice(b"{}").unwrap(),
            RouterConfig::default(),
        );

        let config = RouterConfig::from_slice(b"{\"extra_levels\": 2}")
            .unwrap();
        assert_eq!(config.extra_levels(), 2);
        assert!(config.verify_replay);
    }

    #[test]
    fn negative_levels() {
        let config = RouterConfig {
            extra_levels: -3,
            verify_replay: false,
        };

        assert_eq!(config.extra_levels(), 0);
    }

    #[test]
    fn bad_levels() {
        assert!(matches!(
            RouterConfig::from_slice(b"{\"extra_levels\": 1.5}"),
            Err(ConfigError::Serde(_)),
        ));
        assert!(matches!(
            RouterConfig::from_slice(b"{\"extra_levels\": \"two\"}"),
            Err(ConfigError::Serde(_)),
        ));
    }

    #[test]
    fn missing_file() {
        assert!(matches!(
            RouterConfig::load("/nonexistent/router-config.json"),
            Err(ConfigError::Io(_)),
        ));
    }
}
