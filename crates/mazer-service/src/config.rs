//! Service configuration.

use std::time::Duration;

use mazer_gen::{DEFAULT_COLS, DEFAULT_MAX_CELLS, DEFAULT_OPEN_PCT, DEFAULT_ROWS};
use mazer_paths::Speed;
use serde::{Deserialize, Serialize};

/// Delay between two step events for each named speed, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeedDelays {
    pub slow: u64,
    pub medium: u64,
    pub fast: u64,
}

impl SpeedDelays {
    /// No pacing at all, for tests and batch runs.
    pub const fn none() -> Self {
        Self {
            slow: 0,
            medium: 0,
            fast: 0,
        }
    }

    pub fn delay(&self, speed: Speed) -> Duration {
        let ms = match speed {
            Speed::Slow => self.slow,
            Speed::Medium => self.medium,
            Speed::Fast => self.fast,
        };
        Duration::from_millis(ms)
    }
}

impl Default for SpeedDelays {
    fn default() -> Self {
        let ms = |s: Speed| s.delay().as_millis() as u64;
        Self {
            slow: ms(Speed::Slow),
            medium: ms(Speed::Medium),
            fast: ms(Speed::Fast),
        }
    }
}

/// Configuration for creating a [`MazeService`](crate::MazeService).
///
/// Every field is optional in JSON; missing ones take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Rows of a generated maze when the request gives none.
    pub default_rows: i32,
    /// Columns of a generated maze when the request gives none.
    pub default_cols: i32,
    /// Probability that the generator opens a cell.
    pub open_pct: f64,
    /// Largest maze, in cells, a generate request may ask for.
    pub max_cells: usize,
    pub pacing: SpeedDelays,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            default_rows: DEFAULT_ROWS,
            default_cols: DEFAULT_COLS,
            open_pct: DEFAULT_OPEN_PCT,
            max_cells: DEFAULT_MAX_CELLS,
            pacing: SpeedDelays::default(),
        }
    }
}

impl ServiceConfig {
    /// Parse a JSON configuration document.
    pub fn from_json(s: &str) -> serde_json::Result<Self> {
        serde_json::from_str(s)
    }

    /// The same configuration without pacing delays.
    pub fn without_delays(mut self) -> Self {
        self.pacing = SpeedDelays::none();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_pacing() {
        let cfg = ServiceConfig::default();
        assert_eq!(cfg.default_rows, 15);
        assert_eq!(cfg.default_cols, 15);
        assert_eq!(cfg.pacing.delay(Speed::Slow), Duration::from_millis(500));
        assert_eq!(cfg.pacing.delay(Speed::Medium), Duration::from_millis(200));
        assert_eq!(cfg.pacing.delay(Speed::Fast), Duration::from_millis(50));
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg = ServiceConfig::from_json(r#"{"default_rows": 8, "pacing": {"fast": 5}}"#).unwrap();
        assert_eq!(cfg.default_rows, 8);
        assert_eq!(cfg.default_cols, 15);
        assert_eq!(cfg.max_cells, DEFAULT_MAX_CELLS);
        assert_eq!(cfg.pacing.fast, 5);
        assert_eq!(cfg.pacing.slow, 500);
    }

    #[test]
    fn empty_json_is_default() {
        assert_eq!(ServiceConfig::from_json("{}").unwrap(), ServiceConfig::default());
        assert!(ServiceConfig::from_json("[1]").is_err());
    }

    #[test]
    fn without_delays() {
        let cfg = ServiceConfig::default().without_delays();
        assert_eq!(cfg.pacing.delay(Speed::Slow), Duration::ZERO);
    }
}
