//! Core data models for Whack-a-Mole.
//! Plain types shared by the session, storage and the components.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::state::random::{random_integer, RandomSource};

/// Number of holes on the board (3x3).
pub const TARGET_COUNT: usize = 9;
pub const BOARD_COLUMNS: usize = 3;
/// Countdown cadence.
pub const TICK_MS: u32 = 1000;
pub const DEFAULT_DURATION_SECS: u32 = 10;
pub const MIN_DURATION_SECS: u32 = 5;
pub const MAX_DURATION_SECS: u32 = 60;

pub const EASY_DELAY_MS: u32 = 1500;
pub const NORMAL_DELAY_MS: u32 = 1000;
pub const HARD_DELAY_MIN_MS: u32 = 600;
pub const HARD_DELAY_MAX_MS: u32 = 1200;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("Invalid difficulty level: {0}")]
    InvalidDifficulty(String),
    #[error("Round duration {0}s is outside {}..={}", MIN_DURATION_SECS, MAX_DURATION_SECS)]
    InvalidDuration(u32),
    #[error("Browser storage unavailable: {0}")]
    Storage(String),
    #[error(transparent)]
    Settings(#[from] serde_json::Error),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Difficulty {
    Easy,
    Normal,
    #[default]
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard];

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Difficulty {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy" => Ok(Difficulty::Easy),
            "normal" => Ok(Difficulty::Normal),
            "hard" => Ok(Difficulty::Hard),
            other => Err(GameError::InvalidDifficulty(other.to_string())),
        }
    }
}

impl TryFrom<String> for Difficulty {
    type Error = GameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Pop-up duration in milliseconds. Also the gap until the next pop-up.
pub fn compute_delay<R: RandomSource + ?Sized>(difficulty: Difficulty, rng: &mut R) -> u32 {
    match difficulty {
        Difficulty::Easy => EASY_DELAY_MS,
        Difficulty::Normal => NORMAL_DELAY_MS,
        Difficulty::Hard => random_integer(rng, HARD_DELAY_MIN_MS, HARD_DELAY_MAX_MS),
    }
}

/// User-tunable settings, persisted in `localStorage` (never the score).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub difficulty: Difficulty,
    pub duration_secs: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            duration_secs: DEFAULT_DURATION_SECS,
        }
    }
}

impl GameConfig {
    pub fn validate(self) -> Result<Self, GameError> {
        if !(MIN_DURATION_SECS..=MAX_DURATION_SECS).contains(&self.duration_secs) {
            return Err(GameError::InvalidDuration(self.duration_secs));
        }
        Ok(self)
    }
}
