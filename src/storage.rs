// Settings persistence in localStorage. Scores are never written.
use log::warn;
use web_sys::Storage;

use crate::model::{GameConfig, GameError};

const SETTINGS_KEY: &str = "wam_settings";

fn local_storage() -> Result<Storage, GameError> {
    let win = web_sys::window().ok_or_else(|| GameError::Storage("no window".into()))?;
    win.local_storage()
        .map_err(|e| GameError::Storage(format!("{e:?}")))?
        .ok_or_else(|| GameError::Storage("localStorage disabled".into()))
}

pub fn parse_config(raw: &str) -> Result<GameConfig, GameError> {
    let cfg: GameConfig = serde_json::from_str(raw)?;
    cfg.validate()
}

fn try_load_config() -> Result<Option<GameConfig>, GameError> {
    let store = local_storage()?;
    let raw = store
        .get_item(SETTINGS_KEY)
        .map_err(|e| GameError::Storage(format!("{e:?}")))?;
    raw.as_deref().map(parse_config).transpose()
}

/// Stored settings, or the defaults when missing or unreadable.
pub fn load_config() -> GameConfig {
    match try_load_config() {
        Ok(Some(cfg)) => cfg,
        Ok(None) => GameConfig::default(),
        Err(e) => {
            warn!("ignoring stored settings: {e}");
            GameConfig::default()
        }
    }
}

pub fn save_config(cfg: &GameConfig) -> Result<(), GameError> {
    let raw = serde_json::to_string(cfg)?;
    local_storage()?
        .set_item(SETTINGS_KEY, &raw)
        .map_err(|e| GameError::Storage(format!("{e:?}")))
}
