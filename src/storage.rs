use arrow_core::engine::config::GameConfig;
use arrow_core::engine::Clock;
use arrow_core::logic::high_scores::{HighScoreList, ScoreRecord};
use arrow_core::store::{HighScoreStore, StoreError};

/// Optional JSON override for [`GameConfig`].
pub const CONFIG_KEY: &str = "arrowKeyConfig";

fn local_storage() -> Result<web_sys::Storage, StoreError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StoreError::Unavailable)
}

/// High-score slot in `window.localStorage`.
pub struct LocalStorageStore {
    key: String,
    capacity: usize,
}

impl LocalStorageStore {
    #[must_use]
    pub fn new(key: &str, capacity: usize) -> Self {
        Self {
            key: key.to_string(),
            capacity,
        }
    }
}

impl HighScoreStore for LocalStorageStore {
    fn load(&self) -> Result<Vec<ScoreRecord>, StoreError> {
        let storage = local_storage()?;
        match storage.get_item(&self.key) {
            Ok(Some(json)) => HighScoreList::from_json(&json, self.capacity)
                .map(HighScoreList::into_records)
                .map_err(|e| StoreError::Malformed(e.to_string())),
            Ok(None) => Ok(Vec::new()),
            Err(_) => Err(StoreError::Unavailable),
        }
    }

    fn save(&mut self, records: &[ScoreRecord]) -> Result<(), StoreError> {
        let json = HighScoreList::from_records(records.to_vec(), self.capacity)
            .to_json()
            .map_err(|e| StoreError::Write(e.to_string()))?;
        local_storage()?
            .set_item(&self.key, &json)
            .map_err(|e| StoreError::Write(format!("{e:?}")))
    }
}

pub struct BrowserClock;

impl Clock for BrowserClock {
    fn now_iso(&self) -> String {
        js_sys::Date::new_0().to_iso_string().into()
    }
}

/// Reads the config override, falling back to defaults when it is absent
/// or unreadable.
#[must_use]
pub fn load_config() -> GameConfig {
    let stored = local_storage()
        .ok()
        .and_then(|s| s.get_item(CONFIG_KEY).ok().flatten());
    let Some(json) = stored else {
        return GameConfig::default();
    };
    match GameConfig::load_from_json(&json) {
        Ok(config) => {
            log::info!("loaded config override from {CONFIG_KEY}");
            config
        }
        Err(e) => {
            log::warn!("ignoring invalid {CONFIG_KEY}: {e}");
            GameConfig::default()
        }
    }
}

/// Formats an ISO timestamp as a locale date, or echoes it back when the
/// browser cannot parse it.
#[must_use]
pub fn local_date(iso: &str) -> String {
    let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_str(iso));
    if date.get_time().is_nan() {
        return iso.to_string();
    }
    date.to_locale_date_string("default", &wasm_bindgen::JsValue::UNDEFINED)
        .into()
}
