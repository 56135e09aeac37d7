//! High score leaderboard
//!
//! Local top-10 climbs, persisted to LocalStorage on the web build.

use serde::{Deserialize, Serialize};

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// One recorded climb
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    /// Steps climbed
    pub score: u32,
    /// Unix timestamp (ms) when achieved
    pub timestamp: f64,
}

/// High score leaderboard, sorted best climb first
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "step_up_highscores";

    pub fn new() -> Self {
        Self::default()
    }

    /// Does a climb of `score` steps make the board?
    pub fn qualifies(&self, score: u32) -> bool {
        if score == 0 {
            return false;
        }
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        self.entries.last().map(|e| score > e.score).unwrap_or(true)
    }

    /// Record a climb. Returns the rank achieved (1-indexed) or None if it
    /// didn't qualify.
    pub fn record(&mut self, score: u32, timestamp: f64) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }

        self.entries.push(HighScoreEntry { score, timestamp });
        // Stable sort keeps earlier climbs ahead of later equal ones
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
        self.entries.truncate(MAX_HIGH_SCORES);

        self.entries
            .iter()
            .position(|e| e.score == score && e.timestamp == timestamp)
            .map(|i| i + 1)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Best climb so far (if any)
    pub fn top_score(&self) -> Option<u32> {
        self.entries.first().map(|e| e.score)
    }

    /// Load high scores from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(scores) = serde_json::from_str::<HighScores>(&json) {
                    log::info!("Loaded {} high scores", scores.entries.len());
                    return scores;
                }
            }
        }

        log::info!("No high scores found, starting fresh");
        Self::new()
    }

    /// Save high scores to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("High scores saved ({} entries)", self.entries.len());
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::new()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

/// Format a timestamp as a relative date string
#[cfg(target_arch = "wasm32")]
pub fn format_date(timestamp: f64) -> String {
    let diff_secs = (js_sys::Date::now() - timestamp) / 1000.0;
    let diff_mins = diff_secs / 60.0;
    let diff_hours = diff_mins / 60.0;
    let diff_days = diff_hours / 24.0;

    if diff_days >= 1.0 {
        let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(timestamp));
        format!(
            "{}/{}/{}",
            date.get_month() + 1,
            date.get_date(),
            date.get_full_year() % 100
        )
    } else if diff_hours >= 1.0 {
        format!("{}h ago", diff_hours.floor() as i32)
    } else if diff_mins >= 1.0 {
        format!("{}m ago", diff_mins.floor() as i32)
    } else {
        "Just now".to_string()
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn format_date(_timestamp: f64) -> String {
    "N/A".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_score_never_qualifies() {
        let scores = HighScores::new();
        assert!(!scores.qualifies(0));
    }

    #[test]
    fn test_record_sorts_descending() {
        let mut scores = HighScores::new();
        assert_eq!(scores.record(5, 1.0), Some(1));
        assert_eq!(scores.record(12, 2.0), Some(1));
        assert_eq!(scores.record(8, 3.0), Some(2));
        assert_eq!(scores.top_score(), Some(12));
        assert_eq!(scores.entries[2].score, 5);
    }

    #[test]
    fn test_board_caps_at_ten() {
        let mut scores = HighScores::new();
        for i in 1..=15u32 {
            scores.record(i, f64::from(i));
        }
        assert_eq!(scores.entries.len(), MAX_HIGH_SCORES);
        // The lowest survivors are 6..=15
        assert_eq!(scores.entries.last().unwrap().score, 6);
        assert!(!scores.qualifies(5));
        assert!(scores.qualifies(7));
    }

    #[test]
    fn test_earlier_climb_wins_ties() {
        let mut scores = HighScores::new();
        scores.record(9, 1.0);
        assert_eq!(scores.record(9, 2.0), Some(2));
        assert_eq!(scores.entries[0].timestamp, 1.0);
    }
}
