//! Difficulty tuning
//!
//! The timer knobs that shape a session, persisted separately from
//! leaderboard data in LocalStorage.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rejected tuning combinations
#[derive(Debug, Error, PartialEq)]
pub enum TuningError {
    #[error("initial budget must be positive (got {0})")]
    NonPositiveBudget(f64),
    #[error("budget floor must be positive (got {0})")]
    NonPositiveFloor(f64),
    #[error("budget floor {floor} exceeds initial budget {budget}")]
    FloorAboveBudget { floor: f64, budget: f64 },
    #[error("decrement must be non-negative (got {0})")]
    NegativeDecrement(f64),
    #[error("tick interval must be non-zero")]
    ZeroTickInterval,
}

/// Gameplay tuning knobs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    /// Seconds allotted for the first step
    pub initial_budget: f64,
    /// Seconds shaved off the allotment per successful step
    pub decrement: f64,
    /// The allotment never shrinks below this
    pub floor: f64,
    /// Suggested host tick cadence in milliseconds; any cadence at or below
    /// the reference 100ms is observably equivalent
    pub tick_interval_ms: u32,
    /// Hold the countdown until the first successful step
    pub arm_on_first_step: bool,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            initial_budget: 3.0,
            decrement: 0.01,
            floor: 0.5,
            tick_interval_ms: 100,
            arm_on_first_step: true,
        }
    }
}

impl Tuning {
    pub fn validate(&self) -> Result<(), TuningError> {
        if self.initial_budget <= 0.0 {
            return Err(TuningError::NonPositiveBudget(self.initial_budget));
        }
        if self.floor <= 0.0 {
            return Err(TuningError::NonPositiveFloor(self.floor));
        }
        if self.floor > self.initial_budget {
            return Err(TuningError::FloorAboveBudget {
                floor: self.floor,
                budget: self.initial_budget,
            });
        }
        if self.decrement < 0.0 {
            return Err(TuningError::NegativeDecrement(self.decrement));
        }
        if self.tick_interval_ms == 0 {
            return Err(TuningError::ZeroTickInterval);
        }
        Ok(())
    }

    /// Host tick interval in seconds
    pub fn tick_interval_secs(&self) -> f64 {
        f64::from(self.tick_interval_ms) / 1000.0
    }

    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "step_up_tuning";

    /// Load tuning from LocalStorage (WASM only); invalid or missing
    /// entries fall back to the defaults
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(tuning) = serde_json::from_str::<Tuning>(&json) {
                    if tuning.validate().is_ok() {
                        log::info!("Loaded tuning from LocalStorage");
                        return tuning;
                    }
                    log::warn!("Stored tuning invalid, using defaults");
                }
            }
        }

        log::info!("Using default tuning");
        Self::default()
    }

    /// Save tuning to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Tuning saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}
