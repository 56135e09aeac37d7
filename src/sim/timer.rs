//! Per-step countdown with a shrinking budget
//!
//! Every successful step grants a fresh allotment one decrement smaller than
//! the last, down to a floor. The shrinking budget is the sole difficulty
//! ramp. The host drives `tick`; the timer owns no callbacks.

use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Countdown states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimerPhase {
    Running,
    Expired,
}

/// Presentation bands for the remaining-time bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Urgency {
    /// More than 60% of the budget left
    Calm,
    /// Between 30% and 60% left
    Warning,
    /// Under 30% left
    Critical,
}

/// Countdown for the current step
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepTimer {
    /// Seconds left for the current step
    remaining: f64,
    /// Current per-step allotment
    budget: f64,
    phase: TimerPhase,
    /// The countdown only runs once armed (see `Tuning::arm_on_first_step`)
    armed: bool,
    tuning: Tuning,
}

impl StepTimer {
    pub fn new(tuning: Tuning) -> Self {
        Self {
            remaining: tuning.initial_budget,
            budget: tuning.initial_budget,
            phase: TimerPhase::Running,
            armed: !tuning.arm_on_first_step,
            tuning,
        }
    }

    pub fn remaining(&self) -> f64 {
        self.remaining
    }

    pub fn budget(&self) -> f64 {
        self.budget
    }

    pub fn phase(&self) -> TimerPhase {
        self.phase
    }

    pub fn expired(&self) -> bool {
        self.phase == TimerPhase::Expired
    }

    /// Remaining time as shown to the player (one decimal place)
    pub fn remaining_display(&self) -> f64 {
        (self.remaining * 10.0).round() / 10.0
    }

    /// Remaining fraction of the current budget (1.0 = fresh step)
    pub fn fraction(&self) -> f64 {
        if self.budget <= 0.0 {
            0.0
        } else {
            self.remaining / self.budget
        }
    }

    pub fn urgency(&self) -> Urgency {
        let fraction = self.fraction();
        if fraction < 0.3 {
            Urgency::Critical
        } else if fraction < 0.6 {
            Urgency::Warning
        } else {
            Urgency::Calm
        }
    }

    /// Advance the countdown by `dt` seconds.
    ///
    /// Returns true only on the call that crosses into `Expired`; further
    /// ticks are no-ops, so expiry signals exactly once per lineage.
    pub fn tick(&mut self, dt: f64) -> bool {
        if self.phase == TimerPhase::Expired || !self.armed {
            return false;
        }
        self.remaining -= dt;
        if self.remaining <= 0.0 {
            self.remaining = 0.0;
            self.phase = TimerPhase::Expired;
            return true;
        }
        false
    }

    /// Grant the next step's allotment after a successful step
    pub fn reset_on_success(&mut self) {
        self.armed = true;
        self.budget = (self.budget - self.tuning.decrement).max(self.tuning.floor);
        self.remaining = self.budget;
        self.phase = TimerPhase::Running;
    }

    /// Fresh session: full budget, countdown disarmed again if gated
    pub fn restart(&mut self) {
        self.budget = self.tuning.initial_budget;
        self.remaining = self.budget;
        self.phase = TimerPhase::Running;
        self.armed = !self.tuning.arm_on_first_step;
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn armed_timer() -> StepTimer {
        let mut timer = StepTimer::new(Tuning::default());
        timer.reset_on_success();
        timer
    }

    #[test]
    fn test_countdown_gated_until_first_success() {
        let mut timer = StepTimer::new(Tuning::default());
        assert!(!timer.tick(10.0));
        assert_eq!(timer.remaining(), timer.budget());
        assert_eq!(timer.phase(), TimerPhase::Running);
    }

    #[test]
    fn test_ungated_countdown_runs_immediately() {
        let tuning = Tuning {
            arm_on_first_step: false,
            ..Tuning::default()
        };
        let mut timer = StepTimer::new(tuning);
        assert!(!timer.tick(0.1));
        assert!(timer.remaining() < timer.budget());
    }

    #[test]
    fn test_expiry_signals_exactly_once() {
        let mut timer = armed_timer();
        let mut expiries = 0;
        for _ in 0..60 {
            if timer.tick(0.1) {
                expiries += 1;
            }
        }
        assert_eq!(expiries, 1);
        assert_eq!(timer.remaining(), 0.0);
        assert!(timer.expired());
    }

    #[test]
    fn test_remaining_clamps_at_zero() {
        let mut timer = armed_timer();
        assert!(timer.tick(100.0));
        assert_eq!(timer.remaining(), 0.0);
    }

    #[test]
    fn test_budget_clamps_at_floor() {
        let tuning = Tuning::default();
        let mut timer = StepTimer::new(tuning);
        // 3.0 - 250 * 0.01 lands exactly on the floor
        for _ in 0..250 {
            timer.reset_on_success();
        }
        assert!((timer.budget() - tuning.floor).abs() < 1e-9);
        for _ in 0..50 {
            timer.reset_on_success();
        }
        assert_eq!(timer.budget(), tuning.floor);
    }

    #[test]
    fn test_restart_restores_full_budget() {
        let mut timer = armed_timer();
        timer.tick(1.0);
        timer.reset_on_success();
        timer.restart();
        assert_eq!(timer.budget(), Tuning::default().initial_budget);
        assert_eq!(timer.remaining(), timer.budget());
        assert_eq!(timer.phase(), TimerPhase::Running);
        // Gated again until the next first success
        assert!(!timer.tick(10.0));
    }

    #[test]
    fn test_urgency_bands() {
        let mut timer = armed_timer();
        assert_eq!(timer.urgency(), Urgency::Calm);
        let budget = timer.budget();
        timer.tick(budget * 0.5);
        assert_eq!(timer.urgency(), Urgency::Warning);
        timer.tick(budget * 0.3);
        assert_eq!(timer.urgency(), Urgency::Critical);
    }

    proptest! {
        #[test]
        fn prop_budget_monotone_and_floored(steps in 0usize..2000) {
            let tuning = Tuning::default();
            let mut timer = StepTimer::new(tuning);
            let mut previous = timer.budget();
            for _ in 0..steps {
                timer.reset_on_success();
                prop_assert!(timer.budget() <= previous);
                prop_assert!(timer.budget() >= tuning.floor);
                previous = timer.budget();
            }
        }

        #[test]
        fn prop_remaining_never_negative(ticks in proptest::collection::vec(0.0f64..0.5, 0..100)) {
            let mut timer = armed_timer();
            for dt in ticks {
                timer.tick(dt);
                prop_assert!(timer.remaining() >= 0.0);
            }
        }
    }
}
