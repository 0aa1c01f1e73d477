use crate::engine::config::GameConfig;
use crate::logic::level::{GameMode, PowerUp};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// What a single countdown tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickEffect {
    /// One second elapsed.
    Counted,
    /// Time ran out and the game must end.
    Expired,
    /// Survival: time ran out, a life is lost and the budget refills.
    LifeLost,
}

/// Pure countdown reducer: given the remaining seconds, returns the next
/// remaining value and the effect to apply.
#[must_use]
pub const fn reduce(remaining: u32, mode: GameMode, budget: u32) -> (u32, TickEffect) {
    if remaining <= 1 {
        match mode {
            GameMode::Classic | GameMode::TimeAttack => (0, TickEffect::Expired),
            GameMode::Survival => (budget, TickEffect::LifeLost),
        }
    } else {
        (remaining - 1, TickEffect::Counted)
    }
}

/// Tick period for a timer armed while `power_up` is active.
#[must_use]
pub const fn interval_for(power_up: Option<PowerUp>, config: &GameConfig) -> Duration {
    match power_up {
        Some(PowerUp::SlowTime) => config.slow_tick_interval(),
        _ => config.tick_interval(),
    }
}

/// Remaining lives. Only survival games have a finite budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Lives {
    Unlimited,
    Remaining(u32),
}

impl Lives {
    #[must_use]
    pub const fn for_mode(mode: GameMode, survival_lives: u32) -> Self {
        match mode {
            GameMode::Survival => Self::Remaining(survival_lives),
            GameMode::Classic | GameMode::TimeAttack => Self::Unlimited,
        }
    }

    /// Takes one life. Returns true once none are left.
    pub fn lose_one(&mut self) -> bool {
        match self {
            Self::Unlimited => false,
            Self::Remaining(n) => {
                *n = n.saturating_sub(1);
                *n == 0
            }
        }
    }

    #[must_use]
    pub const fn count(self) -> Option<u32> {
        match self {
            Self::Unlimited => None,
            Self::Remaining(n) => Some(n),
        }
    }
}
