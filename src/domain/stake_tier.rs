//! Stake tier bucketing by buy-in.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StakeTier {
    Micro,
    Low,
    Mid,
    High,
}

impl StakeTier {
    /// Lower bounds are inclusive: 5.00 is Low, 22.00 is Mid, 109.00 is High.
    pub fn from_buyin(buyin: f64) -> Self {
        if buyin < 5.0 {
            StakeTier::Micro
        } else if buyin < 22.0 {
            StakeTier::Low
        } else if buyin < 109.0 {
            StakeTier::Mid
        } else {
            StakeTier::High
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StakeTier::Micro => "Micro (0–5)",
            StakeTier::Low => "Low (5–22)",
            StakeTier::Mid => "Mid (22–109)",
            StakeTier::High => "High (109+)",
        }
    }
}

impl fmt::Display for StakeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
