use core::time::Duration;

use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - Inactive -> Active (activation)
/// - Active -> Active (re-activation restarts the countdown, tick)
/// - Active -> Inactive (countdown reaches zero, cancel)
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum EchoState {
    Inactive,
    Active { remaining: Duration },
}

impl Default for EchoState {
    fn default() -> Self {
        Self::Inactive
    }
}

/// Outcome of advancing the echo countdown.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum EchoTick {
    /// Nothing was counting down.
    Idle,
    Running,
    Expired,
}

impl EchoTick {
    pub const fn has_update(self) -> bool {
        match self {
            Self::Idle => false,
            Self::Running => true,
            Self::Expired => true,
        }
    }
}

/// Timed vision boost triggered by stepping on echo tiles.
///
/// The bonus is derived from the state, so it drops to zero in the same
/// update that brings the remaining time to zero.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EchoPulse {
    duration: Duration,
    bonus: Distance,
    state: EchoState,
}

impl EchoPulse {
    pub fn new(duration: Duration, bonus: Distance) -> Self {
        Self {
            duration,
            bonus,
            state: EchoState::Inactive,
        }
    }

    pub fn state(&self) -> EchoState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, EchoState::Active { .. })
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn remaining(&self) -> Duration {
        match self.state {
            EchoState::Inactive => Duration::ZERO,
            EchoState::Active { remaining } => remaining,
        }
    }

    /// Extra vision radius currently granted.
    pub fn bonus(&self) -> Distance {
        if self.is_active() { self.bonus } else { 0 }
    }

    /// Starts a fresh countdown, discarding whatever was left of the previous one.
    pub fn activate(&mut self) {
        log::debug!("echo pulse for {:?}", self.duration);
        self.state = EchoState::Active {
            remaining: self.duration,
        };
    }

    pub fn tick(&mut self, delta: Duration) -> EchoTick {
        let EchoState::Active { remaining } = self.state else {
            return EchoTick::Idle;
        };

        let remaining = remaining.saturating_sub(delta);
        if remaining.is_zero() {
            log::debug!("echo pulse expired");
            self.state = EchoState::Inactive;
            EchoTick::Expired
        } else {
            self.state = EchoState::Active { remaining };
            EchoTick::Running
        }
    }

    pub fn cancel(&mut self) {
        self.state = EchoState::Inactive;
    }
}
