//! Visibility-triggered reveal state.
//!
//! A trigger starts [`Pending`](RevealState::Pending) and moves to
//! [`Triggered`](RevealState::Triggered) the first time enough of its
//! element is on screen. One-shot triggers never go back.

use serde::{Deserialize, Serialize};

use crate::animation::RevealConfig;

/// One intersection observation reported by the page
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Visibility {
    pub intersecting: bool,
    /// Fraction of the element inside the viewport, 0.0 to 1.0
    pub ratio: f64,
}

impl Visibility {
    pub fn hidden() -> Self {
        Self {
            intersecting: false,
            ratio: 0.0,
        }
    }

    pub fn partial(ratio: f64) -> Self {
        Self {
            intersecting: ratio > 0.0,
            ratio,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Pending,
    Triggered,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealTrigger {
    threshold: f64,
    once: bool,
    state: RevealState,
}

impl RevealTrigger {
    pub fn new(threshold: f64, once: bool) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            once,
            state: RevealState::Pending,
        }
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn is_revealed(&self) -> bool {
        self.state == RevealState::Triggered
    }

    /// No further observation can change the state
    pub fn is_settled(&self) -> bool {
        self.once && self.is_revealed()
    }

    /// Feed an observation. Returns `true` only on the observation that
    /// reveals the element.
    pub fn observe(&mut self, visibility: Visibility) -> bool {
        let crossed = visibility.intersecting && visibility.ratio >= self.threshold;

        match self.state {
            RevealState::Pending if crossed => {
                self.state = RevealState::Triggered;
                tracing::debug!(ratio = visibility.ratio, threshold = self.threshold, "reveal triggered");
                true
            }
            RevealState::Triggered if !self.once && !visibility.intersecting => {
                self.state = RevealState::Pending;
                false
            }
            _ => false,
        }
    }
}

impl From<&RevealConfig> for RevealTrigger {
    fn from(config: &RevealConfig) -> Self {
        Self::new(config.threshold, config.once)
    }
}
