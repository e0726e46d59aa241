//! Session driver: one prediction cycle per submission.
//!
//! ```text
//! Idle --submit--> Predicting --present--> Presenting --next submit / acknowledge--> Idle
//! ```
//!
//! The cycle blocks the calling thread for the configured delay plus the
//! classifier call. Nothing carries over between cycles.

use crate::encoder::encode;
use crate::errors::{MarshError, Result};
use crate::presenter::{Presentation, Presenter};
use marsh_classifier::Classifier;
use marsh_types::{CategoryId, FeatureVector, PatientInput};
use serde::Serialize;
use std::fmt;
use std::thread;
use std::time::Duration;
use tracing::{debug, error, info};

/// Default pause before a result is shown
pub const DEFAULT_PREDICT_DELAY: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SessionState {
    Idle,
    Predicting,
    Presenting,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionState::Idle => write!(f, "idle"),
            SessionState::Predicting => write!(f, "predicting"),
            SessionState::Presenting => write!(f, "presenting"),
        }
    }
}

/// Result of one completed cycle
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outcome {
    pub input: PatientInput,
    pub features: FeatureVector,
    pub category: CategoryId,
    pub presentation: Presentation,
}

pub struct Session<C> {
    classifier: C,
    presenter: Presenter,
    delay: Duration,
    state: SessionState,
}

impl<C: Classifier> Session<C> {
    pub fn new(classifier: C, presenter: Presenter) -> Self {
        Self {
            classifier,
            presenter,
            delay: DEFAULT_PREDICT_DELAY,
            state: SessionState::Idle,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Run a full encode → predict → present cycle for `input`.
    ///
    /// A session still showing a previous result returns to Idle first. On
    /// failure the session is left Idle.
    pub fn submit(&mut self, input: &PatientInput) -> Result<Outcome> {
        if self.state == SessionState::Presenting {
            self.acknowledge();
        }

        self.transition(SessionState::Predicting);
        match self.run_cycle(input) {
            Ok(outcome) => {
                info!(
                    category = %outcome.category,
                    headline = outcome.presentation.headline,
                    "Prediction complete"
                );
                self.transition(SessionState::Presenting);
                Ok(outcome)
            }
            Err(err) => {
                error!(%err, "Prediction cycle failed");
                self.transition(SessionState::Idle);
                Err(err)
            }
        }
    }

    /// Dismiss the current result
    pub fn acknowledge(&mut self) {
        if self.state == SessionState::Presenting {
            self.transition(SessionState::Idle);
        }
    }

    fn run_cycle(&self, input: &PatientInput) -> Result<Outcome> {
        let features = encode(input);
        debug!(?features, "Encoded patient input");

        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }

        let category = self
            .classifier
            .predict(&features)
            .map_err(MarshError::Prediction)?;
        let presentation = self.presenter.present(category)?;

        Ok(Outcome {
            input: *input,
            features,
            category,
            presentation,
        })
    }

    fn transition(&mut self, next: SessionState) {
        debug!(from = %self.state, to = %next, "Session transition");
        self.state = next;
    }
}
