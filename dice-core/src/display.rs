//! The current result message shown above the dice grid.

use rand::rngs::ThreadRng;

use crate::dice::{Die, FaceSource, RollResult};

/// Holds the message for the most recent roll.
///
/// The message starts empty and is replaced on every roll; there is no
/// history.
#[derive(Debug, Clone)]
pub struct RollDisplay<S = ThreadRng> {
    source: S,
    message: String,
    last_roll: Option<RollResult>,
}

impl RollDisplay<ThreadRng> {
    pub fn new() -> Self {
        Self::with_source(rand::thread_rng())
    }
}

impl Default for RollDisplay<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: FaceSource> RollDisplay<S> {
    /// Create a display that rolls with the given face source.
    pub fn with_source(source: S) -> Self {
        Self {
            source,
            message: String::new(),
            last_roll: None,
        }
    }

    /// Roll `die`, replacing the current message.
    pub fn roll(&mut self, die: Die) -> RollResult {
        let result = die.roll_with(&mut self.source);
        self.message = result.message();
        self.last_roll = Some(result);
        result
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn last_roll(&self) -> Option<&RollResult> {
        self.last_roll.as_ref()
    }
}
