use crate::commands::giveaway::models::Entrant;
use crate::commands::giveaway::strategies::base::{RollOptions, SelectionStrategy};
use crate::error::{Error, Result};

// Forced winner override for tie-break adjudication or administrative
// corrections. The supplied list replaces the random draw entirely and is
// returned verbatim.
#[derive(Debug)]
pub struct ManualSelectStrategy {
    winners: Vec<Entrant>,
}

impl ManualSelectStrategy {
    pub fn new(winners: Vec<Entrant>) -> Self {
        ManualSelectStrategy { winners }
    }
}

impl SelectionStrategy for ManualSelectStrategy {
    fn roll(&self, _options: &RollOptions) -> Result<Vec<Entrant>> {
        if self.winners.is_empty() {
            let message = "The manual winner list can't be empty.".to_string();
            return Err(Error::Giveaway(message));
        }

        Ok(self.winners.clone())
    }
}
