use crate::commands::giveaway::models::Entrant;
use crate::error::Result;

pub struct RollOptions<'a> {
    eligible: &'a [Entrant],
    winner_count: usize,
}

impl<'a> RollOptions<'a> {
    pub fn new(eligible: &'a [Entrant], winner_count: usize) -> Self {
        RollOptions {
            eligible,
            winner_count,
        }
    }

    // Returns the entrants left after the eligibility filter.
    pub fn eligible(&self) -> &'a [Entrant] {
        self.eligible
    }

    // Returns how many winners the organizer asked for.
    pub fn winner_count(&self) -> usize {
        self.winner_count
    }
}

pub trait SelectionStrategy: Send + Sync {
    // Returns the winners in according to the passed roll options.
    fn roll(&self, options: &RollOptions) -> Result<Vec<Entrant>>;
}
