use rand::seq::SliceRandom;
use rand::thread_rng;

use crate::commands::giveaway::models::Entrant;
use crate::commands::giveaway::strategies::base::{RollOptions, SelectionStrategy};
use crate::error::{Error, Result};

// Draws winners uniformly at random without replacement from the
// eligible entrants.
#[derive(Debug)]
pub struct RandomSelectStrategy;

impl RandomSelectStrategy {
    pub fn new() -> Self {
        RandomSelectStrategy {}
    }
}

impl SelectionStrategy for RandomSelectStrategy {
    fn roll(&self, options: &RollOptions) -> Result<Vec<Entrant>> {
        if options.winner_count() > options.eligible().len() {
            let message = "Not enough eligible entrants for the requested draw.".to_string();
            return Err(Error::Giveaway(message));
        }

        let mut rng = thread_rng();
        let winners = options
            .eligible()
            .choose_multiple(&mut rng, options.winner_count())
            .cloned()
            .collect::<Vec<Entrant>>();
        Ok(winners)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::commands::giveaway::models::Entrant;
    use crate::commands::giveaway::strategies::base::{RollOptions, SelectionStrategy};
    use crate::commands::giveaway::strategies::random::RandomSelectStrategy;
    use crate::error::Error;

    fn get_entrants(count: u64) -> Vec<Entrant> {
        (1..=count)
            .map(|user_id| Entrant::new(user_id, &format!("User-{}", user_id), false))
            .collect()
    }

    #[test]
    fn test_roll_returns_distinct_members_of_the_eligible_set() {
        let eligible = get_entrants(5);
        let options = RollOptions::new(&eligible, 3);

        let strategy = RandomSelectStrategy::new();
        let winners = strategy.roll(&options).unwrap();

        assert_eq!(winners.len(), 3);
        let winner_ids = winners
            .iter()
            .map(|winner| winner.get_user_id())
            .collect::<HashSet<u64>>();
        assert_eq!(winner_ids.len(), 3);
        for winner in winners.iter() {
            assert_eq!(eligible.contains(winner), true);
        }
    }

    #[test]
    fn test_roll_for_the_whole_eligible_set() {
        let eligible = get_entrants(4);
        let options = RollOptions::new(&eligible, 4);

        let strategy = RandomSelectStrategy::new();
        let winners = strategy.roll(&options).unwrap();

        let winner_ids = winners
            .iter()
            .map(|winner| winner.get_user_id())
            .collect::<HashSet<u64>>();
        let eligible_ids = eligible
            .iter()
            .map(|entrant| entrant.get_user_id())
            .collect::<HashSet<u64>>();
        assert_eq!(winner_ids, eligible_ids);
    }

    #[test]
    fn test_roll_for_a_single_winner() {
        let eligible = get_entrants(3);
        let options = RollOptions::new(&eligible, 1);

        let strategy = RandomSelectStrategy::new();
        let winners = strategy.roll(&options).unwrap();

        assert_eq!(winners.len(), 1);
        assert_eq!(eligible.contains(&winners[0]), true);
    }

    #[test]
    fn test_get_error_for_a_draw_bigger_than_the_eligible_set() {
        let eligible = get_entrants(2);
        let options = RollOptions::new(&eligible, 3);

        let strategy = RandomSelectStrategy::new();
        let result = strategy.roll(&options);

        assert_eq!(result.is_err(), true);
        assert_eq!(
            result.unwrap_err(),
            Error::Giveaway("Not enough eligible entrants for the requested draw.".to_string())
        );
    }
}
