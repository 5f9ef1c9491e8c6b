use std::sync::Arc;

use tracing::{error, info};

use crate::commands::giveaway::collector::EntryCollector;
use crate::commands::giveaway::formatters::{
    format_remaining_time, AnnouncementFormatter, DefaultAnnouncementFormatter,
};
use crate::commands::giveaway::models::{Entrant, Giveaway, MessageRef, Outcome, Phase};
use crate::commands::giveaway::strategies::{
    ManualSelectStrategy, RandomSelectStrategy, RollOptions, SelectionStrategy,
};
use crate::commands::giveaway::ticker::{Ticker, WallClockTicker};
use crate::error::{Error, Result};

// The state machine driving one giveaway from the announcement to the
// final outcome: countdown, entry collection at expiry, eligibility
// filtering and winner selection.
pub struct GiveawayEngine {
    collector: Arc<Box<dyn EntryCollector>>,
    formatter: Arc<Box<dyn AnnouncementFormatter + Send + Sync>>,
    ticker: Arc<Box<dyn Ticker>>,
}

impl GiveawayEngine {
    pub fn new(collector: Arc<Box<dyn EntryCollector>>) -> Self {
        GiveawayEngine {
            collector,
            formatter: Arc::new(Box::new(DefaultAnnouncementFormatter::new())),
            ticker: Arc::new(Box::new(WallClockTicker::new())),
        }
    }

    pub fn with_formatter(
        mut self,
        formatter: Arc<Box<dyn AnnouncementFormatter + Send + Sync>>,
    ) -> Self {
        self.formatter = formatter;
        self
    }

    pub fn with_ticker(mut self, ticker: Arc<Box<dyn Ticker>>) -> Self {
        self.ticker = ticker;
        self
    }

    // Runs the whole giveaway lifecycle and returns the outcome. The call
    // blocks for the configured duration: one update of the live message
    // per second, strictly sequential, and a single entrant fetch only
    // after the countdown fully elapsed. Platform failures before the
    // expiry cancel the giveaway without retries.
    pub async fn run(
        &self,
        giveaway: &Giveaway,
        manual_winners: Option<Vec<Entrant>>,
    ) -> Result<Outcome> {
        info!(
            "Starting the giveaway {} for {} seconds",
            giveaway.id(),
            giveaway.spec().duration_seconds,
        );

        let message = self.announce(giveaway).await?;
        self.countdown(giveaway, message).await?;
        let outcome = self.collect_and_resolve(giveaway, message, manual_winners).await?;

        info!(
            "The giveaway {} has been resolved: {}",
            giveaway.id(),
            outcome.reason(),
        );
        Ok(outcome)
    }

    // Posts the announcement and attaches the participation reaction.
    async fn announce(&self, giveaway: &Giveaway) -> Result<MessageRef> {
        let state = giveaway.state();
        state.set_phase(Phase::Announced);

        let content = self.formatter.announcement(giveaway);
        let message = match self
            .collector
            .post_announcement(giveaway.spec().channel, &content)
            .await
        {
            Ok(message) => message,
            Err(err) => return Err(self.cancel(giveaway, err)),
        };
        state.set_message(Some(message));

        if let Err(err) = self.collector.attach_participation(message).await {
            return Err(self.cancel(giveaway, err));
        }

        Ok(message)
    }

    // The countdown loop. Exactly `duration_seconds` ticks: each one
    // decrements the remaining time, pushes the new clock into the live
    // message and then suspends for one tick interval. The next update
    // never starts before the previous one has completed.
    async fn countdown(&self, giveaway: &Giveaway, message: MessageRef) -> Result<()> {
        let state = giveaway.state();
        state.set_phase(Phase::Counting);

        while state.remaining_seconds() > 0 {
            let remaining = state.decrement_remaining();
            let clock = format_remaining_time(remaining);
            let content = self.formatter.countdown(giveaway, &clock);

            if let Err(err) = self.collector.update_announcement(message, &content).await {
                return Err(self.cancel(giveaway, err));
            }

            self.ticker.wait().await;
        }

        Ok(())
    }

    // Fetches the entrants, applies the eligibility filter and determines
    // the outcome. Exactly one selection path executes: the manual winner
    // override (when supplied) replaces the random draw entirely.
    async fn collect_and_resolve(
        &self,
        giveaway: &Giveaway,
        message: MessageRef,
        manual_winners: Option<Vec<Entrant>>,
    ) -> Result<Outcome> {
        let state = giveaway.state();
        state.set_phase(Phase::Collecting);

        // The countdown already elapsed here, so a failure no longer
        // cancels the giveaway. It's surfaced once and never retried.
        let entrants = self.collector.fetch_entrants(message).await?;
        let eligible = entrants
            .into_iter()
            .filter(|entrant| !entrant.is_automated())
            .collect::<Vec<Entrant>>();

        let spec = giveaway.spec();
        let outcome = match manual_winners {
            Some(winners) if !winners.is_empty() => {
                let options = RollOptions::new(&eligible, spec.winner_count);
                let strategy = ManualSelectStrategy::new(winners);
                Outcome::success(strategy.roll(&options)?)
            }
            _ if eligible.is_empty() => Outcome::no_entries(),
            _ if eligible.len() < spec.winner_count => Outcome::insufficient_entries(),
            _ => {
                let options = RollOptions::new(&eligible, spec.winner_count);
                let strategy = RandomSelectStrategy::new();
                Outcome::success(strategy.roll(&options)?)
            }
        };

        state.set_phase(Phase::Resolved);
        let content = self.formatter.outcome(giveaway, &outcome);
        if let Err(err) = self.collector.announce_outcome(spec.channel, &content).await {
            error!(
                "Can't announce the outcome of the giveaway {}: {}",
                giveaway.id(),
                err.to_string()
            );
        }

        Ok(outcome)
    }

    // Aborts a half-run giveaway. The countdown is never resumed.
    fn cancel(&self, giveaway: &Giveaway, err: Error) -> Error {
        giveaway.state().set_phase(Phase::Cancelled);
        error!(
            "The giveaway {} has been cancelled: {}",
            giveaway.id(),
            err.to_string()
        );
        err
    }
}
