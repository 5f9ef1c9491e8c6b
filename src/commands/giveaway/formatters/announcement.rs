// Special module that contains the default formatter
// for the giveaway announcement messages
use crate::commands::giveaway::collector::PARTICIPATION_EMOJI;
use crate::commands::giveaway::formatters::base::AnnouncementFormatter;
use crate::commands::giveaway::models::{Giveaway, Outcome, OutcomeReason};

pub struct DefaultAnnouncementFormatter;

impl DefaultAnnouncementFormatter {
    pub fn new() -> Self {
        DefaultAnnouncementFormatter {}
    }

    fn render_banner(&self, giveaway: &Giveaway, ends_in: &str) -> String {
        let spec = giveaway.spec();

        format!(
            "🎉 **GIVEAWAY!** 🎉\n\n\
             Prize: **{}**\n\
             React with {} to enter!\n\
             Ends in **{}**!\n\
             Number of Winners: {}\n\
             Hosted by: {}",
            spec.prize,
            PARTICIPATION_EMOJI,
            ends_in,
            spec.winner_count,
            giveaway.organizer().mention(),
        )
    }
}

impl AnnouncementFormatter for DefaultAnnouncementFormatter {
    // The initial announcement shows the raw duration token ("5m"), the
    // countdown updates replace it with the remaining time clock.
    fn announcement(&self, giveaway: &Giveaway) -> String {
        self.render_banner(giveaway, &giveaway.spec().duration_label)
    }

    fn countdown(&self, giveaway: &Giveaway, remaining_clock: &str) -> String {
        self.render_banner(giveaway, remaining_clock)
    }

    fn outcome(&self, giveaway: &Giveaway, outcome: &Outcome) -> String {
        match outcome.reason() {
            OutcomeReason::Success => {
                let winner_mentions = outcome
                    .winners()
                    .iter()
                    .map(|winner| winner.mention())
                    .collect::<Vec<String>>()
                    .join(", ");

                format!(
                    "🎉 Congratulations {}! You won the **{}**!",
                    winner_mentions,
                    giveaway.spec().prize,
                )
            }
            OutcomeReason::InsufficientEntries => format!(
                "Not enough participants for {} winners. Giveaway cancelled.",
                giveaway.spec().winner_count,
            ),
            OutcomeReason::NoEntries => "No valid entries. Giveaway cancelled.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::commands::giveaway::formatters::announcement::DefaultAnnouncementFormatter;
    use crate::commands::giveaway::formatters::base::AnnouncementFormatter;
    use crate::commands::giveaway::models::{
        ChannelRef, Entrant, Giveaway, GiveawaySpec, Organizer, Outcome,
    };

    fn get_giveaway() -> Giveaway {
        let spec = GiveawaySpec::new("3s", 2, "Game key", ChannelRef::new(1)).unwrap();
        Giveaway::new(spec, Organizer::new(10, "Owner"))
    }

    #[test]
    fn test_announcement_shows_the_raw_duration_token() {
        let giveaway = get_giveaway();
        let formatter = DefaultAnnouncementFormatter::new();

        let message = formatter.announcement(&giveaway);
        assert_eq!(message.contains("Ends in **3s**!"), true);
        assert_eq!(message.contains("Prize: **Game key**"), true);
        assert_eq!(message.contains("Number of Winners: 2"), true);
        assert_eq!(message.contains("Hosted by: <@10>"), true);
    }

    #[test]
    fn test_countdown_shows_the_remaining_clock() {
        let giveaway = get_giveaway();
        let formatter = DefaultAnnouncementFormatter::new();

        let message = formatter.countdown(&giveaway, "00:00:02");
        assert_eq!(message.contains("Ends in **00:00:02**!"), true);
    }

    #[test]
    fn test_outcome_message_for_winners() {
        let giveaway = get_giveaway();
        let formatter = DefaultAnnouncementFormatter::new();
        let outcome = Outcome::success(vec![
            Entrant::new(1, "A", false),
            Entrant::new(2, "B", false),
        ]);

        let message = formatter.outcome(&giveaway, &outcome);
        assert_eq!(
            message,
            "🎉 Congratulations <@1>, <@2>! You won the **Game key**!"
        );
    }

    #[test]
    fn test_outcome_message_for_insufficient_entries() {
        let giveaway = get_giveaway();
        let formatter = DefaultAnnouncementFormatter::new();
        let outcome = Outcome::insufficient_entries();

        let message = formatter.outcome(&giveaway, &outcome);
        assert_eq!(
            message,
            "Not enough participants for 2 winners. Giveaway cancelled."
        );
    }

    #[test]
    fn test_outcome_message_for_no_entries() {
        let giveaway = get_giveaway();
        let formatter = DefaultAnnouncementFormatter::new();
        let outcome = Outcome::no_entries();

        let message = formatter.outcome(&giveaway, &outcome);
        assert_eq!(message, "No valid entries. Giveaway cancelled.");
    }
}
