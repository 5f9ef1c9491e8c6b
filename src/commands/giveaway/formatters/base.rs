use crate::commands::giveaway::models::{Giveaway, Outcome};

pub trait AnnouncementFormatter {
    // The initial announcement posted when the giveaway starts. Shows the
    // raw duration token as entered by the organizer.
    fn announcement(&self, giveaway: &Giveaway) -> String;
    // The live countdown update with the remaining time clock.
    fn countdown(&self, giveaway: &Giveaway, remaining_clock: &str) -> String;
    // The final message for the channel once the giveaway is resolved.
    fn outcome(&self, giveaway: &Giveaway, outcome: &Outcome) -> String;
}
