pub mod announcement;
pub mod base;
pub mod clock;

pub use crate::commands::giveaway::formatters::announcement::DefaultAnnouncementFormatter;
pub use crate::commands::giveaway::formatters::base::AnnouncementFormatter;
pub use crate::commands::giveaway::formatters::clock::format_remaining_time;
