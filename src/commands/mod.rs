pub mod context;
pub mod giveaway;
pub mod help;
pub mod tournament;

// Re-exports for the later usage in main.rs
pub use crate::commands::context::{Context, UserData};
pub use crate::commands::giveaway::{giveaway, list_giveaways};
pub use crate::commands::help::help;
pub use crate::commands::tournament::{entries_close, entries_open};
