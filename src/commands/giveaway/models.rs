use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crossbeam::atomic::AtomicCell;
use serenity::model::id::{ChannelId, MessageId};
use serenity::model::user::User as DiscordUser;
use uuid::Uuid;

use crate::commands::giveaway::parser::parse_duration;
use crate::error::{Error, Result};

// An opaque reference to the channel where the giveaway is hosted.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ChannelRef(u64);

impl ChannelRef {
    pub fn new(channel_id: u64) -> Self {
        ChannelRef(channel_id)
    }

    pub fn get(&self) -> u64 {
        self.0
    }

    pub fn channel_id(&self) -> ChannelId {
        ChannelId::new(self.0)
    }
}

impl From<ChannelId> for ChannelRef {
    fn from(channel_id: ChannelId) -> Self {
        ChannelRef(channel_id.get())
    }
}

// An opaque reference to the live announcement message. Carries the
// channel as well, so that the collector can address the message alone.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct MessageRef {
    channel_id: u64,
    message_id: u64,
}

impl MessageRef {
    pub fn new(channel_id: u64, message_id: u64) -> Self {
        MessageRef {
            channel_id,
            message_id,
        }
    }

    pub fn channel_id(&self) -> ChannelId {
        ChannelId::new(self.channel_id)
    }

    pub fn message_id(&self) -> MessageId {
        MessageId::new(self.message_id)
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Organizer {
    user_id: u64,
    username: String,
}

impl Organizer {
    pub fn new(user_id: u64, username: &str) -> Self {
        Organizer {
            user_id,
            username: username.to_string(),
        }
    }

    // Returns a unique identifier in Discord
    pub fn get_user_id(&self) -> u64 {
        self.user_id
    }

    // Returns a username in the Discord room
    pub fn get_username(&self) -> String {
        self.username.clone()
    }

    pub fn mention(&self) -> String {
        format!("<@{}>", self.user_id)
    }
}

impl From<DiscordUser> for Organizer {
    fn from(discord_user: DiscordUser) -> Self {
        Organizer {
            user_id: discord_user.id.get(),
            username: discord_user.name,
        }
    }
}

// A participant who registered interest via the 🎉 reaction. Materialized
// only at expiry from the live reaction state, never cached.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Entrant {
    user_id: u64,
    username: String,
    is_automated: bool,
}

impl Entrant {
    pub fn new(user_id: u64, username: &str, is_automated: bool) -> Self {
        Entrant {
            user_id,
            username: username.to_string(),
            is_automated,
        }
    }

    pub fn get_user_id(&self) -> u64 {
        self.user_id
    }

    pub fn get_username(&self) -> String {
        self.username.clone()
    }

    // Bots (including our own participation marker) never win anything.
    pub fn is_automated(&self) -> bool {
        self.is_automated
    }

    pub fn mention(&self) -> String {
        format!("<@{}>", self.user_id)
    }
}

impl From<DiscordUser> for Entrant {
    fn from(discord_user: DiscordUser) -> Self {
        Entrant {
            user_id: discord_user.id.get(),
            username: discord_user.name,
            is_automated: discord_user.bot,
        }
    }
}

// The immutable description of a single giveaway. Created once at
// invocation time after the validation step and never mutated afterwards.
#[readonly::make]
#[derive(Debug, Clone)]
pub struct GiveawaySpec {
    // The raw duration token as entered by the organizer (e.g. "10s").
    pub duration_label: String,
    pub duration_seconds: u64,
    pub winner_count: usize,
    pub prize: String,
    pub channel: ChannelRef,
}

impl GiveawaySpec {
    // Validates the raw command arguments and builds the spec. Parsing
    // errors and range errors stay two distinct checks: the parser only
    // answers "can I read it", this constructor answers "is it usable".
    pub fn new(duration: &str, winners: u32, prize: &str, channel: ChannelRef) -> Result<Self> {
        let duration_seconds = parse_duration(duration)?;

        if duration_seconds == 0 {
            let message = "Duration must be greater than 0 seconds.".to_string();
            return Err(Error::InvalidSpec(message));
        }

        if winners < 1 {
            let message = "Number of winners must be at least 1.".to_string();
            return Err(Error::InvalidSpec(message));
        }

        if prize.trim().is_empty() {
            let message = "The prize can't be empty.".to_string();
            return Err(Error::InvalidSpec(message));
        }

        Ok(GiveawaySpec {
            duration_label: duration.trim().to_string(),
            duration_seconds,
            winner_count: winners as usize,
            prize: prize.trim().to_string(),
            channel,
        })
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Phase {
    // The announcement message is being posted.
    Announced,
    // The countdown loop is ticking.
    Counting,
    // The entrant list is being fetched and filtered.
    Collecting,
    // The outcome has been determined.
    Resolved,
    // A platform failure aborted the giveaway mid-flight.
    Cancelled,
}

impl Phase {
    // Pretty-print for the phase in text messages
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Announced => "announced",
            Phase::Counting => "counting",
            Phase::Collecting => "collecting",
            Phase::Resolved => "resolved",
            Phase::Cancelled => "cancelled",
        }
    }
}

// Mutable state owned by exactly one running engine for the lifetime of
// one giveaway. Discarded when the engine returns.
#[derive(Debug)]
pub struct GiveawayState {
    remaining_seconds: AtomicU64,
    message: AtomicCell<Option<MessageRef>>,
    phase: AtomicCell<Phase>,
}

impl GiveawayState {
    pub fn new(duration_seconds: u64) -> Self {
        GiveawayState {
            remaining_seconds: AtomicU64::new(duration_seconds),
            message: AtomicCell::new(None),
            phase: AtomicCell::new(Phase::Announced),
        }
    }

    pub fn remaining_seconds(&self) -> u64 {
        self.remaining_seconds.load(Ordering::SeqCst)
    }

    // Decreases the remaining time by one tick and returns the new value.
    pub fn decrement_remaining(&self) -> u64 {
        let current_value = self.remaining_seconds.load(Ordering::SeqCst);
        let new_value = current_value.saturating_sub(1);
        self.remaining_seconds.store(new_value, Ordering::SeqCst);
        new_value
    }

    // Returns a reference to the message that must be updated
    pub fn get_message(&self) -> Option<MessageRef> {
        self.message.load()
    }

    // Overrides the message reference.
    pub fn set_message(&self, message: Option<MessageRef>) {
        self.message.store(message)
    }

    pub fn phase(&self) -> Phase {
        self.phase.load()
    }

    pub fn set_phase(&self, phase: Phase) {
        self.phase.store(phase)
    }
}

// One timed entry-collection-and-selection event.
#[derive(Debug)]
pub struct Giveaway {
    // A unique identifier of the giveaway during the process lifetime.
    id: Uuid,
    spec: GiveawaySpec,
    // A reference to the creator of the giveaway
    organizer: Organizer,
    state: GiveawayState,
}

impl Giveaway {
    pub fn new(spec: GiveawaySpec, organizer: Organizer) -> Self {
        let state = GiveawayState::new(spec.duration_seconds);

        Giveaway {
            id: Uuid::new_v4(),
            spec,
            organizer,
            state,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn spec(&self) -> &GiveawaySpec {
        &self.spec
    }

    // Returns information about who created the giveaway.
    pub fn organizer(&self) -> &Organizer {
        &self.organizer
    }

    pub fn state(&self) -> &GiveawayState {
        &self.state
    }

    // Pretty-print of the giveaway in the text messages.
    pub fn pretty_print(&self) -> String {
        format!(
            "**{}** in <#{}> ({}) [owner: <@{}>]",
            self.spec.prize,
            self.spec.channel.get(),
            self.state.phase().as_str(),
            self.organizer.get_user_id(),
        )
    }
}

impl Eq for Giveaway {}

impl PartialEq for Giveaway {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum OutcomeReason {
    // Enough eligible entrants, winners were drawn.
    Success,
    // Nobody (except automated accounts) engaged with the giveaway.
    NoEntries,
    // Fewer eligible entrants than requested winners.
    InsufficientEntries,
}

// The terminal result of one giveaway. The non-success reasons are normal
// results with their own user-facing messages, not errors.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Outcome {
    winners: Vec<Entrant>,
    reason: OutcomeReason,
}

impl Outcome {
    pub fn success(winners: Vec<Entrant>) -> Self {
        Outcome {
            winners,
            reason: OutcomeReason::Success,
        }
    }

    pub fn no_entries() -> Self {
        Outcome {
            winners: Vec::new(),
            reason: OutcomeReason::NoEntries,
        }
    }

    pub fn insufficient_entries() -> Self {
        Outcome {
            winners: Vec::new(),
            reason: OutcomeReason::InsufficientEntries,
        }
    }

    pub fn winners(&self) -> &[Entrant] {
        &self.winners
    }

    pub fn reason(&self) -> OutcomeReason {
        self.reason
    }
}

impl fmt::Display for OutcomeReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let output = match self {
            OutcomeReason::Success => "success",
            OutcomeReason::NoEntries => "no entries",
            OutcomeReason::InsufficientEntries => "insufficient entries",
        };
        write!(f, "{}", output)
    }
}
