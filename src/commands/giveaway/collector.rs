use std::sync::Arc;

use serenity::async_trait;
use serenity::builder::EditMessage;
use serenity::http::Http;
use serenity::model::channel::ReactionType;
use serenity::model::id::UserId;

use crate::commands::giveaway::models::{ChannelRef, Entrant, MessageRef};
use crate::error::Result;

// The reaction users register with to enter the giveaway.
pub const PARTICIPATION_EMOJI: &str = "🎉";
// Discord hands out reaction users in pages of at most 100 entries.
const REACTION_FETCH_LIMIT: u8 = 100;

// The only gateway between the giveaway engine and the messaging platform.
// Injected into the engine so that tests run against an in-memory double
// instead of a live connection.
#[async_trait]
pub trait EntryCollector: Send + Sync {
    // Posts the initial giveaway announcement in the target channel.
    async fn post_announcement(&self, channel: ChannelRef, content: &str) -> Result<MessageRef>;

    // Attaches the participation reaction to the announcement.
    async fn attach_participation(&self, message: MessageRef) -> Result<()>;

    // Replaces the announcement content with the new countdown state.
    async fn update_announcement(&self, message: MessageRef, content: &str) -> Result<()>;

    // Returns everyone who reacted with the participation emoji, including
    // automated accounts. The eligibility filter is the engine's job.
    async fn fetch_entrants(&self, message: MessageRef) -> Result<Vec<Entrant>>;

    // Posts the final outcome message in the target channel.
    async fn announce_outcome(&self, channel: ChannelRef, content: &str) -> Result<()>;
}

pub struct DiscordEntryCollector {
    http: Arc<Http>,
}

impl DiscordEntryCollector {
    pub fn new(http: Arc<Http>) -> Self {
        DiscordEntryCollector { http }
    }

    fn participation_reaction(&self) -> ReactionType {
        ReactionType::Unicode(PARTICIPATION_EMOJI.to_string())
    }
}

#[async_trait]
impl EntryCollector for DiscordEntryCollector {
    async fn post_announcement(&self, channel: ChannelRef, content: &str) -> Result<MessageRef> {
        let message = channel
            .channel_id()
            .say(&self.http, content)
            .await?;
        Ok(MessageRef::new(channel.get(), message.id.get()))
    }

    async fn attach_participation(&self, message: MessageRef) -> Result<()> {
        message
            .channel_id()
            .create_reaction(&self.http, message.message_id(), self.participation_reaction())
            .await?;
        Ok(())
    }

    async fn update_announcement(&self, message: MessageRef, content: &str) -> Result<()> {
        message
            .channel_id()
            .edit_message(
                &self.http,
                message.message_id(),
                EditMessage::new().content(content),
            )
            .await?;
        Ok(())
    }

    async fn fetch_entrants(&self, message: MessageRef) -> Result<Vec<Entrant>> {
        let reaction = self.participation_reaction();
        let mut entrants: Vec<Entrant> = Vec::new();
        let mut after: Option<UserId> = None;

        loop {
            let batch = self
                .http
                .get_reaction_users(
                    message.channel_id(),
                    message.message_id(),
                    &reaction,
                    REACTION_FETCH_LIMIT,
                    after.map(|id| id.get()),
                )
                .await?;

            let batch_len = batch.len();
            after = batch.last().map(|user| user.id);
            entrants.extend(batch.into_iter().map(Entrant::from));

            if batch_len < REACTION_FETCH_LIMIT as usize {
                break;
            }
        }

        Ok(entrants)
    }

    async fn announce_outcome(&self, channel: ChannelRef, content: &str) -> Result<()> {
        channel.channel_id().say(&self.http, content).await?;
        Ok(())
    }
}
