use std::sync::Arc;

use serenity::model::id::ChannelId;
use tracing::error;

use crate::commands::context::Context;
use crate::commands::giveaway::collector::{DiscordEntryCollector, EntryCollector};
use crate::commands::giveaway::engine::GiveawayEngine;
use crate::commands::giveaway::models::{ChannelRef, Giveaway, GiveawaySpec, Organizer};
use crate::error::Error;

// Host a giveaway in the specified channel. The command blocks for the
// whole countdown: validation errors are reported before anything is
// posted, platform errors cancel the giveaway and are reported once.
#[poise::command(
    prefix_command,
    slash_command,
    guild_only,
    required_permissions = "ADMINISTRATOR"
)]
pub async fn giveaway(
    ctx: Context<'_>,
    #[description = "Duration of the giveaway (e.g. '10s', '5m', '2h')"] duration: String,
    #[description = "Number of winners to select"] winners: u32,
    #[description = "The channel where the giveaway will be posted"] channel: ChannelId,
    #[description = "The prize for the giveaway"]
    #[rest]
    prize: String,
) -> Result<(), Error> {
    let spec = match GiveawaySpec::new(&duration, winners, &prize, ChannelRef::from(channel)) {
        Ok(spec) => spec,
        Err(err) => {
            ctx.say(format!("Error: {}", err)).await?;
            return Ok(());
        }
    };

    let giveaway = Arc::new(Giveaway::new(spec, Organizer::from(ctx.author().clone())));
    let manager = ctx.data().manager.clone();
    manager.register(giveaway.clone());

    let collector: Arc<Box<dyn EntryCollector>> = Arc::new(Box::new(DiscordEntryCollector::new(
        ctx.serenity_context().http.clone(),
    )));
    let engine = GiveawayEngine::new(collector);

    // The manual winner override stays an explicit engine parameter for
    // administrative corrections; the command always runs a random draw.
    let result = engine.run(&giveaway, None).await;
    manager.deregister(giveaway.id());

    if let Err(err) = result {
        error!("The giveaway has failed: {}", err.to_string());
        ctx.say(format!("The giveaway has been cancelled: {}", err))
            .await?;
    }

    Ok(())
}

// Get a list of currently running giveaways
#[poise::command(prefix_command, slash_command, rename = "giveaways")]
pub async fn list_giveaways(ctx: Context<'_>) -> Result<(), Error> {
    let giveaways = ctx
        .data()
        .manager
        .get_giveaways()
        .iter()
        .enumerate()
        .map(|(index, giveaway)| format!("{}. {}", index + 1, giveaway.pretty_print()))
        .collect::<Vec<String>>();

    let content = match giveaways.len() {
        0 => "There are no active giveaways.".to_string(),
        _ => giveaways.join("\n"),
    };

    ctx.say(content).await?;
    Ok(())
}
