use serenity::builder::EditChannel;
use serenity::model::channel::{GuildChannel, PermissionOverwrite, PermissionOverwriteType};
use serenity::model::id::RoleId;
use serenity::model::Permissions;

use crate::commands::context::Context;
use crate::error::Error;

// Slowmode delays while the entries are open / closed, in seconds.
const OPEN_SLOWMODE_DELAY: u16 = 5;
const CLOSED_SLOWMODE_DELAY: u16 = 10;

// Opens the tournament entries in the given channel: lets everyone write
// again, relaxes the slowmode and posts the announcement banner.
#[poise::command(
    prefix_command,
    slash_command,
    guild_only,
    required_permissions = "ADMINISTRATOR"
)]
pub async fn entries_open(
    ctx: Context<'_>,
    #[description = "The tournament entries channel"]
    #[channel_types("Text")]
    mut channel: GuildChannel,
) -> Result<(), Error> {
    let everyone = RoleId::new(channel.guild_id.get());
    let overwrite = PermissionOverwrite {
        allow: Permissions::SEND_MESSAGES,
        deny: Permissions::empty(),
        kind: PermissionOverwriteType::Role(everyone),
    };
    channel.create_permission(ctx.http(), overwrite).await?;

    channel
        .edit(
            ctx.http(),
            EditChannel::new()
                .topic("Tournament entries are now open! Please send your entry.")
                .rate_limit_per_user(OPEN_SLOWMODE_DELAY),
        )
        .await?;

    channel
        .id
        .say(
            ctx.http(),
            "🎉 **Tournament entries are now OPEN!** 🎉\n\n\
             Please send your tournament entry as instructed.",
        )
        .await?;

    ctx.say(format!(
        "Tournament entries have been enabled in <#{}>!",
        channel.id.get()
    ))
    .await?;

    Ok(())
}

// Closes the tournament entries in the given channel: revokes write
// access for everyone, tightens the slowmode and posts the closing banner.
#[poise::command(
    prefix_command,
    slash_command,
    guild_only,
    required_permissions = "ADMINISTRATOR"
)]
pub async fn entries_close(
    ctx: Context<'_>,
    #[description = "The tournament entries channel"]
    #[channel_types("Text")]
    mut channel: GuildChannel,
) -> Result<(), Error> {
    let everyone = RoleId::new(channel.guild_id.get());
    let overwrite = PermissionOverwrite {
        allow: Permissions::empty(),
        deny: Permissions::SEND_MESSAGES,
        kind: PermissionOverwriteType::Role(everyone),
    };
    channel.create_permission(ctx.http(), overwrite).await?;

    channel
        .edit(
            ctx.http(),
            EditChannel::new()
                .topic("Tournament entries are now CLOSED! No more entries allowed.")
                .rate_limit_per_user(CLOSED_SLOWMODE_DELAY),
        )
        .await?;

    channel
        .id
        .say(
            ctx.http(),
            "🚫 **Tournament entries are now CLOSED!** 🚫\n\n\
             The tournament entry period has ended. Thank you to everyone who participated!",
        )
        .await?;

    ctx.say(format!(
        "Tournament entries have been closed in <#{}>!",
        channel.id.get()
    ))
    .await?;

    Ok(())
}
