use crate::commands::context::Context;
use crate::error::Error;

#[poise::command(prefix_command, slash_command, track_edits)]
pub async fn help(
    ctx: Context<'_>,
    #[description = "Specific command to show help about"] command: Option<String>,
) -> Result<(), Error> {
    let configuration = poise::builtins::HelpConfiguration {
        extra_text_at_bottom: "All text commands must be prefixed with `!`",
        ..Default::default()
    };
    poise::builtins::help(ctx, command.as_deref(), configuration).await?;

    Ok(())
}
