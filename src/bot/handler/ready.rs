//! Ready event handler: connection logging and the startup role sync.
//!
//! The `ready` event is the first point where the guild list is known, so
//! the full sync runs here. The sync gates readiness: until every guild's
//! snapshot has been delivered, Haven has no correct baseline, and a
//! failure aborts the process.

use serenity::all::{Context, GuildId, Ready};

use crate::{relay::RelayClient, service::roles::RoleSyncService};

/// Handles the ready event when the bot connects to Discord.
///
/// Runs the full role sync over every guild in the ready payload. Event
/// handlers have no error channel back to the caller, so a sync failure is
/// logged and the process exits with a nonzero code.
pub async fn handle_ready(relay: &RelayClient, ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    let guild_ids: Vec<GuildId> = ready.guilds.iter().map(|guild| guild.id).collect();

    let service = RoleSyncService::new(relay);
    if let Err(e) = service.sync_all_guilds(&ctx.http, &guild_ids).await {
        tracing::error!("Startup role sync failed: {}", e);
        std::process::exit(1);
    }

    tracing::info!("Startup role sync complete, relaying live events");
}
