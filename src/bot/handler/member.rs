use serenity::all::{Context, GuildId, GuildMemberUpdateEvent, User};

use crate::{relay::RelayClient, service::roles::RoleSyncService};

/// Handles the guild_member_update event when a member's roles change.
///
/// Reports the member's complete new role set from the gateway event (not
/// a delta, not read from cache). Delivery failure is logged and dropped;
/// a live event never takes the process down.
pub async fn handle_guild_member_update(
    relay: &RelayClient,
    _ctx: Context,
    event: GuildMemberUpdateEvent,
) {
    let guild_id = event.guild_id.to_string();
    let user_id = event.user.id.to_string();
    let roles: Vec<String> = event.roles.iter().map(|role| role.to_string()).collect();

    let service = RoleSyncService::new(relay);
    if let Err(e) = service.push_member_roles(&guild_id, &user_id, roles).await {
        tracing::error!(
            "Failed to push role update for user {} in guild {}: {}",
            user_id,
            guild_id,
            e
        );
    } else {
        tracing::debug!("Pushed role update for user {} in guild {}", user_id, guild_id);
    }
}

/// Handles the guild_member_removal event when a member leaves a guild.
///
/// Reports the user with an explicit empty role set so Haven revokes
/// everything, rather than omitting the user. Failure is logged and
/// dropped like any other live-event error.
pub async fn handle_guild_member_removal(
    relay: &RelayClient,
    _ctx: Context,
    guild_id: GuildId,
    user: User,
) {
    let guild_id = guild_id.to_string();
    let user_id = user.id.to_string();

    let service = RoleSyncService::new(relay);
    if let Err(e) = service.push_member_removal(&guild_id, &user_id).await {
        tracing::error!(
            "Failed to push role removal for user {} in guild {}: {}",
            user_id,
            guild_id,
            e
        );
    } else {
        tracing::debug!("Pushed role removal for user {} in guild {}", user_id, guild_id);
    }
}
