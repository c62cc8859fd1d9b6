use serenity::all::{
    Context, EventHandler, GuildId, GuildMemberUpdateEvent, Member, Ready, User,
};
use serenity::async_trait;

use crate::relay::RelayClient;

pub mod member;
pub mod ready;

/// Discord bot event handler.
///
/// Owns the relay client; each callback builds its own request and sends it
/// independently, with no state shared across invocations.
pub struct Handler {
    relay: RelayClient,
}

impl Handler {
    pub fn new(relay: RelayClient) -> Self {
        Self { relay }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(&self.relay, ctx, ready).await;
    }

    /// Called when a member is updated in a guild (roles, nickname, etc.)
    async fn guild_member_update(
        &self,
        ctx: Context,
        _old: Option<Member>,
        _new: Option<Member>,
        event: GuildMemberUpdateEvent,
    ) {
        member::handle_guild_member_update(&self.relay, ctx, event).await;
    }

    /// Called when a member leaves a guild
    async fn guild_member_removal(
        &self,
        ctx: Context,
        guild_id: GuildId,
        user: User,
        _member_data_if_available: Option<Member>,
    ) {
        member::handle_guild_member_removal(&self.relay, ctx, guild_id, user).await;
    }
}
