use serenity::all::{GuildId, Http};

use crate::{
    error::{relay::RelayError, AppError},
    model::roles::{RoleUpdateRequest, UserRoles},
    relay::RelayClient,
};

/// Maximum number of members fetched per guild during the startup sync.
///
/// Known limitation: guilds with more members than this are only partially
/// synced; the listing is not paginated.
pub const MEMBER_FETCH_LIMIT: u64 = 1000;

pub struct RoleSyncService<'a> {
    relay: &'a RelayClient,
}

impl<'a> RoleSyncService<'a> {
    pub fn new(relay: &'a RelayClient) -> Self {
        Self { relay }
    }

    /// Pushes a full role snapshot for every guild, sequentially.
    ///
    /// One request per guild, one entry per member in listing order. A
    /// guild with no members still produces a request with an empty user
    /// list. Any listing or delivery failure aborts the whole sync — the
    /// relay has no correct baseline without it.
    ///
    /// # Arguments
    /// - `http`: Discord HTTP API handle for member listing
    /// - `guild_ids`: guilds visible to the bot at connect time
    ///
    /// # Returns
    /// - `Ok(())`: every guild was reported to Haven
    /// - `Err(AppError)`: member listing or delivery failed
    pub async fn sync_all_guilds(&self, http: &Http, guild_ids: &[GuildId]) -> Result<(), AppError> {
        tracing::info!("Starting Discord user roles sync");

        for guild_id in guild_ids {
            tracing::info!("Syncing roles for guild {}", guild_id);

            let members = http
                .get_guild_members(*guild_id, Some(MEMBER_FETCH_LIMIT), None)
                .await?;

            let users = members.iter().map(UserRoles::from_member).collect();
            let request = RoleUpdateRequest::for_guild(guild_id.to_string(), users);

            self.relay.send(&request).await?;
        }

        Ok(())
    }

    /// Reports one member's complete new role set after a change.
    pub async fn push_member_roles(
        &self,
        guild_id: &str,
        user_id: &str,
        roles: Vec<String>,
    ) -> Result<(), RelayError> {
        let request = RoleUpdateRequest::single(guild_id, UserRoles::new(user_id, roles));
        self.relay.send(&request).await
    }

    /// Reports a member's departure as an explicit empty role set.
    pub async fn push_member_removal(
        &self,
        guild_id: &str,
        user_id: &str,
    ) -> Result<(), RelayError> {
        let request = RoleUpdateRequest::single(guild_id, UserRoles::removed(user_id));
        self.relay.send(&request).await
    }
}
