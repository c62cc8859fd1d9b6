use serde::Serialize;
use serenity::all::Member;

/// One role-update delivery to the Haven API.
///
/// Built fresh for each outbound call and never reused. `users` may be
/// empty: a guild with no members is still reported, giving Haven an
/// explicit "no members" signal rather than silence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleUpdateRequest {
    pub guild_id: String,
    pub users: Vec<UserRoles>,
}

impl RoleUpdateRequest {
    /// Full-guild snapshot, one entry per member in listing order.
    pub fn for_guild(guild_id: impl Into<String>, users: Vec<UserRoles>) -> Self {
        Self {
            guild_id: guild_id.into(),
            users,
        }
    }

    /// Single-user update, used for incremental role changes and removals.
    pub fn single(guild_id: impl Into<String>, user: UserRoles) -> Self {
        Self {
            guild_id: guild_id.into(),
            users: vec![user],
        }
    }
}

/// A user's complete current role set.
///
/// `roles` always carries the full set, never a delta. An empty set is
/// meaningful: it tells Haven to revoke everything for the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserRoles {
    pub user_id: String,
    pub roles: Vec<String>,
}

impl UserRoles {
    pub fn new(user_id: impl Into<String>, roles: Vec<String>) -> Self {
        Self {
            user_id: user_id.into(),
            roles,
        }
    }

    /// Entry for a user who left the guild: an explicit empty role set.
    pub fn removed(user_id: impl Into<String>) -> Self {
        Self::new(user_id, Vec::new())
    }

    /// Converts a gateway member into its wire representation.
    pub fn from_member(member: &Member) -> Self {
        Self::new(
            member.user.id.to_string(),
            member.roles.iter().map(|role| role.to_string()).collect(),
        )
    }
}
