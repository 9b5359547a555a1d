//! Membership gate for the mandatory channel

use crate::platform::Platform;
use teloxide::types::{ChatMemberStatus, Recipient, UserId};

/// Roles that unlock the catalog
pub fn admits(status: ChatMemberStatus) -> bool {
    matches!(
        status,
        ChatMemberStatus::Owner | ChatMemberStatus::Administrator | ChatMemberStatus::Member
    )
}

/// Check whether `user` may browse the catalog
///
/// Fails closed: any lookup error counts as "not a member". There is no
/// retry, the user can press the check button again.
pub async fn is_admitted<P>(platform: &P, channel: &Recipient, user: UserId) -> bool
where
    P: Platform + ?Sized,
{
    match platform.member_status(channel, user).await {
        Ok(status) => {
            tracing::debug!("User {} has status {:?} in {:?}", user, status, channel);
            admits(status)
        }
        Err(err) => {
            tracing::warn!("Membership lookup for user {} failed: {}", user, err);
            false
        }
    }
}
