//! Bridges the session cookie and profile store into an [`AccessState`].
//!
//! Handlers that only need "is anyone signed in" use
//! [`SessionContext::require_user_id`] directly; handlers whose
//! authorization depends on the profile (approval flag, role) derive the
//! full state here before touching any port.

use crate::domain::ports::{store_call, ProfileRepository};
use crate::domain::{AccessState, Error};
use crate::inbound::http::session::SessionContext;

/// Derive the caller's access state from their session and profile.
///
/// A missing or tampered session derives to the anonymous state; a session
/// whose profile has since been deleted stays authenticated with no
/// profile, so role and approval checks fail closed.
pub async fn access_state(
    session: &SessionContext,
    profiles: &dyn ProfileRepository,
) -> Result<AccessState, Error> {
    let Some(user_id) = session.user_id()? else {
        return Ok(AccessState::anonymous());
    };

    let profile = store_call(profiles.find_by_id(&user_id)).await?;
    Ok(AccessState::authenticated(user_id, profile))
}
