//! Admin approval workflow over the profile repository.
//!
//! State machine: `Pending` (approved=false) moves to `Approved`
//! (approved=true) or to `Rejected` (row deleted). Transitions are
//! one-directional: a rejected profile no longer exists, and an approved
//! profile never returns to pending; only its role keeps changing. Each
//! transition is a single-row update or delete scoped by id.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::domain::ports::{store_call, ProfileRepository, UserAdministration};
use crate::domain::{Error, Profile, ProfilePatch, Role, UserId};

/// Directory management implementation.
///
/// Authorization is not re-checked here: the HTTP layer derives the
/// caller's [`crate::domain::AccessState`] and rejects non-admins before
/// any of these operations run.
#[derive(Clone)]
pub struct UserAdministrationService<P> {
    profiles: Arc<P>,
}

impl<P> UserAdministrationService<P> {
    /// Create a new service over the given profile repository.
    pub fn new(profiles: Arc<P>) -> Self {
        Self { profiles }
    }
}

fn profile_not_found(id: &UserId) -> Error {
    Error::not_found(format!("no profile with id {id}"))
}

#[async_trait]
impl<P> UserAdministration for UserAdministrationService<P>
where
    P: ProfileRepository,
{
    async fn list_users(&self) -> Result<Vec<Profile>, Error> {
        store_call(self.profiles.list()).await
    }

    async fn approve(&self, id: &UserId) -> Result<Profile, Error> {
        let updated = store_call(self.profiles.update(id, ProfilePatch::approve())).await?;
        let profile = updated.ok_or_else(|| profile_not_found(id))?;
        info!(user_id = %id, "approved account");
        Ok(profile)
    }

    async fn reject(&self, id: &UserId) -> Result<(), Error> {
        let removed = store_call(self.profiles.delete(id)).await?;
        if !removed {
            return Err(profile_not_found(id));
        }
        info!(user_id = %id, "rejected account");
        Ok(())
    }

    async fn change_role(&self, id: &UserId, role: Role) -> Result<Profile, Error> {
        let updated = store_call(self.profiles.update(id, ProfilePatch::role(role))).await?;
        let profile = updated.ok_or_else(|| profile_not_found(id))?;
        info!(user_id = %id, role = %role, "changed account role");
        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::ports::{MockProfileRepository, StoreError};
    use crate::domain::{EmailAddress, ErrorCode};
    use chrono::Utc;
    use rstest::rstest;

    fn profile(id: UserId, approved: bool, role: Role) -> Profile {
        Profile {
            id,
            email: EmailAddress::new("u1@example.com").expect("valid email"),
            full_name: None,
            approved,
            role,
            avatar_url: None,
            last_sign_in_at: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn approve_flips_only_the_approval_flag() {
        let id = UserId::random();
        let mut repo = MockProfileRepository::new();
        repo.expect_update()
            .withf(move |target, patch| *target == id && *patch == ProfilePatch::approve())
            .times(1)
            .return_once(move |_, _| Ok(Some(profile(id, true, Role::User))));

        let service = UserAdministrationService::new(Arc::new(repo));
        let approved = service.approve(&id).await.expect("approve succeeds");
        assert!(approved.approved);
        assert_eq!(approved.role, Role::User);
    }

    #[tokio::test]
    async fn approve_on_a_missing_profile_is_not_found() {
        let mut repo = MockProfileRepository::new();
        repo.expect_update().times(1).return_once(|_, _| Ok(None));

        let service = UserAdministrationService::new(Arc::new(repo));
        let err = service
            .approve(&UserId::random())
            .await
            .expect_err("missing profile must fail");
        assert_eq!(err.code(), ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn reject_deletes_the_row() {
        let id = UserId::random();
        let mut repo = MockProfileRepository::new();
        repo.expect_delete()
            .withf(move |target| *target == id)
            .times(1)
            .return_once(|_| Ok(true));

        let service = UserAdministrationService::new(Arc::new(repo));
        service.reject(&id).await.expect("reject succeeds");
    }

    #[tokio::test]
    async fn reject_on_a_missing_profile_is_not_found() {
        let mut repo = MockProfileRepository::new();
        repo.expect_delete().times(1).return_once(|_| Ok(false));

        let service = UserAdministrationService::new(Arc::new(repo));
        let err = service
            .reject(&UserId::random())
            .await
            .expect_err("missing profile must fail");
        assert_eq!(err.code(), ErrorCode::NotFound);
    }

    #[rstest]
    #[case(Role::Admin)]
    #[case(Role::User)]
    #[tokio::test]
    async fn change_role_touches_only_the_role(#[case] role: Role) {
        let id = UserId::random();
        let mut repo = MockProfileRepository::new();
        repo.expect_update()
            .withf(move |target, patch| *target == id && *patch == ProfilePatch::role(role))
            .times(1)
            .return_once(move |_, _| Ok(Some(profile(id, true, role))));

        let service = UserAdministrationService::new(Arc::new(repo));
        let updated = service.change_role(&id, role).await.expect("role change");
        assert_eq!(updated.role, role);
        assert!(updated.approved);
    }

    #[tokio::test]
    async fn store_failures_surface_with_stable_codes() {
        let mut repo = MockProfileRepository::new();
        repo.expect_list()
            .times(1)
            .return_once(|| Err(StoreError::connection("refused")));

        let service = UserAdministrationService::new(Arc::new(repo));
        let err = service.list_users().await.expect_err("failure surfaces");
        assert_eq!(err.code(), ErrorCode::ServiceUnavailable);
    }
}
