//! Driving port for the favorite toggle workflow.

use async_trait::async_trait;

use crate::domain::{BusinessId, Error, Favorite, FavoriteToggle, UserId};

/// Domain use-case port for marking businesses as favorites.
#[async_trait]
pub trait Favorites: Send + Sync {
    /// Toggle the relation for a user/business pair and return the new
    /// state. Toggling twice restores the original state.
    async fn toggle(
        &self,
        user_id: &UserId,
        business_id: &BusinessId,
    ) -> Result<FavoriteToggle, Error>;

    /// List the caller's favorite relations, newest first.
    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<Favorite>, Error>;
}

/// Fixture implementation for handler tests: toggles always report `Added`
/// and the list is empty.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureFavorites;

#[async_trait]
impl Favorites for FixtureFavorites {
    async fn toggle(
        &self,
        _user_id: &UserId,
        _business_id: &BusinessId,
    ) -> Result<FavoriteToggle, Error> {
        Ok(FavoriteToggle::Added)
    }

    async fn list_for_user(&self, _user_id: &UserId) -> Result<Vec<Favorite>, Error> {
        Ok(Vec::new())
    }
}
