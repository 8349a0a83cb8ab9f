//! Favorite toggle workflow over the favorite and business repositories.
//!
//! The toggle is a read-then-write sequence: two tabs toggling the same
//! pair can interleave, so the client-side lookup alone cannot guarantee
//! uniqueness. The store's unique constraint settles the race, and the
//! adapter phrases the outcomes so both racers converge on the same final
//! state: a conflicting insert reads as already-added, a delete of zero
//! rows as already-removed.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{store_call, BusinessRepository, FavoriteRepository, Favorites};
use crate::domain::{BusinessId, Error, Favorite, FavoriteToggle, UserId};

/// Toggle workflow implementation.
#[derive(Clone)]
pub struct FavoritesService<F, B> {
    favorites: Arc<F>,
    businesses: Arc<B>,
}

impl<F, B> FavoritesService<F, B> {
    /// Create a new service over the given repositories.
    pub fn new(favorites: Arc<F>, businesses: Arc<B>) -> Self {
        Self {
            favorites,
            businesses,
        }
    }
}

#[async_trait]
impl<F, B> Favorites for FavoritesService<F, B>
where
    F: FavoriteRepository,
    B: BusinessRepository,
{
    async fn toggle(
        &self,
        user_id: &UserId,
        business_id: &BusinessId,
    ) -> Result<FavoriteToggle, Error> {
        let business = store_call(self.businesses.find_by_id(business_id)).await?;
        if business.is_none() {
            return Err(Error::not_found(format!(
                "no business with id {business_id}"
            )));
        }

        let existing = store_call(self.favorites.find_by_pair(user_id, business_id)).await?;
        let outcome = if existing.is_some() {
            let removed =
                store_call(self.favorites.delete_by_pair(user_id, business_id)).await?;
            if !removed {
                // A concurrent toggle already removed the row; the relation
                // is absent either way.
                debug!(%user_id, %business_id, "favorite was already removed");
            }
            FavoriteToggle::Removed
        } else {
            let inserted = store_call(self.favorites.insert(user_id, business_id)).await?;
            if inserted.is_none() {
                debug!(%user_id, %business_id, "favorite was already present");
            }
            FavoriteToggle::Added
        };

        Ok(outcome)
    }

    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<Favorite>, Error> {
        store_call(self.favorites.list_for_user(user_id)).await
    }
}
