//! Behaviour tests for the favorite toggle workflow against stateful
//! in-memory repositories.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;

use backend::domain::ports::{BusinessRepository, FavoriteRepository, Favorites, StoreError};
use backend::domain::{
    Business, BusinessFilter, BusinessId, BusinessPatch, Favorite, FavoriteToggle,
    FavoritesService, NewBusiness, UserId,
};

/// Business store holding a fixed set of rows.
struct InMemoryBusinesses {
    rows: Vec<Business>,
}

impl InMemoryBusinesses {
    fn with_one(id: BusinessId) -> Self {
        let seed = NewBusiness::named("Acme Corporation", None).expect("valid name");
        Self {
            rows: vec![Business {
                id,
                name: seed.name,
                industry: Some("Technology".into()),
                status: seed.status,
                revenue: None,
                employees: None,
                logo_url: None,
                website: None,
                email: None,
                phone: None,
                address: None,
                description: None,
                founded_year: None,
                created_by: None,
                created_at: Utc::now(),
                updated_at: Utc::now(),
            }],
        }
    }
}

#[async_trait]
impl BusinessRepository for InMemoryBusinesses {
    async fn list(&self, _filter: BusinessFilter) -> Result<Vec<Business>, StoreError> {
        Ok(self.rows.clone())
    }

    async fn find_by_id(&self, id: &BusinessId) -> Result<Option<Business>, StoreError> {
        Ok(self.rows.iter().find(|b| b.id == *id).cloned())
    }

    async fn insert(&self, _business: NewBusiness) -> Result<Business, StoreError> {
        Err(StoreError::query("read-only test store"))
    }

    async fn update(
        &self,
        _id: &BusinessId,
        _patch: BusinessPatch,
    ) -> Result<Option<Business>, StoreError> {
        Err(StoreError::query("read-only test store"))
    }
}

/// Favorite store enforcing the pair uniqueness constraint like the real
/// database does.
#[derive(Default)]
struct InMemoryFavorites {
    rows: Mutex<Vec<Favorite>>,
    insert_calls: AtomicUsize,
    delete_calls: AtomicUsize,
}

impl InMemoryFavorites {
    fn contains(&self, user_id: &UserId, business_id: &BusinessId) -> bool {
        self.rows
            .lock()
            .expect("rows lock")
            .iter()
            .any(|f| f.user_id == *user_id && f.business_id == *business_id)
    }
}

#[async_trait]
impl FavoriteRepository for InMemoryFavorites {
    async fn find_by_pair(
        &self,
        user_id: &UserId,
        business_id: &BusinessId,
    ) -> Result<Option<Favorite>, StoreError> {
        Ok(self
            .rows
            .lock()
            .expect("rows lock")
            .iter()
            .find(|f| f.user_id == *user_id && f.business_id == *business_id)
            .cloned())
    }

    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<Favorite>, StoreError> {
        Ok(self
            .rows
            .lock()
            .expect("rows lock")
            .iter()
            .filter(|f| f.user_id == *user_id)
            .cloned()
            .collect())
    }

    async fn insert(
        &self,
        user_id: &UserId,
        business_id: &BusinessId,
    ) -> Result<Option<Favorite>, StoreError> {
        self.insert_calls.fetch_add(1, Ordering::Relaxed);
        let mut rows = self.rows.lock().expect("rows lock");
        if rows
            .iter()
            .any(|f| f.user_id == *user_id && f.business_id == *business_id)
        {
            // Unique constraint: the relation already exists.
            return Ok(None);
        }
        let favorite = Favorite {
            id: uuid::Uuid::new_v4(),
            user_id: *user_id,
            business_id: *business_id,
            created_at: Utc::now(),
        };
        rows.push(favorite.clone());
        Ok(Some(favorite))
    }

    async fn delete_by_pair(
        &self,
        user_id: &UserId,
        business_id: &BusinessId,
    ) -> Result<bool, StoreError> {
        self.delete_calls.fetch_add(1, Ordering::Relaxed);
        let mut rows = self.rows.lock().expect("rows lock");
        let before = rows.len();
        rows.retain(|f| !(f.user_id == *user_id && f.business_id == *business_id));
        Ok(rows.len() < before)
    }
}

fn service(
    favorites: Arc<InMemoryFavorites>,
    businesses: Arc<InMemoryBusinesses>,
) -> FavoritesService<InMemoryFavorites, InMemoryBusinesses> {
    FavoritesService::new(favorites, businesses)
}

#[tokio::test]
async fn double_toggle_returns_the_relation_to_its_original_state() {
    let user = UserId::random();
    let business = BusinessId::random();
    let favorites = Arc::new(InMemoryFavorites::default());
    let svc = service(favorites.clone(), Arc::new(InMemoryBusinesses::with_one(business)));

    assert!(!favorites.contains(&user, &business));

    let first = svc.toggle(&user, &business).await.expect("first toggle");
    assert_eq!(first, FavoriteToggle::Added);
    assert!(favorites.contains(&user, &business));

    let second = svc.toggle(&user, &business).await.expect("second toggle");
    assert_eq!(second, FavoriteToggle::Removed);
    assert!(!favorites.contains(&user, &business));

    assert_eq!(favorites.insert_calls.load(Ordering::Relaxed), 1);
    assert_eq!(favorites.delete_calls.load(Ordering::Relaxed), 1);
}

#[tokio::test]
async fn toggled_on_pair_appears_in_the_user_listing_until_toggled_off() {
    let user = UserId::random();
    let business = BusinessId::random();
    let favorites = Arc::new(InMemoryFavorites::default());
    let svc = service(favorites, Arc::new(InMemoryBusinesses::with_one(business)));

    svc.toggle(&user, &business).await.expect("toggle on");
    let listed = svc.list_for_user(&user).await.expect("listing");
    assert!(listed.iter().any(|f| f.business_id == business));

    svc.toggle(&user, &business).await.expect("toggle off");
    let listed = svc.list_for_user(&user).await.expect("listing");
    assert!(!listed.iter().any(|f| f.business_id == business));
}

#[tokio::test]
async fn favorites_are_scoped_per_user() {
    let alice = UserId::random();
    let bob = UserId::random();
    let business = BusinessId::random();
    let favorites = Arc::new(InMemoryFavorites::default());
    let svc = service(favorites, Arc::new(InMemoryBusinesses::with_one(business)));

    svc.toggle(&alice, &business).await.expect("alice toggles");

    let alice_list = svc.list_for_user(&alice).await.expect("alice listing");
    let bob_list = svc.list_for_user(&bob).await.expect("bob listing");
    assert_eq!(alice_list.len(), 1);
    assert!(bob_list.is_empty());
}

#[tokio::test]
async fn interleaved_toggles_from_two_sessions_converge() {
    // Two tabs both observe "not favorited", then both try to insert; the
    // uniqueness constraint lets exactly one row exist.
    let user = UserId::random();
    let business = BusinessId::random();
    let favorites = Arc::new(InMemoryFavorites::default());
    let svc = service(favorites.clone(), Arc::new(InMemoryBusinesses::with_one(business)));

    let first = favorites.insert(&user, &business).await.expect("tab one");
    assert!(first.is_some());

    // Tab two raced past its lookup and inserts after tab one won.
    let outcome = svc.toggle(&user, &business).await.expect("tab two toggle");
    // Tab two saw the row during lookup, so its toggle removes it.
    assert_eq!(outcome, FavoriteToggle::Removed);
    assert!(!favorites.contains(&user, &business));
}
