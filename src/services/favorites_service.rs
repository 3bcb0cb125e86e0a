//! Favorites service - Per-user campsite favorites use cases.
//!
//! Each operation loads at most one record by owner, mutates it in memory
//! and writes it back. Nothing serializes concurrent requests for the same
//! user, so two overlapping adds can race and the last save wins.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{
    CampsiteId, FavoritesOutcome, FavoritesRecord, FavoritesView, NoOpReason, UserProfile,
};
use crate::errors::AppResult;
use crate::infra::UnitOfWork;

/// Favorites service trait for dependency injection.
#[async_trait]
pub trait FavoritesService: Send + Sync {
    /// List the user's favorites with owner and campsites resolved.
    ///
    /// Empty when the user has no record.
    async fn list_favorites(&self, owner: Uuid) -> AppResult<Vec<FavoritesView>>;

    /// Add several campsites, creating the record if needed
    async fn add_campsites(
        &self,
        owner: Uuid,
        candidates: Vec<CampsiteId>,
    ) -> AppResult<FavoritesOutcome>;

    /// Add one campsite, creating the record if needed
    async fn add_campsite(&self, owner: Uuid, campsite: CampsiteId) -> AppResult<FavoritesOutcome>;

    /// Remove one campsite from the record
    async fn remove_campsite(
        &self,
        owner: Uuid,
        campsite: CampsiteId,
    ) -> AppResult<FavoritesOutcome>;

    /// Delete the whole record, returning its prior contents
    async fn delete_favorites(&self, owner: Uuid) -> AppResult<FavoritesOutcome>;
}

/// Concrete implementation of FavoritesService using Unit of Work.
pub struct FavoritesManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> FavoritesManager<U> {
    /// Create new favorites service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }

    /// Apply `add` to the existing record, or create one from `initial`.
    async fn add_with<F>(
        &self,
        owner: Uuid,
        initial: Vec<CampsiteId>,
        add: F,
        already: NoOpReason,
    ) -> AppResult<FavoritesOutcome>
    where
        F: FnOnce(&mut FavoritesRecord) -> bool + Send,
    {
        let repo = self.uow.favorites();

        match repo.find_by_owner(owner).await? {
            Some(mut record) => {
                if !add(&mut record) {
                    tracing::debug!(owner = %owner, "Campsites already in favorites");
                    return Ok(FavoritesOutcome::NoOp(already));
                }

                let saved = repo.save(record).await?;
                tracing::info!(
                    owner = %owner,
                    campsites = saved.campsites.len(),
                    "Favorite campsites updated"
                );
                Ok(FavoritesOutcome::Updated(saved))
            }
            None => {
                let created = repo.create(FavoritesRecord::new(owner, initial)).await?;
                tracing::info!(
                    owner = %owner,
                    campsites = created.campsites.len(),
                    "New favorite campsites created"
                );
                Ok(FavoritesOutcome::Updated(created))
            }
        }
    }
}

#[async_trait]
impl<U: UnitOfWork> FavoritesService for FavoritesManager<U> {
    async fn list_favorites(&self, owner: Uuid) -> AppResult<Vec<FavoritesView>> {
        let Some(record) = self.uow.favorites().find_by_owner(owner).await? else {
            return Ok(Vec::new());
        };

        let profile = self
            .uow
            .users()
            .find_by_id(owner)
            .await?
            .unwrap_or_else(|| UserProfile::unresolved(owner));
        let campsites = self
            .uow
            .campsites()
            .find_by_ids(record.campsites.clone())
            .await?;

        Ok(vec![FavoritesView::resolve(record, profile, campsites)])
    }

    async fn add_campsites(
        &self,
        owner: Uuid,
        candidates: Vec<CampsiteId>,
    ) -> AppResult<FavoritesOutcome> {
        let to_add = candidates.clone();
        self.add_with(
            owner,
            candidates,
            move |record| record.add_campsites(to_add) > 0,
            NoOpReason::AlreadyInFavorites,
        )
        .await
    }

    async fn add_campsite(&self, owner: Uuid, campsite: CampsiteId) -> AppResult<FavoritesOutcome> {
        self.add_with(
            owner,
            vec![campsite],
            move |record| record.add_campsite(campsite),
            NoOpReason::AlreadyFavorited,
        )
        .await
    }

    async fn remove_campsite(
        &self,
        owner: Uuid,
        campsite: CampsiteId,
    ) -> AppResult<FavoritesOutcome> {
        let repo = self.uow.favorites();

        let Some(mut record) = repo.find_by_owner(owner).await? else {
            return Ok(FavoritesOutcome::NoOp(NoOpReason::NothingToDelete));
        };

        if !record.remove_campsite(&campsite) {
            return Ok(FavoritesOutcome::NoOp(NoOpReason::NotInFavorites));
        }

        let saved = repo.save(record).await?;
        tracing::info!(
            owner = %owner,
            campsite = %campsite,
            "Campsite removed from favorites"
        );
        Ok(FavoritesOutcome::Updated(saved))
    }

    async fn delete_favorites(&self, owner: Uuid) -> AppResult<FavoritesOutcome> {
        match self.uow.favorites().find_and_delete_by_owner(owner).await? {
            Some(deleted) => {
                tracing::info!(owner = %owner, "Favorites deleted");
                Ok(FavoritesOutcome::Updated(deleted))
            }
            None => Ok(FavoritesOutcome::NoOp(NoOpReason::NothingToDelete)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use mockall::predicate::eq;

    use crate::domain::Campsite;
    use crate::infra::{
        CampsiteRepository, FavoriteRepository, MockCampsiteRepository, MockFavoriteRepository,
        MockUserRepository, UserRepository,
    };

    /// Unit of Work over mocked repositories
    struct TestUnitOfWork {
        favorites: Arc<MockFavoriteRepository>,
        campsites: Arc<MockCampsiteRepository>,
        users: Arc<MockUserRepository>,
    }

    impl UnitOfWork for TestUnitOfWork {
        fn favorites(&self) -> Arc<dyn FavoriteRepository> {
            self.favorites.clone()
        }

        fn campsites(&self) -> Arc<dyn CampsiteRepository> {
            self.campsites.clone()
        }

        fn users(&self) -> Arc<dyn UserRepository> {
            self.users.clone()
        }
    }

    fn service(favorites: MockFavoriteRepository) -> FavoritesManager<TestUnitOfWork> {
        service_with(
            favorites,
            MockCampsiteRepository::new(),
            MockUserRepository::new(),
        )
    }

    fn service_with(
        favorites: MockFavoriteRepository,
        campsites: MockCampsiteRepository,
        users: MockUserRepository,
    ) -> FavoritesManager<TestUnitOfWork> {
        FavoritesManager::new(Arc::new(TestUnitOfWork {
            favorites: Arc::new(favorites),
            campsites: Arc::new(campsites),
            users: Arc::new(users),
        }))
    }

    fn ids(n: usize) -> Vec<CampsiteId> {
        (0..n).map(|_| CampsiteId::new(Uuid::new_v4())).collect()
    }

    fn existing(owner: Uuid, campsites: Vec<CampsiteId>) -> FavoritesRecord {
        FavoritesRecord::new(owner, campsites)
    }

    fn campsite(id: CampsiteId, name: &str) -> Campsite {
        Campsite {
            id,
            name: name.to_string(),
            description: "Nestled in the foothills".to_string(),
            image: "images/campsite.jpg".to_string(),
            elevation: 1233,
            cost: 25,
            featured: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn bulk_add_creates_record_with_deduplicated_campsites() {
        let owner = Uuid::new_v4();
        let c = ids(2);
        let mut repo = MockFavoriteRepository::new();

        repo.expect_find_by_owner()
            .with(eq(owner))
            .times(1)
            .returning(|_| Ok(None));
        repo.expect_create().times(1).returning(Ok);
        repo.expect_save().never();

        let outcome = service(repo)
            .add_campsites(owner, vec![c[0], c[1], c[0]])
            .await
            .unwrap();

        match outcome {
            FavoritesOutcome::Updated(record) => {
                assert_eq!(record.owner, owner);
                assert_eq!(record.campsites, vec![c[0], c[1]]);
            }
            other => panic!("expected a created record, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn bulk_add_appends_only_new_campsites() {
        let owner = Uuid::new_v4();
        let c = ids(3);
        let record = existing(owner, vec![c[0]]);
        let mut repo = MockFavoriteRepository::new();

        repo.expect_find_by_owner()
            .returning(move |_| Ok(Some(record.clone())));
        repo.expect_save().times(1).returning(Ok);
        repo.expect_create().never();

        let outcome = service(repo)
            .add_campsites(owner, vec![c[1], c[0], c[2]])
            .await
            .unwrap();

        match outcome {
            FavoritesOutcome::Updated(record) => {
                assert_eq!(record.campsites, vec![c[0], c[1], c[2]]);
            }
            other => panic!("expected an updated record, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn bulk_add_of_known_campsites_is_a_noop() {
        let owner = Uuid::new_v4();
        let c = ids(2);
        let record = existing(owner, c.clone());
        let mut repo = MockFavoriteRepository::new();

        repo.expect_find_by_owner()
            .returning(move |_| Ok(Some(record.clone())));
        repo.expect_save().never();
        repo.expect_create().never();

        let outcome = service(repo)
            .add_campsites(owner, vec![c[1]])
            .await
            .unwrap();

        assert_eq!(
            outcome,
            FavoritesOutcome::NoOp(NoOpReason::AlreadyInFavorites)
        );
    }

    #[tokio::test]
    async fn empty_bulk_add_creates_empty_record() {
        let owner = Uuid::new_v4();
        let mut repo = MockFavoriteRepository::new();

        repo.expect_find_by_owner().returning(|_| Ok(None));
        repo.expect_create().times(1).returning(Ok);

        let outcome = service(repo).add_campsites(owner, Vec::new()).await.unwrap();

        match outcome {
            FavoritesOutcome::Updated(record) => assert!(record.campsites.is_empty()),
            other => panic!("expected a created record, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn single_add_creates_record_when_missing() {
        let owner = Uuid::new_v4();
        let c = ids(1);
        let mut repo = MockFavoriteRepository::new();

        repo.expect_find_by_owner().returning(|_| Ok(None));
        repo.expect_create()
            .withf(move |record| record.owner == owner)
            .times(1)
            .returning(Ok);

        let outcome = service(repo).add_campsite(owner, c[0]).await.unwrap();

        match outcome {
            FavoritesOutcome::Updated(record) => assert_eq!(record.campsites, vec![c[0]]),
            other => panic!("expected a created record, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn single_add_appends_to_existing_record() {
        let owner = Uuid::new_v4();
        let c = ids(2);
        let record = existing(owner, vec![c[0]]);
        let mut repo = MockFavoriteRepository::new();

        repo.expect_find_by_owner()
            .with(eq(owner))
            .returning(move |_| Ok(Some(record.clone())));
        repo.expect_save().times(1).returning(Ok);
        repo.expect_create().never();

        let outcome = service(repo).add_campsite(owner, c[1]).await.unwrap();

        match outcome {
            FavoritesOutcome::Updated(record) => assert_eq!(record.campsites, vec![c[0], c[1]]),
            other => panic!("expected an updated record, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn single_add_of_favorited_campsite_is_a_noop() {
        let owner = Uuid::new_v4();
        let c = ids(1);
        let record = existing(owner, c.clone());
        let mut repo = MockFavoriteRepository::new();

        repo.expect_find_by_owner()
            .returning(move |_| Ok(Some(record.clone())));
        repo.expect_save().never();

        let outcome = service(repo).add_campsite(owner, c[0]).await.unwrap();

        assert_eq!(outcome, FavoritesOutcome::NoOp(NoOpReason::AlreadyFavorited));
    }

    #[tokio::test]
    async fn remove_keeps_remaining_order() {
        let owner = Uuid::new_v4();
        let c = ids(3);
        let record = existing(owner, c.clone());
        let mut repo = MockFavoriteRepository::new();

        repo.expect_find_by_owner()
            .returning(move |_| Ok(Some(record.clone())));
        repo.expect_save().times(1).returning(Ok);

        let outcome = service(repo).remove_campsite(owner, c[1]).await.unwrap();

        match outcome {
            FavoritesOutcome::Updated(record) => assert_eq!(record.campsites, vec![c[0], c[2]]),
            other => panic!("expected an updated record, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn remove_of_absent_campsite_is_a_noop() {
        let owner = Uuid::new_v4();
        let c = ids(2);
        let record = existing(owner, vec![c[0]]);
        let mut repo = MockFavoriteRepository::new();

        repo.expect_find_by_owner()
            .returning(move |_| Ok(Some(record.clone())));
        repo.expect_save().never();

        let outcome = service(repo).remove_campsite(owner, c[1]).await.unwrap();

        assert_eq!(outcome, FavoritesOutcome::NoOp(NoOpReason::NotInFavorites));
    }

    #[tokio::test]
    async fn remove_without_record_never_creates_one() {
        let owner = Uuid::new_v4();
        let mut repo = MockFavoriteRepository::new();

        repo.expect_find_by_owner().returning(|_| Ok(None));
        repo.expect_create().never();
        repo.expect_save().never();

        let outcome = service(repo)
            .remove_campsite(owner, CampsiteId::new(Uuid::new_v4()))
            .await
            .unwrap();

        assert_eq!(outcome, FavoritesOutcome::NoOp(NoOpReason::NothingToDelete));
    }

    #[tokio::test]
    async fn delete_returns_prior_record() {
        let owner = Uuid::new_v4();
        let record = existing(owner, ids(2));
        let expected = record.clone();
        let mut repo = MockFavoriteRepository::new();

        repo.expect_find_and_delete_by_owner()
            .with(eq(owner))
            .times(1)
            .returning(move |_| Ok(Some(record.clone())));

        let outcome = service(repo).delete_favorites(owner).await.unwrap();

        assert_eq!(outcome, FavoritesOutcome::Updated(expected));
    }

    #[tokio::test]
    async fn delete_without_record_is_a_noop() {
        let mut repo = MockFavoriteRepository::new();
        repo.expect_find_and_delete_by_owner().returning(|_| Ok(None));

        let outcome = service(repo).delete_favorites(Uuid::new_v4()).await.unwrap();

        assert_eq!(outcome, FavoritesOutcome::NoOp(NoOpReason::NothingToDelete));
    }

    #[tokio::test]
    async fn list_without_record_is_empty() {
        let mut repo = MockFavoriteRepository::new();
        repo.expect_find_by_owner().returning(|_| Ok(None));

        let favorites = service(repo).list_favorites(Uuid::new_v4()).await.unwrap();

        assert!(favorites.is_empty());
    }

    #[tokio::test]
    async fn list_resolves_owner_and_campsites() {
        let owner = Uuid::new_v4();
        let c = ids(3);
        let record = existing(owner, vec![c[2], c[0], c[1]]);
        let record_id = record.id;

        let mut favorites = MockFavoriteRepository::new();
        favorites
            .expect_find_by_owner()
            .returning(move |_| Ok(Some(record.clone())));

        // c[1] no longer exists in the catalogue
        let catalogue = vec![campsite(c[0], "React Lake"), campsite(c[2], "Chrome River")];
        let mut campsites = MockCampsiteRepository::new();
        campsites
            .expect_find_by_ids()
            .times(1)
            .returning(move |_| Ok(catalogue.clone()));

        let mut users = MockUserRepository::new();
        users.expect_find_by_id().with(eq(owner)).returning(|id| {
            Ok(Some(UserProfile {
                id,
                email: Some("camper@example.com".to_string()),
                name: Some("Jane Camper".to_string()),
            }))
        });

        let views = service_with(favorites, campsites, users)
            .list_favorites(owner)
            .await
            .unwrap();

        assert_eq!(views.len(), 1);
        let view = &views[0];
        assert_eq!(view.id, record_id);
        assert_eq!(view.owner.email.as_deref(), Some("camper@example.com"));
        let names: Vec<_> = view.campsites.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Chrome River", "React Lake"]);
    }

    #[tokio::test]
    async fn list_falls_back_to_bare_owner_when_account_missing() {
        let owner = Uuid::new_v4();
        let record = existing(owner, Vec::new());

        let mut favorites = MockFavoriteRepository::new();
        favorites
            .expect_find_by_owner()
            .returning(move |_| Ok(Some(record.clone())));
        let mut campsites = MockCampsiteRepository::new();
        campsites.expect_find_by_ids().returning(|_| Ok(Vec::new()));
        let mut users = MockUserRepository::new();
        users.expect_find_by_id().returning(|_| Ok(None));

        let views = service_with(favorites, campsites, users)
            .list_favorites(owner)
            .await
            .unwrap();

        assert_eq!(views[0].owner, UserProfile::unresolved(owner));
    }

    #[tokio::test]
    async fn store_failures_propagate() {
        let mut repo = MockFavoriteRepository::new();
        repo.expect_find_by_owner()
            .returning(|_| Err(sea_orm::DbErr::Custom("connection reset".into()).into()));

        let result = service(repo)
            .add_campsite(Uuid::new_v4(), CampsiteId::new(Uuid::new_v4()))
            .await;

        assert!(matches!(result, Err(crate::errors::AppError::Database(_))));
    }
}
