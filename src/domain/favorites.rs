//! Favorites aggregate: one record per user holding an ordered set of campsites.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::{Campsite, CampsiteId, UserProfile};
use crate::config::{
    MSG_ALREADY_FAVORITED, MSG_ALREADY_IN_FAVORITES, MSG_NOTHING_TO_DELETE, MSG_NOT_IN_FAVORITES,
};

/// A user's favorites record.
///
/// `campsites` keeps insertion order and never holds the same campsite twice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FavoritesRecord {
    #[schema(example = "0b6f6a2c-1d2e-4f7a-9c3b-5e8d1a2b3c4d")]
    pub id: Uuid,
    /// User owning the record
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub owner: Uuid,
    /// Favorited campsites in the order they were added
    #[schema(value_type = Vec<String>)]
    pub campsites: Vec<CampsiteId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl FavoritesRecord {
    /// Create a fresh record from candidate campsites, keeping first occurrences.
    pub fn new(owner: Uuid, candidates: impl IntoIterator<Item = CampsiteId>) -> Self {
        let now = Utc::now();
        let mut record = Self {
            id: Uuid::new_v4(),
            owner,
            campsites: Vec::new(),
            created_at: now,
            updated_at: now,
        };
        record.append_missing(candidates);
        record
    }

    /// Check whether the campsite is already a favorite
    pub fn contains(&self, campsite: &CampsiteId) -> bool {
        self.campsites.contains(campsite)
    }

    /// Append every candidate not yet present, in input order.
    ///
    /// Returns the number of campsites added.
    pub fn add_campsites(&mut self, candidates: impl IntoIterator<Item = CampsiteId>) -> usize {
        let added = self.append_missing(candidates);
        if added > 0 {
            self.updated_at = Utc::now();
        }
        added
    }

    /// Append one campsite; `false` when it was already present.
    pub fn add_campsite(&mut self, campsite: CampsiteId) -> bool {
        self.add_campsites(std::iter::once(campsite)) == 1
    }

    /// Remove one campsite, keeping the relative order of the others.
    ///
    /// Returns `false` when the campsite was not present.
    pub fn remove_campsite(&mut self, campsite: &CampsiteId) -> bool {
        match self.campsites.iter().position(|c| c == campsite) {
            Some(index) => {
                self.campsites.remove(index);
                self.updated_at = Utc::now();
                true
            }
            None => false,
        }
    }

    fn append_missing(&mut self, candidates: impl IntoIterator<Item = CampsiteId>) -> usize {
        let before = self.campsites.len();
        for candidate in candidates {
            if !self.campsites.contains(&candidate) {
                self.campsites.push(candidate);
            }
        }
        self.campsites.len() - before
    }
}

/// Why a mutation left the favorites untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoOpReason {
    /// Every campsite of a bulk add was already present
    AlreadyInFavorites,
    /// The single campsite to add was already present
    AlreadyFavorited,
    /// The campsite to remove is not in the record
    NotInFavorites,
    /// The user has no record at all
    NothingToDelete,
}

impl NoOpReason {
    pub fn message(&self) -> &'static str {
        match self {
            NoOpReason::AlreadyInFavorites => MSG_ALREADY_IN_FAVORITES,
            NoOpReason::AlreadyFavorited => MSG_ALREADY_FAVORITED,
            NoOpReason::NotInFavorites => MSG_NOT_IN_FAVORITES,
            NoOpReason::NothingToDelete => MSG_NOTHING_TO_DELETE,
        }
    }
}

impl std::fmt::Display for NoOpReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Result of a favorites mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FavoritesOutcome {
    /// The record as created, updated or deleted
    Updated(FavoritesRecord),
    /// Nothing changed; target state already held
    NoOp(NoOpReason),
}

/// Favorites record with owner and campsites resolved.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct FavoritesView {
    pub id: Uuid,
    pub owner: UserProfile,
    pub campsites: Vec<Campsite>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl FavoritesView {
    /// Resolve a record against looked-up campsites.
    ///
    /// Campsites come back in record order; references without a match are dropped.
    pub fn resolve(record: FavoritesRecord, owner: UserProfile, found: Vec<Campsite>) -> Self {
        let mut found = found;
        let campsites = record
            .campsites
            .iter()
            .filter_map(|id| {
                let index = found.iter().position(|c| &c.id == id)?;
                Some(found.swap_remove(index))
            })
            .collect();

        Self {
            id: record.id,
            owner,
            campsites,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}
