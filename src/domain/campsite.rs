//! Campsite references and the campsite read model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Identifier of a campsite owned by the campsite catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = String, format = Uuid, example = "6f1c2b9e-3a41-4d8e-9b6a-2f0d7c5e8a13")]
pub struct CampsiteId(pub Uuid);

impl CampsiteId {
    pub fn new(id: Uuid) -> Self {
        Self(id)
    }

    pub fn into_inner(self) -> Uuid {
        self.0
    }
}

impl std::fmt::Display for CampsiteId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Campsite as published by the catalogue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Campsite {
    #[schema(value_type = String, format = Uuid)]
    pub id: CampsiteId,
    #[schema(example = "React Lake Campground")]
    pub name: String,
    pub description: String,
    #[schema(example = "images/react-lake.jpg")]
    pub image: String,
    #[schema(example = 1233)]
    pub elevation: i32,
    /// Nightly cost in whole currency units
    #[schema(example = 55)]
    pub cost: i32,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
