//! Owner profile as resolved for favorites listings.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Public view of the user who owns a favorites record.
///
/// Accounts are managed by the identity service; this is a read model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserProfile {
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "camper@example.com")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "Jane Camper")]
    pub name: Option<String>,
}

impl UserProfile {
    /// Profile carrying only the identifier, used when the account row is gone.
    pub fn unresolved(id: Uuid) -> Self {
        Self {
            id,
            email: None,
            name: None,
        }
    }
}
