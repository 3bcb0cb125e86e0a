//! Favorites handlers.
//!
//! `/favorites` works on the caller's whole record, `/favorites/:campsite_id`
//! on a single campsite. Mutations answer with the record as JSON, or with a
//! plain-text notice when nothing had to change.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    middleware,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Extension, Router,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::{ValidatedJson, ValidatedPath};
use crate::api::middleware::{auth_middleware, CurrentUser};
use crate::api::AppState;
use crate::config::FAVORITES_PATH;
use crate::domain::{CampsiteId, FavoritesOutcome, FavoritesRecord, FavoritesView};
use crate::errors::{AppError, AppResult};

/// One entry of a bulk add body: a bare id or an object carrying `_id`.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, ToSchema)]
#[serde(untagged)]
pub enum CampsiteRef {
    Object {
        #[serde(rename = "_id", alias = "id")]
        id: CampsiteId,
    },
    Id(CampsiteId),
}

impl CampsiteRef {
    pub fn id(&self) -> CampsiteId {
        match self {
            CampsiteRef::Object { id } | CampsiteRef::Id(id) => *id,
        }
    }
}

/// Bulk add request body (a JSON array of campsite references)
#[derive(Debug, Deserialize, Validate)]
#[serde(transparent)]
pub struct AddFavoritesRequest {
    #[validate(length(max = 100, message = "At most 100 campsites can be added at once"))]
    pub campsites: Vec<CampsiteRef>,
}

impl AddFavoritesRequest {
    /// Candidate ids in request order
    pub fn campsite_ids(&self) -> Vec<CampsiteId> {
        self.campsites.iter().map(CampsiteRef::id).collect()
    }
}

/// HTTP rendering of a favorites mutation.
pub struct FavoritesResponse(pub FavoritesOutcome);

impl IntoResponse for FavoritesResponse {
    fn into_response(self) -> Response {
        match self.0 {
            FavoritesOutcome::Updated(record) => (StatusCode::OK, Json(record)).into_response(),
            FavoritesOutcome::NoOp(reason) => (StatusCode::OK, reason.message()).into_response(),
        }
    }
}

/// Create favorites routes.
///
/// OPTIONS and the item-level GET are reachable without a token; every
/// other verb goes through the JWT middleware.
pub fn favorites_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(list_favorites)
                .post(add_favorites)
                .put(replace_favorites)
                .delete(delete_favorites)
                .route_layer(middleware::from_fn_with_state(
                    state.clone(),
                    auth_middleware,
                ))
                .options(preflight),
        )
        .route(
            "/:campsite_id",
            post(add_favorite)
                .put(replace_favorite)
                .delete(remove_favorite)
                .route_layer(middleware::from_fn_with_state(state, auth_middleware))
                .get(get_favorite)
                .options(preflight),
        )
}

/// Pre-flight answer for capability discovery
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

/// List the caller's favorites
#[utoipa::path(
    get,
    path = "/favorites",
    tag = "Favorites",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Zero or one resolved favorites record", body = Vec<FavoritesView>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_favorites(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
) -> AppResult<Json<Vec<FavoritesView>>> {
    let favorites = state
        .favorites_service
        .list_favorites(current_user.id)
        .await?;

    Ok(Json(favorites))
}

/// Add several campsites to the caller's favorites
#[utoipa::path(
    post,
    path = "/favorites",
    tag = "Favorites",
    security(("bearer_auth" = [])),
    request_body = Vec<CampsiteRef>,
    responses(
        (status = 200, description = "Record created or updated; plain text when all campsites were already favorites", body = FavoritesRecord),
        (status = 400, description = "Malformed campsite reference"),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn add_favorites(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    ValidatedJson(payload): ValidatedJson<AddFavoritesRequest>,
) -> AppResult<FavoritesResponse> {
    let outcome = state
        .favorites_service
        .add_campsites(current_user.id, payload.campsite_ids())
        .await?;

    Ok(FavoritesResponse(outcome))
}

/// Replacing the collection is not supported
#[utoipa::path(
    put,
    path = "/favorites",
    tag = "Favorites",
    security(("bearer_auth" = [])),
    responses(
        (status = 403, description = "Operation not supported", body = String, content_type = "text/plain")
    )
)]
pub async fn replace_favorites() -> AppError {
    AppError::unsupported("PUT", FAVORITES_PATH)
}

/// Delete all of the caller's favorites
#[utoipa::path(
    delete,
    path = "/favorites",
    tag = "Favorites",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Deleted record; plain text when there was nothing to delete", body = FavoritesRecord),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn delete_favorites(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
) -> AppResult<FavoritesResponse> {
    let outcome = state
        .favorites_service
        .delete_favorites(current_user.id)
        .await?;

    Ok(FavoritesResponse(outcome))
}

/// Reading a single favorite is not supported
#[utoipa::path(
    get,
    path = "/favorites/{campsite_id}",
    tag = "Favorites",
    params(("campsite_id" = String, Path, description = "Campsite identifier")),
    responses(
        (status = 403, description = "Operation not supported", body = String, content_type = "text/plain")
    )
)]
pub async fn get_favorite(Path(campsite_id): Path<String>) -> AppError {
    AppError::unsupported("GET", &format!("{}/{}", FAVORITES_PATH, campsite_id))
}

/// Add one campsite to the caller's favorites
#[utoipa::path(
    post,
    path = "/favorites/{campsite_id}",
    tag = "Favorites",
    security(("bearer_auth" = [])),
    params(("campsite_id" = String, Path, description = "Campsite identifier")),
    responses(
        (status = 200, description = "Record created or updated; plain text when already favorited", body = FavoritesRecord),
        (status = 400, description = "Malformed campsite identifier"),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn add_favorite(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    ValidatedPath(campsite_id): ValidatedPath<CampsiteId>,
) -> AppResult<FavoritesResponse> {
    let outcome = state
        .favorites_service
        .add_campsite(current_user.id, campsite_id)
        .await?;

    Ok(FavoritesResponse(outcome))
}

/// Replacing a single favorite is not supported
#[utoipa::path(
    put,
    path = "/favorites/{campsite_id}",
    tag = "Favorites",
    security(("bearer_auth" = [])),
    params(("campsite_id" = String, Path, description = "Campsite identifier")),
    responses(
        (status = 403, description = "Operation not supported", body = String, content_type = "text/plain")
    )
)]
pub async fn replace_favorite(Path(campsite_id): Path<String>) -> AppError {
    AppError::unsupported("PUT", &format!("{}/{}", FAVORITES_PATH, campsite_id))
}

/// Remove one campsite from the caller's favorites
#[utoipa::path(
    delete,
    path = "/favorites/{campsite_id}",
    tag = "Favorites",
    security(("bearer_auth" = [])),
    params(("campsite_id" = String, Path, description = "Campsite identifier")),
    responses(
        (status = 200, description = "Updated record; plain text when the campsite was not a favorite", body = FavoritesRecord),
        (status = 400, description = "Malformed campsite identifier"),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn remove_favorite(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    ValidatedPath(campsite_id): ValidatedPath<CampsiteId>,
) -> AppResult<FavoritesResponse> {
    let outcome = state
        .favorites_service
        .remove_campsite(current_user.id, campsite_id)
        .await?;

    Ok(FavoritesResponse(outcome))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bulk_body_accepts_ids_and_objects() {
        let a = uuid::Uuid::new_v4();
        let b = uuid::Uuid::new_v4();
        let body = format!(r#"[{{"_id":"{a}","name":"React Lake"}}, "{b}"]"#);

        let request: AddFavoritesRequest = serde_json::from_str(&body).unwrap();

        assert_eq!(
            request.campsite_ids(),
            vec![CampsiteId::new(a), CampsiteId::new(b)]
        );
    }

    #[test]
    fn bulk_body_rejects_malformed_ids() {
        let result = serde_json::from_str::<AddFavoritesRequest>(r#"[{"_id":"not-a-uuid"}]"#);
        assert!(result.is_err());
    }

    #[test]
    fn oversized_batch_fails_validation() {
        let campsites = (0..101)
            .map(|_| CampsiteRef::Id(CampsiteId::new(uuid::Uuid::new_v4())))
            .collect();
        let request = AddFavoritesRequest { campsites };

        assert!(request.validate().is_err());
    }
}
