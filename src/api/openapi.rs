//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers::{favorites_handler, CampsiteRef};
use crate::domain::{Campsite, CampsiteId, FavoritesRecord, FavoritesView, UserProfile};

/// OpenAPI documentation for the favorites API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Campsite Favorites API",
        version = "0.1.0",
        description = "Per-user favorite campsites",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        favorites_handler::list_favorites,
        favorites_handler::add_favorites,
        favorites_handler::replace_favorites,
        favorites_handler::delete_favorites,
        favorites_handler::get_favorite,
        favorites_handler::add_favorite,
        favorites_handler::replace_favorite,
        favorites_handler::remove_favorite,
    ),
    components(
        schemas(
            CampsiteId,
            CampsiteRef,
            Campsite,
            UserProfile,
            FavoritesRecord,
            FavoritesView,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Favorites", description = "Favorite campsites of the authenticated user")
    )
)]
pub struct ApiDoc;

/// Security scheme modifier for JWT Bearer authentication
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT issued by the identity service"))
                        .build(),
                ),
            );
        }
    }
}
