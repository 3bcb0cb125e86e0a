//! HTTP request handlers.

pub mod favorites_handler;
pub mod health_handler;

pub use favorites_handler::{
    favorites_routes, AddFavoritesRequest, CampsiteRef, FavoritesResponse,
};
pub use health_handler::health_routes;
