//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.

mod campsite_repository;
pub(crate) mod entities;
mod favorite_repository;
mod user_repository;

pub use campsite_repository::{CampsiteRepository, CampsiteStore};
pub use favorite_repository::{FavoriteRepository, FavoriteStore};
pub use user_repository::{UserRepository, UserStore};

// Export mocks for unit tests
#[cfg(test)]
pub use campsite_repository::MockCampsiteRepository;
#[cfg(test)]
pub use favorite_repository::MockFavoriteRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
