//! Domain layer - Core business entities and logic
//!
//! This module contains the core domain models that represent
//! business concepts independent of infrastructure concerns.

pub mod campsite;
pub mod favorites;
pub mod user;

pub use campsite::{Campsite, CampsiteId};
pub use favorites::{FavoritesOutcome, FavoritesRecord, FavoritesView, NoOpReason};
pub use user::UserProfile;
