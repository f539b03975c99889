//! Local persistence layer.

pub mod favorites;
pub mod local;
pub mod sessions;

pub use favorites::FavoriteRepository;
pub use local::LocalStore;
pub use sessions::SessionRepository;

/// Store keys as constants.
pub mod keys {
    pub const SESSIONS: &str = "sessions";
    pub const FAVORITE_SPOTS: &str = "favoriteSpots";
}
