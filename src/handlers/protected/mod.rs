// Protected handlers: require the auth gate to have populated `AuthUser`.
// Every query here is scoped to the authenticated caller; ownership checks
// for playlists live with the handlers, not the storage layer.

pub mod auth;
pub mod favorites;
pub mod history;
pub mod playlists;
