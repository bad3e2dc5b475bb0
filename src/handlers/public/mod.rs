// Public handlers: no authentication, read-only catalog surface.

pub mod albums;
pub mod artists;
pub mod bible;
pub mod churches;
pub mod pastors;
pub mod search;
pub mod sermons;
pub mod songs;
