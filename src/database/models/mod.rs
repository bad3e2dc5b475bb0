pub mod album;
pub mod artist;
pub mod bible;
pub mod church;
pub mod favorite;
pub mod history;
pub mod pastor;
pub mod playlist;
pub mod sermon;
pub mod song;
pub mod target;
pub mod user;

pub use album::Album;
pub use artist::Artist;
pub use bible::BibleVerse;
pub use church::Church;
pub use favorite::{CreateFavoriteRequest, Favorite};
pub use history::{CreateHistoryRequest, HistoryEntry, NewHistoryEntry};
pub use pastor::Pastor;
pub use playlist::{CreatePlaylistRequest, NewPlaylist, Playlist, PlaylistSong};
pub use sermon::Sermon;
pub use song::Song;
pub use target::ListenTarget;
pub use user::{UpsertUser, User};
