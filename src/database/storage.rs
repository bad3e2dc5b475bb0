use std::time::Duration;

use serde::Serialize;
use sqlx::{postgres::PgPoolOptions, PgPool};
use thiserror::Error;
use tracing::info;

use super::models::{
    Album, Artist, BibleVerse, Church, Favorite, HistoryEntry, ListenTarget, NewHistoryEntry,
    NewPlaylist, Pastor, Playlist, Sermon, Song, UpsertUser, User,
};
use crate::config;
use uuid::Uuid;

/// Reference served by `verse_of_the_day`.
const DAILY_VERSE: (&str, i32, i32) = ("Psalms", 23, 1);

/// History listings are capped; the log itself is unbounded.
const HISTORY_LIMIT: i64 = 50;

/// Per-entity cap for the aggregate search buckets.
const SEARCH_LIMIT: i64 = 10;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Missing configuration: {0}")]
    ConfigMissing(&'static str),

    #[error("Migration error: {0}")]
    Migration(String),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Aggregate search response: one bucket per entity type, no cross-type
/// relevance merge.
#[derive(Debug, Serialize)]
pub struct SearchResults {
    pub songs: Vec<Song>,
    pub artists: Vec<Artist>,
    pub sermons: Vec<Sermon>,
    pub churches: Vec<Church>,
}

/// All data-store access for the service. Constructed once at startup and
/// handed to the router; handlers never reach for a global connection.
#[derive(Clone)]
pub struct Storage {
    pool: PgPool,
}

impl Storage {
    /// Build the pool without dialing the database; connections are opened
    /// on first use so the server can come up (degraded) while the store is
    /// unreachable.
    pub fn connect(database_url: &str) -> Result<Self, StorageError> {
        let db_config = &config::config().database;

        let pool = PgPoolOptions::new()
            .max_connections(db_config.max_connections)
            .acquire_timeout(Duration::from_secs(db_config.acquire_timeout_secs))
            .connect_lazy(database_url)?;

        info!(
            "Created database pool ({} max connections)",
            db_config.max_connections
        );
        Ok(Self { pool })
    }

    /// Connect using `DATABASE_URL` from the environment.
    pub fn connect_from_env() -> Result<Self, StorageError> {
        let url = std::env::var("DATABASE_URL")
            .map_err(|_| StorageError::ConfigMissing("DATABASE_URL"))?;
        Self::connect(&url)
    }

    pub async fn migrate(&self) -> Result<(), StorageError> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| StorageError::Migration(e.to_string()))
    }

    /// Pings the pool to ensure connectivity.
    pub async fn health_check(&self) -> Result<(), StorageError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    // --- users ---

    pub async fn get_user(&self, id: Uuid) -> Result<Option<User>, StorageError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    /// Insert-or-update keyed on the user id; every supplied field is
    /// overwritten and `updated_at` refreshed.
    pub async fn upsert_user(&self, user: UpsertUser) -> Result<User, StorageError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, email, first_name, last_name, profile_image_url)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (id) DO UPDATE SET
                email = EXCLUDED.email,
                first_name = EXCLUDED.first_name,
                last_name = EXCLUDED.last_name,
                profile_image_url = EXCLUDED.profile_image_url,
                updated_at = now()
            RETURNING *
            "#,
        )
        .bind(user.id)
        .bind(user.email)
        .bind(user.first_name)
        .bind(user.last_name)
        .bind(user.profile_image_url)
        .fetch_one(&self.pool)
        .await?;
        Ok(user)
    }

    // --- songs ---

    pub async fn all_songs(&self) -> Result<Vec<Song>, StorageError> {
        let songs = sqlx::query_as::<_, Song>("SELECT * FROM songs ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await?;
        Ok(songs)
    }

    pub async fn song_by_id(&self, id: Uuid) -> Result<Option<Song>, StorageError> {
        let song = sqlx::query_as::<_, Song>("SELECT * FROM songs WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(song)
    }

    /// Case-sensitive substring match on the title, uncapped.
    pub async fn search_songs(&self, query: &str) -> Result<Vec<Song>, StorageError> {
        let songs = sqlx::query_as::<_, Song>("SELECT * FROM songs WHERE title LIKE $1")
            .bind(like_pattern(query))
            .fetch_all(&self.pool)
            .await?;
        Ok(songs)
    }

    // --- albums ---

    pub async fn all_albums(&self) -> Result<Vec<Album>, StorageError> {
        let albums = sqlx::query_as::<_, Album>("SELECT * FROM albums ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await?;
        Ok(albums)
    }

    pub async fn albums_by_artist(&self, artist_id: Uuid) -> Result<Vec<Album>, StorageError> {
        let albums = sqlx::query_as::<_, Album>(
            "SELECT * FROM albums WHERE artist_id = $1 ORDER BY created_at DESC",
        )
        .bind(artist_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(albums)
    }

    // --- artists ---

    pub async fn all_artists(&self) -> Result<Vec<Artist>, StorageError> {
        let artists = sqlx::query_as::<_, Artist>("SELECT * FROM artists ORDER BY name")
            .fetch_all(&self.pool)
            .await?;
        Ok(artists)
    }

    pub async fn artist_by_id(&self, id: Uuid) -> Result<Option<Artist>, StorageError> {
        let artist = sqlx::query_as::<_, Artist>("SELECT * FROM artists WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(artist)
    }

    // --- sermons ---

    pub async fn all_sermons(&self) -> Result<Vec<Sermon>, StorageError> {
        let sermons = sqlx::query_as::<_, Sermon>("SELECT * FROM sermons ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await?;
        Ok(sermons)
    }

    pub async fn sermon_by_id(&self, id: Uuid) -> Result<Option<Sermon>, StorageError> {
        let sermon = sqlx::query_as::<_, Sermon>("SELECT * FROM sermons WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(sermon)
    }

    pub async fn sermons_by_pastor(&self, pastor_id: Uuid) -> Result<Vec<Sermon>, StorageError> {
        let sermons = sqlx::query_as::<_, Sermon>(
            "SELECT * FROM sermons WHERE pastor_id = $1 ORDER BY created_at DESC",
        )
        .bind(pastor_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(sermons)
    }

    pub async fn sermons_by_church(&self, church_id: Uuid) -> Result<Vec<Sermon>, StorageError> {
        let sermons = sqlx::query_as::<_, Sermon>(
            "SELECT * FROM sermons WHERE church_id = $1 ORDER BY created_at DESC",
        )
        .bind(church_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(sermons)
    }

    pub async fn sermons_by_category(&self, category: &str) -> Result<Vec<Sermon>, StorageError> {
        let sermons = sqlx::query_as::<_, Sermon>(
            "SELECT * FROM sermons WHERE category = $1 ORDER BY created_at DESC",
        )
        .bind(category)
        .fetch_all(&self.pool)
        .await?;
        Ok(sermons)
    }

    // --- pastors ---

    pub async fn all_pastors(&self) -> Result<Vec<Pastor>, StorageError> {
        let pastors = sqlx::query_as::<_, Pastor>("SELECT * FROM pastors ORDER BY name")
            .fetch_all(&self.pool)
            .await?;
        Ok(pastors)
    }

    pub async fn pastor_by_id(&self, id: Uuid) -> Result<Option<Pastor>, StorageError> {
        let pastor = sqlx::query_as::<_, Pastor>("SELECT * FROM pastors WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(pastor)
    }

    // --- churches ---

    pub async fn all_churches(&self) -> Result<Vec<Church>, StorageError> {
        let churches = sqlx::query_as::<_, Church>("SELECT * FROM churches ORDER BY name")
            .fetch_all(&self.pool)
            .await?;
        Ok(churches)
    }

    pub async fn church_by_id(&self, id: Uuid) -> Result<Option<Church>, StorageError> {
        let church = sqlx::query_as::<_, Church>("SELECT * FROM churches WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(church)
    }

    // --- bible verses ---

    pub async fn verse_of_the_day(&self) -> Result<Option<BibleVerse>, StorageError> {
        let (book, chapter, verse) = DAILY_VERSE;
        self.verse_by_reference(book, chapter, verse).await
    }

    pub async fn verse_by_reference(
        &self,
        book: &str,
        chapter: i32,
        verse: i32,
    ) -> Result<Option<BibleVerse>, StorageError> {
        let result = sqlx::query_as::<_, BibleVerse>(
            "SELECT * FROM bible_verses WHERE book = $1 AND chapter = $2 AND verse = $3",
        )
        .bind(book)
        .bind(chapter)
        .bind(verse)
        .fetch_optional(&self.pool)
        .await?;
        Ok(result)
    }

    // --- playlists ---

    pub async fn playlists_for_user(&self, user_id: Uuid) -> Result<Vec<Playlist>, StorageError> {
        let playlists = sqlx::query_as::<_, Playlist>(
            "SELECT * FROM playlists WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(playlists)
    }

    pub async fn create_playlist(
        &self,
        user_id: Uuid,
        playlist: NewPlaylist,
    ) -> Result<Playlist, StorageError> {
        let playlist = sqlx::query_as::<_, Playlist>(
            r#"
            INSERT INTO playlists (user_id, name, description, is_public, cover_url)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(playlist.name)
        .bind(playlist.description)
        .bind(playlist.is_public)
        .bind(playlist.cover_url)
        .fetch_one(&self.pool)
        .await?;
        Ok(playlist)
    }

    pub async fn playlist_by_id(&self, id: Uuid) -> Result<Option<Playlist>, StorageError> {
        let playlist = sqlx::query_as::<_, Playlist>("SELECT * FROM playlists WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(playlist)
    }

    /// Rows in playlist_songs go with the playlist via the schema-level
    /// cascade; no procedural cleanup here.
    pub async fn delete_playlist(&self, id: Uuid) -> Result<(), StorageError> {
        sqlx::query("DELETE FROM playlists WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    // --- favorites ---

    pub async fn favorites_for_user(&self, user_id: Uuid) -> Result<Vec<Favorite>, StorageError> {
        let favorites = sqlx::query_as::<_, Favorite>(
            "SELECT * FROM favorites WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(favorites)
    }

    pub async fn add_favorite(
        &self,
        user_id: Uuid,
        target: ListenTarget,
    ) -> Result<Favorite, StorageError> {
        let favorite = sqlx::query_as::<_, Favorite>(
            r#"
            INSERT INTO favorites (user_id, song_id, sermon_id)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(target.song_id())
        .bind(target.sermon_id())
        .fetch_one(&self.pool)
        .await?;
        Ok(favorite)
    }

    pub async fn remove_favorite(&self, id: Uuid) -> Result<(), StorageError> {
        sqlx::query("DELETE FROM favorites WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    // --- listening history ---

    pub async fn history_for_user(&self, user_id: Uuid) -> Result<Vec<HistoryEntry>, StorageError> {
        let entries = sqlx::query_as::<_, HistoryEntry>(
            "SELECT * FROM listening_history WHERE user_id = $1 ORDER BY played_at DESC LIMIT $2",
        )
        .bind(user_id)
        .bind(HISTORY_LIMIT)
        .fetch_all(&self.pool)
        .await?;
        Ok(entries)
    }

    pub async fn add_history_entry(
        &self,
        user_id: Uuid,
        entry: NewHistoryEntry,
    ) -> Result<HistoryEntry, StorageError> {
        let entry = sqlx::query_as::<_, HistoryEntry>(
            r#"
            INSERT INTO listening_history (user_id, song_id, sermon_id, duration)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(entry.target.song_id())
        .bind(entry.target.sermon_id())
        .bind(entry.duration)
        .fetch_one(&self.pool)
        .await?;
        Ok(entry)
    }

    // --- aggregate search ---

    /// Fan-out across the four searchable entity types, joined before
    /// responding. A failure in any branch fails the whole search; there is
    /// no partial-results path.
    pub async fn search_all(&self, query: &str) -> Result<SearchResults, StorageError> {
        let pattern = like_pattern(query);

        let (songs, artists, sermons, churches) = futures::try_join!(
            sqlx::query_as::<_, Song>("SELECT * FROM songs WHERE title LIKE $1 LIMIT $2")
                .bind(&pattern)
                .bind(SEARCH_LIMIT)
                .fetch_all(&self.pool),
            sqlx::query_as::<_, Artist>("SELECT * FROM artists WHERE name LIKE $1 LIMIT $2")
                .bind(&pattern)
                .bind(SEARCH_LIMIT)
                .fetch_all(&self.pool),
            sqlx::query_as::<_, Sermon>(
                "SELECT * FROM sermons WHERE title LIKE $1 OR description LIKE $1 LIMIT $2",
            )
            .bind(&pattern)
            .bind(SEARCH_LIMIT)
            .fetch_all(&self.pool),
            sqlx::query_as::<_, Church>("SELECT * FROM churches WHERE name LIKE $1 LIMIT $2")
                .bind(&pattern)
                .bind(SEARCH_LIMIT)
                .fetch_all(&self.pool),
        )?;

        Ok(SearchResults {
            songs,
            artists,
            sermons,
            churches,
        })
    }
}

fn like_pattern(query: &str) -> String {
    format!("%{}%", query)
}
