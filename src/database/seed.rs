//! Offline catalog seeding. Catalog tables have no write surface in the
//! running service; this is the only code path that populates them.

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use super::storage::StorageError;

/// Populate the catalog tables with a small fixture set. Skips when the
/// catalog already has rows unless `force` is set.
pub async fn run(pool: &PgPool, force: bool) -> Result<(), StorageError> {
    let existing: i64 = sqlx::query_scalar("SELECT count(*) FROM artists")
        .fetch_one(pool)
        .await?;

    if existing > 0 && !force {
        info!("Catalog already seeded ({} artists); skipping", existing);
        return Ok(());
    }

    let artists = seed_artists(pool).await?;
    let albums = seed_albums(pool, &artists).await?;
    seed_songs(pool, &artists, &albums).await?;
    let churches = seed_churches(pool).await?;
    let pastors = seed_pastors(pool, &churches).await?;
    seed_sermons(pool, &pastors, &churches).await?;
    seed_verses(pool).await?;

    info!("Catalog seeded");
    Ok(())
}

async fn insert_artist(
    pool: &PgPool,
    name: &str,
    bio: &str,
    genre: &str,
) -> Result<Uuid, StorageError> {
    let id = sqlx::query_scalar(
        "INSERT INTO artists (name, bio, genre) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(name)
    .bind(bio)
    .bind(genre)
    .fetch_one(pool)
    .await?;
    Ok(id)
}

async fn seed_artists(pool: &PgPool) -> Result<Vec<Uuid>, StorageError> {
    let rows = [
        (
            "Riverbend Collective",
            "Worship collective writing congregational music for the local church",
            "Worship",
        ),
        (
            "The Hartwell Family",
            "Gospel vocal group known for close-harmony arrangements",
            "Gospel",
        ),
        (
            "Lena Okafor",
            "Singer and worship leader with a decade of recorded albums",
            "Worship",
        ),
    ];

    let mut ids = Vec::with_capacity(rows.len());
    for (name, bio, genre) in rows {
        ids.push(insert_artist(pool, name, bio, genre).await?);
    }
    info!("Artists created: {}", ids.len());
    Ok(ids)
}

async fn seed_albums(pool: &PgPool, artists: &[Uuid]) -> Result<Vec<Uuid>, StorageError> {
    let rows = [
        ("Even Here", artists[0], 2022, "Worship"),
        ("Homecoming", artists[1], 2023, "Gospel"),
        ("Still Waters", artists[2], 2021, "Worship"),
    ];

    let mut ids = Vec::with_capacity(rows.len());
    for (title, artist_id, year, genre) in rows {
        let id: Uuid = sqlx::query_scalar(
            "INSERT INTO albums (title, artist_id, release_year, genre) VALUES ($1, $2, $3, $4) RETURNING id",
        )
        .bind(title)
        .bind(artist_id)
        .bind(year)
        .bind(genre)
        .fetch_one(pool)
        .await?;
        ids.push(id);
    }
    info!("Albums created: {}", ids.len());
    Ok(ids)
}

async fn seed_songs(
    pool: &PgPool,
    artists: &[Uuid],
    albums: &[Uuid],
) -> Result<(), StorageError> {
    let rows = [
        ("Even Here", artists[0], albums[0], 312, "Worship", 15420),
        ("Morning Mercies", artists[0], albums[0], 245, "Worship", 8720),
        ("Carry Me Home", artists[1], albums[1], 298, "Gospel", 28950),
        ("Beside Still Waters", artists[2], albums[2], 286, "Worship", 12350),
    ];

    for (title, artist_id, album_id, duration, genre, play_count) in rows {
        sqlx::query(
            r#"
            INSERT INTO songs (title, artist_id, album_id, duration, genre, play_count)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(title)
        .bind(artist_id)
        .bind(album_id)
        .bind(duration)
        .bind(genre)
        .bind(play_count)
        .execute(pool)
        .await?;
    }
    info!("Songs created: {}", rows.len());
    Ok(())
}

async fn seed_churches(pool: &PgPool) -> Result<Vec<Uuid>, StorageError> {
    let rows = [
        (
            "Graceview Chapel",
            "Asheville, NC",
            "A neighborhood congregation centered on worship and fellowship",
            1200,
        ),
        (
            "Cornerstone Fellowship",
            "Tulsa, OK",
            "A teaching church serving its city through weekly gatherings",
            4800,
        ),
    ];

    let mut ids = Vec::with_capacity(rows.len());
    for (name, location, description, member_count) in rows {
        let id: Uuid = sqlx::query_scalar(
            "INSERT INTO churches (name, location, description, member_count) VALUES ($1, $2, $3, $4) RETURNING id",
        )
        .bind(name)
        .bind(location)
        .bind(description)
        .bind(member_count)
        .fetch_one(pool)
        .await?;
        ids.push(id);
    }
    info!("Churches created: {}", ids.len());
    Ok(ids)
}

async fn seed_pastors(pool: &PgPool, churches: &[Uuid]) -> Result<Vec<Uuid>, StorageError> {
    let rows = [
        (
            "Pastor Daniel Reyes",
            churches[0],
            "Senior pastor at Graceview Chapel, teaching verse by verse",
        ),
        (
            "Pastor Ruth Adeyemi",
            churches[1],
            "Lead pastor at Cornerstone Fellowship, focused on discipleship",
        ),
    ];

    let mut ids = Vec::with_capacity(rows.len());
    for (name, church_id, bio) in rows {
        let id: Uuid = sqlx::query_scalar(
            "INSERT INTO pastors (name, church_id, bio) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(name)
        .bind(church_id)
        .bind(bio)
        .fetch_one(pool)
        .await?;
        ids.push(id);
    }
    info!("Pastors created: {}", ids.len());
    Ok(ids)
}

async fn seed_sermons(
    pool: &PgPool,
    pastors: &[Uuid],
    churches: &[Uuid],
) -> Result<(), StorageError> {
    let rows = [
        (
            "Walking in Faith",
            pastors[0],
            churches[0],
            "Trusting God in uncertain seasons",
            2340,
            "Faith",
            "Hebrews 11:1",
            3420,
        ),
        (
            "Grace That Holds",
            pastors[0],
            churches[0],
            "What it means to be kept by grace",
            2680,
            "Grace",
            "Ephesians 2:8-9",
            4150,
        ),
        (
            "Restored",
            pastors[1],
            churches[1],
            "God's promise of healing and restoration",
            3120,
            "Healing",
            "Isaiah 53:5",
            5680,
        ),
    ];

    for (title, pastor_id, church_id, description, duration, category, scripture, play_count) in
        rows
    {
        sqlx::query(
            r#"
            INSERT INTO sermons (title, pastor_id, church_id, description, duration, category, scripture, play_count)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(title)
        .bind(pastor_id)
        .bind(church_id)
        .bind(description)
        .bind(duration)
        .bind(category)
        .bind(scripture)
        .bind(play_count)
        .execute(pool)
        .await?;
    }
    info!("Sermons created: {}", rows.len());
    Ok(())
}

// Psalm 23 (KJV); verse 1 backs the verse-of-the-day endpoint.
async fn seed_verses(pool: &PgPool) -> Result<(), StorageError> {
    let verses = [
        (1, "The Lord is my shepherd; I shall not want."),
        (
            2,
            "He maketh me to lie down in green pastures: he leadeth me beside the still waters.",
        ),
        (
            3,
            "He restoreth my soul: he leadeth me in the paths of righteousness for his name's sake.",
        ),
        (
            4,
            "Yea, though I walk through the valley of the shadow of death, I will fear no evil: for thou art with me; thy rod and thy staff they comfort me.",
        ),
        (
            5,
            "Thou preparest a table before me in the presence of mine enemies: thou anointest my head with oil; my cup runneth over.",
        ),
        (
            6,
            "Surely goodness and mercy shall follow me all the days of my life: and I will dwell in the house of the Lord for ever.",
        ),
    ];

    for (verse, text) in verses {
        sqlx::query(
            r#"
            INSERT INTO bible_verses (book, chapter, verse, text, translation)
            VALUES ('Psalms', 23, $1, $2, 'KJV')
            ON CONFLICT (book, chapter, verse, translation) DO NOTHING
            "#,
        )
        .bind(verse)
        .bind(text)
        .execute(pool)
        .await?;
    }
    info!("Bible verses created: {}", verses.len());
    Ok(())
}
