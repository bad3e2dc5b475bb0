mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::json;
use uuid::Uuid;

#[tokio::test]
async fn library_routes_require_a_token() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    for path in ["/api/auth/user", "/api/playlists", "/api/favorites", "/api/history"] {
        let res = client
            .get(format!("{}{}", server.base_url, path))
            .send()
            .await?;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED, "{}", path);
    }

    let res = client
        .get(format!("{}/api/playlists", server.base_url))
        .header("Authorization", "Bearer not-a-real-token")
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn favorite_target_must_be_exactly_one() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();
    let token = common::auth_token(Uuid::new_v4(), None);

    // Both targets set: rejected before any storage call.
    let res = client
        .post(format!("{}/api/favorites", server.base_url))
        .bearer_auth(&token)
        .json(&json!({ "songId": Uuid::new_v4(), "sermonId": Uuid::new_v4() }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body = res.json::<serde_json::Value>().await?;
    assert!(body["errors"].as_array().is_some_and(|e| !e.is_empty()));

    // Neither target set: also rejected.
    let res = client
        .post(format!("{}/api/favorites", server.base_url))
        .bearer_auth(&token)
        .json(&json!({}))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn playlist_payload_requires_a_name() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();
    let token = common::auth_token(Uuid::new_v4(), None);

    let res = client
        .post(format!("{}/api/playlists", server.base_url))
        .bearer_auth(&token)
        .json(&json!({ "description": "no name given" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["errors"][0]["field"], "name");
    Ok(())
}

#[tokio::test]
async fn auth_user_materializes_the_caller() -> Result<()> {
    let server = common::ensure_server().await?;
    if !common::db_ready(server).await {
        eprintln!("skipping: database unavailable");
        return Ok(());
    }
    let client = reqwest::Client::new();

    let user_id = Uuid::new_v4();
    let token = common::auth_token(user_id, Some("reader@example.com"));

    let res = client
        .get(format!("{}/api/auth/user", server.base_url))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["id"], user_id.to_string());
    assert_eq!(body["email"], "reader@example.com");
    Ok(())
}

/// Full ownership walk: private playlists are invisible to strangers, only
/// the owner can delete, and a deleted playlist stays gone.
#[tokio::test]
async fn playlist_ownership_is_enforced() -> Result<()> {
    let server = common::ensure_server().await?;
    if !common::db_ready(server).await {
        eprintln!("skipping: database unavailable");
        return Ok(());
    }
    let client = reqwest::Client::new();

    let owner = common::auth_token(Uuid::new_v4(), Some("owner@example.com"));
    let stranger = common::auth_token(Uuid::new_v4(), Some("stranger@example.com"));

    // Materialize the owner row so the playlist insert has its foreign key.
    let res = client
        .get(format!("{}/api/auth/user", server.base_url))
        .bearer_auth(&owner)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    // Create a private playlist.
    let res = client
        .post(format!("{}/api/playlists", server.base_url))
        .bearer_auth(&owner)
        .json(&json!({ "name": "Quiet Time" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let playlist = res.json::<serde_json::Value>().await?;
    let id = playlist["id"].as_str().expect("playlist id").to_string();
    assert_eq!(playlist["isPublic"], false);

    // Owner sees it in their listing and by id.
    let res = client
        .get(format!("{}/api/playlists", server.base_url))
        .bearer_auth(&owner)
        .send()
        .await?;
    let listing = res.json::<serde_json::Value>().await?;
    assert!(listing
        .as_array()
        .expect("array")
        .iter()
        .any(|p| p["id"] == id.as_str()));

    let res = client
        .get(format!("{}/api/playlists/{}", server.base_url, id))
        .bearer_auth(&owner)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    // A stranger can neither read nor delete it.
    let res = client
        .get(format!("{}/api/playlists/{}", server.base_url, id))
        .bearer_auth(&stranger)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    let res = client
        .delete(format!("{}/api/playlists/{}", server.base_url, id))
        .bearer_auth(&stranger)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    // Still there for the owner after the failed delete.
    let res = client
        .get(format!("{}/api/playlists/{}", server.base_url, id))
        .bearer_auth(&owner)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    // Owner deletes; the playlist is gone afterwards.
    let res = client
        .delete(format!("{}/api/playlists/{}", server.base_url, id))
        .bearer_auth(&owner)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let res = client
        .get(format!("{}/api/playlists/{}", server.base_url, id))
        .bearer_auth(&owner)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn public_playlists_are_visible_to_strangers() -> Result<()> {
    let server = common::ensure_server().await?;
    if !common::db_ready(server).await {
        eprintln!("skipping: database unavailable");
        return Ok(());
    }
    let client = reqwest::Client::new();

    let owner = common::auth_token(Uuid::new_v4(), Some("sharer@example.com"));
    let stranger = common::auth_token(Uuid::new_v4(), None);

    client
        .get(format!("{}/api/auth/user", server.base_url))
        .bearer_auth(&owner)
        .send()
        .await?;

    let res = client
        .post(format!("{}/api/playlists", server.base_url))
        .bearer_auth(&owner)
        .json(&json!({ "name": "Congregation Favorites", "isPublic": true }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let playlist = res.json::<serde_json::Value>().await?;
    let id = playlist["id"].as_str().expect("playlist id");

    let res = client
        .get(format!("{}/api/playlists/{}", server.base_url, id))
        .bearer_auth(&stranger)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn favorites_and_history_round_trip() -> Result<()> {
    let server = common::ensure_server().await?;
    if !common::db_ready(server).await {
        eprintln!("skipping: database unavailable");
        return Ok(());
    }
    let client = reqwest::Client::new();

    // A song to reference; requires a seeded catalog.
    let res = client
        .get(format!("{}/api/songs", server.base_url))
        .send()
        .await?;
    let songs = res.json::<serde_json::Value>().await?;
    let Some(song_id) = songs
        .as_array()
        .and_then(|s| s.first())
        .and_then(|s| s["id"].as_str())
        .map(str::to_string)
    else {
        eprintln!("skipping: catalog not seeded");
        return Ok(());
    };

    let token = common::auth_token(Uuid::new_v4(), Some("listener@example.com"));
    client
        .get(format!("{}/api/auth/user", server.base_url))
        .bearer_auth(&token)
        .send()
        .await?;

    // Favorite the song, see it listed, then remove it.
    let res = client
        .post(format!("{}/api/favorites", server.base_url))
        .bearer_auth(&token)
        .json(&json!({ "songId": song_id }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let favorite = res.json::<serde_json::Value>().await?;
    assert_eq!(favorite["songId"], song_id.as_str());
    assert_eq!(favorite["sermonId"], serde_json::Value::Null);
    let favorite_id = favorite["id"].as_str().expect("favorite id");

    let res = client
        .get(format!("{}/api/favorites", server.base_url))
        .bearer_auth(&token)
        .send()
        .await?;
    let listing = res.json::<serde_json::Value>().await?;
    assert!(listing
        .as_array()
        .expect("array")
        .iter()
        .any(|f| f["id"] == favorite_id));

    let res = client
        .delete(format!("{}/api/favorites/{}", server.base_url, favorite_id))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    // Log a play and read it back from the history listing.
    let res = client
        .post(format!("{}/api/history", server.base_url))
        .bearer_auth(&token)
        .json(&json!({ "songId": song_id, "duration": 245 }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);

    let res = client
        .get(format!("{}/api/history", server.base_url))
        .bearer_auth(&token)
        .send()
        .await?;
    let history = res.json::<serde_json::Value>().await?;
    let entries = history.as_array().expect("array");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["songId"], song_id.as_str());
    assert_eq!(entries[0]["duration"], 245);
    Ok(())
}
