use axum::{extract::State, routing::get, Router};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use canticle_api::database::Storage;
use canticle_api::handlers::{self, AppState};
use canticle_api::middleware::auth::jwt_auth_middleware;

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = canticle_api::config::config();
    tracing::info!("Starting Canticle API in {:?} mode", config.environment);

    let database_url = std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| "postgresql://localhost/canticle".to_string());
    let storage =
        Storage::connect(&database_url).unwrap_or_else(|e| panic!("invalid DATABASE_URL: {}", e));

    // A missing database is reported via /health rather than preventing startup.
    if let Err(e) = storage.migrate().await {
        tracing::warn!("migrations not applied: {}", e);
    }

    let app = app(AppState { storage });

    // Allow tests or deployments to override port via env
    let port = std::env::var("CANTICLE_PORT")
        .ok()
        .or_else(|| std::env::var("PORT").ok())
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(3000);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    println!("Canticle API server listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}

fn app(state: AppState) -> Router {
    Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        .merge(catalog_routes())
        .merge(bible_routes())
        .merge(search_routes())
        // Protected (auth gate applied per group)
        .merge(library_routes())
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn catalog_routes() -> Router<AppState> {
    use handlers::public::{albums, artists, churches, pastors, sermons, songs};

    Router::new()
        .route("/api/songs", get(songs::list))
        .route("/api/songs/:id", get(songs::show))
        .route("/api/albums", get(albums::list))
        .route("/api/artists", get(artists::list))
        .route("/api/artists/:id", get(artists::show))
        .route("/api/sermons", get(sermons::list))
        .route("/api/sermons/:id", get(sermons::show))
        .route("/api/pastors", get(pastors::list))
        .route("/api/pastors/:id", get(pastors::show))
        .route("/api/churches", get(churches::list))
        .route("/api/churches/:id", get(churches::show))
}

fn bible_routes() -> Router<AppState> {
    use handlers::public::bible;

    Router::new()
        .route("/api/bible/verse-of-the-day", get(bible::verse_of_the_day))
        .route("/api/bible/verse", get(bible::verse_by_reference))
}

fn search_routes() -> Router<AppState> {
    use handlers::public::search;

    Router::new().route("/api/search", get(search::search))
}

fn library_routes() -> Router<AppState> {
    use axum::routing::delete;
    use handlers::protected::{auth, favorites, history, playlists};

    Router::new()
        .route("/api/auth/user", get(auth::current_user))
        .route(
            "/api/playlists",
            get(playlists::list).post(playlists::create),
        )
        .route(
            "/api/playlists/:id",
            get(playlists::show).delete(playlists::destroy),
        )
        .route(
            "/api/favorites",
            get(favorites::list).post(favorites::create),
        )
        .route("/api/favorites/:id", delete(favorites::destroy))
        .route("/api/history", get(history::list).post(history::create))
        .route_layer(axum::middleware::from_fn(jwt_auth_middleware))
}

async fn root() -> axum::response::Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    axum::response::Json(json!({
        "name": "Canticle API",
        "version": version,
        "description": "Media catalog backend for worship music, sermons, and scripture",
        "endpoints": {
            "home": "/ (public)",
            "catalog": "/api/songs, /api/albums, /api/artists, /api/sermons, /api/pastors, /api/churches (public)",
            "bible": "/api/bible/verse-of-the-day, /api/bible/verse (public)",
            "search": "/api/search?q= (public)",
            "auth": "/api/auth/user (protected)",
            "library": "/api/playlists, /api/favorites, /api/history (protected)",
        }
    }))
}

async fn health(State(state): State<AppState>) -> impl axum::response::IntoResponse {
    let now = chrono::Utc::now();

    match state.storage.health_check().await {
        Ok(_) => (
            axum::http::StatusCode::OK,
            axum::response::Json(json!({
                "status": "ok",
                "timestamp": now,
                "database": "ok"
            })),
        ),
        Err(e) => (
            axum::http::StatusCode::SERVICE_UNAVAILABLE,
            axum::response::Json(json!({
                "status": "degraded",
                "timestamp": now,
                "database_error": e.to_string()
            })),
        ),
    }
}
