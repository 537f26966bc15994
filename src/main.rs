//! IEEE PESCE Student Branch backend
//!
//! JSON content API for the public website and admin panel, persisted as flat
//! JSON files on disk.

mod api;
mod auth;
mod config;
mod db;
mod errors;
mod models;

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use auth::AuthService;
use config::{Config, LogFormat};
use db::Repository;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
    pub auth: Arc<AuthService>,
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let registry = tracing_subscriber::registry().with(env_filter);
    match config.log_format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }

    tracing::info!("Starting IEEE PESCE backend");
    tracing::info!("Data directory: {:?}", config.data_dir);
    tracing::info!("Public directory: {:?}", config.public_dir);
    tracing::info!("Bind address: {}", config.bind_addr);

    let auth = Arc::new(AuthService::from_config(&config));
    if !auth.login_enabled() {
        tracing::warn!("No admin password configured (PESCE_ADMIN_PASSWORD). Admin login is disabled!");
    }

    // Initialize content storage
    db::init_data_dir(&config.data_dir).await?;
    let repo = Arc::new(Repository::new(&config.data_dir));
    tracing::info!("Content files under {}", repo.data_dir().display());

    let state = AppState {
        repo,
        auth,
        config: Arc::new(config.clone()),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let auth_service = state.auth.clone();

    // Content routes: reads are public, writes need an admin token
    let content_routes = Router::new()
        // Events
        .route("/events", get(api::list_events).post(api::create_event))
        .route(
            "/events/{id}",
            get(api::get_event)
                .put(api::update_event)
                .delete(api::delete_event),
        )
        .route("/events/move-to-past/{id}", post(api::move_event_to_past))
        // Chapters
        .route("/chapters", get(api::list_chapters).post(api::create_chapter))
        .route(
            "/chapters/{id}",
            get(api::get_chapter)
                .put(api::update_chapter)
                .delete(api::delete_chapter),
        )
        // Blog
        .route("/blogs", get(api::list_blog_posts).post(api::create_blog_post))
        .route(
            "/blogs/{id}",
            get(api::get_blog_post)
                .put(api::update_blog_post)
                .delete(api::delete_blog_post),
        )
        // Gallery
        .route(
            "/gallery",
            get(api::list_gallery).post(api::create_gallery_item),
        )
        .route(
            "/gallery/{id}",
            get(api::get_gallery_item)
                .put(api::update_gallery_item)
                .delete(api::delete_gallery_item),
        )
        // Team
        .route("/team", get(api::get_team).post(api::create_member))
        .route("/team/init", post(api::init_team))
        .route(
            "/team/members/{id}",
            put(api::update_member).delete(api::delete_member),
        )
        .route("/team/faculty", post(api::create_faculty))
        .route(
            "/team/faculty/{id}",
            put(api::update_faculty).delete(api::delete_faculty),
        )
        // Resources
        .route(
            "/resources",
            get(api::list_resources).post(api::create_resource),
        )
        .route(
            "/resources/{id}",
            get(api::get_resource)
                .put(api::update_resource)
                .delete(api::delete_resource),
        )
        // Settings & contact
        .route("/settings", get(api::get_settings).put(api::update_settings))
        .route("/contact", get(api::get_contact).put(api::update_contact))
        // Uploads
        .route("/upload/gallery", post(api::upload_gallery_image))
        .route("/upload/team", post(api::upload_team_image))
        .layer(DefaultBodyLimit::max(state.config.max_upload_bytes))
        // Apply admin auth middleware
        .route_layer(middleware::from_fn(move |req, next| {
            auth::admin_auth_layer(auth_service.clone(), req, next)
        }));

    // Login and verify (no token required)
    let auth_routes = Router::new()
        .route("/auth/login", post(api::login))
        .route("/auth/verify", get(api::verify).post(api::verify));

    // Health check (no auth required)
    let health_routes = Router::new().route("/health", get(health_check));

    // Uploaded images and other public files
    let public_files = ServeDir::new(&state.config.public_dir);

    Router::new()
        .nest("/api", content_routes.merge(auth_routes))
        .merge(health_routes)
        .fallback_service(public_files)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests;
