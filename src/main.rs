use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use std::time::Duration;

use axum::http::HeaderValue;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use slotline::adapters::auth::{BcryptPasswordHasher, JwtTokenService};
use slotline::adapters::http::{api_router, AuthHandlers, SessionHandlers};
use slotline::adapters::postgres::{PostgresSessionStore, PostgresUserStore};
use slotline::application::handlers::auth::LoginHandler;
use slotline::application::handlers::session::{
    ConfirmSessionHandler, DeleteSessionHandler, ListAllSessionsHandler, ListOwnSessionsHandler,
    ProposeSessionHandler, RescheduleSessionHandler, ScheduleLock, UnscheduleSessionHandler,
};
use slotline::config::AppConfig;
use slotline::ports::{PasswordHasher, SessionStore, TokenService, UserStore};

#[tokio::main]
async fn main() {
    let config = AppConfig::load().expect("Failed to load configuration");

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.server.log_level.clone()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    config.validate().expect("Invalid configuration");

    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .connect(&config.database.url)
        .await
        .expect("Failed to connect to Postgres");

    if config.database.run_migrations {
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("Failed to run migrations");
        tracing::info!("migrations applied");
    }

    let session_store: Arc<dyn SessionStore> = Arc::new(PostgresSessionStore::new(pool.clone()));
    let user_store: Arc<dyn UserStore> = Arc::new(PostgresUserStore::new(pool));
    let tokens: Arc<dyn TokenService> = Arc::new(JwtTokenService::new(
        &config.auth.jwt_secret,
        config.auth.token_expiry_hours,
    ));
    let hasher: Arc<dyn PasswordHasher> =
        Arc::new(BcryptPasswordHasher::with_cost(config.auth.bcrypt_cost));

    // Confirm and reschedule share one lock for their check-then-write
    // sections.
    let lock = ScheduleLock::new();

    let session_handlers = SessionHandlers::new(
        Arc::new(ProposeSessionHandler::new(session_store.clone())),
        Arc::new(ConfirmSessionHandler::new(
            session_store.clone(),
            lock.clone(),
        )),
        Arc::new(RescheduleSessionHandler::new(
            session_store.clone(),
            lock.clone(),
        )),
        Arc::new(UnscheduleSessionHandler::new(session_store.clone())),
        Arc::new(DeleteSessionHandler::new(session_store.clone())),
        Arc::new(ListAllSessionsHandler::new(session_store.clone())),
        Arc::new(ListOwnSessionsHandler::new(session_store)),
    );
    let auth_handlers = AuthHandlers::new(Arc::new(LoginHandler::new(
        user_store,
        hasher,
        tokens.clone(),
    )));

    let mut app = api_router(session_handlers, auth_handlers, tokens)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )));

    // Configured origins win; without them, development stays permissive
    // and production gets no CORS layer at all.
    let cors_origins: Vec<HeaderValue> = config
        .server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();
    if !cors_origins.is_empty() {
        app = app.layer(
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(cors_origins))
                .allow_methods(Any)
                .allow_headers(Any),
        );
    } else if !config.is_production() {
        app = app.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );
    }

    let addr = config
        .server
        .socket_addr()
        .expect("Invalid server address");
    tracing::info!("listening on {}", addr);

    axum::serve(
        tokio::net::TcpListener::bind(&addr)
            .await
            .expect("Failed to bind"),
        app,
    )
    .await
    .expect("Server error");
}
