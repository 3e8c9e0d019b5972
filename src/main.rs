//! Service entrypoint: configuration, tracing, database pool, router.

use std::sync::Arc;

use secrecy::Secret;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::EnvFilter;

use qoupon::adapters::auth::{GoTrueAuthProvider, GoTrueConfig};
use qoupon::adapters::email::{ResendConfig, ResendEmailSender};
use qoupon::adapters::http::{
    api_router, AuthHandlers, CouponHandlers, EventHandlers, StatsHandlers, UploadHandlers,
};
use qoupon::adapters::postgres::{
    PostgresCouponLedger, PostgresEventRepository, PostgresStatsReader, PostgresStoreDirectory,
    PostgresVerificationCodeStore,
};
use qoupon::adapters::storage::{HostedObjectStore, ObjectStoreConfig};
use qoupon::application::handlers::auth::{ConfirmVerificationHandler, RequestVerificationHandler};
use qoupon::application::handlers::coupon::{
    IssueCouponHandler, RedeemCouponHandler, ValidateCouponHandler,
};
use qoupon::application::handlers::event::{
    CreateEventHandler, DeleteEventHandler, GetEventHandler, GetPublicEventHandler,
    ListEventsHandler, TrackVisitHandler, UpdateEventHandler,
};
use qoupon::application::handlers::stats::GetStatsOverviewHandler;
use qoupon::config::AppConfig;
use qoupon::ports::{
    AuthProvider, CouponLedger, EmailSender, EventRepository, ImageStorage, StatsReader,
    StoreDirectory, VerificationCodeStore, VisitLog,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level)),
        )
        .init();

    tracing::info!(environment = ?config.server.environment, "starting qoupon");

    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .connect(&config.database.url)
        .await?;

    if config.database.run_migrations {
        tracing::info!("running migrations");
        sqlx::migrate!("./migrations").run(&pool).await?;
    }

    // Persistence adapters
    let ledger: Arc<dyn CouponLedger> = Arc::new(PostgresCouponLedger::new(pool.clone()));
    let directory: Arc<dyn StoreDirectory> = Arc::new(PostgresStoreDirectory::new(pool.clone()));
    let event_repo = Arc::new(PostgresEventRepository::new(pool.clone()));
    let events: Arc<dyn EventRepository> = event_repo.clone();
    let visits: Arc<dyn VisitLog> = event_repo;
    let stats: Arc<dyn StatsReader> = Arc::new(PostgresStatsReader::new(pool.clone()));
    let verifications: Arc<dyn VerificationCodeStore> =
        Arc::new(PostgresVerificationCodeStore::new(pool.clone()));

    // Hosted collaborators
    let auth_provider: Arc<dyn AuthProvider> = Arc::new(GoTrueAuthProvider::new(GoTrueConfig {
        base_url: config.auth.url.clone(),
        api_key: Secret::new(config.auth.api_key.clone()),
        jwt_secret: Secret::new(config.auth.jwt_secret.clone()),
        audience: config.auth.audience.clone(),
    })?);
    let email: Arc<dyn EmailSender> = Arc::new(ResendEmailSender::new(ResendConfig {
        base_url: config.email.base_url.clone(),
        api_key: Secret::new(config.email.resend_api_key.clone()),
        from: config.email.from_header(),
    })?);
    let storage: Arc<dyn ImageStorage> = Arc::new(HostedObjectStore::new(ObjectStoreConfig {
        base_url: config.storage.url.clone(),
        api_key: Secret::new(config.storage.api_key.clone()),
        bucket: config.storage.bucket.clone(),
    })?);

    // Application handlers
    let coupon_handlers = CouponHandlers::new(
        Arc::new(IssueCouponHandler::new(ledger.clone(), directory.clone())),
        Arc::new(ValidateCouponHandler::new(
            ledger.clone(),
            directory.clone(),
        )),
        Arc::new(RedeemCouponHandler::new(ledger, directory)),
    );
    let event_handlers = EventHandlers::new(
        Arc::new(CreateEventHandler::new(events.clone())),
        Arc::new(GetEventHandler::new(events.clone())),
        Arc::new(GetPublicEventHandler::new(events.clone())),
        Arc::new(UpdateEventHandler::new(events.clone())),
        Arc::new(DeleteEventHandler::new(events.clone())),
        Arc::new(ListEventsHandler::new(events.clone())),
        Arc::new(TrackVisitHandler::new(events, visits)),
    );
    let stats_handlers = StatsHandlers::new(Arc::new(GetStatsOverviewHandler::new(stats)));
    let auth_handlers = AuthHandlers::new(
        auth_provider.clone(),
        Arc::new(RequestVerificationHandler::new(
            verifications.clone(),
            email,
        )),
        Arc::new(ConfirmVerificationHandler::new(verifications)),
    );
    let upload_handlers = UploadHandlers::new(storage);

    let app = api_router(
        auth_provider,
        coupon_handlers,
        event_handlers,
        stats_handlers,
        auth_handlers,
        upload_handlers,
        &config.server.cors_origins_list(),
        std::time::Duration::from_secs(config.server.request_timeout_secs),
    );

    let addr = config.server.socket_addr()?;
    tracing::info!("listening on {addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
