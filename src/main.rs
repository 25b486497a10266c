use anyhow::Result;
use project_board::application::{ports::ClockPort, services::ApplicationServices};
use project_board::config::{AppConfig, StorageBackend};
use project_board::domain::{
    article::{ArticleCommentRepository, ArticleReadRepository, ArticleWriteRepository},
    user::UserAccountRepository,
};
use project_board::infrastructure::{
    database,
    repositories::{
        MemoryBoardStore, PostgresArticleCommentRepository, PostgresArticleReadRepository,
        PostgresArticleWriteRepository, PostgresUserAccountRepository,
    },
    time::SystemClock,
};
use project_board::presentation::http::{routes::build_router, state::HttpState};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

struct Repositories {
    users: Arc<dyn UserAccountRepository>,
    article_write: Arc<dyn ArticleWriteRepository>,
    article_read: Arc<dyn ArticleReadRepository>,
    comments: Arc<dyn ArticleCommentRepository>,
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    let repos = open_repositories(&config).await?;
    let clock: Arc<ClockPort> = Arc::new(SystemClock);

    let services = Arc::new(ApplicationServices::new(
        repos.users,
        repos.article_write,
        repos.article_read,
        repos.comments,
        clock,
    ));

    let state = HttpState { services };
    let app = build_router(state, config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn open_repositories(config: &AppConfig) -> Result<Repositories> {
    match config.storage_backend() {
        StorageBackend::Postgres => {
            let pool =
                database::init_pool(config.database_url(), config.database_max_connections())
                    .await?;
            database::run_migrations(&pool).await?;
            tracing::info!("connected to postgres, migrations applied");

            Ok(Repositories {
                users: Arc::new(PostgresUserAccountRepository::new(pool.clone())),
                article_write: Arc::new(PostgresArticleWriteRepository::new(pool.clone())),
                article_read: Arc::new(PostgresArticleReadRepository::new(pool.clone())),
                comments: Arc::new(PostgresArticleCommentRepository::new(pool)),
            })
        }
        StorageBackend::Memory => {
            tracing::warn!("using in-memory storage, data is lost on shutdown");
            let store = MemoryBoardStore::new();
            Ok(Repositories {
                users: Arc::new(store.clone()),
                article_write: Arc::new(store.clone()),
                article_read: Arc::new(store.clone()),
                comments: Arc::new(store),
            })
        }
    }
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for CTRL+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
