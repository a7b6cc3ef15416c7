use dotenvy::dotenv;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use mergington::config::AppConfig;
use mergington::database::ActivityStore;
use mergington::services::activities_service::SignupPolicy;
use mergington::web::{self, AppState};

#[tokio::main]
async fn main() {
    dotenv().ok();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("mergington=info,tower_http=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Err(e) = run().await {
        error!("server stopped: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env()?;
    info!(
        build_id = env!("MERGINGTON_BUILD_ID"),
        enforce_capacity = config.enforce_capacity,
        static_dir = %config.static_dir.display(),
        "starting activity directory"
    );

    let store = ActivityStore::seeded();
    let policy = SignupPolicy {
        enforce_capacity: config.enforce_capacity,
    };
    let app = web::router(AppState::new(store, policy), &config.static_dir);

    let listener = match tokio::net::TcpListener::bind(config.bind_addr()).await {
        Ok(l) => l,
        Err(e) => {
            warn!(
                "could not bind {}: {}, trying fallback {}",
                config.bind_addr(),
                e,
                config.fallback_bind_addr()
            );
            tokio::net::TcpListener::bind(config.fallback_bind_addr()).await?
        }
    };

    let bound_addr = listener.local_addr()?;
    info!("listening on http://{}", bound_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
