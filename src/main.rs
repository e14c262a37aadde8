use std::net::SocketAddr;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vegetable_store::{
    app::build_router, config::AppConfig, seed::load_seed, state::AppState, store::Store,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,vegetable_store=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;

    let mut store = Store::new();
    if let Some(path) = &config.seed_path {
        let summary = load_seed(path).await?.apply(&mut store)?;
        tracing::info!(
            path = %path.display(),
            vegetables = summary.vegetables,
            customers = summary.customers,
            "store seeded"
        );
    }

    let app = build_router(AppState::new(store), &config);

    let addr = SocketAddr::from((config.host.parse::<std::net::IpAddr>()?, config.port));
    tracing::info!("listening on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, app).await?;

    Ok(())
}
