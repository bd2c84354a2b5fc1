use std::net::SocketAddr;

use tracing::{Level, info};

use blog_server::config::AppConfig;
use blog_server::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let config = AppConfig::load()?;

    info!("Connecting to database");
    let db = blog_server::database::init_db(&config.database).await?;

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    let app = blog_server::build_router(AppState { db, config });

    info!("Server running at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
