use tracing::info;
use tracing_subscriber::EnvFilter;

use utmkit::api::create_router;
use utmkit::ServerConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("utmkit=info".parse()?)
                .add_directive("tower_http=info".parse()?),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => ServerConfig::from_json_file(path)?,
        None => ServerConfig::from_env()?,
    };

    let app = create_router(&config);
    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;

    info!(address = %config.bind_address(), operating_zone = %config.engine.default_zone, "utmkit API listening");
    info!("GET  /api/utm-to-geographic?easting=<m>&northing=<m>&zone=<zone>");
    info!("GET  /api/geographic-to-utm?latitude=<deg>&longitude=<deg>");
    info!("GET  /api/distance?from_lat=&from_lng=&to_lat=&to_lng=");
    info!("POST /api/centroid | /api/resolve | /api/footprint (JSON)");
    info!("POST /api/upload (multipart/form-data: csv file)");

    axum::serve(listener, app).await?;
    Ok(())
}
