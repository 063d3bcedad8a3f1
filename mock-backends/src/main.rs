use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

fn port(key: &str, default: u16) -> u16 {
    std::env::var(key)
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(default)
}

async fn bind(host: &str, port: u16, service: &str) -> Result<TcpListener, std::io::Error> {
    let addr = format!("{host}:{port}");
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(%addr, service, "listening");
    Ok(listener)
}

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let products = bind(&host, port("PRODUCT_PORT", 3060), "product").await?;
    let orders = bind(&host, port("ORDER_PORT", 3070), "makeline").await?;
    let ai = bind(&host, port("AI_PORT", 3080), "ai").await?;

    tokio::try_join!(
        mock_backends::run(products, mock_backends::products::router()),
        mock_backends::run(orders, mock_backends::orders::router(mock_backends::sample_orders())),
        mock_backends::run(ai, mock_backends::ai::router()),
    )?;
    Ok(())
}
