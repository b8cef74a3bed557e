mod settings;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let settings = settings::Settings::new()?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "washmate={level},server={level},engine={level}",
            level = settings.app.level
        ))
        .init();

    let engine = match settings.pricing.build_engine() {
        Ok(engine) => engine,
        Err(err) => {
            tracing::error!("invalid pricing settings: {err}");
            return Err(err.into());
        }
    };
    tracing::info!(
        "pricing engine ready ({} promo codes, currency {})",
        engine.promos().len(),
        engine.currency()
    );

    let bind = settings
        .server
        .bind
        .unwrap_or_else(|| "127.0.0.1".to_string());
    let addr = format!("{}:{}", bind, settings.server.port);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    server::run_with_listener(engine, listener).await?;

    Ok(())
}
