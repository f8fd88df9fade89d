use anyhow::Context;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    stockledger_observability::tracing::init();

    let addr = std::env::var("STOCKLEDGER_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let app = stockledger_api::app::build();

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, "stockledger api listening");
    axum::serve(listener, app).await?;
    Ok(())
}
