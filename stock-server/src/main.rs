//! Точка входа `stock-server`.
//!
//! Жизненный цикл:
//! - парсинг CLI и проверка настроек
//! - HTTP-маршрут `/stock/...`: путь -> тикеры/биржи -> API котировок -> текстовый отчёт
//! - ошибка API котировок не роняет процесс, а превращается в `502 ERR ...`
//! - корректная остановка по `Ctrl+C`

mod cli;
mod config;
mod lookup;
mod routes;
mod upstream;

#[cfg(test)]
mod testing;

use anyhow::Context;
use clap::Parser;
use log::info;
use tokio::sync::watch;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Логи через RUST_LOG=info/debug
    env_logger::init();

    let args = cli::Args::parse();
    args.validate()?;

    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);

    // Ctrl+C => shutdown=true
    ctrlc::set_handler(move || {
        info!("shutting down...");
        let _ = shutdown_tx.send(true);
    })?;

    let source = upstream::WorldTradingData::new(
        args.upstream_url.clone(),
        args.api_token.clone(),
        args.upstream_timeout(),
    )?;

    let app = routes::router(routes::AppState {
        source,
        alignment: args.field_alignment.into(),
    });

    let listener = tokio::net::TcpListener::bind(args.bind)
        .await
        .with_context(|| format!("bind HTTP listener {}", args.bind))?;

    info!(
        "Starting stock-server: bind={}, upstream={}, timeout={}s, field_alignment={:?}",
        args.bind, args.upstream_url, args.upstream_timeout_s, args.field_alignment
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = shutdown_rx.wait_for(|stop| *stop).await;
        })
        .await
        .context("http server")?;

    info!("stock-server stopped");
    Ok(())
}
