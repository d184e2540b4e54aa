//! Точка входа `stock-client`.
//!
//! Жизненный цикл:
//! - парсинг CLI, загрузка тикеров и бирж
//! - сборка пути `/stock/symbol=...&stock_exchange=...`
//! - один HTTP GET к stock-server
//! - печать отчёта в stdout как есть

mod cli;
mod http;
mod symbols;

use clap::Parser;
use log::info;

fn main() -> anyhow::Result<()> {
    // Логи через RUST_LOG=info/debug
    env_logger::init();

    let args = cli::Args::parse();
    args.validate()?;

    let lookup = symbols::load_lookup(&args)?;
    let server = args.server_url()?;

    info!(
        "Starting stock-client: server={}, tickers={}, exchanges={}",
        server,
        lookup.symbols.join(","),
        if lookup.exchanges.is_empty() {
            "<server default>".to_string()
        } else {
            lookup.exchanges.join(",")
        }
    );

    let report = http::fetch_report(&server, &lookup.path(), args.timeout())?;

    print!("{report}");
    // фраза об ошибке приходит без перевода строки
    if !report.is_empty() && !report.ends_with('\n') {
        println!();
    }

    Ok(())
}
