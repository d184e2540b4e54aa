use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::{ArgGroup, Parser};
use reqwest::Url;

/// Stock Client - запрашивает цены акций у stock-server и печатает отчёт.
///
/// Собирает путь /stock/symbol=...&stock_exchange=... и делает один GET.
#[derive(Parser, Debug, Clone)]
#[command(name = "stock-client", version, about)]
#[command(
    group(
        ArgGroup::new("symbols_source")
            .required(true)
            .args(["tickers_file", "tickers"])
    )
)]
pub(crate) struct Args {
    /// Базовый URL stock-server, например http://127.0.0.1:3000
    #[arg(long, default_value = "http://127.0.0.1:3000")]
    pub(crate) server: String,

    /// Файл тикеров (по одному на строку, # - комментарий). Нельзя вместе с --tickers
    #[arg(long, conflicts_with = "tickers")]
    pub(crate) tickers_file: Option<PathBuf>,

    /// Список тикеров строкой, например: "MSFT,AAPL,FAX" или "msft, brk.b"
    /// Нельзя вместе с --tickers-file
    #[arg(long, conflicts_with = "tickers_file")]
    pub(crate) tickers: Option<String>,

    /// Биржи через запятую, например "NASDAQ,AMEX" (регистр важен).
    /// Если не задано - сервер берёт AMEX
    #[arg(long)]
    pub(crate) exchanges: Option<String>,

    /// Таймаут HTTP-запроса, секунды
    #[arg(long, default_value_t = 30)]
    pub(crate) timeout_s: u64,
}

impl Args {
    /// Валидация аргументов (файл существует, server похож на http(s) URL)
    pub(crate) fn validate(&self) -> Result<()> {
        let url = self.server_url()?;
        if !matches!(url.scheme(), "http" | "https") {
            bail!("--server must be an http(s) URL (got: {})", self.server);
        }

        if let Some(path) = &self.tickers_file {
            let md = std::fs::metadata(path)
                .with_context(|| format!("tickers file not found: {:?}", path))?;
            if !md.is_file() {
                bail!("--tickers-file must point to a file: {:?}", path);
            }
        }

        if self.timeout_s == 0 {
            bail!("--timeout-s must be positive");
        }

        Ok(())
    }

    pub(crate) fn server_url(&self) -> Result<Url> {
        self.server
            .trim()
            .parse()
            .with_context(|| format!("--server is not a valid URL: {:?}", self.server))
    }

    pub(crate) fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        let mut full = vec!["stock-client"];
        full.extend_from_slice(argv);
        Args::try_parse_from(full).unwrap()
    }

    #[test]
    fn requires_exactly_one_symbols_source() {
        assert!(Args::try_parse_from(["stock-client"]).is_err());
        assert!(
            Args::try_parse_from(["stock-client", "--tickers", "MSFT", "--tickers-file", "t.txt"]).is_err()
        );
    }

    #[test]
    fn validate_accepts_defaults() {
        let args = parse(&["--tickers", "MSFT"]);
        args.validate().unwrap();
        assert_eq!(args.server_url().unwrap().as_str(), "http://127.0.0.1:3000/");
        assert_eq!(args.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn validate_rejects_bad_server() {
        assert!(parse(&["--tickers", "MSFT", "--server", "127.0.0.1:3000"]).validate().is_err());
        assert!(parse(&["--tickers", "MSFT", "--server", "ftp://host"]).validate().is_err());
    }

    #[test]
    fn validate_rejects_missing_file_and_directory() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.txt");

        let args = parse(&["--tickers-file", missing.to_str().unwrap()]);
        assert!(args.validate().is_err());

        let args = parse(&["--tickers-file", dir.path().to_str().unwrap()]);
        assert!(args.validate().is_err());
    }
}
