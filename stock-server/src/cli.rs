use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Result, bail};
use clap::{Parser, ValueEnum};
use reqwest::Url;
use stock_core::FieldAlignment;

use crate::config;

/// Stock Server - отдаёт цены акций по HTTP, котировки берёт у внешнего API.
///
/// Пример запроса: GET /stock/symbol=MSFT,AAPL,FAX&stock_exchange=NASDAQ,AMEX
#[derive(Parser, Debug, Clone)]
#[command(name = "stock-server", version, about)]
pub(crate) struct Args {
    /// HTTP bind address, например 0.0.0.0:3000
    #[arg(long, default_value = config::BIND_ADDR)]
    pub(crate) bind: SocketAddr,

    /// URL API котировок
    #[arg(long, default_value = config::UPSTREAM_URL)]
    pub(crate) upstream_url: Url,

    /// Токен доступа к API котировок
    #[arg(long, env = config::API_TOKEN_ENV, hide_env_values = true)]
    pub(crate) api_token: String,

    /// Таймаут запроса к API котировок, секунды
    #[arg(long, default_value_t = config::UPSTREAM_TIMEOUT_S)]
    pub(crate) upstream_timeout_s: u64,

    /// Как сопоставлять поля symbol/price/stock_exchange_short в ответе API
    #[arg(long, value_enum, default_value_t = Alignment::Strict)]
    pub(crate) field_alignment: Alignment,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Alignment {
    /// количество полей должно совпадать, иначе 502
    Strict,
    /// сопоставление по индексу как есть
    Positional,
}

impl From<Alignment> for FieldAlignment {
    fn from(a: Alignment) -> Self {
        match a {
            Alignment::Strict => FieldAlignment::Strict,
            Alignment::Positional => FieldAlignment::Positional,
        }
    }
}

impl Args {
    pub(crate) fn validate(&self) -> Result<()> {
        if self.api_token.trim().is_empty() {
            bail!("--api-token is empty");
        }
        if self.upstream_timeout() < config::MIN_UPSTREAM_TIMEOUT {
            bail!(
                "--upstream-timeout-s must be at least {}s (got: {})",
                config::MIN_UPSTREAM_TIMEOUT.as_secs(),
                self.upstream_timeout_s
            );
        }
        if !matches!(self.upstream_url.scheme(), "http" | "https") {
            bail!("--upstream-url must be http(s) (got: {})", self.upstream_url);
        }
        Ok(())
    }

    pub(crate) fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout_s)
    }
}
