use std::time::Duration;

use log::{debug, warn};
use reqwest::Url;
use thiserror::Error;

/// Ошибки обращения к API котировок (UpstreamUnavailable).
/// URL из ошибок reqwest вырезается - в нём токен.
#[derive(Debug, Error)]
pub(crate) enum UpstreamError {
    #[error("failed to build http client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("upstream request failed: {0}")]
    Request(#[source] reqwest::Error),
}

/// Источник котировок: по списку тикеров отдаёт сырое тело ответа.
pub(crate) trait QuoteSource: Send + Sync + 'static {
    fn fetch(&self, symbols: &[String]) -> impl Future<Output = Result<String, UpstreamError>> + Send;
}

/// Клиент worldtradingdata: `GET <url>?symbol=A,B&api_token=...`
#[derive(Debug, Clone)]
pub(crate) struct WorldTradingData {
    http: reqwest::Client,
    url: Url,
    api_token: String,
}

impl WorldTradingData {
    pub(crate) fn new(url: Url, api_token: String, timeout: Duration) -> Result<Self, UpstreamError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| UpstreamError::Client(e.without_url()))?;

        Ok(Self {
            http,
            url,
            api_token,
        })
    }
}

impl QuoteSource for WorldTradingData {
    async fn fetch(&self, symbols: &[String]) -> Result<String, UpstreamError> {
        let symbol = symbols.join(",");
        debug!("upstream request: symbol={symbol}");

        let resp = self
            .http
            .get(self.url.clone())
            .query(&[("symbol", symbol.as_str()), ("api_token", self.api_token.as_str())])
            .send()
            .await
            .map_err(|e| UpstreamError::Request(e.without_url()))?;

        // статус не проверяем: ошибку апстрима определяет тело ответа
        let status = resp.status();
        if !status.is_success() {
            warn!("upstream responded with {status} for symbol={symbol}");
        }

        resp.text()
            .await
            .map_err(|e| UpstreamError::Request(e.without_url()))
    }
}
