use std::time::Duration;

use anyhow::{Context, bail};
use log::debug;
use reqwest::Url;

/// Один GET к stock-server, возвращает тело ответа как есть.
/// Не-2xx статус -> ошибка с телом ответа.
pub(crate) fn fetch_report(server: &Url, path: &str, timeout: Duration) -> anyhow::Result<String> {
    let url = server
        .join(path)
        .with_context(|| format!("bad lookup path {path:?}"))?;

    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()
        .context("build http client")?;

    debug!("GET {url}");
    let resp = client
        .get(url.clone())
        .send()
        .with_context(|| format!("request to {url} failed"))?;

    let status = resp.status();
    let body = resp.text().context("read response body")?;

    if !status.is_success() {
        bail!("server error: {status}: {}", body.trim());
    }

    Ok(body)
}
