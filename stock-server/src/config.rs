use std::time::Duration;

pub(crate) const BIND_ADDR: &str = "0.0.0.0:3000";

pub(crate) const UPSTREAM_URL: &str = "https://www.worldtradingdata.com/api/v1/stock";

/// переменная окружения с токеном апстрима
pub(crate) const API_TOKEN_ENV: &str = "STOCK_API_TOKEN";

pub(crate) const UPSTREAM_TIMEOUT_S: u64 = 10;

pub(crate) const MIN_UPSTREAM_TIMEOUT: Duration = Duration::from_secs(1);
