/// Биржа по умолчанию, если в пути нет маркера `stock_exchange`
pub const DEFAULT_EXCHANGE: &str = "AMEX";

/// Подстрока в теле ответа апстрима, означающая ошибку
pub const UPSTREAM_ERROR_SENTINEL: &str = "Error";

/// Фиксированный ответ клиенту при ошибке апстрима
pub const NOT_FOUND_MESSAGE: &str = "Error! The requested stock(s) could not be found.";

// маркеры в пути запроса
pub(crate) const STOCK_MARKER: &str = "stock";
pub(crate) const SYMBOL_MARKER: &str = "symbol";
pub(crate) const EXCHANGE_MARKER: &str = "exchange";

// теги в теле ответа апстрима
pub(crate) const SYMBOL_TAG: &str = "symbol";
pub(crate) const PRICE_TAG: &str = "price";
pub(crate) const EXCHANGE_TAG: &str = "stock_exchange_short";
