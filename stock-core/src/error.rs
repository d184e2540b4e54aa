use thiserror::Error;

/// Ошибки сверки ответа апстрима
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReconcileError {
    /// Количество тегов `symbol` / `price` / `stock_exchange_short` не совпадает,
    /// сопоставить поля по позиции нельзя
    #[error(
        "misaligned upstream fields: symbols={symbols} prices={prices} exchanges={exchanges}"
    )]
    MisalignedFields {
        /// сколько найдено тегов `symbol`
        symbols: usize,
        /// сколько найдено тегов `price`
        prices: usize,
        /// сколько найдено тегов `stock_exchange_short`
        exchanges: usize,
    },
}
