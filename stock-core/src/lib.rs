//! # stock-core
//!
//! Разбор запросов и сверка ответов для Stock Server / Stock Client.
//!
//! Этот крейт содержит:
//!
//! - [`tokenizer`] — единый токенизатор с настраиваемым набором "токенных" символов
//! - [`query`] — разбор пути `/stock/symbol=...&stock_exchange=...` в список тикеров и бирж
//! - [`reconcile`] — сверка сырого ответа апстрима со списком бирж
//! - [`protocol`] — сборка пути запроса на стороне клиента
//! - [`tickers`] — чтение и нормализация списка тикеров из текста/файла
//! - [`types`] — доменные типы (котировка, отчёт)
//! - [`error`] — типы ошибок `stock-core`
//!
//! ## Быстрый пример: разбор пути
//!
//! ```rust
//! use stock_core::query::parse_query;
//!
//! let q = parse_query("/stock/symbol=MSFT,AAPL,FAX&stock_exchange=NASDAQ,AMEX");
//! assert_eq!(q.symbols, vec!["MSFT", "AAPL", "FAX"]);
//! assert!(q.allows("NASDAQ") && q.allows("AMEX"));
//!
//! // без stock_exchange принимаем только AMEX
//! let q = parse_query("/stock/symbol=FAX");
//! assert!(q.allows("AMEX"));
//! assert_eq!(q.exchanges.len(), 1);
//! ```
//!
//! ## Пример: сверка ответа апстрима
//!
//! ```rust
//! use stock_core::query::parse_query;
//! use stock_core::reconcile::{reconcile, FieldAlignment};
//!
//! let body = r#"{"data":[
//!   {"symbol":"AAPL","price":"153.30","stock_exchange_short":"NASDAQ"},
//!   {"symbol":"FAX","price":"3.99","stock_exchange_short":"AMEX"}]}"#;
//!
//! let q = parse_query("/stock/symbol=AAPL,FAX");
//! let report = reconcile(body, &q.exchanges, FieldAlignment::Strict).unwrap();
//! assert_eq!(report.render(), "stock: FAX\tprice  3.99\texchange  AMEX\n");
//! ```
//!
//! ## Дизайн
//!
//! `stock-core` задуман как “нулевая” зависимость для всех частей системы:
//! сервер, клиент, тесты. Поэтому здесь держим только
//! чистые функции над строками, без runtime/async, без сети и без
//! состояния между запросами.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Токенизатор путей и ответов апстрима.
pub mod tokenizer;

/// Разбор пути запроса.
pub mod query;

/// Сверка ответа апстрима с запросом.
pub mod reconcile;

/// Формат пути запроса со стороны клиента.
pub mod protocol;

/// Чтение/нормализация списка тикеров из текста и файлов.
pub mod tickers;

/// Доменные типы (котировка, отчёт).
pub mod types;

/// Ошибки `stock-core`.
pub mod error;

/// Общие константы
mod constants;
pub use constants::{DEFAULT_EXCHANGE, NOT_FOUND_MESSAGE, UPSTREAM_ERROR_SENTINEL};

// --- Re-exports (публичный фасад API) ---

pub use crate::error::ReconcileError;
pub use crate::query::{Query, parse_query};
pub use crate::reconcile::{FieldAlignment, reconcile};
pub use crate::types::{QuoteRecord, Report};
