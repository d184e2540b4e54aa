use log::debug;
use stock_core::{FieldAlignment, ReconcileError, Report, parse_query, reconcile};
use thiserror::Error;

use crate::upstream::{QuoteSource, UpstreamError};

/// Ошибки обработки одного запроса. Процесс из-за них не падает.
#[derive(Debug, Error)]
pub(crate) enum LookupError {
    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    #[error(transparent)]
    Reconcile(#[from] ReconcileError),
}

/// Полный цикл для одного запроса: путь -> тикеры/биржи -> апстрим -> отчёт.
///
/// Без тикеров в пути апстрим не вызывается, отчёт пустой.
pub(crate) async fn lookup<S: QuoteSource>(
    source: &S,
    alignment: FieldAlignment,
    path: &str,
) -> Result<Report, LookupError> {
    let query = parse_query(path);
    debug!(
        "parsed {path:?}: symbols={:?} exchanges={:?}",
        query.symbols, query.exchanges
    );

    if query.is_empty() {
        return Ok(Report::empty());
    }

    let body = source.fetch(&query.symbols).await?;
    Ok(reconcile(&body, &query.exchanges, alignment)?)
}
