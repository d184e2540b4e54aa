use std::sync::Arc;

use axum::Router;
use axum::extract::State;
use axum::http::{StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use log::{info, warn};
use stock_core::{FieldAlignment, Report};

use crate::lookup::lookup;
use crate::upstream::QuoteSource;

/// Состояние, общее для всех запросов. Только чтение.
pub(crate) struct AppState<S> {
    pub(crate) source: S,
    pub(crate) alignment: FieldAlignment,
}

pub(crate) fn router<S: QuoteSource>(state: AppState<S>) -> Router {
    Router::new()
        .route("/stock", get(redirect_to_prefix))
        .route("/stock/", get(stock_handler::<S>))
        .route("/stock/{*rest}", get(stock_handler::<S>))
        .with_state(Arc::new(state))
}

// GET /stock -> 301 на /stock/
async fn redirect_to_prefix() -> impl IntoResponse {
    (StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, "/stock/")])
}

// GET /stock/symbol=...&stock_exchange=...
async fn stock_handler<S: QuoteSource>(
    State(state): State<Arc<AppState<S>>>,
    uri: Uri,
) -> Response {
    let path = match urlencoding::decode(uri.path()) {
        Ok(p) => p,
        Err(e) => {
            warn!("bad request path {}: {e}", uri.path());
            return (StatusCode::BAD_REQUEST, format!("ERR {e}\n")).into_response();
        }
    };

    match lookup(&state.source, state.alignment, &path).await {
        Ok(report) => {
            info!("served {path}: {}", summary(&report));
            (StatusCode::OK, report.render()).into_response()
        }
        Err(e) => {
            warn!("lookup {path} failed: {e}");
            (StatusCode::BAD_GATEWAY, format!("ERR {e}\n")).into_response()
        }
    }
}

fn summary(report: &Report) -> String {
    match report {
        Report::UpstreamError => "upstream reported error".to_string(),
        Report::Quotes(q) => format!("{} quote(s)", q.len()),
    }
}
