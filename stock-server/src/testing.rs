// общие заготовки для тестов сервера
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::Router;

use crate::upstream::{QuoteSource, UpstreamError};

/// Ответ апстрима на MSFT,AAPL,FAX
pub(crate) const QUOTES_BODY: &str = r#"{"symbols_requested":3,"symbols_returned":3,"data":[
{"symbol":"AAPL","name":"Apple Inc.","currency":"USD","price":"153.30","price_open":"152.10","stock_exchange_long":"NASDAQ Stock Exchange","stock_exchange_short":"NASDAQ"},
{"symbol":"FAX","name":"Aberdeen Asia-Pacific Income Fund","currency":"USD","price":"3.99","price_open":"3.98","stock_exchange_long":"NYSE American","stock_exchange_short":"AMEX"},
{"symbol":"MSFT","name":"Microsoft Corporation","currency":"USD","price":"105.68","price_open":"104.90","stock_exchange_long":"NASDAQ Stock Exchange","stock_exchange_short":"NASDAQ"}]}"#;

enum Reply {
    Body(String),
    Refused,
}

/// Подменный апстрим: отдаёт заданное тело или ошибку соединения,
/// запоминает запрошенные тикеры.
#[derive(Clone)]
pub(crate) struct FakeSource {
    reply: Arc<Reply>,
    calls: Arc<Mutex<Vec<Vec<String>>>>,
}

impl FakeSource {
    pub(crate) fn body(body: &str) -> Self {
        Self::with_reply(Reply::Body(body.to_string()))
    }

    pub(crate) fn refused() -> Self {
        Self::with_reply(Reply::Refused)
    }

    fn with_reply(reply: Reply) -> Self {
        Self {
            reply: Arc::new(reply),
            calls: Arc::default(),
        }
    }

    pub(crate) fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().unwrap().clone()
    }
}

impl QuoteSource for FakeSource {
    async fn fetch(&self, symbols: &[String]) -> Result<String, UpstreamError> {
        self.calls.lock().unwrap().push(symbols.to_vec());
        match self.reply.as_ref() {
            Reply::Body(body) => Ok(body.clone()),
            Reply::Refused => Err(refused_error().await),
        }
    }
}

/// Адрес, на котором гарантированно никто не слушает: порт 0 не принимает соединений
pub(crate) fn closed_port_url() -> String {
    "http://127.0.0.1:0/".to_string()
}

/// Настоящая ошибка reqwest (соединение не установлено)
pub(crate) async fn refused_error() -> UpstreamError {
    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(2))
        .build()
        .unwrap();
    let err = http.get(closed_port_url()).send().await.unwrap_err();
    UpstreamError::Request(err.without_url())
}

/// Поднимает router на свободном порту loopback
pub(crate) async fn spawn(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    addr
}
