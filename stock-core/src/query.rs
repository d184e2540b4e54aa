use std::collections::BTreeSet;

use crate::constants::{DEFAULT_EXCHANGE, EXCHANGE_MARKER, STOCK_MARKER, SYMBOL_MARKER};
use crate::tokenizer::{TokenChars, tokenize};

/// Разобранный запрос: какие тикеры спрашиваем и с каких бирж принимаем ответ.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    /// Тикеры в порядке из пути, дубликаты сохраняются
    pub symbols: Vec<String>,
    /// Разрешённые биржи (точное совпадение с учётом регистра)
    pub exchanges: BTreeSet<String>,
}

/// Позиции маркеров, найденные за один проход по токенам.
#[derive(Debug, Default, Clone, Copy)]
struct Markers {
    /// индекс первого тикера (после `stock symbol`)
    symbol_start: Option<usize>,
    /// индекс первой биржи (после `stock exchange`)
    exchange_start: Option<usize>,
    /// индекс самого `stock` перед `exchange`, он же конец списка тикеров
    exchange_marker: Option<usize>,
}

impl Markers {
    // при повторных маркерах побеждает последний
    fn scan(tokens: &[&str]) -> Self {
        tokens
            .windows(2)
            .enumerate()
            .fold(Markers::default(), |mut m, (i, pair)| {
                if pair[0] == STOCK_MARKER {
                    if pair[1] == EXCHANGE_MARKER {
                        m.exchange_start = Some(i + 2);
                        m.exchange_marker = Some(i);
                    }
                    if pair[1] == SYMBOL_MARKER {
                        m.symbol_start = Some(i + 2);
                    }
                }
                m
            })
    }
}

impl Query {
    /// Интерпретирует маркеры `stock symbol` / `stock exchange` в потоке токенов.
    ///
    /// Без маркера биржи список бирж = `{AMEX}`, а тикеры идут до конца потока.
    /// Без маркера тикеров список тикеров пуст (это не ошибка).
    pub fn from_tokens(tokens: &[&str]) -> Self {
        let markers = Markers::scan(tokens);
        let len = tokens.len();

        let symbols_end = markers.exchange_marker.unwrap_or(len);
        let symbols = match markers.symbol_start {
            Some(start) if start < symbols_end => {
                tokens[start..symbols_end].iter().map(|t| t.to_string()).collect()
            }
            _ => Vec::new(),
        };

        let exchanges = match markers.exchange_start {
            None => BTreeSet::from([DEFAULT_EXCHANGE.to_string()]),
            Some(start) if start < len => tokens[start..].iter().map(|t| t.to_string()).collect(),
            // маркер есть, а бирж после него нет
            Some(_) => BTreeSet::new(),
        };

        Query { symbols, exchanges }
    }

    /// Количество запрошенных тикеров (с дубликатами)
    pub fn symbol_count(&self) -> usize {
        self.symbols.len()
    }

    /// Нет ни одного тикера
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Входит ли биржа в список разрешённых
    pub fn allows(&self, exchange: &str) -> bool {
        self.exchanges.contains(exchange)
    }
}

/// Разбирает путь запроса вида
/// `/stock/symbol=MSFT,AAPL,FAX&stock_exchange=NASDAQ,AMEX`.
pub fn parse_query(path: &str) -> Query {
    let tokens = tokenize(path, TokenChars::PATH);
    Query::from_tokens(&tokens)
}
