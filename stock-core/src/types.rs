use std::fmt;

use crate::constants::NOT_FOUND_MESSAGE;

/// Одна котировка из ответа апстрима. Цена хранится как есть, текстом.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteRecord {
    /// Тикер
    pub symbol: String,
    /// Цена (литерал из ответа, без парсинга)
    pub price: String,
    /// Короткое имя биржи
    pub exchange: String,
}

impl fmt::Display for QuoteRecord {
    /// Формат строки отчёта: `stock: SYM<TAB>price  PRICE<TAB>exchange  EXC<LF>`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "stock: {}\tprice  {}\texchange  {}",
            self.symbol, self.price, self.exchange
        )
    }
}

/// Итог сверки ответа апстрима с запросом.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    /// Апстрим сообщил об ошибке - отдаём фиксированную фразу
    UpstreamError,
    /// Котировки, прошедшие фильтр бирж, в порядке ответа апстрима (может быть пусто)
    Quotes(Vec<QuoteRecord>),
}

impl Report {
    /// Отчёт без котировок
    pub fn empty() -> Self {
        Report::Quotes(Vec::new())
    }

    /// Нечего выводить (ошибка апстрима пустой не считается)
    pub fn is_empty(&self) -> bool {
        matches!(self, Report::Quotes(q) if q.is_empty())
    }

    /// Готовый текст ответа
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::UpstreamError => f.write_str(NOT_FOUND_MESSAGE),
            Report::Quotes(quotes) => quotes.iter().try_for_each(|q| write!(f, "{q}")),
        }
    }
}
