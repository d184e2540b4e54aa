use std::collections::BTreeSet;

use crate::constants::{EXCHANGE_TAG, PRICE_TAG, SYMBOL_TAG, UPSTREAM_ERROR_SENTINEL};
use crate::error::ReconcileError;
use crate::tokenizer::{TokenChars, tokenize};
use crate::types::{QuoteRecord, Report};

/// Как сопоставлять поля `symbol` / `price` / `stock_exchange_short` между собой.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FieldAlignment {
    /// Количество всех трёх тегов обязано совпадать, иначе [`ReconcileError::MisalignedFields`]
    #[default]
    Strict,
    /// i-й тикер берёт i-ю цену и i-ю биржу как есть; тикеры без пары отбрасываются
    Positional,
}

/// Значения после тегов, собранные тремя независимыми последовательностями.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TaggedFields<'a> {
    /// значения после `symbol`
    pub symbols: Vec<&'a str>,
    /// значения после `price`
    pub prices: Vec<&'a str>,
    /// значения после `stock_exchange_short`
    pub exchanges: Vec<&'a str>,
}

impl<'a> TaggedFields<'a> {
    /// Один проход: для каждого тега запоминаем следующий за ним токен.
    pub fn collect(tokens: &[&'a str]) -> Self {
        let mut fields = TaggedFields::default();

        for pair in tokens.windows(2) {
            let (tag, value) = (pair[0], pair[1]);
            match tag {
                SYMBOL_TAG => fields.symbols.push(value),
                PRICE_TAG => fields.prices.push(value),
                EXCHANGE_TAG => fields.exchanges.push(value),
                _ => {}
            }
        }

        fields
    }

    /// Склеивает три последовательности в записи по индексу.
    pub fn into_records(self, alignment: FieldAlignment) -> Result<Vec<QuoteRecord>, ReconcileError> {
        let (symbols, prices, exchanges) = (self.symbols.len(), self.prices.len(), self.exchanges.len());

        if alignment == FieldAlignment::Strict && (symbols != prices || symbols != exchanges) {
            return Err(ReconcileError::MisalignedFields {
                symbols,
                prices,
                exchanges,
            });
        }

        let records = self
            .symbols
            .iter()
            .enumerate()
            .filter_map(|(i, symbol)| {
                let price = self.prices.get(i)?;
                let exchange = self.exchanges.get(i)?;
                Some(QuoteRecord {
                    symbol: symbol.to_string(),
                    price: price.to_string(),
                    exchange: exchange.to_string(),
                })
            })
            .collect();

        Ok(records)
    }
}

/// Сверяет сырой ответ апстрима со списком разрешённых бирж.
///
/// Если в теле встречается `Error` - дальше не разбираем, это [`Report::UpstreamError`].
/// Иначе возвращаем котировки с разрешённых бирж в порядке появления в ответе.
/// Пустой результат ошибкой не считается.
pub fn reconcile(
    body: &str,
    exchanges: &BTreeSet<String>,
    alignment: FieldAlignment,
) -> Result<Report, ReconcileError> {
    if body.contains(UPSTREAM_ERROR_SENTINEL) {
        return Ok(Report::UpstreamError);
    }

    let tokens = tokenize(body, TokenChars::BODY);
    let records = TaggedFields::collect(&tokens).into_records(alignment)?;

    let matched = records
        .into_iter()
        .filter(|r| exchanges.contains(&r.exchange))
        .collect();

    Ok(Report::Quotes(matched))
}
