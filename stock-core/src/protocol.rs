/// Префикс маршрута на сервере
pub const ROUTE_PREFIX: &str = "/stock/";

/// Собирает путь запроса вида
/// `/stock/symbol=MSFT,AAPL&stock_exchange=NASDAQ,AMEX`.
///
/// Пустой список бирж - маркер биржи не добавляется, сервер возьмёт биржу по умолчанию.
pub fn format_lookup_path(symbols: &[String], exchanges: &[String]) -> String {
    let mut path = format!("{ROUTE_PREFIX}symbol={}", symbols.join(","));
    if !exchanges.is_empty() {
        path.push_str("&stock_exchange=");
        path.push_str(&exchanges.join(","));
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::parse_query;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn formats_symbols_and_exchanges() {
        let path = format_lookup_path(&strings(&["MSFT", "AAPL", "FAX"]), &strings(&["NASDAQ", "AMEX"]));
        assert_eq!(path, "/stock/symbol=MSFT,AAPL,FAX&stock_exchange=NASDAQ,AMEX");
    }

    #[test]
    fn omits_exchange_marker_when_no_exchanges() {
        let path = format_lookup_path(&strings(&["BRK.B"]), &[]);
        assert_eq!(path, "/stock/symbol=BRK.B");
    }

    #[test]
    fn server_parses_what_client_formats() {
        let symbols = strings(&["BRK.B", "AAPL", "AAPL"]);
        let exchanges = strings(&["NYSE", "NASDAQ"]);
        let q = parse_query(&format_lookup_path(&symbols, &exchanges));
        assert_eq!(q.symbols, symbols);
        assert_eq!(q.exchanges.len(), 2);
        assert!(q.allows("NYSE") && q.allows("NASDAQ"));
    }
}
