/// Какие знаки пунктуации считаются частью токена
/// (в дополнение к Unicode-буквам и цифрам).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenChars {
    /// `_` не разбивает токен
    pub underscore: bool,
    /// `.` не разбивает токен
    pub period: bool,
}

impl TokenChars {
    /// Для пути запроса: `stock_exchange` -> `stock`, `exchange`,
    /// но `BRK.B` остаётся целым.
    pub const PATH: TokenChars = TokenChars {
        underscore: false,
        period: true,
    };

    /// Для тела ответа апстрима: целыми остаются и `stock_exchange_short`, и `153.30`.
    pub const BODY: TokenChars = TokenChars {
        underscore: true,
        period: true,
    };

    fn is_token_char(self, c: char) -> bool {
        c.is_alphanumeric() || (self.underscore && c == '_') || (self.period && c == '.')
    }
}

/// Режет строку на максимальные последовательности "токенных" символов.
/// Всё остальное (`=`, `,`, `&`, `/`, пробелы, кавычки...) - разделители и отбрасывается.
/// Порядок и регистр сохраняются.
pub fn tokenize(input: &str, chars: TokenChars) -> Vec<&str> {
    input
        .split(|c: char| !chars.is_token_char(c))
        .filter(|t| !t.is_empty())
        .collect()
}
