use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Чтение тикеров: по одному на строку, `#` - комментарий.
/// Порядок и дубликаты сохраняются.
pub fn read_tickers<R: io::Read>(reader: R) -> io::Result<Vec<String>> {
    let mut out = Vec::new();
    let buf = BufReader::new(reader);

    for line in buf.lines() {
        let line = line?;
        if let Some(t) = normalize_line(&line) {
            out.push(t);
        }
    }

    Ok(out)
}

/// Чтение тикеров из файла
pub fn read_tickers_from_path(path: impl AsRef<Path>) -> io::Result<Vec<String>> {
    let f = File::open(path)?;
    read_tickers(f)
}

fn normalize_line(line: &str) -> Option<String> {
    // Поддержка inline-комментариев: "AAPL # comment"
    let s = line.split('#').next().unwrap_or("").trim();
    if s.is_empty() {
        return None;
    }

    Some(s.to_ascii_uppercase())
}

/// Парсит список из строки вида "aapl, BRK.B, ,msft".
/// Правила:
/// - разделитель: запятая
/// - trim пробелов
/// - пустые элементы игнорируются
/// - нормализация: ASCII uppercase
/// - порядок и дубликаты сохраняются
pub fn parse_tickers_csv(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_ascii_uppercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Read, Write};

    #[test]
    fn parse_tickers_csv_keeps_order_and_duplicates() {
        let got = parse_tickers_csv(" msft, aapl, ,brk.b ,MSFT,, ");
        assert_eq!(got, vec!["MSFT", "AAPL", "BRK.B", "MSFT"]);
    }

    #[test]
    fn parse_tickers_csv_empty_gives_empty_vec() {
        assert!(parse_tickers_csv("").is_empty());
        assert!(parse_tickers_csv(" , ,  ,").is_empty());
    }

    #[test]
    fn normalize_line_ignores_empty_and_comments() {
        assert_eq!(normalize_line(""), None);
        assert_eq!(normalize_line("   "), None);
        assert_eq!(normalize_line("# comment"), None);
        assert_eq!(normalize_line("   #"), None);
        assert_eq!(normalize_line("  fax  "), Some("FAX".to_string()));
        assert_eq!(normalize_line("aapl # long comment"), Some("AAPL".to_string()));
        assert_eq!(normalize_line("brk.b#x"), Some("BRK.B".to_string()));
    }

    #[test]
    fn read_tickers_keeps_file_order() {
        let input = "\
msft
# ignored
aapl   # comment

FAX
msft
";
        let got = read_tickers(Cursor::new(input)).unwrap();
        assert_eq!(got, vec!["MSFT", "AAPL", "FAX", "MSFT"]);
    }

    #[test]
    fn read_tickers_from_path_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "aapl\nbrk.b\n#comment\n").unwrap();

        let got = read_tickers_from_path(file.path()).unwrap();
        assert_eq!(got, vec!["AAPL", "BRK.B"]);
    }

    #[test]
    fn read_tickers_from_missing_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_tickers_from_path(dir.path().join("nope.txt")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn read_tickers_propagates_read_error() {
        struct FailingReader;

        impl Read for FailingReader {
            fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::other("boom"))
            }
        }

        let err = read_tickers(FailingReader).unwrap_err();
        assert!(err.to_string().contains("boom"));
    }
}
