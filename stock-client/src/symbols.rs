use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::cli::Args;

#[derive(Debug, Error)]
pub(crate) enum SymbolsError {
    /// Clap-логика должна гарантировать источник тикеров, но на всякий случай
    #[error("tickers source is missing: provide either --tickers-file or --tickers")]
    MissingSource,

    #[error("tickers list is empty (file: {path:?})")]
    EmptyFromFile { path: PathBuf },

    #[error("tickers list is empty (--tickers value: {raw:?})")]
    EmptyFromArg { raw: String },

    #[error("failed to read tickers file: {path:?}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub(crate) type Result<T> = std::result::Result<T, SymbolsError>;

/// Запрос клиента: тикеры и (необязательно) биржи.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Lookup {
    pub(crate) symbols: Vec<String>,
    pub(crate) exchanges: Vec<String>,
}

impl Lookup {
    /// Путь для stock-server
    pub(crate) fn path(&self) -> String {
        stock_core::protocol::format_lookup_path(&self.symbols, &self.exchanges)
    }
}

/// Собирает запрос из CLI:
/// - `--tickers-file` -> stock_core::tickers::read_tickers_from_path
/// - `--tickers`      -> stock_core::tickers::parse_tickers_csv
/// - `--exchanges`    -> как есть, без смены регистра
pub(crate) fn load_lookup(args: &Args) -> Result<Lookup> {
    let symbols = if let Some(path) = &args.tickers_file {
        load_from_file(path)?
    } else if let Some(raw) = &args.tickers {
        load_from_arg(raw)?
    } else {
        return Err(SymbolsError::MissingSource);
    };

    let exchanges = args
        .exchanges
        .as_deref()
        .map(parse_exchanges)
        .unwrap_or_default();

    Ok(Lookup { symbols, exchanges })
}

fn load_from_file(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref().to_path_buf();

    let symbols = stock_core::tickers::read_tickers_from_path(&path).map_err(|e| {
        SymbolsError::ReadFile {
            path: path.clone(),
            source: e,
        }
    })?;

    if symbols.is_empty() {
        return Err(SymbolsError::EmptyFromFile { path });
    }

    Ok(symbols)
}

fn load_from_arg(raw: &str) -> Result<Vec<String>> {
    let symbols = stock_core::tickers::parse_tickers_csv(raw);

    if symbols.is_empty() {
        return Err(SymbolsError::EmptyFromArg {
            raw: raw.to_string(),
        });
    }

    Ok(symbols)
}

fn parse_exchanges(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|e| !e.is_empty())
        .map(String::from)
        .collect()
}
