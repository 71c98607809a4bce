use std::path::PathBuf;

use super::record::COLUMN_COUNT;

/// Errors raised while loading a catalog or writing its reports.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("source is empty: no header line")]
    EmptySource,

    #[error(
        "malformed record{}: expected {} fields, found {}",
        line_suffix(.line),
        COLUMN_COUNT,
        .found
    )]
    MalformedRecord { line: Option<usize>, found: usize },

    #[error("source unavailable: {0}")]
    SourceUnavailable(#[source] std::io::Error),

    #[error("cannot create report {path:?}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write report: {0}")]
    Write(#[source] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CatalogError {
    pub fn malformed(found: usize) -> Self {
        Self::MalformedRecord { line: None, found }
    }

    /// Attach a 1-based line number to a `MalformedRecord`. Other variants pass through.
    pub fn at_line(self, line: usize) -> Self {
        match self {
            Self::MalformedRecord { found, .. } => Self::MalformedRecord {
                line: Some(line),
                found,
            },
            other => other,
        }
    }
}

fn line_suffix(line: &Option<usize>) -> String {
    match line {
        Some(n) => format!(" at line {n}"),
        None => String::new(),
    }
}
