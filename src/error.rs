use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConvertError>;

#[derive(Debug, Error)]
pub enum ConvertError {
    /// Input path does not end in exactly `.obj`.
    #[error("only .obj files are accepted, got {}", path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("failed to access {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: {kind}")]
    Parse { line: usize, kind: ParseErrorKind },

    #[error("failed to serialize mesh document")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error("invalid number {token:?}")]
    InvalidFloat { token: String },

    #[error("invalid vertex index {token:?}")]
    InvalidIndex { token: String },

    #[error("'{marker}' needs {expected} components, found {found}")]
    MissingComponents {
        marker: &'static str,
        expected: usize,
        found: usize,
    },
}

impl ParseErrorKind {
    pub fn at(self, line: usize) -> ConvertError {
        ConvertError::Parse { line, kind: self }
    }
}
