use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Widget not found: {0}")]
    WidgetNotFound(u64),

    #[error("Unable to find an element by {query}: {pattern:?}")]
    NoMatch { query: &'static str, pattern: String },

    #[error("Found {count} elements by {query}: {pattern:?}")]
    MultipleMatches {
        query: &'static str,
        pattern: String,
        count: usize,
    },

    #[error("Invalid widget type: expected {expected}, got {actual}")]
    InvalidWidgetType { expected: String, actual: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
