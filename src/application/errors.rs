//! Application layer errors

use thiserror::Error;

/// Catalogue service errors
///
/// Every variant renders to the single message string surfaced by the
/// use cases.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogueError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("{}{}", status_line(.status, .status_text), detail_suffix(.detail))]
    Status {
        status: u16,
        status_text: String,
        detail: Option<String>,
    },

    #[error("Invalid JSON response")]
    InvalidJson,

    #[error("{}", .0.join("; "))]
    Rejected(Vec<String>),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Malformed {0} response")]
    MalformedResponse(&'static str),

    #[error("No HTTP transport available: {0}")]
    TransportUnavailable(String),
}

fn status_line(status: &u16, status_text: &str) -> String {
    if status_text.is_empty() {
        status.to_string()
    } else {
        format!("{} {}", status, status_text)
    }
}

fn detail_suffix(detail: &Option<String>) -> String {
    match detail {
        Some(d) => format!(" - {}", d),
        None => String::new(),
    }
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Parse error: {0}")]
    Parse(String),
}
