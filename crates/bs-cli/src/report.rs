//! Result line rendering

use bs_01_binary_search::SearchOutcome;
use serde::Serialize;

use crate::config::OutputFormat;
use crate::error::DriverError;

/// JSON shape of a result line.
#[derive(Debug, Serialize)]
struct JsonReport {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    index: Option<usize>,
}

impl From<SearchOutcome> for JsonReport {
    fn from(outcome: SearchOutcome) -> Self {
        match outcome {
            SearchOutcome::Found(index) => Self {
                status: "found",
                index: Some(index),
            },
            SearchOutcome::NotFound => Self {
                status: "not_found",
                index: None,
            },
        }
    }
}

/// Render the single result line (without trailing newline).
pub fn render(outcome: SearchOutcome, format: OutputFormat) -> Result<String, DriverError> {
    match format {
        OutputFormat::Text => Ok(match outcome {
            SearchOutcome::Found(index) => format!("Element found at index {}", index),
            SearchOutcome::NotFound => "Element not found".to_string(),
        }),
        OutputFormat::Json => serde_json::to_string(&JsonReport::from(outcome))
            .map_err(|e| DriverError::SerializationError(e.to_string())),
    }
}
