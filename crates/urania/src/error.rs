use crate::zodiac::{Body, Sign};
use serde::Serialize;
use thiserror::Error;

/// Errors that abort a chart analysis.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),
}

impl ChartError {
    pub fn invalid(message: impl Into<String>) -> Self {
        ChartError::InvalidInput {
            message: message.into(),
        }
    }
}

/// Non-fatal conditions met while analyzing a chart.
///
/// The analysis always completes; these records explain which relations were
/// skipped or defaulted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub enum Diagnostic {
    /// No house interval contained the body; it was placed in house 1.
    #[serde(rename_all = "camelCase")]
    UnresolvedGeometry { body: Body, absolute_degree: f64 },
    /// A sign missing from every cusp had no containing house.
    #[serde(rename_all = "camelCase")]
    UnresolvedInterception { sign: Sign },
    /// A house ruler is absent from the chart or has no house.
    #[serde(rename_all = "camelCase")]
    MissingCollaboratorData { house: u8, ruler: Body },
    /// An aspect names a body that is not part of the chart.
    #[serde(rename_all = "camelCase")]
    UnknownAspectTarget { from: Body, to: Body },
}
