//! Weight tracking entity definitions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single weight measurement.
///
/// Values are stored exactly as submitted; no range check is applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightSample {
    /// When the sample was logged.
    pub date: DateTime<Utc>,
    /// Measured value.
    pub value: f64,
}

impl WeightSample {
    /// Creates a new weight sample.
    pub fn new(value: f64, date: DateTime<Utc>) -> Self {
        Self { date, value }
    }
}
