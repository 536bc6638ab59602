//! Synthetic metrics generation.
//!
//! There is no real sensor integration: each call fabricates one plausible
//! sample with the four measurements drawn uniformly from their ranges.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::Serialize;

use crate::models::metrics_sample::{ActiveModel, Model};
use sea_orm::ActiveValue::{NotSet, Set};

/// A generated-but-not-yet-persisted sample. This is what the latest-sample
/// cache holds; it becomes a [`Model`] once the store assigns it a row id.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Sample {
    pub timestamp: DateTime<Utc>,
    pub cpu_usage: f64,
    pub ram_usage: f64,
    pub temperature: f64,
    pub storage_usage: f64,
}

impl Sample {
    pub fn into_active_model(self) -> ActiveModel {
        ActiveModel {
            id: NotSet,
            timestamp: Set(self.timestamp),
            cpu_usage: Set(self.cpu_usage),
            ram_usage: Set(self.ram_usage),
            temperature: Set(self.temperature),
            storage_usage: Set(self.storage_usage),
        }
    }
}

impl From<Model> for Sample {
    fn from(m: Model) -> Self {
        Self {
            timestamp: m.timestamp,
            cpu_usage: m.cpu_usage,
            ram_usage: m.ram_usage,
            temperature: m.temperature,
            storage_usage: m.storage_usage,
        }
    }
}

/// Produces one synthetic sample timestamped with the current wall clock.
///
/// Percentages are uniform over [0, 100] and temperature over [20, 35],
/// all at exactly one decimal place. Values are drawn as integer tenths so
/// no rounding artifacts leak into the stored numbers.
pub fn generate() -> Sample {
    let mut rng = rand::thread_rng();

    Sample {
        timestamp: Utc::now(),
        cpu_usage: tenths(rng.gen_range(0..=1000)),
        ram_usage: tenths(rng.gen_range(0..=1000)),
        temperature: tenths(rng.gen_range(200..=350)),
        storage_usage: tenths(rng.gen_range(0..=1000)),
    }
}

fn tenths(n: u32) -> f64 {
    f64::from(n) / 10.0
}
