use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single weighing entry.
///
/// Normal entries record the gross basket reading (shrimp plus tare);
/// remain entries (ชั่งเศษ) record pure shrimp weight with no tare.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeighEntry {
    pub id: String,
    pub weight: f64,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub is_remain_mode: bool,
}

impl WeighEntry {
    pub fn new(weight: f64, is_remain_mode: bool) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            weight,
            timestamp: Utc::now(),
            is_remain_mode,
        }
    }
}
