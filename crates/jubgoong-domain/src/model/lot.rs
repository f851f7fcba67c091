use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Transport;

/// A catch event grouping one or more transports.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lot {
    pub id: String,
    pub name: String,
    /// Tare assigned to newly added transports, kg.
    pub default_basket_weight: f64,
    pub transports: Vec<Transport>,
    pub created_at: DateTime<Utc>,
}

impl Lot {
    pub fn new(name: String, default_basket_weight: f64) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name,
            default_basket_weight,
            transports: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn find_transport(&self, transport_id: &str) -> Option<&Transport> {
        self.transports.iter().find(|t| t.id == transport_id)
    }

    pub fn find_transport_mut(&mut self, transport_id: &str) -> Option<&mut Transport> {
        self.transports.iter_mut().find(|t| t.id == transport_id)
    }
}
