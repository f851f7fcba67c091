use serde::{Deserialize, Serialize};

use super::WeighEntry;

/// A shipment within a lot, holding its weighing entries and pricing
/// parameters. Entries stay in append order; the index doubles as the
/// display index.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transport {
    pub id: String,
    pub name: String,
    /// Tare per basket in kg, subtracted from each normal entry.
    pub basket_weight: f64,
    pub quick_add_weight: f64,
    pub auto_decimal_mode: bool,
    pub price_per_kg: f64,
    pub deduction_percentage: f64,
    pub baskets: Vec<WeighEntry>,
    /// Remain (ชั่งเศษ) entries, pure shrimp weight with no tare.
    #[serde(default)]
    pub remain_shrimp: Vec<WeighEntry>,
}

impl Transport {
    pub fn new(name: String, basket_weight: f64) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name,
            basket_weight,
            quick_add_weight: 50.0,
            auto_decimal_mode: false,
            price_per_kg: 0.0,
            deduction_percentage: 0.0,
            baskets: Vec::new(),
            remain_shrimp: Vec::new(),
        }
    }

    /// Whether a price has been set for this transport.
    pub fn is_priced(&self) -> bool {
        self.price_per_kg > 0.0
    }

    pub fn find_entry(&self, entry_id: &str) -> Option<&WeighEntry> {
        self.baskets
            .iter()
            .chain(self.remain_shrimp.iter())
            .find(|e| e.id == entry_id)
    }

    pub fn find_entry_mut(&mut self, entry_id: &str) -> Option<&mut WeighEntry> {
        self.baskets
            .iter_mut()
            .chain(self.remain_shrimp.iter_mut())
            .find(|e| e.id == entry_id)
    }
}
