use serde::{Deserialize, Serialize};

use super::Lot;

/// The root record collection persisted to disk.
///
/// `lot_counter` feeds the auto-generated lot names and only ever grows,
/// so deleting a lot never reuses a name.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ledger {
    pub lots: Vec<Lot>,
    #[serde(default = "default_lot_counter")]
    pub lot_counter: u32,
}

fn default_lot_counter() -> u32 {
    1
}

impl Default for Ledger {
    fn default() -> Self {
        Self {
            lots: Vec::new(),
            lot_counter: default_lot_counter(),
        }
    }
}

impl Ledger {
    pub fn find_lot(&self, lot_id: &str) -> Option<&Lot> {
        self.lots.iter().find(|l| l.id == lot_id)
    }

    pub fn find_lot_mut(&mut self, lot_id: &str) -> Option<&mut Lot> {
        self.lots.iter_mut().find(|l| l.id == lot_id)
    }
}
