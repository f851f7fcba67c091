//! Repository trait definitions for data persistence

use jubgoong_types::Error;

use crate::model::Ledger;

/// Repository for the persisted record tree
pub trait LedgerRepository {
    /// Load the full ledger
    fn load(&self) -> Result<Ledger, Error>;

    /// Save the full ledger
    fn save(&self, ledger: &Ledger) -> Result<(), Error>;
}
