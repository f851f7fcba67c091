//! Store adapters for the persistence layer

use std::path::PathBuf;

use jubgoong_store::LedgerStore;
use jubgoong_types::Result;

use crate::config::Config;

/// Open the ledger store at the configured data directory
pub fn open_ledger_store(config: &Config) -> Result<LedgerStore> {
    let data_dir = config.data_dir()?;
    LedgerStore::open(data_dir)
}

/// Open the ledger store at a custom directory
pub fn open_ledger_store_at(data_dir: PathBuf) -> Result<LedgerStore> {
    LedgerStore::open(data_dir)
}
