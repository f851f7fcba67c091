//! Persistent store for the jubgoong record tree

mod ledger_store;

pub use ledger_store::LedgerStore;
