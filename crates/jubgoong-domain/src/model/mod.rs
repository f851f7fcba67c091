//! Domain model types

pub mod ledger;
pub mod lot;
pub mod transport;
pub mod weigh_entry;

pub use ledger::Ledger;
pub use lot::Lot;
pub use transport::Transport;
pub use weigh_entry::WeighEntry;
