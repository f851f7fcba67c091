//! Domain services - pure statistics and input helpers

pub mod format;
pub mod input;
pub mod stats;

pub use input::convert_auto_decimal;
pub use stats::{lot_stats, transport_stats, LotStats, TransportStats};
