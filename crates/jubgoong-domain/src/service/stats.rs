//! Statistics over transports and lots
//!
//! Derived figures are recomputed on every read; nothing here is cached or
//! stored, so the results are always consistent with the current entries.

use serde::{Deserialize, Serialize};

use crate::model::{Lot, Transport};

/// Derived statistics for a single transport
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportStats {
    /// Gross weight: basket readings plus remain entries.
    pub total_weight: f64,
    /// Net shrimp weight after tare, plus remain entries.
    pub shrimp_weight: f64,
    pub basket_count: usize,
    pub remain_count: usize,
    pub remain_weight: f64,
    pub base_price: f64,
    pub deduction: f64,
    pub final_price: f64,
}

/// Derived statistics for a lot
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LotStats {
    pub transport_count: usize,
    /// Normal baskets only; remain entries measure leftovers, not throughput.
    pub total_baskets: usize,
    pub total_weight: f64,
    pub total_shrimp_weight: f64,
    pub total_value: f64,
}

/// Compute statistics for one transport.
///
/// Each normal basket reading includes one tare (`basket_weight`), so the
/// net weight is the sum of readings minus `count * tare`. Remain entries
/// are weighed without a basket and contribute their full value to both
/// the gross and net figures. A negative net weight is passed through
/// unclamped so mis-entered readings stay visible.
pub fn transport_stats(transport: &Transport) -> TransportStats {
    let basket_count = transport.baskets.len();
    let basket_total_weight: f64 = transport.baskets.iter().map(|b| b.weight).sum();
    let basket_shrimp_weight =
        basket_total_weight - basket_count as f64 * transport.basket_weight;

    let remain_count = transport.remain_shrimp.len();
    let remain_weight: f64 = transport.remain_shrimp.iter().map(|r| r.weight).sum();

    let total_weight = basket_total_weight + remain_weight;
    let shrimp_weight = basket_shrimp_weight + remain_weight;

    let base_price = shrimp_weight * transport.price_per_kg;
    let deduction = base_price * (transport.deduction_percentage / 100.0);
    let final_price = base_price - deduction;

    TransportStats {
        total_weight,
        shrimp_weight,
        basket_count,
        remain_count,
        remain_weight,
        base_price,
        deduction,
        final_price,
    }
}

/// Sum the per-transport statistics of every transport in a lot.
pub fn lot_stats(lot: &Lot) -> LotStats {
    let mut total_baskets = 0;
    let mut total_weight = 0.0;
    let mut total_shrimp_weight = 0.0;
    let mut total_value = 0.0;

    for transport in &lot.transports {
        let stats = transport_stats(transport);
        total_baskets += stats.basket_count;
        total_weight += stats.total_weight;
        total_shrimp_weight += stats.shrimp_weight;
        total_value += stats.final_price;
    }

    LotStats {
        transport_count: lot.transports.len(),
        total_baskets,
        total_weight,
        total_shrimp_weight,
        total_value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::WeighEntry;

    const TOL: f64 = 1e-9;

    fn priced_transport(basket_weights: &[f64]) -> Transport {
        let mut t = Transport::new("Transport 1".to_string(), 5.0);
        t.price_per_kg = 100.0;
        t.deduction_percentage = 10.0;
        for &w in basket_weights {
            t.baskets.push(WeighEntry::new(w, false));
        }
        t
    }

    #[test]
    fn test_empty_transport_all_zero() {
        let t = Transport::new("Transport 1".to_string(), 5.0);
        let stats = transport_stats(&t);
        assert_eq!(stats.basket_count, 0);
        assert_eq!(stats.remain_count, 0);
        assert!(stats.total_weight.abs() < TOL);
        assert!(stats.shrimp_weight.abs() < TOL);
        assert!(stats.remain_weight.abs() < TOL);
        assert!(stats.base_price.abs() < TOL);
        assert!(stats.deduction.abs() < TOL);
        assert!(stats.final_price.abs() < TOL);
    }

    #[test]
    fn test_counts_match_entry_lists() {
        let mut t = priced_transport(&[52.0, 48.0, 51.5]);
        t.remain_shrimp.push(WeighEntry::new(3.2, true));
        let stats = transport_stats(&t);
        assert_eq!(stats.basket_count, t.baskets.len());
        assert_eq!(stats.remain_count, t.remain_shrimp.len());
    }

    #[test]
    fn test_two_baskets_with_tare_and_deduction() {
        let t = priced_transport(&[52.0, 48.0]);
        let stats = transport_stats(&t);
        assert!((stats.total_weight - 100.0).abs() < TOL);
        assert!((stats.shrimp_weight - 90.0).abs() < TOL);
        assert!((stats.base_price - 9000.0).abs() < TOL);
        assert!((stats.deduction - 900.0).abs() < TOL);
        assert!((stats.final_price - 8100.0).abs() < TOL);
    }

    #[test]
    fn test_remain_entry_is_tare_free() {
        let mut t = priced_transport(&[52.0, 48.0]);
        t.remain_shrimp.push(WeighEntry::new(3.2, true));
        let stats = transport_stats(&t);
        // Remain weight counts fully in both gross and net.
        assert!((stats.total_weight - 103.2).abs() < TOL);
        assert!((stats.shrimp_weight - 93.2).abs() < TOL);
        assert!((stats.remain_weight - 3.2).abs() < TOL);
        assert!((stats.base_price - 9320.0).abs() < TOL);
        assert!((stats.final_price - 8388.0).abs() < TOL);
    }

    #[test]
    fn test_unpriced_transport_has_zero_prices() {
        let mut t = priced_transport(&[52.0, 48.0]);
        t.price_per_kg = 0.0;
        let stats = transport_stats(&t);
        assert!((stats.shrimp_weight - 90.0).abs() < TOL);
        assert!(stats.base_price.abs() < TOL);
        assert!(stats.deduction.abs() < TOL);
        assert!(stats.final_price.abs() < TOL);
    }

    #[test]
    fn test_negative_shrimp_weight_not_clamped() {
        // Tare exceeds the recorded gross weight: mis-entered reading.
        let mut t = Transport::new("Transport 1".to_string(), 5.0);
        t.baskets.push(WeighEntry::new(3.0, false));
        let stats = transport_stats(&t);
        assert!((stats.shrimp_weight - (-2.0)).abs() < TOL);
    }

    #[test]
    fn test_empty_lot_all_zero() {
        let lot = Lot::new("การจับ 1".to_string(), 5.0);
        let stats = lot_stats(&lot);
        assert_eq!(stats.transport_count, 0);
        assert_eq!(stats.total_baskets, 0);
        assert!(stats.total_weight.abs() < TOL);
        assert!(stats.total_shrimp_weight.abs() < TOL);
        assert!(stats.total_value.abs() < TOL);
    }

    #[test]
    fn test_lot_rollup_sums_transports() {
        let mut lot = Lot::new("การจับ 1".to_string(), 5.0);
        let mut priced = priced_transport(&[52.0, 48.0]);
        priced.remain_shrimp.push(WeighEntry::new(3.2, true));
        let mut unpriced = Transport::new("Transport 2".to_string(), 5.0);
        unpriced.baskets.push(WeighEntry::new(40.0, false));
        lot.transports.push(priced);
        lot.transports.push(unpriced);

        let stats = lot_stats(&lot);
        assert_eq!(stats.transport_count, 2);
        assert_eq!(stats.total_baskets, 3);
        assert!((stats.total_weight - 143.2).abs() < TOL);
        assert!((stats.total_shrimp_weight - (93.2 + 35.0)).abs() < TOL);
        // Unpriced transport contributes zero value.
        assert!((stats.total_value - 8388.0).abs() < TOL);

        let summed: f64 = lot
            .transports
            .iter()
            .map(|t| transport_stats(t).final_price)
            .sum();
        assert!((stats.total_value - summed).abs() < TOL);
    }

    #[test]
    fn test_total_baskets_excludes_remain_entries() {
        let mut lot = Lot::new("การจับ 1".to_string(), 5.0);
        let mut t = priced_transport(&[52.0]);
        t.remain_shrimp.push(WeighEntry::new(2.0, true));
        t.remain_shrimp.push(WeighEntry::new(1.5, true));
        lot.transports.push(t);

        let stats = lot_stats(&lot);
        assert_eq!(stats.total_baskets, 1);
        // Remain weight still flows into the weight totals.
        assert!((stats.total_weight - 55.5).abs() < TOL);
        assert!((stats.total_shrimp_weight - 50.5).abs() < TOL);
    }
}
