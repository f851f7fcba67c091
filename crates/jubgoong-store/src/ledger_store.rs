//! File-based ledger store
//!
//! Holds the whole record tree in memory and rewrites the JSON file after
//! every mutation. All mutations go through this single owner; the core
//! statistics functions only ever see snapshots of it.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use jubgoong_domain::model::{Ledger, Lot, Transport, WeighEntry};
use jubgoong_domain::repository::LedgerRepository;
use jubgoong_types::{Error, Result, StorageError};

const LEDGER_FILE: &str = "ledger.json";

/// File-based implementation of the ledger store.
///
/// Deserialization is strict: a malformed or structurally mismatched file
/// is an error, not an empty ledger. Only `remainShrimp`, `isRemainMode`
/// and `lotCounter` are defaulted, so files written by older versions
/// without remain support still load.
pub struct LedgerStore {
    ledger_path: PathBuf,
    ledger: Ledger,
}

impl LedgerStore {
    /// Create or load a ledger store in the given directory
    pub fn open(store_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&store_dir)?;
        let ledger_path = store_dir.join(LEDGER_FILE);

        let ledger = if ledger_path.exists() {
            read_ledger(&ledger_path)?
        } else {
            Ledger::default()
        };

        Ok(Self {
            ledger_path,
            ledger,
        })
    }

    /// Current snapshot of the record tree
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Path of the backing file
    pub fn ledger_path(&self) -> &Path {
        &self.ledger_path
    }

    fn persist(&self) -> Result<()> {
        write_ledger(&self.ledger_path, &self.ledger)
    }

    /// Create a new lot with an auto-generated name (การจับ N)
    pub fn create_lot(&mut self, default_basket_weight: f64) -> Result<Lot> {
        let name = format!("การจับ {}", self.ledger.lot_counter);
        let lot = Lot::new(name, default_basket_weight);
        self.ledger.lots.push(lot.clone());
        self.ledger.lot_counter += 1;
        self.persist()?;
        Ok(lot)
    }

    pub fn rename_lot(&mut self, lot_id: &str, name: String) -> Result<()> {
        self.lot_mut(lot_id)?.name = name;
        self.persist()
    }

    /// Delete a lot; its transports and entries go with it
    pub fn delete_lot(&mut self, lot_id: &str) -> Result<()> {
        let before = self.ledger.lots.len();
        self.ledger.lots.retain(|l| l.id != lot_id);
        if self.ledger.lots.len() == before {
            return Err(Error::LotNotFound(lot_id.to_string()));
        }
        self.persist()
    }

    /// Add a transport to a lot, taking its tare from the lot default
    pub fn add_transport(&mut self, lot_id: &str) -> Result<Transport> {
        let lot = self.lot_mut(lot_id)?;
        let name = format!("Transport {}", lot.transports.len() + 1);
        let transport = Transport::new(name, lot.default_basket_weight);
        lot.transports.push(transport.clone());
        self.persist()?;
        Ok(transport)
    }

    pub fn rename_transport(
        &mut self,
        lot_id: &str,
        transport_id: &str,
        name: String,
    ) -> Result<()> {
        self.transport_mut(lot_id, transport_id)?.name = name;
        self.persist()
    }

    /// Delete a transport; its entries go with it
    pub fn delete_transport(&mut self, lot_id: &str, transport_id: &str) -> Result<()> {
        let lot = self.lot_mut(lot_id)?;
        let before = lot.transports.len();
        lot.transports.retain(|t| t.id != transport_id);
        if lot.transports.len() == before {
            return Err(Error::TransportNotFound(transport_id.to_string()));
        }
        self.persist()
    }

    pub fn set_pricing(
        &mut self,
        lot_id: &str,
        transport_id: &str,
        price_per_kg: f64,
        deduction_percentage: f64,
    ) -> Result<()> {
        let transport = self.transport_mut(lot_id, transport_id)?;
        transport.price_per_kg = price_per_kg;
        transport.deduction_percentage = deduction_percentage;
        self.persist()
    }

    pub fn set_basket_weight(
        &mut self,
        lot_id: &str,
        transport_id: &str,
        basket_weight: f64,
    ) -> Result<()> {
        self.transport_mut(lot_id, transport_id)?.basket_weight = basket_weight;
        self.persist()
    }

    pub fn set_quick_add_weight(
        &mut self,
        lot_id: &str,
        transport_id: &str,
        quick_add_weight: f64,
    ) -> Result<()> {
        self.transport_mut(lot_id, transport_id)?.quick_add_weight = quick_add_weight;
        self.persist()
    }

    pub fn set_auto_decimal_mode(
        &mut self,
        lot_id: &str,
        transport_id: &str,
        enabled: bool,
    ) -> Result<()> {
        self.transport_mut(lot_id, transport_id)?.auto_decimal_mode = enabled;
        self.persist()
    }

    /// Record a weighing. Normal entries go to `baskets`, remain entries
    /// to `remain_shrimp`. Weight must be a positive finite number; this
    /// is the boundary that keeps bad readings out of the tree.
    pub fn add_entry(
        &mut self,
        lot_id: &str,
        transport_id: &str,
        weight: f64,
        is_remain_mode: bool,
    ) -> Result<WeighEntry> {
        if !weight.is_finite() || weight <= 0.0 {
            return Err(Error::InvalidWeight(weight));
        }
        let transport = self.transport_mut(lot_id, transport_id)?;
        let entry = WeighEntry::new(weight, is_remain_mode);
        if is_remain_mode {
            transport.remain_shrimp.push(entry.clone());
        } else {
            transport.baskets.push(entry.clone());
        }
        self.persist()?;
        Ok(entry)
    }

    /// Correct the weight of an existing entry
    pub fn update_entry_weight(
        &mut self,
        lot_id: &str,
        transport_id: &str,
        entry_id: &str,
        weight: f64,
    ) -> Result<()> {
        if !weight.is_finite() || weight <= 0.0 {
            return Err(Error::InvalidWeight(weight));
        }
        let transport = self.transport_mut(lot_id, transport_id)?;
        let entry = transport
            .find_entry_mut(entry_id)
            .ok_or_else(|| Error::EntryNotFound(entry_id.to_string()))?;
        entry.weight = weight;
        self.persist()
    }

    pub fn delete_entry(
        &mut self,
        lot_id: &str,
        transport_id: &str,
        entry_id: &str,
    ) -> Result<()> {
        let transport = self.transport_mut(lot_id, transport_id)?;
        let before = transport.baskets.len() + transport.remain_shrimp.len();
        transport.baskets.retain(|e| e.id != entry_id);
        transport.remain_shrimp.retain(|e| e.id != entry_id);
        if transport.baskets.len() + transport.remain_shrimp.len() == before {
            return Err(Error::EntryNotFound(entry_id.to_string()));
        }
        self.persist()
    }

    /// Write the ledger to an arbitrary path (JSON export)
    pub fn export_to(&self, path: &Path) -> Result<()> {
        write_ledger(path, &self.ledger)
    }

    /// Replace the ledger with the contents of an exported file
    pub fn import_from(&mut self, path: &Path) -> Result<()> {
        self.ledger = read_ledger(path)?;
        self.persist()
    }

    fn lot_mut(&mut self, lot_id: &str) -> Result<&mut Lot> {
        self.ledger
            .find_lot_mut(lot_id)
            .ok_or_else(|| Error::LotNotFound(lot_id.to_string()))
    }

    fn transport_mut(&mut self, lot_id: &str, transport_id: &str) -> Result<&mut Transport> {
        self.lot_mut(lot_id)?
            .find_transport_mut(transport_id)
            .ok_or_else(|| Error::TransportNotFound(transport_id.to_string()))
    }
}

impl LedgerRepository for LedgerStore {
    fn load(&self) -> std::result::Result<Ledger, Error> {
        if self.ledger_path.exists() {
            read_ledger(&self.ledger_path)
        } else {
            Ok(Ledger::default())
        }
    }

    fn save(&self, ledger: &Ledger) -> std::result::Result<(), Error> {
        write_ledger(&self.ledger_path, ledger)
    }
}

fn read_ledger(path: &Path) -> Result<Ledger> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|e| {
        StorageError::Corrupted(format!("{}: {}", path.display(), e)).into()
    })
}

fn write_ledger(path: &Path, ledger: &Ledger) -> Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, ledger)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use jubgoong_domain::service::transport_stats;

    fn temp_store() -> (tempfile::TempDir, LedgerStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = LedgerStore::open(dir.path().to_path_buf()).unwrap();
        (dir, store)
    }

    #[test]
    fn test_open_empty_dir_gives_default_ledger() {
        let (_dir, store) = temp_store();
        assert!(store.ledger().lots.is_empty());
        assert_eq!(store.ledger().lot_counter, 1);
    }

    #[test]
    fn test_lot_counter_never_reuses_names() {
        let (_dir, mut store) = temp_store();
        let first = store.create_lot(5.0).unwrap();
        assert_eq!(first.name, "การจับ 1");
        store.delete_lot(&first.id).unwrap();
        let second = store.create_lot(5.0).unwrap();
        assert_eq!(second.name, "การจับ 2");
    }

    #[test]
    fn test_mutations_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let lot_id;
        let transport_id;
        {
            let mut store = LedgerStore::open(dir.path().to_path_buf()).unwrap();
            let lot = store.create_lot(5.0).unwrap();
            lot_id = lot.id;
            let transport = store.add_transport(&lot_id).unwrap();
            transport_id = transport.id;
            store.set_pricing(&lot_id, &transport_id, 100.0, 10.0).unwrap();
            store.add_entry(&lot_id, &transport_id, 52.0, false).unwrap();
            store.add_entry(&lot_id, &transport_id, 48.0, false).unwrap();
            store.add_entry(&lot_id, &transport_id, 3.2, true).unwrap();
        }

        let store = LedgerStore::open(dir.path().to_path_buf()).unwrap();
        let lot = store.ledger().find_lot(&lot_id).unwrap();
        let transport = lot.find_transport(&transport_id).unwrap();
        assert_eq!(transport.baskets.len(), 2);
        assert_eq!(transport.remain_shrimp.len(), 1);
        assert!((transport.baskets[0].weight - 52.0).abs() < 1e-9);
        assert!((transport.remain_shrimp[0].weight - 3.2).abs() < 1e-9);

        let stats = transport_stats(transport);
        assert!((stats.final_price - 8388.0).abs() < 1e-9);
    }

    #[test]
    fn test_roundtrip_preserves_timestamp_order() {
        let dir = tempfile::tempdir().unwrap();
        let (lot_id, transport_id);
        {
            let mut store = LedgerStore::open(dir.path().to_path_buf()).unwrap();
            let lot = store.create_lot(5.0).unwrap();
            lot_id = lot.id;
            transport_id = store.add_transport(&lot_id).unwrap().id;
            for w in [10.0, 11.0, 12.0] {
                store.add_entry(&lot_id, &transport_id, w, false).unwrap();
            }
        }

        let store = LedgerStore::open(dir.path().to_path_buf()).unwrap();
        let transport = store
            .ledger()
            .find_lot(&lot_id)
            .unwrap()
            .find_transport(&transport_id)
            .unwrap();
        let timestamps: Vec<_> = transport.baskets.iter().map(|b| b.timestamp).collect();
        let mut sorted = timestamps.clone();
        sorted.sort();
        assert_eq!(timestamps, sorted);
    }

    #[test]
    fn test_rejects_non_positive_weight() {
        let (_dir, mut store) = temp_store();
        let lot_id = store.create_lot(5.0).unwrap().id;
        let transport_id = store.add_transport(&lot_id).unwrap().id;
        assert!(matches!(
            store.add_entry(&lot_id, &transport_id, 0.0, false),
            Err(Error::InvalidWeight(_))
        ));
        assert!(matches!(
            store.add_entry(&lot_id, &transport_id, -4.0, false),
            Err(Error::InvalidWeight(_))
        ));
        assert!(matches!(
            store.add_entry(&lot_id, &transport_id, f64::NAN, false),
            Err(Error::InvalidWeight(_))
        ));
    }

    #[test]
    fn test_update_and_delete_entry() {
        let (_dir, mut store) = temp_store();
        let lot_id = store.create_lot(5.0).unwrap().id;
        let transport_id = store.add_transport(&lot_id).unwrap().id;
        let entry = store.add_entry(&lot_id, &transport_id, 52.0, false).unwrap();

        store
            .update_entry_weight(&lot_id, &transport_id, &entry.id, 51.5)
            .unwrap();
        let lot = store.ledger().find_lot(&lot_id).unwrap();
        let transport = lot.find_transport(&transport_id).unwrap();
        assert!((transport.baskets[0].weight - 51.5).abs() < 1e-9);

        store.delete_entry(&lot_id, &transport_id, &entry.id).unwrap();
        let lot = store.ledger().find_lot(&lot_id).unwrap();
        assert!(lot.find_transport(&transport_id).unwrap().baskets.is_empty());

        assert!(matches!(
            store.delete_entry(&lot_id, &transport_id, &entry.id),
            Err(Error::EntryNotFound(_))
        ));
    }

    #[test]
    fn test_delete_transport_cascades_entries() {
        let (_dir, mut store) = temp_store();
        let lot_id = store.create_lot(5.0).unwrap().id;
        let transport_id = store.add_transport(&lot_id).unwrap().id;
        store.add_entry(&lot_id, &transport_id, 40.0, false).unwrap();
        store.delete_transport(&lot_id, &transport_id).unwrap();
        assert!(store.ledger().find_lot(&lot_id).unwrap().transports.is_empty());
    }

    #[test]
    fn test_missing_remain_shrimp_field_defaults_empty() {
        // Files written before remain support have no remainShrimp arrays.
        let dir = tempfile::tempdir().unwrap();
        let json = r#"{
            "lots": [{
                "id": "lot-1",
                "name": "การจับ 1",
                "defaultBasketWeight": 5.0,
                "createdAt": "2024-03-01T08:00:00Z",
                "transports": [{
                    "id": "t-1",
                    "name": "Transport 1",
                    "basketWeight": 5.0,
                    "quickAddWeight": 50.0,
                    "autoDecimalMode": false,
                    "pricePerKg": 100.0,
                    "deductionPercentage": 10.0,
                    "baskets": [{
                        "id": "b-1",
                        "weight": 52.0,
                        "timestamp": "2024-03-01T08:05:00Z"
                    }]
                }]
            }],
            "lotCounter": 2
        }"#;
        std::fs::write(dir.path().join("ledger.json"), json).unwrap();

        let store = LedgerStore::open(dir.path().to_path_buf()).unwrap();
        let transport = &store.ledger().lots[0].transports[0];
        assert!(transport.remain_shrimp.is_empty());
        assert!(!transport.baskets[0].is_remain_mode);
    }

    #[test]
    fn test_malformed_file_fails_loudly() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("ledger.json"), "{\"lots\": 42}").unwrap();
        assert!(matches!(
            LedgerStore::open(dir.path().to_path_buf()),
            Err(Error::Storage(StorageError::Corrupted(_)))
        ));
    }

    #[test]
    fn test_repository_trait_loads_persisted_tree() {
        let (_dir, mut store) = temp_store();
        store.create_lot(5.0).unwrap();

        let repo: &dyn LedgerRepository = &store;
        let loaded = repo.load().unwrap();
        assert_eq!(loaded.lots.len(), 1);
        repo.save(&loaded).unwrap();
    }

    #[test]
    fn test_export_import_roundtrip() {
        let (_dir, mut store) = temp_store();
        let lot_id = store.create_lot(5.0).unwrap().id;
        let transport_id = store.add_transport(&lot_id).unwrap().id;
        store.add_entry(&lot_id, &transport_id, 52.0, false).unwrap();

        let export_dir = tempfile::tempdir().unwrap();
        let export_path = export_dir.path().join("backup.json");
        store.export_to(&export_path).unwrap();

        store.delete_lot(&lot_id).unwrap();
        assert!(store.ledger().lots.is_empty());

        store.import_from(&export_path).unwrap();
        assert_eq!(store.ledger().lots.len(), 1);
        assert_eq!(store.ledger().lots[0].id, lot_id);
    }
}
