//! Command handlers

use jubgoong_app::config::Config;
use jubgoong_app::report::generate_lot_report;
use jubgoong_app::repository::open_ledger_store;
use jubgoong_domain::model::{Ledger, Lot, Transport};
use jubgoong_domain::service::convert_auto_decimal;
use jubgoong_domain::service::format::format_weight;
use jubgoong_store::LedgerStore;
use jubgoong_types::{Error, OutputFormat, Result};

use crate::cli::{BasketCommands, Cli, Commands, LotCommands, TransportCommands};
use crate::output::{output_lot, output_lot_list, output_transport};

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let mut config = Config::load()?;

    if let Some(ref data_dir) = cli.data_dir {
        config.data_dir = Some(data_dir.clone());
    }
    let format = cli.format.unwrap_or(config.output_format);

    if let Commands::Config {
        show,
        set_format,
        set_tare,
    } = &cli.command
    {
        return run_config(&mut config, *show, *set_format, *set_tare);
    }

    let mut store = open_ledger_store(&config)?;

    match cli.command {
        Commands::Lot { command } => run_lot(&mut store, &config, format, command),
        Commands::Transport { command } => run_transport(&mut store, format, command),
        Commands::Basket { command } => run_basket(&mut store, format, command),
        Commands::Export { output } => {
            store.export_to(&output)?;
            println!("Exported ledger to {}", output.display());
            Ok(())
        }
        Commands::Import { input } => {
            store.import_from(&input)?;
            println!(
                "Imported {} lot(s) from {}",
                store.ledger().lots.len(),
                input.display()
            );
            Ok(())
        }
        Commands::Config { .. } => unreachable!("handled above"),
    }
}

fn run_config(
    config: &mut Config,
    show: bool,
    set_format: Option<OutputFormat>,
    set_tare: Option<f64>,
) -> Result<()> {
    let mut changed = false;
    if let Some(format) = set_format {
        config.output_format = format;
        changed = true;
    }
    if let Some(tare) = set_tare {
        config.default_basket_weight = tare;
        changed = true;
    }
    if changed {
        config.save()?;
        println!("Configuration saved.");
    }
    if show || !changed {
        print!("{}", config);
    }
    Ok(())
}

fn run_lot(
    store: &mut LedgerStore,
    config: &Config,
    format: OutputFormat,
    command: LotCommands,
) -> Result<()> {
    match command {
        LotCommands::New { tare } => {
            let tare = tare.unwrap_or(config.default_basket_weight);
            let lot = store.create_lot(tare)?;
            println!("Created {} ({})", lot.name, lot.id);
            Ok(())
        }
        LotCommands::List => output_lot_list(format, store.ledger()),
        LotCommands::Show { lot } => {
            let lot_id = resolve_lot(store.ledger(), &lot)?;
            output_lot(format, lot_by_id(store.ledger(), &lot_id)?)
        }
        LotCommands::Rename { lot, name } => {
            let lot_id = resolve_lot(store.ledger(), &lot)?;
            store.rename_lot(&lot_id, name)?;
            println!("Renamed.");
            Ok(())
        }
        LotCommands::Delete { lot } => {
            let lot_id = resolve_lot(store.ledger(), &lot)?;
            store.delete_lot(&lot_id)?;
            println!("Deleted.");
            Ok(())
        }
        LotCommands::Report { lot, output } => {
            let lot_id = resolve_lot(store.ledger(), &lot)?;
            let report = generate_lot_report(lot_by_id(store.ledger(), &lot_id)?);
            match output {
                Some(path) => {
                    std::fs::write(&path, &report)?;
                    println!("Report written to {}", path.display());
                }
                None => print!("{}", report),
            }
            Ok(())
        }
    }
}

fn run_transport(
    store: &mut LedgerStore,
    format: OutputFormat,
    command: TransportCommands,
) -> Result<()> {
    match command {
        TransportCommands::Add { lot } => {
            let lot_id = resolve_lot(store.ledger(), &lot)?;
            let transport = store.add_transport(&lot_id)?;
            println!("Created {} ({})", transport.name, transport.id);
            Ok(())
        }
        TransportCommands::Show { lot, transport } => {
            let (lot_id, transport_id) = resolve_pair(store.ledger(), &lot, &transport)?;
            let transport = transport_by_id(store.ledger(), &lot_id, &transport_id)?;
            output_transport(format, transport)
        }
        TransportCommands::Rename {
            lot,
            transport,
            name,
        } => {
            let (lot_id, transport_id) = resolve_pair(store.ledger(), &lot, &transport)?;
            store.rename_transport(&lot_id, &transport_id, name)?;
            println!("Renamed.");
            Ok(())
        }
        TransportCommands::SetPrice {
            lot,
            transport,
            price,
            deduction,
        } => {
            let (lot_id, transport_id) = resolve_pair(store.ledger(), &lot, &transport)?;
            store.set_pricing(&lot_id, &transport_id, price, deduction)?;
            println!("Price set.");
            Ok(())
        }
        TransportCommands::SetTare {
            lot,
            transport,
            tare,
        } => {
            let (lot_id, transport_id) = resolve_pair(store.ledger(), &lot, &transport)?;
            store.set_basket_weight(&lot_id, &transport_id, tare)?;
            println!("Tare set to {}.", format_weight(tare));
            Ok(())
        }
        TransportCommands::SetQuickAdd {
            lot,
            transport,
            weight,
        } => {
            let (lot_id, transport_id) = resolve_pair(store.ledger(), &lot, &transport)?;
            store.set_quick_add_weight(&lot_id, &transport_id, weight)?;
            println!("Quick-add weight set to {}.", format_weight(weight));
            Ok(())
        }
        TransportCommands::SetAutoDecimal {
            lot,
            transport,
            enabled,
        } => {
            let (lot_id, transport_id) = resolve_pair(store.ledger(), &lot, &transport)?;
            store.set_auto_decimal_mode(&lot_id, &transport_id, enabled)?;
            println!("Auto-decimal {}.", if enabled { "enabled" } else { "disabled" });
            Ok(())
        }
        TransportCommands::Delete { lot, transport } => {
            let (lot_id, transport_id) = resolve_pair(store.ledger(), &lot, &transport)?;
            store.delete_transport(&lot_id, &transport_id)?;
            println!("Deleted.");
            Ok(())
        }
    }
}

fn run_basket(
    store: &mut LedgerStore,
    format: OutputFormat,
    command: BasketCommands,
) -> Result<()> {
    match command {
        BasketCommands::Add {
            lot,
            transport,
            weights,
            remain,
            quick,
        } => {
            let (lot_id, transport_id) = resolve_pair(store.ledger(), &lot, &transport)?;
            let current = transport_by_id(store.ledger(), &lot_id, &transport_id)?;
            let auto_decimal = current.auto_decimal_mode;
            let quick_weight = current.quick_add_weight;

            let mut parsed = Vec::new();
            if quick {
                parsed.push(quick_weight);
            }
            for raw in &weights {
                parsed.push(parse_weight(raw, auto_decimal)?);
            }
            if parsed.is_empty() {
                return Err(Error::WeightParse(
                    "no weights given (pass weights or --quick)".to_string(),
                ));
            }

            for weight in parsed {
                let entry = store.add_entry(&lot_id, &transport_id, weight, remain)?;
                println!(
                    "Added {} entry: {}",
                    if remain { "remain" } else { "basket" },
                    format_weight(entry.weight)
                );
            }

            let transport = transport_by_id(store.ledger(), &lot_id, &transport_id)?;
            output_transport(format, transport)
        }
        BasketCommands::Edit {
            lot,
            transport,
            entry,
            weight,
            remain,
        } => {
            let (lot_id, transport_id) = resolve_pair(store.ledger(), &lot, &transport)?;
            let current = transport_by_id(store.ledger(), &lot_id, &transport_id)?;
            let entry_id = resolve_entry(current, &entry, remain)?;
            store.update_entry_weight(&lot_id, &transport_id, &entry_id, weight)?;
            println!("Entry corrected to {}.", format_weight(weight));
            Ok(())
        }
        BasketCommands::Delete {
            lot,
            transport,
            entry,
            remain,
        } => {
            let (lot_id, transport_id) = resolve_pair(store.ledger(), &lot, &transport)?;
            let current = transport_by_id(store.ledger(), &lot_id, &transport_id)?;
            let entry_id = resolve_entry(current, &entry, remain)?;
            store.delete_entry(&lot_id, &transport_id, &entry_id)?;
            println!("Deleted.");
            Ok(())
        }
    }
}

/// Parse a weight argument, honoring the transport's auto-decimal mode.
fn parse_weight(raw: &str, auto_decimal: bool) -> Result<f64> {
    if auto_decimal {
        return Ok(convert_auto_decimal(raw));
    }
    raw.parse::<f64>()
        .map_err(|_| Error::WeightParse(raw.to_string()))
}

fn lot_by_id<'a>(ledger: &'a Ledger, lot_id: &str) -> Result<&'a Lot> {
    ledger
        .find_lot(lot_id)
        .ok_or_else(|| Error::LotNotFound(lot_id.to_string()))
}

fn transport_by_id<'a>(
    ledger: &'a Ledger,
    lot_id: &str,
    transport_id: &str,
) -> Result<&'a Transport> {
    lot_by_id(ledger, lot_id)?
        .find_transport(transport_id)
        .ok_or_else(|| Error::TransportNotFound(transport_id.to_string()))
}

/// Resolve a lot reference: exact id, unique id prefix, exact name,
/// or 1-based list index.
fn resolve_lot(ledger: &Ledger, key: &str) -> Result<String> {
    if let Some(lot) = ledger.lots.iter().find(|l| l.id == key) {
        return Ok(lot.id.clone());
    }
    let prefix_matches: Vec<_> = ledger
        .lots
        .iter()
        .filter(|l| l.id.starts_with(key))
        .collect();
    if prefix_matches.len() == 1 {
        return Ok(prefix_matches[0].id.clone());
    }
    if let Some(lot) = ledger.lots.iter().find(|l| l.name == key) {
        return Ok(lot.id.clone());
    }
    if let Ok(index) = key.parse::<usize>() {
        if index >= 1 && index <= ledger.lots.len() {
            return Ok(ledger.lots[index - 1].id.clone());
        }
    }
    Err(Error::LotNotFound(key.to_string()))
}

/// Resolve a transport reference within a lot, same rules as lots.
fn resolve_transport(lot: &Lot, key: &str) -> Result<String> {
    if let Some(t) = lot.transports.iter().find(|t| t.id == key) {
        return Ok(t.id.clone());
    }
    let prefix_matches: Vec<_> = lot
        .transports
        .iter()
        .filter(|t| t.id.starts_with(key))
        .collect();
    if prefix_matches.len() == 1 {
        return Ok(prefix_matches[0].id.clone());
    }
    if let Some(t) = lot.transports.iter().find(|t| t.name == key) {
        return Ok(t.id.clone());
    }
    if let Ok(index) = key.parse::<usize>() {
        if index >= 1 && index <= lot.transports.len() {
            return Ok(lot.transports[index - 1].id.clone());
        }
    }
    Err(Error::TransportNotFound(key.to_string()))
}

fn resolve_pair(ledger: &Ledger, lot_key: &str, transport_key: &str) -> Result<(String, String)> {
    let lot_id = resolve_lot(ledger, lot_key)?;
    let transport_id = resolve_transport(lot_by_id(ledger, &lot_id)?, transport_key)?;
    Ok((lot_id, transport_id))
}

/// Resolve an entry reference: id, unique id prefix, or 1-based index
/// into the basket list (or the remain list when `remain` is set).
fn resolve_entry(transport: &Transport, key: &str, remain: bool) -> Result<String> {
    if let Ok(index) = key.parse::<usize>() {
        let list = if remain {
            &transport.remain_shrimp
        } else {
            &transport.baskets
        };
        if index >= 1 && index <= list.len() {
            return Ok(list[index - 1].id.clone());
        }
    }
    if let Some(entry) = transport.find_entry(key) {
        return Ok(entry.id.clone());
    }
    let prefix_matches: Vec<_> = transport
        .baskets
        .iter()
        .chain(transport.remain_shrimp.iter())
        .filter(|e| e.id.starts_with(key))
        .collect();
    if prefix_matches.len() == 1 {
        return Ok(prefix_matches[0].id.clone());
    }
    Err(Error::EntryNotFound(key.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use jubgoong_domain::model::WeighEntry;

    fn sample_ledger() -> Ledger {
        let mut lot = Lot::new("การจับ 1".to_string(), 5.0);
        let mut transport = Transport::new("Transport 1".to_string(), 5.0);
        transport.baskets.push(WeighEntry::new(52.0, false));
        transport.remain_shrimp.push(WeighEntry::new(3.2, true));
        lot.transports.push(transport);
        Ledger {
            lots: vec![lot],
            lot_counter: 2,
        }
    }

    #[test]
    fn test_resolve_lot_by_name_index_and_prefix() {
        let ledger = sample_ledger();
        let id = ledger.lots[0].id.clone();
        assert_eq!(resolve_lot(&ledger, &id).unwrap(), id);
        assert_eq!(resolve_lot(&ledger, &id[..8]).unwrap(), id);
        assert_eq!(resolve_lot(&ledger, "การจับ 1").unwrap(), id);
        assert_eq!(resolve_lot(&ledger, "1").unwrap(), id);
        assert!(matches!(
            resolve_lot(&ledger, "missing"),
            Err(Error::LotNotFound(_))
        ));
    }

    #[test]
    fn test_resolve_entry_index_respects_remain_flag() {
        let ledger = sample_ledger();
        let transport = &ledger.lots[0].transports[0];
        let basket_id = transport.baskets[0].id.clone();
        let remain_id = transport.remain_shrimp[0].id.clone();
        assert_eq!(resolve_entry(transport, "1", false).unwrap(), basket_id);
        assert_eq!(resolve_entry(transport, "1", true).unwrap(), remain_id);
        assert_eq!(resolve_entry(transport, &remain_id, false).unwrap(), remain_id);
    }

    #[test]
    fn test_parse_weight_modes() {
        assert!((parse_weight("52.5", false).unwrap() - 52.5).abs() < 1e-9);
        assert!((parse_weight("567", true).unwrap() - 5.67).abs() < 1e-9);
        assert!(matches!(
            parse_weight("abc", false),
            Err(Error::WeightParse(_))
        ));
        // Auto-decimal mode never fails to parse; bad input becomes 0.0
        // and is rejected by the store.
        assert_eq!(parse_weight("abc", true).unwrap(), 0.0);
    }
}
