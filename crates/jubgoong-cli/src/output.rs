//! Output formatting module

use jubgoong_domain::model::{Ledger, Lot, Transport};
use jubgoong_domain::service::format::{format_currency, format_date, format_weight};
use jubgoong_domain::service::{lot_stats, transport_stats};
use jubgoong_types::{OutputFormat, Result};

fn price_or_dash(transport: &Transport, amount: f64) -> String {
    if transport.is_priced() {
        format_currency(amount)
    } else {
        "—".to_string()
    }
}

pub fn output_lot_list(output_format: OutputFormat, ledger: &Ledger) -> Result<()> {
    if output_format == OutputFormat::Json {
        let items: Vec<_> = ledger
            .lots
            .iter()
            .map(|lot| {
                serde_json::json!({
                    "lot": lot,
                    "stats": lot_stats(lot),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&items)?);
        return Ok(());
    }

    if ledger.lots.is_empty() {
        println!("No lots recorded. Create one with: jubgoong lot new");
        return Ok(());
    }

    println!(
        "{:<4} {:<16} {:>10} {:>8} {:>12} {:>12} {:>14}",
        "#", "Name", "Transports", "Baskets", "Weight", "Shrimp", "Value"
    );
    println!("{}", "-".repeat(80));
    for (i, lot) in ledger.lots.iter().enumerate() {
        let stats = lot_stats(lot);
        println!(
            "{:<4} {:<16} {:>10} {:>8} {:>12} {:>12} {:>14}",
            i + 1,
            lot.name,
            stats.transport_count,
            stats.total_baskets,
            format_weight(stats.total_weight),
            format_weight(stats.total_shrimp_weight),
            format_currency(stats.total_value)
        );
    }

    Ok(())
}

pub fn output_lot(output_format: OutputFormat, lot: &Lot) -> Result<()> {
    let stats = lot_stats(lot);

    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(&serde_json::json!({
            "lot": lot,
            "stats": stats,
            "transports": lot
                .transports
                .iter()
                .map(transport_stats)
                .collect::<Vec<_>>(),
        }))?;
        println!("{}", content);
        return Ok(());
    }

    println!("\n{}", lot.name);
    println!("{}", "=".repeat(lot.name.chars().count().max(20)));
    println!("Id:            {}", lot.id);
    println!("Created:       {}", format_date(&lot.created_at));
    println!("Default tare:  {}", format_weight(lot.default_basket_weight));
    println!();
    println!("Transports:    {}", stats.transport_count);
    println!("Baskets:       {}", stats.total_baskets);
    println!("Total weight:  {}", format_weight(stats.total_weight));
    println!("Shrimp weight: {}", format_weight(stats.total_shrimp_weight));
    println!("Total value:   {}", format_currency(stats.total_value));

    if !lot.transports.is_empty() {
        println!();
        println!(
            "{:<4} {:<16} {:>8} {:>7} {:>12} {:>12} {:>14}",
            "#", "Name", "Baskets", "Remain", "Weight", "Shrimp", "Final"
        );
        println!("{}", "-".repeat(78));
        for (i, transport) in lot.transports.iter().enumerate() {
            let t_stats = transport_stats(transport);
            println!(
                "{:<4} {:<16} {:>8} {:>7} {:>12} {:>12} {:>14}",
                i + 1,
                transport.name,
                t_stats.basket_count,
                t_stats.remain_count,
                format_weight(t_stats.total_weight),
                format_weight(t_stats.shrimp_weight),
                price_or_dash(transport, t_stats.final_price)
            );
        }
    }

    Ok(())
}

pub fn output_transport(output_format: OutputFormat, transport: &Transport) -> Result<()> {
    let stats = transport_stats(transport);

    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(&serde_json::json!({
            "transport": transport,
            "stats": stats,
        }))?;
        println!("{}", content);
        return Ok(());
    }

    println!("\n{}", transport.name);
    println!("{}", "=".repeat(transport.name.chars().count().max(20)));
    println!("Id:             {}", transport.id);
    println!("Tare:           {}", format_weight(transport.basket_weight));
    println!("Quick add:      {}", format_weight(transport.quick_add_weight));
    println!(
        "Auto decimal:   {}",
        if transport.auto_decimal_mode { "on" } else { "off" }
    );
    if transport.is_priced() {
        println!("Price/kg:       {}", format_currency(transport.price_per_kg));
        println!("Deduction:      {:.1}%", transport.deduction_percentage);
    } else {
        println!("Price/kg:       — (not set)");
    }
    println!();
    println!("Baskets:        {}", stats.basket_count);
    println!("Remain entries: {}", stats.remain_count);
    println!("Total weight:   {}", format_weight(stats.total_weight));
    println!("Shrimp weight:  {}", format_weight(stats.shrimp_weight));
    println!("Base price:     {}", price_or_dash(transport, stats.base_price));
    println!("Deduction:      {}", price_or_dash(transport, stats.deduction));
    println!("Final price:    {}", price_or_dash(transport, stats.final_price));

    if !transport.baskets.is_empty() {
        println!("\nBaskets:");
        for (i, entry) in transport.baskets.iter().enumerate() {
            println!(
                "  {:>3}. {:>10}  {}  [{}]",
                i + 1,
                format_weight(entry.weight),
                format_date(&entry.timestamp),
                &entry.id[..8.min(entry.id.len())]
            );
        }
    }

    if !transport.remain_shrimp.is_empty() {
        println!("\nRemain (ชั่งเศษ, pure shrimp):");
        for (i, entry) in transport.remain_shrimp.iter().enumerate() {
            println!(
                "  {:>3}. {:>10}  {}  [{}]",
                i + 1,
                format_weight(entry.weight),
                format_date(&entry.timestamp),
                &entry.id[..8.min(entry.id.len())]
            );
        }
    }

    Ok(())
}
