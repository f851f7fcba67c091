//! Text report generation for a lot

use chrono::Utc;

use jubgoong_domain::model::{Lot, Transport};
use jubgoong_domain::service::format::{format_currency, format_date, format_weight};
use jubgoong_domain::service::{lot_stats, transport_stats};

/// Render a lot as a human-readable text report: summary statistics
/// followed by one section per transport with its weighing entries.
pub fn generate_lot_report(lot: &Lot) -> String {
    let stats = lot_stats(lot);

    let mut report = String::new();
    report.push_str("==================================================\n");
    report.push_str("          รายงานการจับ / Catch Report             \n");
    report.push_str("==================================================\n\n");
    report.push_str(&format!("  {}\n", lot.name));
    report.push_str(&format!("  สร้างเมื่อ / Created:   {}\n", format_date(&lot.created_at)));
    report.push_str(&format!("  พิมพ์เมื่อ / Generated: {}\n", format_date(&Utc::now())));
    report.push_str(&format!(
        "  น้ำหนักตะกร้า / Default tare: {}\n",
        format_weight(lot.default_basket_weight)
    ));
    report.push('\n');

    report.push_str("【สรุป / Summary】\n");
    report.push_str(&format!("  รอบขนส่ง / Transports:      {}\n", stats.transport_count));
    report.push_str(&format!("  ตะกร้า / Baskets:           {}\n", stats.total_baskets));
    report.push_str(&format!(
        "  น้ำหนักรวม / Total weight:  {}\n",
        format_weight(stats.total_weight)
    ));
    report.push_str(&format!(
        "  น้ำหนักกุ้ง / Shrimp weight: {}\n",
        format_weight(stats.total_shrimp_weight)
    ));
    report.push_str(&format!(
        "  มูลค่ารวม / Total value:    {}\n",
        format_currency(stats.total_value)
    ));
    report.push('\n');

    if lot.transports.is_empty() {
        report.push_str("【ไม่มีรอบขนส่ง / No Transports】\n\n");
    } else {
        report.push_str("【รอบขนส่ง / Transports】\n");
        for (index, transport) in lot.transports.iter().enumerate() {
            report.push_str(&transport_section(index + 1, transport));
        }
    }

    report.push_str("==================================================\n");
    report
}

fn transport_section(number: usize, transport: &Transport) -> String {
    let stats = transport_stats(transport);

    let mut section = String::new();
    section.push_str("-".repeat(50).as_str());
    section.push('\n');
    section.push_str(&format!("{}. {}\n", number, transport.name));
    section.push_str(&format!(
        "   ตะกร้า / Tare: {}\n",
        format_weight(transport.basket_weight)
    ));
    section.push_str(&format!(
        "   Baskets: {} | Total: {} | Shrimp: {}\n",
        stats.basket_count,
        format_weight(stats.total_weight),
        format_weight(stats.shrimp_weight)
    ));

    if stats.remain_count > 0 {
        section.push_str(&format!(
            "   ชั่งเศษ / Remain: {} entries | {} (pure shrimp)\n",
            stats.remain_count,
            format_weight(stats.remain_weight)
        ));
    }

    if transport.is_priced() {
        section.push_str(&format!(
            "   Price/kg: {} | Deduction: {:.1}%\n",
            format_currency(transport.price_per_kg),
            transport.deduction_percentage
        ));
        section.push_str(&format!(
            "   Base: {} | Deduction: {} | Final: {}\n",
            format_currency(stats.base_price),
            format_currency(stats.deduction),
            format_currency(stats.final_price)
        ));
    } else {
        section.push_str("   ยังไม่ตั้งราคา / No price set\n");
    }

    if !transport.baskets.is_empty() {
        section.push_str("   ตะกร้า / Baskets:\n");
        for (i, entry) in transport.baskets.iter().enumerate() {
            section.push_str(&format!(
                "     {:>3}. {:>10}  {}\n",
                i + 1,
                format_weight(entry.weight),
                format_date(&entry.timestamp)
            ));
        }
    }

    if !transport.remain_shrimp.is_empty() {
        section.push_str("   ชั่งเศษ / Remain entries:\n");
        for (i, entry) in transport.remain_shrimp.iter().enumerate() {
            section.push_str(&format!(
                "     {:>3}. {:>10}  {}\n",
                i + 1,
                format_weight(entry.weight),
                format_date(&entry.timestamp)
            ));
        }
    }

    section.push('\n');
    section
}
