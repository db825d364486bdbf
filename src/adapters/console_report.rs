//! Plain-text console summary and group tables.

use crate::domain::aggregate::{AggregateStats, GroupedStats};
use std::fmt::Write;

pub fn format_overall(stats: &AggregateStats) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n===== OVERALL SUMMARY =====");
    let _ = writeln!(out, "Tournaments:       {}", stats.total_tournaments);
    let _ = writeln!(out, "Total Buy-In:      {:.2}", stats.total_buyin);
    let _ = writeln!(out, "Total Prize:       {:.2}", stats.total_prize);
    let _ = writeln!(out, "Profit:            {:.2}", stats.total_profit);
    let _ = writeln!(out, "ROI (%):           {:.2}", stats.roi_percent);
    let _ = writeln!(out, "ITM (%):           {:.2}", stats.itm_percent);
    let _ = writeln!(out, "ABI:               {:.2}", stats.abi);
    out
}

pub fn format_group_table(title: &str, groups: &GroupedStats) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n===== {title} =====");
    let _ = writeln!(
        out,
        "{:<25} {:>5} {:>10} {:>10} {:>10} {:>8} {:>8}",
        "Group", "Count", "BuyIn", "Prize", "Profit", "ROI%", "ABI"
    );
    let _ = writeln!(out, "{}", "-".repeat(80));

    for (label, g) in groups.iter() {
        let _ = writeln!(
            out,
            "{:<25} {:>5} {:>10.2} {:>10.2} {:>10.2} {:>8.2} {:>8.2}",
            label, g.count, g.buyin, g.prize, g.profit, g.roi_percent, g.abi
        );
    }
    out
}
