//! Text shown by rendering collaborators, kept here so every consumer formats
//! values the same way.

use analytics::{KpiDatum, KpiUnit};
use chrono::NaiveDateTime;
use core_types::format_currency;
use rust_decimal::Decimal;

/// The headline value of a KPI with its unit: `$98K`, `94.1%`, `4.2 mo`, `87 pts`.
pub fn kpi_value_text(datum: &KpiDatum) -> String {
    match datum.unit {
        KpiUnit::Dollars => format_currency(datum.value),
        KpiUnit::Percent => format!("{}%", datum.value),
        KpiUnit::Months => format!("{} mo", datum.value),
        KpiUnit::Points => format!("{} pts", datum.value),
    }
}

/// Arrow plus the magnitude of the change, e.g. `↑ 2.3%`.
pub fn trend_text(datum: &KpiDatum) -> String {
    match datum.change {
        Some(change) => format!("{} {:.1}%", datum.direction.arrow(), change.abs()),
        None => format!("{} n/a", datum.direction.arrow()),
    }
}

/// Profit of a custom entry with an explicit sign: `+$45K`, `-$5K`.
pub fn signed_profit_text(profit: Decimal) -> String {
    if profit.is_sign_negative() && !profit.is_zero() {
        format!("-{}", format_currency(profit.abs()))
    } else {
        format!("+{}", format_currency(profit))
    }
}

/// `Last updated: Oct 18, 2026 · 3:05 PM`
pub fn last_updated_text(at: NaiveDateTime) -> String {
    format!("Last updated: {}", at.format("%b %-d, %Y · %-I:%M %p"))
}
