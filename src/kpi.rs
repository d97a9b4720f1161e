use serde::Serialize;

use crate::models::{Direction, KpiEntry, PeriodRecord};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KpiCard {
    pub key: &'static str,
    pub title: &'static str,
    pub value_text: String,
    pub indicator: &'static str,
    pub direction: Direction,
    pub magnitude: f64,
    pub delta_text: String,
}

pub fn kpi_title(key: &str) -> &'static str {
    match key {
        "understanding" => "Nivel de Entendimiento",
        "engagement" => "Nivel de Engagement",
        "usability" => "Nivel de Usabilidad",
        _ => "Indicador",
    }
}

pub fn indicator(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => "▲",
        Direction::Down => "▼",
        Direction::Flat => "▶",
    }
}

pub fn format_percent(value: f64) -> String {
    format!("{}%", format_number(value))
}

/// Integers print without a fractional part, anything else with one decimal.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

pub fn build_card(key: &'static str, entry: &KpiEntry) -> KpiCard {
    let magnitude = entry.change.abs();

    KpiCard {
        key,
        title: kpi_title(key),
        value_text: format_percent(entry.value),
        indicator: indicator(entry.direction),
        direction: entry.direction,
        magnitude,
        delta_text: format!("{} vs período anterior", format_percent(magnitude)),
    }
}

pub fn build_cards(record: &PeriodRecord) -> Vec<KpiCard> {
    record
        .kpis()
        .into_iter()
        .map(|(key, entry)| build_card(key, entry))
        .collect()
}
