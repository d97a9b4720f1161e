use serde::Serialize;

use crate::charts::{self, ChartDataset};
use crate::data::Dataset;
use crate::kpi::{self, KpiCard};
use crate::models::PeriodRecord;

pub const DEFAULT_PERIOD: &str = "q2-2025";
pub const NO_DATA_MESSAGE: &str = "No hay datos disponibles para el período seleccionado";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TabPanel {
    pub key: &'static str,
    pub title: &'static str,
    pub charts: Vec<ChartDataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Highlights {
    pub total_visits: u32,
    pub visit_growth: f64,
    pub total_interactions: u32,
    pub positive_experiences: f64,
    pub total_events: u32,
    pub attendance_rate: f64,
    pub total_responses: u32,
    pub usability_score: f64,
    pub most_used_resource: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSnapshot {
    pub period_id: String,
    pub period_label: String,
    pub cards: Vec<KpiCard>,
    pub tabs: Vec<TabPanel>,
    pub highlights: Highlights,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ViewState {
    Ready(DashboardSnapshot),
    Unavailable { period_id: String, message: &'static str },
}

impl ViewState {
    pub fn snapshot(&self) -> Option<&DashboardSnapshot> {
        match self {
            ViewState::Ready(snapshot) => Some(snapshot),
            ViewState::Unavailable { .. } => None,
        }
    }
}

/// The dashboard for one selected period. The selection is the only state the
/// view owns, and `select` is the only way to change it.
#[derive(Debug)]
pub struct DashboardView<'a> {
    dataset: &'a Dataset,
    selected: String,
}

impl<'a> DashboardView<'a> {
    pub fn new(dataset: &'a Dataset) -> Self {
        Self::with_period(dataset, DEFAULT_PERIOD)
    }

    pub fn with_period(dataset: &'a Dataset, period_id: &str) -> Self {
        Self {
            dataset,
            selected: period_id.to_string(),
        }
    }

    pub fn selected(&self) -> &str {
        &self.selected
    }

    pub fn select(&mut self, period_id: &str) {
        if self.selected != period_id {
            tracing::debug!(from = %self.selected, to = period_id, "period selection changed");
            self.selected = period_id.to_string();
        }
    }

    pub fn record(&self) -> Option<&'a PeriodRecord> {
        self.dataset.resolve(&self.selected)
    }

    pub fn render(&self) -> ViewState {
        match self.record() {
            Some(record) => ViewState::Ready(build_snapshot(record)),
            None => ViewState::Unavailable {
                period_id: self.selected.clone(),
                message: NO_DATA_MESSAGE,
            },
        }
    }
}

pub fn build_tabs(record: &PeriodRecord) -> Vec<TabPanel> {
    vec![
        TabPanel {
            key: "understanding",
            title: "Entendimiento",
            charts: vec![
                charts::knowledge_radar(record),
                charts::monthly_visits(record),
                charts::page_views(record),
            ],
        },
        TabPanel {
            key: "engagement",
            title: "Engagement",
            charts: vec![
                charts::practice_interactions(record),
                charts::event_participation(record),
                charts::comments_feedback(record),
            ],
        },
        TabPanel {
            key: "usability",
            title: "Usabilidad",
            charts: vec![charts::resource_usage(record), charts::resource_trend(record)],
        },
    ]
}

pub fn build_snapshot(record: &PeriodRecord) -> DashboardSnapshot {
    DashboardSnapshot {
        period_id: record.id.clone(),
        period_label: record.label.clone(),
        cards: kpi::build_cards(record),
        tabs: build_tabs(record),
        highlights: Highlights {
            total_visits: record.visit_data.total_visits,
            visit_growth: record.visit_data.visit_growth,
            total_interactions: record.interaction_data.total_interactions,
            positive_experiences: record.interaction_data.positive_experiences,
            total_events: record.events_data.total_events,
            attendance_rate: record.events_data.attendance_rate,
            total_responses: record.surveys.total_responses,
            usability_score: record.resources_data.usability_score,
            most_used_resource: record.resources_data.most_used_resource.clone(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_latest_quarter() {
        let dataset = Dataset::builtin();
        let view = DashboardView::new(&dataset);
        assert_eq!(view.selected(), "q2-2025");
        let state = view.render();
        let snapshot = state.snapshot().expect("q2 renders");
        assert_eq!(snapshot.period_label, "Q2 2025");
        assert_eq!(snapshot.cards[0].value_text, "78%");
    }

    #[test]
    fn switching_period_rederives_everything() {
        let dataset = Dataset::builtin();
        let mut view = DashboardView::new(&dataset);
        let before = view.render();

        view.select("q1-2025");
        let after = view.render();
        let snapshot = after.snapshot().unwrap();

        assert_eq!(snapshot.period_id, "q1-2025");
        assert_eq!(snapshot.cards[0].value_text, "66%");
        assert_eq!(snapshot.cards[1].value_text, "58%");
        assert_eq!(snapshot.cards[2].value_text, "74%");
        assert_eq!(*snapshot, build_snapshot(dataset.resolve("q1-2025").unwrap()));
        assert_ne!(Some(snapshot), before.snapshot());

        let visits = &snapshot.tabs[0].charts[1].series[0].points;
        assert_eq!(visits[0].label, "Oct");
        assert_eq!(visits[5].value, 410.0);
        assert!(!visits.iter().any(|p| p.label == "Jun"));
        assert_eq!(snapshot.highlights.total_visits, 2060);
        assert_eq!(snapshot.highlights.usability_score, 74.0);
    }

    #[test]
    fn unknown_period_renders_fallback() {
        let dataset = Dataset::builtin();
        let mut view = DashboardView::new(&dataset);
        view.select("custom");

        assert_eq!(
            view.render(),
            ViewState::Unavailable {
                period_id: "custom".to_string(),
                message: NO_DATA_MESSAGE,
            }
        );

        view.select("q3-2024");
        assert!(view.render().snapshot().is_some());
    }

    #[test]
    fn tabs_hold_charts_in_fixed_order() {
        let dataset = Dataset::builtin();
        let snapshot = build_snapshot(dataset.resolve("q4-2024").unwrap());

        let layout: Vec<(&str, Vec<&str>)> = snapshot
            .tabs
            .iter()
            .map(|tab| (tab.key, tab.charts.iter().map(|c| c.key).collect()))
            .collect();
        assert_eq!(
            layout,
            vec![
                ("understanding", vec!["knowledge", "visits", "page_views"]),
                ("engagement", vec!["interactions", "events", "comments"]),
                ("usability", vec!["resources", "resource_trend"]),
            ]
        );
    }

    #[test]
    fn unavailable_state_serializes_with_status_tag() {
        let state = ViewState::Unavailable {
            period_id: "q9-1999".to_string(),
            message: NO_DATA_MESSAGE,
        };
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["status"], "unavailable");
        assert_eq!(json["period_id"], "q9-1999");
    }

    #[test]
    fn json_snapshot_carries_sections_feedback_and_usability_score() {
        let dataset = Dataset::builtin();
        let json = serde_json::to_string(&DashboardView::new(&dataset).render()).unwrap();
        assert!(json.contains("\"Soluciones\""));
        assert!(json.contains("\"Workshops\""));
        assert!(json.contains("\"usability_score\":82.0"));
    }
}
