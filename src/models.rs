use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Flat,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Flat => "flat",
        }
    }
}

/// A KPI as stored for a period. `direction` is declared by the data and is
/// not derived from `change`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiEntry {
    pub value: f64,
    pub change: f64,
    pub direction: Direction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev_value: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedValue {
    pub name: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyScores {
    pub general_knowledge: f64,
    pub leaders_knowledge: f64,
    pub client_value: f64,
    pub internal_value: f64,
    pub total_responses: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisitData {
    pub monthly_visits: Vec<NamedValue>,
    pub page_views_by_section: Vec<NamedValue>,
    pub visit_growth: f64,
    pub total_visits: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PracticeInteraction {
    pub name: String,
    pub consulting: f64,
    pub others: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionData {
    pub practice_interactions: Vec<PracticeInteraction>,
    pub comments_feedback: Vec<NamedValue>,
    pub positive_experiences: f64,
    pub total_interactions: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventParticipation {
    pub name: String,
    pub attended: f64,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventData {
    pub participation_by_event: Vec<EventParticipation>,
    pub total_events: u32,
    pub attendance_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceTrendPoint {
    pub name: String,
    pub views: f64,
    pub downloads: f64,
    pub copies: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceData {
    pub resource_usage: Vec<NamedValue>,
    pub resource_usage_trend: Vec<ResourceTrendPoint>,
    pub usability_score: f64,
    pub most_used_resource: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodRecord {
    pub id: String,
    pub label: String,
    pub understanding: KpiEntry,
    pub engagement: KpiEntry,
    pub usability: KpiEntry,
    pub surveys: SurveyScores,
    pub visit_data: VisitData,
    pub interaction_data: InteractionData,
    pub events_data: EventData,
    pub resources_data: ResourceData,
}

impl PeriodRecord {
    pub fn kpis(&self) -> [(&'static str, &KpiEntry); 3] {
        [
            ("understanding", &self.understanding),
            ("engagement", &self.engagement),
            ("usability", &self.usability),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodOption {
    pub id: String,
    pub label: String,
    /// Selector entries with no backing record, such as the custom range slot.
    #[serde(default)]
    pub placeholder: bool,
}
