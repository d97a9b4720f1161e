use crate::models::{
    Direction, EventData, EventParticipation, InteractionData, KpiEntry, NamedValue,
    PeriodOption, PeriodRecord, PracticeInteraction, ResourceData, ResourceTrendPoint,
    SurveyScores, VisitData,
};

pub const CUSTOM_PERIOD_ID: &str = "custom";

struct QuarterSeed {
    id: &'static str,
    label: &'static str,
    kpis: [(f64, f64, Direction, f64); 3],
    surveys: (f64, f64, f64, f64, u32),
    monthly_visits: &'static [(&'static str, f64)],
    page_views: &'static [(&'static str, f64)],
    visit_growth: f64,
    total_visits: u32,
    interactions: &'static [(&'static str, f64, f64)],
    comments: &'static [(&'static str, f64)],
    positive_experiences: f64,
    total_interactions: u32,
    events: &'static [(&'static str, f64, f64)],
    attendance_rate: f64,
    resource_usage: &'static [(&'static str, f64)],
    resource_trend: &'static [(&'static str, f64, f64, f64)],
    usability_score: f64,
    most_used_resource: &'static str,
}

const PAGE_SECTIONS: [&str; 4] = ["Recursos", "Soluciones", "Equipo", "Eventos"];
const FEEDBACK_CHANNELS: [&str; 4] = ["Recursos", "Workshops", "Artículos", "Tools"];

pub fn periods() -> Vec<PeriodOption> {
    let mut options: Vec<PeriodOption> = QUARTERS
        .iter()
        .map(|seed| PeriodOption {
            id: seed.id.to_string(),
            label: seed.label.to_string(),
            placeholder: false,
        })
        .collect();

    options.push(PeriodOption {
        id: CUSTOM_PERIOD_ID.to_string(),
        label: "Personalizado".to_string(),
        placeholder: true,
    });
    options
}

pub fn records() -> Vec<PeriodRecord> {
    QUARTERS.iter().map(build_record).collect()
}

fn named(points: &[(&str, f64)]) -> Vec<NamedValue> {
    points
        .iter()
        .map(|(name, value)| NamedValue {
            name: name.to_string(),
            value: *value,
        })
        .collect()
}

fn build_record(seed: &QuarterSeed) -> PeriodRecord {
    let [understanding, engagement, usability] = seed.kpis.map(|(value, change, direction, prev)| {
        KpiEntry {
            value,
            change,
            direction,
            prev_value: Some(prev),
        }
    });
    let (general_knowledge, leaders_knowledge, client_value, internal_value, total_responses) =
        seed.surveys;

    PeriodRecord {
        id: seed.id.to_string(),
        label: seed.label.to_string(),
        understanding,
        engagement,
        usability,
        surveys: SurveyScores {
            general_knowledge,
            leaders_knowledge,
            client_value,
            internal_value,
            total_responses,
        },
        visit_data: VisitData {
            monthly_visits: named(seed.monthly_visits),
            page_views_by_section: named(seed.page_views),
            visit_growth: seed.visit_growth,
            total_visits: seed.total_visits,
        },
        interaction_data: InteractionData {
            practice_interactions: seed
                .interactions
                .iter()
                .map(|(name, consulting, others)| PracticeInteraction {
                    name: name.to_string(),
                    consulting: *consulting,
                    others: *others,
                })
                .collect(),
            comments_feedback: named(seed.comments),
            positive_experiences: seed.positive_experiences,
            total_interactions: seed.total_interactions,
        },
        events_data: EventData {
            participation_by_event: seed
                .events
                .iter()
                .map(|(name, attended, total)| EventParticipation {
                    name: name.to_string(),
                    attended: *attended,
                    total: *total,
                })
                .collect(),
            total_events: seed.events.len() as u32,
            attendance_rate: seed.attendance_rate,
        },
        resources_data: ResourceData {
            resource_usage: named(seed.resource_usage),
            resource_usage_trend: seed
                .resource_trend
                .iter()
                .map(|(name, views, downloads, copies)| ResourceTrendPoint {
                    name: name.to_string(),
                    views: *views,
                    downloads: *downloads,
                    copies: *copies,
                })
                .collect(),
            usability_score: seed.usability_score,
            most_used_resource: seed.most_used_resource.to_string(),
        },
    }
}

const QUARTERS: [QuarterSeed; 4] = [
    QuarterSeed {
        id: "q2-2025",
        label: "Q2 2025",
        kpis: [
            (78.0, 12.0, Direction::Up, 66.0),
            (63.0, 5.0, Direction::Up, 58.0),
            (82.0, 8.0, Direction::Up, 74.0),
        ],
        surveys: (78.0, 65.0, 85.0, 72.0, 48),
        monthly_visits: &[
            ("Ene", 320.0),
            ("Feb", 450.0),
            ("Mar", 410.0),
            ("Abr", 540.0),
            ("May", 610.0),
            ("Jun", 590.0),
        ],
        page_views: &[
            (PAGE_SECTIONS[0], 420.0),
            (PAGE_SECTIONS[1], 280.0),
            (PAGE_SECTIONS[2], 190.0),
            (PAGE_SECTIONS[3], 110.0),
        ],
        visit_growth: 22.0,
        total_visits: 2920,
        interactions: &[
            ("Ene", 45.0, 30.0),
            ("Feb", 52.0, 35.0),
            ("Mar", 49.0, 38.0),
            ("Abr", 60.0, 40.0),
            ("May", 70.0, 45.0),
            ("Jun", 68.0, 50.0),
        ],
        comments: &[
            (FEEDBACK_CHANNELS[0], 28.0),
            (FEEDBACK_CHANNELS[1], 42.0),
            (FEEDBACK_CHANNELS[2], 15.0),
            (FEEDBACK_CHANNELS[3], 35.0),
        ],
        positive_experiences: 86.0,
        total_interactions: 320,
        events: &[
            ("Workshop Design", 24.0, 30.0),
            ("Case Review", 18.0, 25.0),
            ("Tech Talk", 15.0, 20.0),
            ("Panel CX", 22.0, 30.0),
            ("Sesión Q&A", 12.0, 15.0),
        ],
        attendance_rate: 75.0,
        resource_usage: &[
            ("Toolkit", 45.0),
            ("Plantillas", 25.0),
            ("Guías", 20.0),
            ("Artículos", 10.0),
        ],
        resource_trend: &[
            ("Ene", 430.0, 210.0, 52.0),
            ("Feb", 510.0, 230.0, 60.0),
            ("Mar", 490.0, 250.0, 65.0),
            ("Abr", 560.0, 270.0, 70.0),
            ("May", 620.0, 310.0, 82.0),
            ("Jun", 650.0, 340.0, 87.0),
        ],
        usability_score: 82.0,
        most_used_resource: "Toolkit CX Assessment",
    },
    QuarterSeed {
        id: "q1-2025",
        label: "Q1 2025",
        kpis: [
            (66.0, 8.0, Direction::Up, 58.0),
            (58.0, 3.0, Direction::Up, 55.0),
            (74.0, 6.0, Direction::Up, 68.0),
        ],
        surveys: (66.0, 55.0, 72.0, 64.0, 42),
        monthly_visits: &[
            ("Oct", 280.0),
            ("Nov", 310.0),
            ("Dic", 290.0),
            ("Ene", 320.0),
            ("Feb", 450.0),
            ("Mar", 410.0),
        ],
        page_views: &[
            (PAGE_SECTIONS[0], 380.0),
            (PAGE_SECTIONS[1], 240.0),
            (PAGE_SECTIONS[2], 170.0),
            (PAGE_SECTIONS[3], 90.0),
        ],
        visit_growth: 18.0,
        total_visits: 2060,
        interactions: &[
            ("Oct", 35.0, 28.0),
            ("Nov", 38.0, 29.0),
            ("Dic", 40.0, 30.0),
            ("Ene", 45.0, 30.0),
            ("Feb", 52.0, 35.0),
            ("Mar", 49.0, 38.0),
        ],
        comments: &[
            (FEEDBACK_CHANNELS[0], 22.0),
            (FEEDBACK_CHANNELS[1], 36.0),
            (FEEDBACK_CHANNELS[2], 12.0),
            (FEEDBACK_CHANNELS[3], 28.0),
        ],
        positive_experiences: 79.0,
        total_interactions: 260,
        events: &[
            ("Workshop CX", 20.0, 28.0),
            ("Case Study", 16.0, 22.0),
            ("UX Talks", 13.0, 18.0),
            ("Panel Digital", 18.0, 25.0),
        ],
        attendance_rate: 72.0,
        resource_usage: &[
            ("Toolkit", 42.0),
            ("Plantillas", 23.0),
            ("Guías", 22.0),
            ("Artículos", 13.0),
        ],
        resource_trend: &[
            ("Oct", 380.0, 190.0, 45.0),
            ("Nov", 410.0, 200.0, 50.0),
            ("Dic", 390.0, 195.0, 47.0),
            ("Ene", 430.0, 210.0, 52.0),
            ("Feb", 510.0, 230.0, 60.0),
            ("Mar", 490.0, 250.0, 65.0),
        ],
        usability_score: 74.0,
        most_used_resource: "Toolkit CX Assessment",
    },
    QuarterSeed {
        id: "q4-2024",
        label: "Q4 2024",
        kpis: [
            (58.0, 10.0, Direction::Up, 48.0),
            (55.0, 8.0, Direction::Up, 47.0),
            (68.0, 12.0, Direction::Up, 56.0),
        ],
        surveys: (58.0, 48.0, 65.0, 56.0, 38),
        monthly_visits: &[
            ("Jul", 210.0),
            ("Ago", 240.0),
            ("Sep", 260.0),
            ("Oct", 280.0),
            ("Nov", 310.0),
            ("Dic", 290.0),
        ],
        page_views: &[
            (PAGE_SECTIONS[0], 340.0),
            (PAGE_SECTIONS[1], 220.0),
            (PAGE_SECTIONS[2], 150.0),
            (PAGE_SECTIONS[3], 80.0),
        ],
        visit_growth: 15.0,
        total_visits: 1590,
        interactions: &[
            ("Jul", 25.0, 22.0),
            ("Ago", 28.0, 24.0),
            ("Sep", 32.0, 26.0),
            ("Oct", 35.0, 28.0),
            ("Nov", 38.0, 29.0),
            ("Dic", 40.0, 30.0),
        ],
        comments: &[
            (FEEDBACK_CHANNELS[0], 18.0),
            (FEEDBACK_CHANNELS[1], 30.0),
            (FEEDBACK_CHANNELS[2], 10.0),
            (FEEDBACK_CHANNELS[3], 22.0),
        ],
        positive_experiences: 72.0,
        total_interactions: 210,
        events: &[
            ("Workshop UX", 18.0, 25.0),
            ("Case Presentation", 14.0, 20.0),
            ("Digital Innovation", 12.0, 18.0),
            ("CX Roundtable", 16.0, 24.0),
        ],
        attendance_rate: 70.0,
        resource_usage: &[
            ("Toolkit", 38.0),
            ("Plantillas", 22.0),
            ("Guías", 24.0),
            ("Artículos", 16.0),
        ],
        resource_trend: &[
            ("Jul", 320.0, 160.0, 38.0),
            ("Ago", 340.0, 170.0, 40.0),
            ("Sep", 360.0, 180.0, 42.0),
            ("Oct", 380.0, 190.0, 45.0),
            ("Nov", 410.0, 200.0, 50.0),
            ("Dic", 390.0, 195.0, 47.0),
        ],
        usability_score: 68.0,
        most_used_resource: "Plantillas CX Journey",
    },
    QuarterSeed {
        id: "q3-2024",
        label: "Q3 2024",
        kpis: [
            (48.0, -2.0, Direction::Down, 50.0),
            (47.0, 4.0, Direction::Up, 43.0),
            (56.0, 2.0, Direction::Up, 54.0),
        ],
        surveys: (48.0, 40.0, 55.0, 46.0, 32),
        monthly_visits: &[
            ("Abr", 180.0),
            ("May", 190.0),
            ("Jun", 200.0),
            ("Jul", 210.0),
            ("Ago", 240.0),
            ("Sep", 260.0),
        ],
        page_views: &[
            (PAGE_SECTIONS[0], 310.0),
            (PAGE_SECTIONS[1], 200.0),
            (PAGE_SECTIONS[2], 130.0),
            (PAGE_SECTIONS[3], 70.0),
        ],
        visit_growth: 12.0,
        total_visits: 1280,
        interactions: &[
            ("Abr", 20.0, 18.0),
            ("May", 22.0, 19.0),
            ("Jun", 24.0, 20.0),
            ("Jul", 25.0, 22.0),
            ("Ago", 28.0, 24.0),
            ("Sep", 32.0, 26.0),
        ],
        comments: &[
            (FEEDBACK_CHANNELS[0], 14.0),
            (FEEDBACK_CHANNELS[1], 24.0),
            (FEEDBACK_CHANNELS[2], 8.0),
            (FEEDBACK_CHANNELS[3], 18.0),
        ],
        positive_experiences: 65.0,
        total_interactions: 170,
        events: &[
            ("Workshop Intro", 15.0, 22.0),
            ("Case Study Basics", 12.0, 18.0),
            ("UX Fundamentals", 10.0, 15.0),
        ],
        attendance_rate: 67.0,
        resource_usage: &[
            ("Toolkit", 35.0),
            ("Plantillas", 25.0),
            ("Guías", 20.0),
            ("Artículos", 20.0),
        ],
        resource_trend: &[
            ("Abr", 280.0, 140.0, 32.0),
            ("May", 290.0, 145.0, 34.0),
            ("Jun", 300.0, 150.0, 36.0),
            ("Jul", 320.0, 160.0, 38.0),
            ("Ago", 340.0, 170.0, 40.0),
            ("Sep", 360.0, 180.0, 42.0),
        ],
        usability_score: 56.0,
        most_used_resource: "Guías Metodológicas",
    },
];
