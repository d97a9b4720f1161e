use serde::Serialize;

use crate::models::{NamedValue, PeriodRecord};

pub const PALETTE: [&str; 4] = ["#4F46E5", "#EF4444", "#6366F1", "#10B981"];

pub fn palette_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Radar,
    Line,
    Bar,
    Pie,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Point {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub name: String,
    pub color: &'static str,
    pub points: Vec<Point>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Segment {
    pub label: String,
    pub value: f64,
    pub share: u32,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartDataset {
    pub key: &'static str,
    pub title: &'static str,
    pub source: &'static str,
    pub kind: ChartKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub series: Vec<Series>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub segments: Vec<Segment>,
}

impl ChartDataset {
    fn new(key: &'static str, title: &'static str, source: &'static str, kind: ChartKind) -> Self {
        Self {
            key,
            title,
            source,
            kind,
            max: None,
            series: Vec::new(),
            segments: Vec::new(),
        }
    }

    fn with_series(mut self, series: Vec<(String, Vec<Point>)>) -> Self {
        self.series = series
            .into_iter()
            .enumerate()
            .map(|(index, (name, points))| Series {
                name,
                color: palette_color(index),
                points,
            })
            .collect();
        self
    }
}

/// Projects one numeric column out of a labelled sequence, keeping its order.
pub fn project<T>(
    rows: &[T],
    label: impl Fn(&T) -> &str,
    value: impl Fn(&T) -> f64,
) -> Vec<Point> {
    rows.iter()
        .map(|row| Point {
            label: label(row).to_string(),
            value: value(row),
        })
        .collect()
}

pub fn named_points(values: &[NamedValue]) -> Vec<Point> {
    project(values, |v| v.name.as_str(), |v| v.value)
}

/// Negative values count as zero when computing shares.
pub fn segments(values: &[NamedValue]) -> Vec<Segment> {
    let total: f64 = values.iter().map(|v| v.value.max(0.0)).sum();

    values
        .iter()
        .enumerate()
        .map(|(index, v)| Segment {
            label: v.name.clone(),
            value: v.value,
            share: if total > 0.0 {
                (v.value.max(0.0) / total * 100.0).round() as u32
            } else {
                0
            },
            color: palette_color(index),
        })
        .collect()
}

pub fn knowledge_radar(record: &PeriodRecord) -> ChartDataset {
    let surveys = &record.surveys;
    let axes = [
        ("Conocimiento General", surveys.general_knowledge),
        ("Conocimiento Líderes", surveys.leaders_knowledge),
        ("Valor para Clientes", surveys.client_value),
        ("Valor para FAS", surveys.internal_value),
    ];
    let points = axes
        .iter()
        .map(|(label, value)| Point {
            label: label.to_string(),
            value: *value,
        })
        .collect();

    let mut chart = ChartDataset::new(
        "knowledge",
        "Conocimiento de la Práctica",
        "Consulting Survey",
        ChartKind::Radar,
    )
    .with_series(vec![("Nivel de Conocimiento".to_string(), points)]);
    chart.max = Some(100.0);
    chart
}

pub fn monthly_visits(record: &PeriodRecord) -> ChartDataset {
    ChartDataset::new("visits", "Visitas al Site", "Web Analytics", ChartKind::Line).with_series(
        vec![(
            "Visitas".to_string(),
            named_points(&record.visit_data.monthly_visits),
        )],
    )
}

pub fn page_views(record: &PeriodRecord) -> ChartDataset {
    let mut chart = ChartDataset::new(
        "page_views",
        "Vistas por Sección",
        "Web Analytics",
        ChartKind::Pie,
    );
    chart.segments = segments(&record.visit_data.page_views_by_section);
    chart
}

pub fn practice_interactions(record: &PeriodRecord) -> ChartDataset {
    let rows = &record.interaction_data.practice_interactions;

    ChartDataset::new(
        "interactions",
        "Interacción con Prácticas",
        "Consulting Survey",
        ChartKind::Line,
    )
    .with_series(vec![
        (
            "Con Consulting".to_string(),
            project(rows, |r| r.name.as_str(), |r| r.consulting),
        ),
        (
            "Con Otras Prácticas".to_string(),
            project(rows, |r| r.name.as_str(), |r| r.others),
        ),
    ])
}

pub fn event_participation(record: &PeriodRecord) -> ChartDataset {
    let rows = &record.events_data.participation_by_event;

    ChartDataset::new(
        "events",
        "Participación en Eventos",
        "Google Cloud",
        ChartKind::Bar,
    )
    .with_series(vec![
        (
            "Asistentes".to_string(),
            project(rows, |r| r.name.as_str(), |r| r.attended),
        ),
        ("Capacidad".to_string(), project(rows, |r| r.name.as_str(), |r| r.total)),
    ])
}

pub fn comments_feedback(record: &PeriodRecord) -> ChartDataset {
    ChartDataset::new(
        "comments",
        "Comentarios y Feedback",
        "Consulting Survey",
        ChartKind::Bar,
    )
    .with_series(vec![(
        "Comentarios".to_string(),
        named_points(&record.interaction_data.comments_feedback),
    )])
}

pub fn resource_usage(record: &PeriodRecord) -> ChartDataset {
    let mut chart = ChartDataset::new(
        "resources",
        "Uso de Recursos",
        "Consulting Survey",
        ChartKind::Pie,
    );
    chart.segments = segments(&record.resources_data.resource_usage);
    chart
}

pub fn resource_trend(record: &PeriodRecord) -> ChartDataset {
    let rows = &record.resources_data.resource_usage_trend;

    ChartDataset::new(
        "resource_trend",
        "Tendencia de Uso de Recursos",
        "Web Analytics & Google Cloud",
        ChartKind::Line,
    )
    .with_series(vec![
        ("Vistas".to_string(), project(rows, |r| r.name.as_str(), |r| r.views)),
        (
            "Descargas".to_string(),
            project(rows, |r| r.name.as_str(), |r| r.downloads),
        ),
        ("Copias".to_string(), project(rows, |r| r.name.as_str(), |r| r.copies)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Dataset;

    fn q2() -> PeriodRecord {
        Dataset::builtin().resolve("q2-2025").unwrap().clone()
    }

    #[test]
    fn palette_wraps_by_index() {
        for index in 0..12 {
            assert_eq!(palette_color(index), PALETTE[index % 4]);
        }
        assert_eq!(palette_color(4), "#4F46E5");
        assert_eq!(palette_color(7), "#10B981");
    }

    #[test]
    fn monthly_visits_pass_through_in_order() {
        let record = q2();
        let chart = monthly_visits(&record);
        let points = &chart.series[0].points;

        assert_eq!(points.len(), 6);
        assert_eq!(points[0], Point { label: "Ene".to_string(), value: 320.0 });
        assert_eq!(points[5], Point { label: "Jun".to_string(), value: 590.0 });
        let labels: Vec<&str> = points.iter().map(|p| p.label.as_str()).collect();
        let source: Vec<&str> = record
            .visit_data
            .monthly_visits
            .iter()
            .map(|v| v.name.as_str())
            .collect();
        assert_eq!(labels, source);
    }

    #[test]
    fn unsorted_values_are_not_reordered() {
        let record = q2();
        let values: Vec<f64> = monthly_visits(&record).series[0]
            .points
            .iter()
            .map(|p| p.value)
            .collect();
        assert_eq!(values, vec![320.0, 450.0, 410.0, 540.0, 610.0, 590.0]);
    }

    #[test]
    fn trend_series_get_positional_colors() {
        let chart = resource_trend(&q2());
        let colors: Vec<(&str, &str)> = chart
            .series
            .iter()
            .map(|s| (s.name.as_str(), s.color))
            .collect();
        assert_eq!(
            colors,
            vec![
                ("Vistas", "#4F46E5"),
                ("Descargas", "#EF4444"),
                ("Copias", "#6366F1"),
            ]
        );
        assert!(chart.series.iter().all(|s| s.points.len() == 6));
        assert_eq!(chart.series[2].points[5].value, 87.0);
    }

    #[test]
    fn pie_segments_carry_share_and_color() {
        let chart = resource_usage(&q2());
        let shares: Vec<(&str, u32, &str)> = chart
            .segments
            .iter()
            .map(|s| (s.label.as_str(), s.share, s.color))
            .collect();
        assert_eq!(
            shares,
            vec![
                ("Toolkit", 45, "#4F46E5"),
                ("Plantillas", 25, "#EF4444"),
                ("Guías", 20, "#6366F1"),
                ("Artículos", 10, "#10B981"),
            ]
        );
        assert!(chart.series.is_empty());
    }

    #[test]
    fn empty_pie_has_zero_shares() {
        assert!(segments(&[]).is_empty());
        let zero = vec![NamedValue { name: "Toolkit".to_string(), value: 0.0 }];
        assert_eq!(segments(&zero)[0].share, 0);
    }

    #[test]
    fn negative_values_do_not_inflate_other_shares() {
        let values = vec![
            NamedValue { name: "Toolkit".to_string(), value: 60.0 },
            NamedValue { name: "Guías".to_string(), value: -20.0 },
            NamedValue { name: "Plantillas".to_string(), value: 40.0 },
        ];
        let shares: Vec<u32> = segments(&values).iter().map(|s| s.share).collect();
        assert_eq!(shares, vec![60, 0, 40]);
        assert_eq!(segments(&values)[1].value, -20.0);
    }

    #[test]
    fn page_views_keep_section_order_and_colors() {
        let chart = page_views(&q2());
        assert_eq!(chart.kind, ChartKind::Pie);
        let segments: Vec<(&str, f64, &str)> = chart
            .segments
            .iter()
            .map(|s| (s.label.as_str(), s.value, s.color))
            .collect();
        assert_eq!(
            segments,
            vec![
                ("Recursos", 420.0, "#4F46E5"),
                ("Soluciones", 280.0, "#EF4444"),
                ("Equipo", 190.0, "#6366F1"),
                ("Eventos", 110.0, "#10B981"),
            ]
        );
        assert_eq!(chart.segments[0].share, 42);
    }

    #[test]
    fn comments_feedback_is_a_single_bar_series_in_source_order() {
        let chart = comments_feedback(&q2());
        assert_eq!(chart.kind, ChartKind::Bar);
        assert_eq!(chart.series.len(), 1);
        assert_eq!(chart.series[0].name, "Comentarios");
        assert_eq!(chart.series[0].color, palette_color(0));

        let points: Vec<(&str, f64)> = chart.series[0]
            .points
            .iter()
            .map(|p| (p.label.as_str(), p.value))
            .collect();
        assert_eq!(
            points,
            vec![("Recursos", 28.0), ("Workshops", 42.0), ("Artículos", 15.0), ("Tools", 35.0)]
        );
    }

    #[test]
    fn radar_uses_survey_scores_on_a_hundred_scale() {
        let chart = knowledge_radar(&q2());
        assert_eq!(chart.max, Some(100.0));
        let values: Vec<f64> = chart.series[0].points.iter().map(|p| p.value).collect();
        assert_eq!(values, vec![78.0, 65.0, 85.0, 72.0]);
    }

    #[test]
    fn event_bars_pair_attendance_with_capacity() {
        let chart = event_participation(&q2());
        assert_eq!(chart.series.len(), 2);
        assert_eq!(chart.series[0].points[4].label, "Sesión Q&A");
        assert_eq!(chart.series[0].points[4].value, 12.0);
        assert_eq!(chart.series[1].points[4].value, 15.0);
    }
}
