use std::fmt::Write;

use chrono::{Datelike, NaiveDate};

use crate::charts::{ChartDataset, ChartKind};
use crate::kpi::{format_number, format_percent};
use crate::view::{DashboardSnapshot, ViewState};

pub const DASHBOARD_TITLE: &str = "DASHBOARD DE MONITOREO";
pub const DASHBOARD_SUBTITLE: &str = "Consulting Practice Metrics";
pub const FOOTER_BRAND: &str = "Findasense Consulting Dashboard";

const MONTHS_ES: [&str; 12] = [
    "Enero",
    "Febrero",
    "Marzo",
    "Abril",
    "Mayo",
    "Junio",
    "Julio",
    "Agosto",
    "Septiembre",
    "Octubre",
    "Noviembre",
    "Diciembre",
];

pub fn last_updated() -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(2025, 6, 20)
}

pub fn format_date_es(date: NaiveDate) -> String {
    format!(
        "{} de {}, {}",
        date.day(),
        MONTHS_ES[date.month0() as usize],
        date.year()
    )
}

fn footer() -> String {
    match last_updated() {
        Some(date) => format!("Última actualización: {} • {}", format_date_es(date), FOOTER_BRAND),
        None => FOOTER_BRAND.to_string(),
    }
}

fn write_chart_markdown(output: &mut String, chart: &ChartDataset) {
    let _ = writeln!(output, "### {}", chart.title);
    let _ = writeln!(output, "_Source: {}_", chart.source);
    let _ = writeln!(output);

    if chart.kind == ChartKind::Pie {
        let _ = writeln!(output, "| Segmento | Valor | % |");
        let _ = writeln!(output, "|---|---|---|");
        for segment in chart.segments.iter() {
            let _ = writeln!(
                output,
                "| {} | {} | {}% |",
                segment.label,
                format_number(segment.value),
                segment.share
            );
        }
        let _ = writeln!(output);
        return;
    }

    let Some(first) = chart.series.first() else {
        let _ = writeln!(output, "Sin datos.");
        let _ = writeln!(output);
        return;
    };

    let names: Vec<&str> = chart.series.iter().map(|s| s.name.as_str()).collect();
    let _ = writeln!(output, "| | {} |", names.join(" | "));
    let _ = writeln!(output, "|---|{}", "---|".repeat(names.len()));
    for (row, point) in first.points.iter().enumerate() {
        let values: Vec<String> = chart
            .series
            .iter()
            .map(|s| {
                s.points
                    .get(row)
                    .map(|p| format_number(p.value))
                    .unwrap_or_default()
            })
            .collect();
        let _ = writeln!(output, "| {} | {} |", point.label, values.join(" | "));
    }
    let _ = writeln!(output);
}

fn write_snapshot_markdown(output: &mut String, snapshot: &DashboardSnapshot) {
    let _ = writeln!(output, "## Indicadores");
    for card in snapshot.cards.iter() {
        let _ = writeln!(
            output,
            "- **{}**: {} ({} {})",
            card.title, card.value_text, card.indicator, card.delta_text
        );
    }

    let highlights = &snapshot.highlights;
    let _ = writeln!(output);
    let _ = writeln!(output, "## Resumen");
    let _ = writeln!(
        output,
        "- Visitas totales: {} (crecimiento {}%)",
        highlights.total_visits,
        format_number(highlights.visit_growth)
    );
    let _ = writeln!(
        output,
        "- Interacciones: {} ({}% experiencias positivas)",
        highlights.total_interactions,
        format_number(highlights.positive_experiences)
    );
    let _ = writeln!(
        output,
        "- Eventos: {} (asistencia {}%)",
        highlights.total_events,
        format_number(highlights.attendance_rate)
    );
    let _ = writeln!(output, "- Respuestas de encuesta: {}", highlights.total_responses);
    let _ = writeln!(
        output,
        "- Puntaje de usabilidad: {}%",
        format_number(highlights.usability_score)
    );
    let _ = writeln!(output, "- Recurso más usado: {}", highlights.most_used_resource);

    for tab in snapshot.tabs.iter() {
        let _ = writeln!(output);
        let _ = writeln!(output, "## {}", tab.title);
        let _ = writeln!(output);
        for chart in tab.charts.iter() {
            write_chart_markdown(output, chart);
        }
    }
}

pub fn build_report(state: &ViewState, generated_on: NaiveDate) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "# {DASHBOARD_TITLE}");
    let _ = writeln!(output, "{DASHBOARD_SUBTITLE}");
    let _ = writeln!(output);

    match state {
        ViewState::Ready(snapshot) => {
            let _ = writeln!(
                output,
                "Período {} (generado el {})",
                snapshot.period_label,
                format_date_es(generated_on)
            );
            let _ = writeln!(output);
            write_snapshot_markdown(&mut output, snapshot);
        }
        ViewState::Unavailable { message, .. } => {
            let _ = writeln!(output, "{message}");
            let _ = writeln!(output);
        }
    }

    let _ = writeln!(output, "---");
    let _ = writeln!(output, "{}", footer());
    output
}

fn bar(value: f64, scale: f64, width: usize) -> String {
    if scale <= 0.0 || value <= 0.0 {
        return String::new();
    }
    let filled = ((value / scale) * width as f64).round() as usize;
    "█".repeat(filled.min(width))
}

fn write_chart_text(output: &mut String, chart: &ChartDataset) {
    let _ = writeln!(output, "  {} ({})", chart.title, chart.source);

    if chart.kind == ChartKind::Pie {
        for segment in chart.segments.iter() {
            let _ = writeln!(
                output,
                "    {:<18} {:>3}% {}",
                segment.label,
                segment.share,
                bar(segment.share as f64, 100.0, 20)
            );
        }
        return;
    }

    let scale = chart.max.unwrap_or_else(|| {
        chart
            .series
            .iter()
            .flat_map(|s| s.points.iter().map(|p| p.value))
            .fold(0.0, f64::max)
    });

    for series in chart.series.iter() {
        let _ = writeln!(output, "    {}", series.name);
        for point in series.points.iter() {
            let _ = writeln!(
                output,
                "      {:<22} {:>6} {}",
                point.label,
                format_number(point.value),
                bar(point.value, scale, 24)
            );
        }
    }
}

pub fn render_text(state: &ViewState) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "{DASHBOARD_TITLE}");
    let _ = writeln!(output, "{DASHBOARD_SUBTITLE}");

    let snapshot = match state {
        ViewState::Ready(snapshot) => snapshot,
        ViewState::Unavailable { message, .. } => {
            let _ = writeln!(output);
            let _ = writeln!(output, "{message}");
            return output;
        }
    };

    let _ = writeln!(output, "Período: {}", snapshot.period_label);
    let _ = writeln!(output);
    for card in snapshot.cards.iter() {
        let _ = writeln!(
            output,
            "{:<24} {:>5}  {} {}",
            card.title, card.value_text, card.indicator, card.delta_text
        );
    }

    let _ = writeln!(
        output,
        "{:<24} {:>5}  {}",
        "Puntaje de Usabilidad",
        format_percent(snapshot.highlights.usability_score),
        bar(snapshot.highlights.usability_score, 100.0, 20)
    );

    for tab in snapshot.tabs.iter() {
        let _ = writeln!(output);
        let _ = writeln!(output, "[{}]", tab.title);
        for chart in tab.charts.iter() {
            write_chart_text(&mut output, chart);
        }
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "{}", footer());
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Dataset;
    use crate::view::DashboardView;

    fn generated_on() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 7, 1).unwrap()
    }

    #[test]
    fn formats_dates_in_spanish() {
        assert_eq!(format_date_es(last_updated().unwrap()), "20 de Junio, 2025");
        assert_eq!(format_date_es(generated_on()), "1 de Julio, 2025");
    }

    #[test]
    fn report_lists_cards_and_every_tab() {
        let dataset = Dataset::builtin();
        let report = build_report(&DashboardView::new(&dataset).render(), generated_on());

        assert!(report.starts_with("# DASHBOARD DE MONITOREO\n"));
        assert!(report.contains("Período Q2 2025 (generado el 1 de Julio, 2025)"));
        assert!(report.contains("- **Nivel de Entendimiento**: 78% (▲ 12% vs período anterior)"));
        assert!(report.contains("## Entendimiento"));
        assert!(report.contains("## Engagement"));
        assert!(report.contains("## Usabilidad"));
        assert!(report.contains("| Ene | 320 |"));
        assert!(report.contains("| Toolkit | 45 | 45% |"));
        assert!(report.contains("| | Vistas | Descargas | Copias |"));
        assert!(report.contains("| Jun | 650 | 340 | 87 |"));
        assert!(report.contains("### Vistas por Sección"));
        assert!(report.contains("| Soluciones | 280 | 28% |"));
        assert!(report.contains("| | Comentarios |"));
        assert!(report.contains("| Workshops | 42 |"));
        assert!(report.contains("- Puntaje de usabilidad: 82%"));
        assert!(report.trim_end().ends_with("Findasense Consulting Dashboard"));
    }

    #[test]
    fn report_for_missing_period_shows_fallback() {
        let dataset = Dataset::builtin();
        let view = DashboardView::with_period(&dataset, "q9-1999");
        let report = build_report(&view.render(), generated_on());

        assert!(report.contains("No hay datos disponibles para el período seleccionado"));
        assert!(!report.contains("## Indicadores"));
    }

    #[test]
    fn q3_report_shows_decline_as_magnitude() {
        let dataset = Dataset::builtin();
        let view = DashboardView::with_period(&dataset, "q3-2024");
        let report = build_report(&view.render(), generated_on());
        assert!(report.contains("- **Nivel de Entendimiento**: 48% (▼ 2% vs período anterior)"));
    }

    #[test]
    fn text_render_draws_bars_against_radar_scale() {
        let dataset = Dataset::builtin();
        let text = render_text(&DashboardView::new(&dataset).render());

        assert!(text.contains("Período: Q2 2025"));
        assert!(text.contains("[Usabilidad]"));
        assert!(text.contains("Puntaje de Usabilidad"));
        assert!(text.contains("Comentarios y Feedback (Consulting Survey)"));
        assert!(text.contains("Soluciones"));
        assert_eq!(bar(50.0, 100.0, 24), "█".repeat(12));
        assert_eq!(bar(0.0, 100.0, 24), "");
        assert_eq!(bar(200.0, 100.0, 24), "█".repeat(24));
    }

    #[test]
    fn text_render_for_missing_period_is_fallback_only() {
        let dataset = Dataset::builtin();
        let text = render_text(&DashboardView::with_period(&dataset, "custom").render());
        assert!(text.ends_with("No hay datos disponibles para el período seleccionado\n"));
    }
}
