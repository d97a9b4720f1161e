use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::view::{DashboardSnapshot, ViewState};

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to create export file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write csv rows: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Serialize)]
struct SeriesRow<'a> {
    chart: &'a str,
    series: &'a str,
    label: &'a str,
    value: f64,
    color: &'a str,
}

pub fn write_series<W: io::Write>(writer: W, state: &ViewState) -> csv::Result<usize> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    let mut written = 0usize;

    match state.snapshot() {
        Some(snapshot) => {
            written = write_rows(&mut csv_writer, snapshot)?;
        }
        None => {
            // serde-driven headers only appear with the first record
            csv_writer.write_record(["chart", "series", "label", "value", "color"])?;
        }
    }

    csv_writer.flush()?;
    Ok(written)
}

fn write_rows<W: io::Write>(
    csv_writer: &mut csv::Writer<W>,
    snapshot: &DashboardSnapshot,
) -> csv::Result<usize> {
    let mut written = 0usize;

    for chart in snapshot.tabs.iter().flat_map(|tab| tab.charts.iter()) {
        for series in chart.series.iter() {
            for point in series.points.iter() {
                csv_writer.serialize(SeriesRow {
                    chart: chart.key,
                    series: &series.name,
                    label: &point.label,
                    value: point.value,
                    color: series.color,
                })?;
                written += 1;
            }
        }
        for segment in chart.segments.iter() {
            csv_writer.serialize(SeriesRow {
                chart: chart.key,
                series: chart.title,
                label: &segment.label,
                value: segment.value,
                color: segment.color,
            })?;
            written += 1;
        }
    }

    Ok(written)
}

pub fn export_csv(path: &Path, state: &ViewState) -> Result<usize, ExportError> {
    let file = std::fs::File::create(path).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let written = write_series(file, state)?;
    Ok(written)
}
