use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::models::{Direction, KpiEntry, PeriodOption, PeriodRecord};
use crate::seed;

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("failed to read dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse dataset {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("period {0} appears more than once in the dataset")]
    DuplicatePeriod(String),
}

#[derive(Debug, Serialize, Deserialize)]
struct DatasetFile {
    periods: Vec<PeriodOption>,
    records: Vec<PeriodRecord>,
}

/// Period records keyed by id, plus the selector order. Built once and only
/// read afterwards.
#[derive(Debug, Clone)]
pub struct Dataset {
    periods: Vec<PeriodOption>,
    records: BTreeMap<String, PeriodRecord>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ValidationWarning {
    DirectionMismatch {
        period: String,
        kpi: &'static str,
        change: f64,
        direction: Direction,
    },
    MissingRecord {
        period: String,
    },
    NegativeValue {
        period: String,
        series: &'static str,
        label: String,
        value: f64,
    },
}

impl fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationWarning::DirectionMismatch {
                period,
                kpi,
                change,
                direction,
            } => write!(
                f,
                "{period}: {kpi} declares direction {} but change is {change}",
                direction.as_str()
            ),
            ValidationWarning::MissingRecord { period } => {
                write!(f, "{period}: listed in the period selector but has no record")
            }
            ValidationWarning::NegativeValue {
                period,
                series,
                label,
                value,
            } => write!(f, "{period}: {series} has negative value {value} for {label}"),
        }
    }
}

impl Dataset {
    pub fn builtin() -> Self {
        let records = seed::records()
            .into_iter()
            .map(|record| (record.id.clone(), record))
            .collect();

        Self {
            periods: seed::periods(),
            records,
        }
    }

    pub fn new(periods: Vec<PeriodOption>, records: Vec<PeriodRecord>) -> Result<Self, DatasetError> {
        let mut map = BTreeMap::new();
        for record in records {
            let id = record.id.clone();
            if map.insert(id.clone(), record).is_some() {
                return Err(DatasetError::DuplicatePeriod(id));
            }
        }

        Ok(Self {
            periods,
            records: map,
        })
    }

    pub fn from_json_path(path: &Path) -> Result<Self, DatasetError> {
        let raw = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file: DatasetFile =
            serde_json::from_str(&raw).map_err(|source| DatasetError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        let dataset = Self::new(file.periods, file.records)?;
        tracing::info!(
            path = %path.display(),
            records = dataset.records.len(),
            "loaded dataset from file"
        );
        Ok(dataset)
    }

    /// Records in selector order, followed by any the selector does not list.
    pub fn ordered_records(&self) -> Vec<&PeriodRecord> {
        let mut ordered: Vec<&PeriodRecord> = Vec::with_capacity(self.records.len());
        let listed = self
            .periods
            .iter()
            .filter_map(|option| self.records.get(&option.id));
        for record in listed.chain(self.records.values()) {
            if !ordered.iter().any(|seen| seen.id == record.id) {
                ordered.push(record);
            }
        }
        ordered
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        let file = DatasetFile {
            periods: self.periods.clone(),
            records: self.ordered_records().into_iter().cloned().collect(),
        };
        serde_json::to_string_pretty(&file)
    }

    pub fn resolve(&self, period_id: &str) -> Option<&PeriodRecord> {
        let record = self.records.get(period_id);
        if record.is_none() {
            tracing::debug!(period = period_id, "no record for period");
        }
        record
    }

    pub fn available_periods(&self) -> &[PeriodOption] {
        &self.periods
    }

    pub fn validate(&self) -> Vec<ValidationWarning> {
        let mut warnings = Vec::new();

        for option in self.periods.iter().filter(|option| !option.placeholder) {
            if !self.records.contains_key(&option.id) {
                warnings.push(ValidationWarning::MissingRecord {
                    period: option.id.clone(),
                });
            }
        }

        for record in self.records.values() {
            for (kpi, entry) in record.kpis() {
                if !direction_agrees(entry) {
                    warnings.push(ValidationWarning::DirectionMismatch {
                        period: record.id.clone(),
                        kpi,
                        change: entry.change,
                        direction: entry.direction,
                    });
                }
            }

            let proportional = [
                ("page_views_by_section", &record.visit_data.page_views_by_section),
                ("resource_usage", &record.resources_data.resource_usage),
            ];
            for (series, values) in proportional {
                for value in values.iter().filter(|v| v.value < 0.0) {
                    warnings.push(ValidationWarning::NegativeValue {
                        period: record.id.clone(),
                        series,
                        label: value.name.clone(),
                        value: value.value,
                    });
                }
            }
        }

        warnings
    }
}

fn direction_agrees(entry: &KpiEntry) -> bool {
    match entry.direction {
        Direction::Up => entry.change >= 0.0,
        Direction::Down => entry.change <= 0.0,
        Direction::Flat => entry.change == 0.0,
    }
}
