use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

use crate::view::DEFAULT_PERIOD;

pub const DATA_ENV: &str = "DASHBOARD_DATA";
pub const PERIOD_ENV: &str = "DASHBOARD_PERIOD";
pub const LOG_ENV: &str = "DASHBOARD_LOG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub data_path: Option<PathBuf>,
    pub default_period: String,
    pub log_filter: String,
}

impl Settings {
    pub fn resolve(data_arg: Option<PathBuf>) -> Self {
        Self::from_lookup(data_arg, |key| std::env::var(key).ok())
    }

    fn from_lookup(data_arg: Option<PathBuf>, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Self {
            data_path: data_arg.or_else(|| non_empty(DATA_ENV).map(PathBuf::from)),
            default_period: non_empty(PERIOD_ENV).unwrap_or_else(|| DEFAULT_PERIOD.to_string()),
            log_filter: non_empty(LOG_ENV).unwrap_or_else(|| "warn".to_string()),
        }
    }

    pub fn period(&self, period_arg: Option<String>) -> String {
        period_arg.unwrap_or_else(|| self.default_period.clone())
    }
}

pub fn init_logging(filter: &str) {
    let env_filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(data_arg: Option<&str>, env: &[(&str, &str)]) -> Settings {
        let env: HashMap<String, String> = env
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(data_arg.map(PathBuf::from), |key| env.get(key).cloned())
    }

    #[test]
    fn defaults_without_environment() {
        let resolved = settings(None, &[]);
        assert_eq!(resolved.data_path, None);
        assert_eq!(resolved.default_period, "q2-2025");
        assert_eq!(resolved.log_filter, "warn");
    }

    #[test]
    fn cli_data_path_wins_over_environment() {
        let resolved = settings(Some("cli.json"), &[(DATA_ENV, "env.json")]);
        assert_eq!(resolved.data_path, Some(PathBuf::from("cli.json")));

        let resolved = settings(None, &[(DATA_ENV, "env.json")]);
        assert_eq!(resolved.data_path, Some(PathBuf::from("env.json")));
    }

    #[test]
    fn period_argument_overrides_environment_default() {
        let resolved = settings(None, &[(PERIOD_ENV, "q4-2024"), (LOG_ENV, "debug")]);
        assert_eq!(resolved.period(None), "q4-2024");
        assert_eq!(resolved.period(Some("q1-2025".to_string())), "q1-2025");
        assert_eq!(resolved.log_filter, "debug");
    }

    #[test]
    fn blank_environment_values_are_ignored() {
        let resolved = settings(None, &[(PERIOD_ENV, "  "), (DATA_ENV, "")]);
        assert_eq!(resolved.default_period, "q2-2025");
        assert_eq!(resolved.data_path, None);
    }
}
