use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

mod charts;
mod config;
mod data;
mod export;
mod kpi;
mod models;
mod report;
mod seed;
mod view;

use config::Settings;
use data::Dataset;
use view::DashboardView;

#[derive(Parser)]
#[command(name = "practice-dashboard")]
#[command(about = "Quarterly metrics dashboard for the consulting practice", long_about = None)]
struct Cli {
    /// Load the dataset from a JSON file instead of the built-in one
    #[arg(long, global = true)]
    data: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the periods offered by the selector
    Periods,
    /// Print the dashboard for a period
    Show {
        #[arg(long)]
        period: Option<String>,
    },
    /// Generate a markdown report
    Report {
        #[arg(long)]
        period: Option<String>,
        #[arg(long, default_value = "dashboard.md")]
        out: PathBuf,
    },
    /// Print the derived dashboard as JSON
    Json {
        #[arg(long)]
        period: Option<String>,
    },
    /// Export every chart series as CSV
    Export {
        #[arg(long)]
        period: Option<String>,
        #[arg(long, default_value = "series.csv")]
        out: PathBuf,
    },
    /// Check KPI directions and selector entries against the records
    Validate,
    /// Write the active dataset as JSON, suitable for --data
    DumpData {
        #[arg(long, default_value = "dataset.json")]
        out: PathBuf,
    },
}

fn load_dataset(settings: &Settings) -> anyhow::Result<Dataset> {
    let dataset = match &settings.data_path {
        Some(path) => Dataset::from_json_path(path)
            .with_context(|| format!("failed to load dataset from {}", path.display()))?,
        None => Dataset::builtin(),
    };

    for warning in dataset.validate() {
        tracing::warn!(%warning, "dataset validation");
    }

    Ok(dataset)
}

fn open_view<'a>(
    dataset: &'a Dataset,
    settings: &Settings,
    period: Option<String>,
) -> DashboardView<'a> {
    let mut view = DashboardView::new(dataset);
    view.select(&settings.period(period));
    view
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = Settings::resolve(cli.data);
    config::init_logging(&settings.log_filter);

    let dataset = load_dataset(&settings)?;

    match cli.command {
        Commands::Periods => {
            for option in dataset.available_periods() {
                if option.placeholder {
                    println!("- {} ({}, sin datos)", option.id, option.label);
                } else {
                    println!("- {} ({})", option.id, option.label);
                }
            }
        }
        Commands::Show { period } => {
            let view = open_view(&dataset, &settings, period);
            print!("{}", report::render_text(&view.render()));
        }
        Commands::Report { period, out } => {
            let view = open_view(&dataset, &settings, period);
            let today = chrono::Local::now().date_naive();
            let report = report::build_report(&view.render(), today);
            std::fs::write(&out, report)
                .with_context(|| format!("failed to write report to {}", out.display()))?;
            println!("Report written to {}.", out.display());
        }
        Commands::Json { period } => {
            let view = open_view(&dataset, &settings, period);
            let json = serde_json::to_string_pretty(&view.render())?;
            println!("{json}");
        }
        Commands::Export { period, out } => {
            let view = open_view(&dataset, &settings, period);
            let state = view.render();
            if state.snapshot().is_none() {
                tracing::warn!(period = view.selected(), "no data for period, exporting header only");
            }
            let written = export::export_csv(&out, &state)
                .with_context(|| format!("failed to export series to {}", out.display()))?;
            println!("Exported {written} points to {}.", out.display());
        }
        Commands::Validate => {
            let warnings = dataset.validate();
            if warnings.is_empty() {
                println!("Dataset is consistent.");
                return Ok(());
            }

            println!("Dataset warnings:");
            for warning in warnings.iter() {
                println!("- {warning}");
            }
            anyhow::bail!("{} validation warnings", warnings.len());
        }
        Commands::DumpData { out } => {
            let json = dataset.to_json()?;
            std::fs::write(&out, json)
                .with_context(|| format!("failed to write dataset to {}", out.display()))?;
            println!("Dataset written to {}.", out.display());
        }
    }

    Ok(())
}
