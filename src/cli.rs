// src/cli.rs
//! Headless front end: load a resource or compute one chart's geometry
//! and print it. JSON unless `--format` says otherwise.

use std::future::Future;
use std::io::{self, Write};

use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{Result, WrapErr, eyre};
use log::info;
use serde::Serialize;

use crate::config::consts::SOURCE_ENV;
use crate::config::options::DataSource;
use crate::csv::write_row;
use crate::geometry::{
    bar::{BarConfig, bar_chart},
    gauge::{GaugeConfig, gauge},
    heatmap::{HeatmapConfig, heatmap},
    isotype::{IsotypeConfig, isotype},
    pack::{PackConfig, pack_bubbles},
    radar::{RadarConfig, RadarData, radar},
    timeline::timeline,
    trend::{TrendConfig, trend_chart},
    format_value,
};
use crate::loader::{Loader, Source, block_on};
use crate::records::{JobRecord, JobSchema, RiskTier};
use crate::search::{Direction, JobQuery, SortKey};
use crate::showcase;

#[derive(Parser, Debug)]
#[command(name = "cli", version, about = "AI job-outlook data and chart geometry")]
pub struct Cli {
    /// Data directory or site base URL
    #[arg(long, global = true, env = SOURCE_ENV, default_value = "data")]
    pub source: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Filtered, sorted job list
    Jobs {
        /// Read augmented_final_data.csv instead of job_data.csv
        #[arg(long)]
        augmented: bool,
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        domain: Option<String>,
        #[arg(long, value_enum)]
        tier: Option<TierArg>,
        #[arg(long, value_enum, default_value = "impact")]
        sort: SortArg,
        #[arg(long)]
        asc: bool,
        #[arg(long, value_enum, default_value = "json")]
        format: Format,
    },
    Sectors,
    Skills,
    Timeline,
    /// Radial gauge for a percentage
    Gauge {
        percentage: f64,
        #[arg(long)]
        radius: Option<f64>,
    },
    /// Sector bar chart
    Bar {
        #[arg(long)]
        height: Option<f64>,
    },
    Heatmap {
        #[arg(long)]
        width: Option<f64>,
        #[arg(long)]
        height: Option<f64>,
    },
    Bubbles {
        #[arg(long)]
        width: Option<f64>,
        #[arg(long)]
        height: Option<f64>,
        #[arg(long)]
        padding: Option<f64>,
    },
    /// Skill radar built from skills_data.csv
    Radar {
        #[arg(long)]
        radius: Option<f64>,
    },
    Trend {
        #[arg(long)]
        width: Option<f64>,
        #[arg(long)]
        height: Option<f64>,
    },
    Isotype {
        percentage: f64,
        #[arg(long)]
        rows: Option<usize>,
        #[arg(long)]
        columns: Option<usize>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum TierArg {
    Low,
    Medium,
    High,
}

impl From<TierArg> for RiskTier {
    fn from(t: TierArg) -> Self {
        match t {
            TierArg::Low => RiskTier::Low,
            TierArg::Medium => RiskTier::Medium,
            TierArg::High => RiskTier::High,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum SortArg {
    Impact,
    Title,
    Ratio,
}

impl From<SortArg> for SortKey {
    fn from(s: SortArg) -> Self {
        match s {
            SortArg::Impact => SortKey::Impact,
            SortArg::Title => SortKey::Title,
            SortArg::Ratio => SortKey::WorkloadRatio,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Json,
    Csv,
    Tsv,
}

impl Format {
    fn delimiter(self) -> char {
        if self == Format::Tsv { '\t' } else { ',' }
    }
}

pub fn run(cli: Cli) -> Result<()> {
    let source = DataSource::parse(&cli.source);
    info!("CLI: source {}", source.describe());
    let loader = Loader::from_source(&source);

    match cli.command {
        Command::Jobs { augmented, search, domain, tier, sort, asc, format } => {
            let schema = if augmented { JobSchema::Augmented } else { JobSchema::JobData };
            let jobs = non_empty(load(&loader, |l| async move {
                if augmented { l.load_augmented_jobs().await } else { l.load_jobs().await }
            })?, schema.name())?;

            let query = JobQuery {
                term: search.unwrap_or_default(),
                domain,
                tier: tier.map(RiskTier::from),
                sort: sort.into(),
                direction: if asc { Direction::Ascending } else { Direction::Descending },
            };
            let hits = query.apply(&jobs);
            info!("CLI: {} of {} jobs match", hits.len(), jobs.len());

            match format {
                Format::Json => print_json(&hits),
                f => write_jobs(io::stdout().lock(), &hits, f.delimiter()),
            }
        }
        Command::Sectors => {
            let rows = non_empty(load(&loader, |l| async move { l.load_sectors().await })?, "sectors")?;
            print_json(&rows)
        }
        Command::Skills => {
            let rows = non_empty(load(&loader, |l| async move { l.load_skills().await })?, "skills")?;
            print_json(&rows)
        }
        Command::Timeline => {
            let rows = non_empty(load(&loader, |l| async move { l.load_timeline().await })?, "timeline")?;
            print_json(&timeline(&rows))
        }
        Command::Gauge { percentage, radius } => {
            let mut cfg = GaugeConfig::default();
            if let Some(r) = radius {
                cfg = cfg.with_radius(r);
            }
            print_json(&gauge(percentage, &cfg))
        }
        Command::Bar { height } => {
            let rows = non_empty(load(&loader, |l| async move { l.load_sectors().await })?, "sectors")?;
            let mut cfg = BarConfig::default();
            if let Some(h) = height {
                cfg.height = h;
            }
            print_json(&bar_chart(&rows, &cfg))
        }
        Command::Heatmap { width, height } => {
            let mut cfg = HeatmapConfig::default();
            cfg.width = width.unwrap_or(cfg.width);
            cfg.height = height.unwrap_or(cfg.height);
            print_json(&heatmap(&showcase::heat_cells(), &cfg))
        }
        Command::Bubbles { width, height, padding } => {
            let mut cfg = PackConfig::default();
            cfg.width = width.unwrap_or(cfg.width);
            cfg.height = height.unwrap_or(cfg.height);
            cfg.padding = padding.unwrap_or(cfg.padding);
            print_json(&pack_bubbles(&showcase::bubbles(), &cfg))
        }
        Command::Radar { radius } => {
            let rows = non_empty(load(&loader, |l| async move { l.load_skills().await })?, "skills")?;
            let mut cfg = RadarConfig::default();
            if let Some(r) = radius {
                // Horizontal margins are the wider pair, so they bound the radius.
                cfg.size = 2.0 * r + cfg.margins.left + cfg.margins.right;
            }
            print_json(&radar(&RadarData::from_categories(&rows), &cfg))
        }
        Command::Trend { width, height } => {
            let mut cfg = TrendConfig::default();
            cfg.width = width.unwrap_or(cfg.width);
            cfg.height = height.unwrap_or(cfg.height);
            print_json(&trend_chart(&showcase::trend_points(), &cfg))
        }
        Command::Isotype { percentage, rows, columns } => {
            let mut cfg = IsotypeConfig::default();
            cfg.rows = rows.unwrap_or(cfg.rows);
            cfg.columns = columns.unwrap_or(cfg.columns);
            print_json(&isotype(percentage, &cfg))
        }
    }
}

fn load<'a, T, Fut>(loader: &'a Loader<Source>, f: impl FnOnce(&'a Loader<Source>) -> Fut) -> Result<Vec<T>>
where
    Fut: Future<Output = Vec<T>>,
{
    block_on(f(loader)).wrap_err("could not start the async runtime")
}

fn non_empty<T>(rows: Vec<T>, what: &str) -> Result<Vec<T>> {
    if rows.is_empty() {
        return Err(eyre!("no {} data could be loaded", what));
    }
    Ok(rows)
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let mut out = io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, value)?;
    writeln!(out)?;
    Ok(())
}

pub const JOB_COLUMNS: [&str; 8] = [
    "title", "impact", "tasks", "aiModels", "aiWorkloadRatio", "domain",
    "keySkillsToKeep", "timeToDisruption",
];

/// Flat row for CSV/TSV export; skills joined with `|`, NaN/None left blank.
pub fn job_row(job: &JobRecord) -> Vec<String> {
    let num = |v: f64| if v.is_nan() { s!() } else { format_value(v) };
    let count = |v: Option<i64>| v.map(|n| n.to_string()).unwrap_or_default();
    vec![
        job.title.clone(),
        num(job.impact),
        count(job.tasks),
        count(job.ai_models),
        num(job.ai_workload_ratio),
        job.domain.clone(),
        job.key_skills_to_keep.join("|"),
        job.time_to_disruption.clone(),
    ]
}

pub fn write_jobs<W: Write>(mut w: W, jobs: &[&JobRecord], sep: char) -> Result<()> {
    write_row(&mut w, &JOB_COLUMNS, sep)?;
    for job in jobs {
        write_row(&mut w, &job_row(job), sep)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_jobs_flags() {
        let cli = Cli::try_parse_from([
            "cli", "--source", "fixtures", "jobs", "--tier", "high", "--sort", "ratio", "--asc",
            "--format", "tsv",
        ])
        .unwrap();
        assert_eq!(cli.source, "fixtures");
        match cli.command {
            Command::Jobs { tier, sort, asc, format, augmented, .. } => {
                assert!(matches!(tier, Some(TierArg::High)));
                assert!(matches!(sort, SortArg::Ratio));
                assert!(asc);
                assert!(!augmented);
                assert_eq!(format, Format::Tsv);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn parses_gauge_percentage() {
        let cli = Cli::try_parse_from(["cli", "gauge", "72.5", "--radius", "60"]).unwrap();
        match cli.command {
            Command::Gauge { percentage, radius } => {
                assert_eq!(percentage, 72.5);
                assert_eq!(radius, Some(60.0));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn job_rows_blank_missing_numbers() {
        let job = JobRecord {
            title: s!("Data Entry, Clerk"),
            impact: 85.0,
            tasks: None,
            ai_models: Some(12),
            ai_workload_ratio: f64::NAN,
            key_skills_to_keep: vec![s!("Accuracy"), s!("Judgment")],
            ..Default::default()
        };
        let mut buf = Vec::new();
        write_jobs(&mut buf, &[&job], ',').unwrap();
        let text = String::from_utf8(buf).unwrap();
        let body = text.lines().nth(1).unwrap();
        assert_eq!(body, "\"Data Entry, Clerk\",85,,12,,,Accuracy|Judgment,");
    }
}
