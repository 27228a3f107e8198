use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use std::{fs, path::PathBuf};
use tidygap::dataset::{self, AxisBounds, Sources, TidyRecord};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Build the tidy Gapminder dataset for the bubble-chart shell"
)]
struct Args {
    /// Directory holding population.csv, life_expectancy.csv and gni.csv
    #[arg(long, default_value = "./data")]
    data_dir: PathBuf,

    /// Write the JSON dataset here instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Restrict the output to a single year
    #[arg(long)]
    year: Option<i32>,

    /// Restrict the output to these countries (repeatable)
    #[arg(long = "country")]
    countries: Vec<String>,
}

/// What the external chart shell consumes: the selected records plus the
/// fixed axis ranges of the full dataset.
#[derive(Serialize)]
struct ChartData<'a> {
    records: Vec<&'a TidyRecord>,
    axis_bounds: Option<AxisBounds>,
}

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();
    info!("startup");

    let args = Args::parse();

    // ─── 2) build the (memoized) dataset ─────────────────────────────
    let sources = Sources::from_dir(&args.data_dir);
    let data = dataset::shared(&sources)?;

    let years = data.year_bounds();
    info!(
        rows = data.records.len(),
        countries = data.countries().len(),
        ?years,
        "dataset ready"
    );

    // ─── 3) select records for the chart shell ───────────────────────
    let records: Vec<&TidyRecord> = match args.year {
        Some(year) => data.filter(year, &args.countries),
        None if args.countries.is_empty() => data.records.iter().collect(),
        None => data
            .records
            .iter()
            .filter(|r| args.countries.contains(&r.country))
            .collect(),
    };
    info!(selected = records.len(), "records selected");

    // ─── 4) emit JSON ────────────────────────────────────────────────
    let chart = ChartData {
        records,
        axis_bounds: data.axis_bounds(),
    };
    let json = serde_json::to_string_pretty(&chart)?;

    match &args.output {
        Some(path) => {
            fs::write(path, json)
                .with_context(|| format!("writing dataset to {}", path.display()))?;
            info!(path = %path.display(), "wrote dataset");
        }
        None => println!("{json}"),
    }

    Ok(())
}
