use anyhow::{Context, Result, anyhow};
use clap::{Args, Parser, Subcommand, ValueEnum};
use crop_dash::{
    DashError, Dataset, Dimension, FilterSpec, GroupBy, MetricSelection, aggregate, filter, storage,
};
use crop_dash::views::{render_views, to_grouped_bars, to_summary_table, to_time_series};
use num_format::{Locale, ToFormattedString};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "cropdash",
    version,
    about = "Filter, aggregate & export crop dashboard views"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Produce the dashboard views for a crop/metric selection.
    Report(ReportArgs),
    /// Show the states, years and crop catalog of a dataset.
    Inspect(InspectArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum MetricArg {
    Area,
    Production,
    Yield,
}

impl From<MetricArg> for Dimension {
    fn from(m: MetricArg) -> Self {
        match m {
            MetricArg::Area => Dimension::Area,
            MetricArg::Production => Dimension::Production,
            MetricArg::Yield => Dimension::Yield,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum GroupArg {
    State,
    District,
}

impl From<GroupArg> for GroupBy {
    fn from(g: GroupArg) -> Self {
        match g {
            GroupArg::State => GroupBy::State,
            GroupArg::District => GroupBy::District,
        }
    }
}

#[derive(ValueEnum, Clone, Debug)]
enum OutFormat {
    Csv,
    Json,
}

#[derive(Args, Debug)]
struct ReportArgs {
    /// Path to the dataset CSV (e.g., crop.csv).
    #[arg(short, long)]
    data: PathBuf,
    /// States separated by comma or semicolon. Default: every state present.
    #[arg(short, long)]
    states: Option<String>,
    /// Year (YYYY) or inclusive range (YYYY:YYYY). Default: observed range.
    #[arg(short, long)]
    years: Option<String>,
    /// Crop to chart (e.g., Rice).
    #[arg(short, long)]
    crop: String,
    /// Metric to read for the crop.
    #[arg(short, long, value_enum, default_value = "production")]
    metric: MetricArg,
    /// Comparison grouping for the bar view.
    #[arg(short, long, value_enum, default_value = "state")]
    group_by: GroupArg,
    /// Save the shaped views to file (format inferred by --format or extension).
    #[arg(long)]
    out: Option<PathBuf>,
    /// Output format (csv or json). If omitted, inferred from --out extension.
    #[arg(long, value_enum)]
    format: Option<OutFormat>,
}

#[derive(Args, Debug)]
struct InspectArgs {
    /// Path to the dataset CSV.
    #[arg(short, long)]
    data: PathBuf,
}

/// Thousands-separated display for totals; small values keep two decimals.
fn fmt_value(v: f64) -> String {
    if !v.is_finite() {
        return "NA".to_string();
    }
    if v.abs() >= 1000.0 {
        (v.round() as i64).to_formatted_string(&Locale::en)
    } else {
        let s = format!("{:.2}", v);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

fn parse_list(s: &str) -> Vec<String> {
    s.split([',', ';'])
        .map(|x| x.trim().to_string())
        .filter(|x| !x.is_empty())
        .collect()
}

fn parse_years(s: &str) -> Option<(i32, i32)> {
    if let Some((a, b)) = s.split_once(':') {
        let start = a.trim().parse::<i32>().ok()?;
        let end = b.trim().parse::<i32>().ok()?;
        Some((start, end))
    } else {
        let y = s.trim().parse::<i32>().ok()?;
        Some((y, y))
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Report(args) => cmd_report(args),
        Command::Inspect(args) => cmd_inspect(args),
    }
}

fn cmd_report(args: ReportArgs) -> Result<()> {
    let dataset = Dataset::load(&args.data)
        .with_context(|| format!("loading dataset {}", args.data.display()))?;

    let mut spec = FilterSpec::default_for(&dataset);
    if let Some(s) = &args.states {
        spec.states = parse_list(s).into_iter().collect();
    }
    if let Some(y) = &args.years {
        let (start, end) =
            parse_years(y).ok_or_else(|| anyhow!("invalid --years, expected YYYY or YYYY:YYYY"))?;
        spec.year_min = start;
        spec.year_max = end;
    }
    let selection = MetricSelection {
        crop: args.crop.clone(),
        dimension: args.metric.into(),
        group_by: args.group_by.into(),
    };

    let records = filter(&dataset, &spec);
    println!(
        "{} of {} records match ({} states, years {}:{})",
        records.len(),
        dataset.len(),
        spec.states.len(),
        spec.year_min,
        spec.year_max
    );
    if records.is_empty() {
        // still fall through: a requested --out export writes empty views
        println!("(no records match the current selection)");
    } else {
        println!("\nOverview");
        for (name, total) in to_summary_table(&records, dataset.schema()) {
            println!("  {:<44} {:>16}", name, fmt_value(total));
        }

        let column = selection.resolved_column();
        match to_time_series(&records, dataset.schema(), &column) {
            Ok(series) => {
                println!("\nTrend \u{2022} {}", column);
                for (year, value) in &series {
                    println!("  {}  {:>16}", year, fmt_value(*value));
                }
            }
            Err(DashError::UnknownColumn(col)) => {
                println!("\nTrend: data unavailable ({})", col);
            }
            Err(e) => return Err(e.into()),
        }

        match aggregate(&records, dataset.schema(), selection.group_by, &column) {
            Ok(view) => {
                println!("\nComparison \u{2022} {}", column);
                for (key, value) in to_grouped_bars(&view) {
                    println!("  {:<44} {:>16}", key, fmt_value(value));
                }
            }
            Err(DashError::UnknownColumn(col)) => {
                println!("\nComparison: data unavailable ({})", col);
            }
            Err(e) => return Err(e.into()),
        }
    }

    if let Some(path) = args.out.as_ref() {
        match render_views(&dataset, &spec, &selection) {
            Ok(views) => {
                let fmt = match args.format {
                    Some(OutFormat::Csv) => "csv",
                    Some(OutFormat::Json) => "json",
                    None => path.extension().and_then(|e| e.to_str()).unwrap_or("csv"),
                }
                .to_ascii_lowercase();
                match fmt.as_str() {
                    "csv" => storage::save_views_csv(&views, path)?,
                    "json" => storage::save_views_json(&views, path)?,
                    other => anyhow::bail!("unsupported format: {}", other),
                }
                eprintln!("Saved views to {}", path.display());
            }
            Err(DashError::UnknownColumn(col)) => {
                eprintln!("skipping export: column {:?} unavailable", col);
            }
            Err(e) => return Err(e.into()),
        }
    }

    Ok(())
}

fn dim_label(d: Dimension) -> &'static str {
    match d {
        Dimension::Area => "area",
        Dimension::Production => "production",
        Dimension::Yield => "yield",
    }
}

fn cmd_inspect(args: InspectArgs) -> Result<()> {
    let dataset = Dataset::load(&args.data)
        .with_context(|| format!("loading dataset {}", args.data.display()))?;

    println!("records: {}", dataset.len());
    if let Some((min, max)) = dataset.year_range() {
        println!("years:   {}:{}", min, max);
    }

    let states = dataset.states();
    println!("states:  {}", states.len());
    for s in &states {
        println!("  {}", s);
    }

    let schema = dataset.schema();
    println!("crops:   {}", schema.crops().len());
    for crop in schema.crops() {
        let dims: Vec<&str> = Dimension::ALL
            .iter()
            .filter(|d| schema.metric_index(crop, **d).is_some())
            .map(|d| dim_label(*d))
            .collect();
        println!("  {:<24} [{}]", crop, dims.join(", "));
    }

    Ok(())
}
