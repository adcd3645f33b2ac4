// File: crates/demo/src/main.rs
// Summary: CLI demo: validates form-style arguments, renders the plot with upper/lower sums to PNG,
// and optionally exports sampled points and per-sub-interval extrema as CSV.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use riemann_core::{BuiltinFunction, PlotRequest, Plotter, PlotterConfig, RiemannSums, SumKind};
use riemann_render_skia::SkiaRenderer;
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(version, about = "Plot a built-in function with Riemann upper/lower sums", long_about = None)]
struct Args {
    /// Function name as listed by --list
    #[arg(short, long, default_value = "sin(x)")]
    function: String,
    /// Domain start
    #[arg(long, default_value = "-4", allow_hyphen_values = true)]
    start: String,
    /// Domain end (must exceed start)
    #[arg(long, default_value = "4", allow_hyphen_values = true)]
    end: String,
    /// Number of equal-width sub-intervals
    #[arg(short = 'n', long, default_value = "8", allow_hyphen_values = true)]
    partitions: String,
    #[arg(long)]
    no_upper: bool,
    #[arg(long)]
    no_lower: bool,
    /// JSON config file; unspecified fields keep their defaults
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(short, long, default_value = "target/out/riemann.png")]
    out: PathBuf,
    /// Write per-sub-interval extrema and areas here
    #[arg(long)]
    csv: Option<PathBuf>,
    /// Write the sampled curve here
    #[arg(long)]
    points_csv: Option<PathBuf>,
    /// List the built-in functions and exit
    #[arg(long)]
    list: bool,
    /// Print the effective config as JSON and exit
    #[arg(long)]
    print_config: bool,
}

#[derive(Serialize)]
struct CellRecord {
    start: f64,
    end: f64,
    min: f64,
    max: f64,
    lower_area: f64,
    upper_area: f64,
}

#[derive(Serialize)]
struct PointRecord {
    x: f64,
    y: f64,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    if args.list {
        for f in BuiltinFunction::ALL {
            println!("{f}");
        }
        return Ok(());
    }

    let config = match &args.config {
        Some(path) => PlotterConfig::from_json_file(path)
            .with_context(|| format!("failed to load config '{}'", path.display()))?,
        None => PlotterConfig::default(),
    };
    if args.print_config {
        println!("{}", config.to_json_pretty()?);
        return Ok(());
    }

    let request = PlotRequest::parse(&args.function, &args.start, &args.end, &args.partitions)
        .context("invalid plot request")?;
    let mut plotter = Plotter::with_request(config, &request);
    if args.no_upper {
        plotter.set_sums_visible(SumKind::Upper, false);
    }
    if args.no_lower {
        plotter.set_sums_visible(SumKind::Lower, false);
    }

    let sums = plotter.sums();
    info!(
        "{} on [{}, {}], n={}: lower ≈ {}, upper ≈ {}",
        request.function,
        request.domain.start,
        request.domain.end,
        request.partitions,
        sums.estimate.lower,
        sums.estimate.upper
    );

    SkiaRenderer::new()
        .render_png(&plotter, &args.out)
        .with_context(|| format!("failed to render '{}'", args.out.display()))?;
    println!("Wrote {}", args.out.display());

    if let Some(path) = &args.csv {
        write_cells_csv(path, &sums)?;
        println!("Wrote {}", path.display());
    }
    if let Some(path) = &args.points_csv {
        write_points_csv(path, plotter.function().points())?;
        println!("Wrote {}", path.display());
    }
    Ok(())
}

fn create_writer(path: &Path) -> Result<csv::Writer<std::fs::File>> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    csv::Writer::from_path(path).with_context(|| format!("opening {}", path.display()))
}

fn write_cells_csv(path: &Path, sums: &RiemannSums) -> Result<()> {
    let mut wtr = create_writer(path)?;
    for cell in &sums.cells {
        let width = cell.interval.width();
        wtr.serialize(CellRecord {
            start: cell.interval.start,
            end: cell.interval.end,
            min: cell.min,
            max: cell.max,
            lower_area: cell.min * width,
            upper_area: cell.max * width,
        })?;
    }
    wtr.flush()?;
    Ok(())
}

fn write_points_csv(path: &Path, points: &[(f64, f64)]) -> Result<()> {
    let mut wtr = create_writer(path)?;
    for &(x, y) in points {
        wtr.serialize(PointRecord { x, y })?;
    }
    wtr.flush()?;
    Ok(())
}
