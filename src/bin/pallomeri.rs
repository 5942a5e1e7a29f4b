use anyhow::{Result, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use log::info;
use std::path::PathBuf;

use pallomeri::color::Gradient;
use pallomeri::config::load_config;
use pallomeri::storage::{self, Record};
use pallomeri::viz::{self, RenderOptions};
use pallomeri::{LayoutConfig, ValueRange, layout, stats, tooltip};

#[derive(Parser, Debug)]
#[command(
    name = "pallomeri",
    version,
    about = "Lay out data points as packed balls in value bins and render them"
)]
struct Cli {
    /// Enable debug logging (RUST_LOG overrides).
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute a layout from a CSV/JSON file (and optionally plot, export, and print stats).
    Render(RenderArgs),
}

#[derive(ValueEnum, Clone, Debug)]
enum OutFormat {
    Csv,
    Json,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum GradientArg {
    RedGreen,
    Grayscale,
}

impl From<GradientArg> for Gradient {
    fn from(g: GradientArg) -> Self {
        match g {
            GradientArg::RedGreen => Gradient::RedGreen,
            GradientArg::Grayscale => Gradient::Grayscale,
        }
    }
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Input records (.csv with header row, or .json array of objects).
    #[arg(short, long)]
    input: PathBuf,
    /// Column holding the numeric value used for binning, sorting, and color.
    #[arg(short, long)]
    column: String,
    /// JSON layout configuration; flags below override its fields.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Number of value bins.
    #[arg(long)]
    bins: Option<usize>,
    /// Quantize colors into this many steps.
    #[arg(long)]
    color_bins: Option<usize>,
    /// Lower bound of the value range.
    #[arg(long, allow_hyphen_values = true)]
    min: Option<f64>,
    /// Upper bound of the value range.
    #[arg(long, allow_hyphen_values = true)]
    max: Option<f64>,
    /// Canvas width in pixels.
    #[arg(long)]
    width: Option<f64>,
    /// Canvas height in pixels.
    #[arg(long)]
    height: Option<f64>,
    /// Fraction of each slot left as padding, in [0, 1).
    #[arg(long)]
    padding: Option<f64>,
    /// Color gradient for the plot and exported colors.
    #[arg(long, value_enum, default_value = "red-green")]
    gradient: GradientArg,
    /// Create a plot at the given path (.svg or .png).
    #[arg(long)]
    plot: Option<PathBuf>,
    /// Save placements to file (format inferred by --format or extension).
    #[arg(long)]
    out: Option<PathBuf>,
    /// Output format (csv or json). If omitted, inferred from --out extension.
    #[arg(long, value_enum)]
    format: Option<OutFormat>,
    /// Column used as the tooltip title of each ball in exported placements.
    #[arg(long)]
    title_column: Option<String>,
    /// Input row (0-based) to outline in the plot.
    #[arg(long)]
    highlight: Option<usize>,
    /// Print per-bin statistics to stdout.
    #[arg(long, default_value_t = false)]
    stats: bool,
}

fn fmt_opt(v: Option<f64>) -> String {
    match v {
        Some(x) if x.is_finite() => {
            // Format up to 4 decimals, then trim trailing zeros and trailing dot.
            let s = format!("{:.4}", x);
            s.trim_end_matches('0').trim_end_matches('.').to_string()
        }
        _ => "NA".to_string(),
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default)).init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
    }
}

fn build_config(args: &RenderArgs) -> Result<LayoutConfig> {
    let mut cfg = match &args.config {
        Some(p) => load_config(p)?,
        None => LayoutConfig::default(),
    };
    if let Some(n) = args.bins {
        cfg.bins = n;
    }
    if args.color_bins.is_some() {
        cfg.color_bins = args.color_bins;
    }
    if args.min.is_some() || args.max.is_some() {
        cfg.range = ValueRange::new(
            args.min.unwrap_or(cfg.range.min),
            args.max.unwrap_or(cfg.range.max),
        )?;
    }
    if let Some(w) = args.width {
        cfg.canvas.width = w;
    }
    if let Some(h) = args.height {
        cfg.canvas.height = h;
    }
    if let Some(p) = args.padding {
        cfg.padding = p;
    }
    cfg.validate()?;
    Ok(cfg)
}

fn cmd_render(args: RenderArgs) -> Result<()> {
    let cfg = build_config(&args)?;
    let records: Vec<Record> = storage::load_records(&args.input)?;
    info!("loaded {} records from {}", records.len(), args.input.display());

    let column = args.column.as_str();
    let balls = layout(&records, |r| r.number(column), &cfg)?;
    let gradient = Gradient::from(args.gradient);

    if let Some(plot_path) = args.plot.as_ref() {
        let opts = RenderOptions {
            gradient,
            highlight: args.highlight,
            ..Default::default()
        };
        viz::render_with(&balls, cfg.canvas, plot_path, &opts)?;
        eprintln!("Wrote plot to {}", plot_path.display());
    }

    if let Some(path) = args.out.as_ref() {
        let titles = args
            .title_column
            .as_deref()
            .map(|c| tooltip::titles(&balls, |r: &Record| r.text(c)));
        let rows = storage::placement_rows(&balls, gradient, titles.as_deref());
        let fmt = match args.format {
            Some(OutFormat::Csv) => "csv",
            Some(OutFormat::Json) => "json",
            None => path.extension().and_then(|e| e.to_str()).unwrap_or("csv"),
        }
        .to_ascii_lowercase();
        match fmt.as_str() {
            "csv" => storage::save_placements_csv(&rows, path)?,
            "json" => storage::save_placements_json(&rows, path)?,
            other => bail!("unsupported format: {}", other),
        }
        eprintln!("Saved {} placements to {}", rows.len(), path.display());
    }

    if args.stats {
        println!("slots per bin: {}", balls.slots);
        for s in stats::bin_summary(&balls) {
            println!(
                "bin {}  count={} non_finite={}  min={} max={} mean={} median={}",
                s.bin,
                s.count,
                s.non_finite,
                fmt_opt(s.min),
                fmt_opt(s.max),
                fmt_opt(s.mean),
                fmt_opt(s.median)
            );
        }
    }

    Ok(())
}
