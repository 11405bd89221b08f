use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use crossterm::style::Stylize;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

use finrec_dash::chart::ChartSpec;
use finrec_dash::config::config::{Config, ViewDefaults};
use finrec_dash::table_display::{render_pie_details, render_view, row_summary};
use finrec_dash::{build_view, CsvLoader, DataExporter, DataTable, DataView, ViewConfig};

#[derive(Parser)]
#[command(
    name = "finrec-dash",
    version,
    about = "Browse, sort and export the foreign-resident datasets and charts"
)]
struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show a projected, sorted view of a dataset
    View {
        #[command(flatten)]
        view: ViewArgs,

        /// Maximum rows to print
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Export a projected, sorted view as CSV
    Export {
        #[command(flatten)]
        view: ViewArgs,

        /// Output file; defaults to the configured export file name
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print a chart specification as JSON
    Chart {
        #[arg(value_enum)]
        kind: ChartKind,

        /// Write the JSON here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Write a commented default config file
    InitConfig,
}

#[derive(Args)]
struct ViewArgs {
    /// CSV file; defaults to the configured path of --dataset
    file: Option<PathBuf>,

    /// Which configured dataset defaults to apply
    #[arg(long, value_enum, default_value_t = Dataset::Synthetic)]
    dataset: Dataset,

    /// Comma-separated columns to show, in order
    #[arg(long, value_delimiter = ',')]
    columns: Vec<String>,

    /// Column to sort by (defaults to the first shown column)
    #[arg(long)]
    sort: Option<String>,

    /// Sort descending
    #[arg(long)]
    desc: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Dataset {
    Registered,
    Synthetic,
}

#[derive(Clone, Copy, ValueEnum)]
enum ChartKind {
    Nationality,
    Visa,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    finrec_dash::logging::init_tracing(cli.verbose);

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load().unwrap_or_else(|e| {
            eprintln!("{}", format!("Using default config: {}", e).yellow());
            Config::default()
        }),
    };

    match cli.command {
        Command::View { view, limit } => {
            let data_view = load_view(&config, &view)?;
            println!("{}", render_view(&data_view, limit));
            println!("\n{}", row_summary(&data_view).green());
        }
        Command::Export { view, output } => {
            let data_view = load_view(&config, &view)?;
            let path = output.unwrap_or_else(|| {
                if config.export.file_name.is_empty() {
                    PathBuf::from(DataExporter::timestamped_file_name("view"))
                } else {
                    PathBuf::from(&config.export.file_name)
                }
            });
            let file_name = path
                .file_name()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| config.export.file_name.clone());
            let download =
                DataExporter::export_download(&data_view, &file_name, &config.export.mime)?;
            std::fs::write(&path, &download.data)
                .with_context(|| format!("Failed to export to {}", path.display()))?;
            println!(
                "{}",
                format!(
                    "✓ Exported {} rows to {} ({})",
                    data_view.row_count(),
                    path.display(),
                    download.mime
                )
                .green()
            );
        }
        Command::Chart { kind, output } => {
            let spec = match kind {
                ChartKind::Nationality => {
                    let pie = config.charts.nationality.build()?;
                    if output.is_some() {
                        println!("{}", render_pie_details(&pie.detail_rows()));
                    }
                    ChartSpec::Pie(pie)
                }
                ChartKind::Visa => ChartSpec::DualAxis(config.charts.visa.build()?),
            };
            let json = spec.to_json()?;
            match output {
                Some(path) => {
                    std::fs::write(&path, json)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    println!("{}", format!("Chart written to {}", path.display()).green());
                }
                None => println!("{}", json),
            }
        }
        Command::InitConfig => {
            let path = match &cli.config {
                Some(path) => path.clone(),
                None => Config::get_config_path()?,
            };
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, Config::create_default_with_comments()?)?;
            println!("{}", format!("Config written to {}", path.display()).green());
        }
    }

    Ok(())
}

fn load_view(config: &Config, args: &ViewArgs) -> Result<DataView> {
    let (default_path, defaults): (&PathBuf, &ViewDefaults) = match args.dataset {
        Dataset::Registered => (&config.data.registered_path, &config.views.registered),
        Dataset::Synthetic => (&config.data.synthetic_path, &config.views.synthetic),
    };
    let path = args.file.as_ref().unwrap_or(default_path);

    let table: DataTable = CsvLoader::load_csv(path, &table_name(path))
        .with_context(|| format!("Failed to load {}", path.display()))?;

    let view_config = resolve_view_config(&table, defaults, args);
    debug!("Resolved view config: {:?}", view_config);

    Ok(build_view(Arc::new(table), &view_config)?)
}

/// Command-line choices override the dataset's configured defaults
fn resolve_view_config(table: &DataTable, defaults: &ViewDefaults, args: &ViewArgs) -> ViewConfig {
    let mut view_config = defaults.view_config(table);
    if !args.columns.is_empty() {
        view_config.selected_columns = args.columns.clone();
        view_config.sort_column = None;
    }
    if let Some(sort) = &args.sort {
        view_config.sort_column = Some(sort.clone());
    }
    if args.desc {
        view_config.sort_ascending = false;
    }
    view_config
}

fn table_name(path: &std::path::Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "data".to_string())
}
