use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::cli::output::{
    format_details, format_legend, format_matrix_html, format_matrix_table, get_terminal_width,
    is_tty, TableOptions,
};
use crate::config::{ColorMode, Config};
use crate::matrix::{build_matrix, IdeOrder, Matrix};
use crate::models::Dataset;
use crate::source::source_for;

#[derive(Parser)]
#[command(name = "featmatrix")]
#[command(about = "Feature Support Matrix - resolve and render per-IDE feature rollout stages")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Dataset file (JSON); "-" reads stdin. Defaults to data.location or ./features.json
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,
    /// Comma-separated IDE columns, in display order (overrides ides.order)
    #[arg(long, global = true)]
    pub ides: Option<String>,
    /// When to use ANSI colors (overrides color)
    #[arg(long, value_enum, global = true)]
    pub color: Option<ColorMode>,
    /// Verbose logging (same as RUST_LOG=debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the support matrix as a table
    Show {
        /// Output the resolved matrix as JSON
        #[arg(long)]
        json: bool,
        /// List every stage, version, date and link below the table
        #[arg(long)]
        details: bool,
    },
    /// Render the support matrix as an HTML table
    Html {
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Re-export the raw dataset as pretty-printed JSON
    Export {
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Export in matrix order (newest rollout first) instead of source order
        #[arg(long)]
        sorted: bool,
    },
    /// Print the IDE columns in display order
    Ides,
}

/// Settings after merging the rc file with command-line overrides
#[derive(Debug, Clone)]
pub struct Settings {
    pub data: PathBuf,
    pub ide_order: IdeOrder,
    pub color: ColorMode,
}

impl Settings {
    pub fn resolve(cli: &Cli, config: Config) -> Result<Self> {
        let ide_order = match &cli.ides {
            Some(list) => IdeOrder::parse(list)
                .ok_or_else(|| anyhow::anyhow!("--ides cannot be empty"))?,
            None => config.ide_order.clone(),
        };
        Ok(Settings {
            data: cli
                .data
                .clone()
                .unwrap_or_else(|| config.data_location_or_default()),
            ide_order,
            color: cli.color.unwrap_or(config.color),
        })
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load().context("Failed to load configuration")?;
    let settings = Settings::resolve(&cli, config)?;
    log::debug!("settings: {:?}", settings);

    match &cli.command {
        Commands::Show { json, details } => handle_show(&settings, *json, *details),
        Commands::Html { output } => handle_html(&settings, output.as_deref()),
        Commands::Export { output, sorted } => handle_export(&settings, output.as_deref(), *sorted),
        Commands::Ides => handle_ides(&settings),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .try_init();
}

fn load_dataset(settings: &Settings) -> Result<Dataset> {
    let source = source_for(&settings.data);
    let dataset = source.load()?;
    Ok(dataset)
}

fn load_matrix(settings: &Settings) -> Result<Matrix> {
    let dataset = load_dataset(settings)?;
    Ok(build_matrix(&dataset, &settings.ide_order))
}

/// Print to stdout or write to `output`
fn emit(content: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            log::info!("wrote {}", path.display());
        }
        None => print!("{}", content),
    }
    Ok(())
}

fn handle_show(settings: &Settings, json: bool, details: bool) -> Result<()> {
    let matrix = load_matrix(settings)?;

    if json {
        let rendered = serde_json::to_string_pretty(&matrix)
            .context("Failed to serialize matrix")?;
        println!("{}", rendered);
        return Ok(());
    }

    let color = settings.color.enabled(is_tty());
    let options = TableOptions {
        color,
        width: get_terminal_width(),
    };
    print!("{}", format_matrix_table(&matrix, options));
    if !matrix.rows.is_empty() {
        println!();
        println!("{}", format_legend(color));
    }
    if details {
        let text = format_details(&matrix);
        if !text.is_empty() {
            println!();
            print!("{}", text);
        }
    }
    Ok(())
}

fn handle_html(settings: &Settings, output: Option<&Path>) -> Result<()> {
    let matrix = load_matrix(settings)?;
    emit(&format_matrix_html(&matrix), output)
}

fn handle_export(settings: &Settings, output: Option<&Path>, sorted: bool) -> Result<()> {
    let dataset = load_dataset(settings)?;
    let rendered = if sorted {
        let matrix = build_matrix(&dataset, &settings.ide_order);
        serde_json::to_string_pretty(&matrix.raw_records())
    } else {
        dataset.to_json_pretty()
    };
    let json = rendered.context("Failed to serialize dataset")?;
    emit(&format!("{}\n", json), output)
}

fn handle_ides(settings: &Settings) -> Result<()> {
    for ide in settings.ide_order.iter() {
        println!("{}", ide);
    }
    Ok(())
}
