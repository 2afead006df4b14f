use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use tracing::{debug, info};

use report_cli::app::{self, ReportRequest};
use report_cli::config::ReportConfig;
use report_cli::{csv_loader, day_list, logging};
use report_core::ReportForm;
use report_export::{DirectorySink, ExportFormat, PdfLayout};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Monthly activity report generator.
///
/// Builds a timesheet for one client and month from the given worked days
/// and writes it as a spreadsheet or PDF. With `--batch`, one report is
/// produced per CSV row instead.
#[derive(Debug, Parser)]
#[command(name = "activity-report")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Client name.
    #[arg(long, default_value = "")]
    client: String,

    /// Project name.
    #[arg(long, default_value = "")]
    project: String,

    /// Subject of the work.
    #[arg(long, default_value = "")]
    subject: String,

    /// Report month, 1-12. Defaults to the current month.
    #[arg(long)]
    month: Option<u32>,

    /// Report year. Defaults to the current year.
    #[arg(long)]
    year: Option<i32>,

    /// Worked days, e.g. `1-3,6,7`.
    #[arg(long, default_value = "")]
    worked: String,

    /// Output format (xlsx or pdf). Overrides the config file.
    #[arg(long)]
    format: Option<ExportFormat>,

    /// PDF layout (table or calendar). Overrides the config file.
    #[arg(long)]
    layout: Option<PdfLayout>,

    /// CSV file with one report per row; replaces the single-report flags.
    #[arg(long)]
    batch: Option<PathBuf>,

    /// Directory reports are written to. Overrides the config file.
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Caller role; repeat for several. No roles means `user`.
    #[arg(long = "role")]
    roles: Vec<String>,

    /// Log filter, e.g. `debug` or `report_export=trace`.
    #[arg(long)]
    log_level: Option<String>,

    /// Also append log output to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Silence log output on stdout.
    #[arg(long, default_value_t = false)]
    quiet: bool,
}

// ─── setup ───────────────────────────────────────────────────────────────────

fn load_config(cli: &Cli) -> Result<ReportConfig> {
    match &cli.config {
        Some(path) => ReportConfig::load(path)
            .with_context(|| format!("Failed to load config: {}", path.display())),
        None => Ok(ReportConfig::default()),
    }
}

/// `--log-level` always applies; the config level only when `RUST_LOG` is unset.
fn apply_logging(
    cli: &Cli,
    config: &ReportConfig,
) -> Result<()> {
    if let Some(level) = &cli.log_level {
        logging::set_log_level(level)?;
    } else if !logging::env_filter_overridden() {
        logging::set_log_level(&config.log_level)?;
    }

    logging::set_stdout_enabled(!cli.quiet);

    if let Some(path) = &cli.log_file {
        logging::enable_file_logging(path)?;
    }
    Ok(())
}

fn build_requests(cli: &Cli) -> Result<Vec<ReportRequest>> {
    if let Some(path) = &cli.batch {
        let rows = csv_loader::load_from_file(path)
            .with_context(|| format!("Failed to load batch file: {}", path.display()))?;
        return Ok(rows.into_iter().map(ReportRequest::from).collect());
    }

    let defaults = ReportForm::default();
    let worked_days = day_list::parse_day_list(&cli.worked)
        .with_context(|| format!("Invalid --worked value: {}", cli.worked))?;

    Ok(vec![ReportRequest {
        label: "command line".to_string(),
        form: ReportForm {
            client_name: cli.client.clone(),
            project_name: cli.project.clone(),
            subject: cli.subject.clone(),
            month: cli.month.unwrap_or(defaults.month),
            year: cli.year.unwrap_or(defaults.year),
        },
        worked_days,
    }])
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn run(cli: Cli) -> Result<bool> {
    let config = load_config(&cli)?;
    apply_logging(&cli, &config)?;
    debug!(?config, "effective configuration");

    app::ensure_authorized(&config.access_policy(), &cli.roles)?;

    let requests = build_requests(&cli)?;
    let format = cli.format.unwrap_or(config.default_format);
    let layout = cli.layout.unwrap_or(config.pdf_layout);
    let out_dir = cli.out_dir.clone().unwrap_or(config.output_dir.clone());

    info!(
        reports = requests.len(),
        %format,
        %layout,
        out_dir = %out_dir.display(),
        "generating reports"
    );

    let registry = app::build_registry(layout, &config.creator);
    let mut sink = DirectorySink::new(out_dir);
    let summary = app::run(
        &requests,
        &registry,
        format,
        &mut sink,
        Local::now().date_naive(),
    );

    for path in summary.written() {
        println!("Wrote {}", path.display());
    }
    for (label, err) in summary.failures() {
        for message in err.messages() {
            eprintln!("{label}: {message}");
        }
    }

    Ok(summary.all_succeeded())
}

fn main() -> ExitCode {
    logging::init_default_logging();

    match run(Cli::parse()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(2)
        }
    }
}
