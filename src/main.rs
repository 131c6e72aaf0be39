use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;

use timesheet_audit::api::{AppState, create_router};
use timesheet_audit::config::ConfigLoader;
use timesheet_audit::engine::{
    PAYOUT_COLUMNS, RECONCILIATION_KEY_COLUMNS, compute_payout_report, find_missed_shifts,
};
use timesheet_audit::ingest::{
    PAYOUT_FILE_PREFIX, SCHEDULED_FILE_PREFIX, TIMESHEET_FILE_PREFIX, find_latest_csv_by_prefix,
    read_csv_file, warn_missing_columns,
};
use timesheet_audit::logging;
use timesheet_audit::report::{render_missed_shift_report, render_payout_report};

/// Payout discrepancy and missed-shift reports from timesheet exports.
#[derive(Debug, Parser)]
#[command(name = "timesheet-audit", version, about)]
struct Cli {
    /// YAML configuration file; built-in defaults are used when omitted.
    #[arg(long, global = true, env = "AUDIT_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the employee payout report.
    Payout {
        /// Timesheet CSV; defaults to the newest "Report - timesheets - *.csv" in --dir.
        file: Option<PathBuf>,
        /// Directory searched when no file is given.
        #[arg(long, default_value = ".")]
        dir: PathBuf,
    },
    /// Print scheduled shifts that have no matching timesheet entry.
    Missed {
        /// Scheduled-hours CSV; defaults to the newest "report - scheduled-hours*.csv".
        #[arg(long, env = "SCHEDULED_FILE")]
        scheduled: Option<PathBuf>,
        /// Timesheet CSV; defaults to the newest "report - timesheets*.csv".
        #[arg(long, env = "TIMESHEET_FILE")]
        timesheets: Option<PathBuf>,
        /// Directory searched for files not given explicitly.
        #[arg(long, default_value = ".")]
        dir: PathBuf,
    },
    /// Serve the upload API.
    Serve {
        /// Address to listen on.
        #[arg(long, default_value = "0.0.0.0:5000")]
        addr: SocketAddr,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => ConfigLoader::load(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => ConfigLoader::default(),
    };

    match cli.command {
        Command::Payout { file, dir } => {
            let path = resolve(file, &dir, PAYOUT_FILE_PREFIX)?;
            println!("Processing latest file: {}\n", path.display());

            let records = read_csv_file(&path)?;
            warn_missing_columns(&records, &PAYOUT_COLUMNS, &path.display().to_string());
            let report = compute_payout_report(&records, config.payout());
            println!("{}", render_payout_report(&report));
        }
        Command::Missed {
            scheduled,
            timesheets,
            dir,
        } => {
            let scheduled = resolve(scheduled, &dir, SCHEDULED_FILE_PREFIX)?;
            let timesheets = resolve(timesheets, &dir, TIMESHEET_FILE_PREFIX)?;
            println!("Loading scheduled hours from: {}", scheduled.display());
            println!("Loading timesheets from: {}\n", timesheets.display());

            let scheduled_records = read_csv_file(&scheduled)?;
            let timesheet_records = read_csv_file(&timesheets)?;
            warn_missing_columns(
                &scheduled_records,
                &RECONCILIATION_KEY_COLUMNS,
                &scheduled.display().to_string(),
            );
            warn_missing_columns(
                &timesheet_records,
                &RECONCILIATION_KEY_COLUMNS,
                &timesheets.display().to_string(),
            );

            let report =
                find_missed_shifts(&scheduled_records, &timesheet_records, config.reconciliation());
            println!("{}", render_missed_shift_report(&report));
        }
        Command::Serve { addr } => {
            let router = create_router(AppState::new(config));
            let listener = tokio::net::TcpListener::bind(addr)
                .await
                .with_context(|| format!("binding {}", addr))?;
            info!(%addr, "Timesheet audit API listening");
            axum::serve(listener, router).await?;
        }
    }

    Ok(())
}

fn resolve(explicit: Option<PathBuf>, dir: &Path, prefix: &str) -> anyhow::Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path),
        None => Ok(find_latest_csv_by_prefix(dir, prefix)?),
    }
}
