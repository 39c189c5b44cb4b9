mod checks;
mod client;
mod config;
mod redfish;
mod report;
#[cfg(test)]
mod testutil;

use std::time::SystemTime;

use clap::Parser;
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

use checks::CheckError;
use client::{RedfishClient, Session};
use config::{Cli, Config};
use report::ReportFile;

#[tokio::main]
async fn main() {
    init_tracing();

    let cli = Cli::parse();
    let cfg = match Config::from_cli(&cli) {
        Ok(cfg) => cfg,
        Err(err) => {
            error!(error = %err, "invalid invocation");
            std::process::exit(2);
        }
    };

    std::process::exit(run(&cfg).await);
}

async fn run(cfg: &Config) -> i32 {
    let client = match RedfishClient::new(cfg) {
        Ok(client) => client,
        Err(err) => {
            error!(error = %err, "failed to set up the HTTP client");
            return 2;
        }
    };

    let session = match Session::establish(client).await {
        Ok(session) => session,
        Err(err) => {
            warn!(
                error = %err,
                "installed management firmware does not support this feature over Redfish"
            );
            return 3;
        }
    };

    if cfg.nagios {
        run_nagios(&session, cfg).await
    } else {
        run_report(&session, cfg).await
    }
}

async fn run_report(session: &Session, cfg: &Config) -> i32 {
    let sink = ReportFile::new(&cfg.report_file);
    for check in &cfg.checks {
        let report = match checks::run_check(session, *check).await {
            Ok(report) => report,
            Err(err) => return failure_exit(&err),
        };
        if let Err(err) = sink.emit(&report, cfg.critical_only) {
            error!(error = %err, "failed to write the report");
            return 2;
        }
    }
    0
}

async fn run_nagios(session: &Session, cfg: &Config) -> i32 {
    if cfg.all {
        warn!("running every check is not supported in nagios mode");
        return 0;
    }

    let Some(first) = cfg.checks.first().copied() else {
        return 0;
    };
    if cfg.checks.len() > 1 {
        warn!(
            check = ?first,
            "nagios mode emits a single status line; later selections are ignored"
        );
    }

    let report = match checks::run_check(session, first).await {
        Ok(report) => report,
        Err(err) => return failure_exit(&err),
    };

    let status = report::nagios_status(&report, &session.host_name, SystemTime::now());
    println!("{}", status.line);
    status.exit_code
}

fn failure_exit(err: &CheckError) -> i32 {
    error!(error = %err, "hardware health check failed");
    2
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
