use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::SystemTime;

use thiserror::Error;
use tracing::debug;

use crate::checks::CheckReport;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to append to report file {path}: {source}")]
    Append {
        path: String,
        #[source]
        source: io::Error,
    },
}

pub struct ReportFile {
    path: PathBuf,
}

impl ReportFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Prints every record and appends the same lines to the report file.
    /// Returns the number of lines emitted.
    pub fn emit(&self, report: &CheckReport, critical_only: bool) -> Result<usize, ReportError> {
        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)
            .map_err(|source| ReportError::Append {
                path: self.path.display().to_string(),
                source,
            })?;

        let mut emitted = 0;
        for record in &report.records {
            if critical_only && record.health.is_healthy() {
                debug!(component = %record.identifier, "healthy component suppressed");
                continue;
            }
            println!("{}", record.message);
            writeln!(file, "{}", record.message).map_err(|source| ReportError::Append {
                path: self.path.display().to_string(),
                source,
            })?;
            emitted += 1;
        }

        Ok(emitted)
    }
}

#[derive(Debug)]
pub struct NagiosStatus {
    pub exit_code: i32,
    pub line: String,
}

pub fn nagios_status(report: &CheckReport, host_name: &str, now: SystemTime) -> NagiosStatus {
    let healthy = report.overall().is_healthy();
    let exit_code = if healthy { 0 } else { 2 };
    let message: String = if healthy {
        report.check.all_ok_message().to_string()
    } else {
        report.unhealthy().map(|r| r.message.as_str()).collect()
    };

    let timestamp = humantime::format_rfc3339_seconds(now);
    NagiosStatus {
        exit_code,
        line: format!("{exit_code};{host_name};{timestamp} - {message}"),
    }
}
