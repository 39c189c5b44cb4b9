use clap::Parser;
use std::path::PathBuf;
use thiserror::Error;

use crate::checks::Check;

#[derive(Parser, Debug)]
#[command(name = "redfish-health")]
#[command(version)]
#[command(about = "Report hardware health from a server's Redfish management interface")]
pub struct Cli {
    /// Management controller address; bare hosts are queried over https
    #[arg(long = "ip", value_name = "HOST")]
    ip: String,
    /// Management controller user name
    #[arg(short = 'u', long = "user")]
    user: String,
    /// Management controller password
    #[arg(short = 'p', long = "password")]
    password: String,
    /// Check memory DIMMs
    #[arg(short = 'm', long = "memory")]
    memory: bool,
    /// Check processors
    #[arg(short = 'c', long = "cpu")]
    cpu: bool,
    /// Check fans
    #[arg(short = 'f', long = "fans")]
    fans: bool,
    /// Check power supplies
    #[arg(long = "psu")]
    psu: bool,
    /// Check storage controllers
    #[arg(short = 's', long = "storage")]
    storage: bool,
    /// Check physical disks
    #[arg(short = 'd', long = "disks")]
    disks: bool,
    /// Check backplane enclosures
    #[arg(short = 'b', long = "backplane")]
    backplane: bool,
    /// Check temperature sensors
    #[arg(short = 't', long = "thermal")]
    thermal: bool,
    /// Run every check
    #[arg(short = 'a', long = "all")]
    all: bool,
    /// Only report components that are not healthy
    #[arg(long)]
    critical: bool,
    /// Emit a single Nagios status line instead of the cumulative report
    #[arg(long)]
    nagios: bool,
    /// Verify the controller's TLS certificate; off by default because
    /// management interfaces ship with self-signed certificates
    #[arg(long)]
    verify_tls: bool,
    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,
    /// File that report-mode output is appended to
    #[arg(long, default_value = "hw_inventory.txt")]
    report_file: PathBuf,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub user: String,
    pub password: String,
    pub verify_tls: bool,
    pub timeout_secs: u64,
    pub report_file: PathBuf,
    pub critical_only: bool,
    pub nagios: bool,
    pub all: bool,
    pub checks: Vec<Check>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("management controller address must not be empty")]
    EmptyHost,
    #[error("timeout-secs must be > 0")]
    ZeroTimeout,
    #[error("no checks selected: pass at least one of -m -c -f --psu -s -d -b -t, or -a")]
    NothingSelected,
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        if cli.ip.trim().is_empty() {
            return Err(ConfigError::EmptyHost);
        }
        if cli.timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }

        let checks = if cli.all {
            if cli.nagios {
                // Nagios mode reports exactly one check; resolved at run time
                // with a warning instead of fanning out.
                Vec::new()
            } else {
                Check::ALL.to_vec()
            }
        } else {
            let mut checks = Vec::new();
            if cli.memory {
                checks.push(Check::Memory);
            }
            if cli.cpu {
                checks.push(Check::Cpu);
            }
            if cli.fans {
                checks.push(Check::Fans);
            }
            if cli.psu {
                checks.push(Check::PowerSupplies);
            }
            if cli.storage {
                checks.push(Check::StorageControllers);
            }
            if cli.disks {
                checks.push(Check::Disks);
            }
            if cli.backplane {
                checks.push(Check::Backplane);
            }
            if cli.thermal {
                checks.push(Check::Thermal);
            }
            checks
        };

        if checks.is_empty() && !cli.all {
            return Err(ConfigError::NothingSelected);
        }

        Ok(Self {
            host: cli.ip.trim().to_string(),
            user: cli.user.clone(),
            password: cli.password.clone(),
            verify_tls: cli.verify_tls,
            timeout_secs: cli.timeout_secs,
            report_file: cli.report_file.clone(),
            critical_only: cli.critical,
            nagios: cli.nagios,
            all: cli.all,
            checks,
        })
    }
}
