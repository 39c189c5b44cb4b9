pub mod chassis;
pub mod storage;
pub mod system;

use thiserror::Error;

use crate::client::{FetchError, Session};
use crate::redfish::HealthStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    Memory,
    Cpu,
    Fans,
    PowerSupplies,
    StorageControllers,
    Disks,
    Backplane,
    Thermal,
}

impl Check {
    pub const ALL: [Check; 8] = [
        Check::Memory,
        Check::Cpu,
        Check::Fans,
        Check::PowerSupplies,
        Check::StorageControllers,
        Check::Disks,
        Check::Backplane,
        Check::Thermal,
    ];

    pub fn all_ok_message(self) -> &'static str {
        match self {
            Self::Memory => "Memory is OK",
            Self::Cpu => "CPU is OK",
            Self::Fans => "FANS are OK",
            Self::PowerSupplies => "PSU are OK",
            Self::StorageControllers => "CONTROLLERS are OK",
            Self::Disks => "DISKS are OK",
            Self::Backplane => "BACKPLANE is OK",
            Self::Thermal => "TEMPERATURE is OK",
        }
    }
}

#[derive(Debug, Error)]
pub enum CheckError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("unable to derive a DIMM slot from member id {member_id}")]
    DimmSlot { member_id: String },
    #[error("no backplane information detected for system")]
    NoBackplane,
}

#[derive(Debug, Clone)]
pub struct ComponentRecord {
    pub identifier: String,
    pub message: String,
    pub health: HealthStatus,
}

#[derive(Debug)]
pub struct CheckReport {
    pub check: Check,
    pub records: Vec<ComponentRecord>,
}

impl CheckReport {
    pub fn new(check: Check) -> Self {
        Self {
            check,
            records: Vec::new(),
        }
    }

    pub fn push(&mut self, identifier: impl Into<String>, message: String, health: HealthStatus) {
        self.records.push(ComponentRecord {
            identifier: identifier.into(),
            message,
            health,
        });
    }

    pub fn unhealthy(&self) -> impl Iterator<Item = &ComponentRecord> {
        self.records.iter().filter(|r| !r.health.is_healthy())
    }

    pub fn overall(&self) -> HealthStatus {
        if self.records.iter().all(|r| r.health.is_healthy()) {
            HealthStatus::Healthy
        } else {
            HealthStatus::Unhealthy
        }
    }
}

pub async fn run_check(session: &Session, check: Check) -> Result<CheckReport, CheckError> {
    match check {
        Check::Memory => system::check_memory(session).await,
        Check::Cpu => system::check_processors(session).await,
        Check::Fans => system::check_fans(session).await,
        Check::PowerSupplies => system::check_power_supplies(session).await,
        Check::StorageControllers => storage::check_controllers(session).await,
        Check::Disks => {
            // Disks hang off controllers, so a quiet controller enumeration
            // always precedes the drive traversal.
            let controllers = storage::enumerate_controllers(session).await?;
            storage::check_disks(session, &controllers).await
        }
        Check::Backplane => chassis::check_backplane(session).await,
        Check::Thermal => chassis::check_thermal(session).await,
    }
}
