use serde::Deserialize;

pub const SYSTEM_ROOT: &str = "/redfish/v1/Systems/System.Embedded.1";
pub const CHASSIS_ROOT: &str = "/redfish/v1/Chassis";
pub const THERMAL: &str = "/redfish/v1/Chassis/System.Embedded.1/Thermal";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

impl HealthStatus {
    pub fn classify(raw: Option<&str>) -> Self {
        match raw {
            None | Some("OK") => Self::Healthy,
            Some(_) => Self::Unhealthy,
        }
    }

    pub fn is_healthy(self) -> bool {
        matches!(self, Self::Healthy)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Status {
    #[serde(rename = "Health")]
    pub health: Option<String>,
}

impl Status {
    pub fn classify(&self) -> HealthStatus {
        HealthStatus::classify(self.health.as_deref())
    }

    pub fn display(&self) -> &str {
        self.health.as_deref().unwrap_or("OK")
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ODataRef {
    #[serde(rename = "@odata.id")]
    pub odata_id: String,
}

impl ODataRef {
    pub fn trailing_segment(&self) -> &str {
        self.odata_id.rsplit('/').next().unwrap_or(&self.odata_id)
    }
}

#[derive(Debug, Deserialize)]
pub struct Collection {
    #[serde(rename = "Members", default)]
    pub members: Vec<ODataRef>,
}

#[derive(Debug, Deserialize)]
pub struct SystemRoot {
    #[serde(rename = "SerialNumber")]
    pub serial_number: String,
    #[serde(rename = "HostName")]
    pub host_name: String,
    #[serde(rename = "Links", default)]
    pub links: SystemLinks,
}

#[derive(Debug, Default, Deserialize)]
pub struct SystemLinks {
    #[serde(rename = "CooledBy", default)]
    pub cooled_by: Vec<ODataRef>,
    #[serde(rename = "PoweredBy", default)]
    pub powered_by: Vec<ODataRef>,
}

#[derive(Debug, Deserialize)]
pub struct MemoryDimm {
    #[serde(rename = "Manufacturer")]
    pub manufacturer: String,
    #[serde(rename = "CapacityMiB")]
    pub capacity_mib: u64,
    #[serde(rename = "PartNumber")]
    pub part_number: String,
    #[serde(rename = "Status", default)]
    pub status: Status,
}

#[derive(Debug, Deserialize)]
pub struct Processor {
    #[serde(rename = "Model")]
    pub model: String,
    #[serde(rename = "Status", default)]
    pub status: Status,
}

#[derive(Debug, Deserialize)]
pub struct Fan {
    #[serde(rename = "FanName")]
    pub fan_name: String,
    #[serde(rename = "Status", default)]
    pub status: Status,
}

#[derive(Debug, Deserialize)]
pub struct PowerSupply {
    #[serde(rename = "Manufacturer")]
    pub manufacturer: String,
    #[serde(rename = "Model")]
    pub model: String,
    #[serde(rename = "PartNumber")]
    pub part_number: String,
    #[serde(rename = "Status", default)]
    pub status: Status,
}

#[derive(Debug, Deserialize)]
pub struct StorageEntry {
    #[serde(rename = "StorageControllers")]
    pub storage_controllers: Option<Vec<ControllerEntry>>,
    #[serde(rename = "Drives", default)]
    pub drives: Vec<ODataRef>,
}

#[derive(Debug, Deserialize)]
pub struct ControllerEntry {
    #[serde(rename = "Status", default)]
    pub status: Status,
}

#[derive(Debug, Deserialize)]
pub struct Drive {
    #[serde(rename = "Manufacturer")]
    pub manufacturer: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "PartNumber")]
    pub part_number: String,
    #[serde(rename = "Status", default)]
    pub status: Status,
}

#[derive(Debug, Deserialize)]
pub struct ChassisMember {
    #[serde(rename = "Id")]
    pub id: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Status", default)]
    pub status: Status,
}

#[derive(Debug, Deserialize)]
pub struct Thermal {
    #[serde(rename = "Temperatures", default)]
    pub temperatures: Vec<TemperatureSensor>,
}

#[derive(Debug, Deserialize)]
pub struct TemperatureSensor {
    #[serde(rename = "PhysicalContext", default)]
    pub physical_context: String,
    #[serde(rename = "MemberId", default)]
    pub member_id: String,
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "Status", default)]
    pub status: Status,
}
