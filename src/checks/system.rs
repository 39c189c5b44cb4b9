use regex::Regex;
use tracing::warn;

use crate::checks::{Check, CheckError, CheckReport};
use crate::client::Session;
use crate::redfish::{self, Collection, Fan, MemoryDimm, PowerSupply, Processor, SystemRoot};

pub async fn check_memory(session: &Session) -> Result<CheckReport, CheckError> {
    let mut report = CheckReport::new(Check::Memory);
    let path = format!("{}/Memory", redfish::SYSTEM_ROOT);
    let collection: Collection = session.fetch(&path).await?;

    for member in &collection.members {
        let segment = member.trailing_segment();
        let slot = dimm_slot(segment).ok_or_else(|| CheckError::DimmSlot {
            member_id: segment.to_string(),
        })?;
        let dimm: MemoryDimm = session.fetch(&member.odata_id).await?;
        let message = format!(
            "Server {} {} {} {} PN {}: {} ",
            session.serial_number,
            slot,
            dimm.manufacturer,
            dimm.capacity_mib,
            dimm.part_number,
            dimm.status.display()
        );
        report.push(slot, message, dimm.status.classify());
    }

    Ok(report)
}

pub async fn check_processors(session: &Session) -> Result<CheckReport, CheckError> {
    let mut report = CheckReport::new(Check::Cpu);
    let path = format!("{}/Processors", redfish::SYSTEM_ROOT);
    let collection: Collection = session.fetch(&path).await?;

    for member in &collection.members {
        let cpu = member.trailing_segment().to_string();
        let processor: Processor = session.fetch(&member.odata_id).await?;
        let message = format!(
            "Server {} {} {}: {} ",
            session.serial_number,
            cpu,
            processor.model,
            processor.status.display()
        );
        report.push(cpu, message, processor.status.classify());
    }

    Ok(report)
}

pub async fn check_fans(session: &Session) -> Result<CheckReport, CheckError> {
    let mut report = CheckReport::new(Check::Fans);
    let root: SystemRoot = session.fetch(redfish::SYSTEM_ROOT).await?;

    if root.links.cooled_by.is_empty() {
        warn!("no fans detected for system");
        return Ok(report);
    }

    for link in &root.links.cooled_by {
        let fan: Fan = session.fetch(&link.odata_id).await?;
        let slot = fan_slot(link.trailing_segment());
        let message = format!(
            "Server {} {} {}: {} ",
            session.serial_number,
            slot,
            fan.fan_name,
            fan.status.display()
        );
        report.push(slot, message, fan.status.classify());
    }

    Ok(report)
}

pub async fn check_power_supplies(session: &Session) -> Result<CheckReport, CheckError> {
    let mut report = CheckReport::new(Check::PowerSupplies);
    let root: SystemRoot = session.fetch(redfish::SYSTEM_ROOT).await?;

    if root.links.powered_by.is_empty() {
        warn!("no power supplies detected for system");
        return Ok(report);
    }

    for link in &root.links.powered_by {
        let supply: PowerSupply = session.fetch(&link.odata_id).await?;
        let psu = link.trailing_segment().to_string();
        let message = format!(
            "Server {} {} {} {} PN {}: {} ",
            session.serial_number,
            psu,
            supply.manufacturer,
            supply.model,
            supply.part_number,
            supply.status.display()
        );
        report.push(psu, message, supply.status.classify());
    }

    Ok(report)
}

fn dimm_slot(member_id: &str) -> Option<String> {
    member_id.find("DIMM").map(|at| member_id[at..].to_string())
}

// Fan member ids embed the slot behind one of two vendor prefixes.
const FAN_SLOT_PATTERNS: &[(&str, &[char])] = &[(r"\|\|.+", &['|']), (r"7CF.+", &['7', 'C'])];

fn fan_slot(member_id: &str) -> String {
    for (pattern, trim) in FAN_SLOT_PATTERNS {
        let Ok(re) = Regex::new(pattern) else {
            continue;
        };
        if let Some(found) = re.find(member_id) {
            return found.as_str().trim_matches(*trim).to_string();
        }
    }
    member_id.to_string()
}
