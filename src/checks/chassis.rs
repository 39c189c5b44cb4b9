use crate::checks::{Check, CheckError, CheckReport};
use crate::client::Session;
use crate::redfish::{self, ChassisMember, Collection, Thermal};

pub async fn check_backplane(session: &Session) -> Result<CheckReport, CheckError> {
    let mut report = CheckReport::new(Check::Backplane);
    let collection: Collection = session.fetch(redfish::CHASSIS_ROOT).await?;

    let backplanes: Vec<_> = collection
        .members
        .iter()
        .filter(|m| m.odata_id.contains("Enclosure"))
        .collect();
    if backplanes.is_empty() {
        return Err(CheckError::NoBackplane);
    }

    for member in backplanes {
        let chassis: ChassisMember = session.fetch(&member.odata_id).await?;
        let health = chassis.status.classify();
        let message = format!(
            "{} {} {}: {} ",
            session.serial_number,
            chassis.id,
            chassis.name,
            chassis.status.display()
        );
        report.push(chassis.id, message, health);
    }

    Ok(report)
}

pub async fn check_thermal(session: &Session) -> Result<CheckReport, CheckError> {
    let mut report = CheckReport::new(Check::Thermal);
    let thermal: Thermal = session.fetch(redfish::THERMAL).await?;

    // Sensors are embedded in the thermal resource; no per-member fetch.
    for sensor in &thermal.temperatures {
        let health = sensor.status.classify();
        let message = format!(
            "{} {} {}: {}",
            sensor.physical_context,
            sensor.member_id,
            sensor.name,
            sensor.status.display()
        );
        report.push(sensor.member_id.clone(), message, health);
    }

    Ok(report)
}
