use tracing::warn;

use crate::checks::{Check, CheckError, CheckReport};
use crate::client::Session;
use crate::redfish::{self, Collection, Drive, StorageEntry};

pub async fn enumerate_controllers(session: &Session) -> Result<Vec<String>, CheckError> {
    let path = format!("{}/Storage", redfish::SYSTEM_ROOT);
    let collection: Collection = session.fetch(&path).await?;
    Ok(collection
        .members
        .iter()
        .map(|m| m.trailing_segment().to_string())
        .collect())
}

pub async fn check_controllers(session: &Session) -> Result<CheckReport, CheckError> {
    let mut report = CheckReport::new(Check::StorageControllers);

    for controller in enumerate_controllers(session).await? {
        let entry: StorageEntry = session.fetch(&controller_path(&controller)).await?;
        // Collection members without a StorageControllers sub-list are not
        // controllers themselves.
        let Some(first) = entry.storage_controllers.as_ref().and_then(|c| c.first()) else {
            continue;
        };
        let message = format!(
            "Server {} {}: {} ",
            session.serial_number,
            controller,
            first.status.display()
        );
        let health = first.status.classify();
        report.push(controller, message, health);
    }

    Ok(report)
}

pub async fn check_disks(
    session: &Session,
    controllers: &[String],
) -> Result<CheckReport, CheckError> {
    let mut report = CheckReport::new(Check::Disks);

    for controller in controllers {
        let entry: StorageEntry = session.fetch(&controller_path(controller)).await?;
        if entry.drives.is_empty() {
            warn!(controller = %controller, "no drives detected for controller");
            continue;
        }
        for drive_ref in &entry.drives {
            let disk = drive_ref.trailing_segment().to_string();
            let drive: Drive = session.fetch(&drive_ref.odata_id).await?;
            let message = format!(
                "Server {} {} {} {} PN {}: {} ",
                session.serial_number,
                disk,
                drive.manufacturer,
                drive.description,
                drive.part_number,
                drive.status.display()
            );
            report.push(disk, message, drive.status.classify());
        }
    }

    Ok(report)
}

fn controller_path(controller: &str) -> String {
    format!("{}/Storage/{}", redfish::SYSTEM_ROOT, controller)
}
