use std::collections::HashMap;
use std::net::SocketAddr;

use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::client::{RedfishClient, Session};
use crate::config::Config;

pub struct MockTree {
    routes: Vec<(String, u16, Value)>,
}

impl MockTree {
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    pub fn ok(self, path: &str, body: Value) -> Self {
        self.route(path, 200, body)
    }

    pub fn error(self, path: &str, status: u16) -> Self {
        self.route(path, status, json!({"error": "injected failure"}))
    }

    fn route(mut self, path: &str, status: u16, body: Value) -> Self {
        self.routes.push((path.to_string(), status, body));
        self
    }

    /// A complete healthy Dell-style resource tree: two DIMMs, one CPU, one
    /// fan, one power supply, one RAID controller with one drive, one
    /// backplane enclosure and one temperature sensor.
    pub fn healthy_system() -> Self {
        Self::new()
            .ok(
                "/redfish/v1/Systems/System.Embedded.1",
                json!({
                    "SerialNumber": "CN7792169N0001",
                    "HostName": "web-42",
                    "Links": {
                        "CooledBy": [
                            {"@odata.id": "/redfish/v1/Chassis/System.Embedded.1/Fans/Fan.Embedded.1A"}
                        ],
                        "PoweredBy": [
                            {"@odata.id": "/redfish/v1/Chassis/System.Embedded.1/Power/PSU.Slot.1"}
                        ]
                    }
                }),
            )
            .ok(
                "/redfish/v1/Systems/System.Embedded.1/Memory",
                json!({
                    "Members": [
                        {"@odata.id": "/redfish/v1/Systems/System.Embedded.1/Memory/DIMM.Socket.A1"},
                        {"@odata.id": "/redfish/v1/Systems/System.Embedded.1/Memory/DIMM.Socket.A2"}
                    ]
                }),
            )
            .ok(
                "/redfish/v1/Systems/System.Embedded.1/Memory/DIMM.Socket.A1",
                json!({
                    "Manufacturer": "Hynix",
                    "CapacityMiB": 16384,
                    "PartNumber": "HMA82GR7AFR8N",
                    "Status": {"Health": "OK"}
                }),
            )
            .ok(
                "/redfish/v1/Systems/System.Embedded.1/Memory/DIMM.Socket.A2",
                json!({
                    "Manufacturer": "Hynix",
                    "CapacityMiB": 16384,
                    "PartNumber": "HMA82GR7AFR8N",
                    "Status": {"Health": "OK"}
                }),
            )
            .ok(
                "/redfish/v1/Systems/System.Embedded.1/Processors",
                json!({
                    "Members": [
                        {"@odata.id": "/redfish/v1/Systems/System.Embedded.1/Processors/CPU.Socket.1"}
                    ]
                }),
            )
            .ok(
                "/redfish/v1/Systems/System.Embedded.1/Processors/CPU.Socket.1",
                json!({
                    "Model": "Intel(R) Xeon(R) Silver 4110",
                    "Status": {"Health": "OK"}
                }),
            )
            .ok(
                "/redfish/v1/Chassis/System.Embedded.1/Fans/Fan.Embedded.1A",
                json!({
                    "FanName": "System Board Fan1A",
                    "Status": {"Health": "OK"}
                }),
            )
            .ok(
                "/redfish/v1/Chassis/System.Embedded.1/Power/PSU.Slot.1",
                json!({
                    "Manufacturer": "Dell",
                    "Model": "PWR SPLY,495W",
                    "PartNumber": "0GRTNKA01",
                    "Status": {"Health": "OK"}
                }),
            )
            .ok(
                "/redfish/v1/Systems/System.Embedded.1/Storage",
                json!({
                    "Members": [
                        {"@odata.id": "/redfish/v1/Systems/System.Embedded.1/Storage/RAID.Integrated.1-1"}
                    ]
                }),
            )
            .ok(
                "/redfish/v1/Systems/System.Embedded.1/Storage/RAID.Integrated.1-1",
                json!({
                    "StorageControllers": [
                        {"Status": {"Health": "OK"}}
                    ],
                    "Drives": [
                        {"@odata.id": "/redfish/v1/Systems/System.Embedded.1/Storage/Drives/Disk.Bay.0"}
                    ]
                }),
            )
            .ok(
                "/redfish/v1/Systems/System.Embedded.1/Storage/Drives/Disk.Bay.0",
                json!({
                    "Manufacturer": "Seagate",
                    "Description": "2.5in SAS HDD",
                    "PartNumber": "ST9146852SS",
                    "Status": {"Health": "OK"}
                }),
            )
            .ok(
                "/redfish/v1/Chassis",
                json!({
                    "Members": [
                        {"@odata.id": "/redfish/v1/Chassis/System.Embedded.1"},
                        {"@odata.id": "/redfish/v1/Chassis/Enclosure.Internal.0-1"}
                    ]
                }),
            )
            .ok(
                "/redfish/v1/Chassis/Enclosure.Internal.0-1",
                json!({
                    "Id": "Enclosure.Internal.0-1",
                    "Name": "BP13G+EXP 0:1",
                    "Status": {"Health": "OK"}
                }),
            )
            .ok(
                "/redfish/v1/Chassis/System.Embedded.1/Thermal",
                json!({
                    "Temperatures": [
                        {
                            "PhysicalContext": "CPU",
                            "MemberId": "iDRAC.Embedded.1#CPU1Temp",
                            "Name": "CPU1 Temp",
                            "Status": {"Health": "OK"}
                        }
                    ]
                }),
            )
    }

    pub async fn serve(self) -> MockRedfish {
        // Later registrations win so tests can patch the healthy fixture.
        let mut routes: HashMap<String, (u16, Value)> = HashMap::new();
        for (path, status, body) in self.routes {
            routes.insert(path, (status, body));
        }

        let mut router = Router::new();
        for (path, (status, body)) in routes {
            let code = StatusCode::from_u16(status).expect("valid status code");
            router = router.route(&path, get(move || async move { (code, Json(body)) }));
        }

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock listener");
        let addr = listener.local_addr().expect("mock listener address");
        let handle = tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });

        MockRedfish { addr, handle }
    }
}

pub struct MockRedfish {
    addr: SocketAddr,
    handle: JoinHandle<()>,
}

impl MockRedfish {
    pub fn host(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub async fn session(&self) -> Session {
        let client = RedfishClient::new(&test_config(self.host())).expect("client should build");
        Session::establish(client)
            .await
            .expect("session should establish")
    }
}

impl Drop for MockRedfish {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

pub fn test_config(host: String) -> Config {
    Config {
        host,
        user: "root".to_string(),
        password: "calvin".to_string(),
        verify_tls: false,
        timeout_secs: 5,
        report_file: std::env::temp_dir().join("hw_inventory_test.txt"),
        critical_only: false,
        nagios: false,
        all: false,
        checks: Vec::new(),
    }
}
