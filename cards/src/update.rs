use serde::Serialize;
use serde_json::Value;

use crate::entity::Availability;
use crate::registry::{DeviceRegistryEntry, EntityState};
use crate::service::ServiceCall;

const UPDATE_AVAILABLE_STATE: &str = "on";
const ANNOUNCE_MARKER: &str = "_announce_";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InstallProgress {
    Idle,
    Running,
    Percent(f64),
}

impl InstallProgress {
    fn from_attribute(value: Option<&Value>) -> Self {
        match value {
            Some(Value::Bool(true)) => InstallProgress::Running,
            Some(Value::Number(n)) => n
                .as_f64()
                .map_or(InstallProgress::Running, InstallProgress::Percent),
            _ => InstallProgress::Idle,
        }
    }

    pub fn is_installing(self) -> bool {
        self != InstallProgress::Idle
    }
}

/// Firmware state of a device as reported by its `update` entity.
#[derive(Debug, Clone, PartialEq)]
pub struct FirmwareUpdate {
    pub entity_id: String,
    pub availability: Availability,
    pub update_available: bool,
    pub installed_version: Option<String>,
    pub latest_version: Option<String>,
    pub progress: InstallProgress,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum UpdateStatus {
    Offline,
    UpToDate {
        installed: Option<String>,
    },
    UpdateAvailable {
        installed: Option<String>,
        latest: Option<String>,
    },
    Installing {
        progress: Option<f64>,
    },
}

impl FirmwareUpdate {
    pub fn from_state(entity_id: &str, state: &EntityState) -> Self {
        Self {
            entity_id: entity_id.to_owned(),
            availability: Availability::of(Some(&state.state)),
            update_available: state.state == UPDATE_AVAILABLE_STATE,
            installed_version: state.attribute_string("installed_version"),
            latest_version: state.attribute_string("latest_version"),
            progress: InstallProgress::from_attribute(state.attribute("in_progress")),
        }
    }

    pub fn status(&self) -> UpdateStatus {
        if self.update_available {
            match self.progress {
                InstallProgress::Idle => UpdateStatus::UpdateAvailable {
                    installed: self.installed_version.clone(),
                    latest: self.latest_version.clone(),
                },
                InstallProgress::Running => UpdateStatus::Installing { progress: None },
                InstallProgress::Percent(p) => UpdateStatus::Installing { progress: Some(p) },
            }
        } else if self.availability.is_online() {
            UpdateStatus::UpToDate {
                installed: self.installed_version.clone(),
            }
        } else {
            UpdateStatus::Offline
        }
    }

    /// `update.install` for this entity, if an install can be started right now.
    pub fn install_call(&self) -> Option<ServiceCall> {
        let can_install = self.update_available
            && self.availability.is_online()
            && !self.progress.is_installing();

        can_install.then(|| ServiceCall::for_entity("update", "install", &self.entity_id))
    }
}

impl UpdateStatus {
    pub fn text(&self) -> String {
        match self {
            UpdateStatus::Offline => "Device offline".to_owned(),
            UpdateStatus::UpToDate { installed } => {
                join_present(&[Some("Up to date"), installed.as_deref()], ": ")
            }
            UpdateStatus::UpdateAvailable { installed, latest } => {
                let versions = join_present(&[installed.as_deref(), latest.as_deref()], " → ");
                let versions = (!versions.is_empty()).then_some(versions.as_str());
                join_present(&[Some("Update available"), versions], ": ")
            }
            UpdateStatus::Installing { progress: Some(p) } => format!("Installing {p}%"),
            UpdateStatus::Installing { progress: None } => "Installing".to_owned(),
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            UpdateStatus::Offline => "mdi:cloud-off-outline",
            UpdateStatus::UpToDate { .. } => "mdi:cloud-check-outline",
            UpdateStatus::UpdateAvailable { .. } | UpdateStatus::Installing { .. } => {
                "mdi:cloud-download-outline"
            }
        }
    }

    pub fn icon_color(&self) -> &'static str {
        match self {
            UpdateStatus::Offline => "disabled",
            UpdateStatus::UpToDate { .. } => "var(--rgb-state-update-off)",
            UpdateStatus::UpdateAvailable { .. } => "var(--rgb-state-update-on)",
            UpdateStatus::Installing { .. } => "var(--rgb-state-update-installing)",
        }
    }
}

fn join_present(parts: &[Option<&str>], separator: &str) -> String {
    parts.iter().flatten().copied().collect::<Vec<_>>().join(separator)
}

/// `mqtt.publish` asking the device to announce itself, if one of its identifiers
/// carries an announce topic.
pub fn announce_call(device: &DeviceRegistryEntry) -> Option<ServiceCall> {
    let topic = device
        .identifiers
        .iter()
        .map(|(_, id)| id.as_str())
        .find(|id| id.find(ANNOUNCE_MARKER).is_some_and(|pos| pos > 0))
        .and_then(|id| id.rfind(ANNOUNCE_MARKER).map(|pos| &id[pos + ANNOUNCE_MARKER.len()..]))?;

    if topic.is_empty() {
        return None;
    }

    Some(
        ServiceCall::new("mqtt", "publish")
            .with("topic", topic)
            .with("payload", "announce"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_json_diff::assert_json_eq;
    use serde_json::json;

    fn firmware(state: Value) -> FirmwareUpdate {
        let state: EntityState = serde_json::from_value(state).unwrap();
        FirmwareUpdate::from_state("update.shelly_plug_firmware", &state)
    }

    #[test]
    fn update_available() {
        let update = firmware(json!({
            "state": "on",
            "attributes": { "installed_version": "1.0.3", "latest_version": "1.1.0" }
        }));

        let status = update.status();
        assert_eq!(status.text(), "Update available: 1.0.3 → 1.1.0");
        assert_eq!(status.icon(), "mdi:cloud-download-outline");
        assert_eq!(status.icon_color(), "var(--rgb-state-update-on)");
    }

    #[test]
    fn update_available_without_versions() {
        let update = firmware(json!({ "state": "on" }));
        assert_eq!(update.status().text(), "Update available");

        let update = update_with_latest_only();
        assert_eq!(update.status().text(), "Update available: 2.0");
    }

    fn update_with_latest_only() -> FirmwareUpdate {
        firmware(json!({ "state": "on", "attributes": { "latest_version": "2.0" } }))
    }

    #[test]
    fn installing_with_and_without_progress() {
        let update_pct = firmware(json!({ "state": "on", "attributes": { "in_progress": 42 } }));
        assert_eq!(update_pct.status().text(), "Installing 42%");
        assert_eq!(update_pct.status().icon_color(), "var(--rgb-state-update-installing)");

        let update_flag = firmware(json!({ "state": "on", "attributes": { "in_progress": true } }));
        assert_eq!(update_flag.status().text(), "Installing");

        let update_idle = firmware(json!({ "state": "on", "attributes": { "in_progress": false } }));
        assert_eq!(update_idle.progress, InstallProgress::Idle);
    }

    #[test]
    fn up_to_date_and_offline() {
        let current = firmware(json!({ "state": "off", "attributes": { "installed_version": "1.1.0" } }));
        assert_eq!(current.status().text(), "Up to date: 1.1.0");
        assert_eq!(current.status().icon(), "mdi:cloud-check-outline");

        let offline = firmware(json!({ "state": "unavailable" }));
        assert_eq!(offline.status(), UpdateStatus::Offline);
        assert_eq!(offline.status().text(), "Device offline");
        assert_eq!(offline.status().icon_color(), "disabled");
    }

    #[test]
    fn install_only_when_idle_with_update() {
        let available = firmware(json!({ "state": "on" }));
        assert_json_eq!(
            available.install_call().unwrap(),
            json!({
                "domain": "update",
                "service": "install",
                "data": { "entity_id": "update.shelly_plug_firmware" }
            })
        );

        let installing = firmware(json!({ "state": "on", "attributes": { "in_progress": 10 } }));
        assert!(installing.install_call().is_none());

        let current = firmware(json!({ "state": "off" }));
        assert!(current.install_call().is_none());
    }

    #[test]
    fn status_serialization() {
        assert_json_eq!(
            UpdateStatus::Installing { progress: Some(5.0) },
            json!({ "status": "installing", "progress": 5.0 })
        );
    }

    fn device(identifiers: Value) -> DeviceRegistryEntry {
        serde_json::from_value(json!({ "id": "dev1", "identifiers": identifiers })).unwrap()
    }

    #[test]
    fn announce_topic_from_identifiers() {
        let device = device(json!([
            ["mqtt", "shellyplug-s-ABC"],
            ["mqtt", "shelly_announce_shellies/shellyplug-s-ABC/command"]
        ]));

        assert_json_eq!(
            announce_call(&device).unwrap(),
            json!({
                "domain": "mqtt",
                "service": "publish",
                "data": {
                    "topic": "shellies/shellyplug-s-ABC/command",
                    "payload": "announce"
                }
            })
        );
    }

    #[test]
    fn no_announce_without_marker() {
        assert!(announce_call(&device(json!([["mqtt", "shellyplug-s-ABC"]]))).is_none());
        //marker at the very start does not count
        assert!(announce_call(&device(json!([["mqtt", "_announce_topic"]]))).is_none());
    }
}
