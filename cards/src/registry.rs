use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

use crate::entity::EntityRef;

/// Read-only copy of the host's entity registry, device registry and states.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HomeAssistantSnapshot {
    #[serde(default)]
    pub entities: Vec<EntityRegistryEntry>,
    #[serde(default)]
    pub devices: Vec<DeviceRegistryEntry>,
    #[serde(default)]
    pub states: HashMap<String, EntityState>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EntityRegistryEntry {
    pub entity_id: String,
    #[serde(default)]
    pub device_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeviceRegistryEntry {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub name_by_user: Option<String>,
    #[serde(default)]
    pub identifiers: Vec<(String, String)>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EntityState {
    pub state: String,
    #[serde(default)]
    pub attributes: HashMap<String, Value>,
}

impl HomeAssistantSnapshot {
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// All registered entities joined with their states, in registry order.
    pub fn entity_refs(&self) -> Vec<EntityRef> {
        self.entities
            .iter()
            .map(|entry| self.to_entity_ref(&entry.entity_id, entry.device_id.as_deref()))
            .collect()
    }

    /// Entity by id. Entities that only exist as state have no device.
    pub fn entity_ref(&self, entity_id: &str) -> Option<EntityRef> {
        match self.registry_entry(entity_id) {
            Some(entry) => Some(self.to_entity_ref(entity_id, entry.device_id.as_deref())),
            None => self
                .states
                .contains_key(entity_id)
                .then(|| self.to_entity_ref(entity_id, None)),
        }
    }

    pub fn state(&self, entity_id: &str) -> Option<&EntityState> {
        self.states.get(entity_id)
    }

    pub fn device(&self, device_id: &str) -> Option<&DeviceRegistryEntry> {
        self.devices.iter().find(|d| d.id == device_id)
    }

    pub fn device_of(&self, entity_id: &str) -> Option<&DeviceRegistryEntry> {
        let device_id = self.registry_entry(entity_id)?.device_id.as_deref()?;
        self.device(device_id)
    }

    fn registry_entry(&self, entity_id: &str) -> Option<&EntityRegistryEntry> {
        self.entities.iter().find(|e| e.entity_id == entity_id)
    }

    fn to_entity_ref(&self, entity_id: &str, device_id: Option<&str>) -> EntityRef {
        let state = self.states.get(entity_id);

        EntityRef {
            entity_id: entity_id.to_owned(),
            device_id: device_id.map(str::to_owned),
            device_class: state.and_then(|s| s.device_class()).map(str::to_owned),
            state: state.map(|s| s.state.clone()),
        }
    }
}

impl DeviceRegistryEntry {
    pub fn display_name(&self) -> Option<&str> {
        self.name_by_user.as_deref().or(self.name.as_deref())
    }
}

impl EntityState {
    pub fn attribute(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key).filter(|v| !v.is_null())
    }

    pub fn attribute_str(&self, key: &str) -> Option<&str> {
        self.attribute(key).and_then(Value::as_str)
    }

    pub fn attribute_f64(&self, key: &str) -> Option<f64> {
        self.attribute(key).and_then(Value::as_f64)
    }

    //numbers are accepted too, versions are sometimes reported as plain numbers
    pub fn attribute_string(&self, key: &str) -> Option<String> {
        match self.attribute(key)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    pub fn device_class(&self) -> Option<&str> {
        self.attribute_str("device_class")
    }

    pub fn friendly_name(&self) -> Option<&str> {
        self.attribute_str("friendly_name")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn snapshot() -> HomeAssistantSnapshot {
        serde_json::from_value(json!({
            "entities": [
                { "entity_id": "sensor.dev1_temperature", "device_id": "dev1" },
                { "entity_id": "sensor.dev1_battery", "device_id": "dev1" },
                { "entity_id": "sensor.orphan", "device_id": null }
            ],
            "devices": [
                { "id": "dev1", "name": "Aqara TH", "name_by_user": "Kitchen climate",
                  "identifiers": [["mqtt", "zigbee2mqtt_0x00158d"]] }
            ],
            "states": {
                "sensor.dev1_temperature": {
                    "state": "21.5",
                    "attributes": { "device_class": "temperature", "friendly_name": "Kitchen" }
                },
                "sensor.template_only": { "state": "on" }
            }
        }))
        .unwrap()
    }

    #[test]
    fn joins_registry_with_states() {
        let refs = snapshot().entity_refs();

        assert_eq!(refs.len(), 3);
        assert_eq!(
            refs[0],
            EntityRef::new("sensor.dev1_temperature")
                .with_device("dev1")
                .with_device_class("temperature")
                .with_state("21.5")
        );
        assert_eq!(refs[1].state, None);
        assert_eq!(refs[2].device_id, None);
    }

    #[test]
    fn looks_up_single_entities() {
        let snapshot = snapshot();

        assert_eq!(
            snapshot.entity_ref("sensor.template_only"),
            Some(EntityRef::new("sensor.template_only").with_state("on"))
        );
        assert_eq!(snapshot.entity_ref("sensor.missing"), None);
    }

    #[test]
    fn resolves_device_of_entity() {
        let snapshot = snapshot();
        let device = snapshot.device_of("sensor.dev1_battery").unwrap();

        assert_eq!(device.display_name(), Some("Kitchen climate"));
        assert_eq!(device.identifiers[0].1, "zigbee2mqtt_0x00158d");
        assert!(snapshot.device_of("sensor.orphan").is_none());
    }

    #[test]
    fn reads_attributes() {
        let state: EntityState = serde_json::from_value(json!({
            "state": "on",
            "attributes": { "installed_version": 1.2, "in_progress": null, "brightness": 128 }
        }))
        .unwrap();

        assert_eq!(state.attribute_string("installed_version"), Some("1.2".to_owned()));
        assert!(state.attribute("in_progress").is_none());
        assert_eq!(state.attribute_f64("brightness"), Some(128.0));
    }

    #[test]
    fn rejects_invalid_json() {
        assert!(matches!(
            HomeAssistantSnapshot::from_json("{ not json"),
            Err(crate::Error::Deserialisation(_))
        ));
    }
}
