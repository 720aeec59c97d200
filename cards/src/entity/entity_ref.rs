use serde::{Deserialize, Serialize};

use super::Availability;

/// Host-supplied view of one entity: identity, owning device and current state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRef {
    pub entity_id: String,
    #[serde(default)]
    pub device_id: Option<String>,
    #[serde(default)]
    pub device_class: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
}

impl EntityRef {
    pub fn new(entity_id: impl Into<String>) -> Self {
        Self {
            entity_id: entity_id.into(),
            device_id: None,
            device_class: None,
            state: None,
        }
    }

    pub fn with_device(mut self, device_id: impl Into<String>) -> Self {
        self.device_id = Some(device_id.into());
        self
    }

    pub fn with_device_class(mut self, device_class: impl Into<String>) -> Self {
        self.device_class = Some(device_class.into());
        self
    }

    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    /// Part of the entity id before the first `.`, e.g. `sensor`.
    pub fn domain(&self) -> &str {
        self.entity_id
            .split_once('.')
            .map_or(self.entity_id.as_str(), |(domain, _)| domain)
    }

    pub fn belongs_to(&self, device_id: &str) -> bool {
        self.device_id.as_deref() == Some(device_id)
    }

    pub fn availability(&self) -> Availability {
        Availability::of(self.state.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_is_prefix_before_first_dot() {
        assert_eq!(EntityRef::new("binary_sensor.front_door").domain(), "binary_sensor");
        assert_eq!(EntityRef::new("sensor.a.b").domain(), "sensor");
        assert_eq!(EntityRef::new("nodomain").domain(), "nodomain");
    }

    #[test]
    fn device_membership() {
        let entity = EntityRef::new("sensor.x").with_device("dev1");
        assert!(entity.belongs_to("dev1"));
        assert!(!entity.belongs_to("dev2"));
        assert!(!EntityRef::new("sensor.y").belongs_to("dev1"));
    }
}
