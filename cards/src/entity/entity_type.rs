use serde::{Deserialize, Serialize};

use super::EntityRef;

/// Role of a device's primary entity. Decides which sibling entities are shown with it.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum EntityType {
    AirPurifier,
    Climate,
    Contact,
    Light,
    Motion,
}

impl EntityType {
    pub fn from_domain(domain: &str, device_class: Option<&str>) -> Option<Self> {
        match (domain, device_class) {
            ("binary_sensor", Some("door" | "garage_door" | "opening" | "window")) => {
                Some(EntityType::Contact)
            }
            ("binary_sensor", Some("motion")) => Some(EntityType::Motion),
            ("sensor", Some("atmospheric_pressure" | "humidity" | "temperature")) => {
                Some(EntityType::Climate)
            }
            ("light", _) => Some(EntityType::Light),
            _ => None,
        }
    }

    /// Entity id suffixes of the sibling entities shown next to this type.
    pub fn related_entity_suffixes(self) -> &'static [&'static str] {
        match self {
            EntityType::AirPurifier => &["pm2_5", "motor_speed", "temperature", "humidity"],
            EntityType::Climate => &["temperature", "humidity", "battery", "last_seen"],
            EntityType::Contact => &["battery", "last_seen"],
            EntityType::Light => &["last_seen"],
            EntityType::Motion => &["illuminance", "illuminance_lux", "battery", "last_seen"],
        }
    }

    pub fn icon_color(self) -> Option<&'static str> {
        match self {
            EntityType::AirPurifier => Some("green"),
            EntityType::Climate => Some("purple"),
            EntityType::Contact => Some("cyan"),
            EntityType::Light => Some("deep-orange"),
            EntityType::Motion => None,
        }
    }
}

pub fn classify(entity: &EntityRef) -> Option<EntityType> {
    let entity_type = EntityType::from_domain(entity.domain(), entity.device_class.as_deref());

    if entity_type.is_none() {
        tracing::debug!(
            entity_id = %entity.entity_id,
            device_class = ?entity.device_class,
            "Entity type could not be determined"
        );
    }

    entity_type
}
