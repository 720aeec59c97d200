use serde::{Deserialize, Serialize};
use support::ext::ResultExt;
use support::time::DateTime;

use crate::entity::{DeviceEntities, EntityRef, EntityType, classify, related_entities};
use crate::format::{DataType, format_value_and_uom};
use crate::registry::HomeAssistantSnapshot;

const OFFLINE_TEXT: &str = "Device offline";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceCardConfig {
    pub entity: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub entity_type: Option<EntityType>,
    #[serde(default)]
    pub related_entity_suffixes: Option<Vec<String>>,
    #[serde(default = "enabled")]
    pub use_device_name: bool,
    #[serde(default = "enabled")]
    pub show_last_seen: bool,
    #[serde(default = "enabled")]
    pub show_related_entities: bool,
    #[serde(default)]
    pub icon_color: Option<String>,
}

fn enabled() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelatedEntityView {
    pub entity_id: String,
    pub display: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeviceCardView {
    pub name: String,
    pub entity_type: Option<EntityType>,
    pub online: bool,
    pub state_display: String,
    pub icon_color: Option<String>,
    pub battery: Option<String>,
    pub last_seen: Option<String>,
    pub related: Vec<RelatedEntityView>,
}

impl DeviceCardView {
    /// `None` when the host has no state for the configured entity.
    #[tracing::instrument(skip_all, fields(entity = %config.entity))]
    pub fn build(config: &DeviceCardConfig, snapshot: &HomeAssistantSnapshot, now: DateTime) -> Option<Self> {
        let state = snapshot.state(&config.entity)?;
        let primary = snapshot.entity_ref(&config.entity)?;

        let entity_type = config.entity_type.or_else(|| classify(&primary));
        let online = primary.availability().is_online();

        let all_entities = snapshot.entity_refs();
        let related = match snapshot.device_of(&config.entity) {
            Some(device) => related_entities(
                &device.id,
                entity_type,
                &config.entity,
                &all_entities,
                config.related_entity_suffixes.as_deref(),
            ),
            None => vec![],
        };
        let device_entities = DeviceEntities::partition(related);

        let last_seen = device_entities
            .last_seen
            .filter(|_| config.show_last_seen)
            .and_then(|e| e.state.as_deref())
            .and_then(|s| DateTime::from_iso(s).ok_or_warn("Error parsing last seen timestamp"))
            .map(|dt| dt.to_human_readable_since(now));

        //battery and siblings are only meaningful while the device reports in
        let related = if online && config.show_related_entities {
            device_entities.others.iter().map(|e| related_view(e)).collect()
        } else {
            vec![]
        };
        let battery = device_entities
            .battery
            .filter(|_| online)
            .map(|e| format_value_and_uom(e.state.clone(), DataType::Percentage, false).formatted());

        let state_display = if online {
            entity_display(&primary)
        } else {
            OFFLINE_TEXT.to_owned()
        };

        Some(Self {
            name: super::card_name(
                config.name.as_deref(),
                config.use_device_name,
                &config.entity,
                state,
                snapshot,
            ),
            entity_type,
            online,
            state_display,
            icon_color: config
                .icon_color
                .clone()
                .or_else(|| entity_type.and_then(EntityType::icon_color).map(str::to_owned)),
            battery,
            last_seen,
            related,
        })
    }
}

fn entity_display(entity: &EntityRef) -> String {
    match DataType::for_device_class(entity.device_class.as_deref()) {
        Some(data_type) => format_value_and_uom(entity.state.clone(), data_type, false).formatted(),
        None => entity.state.clone().unwrap_or_default(),
    }
}

fn related_view(entity: &EntityRef) -> RelatedEntityView {
    RelatedEntityView {
        entity_id: entity.entity_id.clone(),
        display: entity_display(entity),
    }
}
