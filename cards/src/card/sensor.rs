use serde::{Deserialize, Serialize};

use crate::entity::Availability;
use crate::format::{DataType, format_value_and_uom};
use crate::registry::HomeAssistantSnapshot;

const OFFLINE_TEXT: &str = "Sensor Offline";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattedSensorCardConfig {
    pub entity: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub data_type: Option<DataType>,
    #[serde(default)]
    pub clamp_negative: bool,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub icon_color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SensorCardView {
    pub name: String,
    pub state_display: String,
    pub online: bool,
    pub icon: Option<String>,
    pub icon_color: Option<String>,
}

impl SensorCardView {
    /// `None` when the host has no state for the configured entity.
    pub fn build(config: &FormattedSensorCardConfig, snapshot: &HomeAssistantSnapshot) -> Option<Self> {
        let state = snapshot.state(&config.entity)?;
        let online = Availability::of(Some(&state.state)).is_online();

        let state_display = if !online {
            OFFLINE_TEXT.to_owned()
        } else {
            match config.data_type.or_else(|| DataType::for_device_class(state.device_class())) {
                Some(data_type) => {
                    format_value_and_uom(state.state.as_str(), data_type, config.clamp_negative)
                        .formatted()
                }
                None => state.state.clone(),
            }
        };

        Some(Self {
            name: super::card_name(config.name.as_deref(), false, &config.entity, state, snapshot),
            state_display,
            online,
            icon: config.icon.clone(),
            icon_color: config.icon_color.clone(),
        })
    }
}
