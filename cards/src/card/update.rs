use serde::{Deserialize, Serialize};

use crate::registry::HomeAssistantSnapshot;
use crate::service::ServiceCall;
use crate::update::{FirmwareUpdate, UpdateStatus, announce_call};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateCardConfig {
    pub entity: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default = "default_use_device_name")]
    pub use_device_name: bool,
}

fn default_use_device_name() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateCardView {
    pub name: String,
    pub status: UpdateStatus,
    pub state_display: String,
    pub icon: &'static str,
    pub icon_color: &'static str,
    pub install: Option<ServiceCall>,
    pub announce: Option<ServiceCall>,
}

impl UpdateCardView {
    pub fn build(config: &UpdateCardConfig, snapshot: &HomeAssistantSnapshot) -> Option<Self> {
        let state = snapshot.state(&config.entity)?;
        let update = FirmwareUpdate::from_state(&config.entity, state);
        let status = update.status();

        Some(Self {
            name: super::card_name(
                config.name.as_deref(),
                config.use_device_name,
                &config.entity,
                state,
                snapshot,
            ),
            state_display: status.text(),
            icon: status.icon(),
            icon_color: status.icon_color(),
            install: update.install_call(),
            announce: snapshot.device_of(&config.entity).and_then(announce_call),
            status,
        })
    }
}
