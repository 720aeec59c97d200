use serde::{Deserialize, Serialize};

use crate::light::{ButtonHighlight, LightButton, LightState};
use crate::registry::HomeAssistantSnapshot;
use crate::service::ServiceCall;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightButtonsCardConfig {
    pub entity: String,
    pub buttons: Vec<LightButton>,
    #[serde(default = "default_show_labels")]
    pub show_labels: bool,
}

fn default_show_labels() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LightButtonView {
    pub icon: Option<String>,
    pub label: Option<String>,
    pub highlight: ButtonHighlight,
    pub disabled: bool,
    pub action: ServiceCall,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LightButtonsCardView {
    pub buttons: Vec<LightButtonView>,
}

impl LightButtonsCardView {
    pub fn build(config: &LightButtonsCardConfig, snapshot: &HomeAssistantSnapshot) -> Option<Self> {
        let light = LightState::from_state(snapshot.state(&config.entity)?);

        let buttons = config
            .buttons
            .iter()
            .map(|button| LightButtonView {
                icon: button.icon.clone(),
                label: button.label.clone().filter(|_| config.show_labels),
                highlight: button.highlight(&light),
                disabled: !light.is_active(),
                action: button.service_call(&config.entity),
            })
            .collect();

        Some(Self { buttons })
    }
}
