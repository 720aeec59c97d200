mod bar;
mod device;
mod light_buttons;
mod sensor;
mod update;

pub use bar::{BarCardConfig, BarCardView, Segment};
pub use device::{DeviceCardConfig, DeviceCardView, RelatedEntityView};
pub use light_buttons::{LightButtonView, LightButtonsCardConfig, LightButtonsCardView};
pub use sensor::{FormattedSensorCardConfig, SensorCardView};
pub use update::{UpdateCardConfig, UpdateCardView};

use serde::Deserialize;

use crate::registry::{EntityState, HomeAssistantSnapshot};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum CardConfig {
    FormattedSensor(FormattedSensorCardConfig),
    Device(DeviceCardConfig),
    Update(UpdateCardConfig),
    LightButtons(LightButtonsCardConfig),
    Bar(BarCardConfig),
}

impl CardConfig {
    pub fn entity(&self) -> &str {
        match self {
            CardConfig::FormattedSensor(c) => &c.entity,
            CardConfig::Device(c) => &c.entity,
            CardConfig::Update(c) => &c.entity,
            CardConfig::LightButtons(c) => &c.entity,
            CardConfig::Bar(c) => &c.entity,
        }
    }
}

//config name, then the device name if wanted, then the friendly name
fn card_name(
    configured: Option<&str>,
    use_device_name: bool,
    entity_id: &str,
    state: &EntityState,
    snapshot: &HomeAssistantSnapshot,
) -> String {
    let device_name = || {
        use_device_name
            .then(|| snapshot.device_of(entity_id).and_then(|d| d.display_name()))
            .flatten()
    };

    configured
        .filter(|name| !name.is_empty())
        .or_else(device_name)
        .or_else(|| state.friendly_name())
        .unwrap_or_default()
        .to_owned()
}
