use serde::{Deserialize, Serialize};

use crate::entity::Availability;
use crate::format::{DataType, format_value_and_uom};
use crate::registry::HomeAssistantSnapshot;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub from: f64,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarCardConfig {
    pub entity: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub icon_color: Option<String>,
    #[serde(default = "default_min")]
    pub min: f64,
    #[serde(default = "default_max")]
    pub max: f64,
    #[serde(default)]
    pub segments: Vec<Segment>,
}

fn default_min() -> f64 {
    0.0
}

fn default_max() -> f64 {
    100.0
}

impl BarCardConfig {
    /// Colour of the segment with the highest `from` not above `value`, else the icon colour.
    pub fn severity_color(&self, value: f64) -> Option<&str> {
        self.segments
            .iter()
            .filter(|segment| value >= segment.from)
            .fold(None, |best: Option<&Segment>, segment| match best {
                Some(best) if best.from >= segment.from => Some(best),
                _ => Some(segment),
            })
            .map(|segment| segment.color.as_str())
            .or(self.icon_color.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarCardView {
    pub name: String,
    pub state_display: String,
    pub online: bool,
    //None for a state that is not a number
    pub value: Option<f64>,
    pub min: f64,
    pub max: f64,
    pub icon: Option<String>,
    pub icon_color: Option<String>,
    pub bar_color: Option<String>,
}

impl BarCardView {
    /// `None` when the host has no state for the configured entity.
    pub fn build(config: &BarCardConfig, snapshot: &HomeAssistantSnapshot) -> Option<Self> {
        let state = snapshot.state(&config.entity)?;
        let online = Availability::of(Some(&state.state)).is_online();

        let value = if online {
            state.state.trim().parse::<f64>().ok()
        } else {
            Some(0.0)
        };

        let state_display = match DataType::for_device_class(state.device_class()) {
            Some(data_type) if online => {
                format_value_and_uom(state.state.as_str(), data_type, false).formatted()
            }
            _ => state.state.clone(),
        };

        Some(Self {
            name: super::card_name(config.name.as_deref(), false, &config.entity, state, snapshot),
            state_display,
            online,
            value,
            min: config.min,
            max: config.max,
            icon: config.icon.clone(),
            icon_color: config.icon_color.clone(),
            bar_color: value
                .and_then(|v| config.severity_color(v))
                .or(config.icon_color.as_deref())
                .map(str::to_owned),
        })
    }
}
