use serde::{Deserialize, Serialize};

use crate::entity::Availability;
use crate::registry::EntityState;
use crate::service::ServiceCall;

const LIGHT_DOMAIN: &str = "light";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightButton {
    #[serde(flatten)]
    pub action: LightButtonAction,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum LightButtonAction {
    Effect {
        effect: String,
        #[serde(default)]
        brightness_pct: Option<u8>,
    },
    Toggle,
    TurnOn {
        #[serde(default)]
        brightness_pct: Option<u8>,
        #[serde(default)]
        kelvin: Option<u32>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ButtonHighlight {
    Primary,
    Accent,
    Green,
}

/// The parts of a light's state that buttons compare against.
#[derive(Debug, Clone, PartialEq)]
pub struct LightState {
    pub availability: Availability,
    pub is_on: bool,
    pub brightness_pct: Option<u8>,
    pub effect: Option<String>,
    //mireds
    pub color_temp: Option<f64>,
}

impl LightState {
    pub fn from_state(state: &EntityState) -> Self {
        Self {
            availability: Availability::of(Some(&state.state)),
            is_on: state.state != "off",
            brightness_pct: state.attribute_f64("brightness").map(brightness_to_pct),
            effect: state.attribute_str("effect").map(str::to_owned),
            color_temp: state.attribute_f64("color_temp"),
        }
    }

    pub fn is_active(&self) -> bool {
        self.availability.is_online() && self.is_on
    }
}

//0..=255 to percent, never below 1% while a brightness is reported
fn brightness_to_pct(brightness: f64) -> u8 {
    (brightness * 100.0 / 255.0).round().clamp(1.0, 100.0) as u8
}

impl LightButton {
    pub fn service_call(&self, entity_id: &str) -> ServiceCall {
        match &self.action {
            LightButtonAction::Effect {
                effect,
                brightness_pct,
            } => ServiceCall::for_entity(LIGHT_DOMAIN, "turn_on", entity_id)
                .with("effect", effect.as_str())
                .with_opt("brightness_pct", non_zero(*brightness_pct)),
            LightButtonAction::TurnOn {
                brightness_pct,
                kelvin,
            } => ServiceCall::for_entity(LIGHT_DOMAIN, "turn_on", entity_id)
                .with_opt("brightness_pct", non_zero(*brightness_pct))
                .with_opt("kelvin", non_zero(*kelvin)),
            LightButtonAction::Toggle => ServiceCall::for_entity(LIGHT_DOMAIN, "toggle", entity_id),
        }
    }

    pub fn highlight(&self, light: &LightState) -> ButtonHighlight {
        let brightness_matches = |pct: &Option<u8>| pct.is_none() || *pct == light.brightness_pct;

        match &self.action {
            LightButtonAction::Toggle if light.is_active() => ButtonHighlight::Accent,
            LightButtonAction::Effect {
                effect,
                brightness_pct,
            } if brightness_matches(brightness_pct) && light.effect.as_ref() == Some(effect) => {
                ButtonHighlight::Green
            }
            LightButtonAction::TurnOn {
                brightness_pct,
                kelvin,
            } if brightness_matches(brightness_pct) && kelvin_matches(*kelvin, light.color_temp) => {
                ButtonHighlight::Green
            }
            _ => ButtonHighlight::Primary,
        }
    }
}

fn kelvin_matches(kelvin: Option<u32>, color_temp: Option<f64>) -> bool {
    match kelvin {
        None => true,
        Some(0) => false,
        Some(kelvin) => Some((1_000_000 / kelvin) as f64) == color_temp,
    }
}

fn non_zero<T: Default + PartialEq>(value: Option<T>) -> Option<T> {
    value.filter(|v| *v != T::default())
}
