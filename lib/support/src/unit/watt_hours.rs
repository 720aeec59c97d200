use derive_more::derive::{AsRef, Display, From};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, From, AsRef, Display, Serialize, Deserialize)]
#[display("{_0} Wh")]
pub struct WattHours(pub f64);

impl WattHours {
    pub fn from_kwh(kwh: f64) -> Self {
        Self(kwh * 1000.0)
    }
}

impl From<&WattHours> for f64 {
    fn from(value: &WattHours) -> Self {
        value.0
    }
}
