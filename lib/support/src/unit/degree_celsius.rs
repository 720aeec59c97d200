use derive_more::derive::{AsRef, Display, From};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, From, AsRef, Display, Serialize, Deserialize)]
#[display("{_0} °C")]
pub struct DegreeCelsius(pub f64);

impl From<&DegreeCelsius> for f64 {
    fn from(value: &DegreeCelsius) -> Self {
        value.0
    }
}
