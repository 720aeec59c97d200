use derive_more::derive::{AsRef, Display, From};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, From, AsRef, Display, Serialize, Deserialize)]
#[display("{_0} W")]
pub struct Watt(pub f64);

impl From<&Watt> for f64 {
    fn from(value: &Watt) -> Self {
        value.0
    }
}
