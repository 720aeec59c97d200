use derive_more::derive::{AsRef, Display, From};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, From, AsRef, Display, Serialize, Deserialize)]
#[display("{_0} %")]
pub struct Percent(pub f64);

impl From<&Percent> for f64 {
    fn from(value: &Percent) -> Self {
        value.0
    }
}
