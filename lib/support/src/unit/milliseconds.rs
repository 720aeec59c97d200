use derive_more::derive::{AsRef, Display, From};
use serde::{Deserialize, Serialize};

//Round-trip latency as reported by ping-style sensors
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, From, AsRef, Display, Serialize, Deserialize)]
#[display("{_0} ms")]
pub struct Milliseconds(pub f64);

impl From<&Milliseconds> for f64 {
    fn from(value: &Milliseconds) -> Self {
        value.0
    }
}
