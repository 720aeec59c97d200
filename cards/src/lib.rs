pub mod card;
pub mod entity;
mod error;
pub mod format;
pub mod light;
pub mod registry;
pub mod service;
mod settings;
pub mod update;

pub use crate::error::{Error, Result};
pub use crate::settings::Settings;
