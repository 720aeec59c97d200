mod availability;
mod entity_ref;
mod entity_type;
mod relation;

pub use availability::{Availability, UNAVAILABLE, UNKNOWN};
pub use entity_ref::EntityRef;
pub use entity_type::{EntityType, classify};
pub use relation::{DeviceEntities, related_entities};
