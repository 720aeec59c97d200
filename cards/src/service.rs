use serde::Serialize;
use serde_json::{Map, Value};

/// A service call handed back to the host, e.g. `light.turn_on`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceCall {
    pub domain: String,
    pub service: String,
    pub data: Map<String, Value>,
}

impl ServiceCall {
    pub fn new(domain: &str, service: &str) -> Self {
        Self {
            domain: domain.to_owned(),
            service: service.to_owned(),
            data: Map::new(),
        }
    }

    pub fn for_entity(domain: &str, service: &str, entity_id: &str) -> Self {
        Self::new(domain, service).with("entity_id", entity_id)
    }

    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.data.insert(key.to_owned(), value.into());
        self
    }

    pub fn with_opt(self, key: &str, value: Option<impl Into<Value>>) -> Self {
        match value {
            Some(value) => self.with(key, value),
            None => self,
        }
    }
}
