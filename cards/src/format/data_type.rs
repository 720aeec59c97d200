use serde::{Deserialize, Serialize};

/// How a numeric reading is scaled and suffixed for display.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DataType {
    Energy,
    Latency,
    Percentage,
    Power,
    Temperature,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UnitScale {
    Fixed(&'static str),
    //units ordered from smallest to largest, `step` apart
    Scaled {
        units: &'static [&'static str],
        step: f64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataTypeConfig {
    pub float_precision: usize,
    pub unit_separator: &'static str,
    pub scale: UnitScale,
}

impl DataTypeConfig {
    pub fn fixed_unit(&self) -> Option<&'static str> {
        match self.scale {
            UnitScale::Fixed(unit) => Some(unit),
            UnitScale::Scaled { .. } => None,
        }
    }
}

const ENERGY: DataTypeConfig = DataTypeConfig {
    float_precision: 2,
    unit_separator: " ",
    scale: UnitScale::Scaled {
        units: &["Wh", "kWh", "MWh", "GWh"],
        step: 1000.0,
    },
};

const LATENCY: DataTypeConfig = DataTypeConfig {
    float_precision: 0,
    unit_separator: "",
    scale: UnitScale::Fixed("ms"),
};

const PERCENTAGE: DataTypeConfig = DataTypeConfig {
    float_precision: 0,
    unit_separator: "",
    scale: UnitScale::Fixed("%"),
};

const POWER: DataTypeConfig = DataTypeConfig {
    float_precision: 2,
    unit_separator: " ",
    scale: UnitScale::Scaled {
        units: &["W", "kW", "MW", "GW"],
        step: 1000.0,
    },
};

const TEMPERATURE: DataTypeConfig = DataTypeConfig {
    float_precision: 1,
    unit_separator: "",
    scale: UnitScale::Fixed("°C"),
};

impl DataType {
    pub fn config(self) -> &'static DataTypeConfig {
        match self {
            DataType::Energy => &ENERGY,
            DataType::Latency => &LATENCY,
            DataType::Percentage => &PERCENTAGE,
            DataType::Power => &POWER,
            DataType::Temperature => &TEMPERATURE,
        }
    }

    /// Infers the data type from a `device_class` attribute.
    pub fn for_device_class(device_class: Option<&str>) -> Option<DataType> {
        match device_class? {
            "energy" => Some(DataType::Energy),
            "power" => Some(DataType::Power),
            "temperature" => Some(DataType::Temperature),
            "battery" | "humidity" => Some(DataType::Percentage),
            _ => None,
        }
    }
}
