use std::fmt::Display;

use serde::Serialize;
use support::unit::{DegreeCelsius, Milliseconds, Percent, Watt, WattHours};

use super::number::{parse_float, to_fixed};
use super::{DataType, UnitScale};

/// Placeholder shown when a sensor has no reading.
pub const NO_VALUE: &str = "-";

#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Missing,
    Text(String),
    Number(f64),
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_owned())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::Text(value)
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Number(value)
    }
}

impl From<i32> for RawValue {
    fn from(value: i32) -> Self {
        RawValue::Number(f64::from(value))
    }
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        RawValue::Number(value as f64)
    }
}

impl<T: Into<RawValue>> From<Option<T>> for RawValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(RawValue::Missing, Into::into)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedValue {
    pub value: String,
    pub unit_separator: String,
    pub unit_of_measurement: String,
}

impl FormattedValue {
    fn new(value: impl Into<String>, unit_separator: &str, unit_of_measurement: &str) -> Self {
        Self {
            value: value.into(),
            unit_separator: unit_separator.to_owned(),
            unit_of_measurement: unit_of_measurement.to_owned(),
        }
    }

    /// Value and unit joined by the separator, blank parts left out.
    pub fn formatted(&self) -> String {
        [self.value.as_str(), self.unit_of_measurement.as_str()]
            .into_iter()
            .filter(|s| !s.trim().is_empty())
            .collect::<Vec<_>>()
            .join(&self.unit_separator)
    }
}

impl Display for FormattedValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.formatted())
    }
}

pub fn format_value_and_uom(
    value: impl Into<RawValue>,
    data_type: DataType,
    clamp_negative: bool,
) -> FormattedValue {
    let config = data_type.config();

    let number = match value.into() {
        RawValue::Missing => {
            return FormattedValue::new(
                NO_VALUE,
                config.unit_separator,
                config.fixed_unit().unwrap_or_default(),
            );
        }
        RawValue::Text(text) => match parse_float(&text) {
            Some(number) => number,
            None => {
                tracing::trace!(%data_type, value = %text, "Passing through non-numeric value");
                return FormattedValue::new(text, config.unit_separator, "");
            }
        },
        //no magnitude for NaN, so only a fixed unit survives
        RawValue::Number(number) if number.is_nan() => {
            return FormattedValue::new(
                to_fixed(number, 0),
                config.unit_separator,
                config.fixed_unit().unwrap_or_default(),
            );
        }
        RawValue::Number(number) => number,
    };

    let number = if clamp_negative && number < 0.0 { 0.0 } else { number };

    let (number, unit, precision) = match config.scale {
        UnitScale::Fixed(unit) => (number, unit, config.float_precision),
        UnitScale::Scaled { units, step } => {
            let index = magnitude_index(number, step, units.len());
            //the base unit is always shown without decimals
            let precision = if index == 0 { 0 } else { config.float_precision };
            (number / step.powi(index as i32), units[index], precision)
        }
    };

    FormattedValue::new(to_fixed(number, precision), config.unit_separator, unit)
}

fn magnitude_index(number: f64, step: f64, unit_count: usize) -> usize {
    if number == 0.0 {
        return 0;
    }

    let index = (number.abs().ln() / step.ln()).floor();
    index.clamp(0.0, (unit_count - 1) as f64) as usize
}

/// A typed reading that knows how it is displayed.
pub trait Quantity {
    const DATA_TYPE: DataType;

    fn value(&self) -> f64;
}

pub fn format_quantity<Q: Quantity>(quantity: &Q, clamp_negative: bool) -> FormattedValue {
    format_value_and_uom(quantity.value(), Q::DATA_TYPE, clamp_negative)
}

impl Quantity for Watt {
    const DATA_TYPE: DataType = DataType::Power;

    fn value(&self) -> f64 {
        self.into()
    }
}

impl Quantity for WattHours {
    const DATA_TYPE: DataType = DataType::Energy;

    fn value(&self) -> f64 {
        self.into()
    }
}

impl Quantity for DegreeCelsius {
    const DATA_TYPE: DataType = DataType::Temperature;

    fn value(&self) -> f64 {
        self.into()
    }
}

impl Quantity for Percent {
    const DATA_TYPE: DataType = DataType::Percentage;

    fn value(&self) -> f64 {
        self.into()
    }
}

impl Quantity for Milliseconds {
    const DATA_TYPE: DataType = DataType::Latency;

    fn value(&self) -> f64 {
        self.into()
    }
}
