mod data_type;
mod number;
mod value;

pub use data_type::{DataType, DataTypeConfig, UnitScale};
pub use value::{FormattedValue, NO_VALUE, Quantity, RawValue, format_quantity, format_value_and_uom};
