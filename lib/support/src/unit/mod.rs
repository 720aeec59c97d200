mod degree_celsius;
mod milliseconds;
mod percent;
mod watt;
mod watt_hours;

pub use degree_celsius::DegreeCelsius;
pub use milliseconds::Milliseconds;
pub use percent::Percent;
pub use watt::Watt;
pub use watt_hours::WattHours;
