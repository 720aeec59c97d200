pub mod ext;
pub mod time;
pub mod unit;
