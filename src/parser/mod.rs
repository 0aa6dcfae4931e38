// Configuration text parsing - values and documents

pub mod document;
pub mod value;

pub use document::{Document, ParseError, Section};
pub use value::{UNITS, Value, parse_value};
