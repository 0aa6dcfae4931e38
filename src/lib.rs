//! Configuration parsing for VCU AVC/HEVC hardware encoders.
//!
//! A `.cfg` file is read into a [`Document`] of typed values, then mapped
//! onto [`EncoderParams`] through a static schema table.

pub mod config;
pub mod encode;
pub mod params;
pub mod parser;
pub mod report;

pub use encode::{EncodeOverrides, EncodePlan, FrameLimit, PLAN_KEYS, PlanError};
pub use params::{EncoderParams, MappingError, create_parameters};
pub use parser::{Document, ParseError, Value, parse_value};
