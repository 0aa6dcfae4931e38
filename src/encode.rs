//! Encode job resolution.
//!
//! Combines command-line overrides with the `[INPUT]`, `[OUTPUT]` and `[RUN]`
//! sections of a configuration into the file names and picture range an
//! encoder run would use. The run itself belongs to the codec binding.

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

use crate::parser::{Document, Value};

/// Config entries read by [`EncodePlan::resolve`] rather than the parameter schema
pub const PLAN_KEYS: &[(&str, &str)] = &[
    ("INPUT", "YUVFile"),
    ("OUTPUT", "BitstreamFile"),
    ("RUN", "FirstPicture"),
    ("RUN", "MaxPicture"),
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    #[error("no input file specified; use --input or set YUVFile in [INPUT]")]
    MissingInput,

    #[error("no output file specified; use --output or set BitstreamFile in [OUTPUT]")]
    MissingOutput,

    #[error("invalid {key} value {value:?}: expected a non-negative picture count or ALL")]
    InvalidPictureCount { key: &'static str, value: String },
}

/// How many pictures to encode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameLimit {
    All,
    Count(u32),
}

impl FrameLimit {
    /// Parse `ALL` (any case) or a picture count. A count of 0 means all.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        if text.eq_ignore_ascii_case("ALL") {
            return Some(FrameLimit::All);
        }
        text.parse::<u32>().ok().map(Self::from_count)
    }

    fn from_count(count: u32) -> Self {
        if count == 0 {
            FrameLimit::All
        } else {
            FrameLimit::Count(count)
        }
    }

    /// Value for the codec's max-picture argument, where 0 means unlimited
    pub fn as_codec_arg(self) -> u32 {
        match self {
            FrameLimit::All => 0,
            FrameLimit::Count(n) => n,
        }
    }
}

impl fmt::Display for FrameLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameLimit::All => f.write_str("ALL"),
            FrameLimit::Count(n) => write!(f, "{}", n),
        }
    }
}

/// Command-line values that take precedence over the config file
#[derive(Debug, Clone, Default)]
pub struct EncodeOverrides {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub first_picture: Option<u32>,
    pub max_picture: Option<String>,
}

/// Resolved files and picture range for one encoder run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EncodePlan {
    pub input: PathBuf,
    pub output: PathBuf,
    pub first_picture: u32,
    pub max_picture: FrameLimit,
}

impl EncodePlan {
    pub fn resolve(document: &Document, overrides: EncodeOverrides) -> Result<Self, PlanError> {
        let input = overrides
            .input
            .or_else(|| path_entry(document, "INPUT", "YUVFile"))
            .ok_or(PlanError::MissingInput)?;

        let output = overrides
            .output
            .or_else(|| path_entry(document, "OUTPUT", "BitstreamFile"))
            .ok_or(PlanError::MissingOutput)?;

        let first_picture = match overrides.first_picture {
            Some(first) => first,
            None => match document.get("RUN", "FirstPicture") {
                Some(value) => picture_count("FirstPicture", value)?,
                None => 0,
            },
        };

        let max_picture = match overrides.max_picture {
            Some(text) => FrameLimit::parse(&text).ok_or(PlanError::InvalidPictureCount {
                key: "MaxPicture",
                value: text,
            })?,
            None => match document.get("RUN", "MaxPicture") {
                Some(value) => max_picture_entry(value)?,
                None => FrameLimit::All,
            },
        };

        Ok(Self {
            input,
            output,
            first_picture,
            max_picture,
        })
    }
}

fn path_entry(document: &Document, section: &str, key: &str) -> Option<PathBuf> {
    document
        .get(section, key)
        .map(|value| PathBuf::from(value.to_string()))
        .filter(|path| !path.as_os_str().is_empty())
}

fn picture_count(key: &'static str, value: &Value) -> Result<u32, PlanError> {
    value
        .as_i64()
        .and_then(|n| u32::try_from(n).ok())
        .ok_or_else(|| PlanError::InvalidPictureCount {
            key,
            value: value.to_string(),
        })
}

fn max_picture_entry(value: &Value) -> Result<FrameLimit, PlanError> {
    match value {
        Value::String(text) => {
            FrameLimit::parse(text).ok_or_else(|| PlanError::InvalidPictureCount {
                key: "MaxPicture",
                value: text.clone(),
            })
        }
        other => picture_count("MaxPicture", other).map(FrameLimit::from_count),
    }
}
