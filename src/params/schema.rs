/// Static mapping from configuration entries to encoder parameters.
///
/// Each [`SchemaRule`] names a section, the keys it answers to (aliases in
/// precedence order) and a setter. Building parameters is a walk over
/// [`SCHEMA`]: when a rule's key is present its setter overrides the field,
/// otherwise the field keeps its default.
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use super::translate::{
    parse_codec, parse_entropy, parse_format, parse_gdr_mode, parse_gop_mode, parse_rc_mode,
    parse_tier,
};
use super::types::{EncoderParams, GdrMode};
use crate::parser::{Document, Value};

/// Errors raised while applying a document to encoder parameters
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MappingError {
    #[error("[{section}] {key}: expected an integer, got {value:?}")]
    NotAnInteger {
        section: String,
        key: String,
        value: String,
    },

    #[error("[{section}] {key}: {value} does not fit in a 32-bit integer")]
    OutOfRange {
        section: String,
        key: String,
        value: i64,
    },
}

/// How a rule converts its value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Integer,
    Boolean,
    Text,
    Enum,
    Fourcc,
}

/// A matched configuration entry handed to a rule's setter
#[derive(Debug, Clone, Copy)]
pub struct Entry<'a> {
    pub section: &'static str,
    pub key: &'a str,
    pub value: &'a Value,
}

impl Entry<'_> {
    /// Integer conversion: floats truncate, booleans are 0/1, text fails
    pub fn int(&self) -> Result<i32, MappingError> {
        let wide = self
            .value
            .as_i64()
            .ok_or_else(|| MappingError::NotAnInteger {
                section: self.section.to_string(),
                key: self.key.to_string(),
                value: self.value.to_string(),
            })?;

        i32::try_from(wide).map_err(|_| MappingError::OutOfRange {
            section: self.section.to_string(),
            key: self.key.to_string(),
            value: wide,
        })
    }

    pub fn flag(&self) -> bool {
        self.value.is_truthy()
    }

    pub fn text(&self) -> String {
        self.value.to_string()
    }
}

type Setter = fn(&mut EncoderParams, &Entry<'_>) -> Result<(), MappingError>;

/// One `(section, keys) → field` mapping
#[derive(Serialize)]
pub struct SchemaRule {
    pub section: &'static str,

    /// Accepted keys; the first one present in the section wins
    pub keys: &'static [&'static str],

    /// Destination field, as `sub_object.field`
    pub field: &'static str,

    pub kind: FieldKind,

    #[serde(skip)]
    setter: Setter,
}

impl SchemaRule {
    /// First of this rule's keys present in the document, with its value
    pub fn lookup<'d>(&self, document: &'d Document) -> Option<(&'static str, &'d Value)> {
        let section = document.section(self.section)?;
        self.keys
            .iter()
            .find_map(|key| section.get(key).map(|value| (*key, value)))
    }

    /// Apply the rule if the document carries one of its keys.
    /// Returns whether a field was written.
    pub fn apply(
        &self,
        document: &Document,
        params: &mut EncoderParams,
    ) -> Result<bool, MappingError> {
        let Some((key, value)) = self.lookup(document) else {
            return Ok(false);
        };

        let entry = Entry {
            section: self.section,
            key,
            value,
        };
        (self.setter)(params, &entry)?;

        debug!(
            section = self.section,
            key,
            field = self.field,
            %value,
            "mapped"
        );
        Ok(true)
    }
}

impl std::fmt::Debug for SchemaRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchemaRule")
            .field("section", &self.section)
            .field("keys", &self.keys)
            .field("field", &self.field)
            .field("kind", &self.kind)
            .finish()
    }
}

macro_rules! rule {
    ($section:literal, [$($key:literal),+], $field:literal, $kind:ident, $setter:expr) => {
        SchemaRule {
            section: $section,
            keys: &[$($key),+],
            field: $field,
            kind: FieldKind::$kind,
            setter: $setter,
        }
    };
}

/// The complete mapping table
pub static SCHEMA: &[SchemaRule] = &[
    // INPUT
    rule!("INPUT", ["Width"], "picture.width", Integer, |p, e| {
        p.picture.width = e.int()?;
        Ok(())
    }),
    rule!("INPUT", ["Height"], "picture.height", Integer, |p, e| {
        p.picture.height = e.int()?;
        Ok(())
    }),
    rule!("INPUT", ["FrameRate"], "picture.framerate", Integer, |p, e| {
        p.picture.framerate = e.int()?;
        Ok(())
    }),
    rule!("INPUT", ["Format"], "picture.fourcc", Fourcc, |p, e| {
        p.picture.fourcc = parse_format(&e.text());
        Ok(())
    }),
    // RATE_CONTROL
    rule!("RATE_CONTROL", ["RateCtrlMode", "Mode"], "rc.mode", Enum, |p, e| {
        p.rc.mode = parse_rc_mode(&e.text());
        Ok(())
    }),
    rule!("RATE_CONTROL", ["BitRate", "Bitrate"], "rc.bitrate", Integer, |p, e| {
        p.rc.bitrate = e.int()?;
        Ok(())
    }),
    rule!("RATE_CONTROL", ["MaxBitRate", "MaxBitrate"], "rc.max_bitrate", Integer, |p, e| {
        p.rc.max_bitrate = e.int()?;
        Ok(())
    }),
    rule!("RATE_CONTROL", ["CPBSize"], "rc.cpb_size", Integer, |p, e| {
        p.rc.cpb_size = e.int()?;
        Ok(())
    }),
    rule!("RATE_CONTROL", ["InitialDelay"], "rc.initial_delay", Integer, |p, e| {
        p.rc.initial_delay = e.int()?;
        Ok(())
    }),
    rule!("RATE_CONTROL", ["Entropy"], "rc.entropy", Enum, |p, e| {
        p.rc.entropy = parse_entropy(&e.text());
        Ok(())
    }),
    rule!("RATE_CONTROL", ["FillerData"], "rc.filler_data", Boolean, |p, e| {
        p.rc.filler_data = e.flag();
        Ok(())
    }),
    rule!("RATE_CONTROL", ["MaxQualityTarget"], "rc.max_quality_target", Integer, |p, e| {
        p.rc.max_quality_target = e.int()?;
        Ok(())
    }),
    rule!("RATE_CONTROL", ["MaxPictureSizeI"], "rc.max_picture_size_i", Integer, |p, e| {
        p.rc.max_picture_size_i = e.int()?;
        Ok(())
    }),
    rule!("RATE_CONTROL", ["MaxPictureSizeP"], "rc.max_picture_size_p", Integer, |p, e| {
        p.rc.max_picture_size_p = e.int()?;
        Ok(())
    }),
    rule!("RATE_CONTROL", ["MaxPictureSizeB"], "rc.max_picture_size_b", Integer, |p, e| {
        p.rc.max_picture_size_b = e.int()?;
        Ok(())
    }),
    rule!("RATE_CONTROL", ["SkipFrame"], "rc.skip_frame", Boolean, |p, e| {
        p.rc.skip_frame = e.flag();
        Ok(())
    }),
    rule!("RATE_CONTROL", ["MaxSkip"], "rc.max_skip", Integer, |p, e| {
        p.rc.max_skip = e.int()?;
        Ok(())
    }),
    // GOP
    rule!("GOP", ["GopCtrlMode", "Mode"], "gop.mode", Enum, |p, e| {
        p.gop.mode = parse_gop_mode(&e.text());
        Ok(())
    }),
    rule!("GOP", ["Gop.Length"], "gop.gop_length", Integer, |p, e| {
        p.gop.gop_length = e.int()?;
        Ok(())
    }),
    rule!("GOP", ["Gop.NumB"], "gop.nr_b_frames", Integer, |p, e| {
        p.gop.nr_b_frames = e.int()?;
        Ok(())
    }),
    rule!("GOP", ["GDRMode"], "gop.gdr_mode", Enum, |p, e| {
        // DISABLE reaches us as a boolean
        p.gop.gdr_mode = match e.value {
            Value::Boolean(false) => GdrMode::Disable,
            _ => parse_gdr_mode(&e.text()),
        };
        Ok(())
    }),
    rule!("GOP", ["LongTermRef"], "gop.long_term_ref", Boolean, |p, e| {
        p.gop.long_term_ref = e.flag();
        Ok(())
    }),
    rule!("GOP", ["LongTermFreq"], "gop.long_term_freq", Integer, |p, e| {
        p.gop.long_term_freq = e.int()?;
        Ok(())
    }),
    rule!("GOP", ["PeriodIDR"], "gop.period_idr", Integer, |p, e| {
        p.gop.period_idr = e.int()?;
        Ok(())
    }),
    // SETTINGS
    rule!("SETTINGS", ["Codec"], "picture.codec", Enum, |p, e| {
        p.picture.codec = parse_codec(&e.text());
        Ok(())
    }),
    rule!("SETTINGS", ["Profile"], "profile.profile", Text, |p, e| {
        p.profile.profile = e.text();
        Ok(())
    }),
    rule!("SETTINGS", ["Level"], "profile.level", Text, |p, e| {
        p.profile.level = e.text();
        Ok(())
    }),
    rule!("SETTINGS", ["Tier"], "profile.tier", Enum, |p, e| {
        p.profile.tier = parse_tier(&e.text());
        Ok(())
    }),
    // MOTION_VECTOR
    rule!("MOTION_VECTOR", ["FrameIndex"], "motion_vector.frame_index", Integer, |p, e| {
        p.motion_vector.frame_index = e.int()?;
        Ok(())
    }),
    rule!("MOTION_VECTOR", ["GMVectorX"], "motion_vector.gm_vector_x", Integer, |p, e| {
        p.motion_vector.gm_vector_x = e.int()?;
        Ok(())
    }),
    rule!("MOTION_VECTOR", ["GMVectorY"], "motion_vector.gm_vector_y", Integer, |p, e| {
        p.motion_vector.gm_vector_y = e.int()?;
        Ok(())
    }),
];

/// Build fresh encoder parameters from a parsed document.
///
/// Starts from the codec defaults and overrides every field whose key is
/// present. Nothing is required.
pub fn create_parameters(document: &Document) -> Result<EncoderParams, MappingError> {
    let mut params = EncoderParams::default();
    apply_document(document, &mut params)?;
    Ok(params)
}

/// Apply a document on top of existing parameters.
///
/// Returns how many fields were written. On error, fields mapped before the
/// failing rule have already been written; use [`create_parameters`] when
/// that matters.
pub fn apply_document(
    document: &Document,
    params: &mut EncoderParams,
) -> Result<usize, MappingError> {
    let mut applied = 0;
    for rule in SCHEMA {
        if rule.apply(document, params)? {
            applied += 1;
        }
    }
    debug!(applied, "applied document to encoder parameters");
    Ok(applied)
}

/// Entries present in the document that no rule consumes, as `(section, key)`.
///
/// Alias keys shadowed by a higher-precedence key count as unmapped.
pub fn unmapped_entries(document: &Document) -> Vec<(String, String)> {
    let consumed: Vec<(&str, &str)> = SCHEMA
        .iter()
        .filter_map(|rule| rule.lookup(document).map(|(key, _)| (rule.section, key)))
        .collect();

    document
        .sections()
        .flat_map(|section| {
            section
                .iter()
                .map(move |(key, _)| (section.name(), key))
        })
        .filter(|entry| !consumed.contains(entry))
        .map(|(section, key)| (section.to_string(), key.to_string()))
        .collect()
}

/// Known sections and their keys
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SectionInfo {
    pub name: &'static str,
    pub keys: &'static [&'static str],
}

static SUPPORTED_SECTIONS: &[SectionInfo] = &[
    SectionInfo {
        name: "INPUT",
        keys: &["YUVFile", "Width", "Height", "Format", "FrameRate"],
    },
    SectionInfo {
        name: "OUTPUT",
        keys: &["BitstreamFile", "RecFile", "Width", "Height"],
    },
    SectionInfo {
        name: "GOP",
        keys: &[
            "GopCtrlMode",
            "Gop.Length",
            "Gop.NumB",
            "GDRMode",
            "LongTermRef",
            "LongTermFreq",
            "PeriodIDR",
        ],
    },
    SectionInfo {
        name: "RATE_CONTROL",
        keys: &[
            "RateCtrlMode",
            "BitRate",
            "MaxBitRate",
            "FrameRate",
            "CPBSize",
            "InitialDelay",
            "Entropy",
            "FillerData",
            "MaxQualityTarget",
            "MaxPictureSizeI",
            "MaxPictureSizeP",
            "MaxPictureSizeB",
            "SkipFrame",
            "MaxSkip",
        ],
    },
    SectionInfo {
        name: "SETTINGS",
        keys: &["Codec", "Profile", "Level", "ChromaMode", "BitDepth", "Tier"],
    },
    SectionInfo {
        name: "MOTION_VECTOR",
        keys: &["FrameIndex", "GMVectorX", "GMVectorY"],
    },
    SectionInfo {
        name: "HARDWARE",
        keys: &["LookAheadDepth", "NumSlices", "EnableConstrainedIntraPrediction"],
    },
    SectionInfo {
        name: "QUALITY",
        keys: &["QP", "MinQP", "MaxQP", "QualityLevel"],
    },
    SectionInfo {
        name: "RUN",
        keys: &["Loop", "FirstPicture", "MaxPicture", "RateCtrlStats"],
    },
];

static SUPPORTED_FORMATS: &[&str] = &[
    "Y800", "Y010", "Y012", "I420", "NV12", "P010", "P012", "NV16", "P210", "P212", "I444",
    "I4AL", "I4CL", "HEVC_MAIN", "AVC_MAIN",
];

/// Sections and keys the tooling knows about, mapped or not
pub fn supported_sections() -> &'static [SectionInfo] {
    SUPPORTED_SECTIONS
}

/// Format names accepted in configs: pixel formats plus profile shorthands
pub fn supported_formats() -> &'static [&'static str] {
    SUPPORTED_FORMATS
}

/// The mapping table
pub fn schema() -> &'static [SchemaRule] {
    SCHEMA
}
