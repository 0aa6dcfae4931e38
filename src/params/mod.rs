/// Encoder parameter model and the schema that fills it from a config document.
///
/// The codec binding itself lives elsewhere; this module only knows the shape
/// of its initialization parameters, their defaults and constants.
pub mod fourcc;
pub mod schema;
pub mod translate;
pub mod types;

pub use fourcc::{PIXEL_FORMATS, PixelFormat, find_format, fourcc, fourcc_to_string};
pub use schema::{
    FieldKind, MappingError, SchemaRule, SectionInfo, apply_document, create_parameters, schema,
    supported_formats, supported_sections, unmapped_entries,
};
pub use translate::{
    parse_codec, parse_entropy, parse_format, parse_gdr_mode, parse_gop_mode, parse_rc_mode,
    parse_tier,
};
pub use types::{
    Codec, EncoderParams, Entropy, GdrMode, GlobalMotionVector, GopMode, GopSettings,
    PictureSettings, ProfileSettings, RcMode, RcSettings, Tier,
};
