/// Text to codec-constant translators.
///
/// Each translator upper-cases its input, looks for a known pattern as a
/// substring and returns the matching constant. Unknown text never fails:
/// it maps to the translator's default so older or newer configs still load.
///
/// Pattern tables are ordered so that a pattern contained in another one
/// (VBR in CAPPED_VBR, DEFAULT_GOP in DEFAULT_GOP_B) is tried after it.
use std::fmt;
use tracing::warn;

use super::fourcc::{I420, find_format};
use super::types::{Codec, Entropy, GdrMode, GopMode, RcMode, Tier};

const CODEC_PATTERNS: &[(&str, Codec)] = &[
    ("AVC", Codec::Avc),
    ("H264", Codec::Avc),
    ("H.264", Codec::Avc),
    ("HEVC", Codec::Hevc),
    ("H265", Codec::Hevc),
    ("H.265", Codec::Hevc),
];

const RC_MODE_PATTERNS: &[(&str, RcMode)] = &[
    ("CAPPED_VBR", RcMode::CappedVbr),
    ("CBR", RcMode::Cbr),
    ("VBR", RcMode::Vbr),
    ("CONST_QP", RcMode::ConstQp),
    ("LOW_LATENCY", RcMode::LowLatency),
];

const GOP_MODE_PATTERNS: &[(&str, GopMode)] = &[
    ("DEFAULT_GOP_B", GopMode::BasicB),
    ("DEFAULT_GOP", GopMode::Basic),
    ("PYRAMIDAL_GOP_B", GopMode::PyramidalB),
    ("PYRAMIDAL_GOP", GopMode::Pyramidal),
    ("LOW_DELAY_P", GopMode::LowDelayP),
    ("LOW_DELAY_B", GopMode::LowDelayB),
    ("ADAPTIVE_GOP", GopMode::Adaptive),
];

const ENTROPY_PATTERNS: &[(&str, Entropy)] =
    &[("CAVLC", Entropy::Cavlc), ("CABAC", Entropy::Cabac)];

const GDR_MODE_PATTERNS: &[(&str, GdrMode)] = &[
    ("DISABLE", GdrMode::Disable),
    ("VERTICAL", GdrMode::Vertical),
    ("HORIZONTAL", GdrMode::Horizontal),
];

const TIER_PATTERNS: &[(&str, Tier)] = &[("MAIN", Tier::Main), ("HIGH", Tier::High)];

fn match_pattern<T: Copy + fmt::Display>(
    what: &'static str,
    text: &str,
    patterns: &[(&str, T)],
    default: T,
) -> T {
    let upper = text.to_uppercase();
    patterns
        .iter()
        .find(|(pattern, _)| upper.contains(pattern))
        .map(|(_, constant)| *constant)
        .unwrap_or_else(|| {
            warn!(what, value = text, %default, "unrecognized value, using default");
            default
        })
}

/// `AVC`, `H264`, `H.264` → AVC; `HEVC`, `H265`, `H.265` → HEVC; default AVC
pub fn parse_codec(text: &str) -> Codec {
    match_pattern("codec", text, CODEC_PATTERNS, Codec::Avc)
}

/// Rate control mode; default CBR
pub fn parse_rc_mode(text: &str) -> RcMode {
    match_pattern("rate control mode", text, RC_MODE_PATTERNS, RcMode::Cbr)
}

/// GOP mode from the `DEFAULT_GOP`/`PYRAMIDAL_GOP`/`LOW_DELAY_*`/`ADAPTIVE_GOP`
/// vocabulary; default BASIC
pub fn parse_gop_mode(text: &str) -> GopMode {
    match_pattern("GOP mode", text, GOP_MODE_PATTERNS, GopMode::Basic)
}

/// CAVLC or CABAC; default CABAC
pub fn parse_entropy(text: &str) -> Entropy {
    match_pattern("entropy mode", text, ENTROPY_PATTERNS, Entropy::Cabac)
}

/// Gradual decoder refresh; default DISABLE
pub fn parse_gdr_mode(text: &str) -> GdrMode {
    match_pattern("GDR mode", text, GDR_MODE_PATTERNS, GdrMode::Disable)
}

/// MAIN or HIGH; default MAIN
pub fn parse_tier(text: &str) -> Tier {
    match_pattern("tier", text, TIER_PATTERNS, Tier::Main)
}

/// Pixel format name to FourCC. Exact name match only; default I420.
pub fn parse_format(text: &str) -> u32 {
    match find_format(text) {
        Some(format) => format.fourcc,
        None => {
            warn!(value = text, "unknown pixel format, using I420");
            I420
        }
    }
}
