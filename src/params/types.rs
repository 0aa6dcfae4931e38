/// Encoder parameter types consumed by the VCU codec binding.
///
/// These mirror the codec's initialization structs field for field. Enum
/// discriminants match the codec's integer constants so a binding can pass
/// them through with `as i32`.
use serde::Serialize;
use std::fmt;

use super::fourcc::NV12;

/// Codec family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
#[repr(i32)]
pub enum Codec {
    Avc = 0,
    Hevc = 1,
    Jpeg = 2,
}

/// Rate control strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(i32)]
pub enum RcMode {
    ConstQp = 0,
    Cbr = 1,
    Vbr = 2,
    LowLatency = 3,
    CappedVbr = 4,
}

/// Entropy coding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
#[repr(i32)]
pub enum Entropy {
    Cavlc = 0,
    Cabac = 1,
}

/// Group of pictures structure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(i32)]
pub enum GopMode {
    Basic = 2,
    BasicB = 3,
    Pyramidal = 4,
    PyramidalB = 5,
    LowDelayP = 8,
    LowDelayB = 9,
    Adaptive = 16,
}

/// Gradual decoder refresh scheme (low-delay GOP modes only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
#[repr(i32)]
pub enum GdrMode {
    Disable = 0,
    Vertical = 2,
    Horizontal = 3,
}

/// HEVC tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
#[repr(i32)]
pub enum Tier {
    Main = 0,
    High = 1,
}

macro_rules! codec_constant {
    ($ty:ident { $($variant:ident => $name:literal),+ $(,)? }) => {
        impl $ty {
            /// Integer constant understood by the codec
            pub fn as_i32(self) -> i32 {
                self as i32
            }

            /// Constant name as written in configuration files
            pub fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name),+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

codec_constant!(Codec { Avc => "AVC", Hevc => "HEVC", Jpeg => "JPEG" });
codec_constant!(RcMode {
    ConstQp => "CONST_QP",
    Cbr => "CBR",
    Vbr => "VBR",
    LowLatency => "LOW_LATENCY",
    CappedVbr => "CAPPED_VBR",
});
codec_constant!(Entropy { Cavlc => "CAVLC", Cabac => "CABAC" });
codec_constant!(GopMode {
    Basic => "BASIC",
    BasicB => "BASIC_B",
    Pyramidal => "PYRAMIDAL",
    PyramidalB => "PYRAMIDAL_B",
    LowDelayP => "LOW_DELAY_P",
    LowDelayB => "LOW_DELAY_B",
    Adaptive => "ADAPTIVE",
});
codec_constant!(GdrMode {
    Disable => "DISABLE",
    Vertical => "VERTICAL",
    Horizontal => "HORIZONTAL",
});
codec_constant!(Tier { Main => "MAIN", High => "HIGH" });

/// Picture format and geometry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PictureSettings {
    pub codec: Codec,

    /// Raw input pixel format as a packed FourCC
    pub fourcc: u32,

    pub width: i32,
    pub height: i32,
    pub framerate: i32,
}

impl Default for PictureSettings {
    fn default() -> Self {
        Self {
            codec: Codec::Hevc,
            fourcc: NV12,
            width: 1280,
            height: 720,
            framerate: 30,
        }
    }
}

/// Rate control settings
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RcSettings {
    pub mode: RcMode,
    pub entropy: Entropy,

    /// Target bitrate
    pub bitrate: i32,

    /// Peak bitrate (VBR and CAPPED_VBR)
    pub max_bitrate: i32,

    /// Coded picture buffer size in milliseconds
    pub cpb_size: i32,

    /// Initial removal delay in milliseconds
    pub initial_delay: i32,

    /// Pad the stream with filler data in CBR mode
    pub filler_data: bool,

    /// 0-20, only used by CAPPED_VBR
    pub max_quality_target: i32,

    /// Per-type picture size caps in kBytes, 0 = unlimited
    pub max_picture_size_i: i32,
    pub max_picture_size_p: i32,
    pub max_picture_size_b: i32,

    /// Replace a picture with skip blocks when the CPB would overflow
    pub skip_frame: bool,

    /// Maximum consecutive skipped pictures, -1 = unlimited
    pub max_skip: i32,
}

impl Default for RcSettings {
    fn default() -> Self {
        Self {
            mode: RcMode::Vbr,
            entropy: Entropy::Cabac,
            bitrate: 4000,
            max_bitrate: 4000,
            cpb_size: 3000,
            initial_delay: 1000,
            filler_data: true,
            max_quality_target: 14,
            max_picture_size_i: 0,
            max_picture_size_p: 0,
            max_picture_size_b: 0,
            skip_frame: false,
            max_skip: -1,
        }
    }
}

/// Group of pictures settings
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GopSettings {
    pub mode: GopMode,
    pub gdr_mode: GdrMode,

    /// Distance between two I-frames (0 and 1 mean intra-only)
    pub gop_length: i32,

    /// B-frames between two P-frames
    pub nr_b_frames: i32,

    pub long_term_ref: bool,
    pub long_term_freq: i32,

    /// Frames between IDR pictures: -1 disables, 0 makes only the first frame IDR
    pub period_idr: i32,
}

impl Default for GopSettings {
    fn default() -> Self {
        Self {
            mode: GopMode::Basic,
            gdr_mode: GdrMode::Disable,
            gop_length: 30,
            nr_b_frames: 0,
            long_term_ref: false,
            long_term_freq: 0,
            period_idr: 0,
        }
    }
}

/// Profile, level and tier. Profile and level stay text; the firmware parses them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileSettings {
    pub profile: String,
    pub level: String,
    pub tier: Tier,
}

impl Default for ProfileSettings {
    fn default() -> Self {
        Self {
            profile: "MAIN".to_string(),
            level: "5.2".to_string(),
            tier: Tier::Main,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GlobalMotionVector {
    /// -1 = not set
    pub frame_index: i32,
    pub gm_vector_x: i32,
    pub gm_vector_y: i32,
}

impl Default for GlobalMotionVector {
    fn default() -> Self {
        Self {
            frame_index: -1,
            gm_vector_x: 0,
            gm_vector_y: 0,
        }
    }
}

/// Everything the codec needs to initialize an encoder
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct EncoderParams {
    pub picture: PictureSettings,
    pub rc: RcSettings,
    pub gop: GopSettings,
    pub profile: ProfileSettings,
    pub motion_vector: GlobalMotionVector,
}
