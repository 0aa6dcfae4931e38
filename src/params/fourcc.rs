//! FourCC pixel format codes.
//!
//! A FourCC packs four ASCII characters little-endian into a `u32`, so
//! `"NV12"` becomes `'N' | 'V' << 8 | '1' << 16 | '2' << 24`.

use serde::Serialize;

/// Pack four bytes into a FourCC code
pub const fn fourcc_code(code: [u8; 4]) -> u32 {
    u32::from_le_bytes(code)
}

pub const Y800: u32 = fourcc_code(*b"Y800");
pub const Y010: u32 = fourcc_code(*b"Y010");
pub const Y012: u32 = fourcc_code(*b"Y012");
pub const I420: u32 = fourcc_code(*b"I420");
pub const NV12: u32 = fourcc_code(*b"NV12");
pub const P010: u32 = fourcc_code(*b"P010");
pub const P012: u32 = fourcc_code(*b"P012");
pub const NV16: u32 = fourcc_code(*b"NV16");
pub const P210: u32 = fourcc_code(*b"P210");
pub const P212: u32 = fourcc_code(*b"P212");
pub const I444: u32 = fourcc_code(*b"I444");
pub const I4AL: u32 = fourcc_code(*b"I4AL");
pub const I4CL: u32 = fourcc_code(*b"I4CL");

/// A raw pixel format the encoder accepts as input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PixelFormat {
    pub name: &'static str,
    pub fourcc: u32,
    pub description: &'static str,
}

/// Input formats understood by `[INPUT] Format`
pub static PIXEL_FORMATS: &[PixelFormat] = &[
    PixelFormat {
        name: "Y800",
        fourcc: Y800,
        description: "8-bit monochrome",
    },
    PixelFormat {
        name: "Y010",
        fourcc: Y010,
        description: "10-bit monochrome",
    },
    PixelFormat {
        name: "Y012",
        fourcc: Y012,
        description: "12-bit monochrome",
    },
    PixelFormat {
        name: "I420",
        fourcc: I420,
        description: "8-bit 4:2:0 planar",
    },
    PixelFormat {
        name: "NV12",
        fourcc: NV12,
        description: "8-bit 4:2:0 semi-planar",
    },
    PixelFormat {
        name: "P010",
        fourcc: P010,
        description: "10-bit 4:2:0 semi-planar",
    },
    PixelFormat {
        name: "P012",
        fourcc: P012,
        description: "12-bit 4:2:0 semi-planar",
    },
    PixelFormat {
        name: "NV16",
        fourcc: NV16,
        description: "8-bit 4:2:2 semi-planar",
    },
    PixelFormat {
        name: "P210",
        fourcc: P210,
        description: "10-bit 4:2:2 semi-planar",
    },
    PixelFormat {
        name: "P212",
        fourcc: P212,
        description: "12-bit 4:2:2 semi-planar",
    },
    PixelFormat {
        name: "I444",
        fourcc: I444,
        description: "8-bit 4:4:4 planar",
    },
    PixelFormat {
        name: "I4AL",
        fourcc: I4AL,
        description: "10-bit 4:2:0 planar",
    },
    PixelFormat {
        name: "I4CL",
        fourcc: I4CL,
        description: "12-bit 4:2:0 planar",
    },
];

/// Find a pixel format by name (case-insensitive, exact)
pub fn find_format(name: &str) -> Option<&'static PixelFormat> {
    PIXEL_FORMATS
        .iter()
        .find(|f| f.name.eq_ignore_ascii_case(name))
}

/// Pack a string into a FourCC, space-padding or truncating to four bytes
pub fn fourcc(text: &str) -> u32 {
    let mut code = [b' '; 4];
    for (slot, byte) in code.iter_mut().zip(text.bytes()) {
        *slot = byte;
    }
    fourcc_code(code)
}

/// Unpack a FourCC into its four characters
pub fn fourcc_to_string(code: u32) -> String {
    code.to_le_bytes().iter().map(|&b| char::from(b)).collect()
}
