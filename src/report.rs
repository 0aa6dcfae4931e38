// Human-readable and machine-readable output for documents, parameters and plans

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

use crate::encode::EncodePlan;
use crate::params::{EncoderParams, PIXEL_FORMATS, SchemaRule, SectionInfo, fourcc_to_string};
use crate::parser::Document;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Toml,
}

/// Render any serializable value as JSON or TOML
pub fn render_structured<T: Serialize>(value: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(value).context("Failed to serialize as JSON")
        }
        OutputFormat::Toml => toml::to_string_pretty(value).context("Failed to serialize as TOML"),
        OutputFormat::Text => anyhow::bail!("text output has no structured form"),
    }
}

/// Document as INI text, each entry annotated with its inferred type
pub fn render_document(document: &Document) -> String {
    let mut out = String::new();
    for (index, section) in document.sections().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        let _ = writeln!(out, "[{}]", section.name());
        for (key, value) in section.iter() {
            let _ = writeln!(out, "{} = {}  # {}", key, value, value.type_name());
        }
    }
    out
}

fn on_off(flag: bool) -> &'static str {
    if flag { "on" } else { "off" }
}

/// Full parameter listing grouped by sub-object
pub fn render_params(params: &EncoderParams) -> String {
    let pic = &params.picture;
    let rc = &params.rc;
    let gop = &params.gop;
    let profile = &params.profile;
    let mv = &params.motion_vector;

    let mut out = String::new();
    let _ = writeln!(out, "Picture");
    let _ = writeln!(out, "  Codec:        {}", pic.codec);
    let _ = writeln!(
        out,
        "  Format:       {} (0x{:08X})",
        fourcc_to_string(pic.fourcc),
        pic.fourcc
    );
    let _ = writeln!(out, "  Size:         {}x{} @ {} fps", pic.width, pic.height, pic.framerate);

    let _ = writeln!(out, "Rate control");
    let _ = writeln!(out, "  Mode:         {}", rc.mode);
    let _ = writeln!(out, "  Entropy:      {}", rc.entropy);
    let _ = writeln!(out, "  Bitrate:      {} (max {})", rc.bitrate, rc.max_bitrate);
    let _ = writeln!(
        out,
        "  CPB:          {} ms, initial delay {} ms",
        rc.cpb_size, rc.initial_delay
    );
    let _ = writeln!(out, "  Filler data:  {}", on_off(rc.filler_data));
    let _ = writeln!(out, "  Max quality:  {}", rc.max_quality_target);
    let _ = writeln!(
        out,
        "  Max pic size: I={} P={} B={}",
        rc.max_picture_size_i, rc.max_picture_size_p, rc.max_picture_size_b
    );
    let _ = writeln!(
        out,
        "  Skip frames:  {} (max {})",
        on_off(rc.skip_frame),
        rc.max_skip
    );

    let _ = writeln!(out, "GOP");
    let _ = writeln!(out, "  Mode:         {}", gop.mode);
    let _ = writeln!(out, "  Length:       {}, B-frames {}", gop.gop_length, gop.nr_b_frames);
    let _ = writeln!(out, "  GDR:          {}", gop.gdr_mode);
    let _ = writeln!(
        out,
        "  Long-term:    {} (every {})",
        on_off(gop.long_term_ref),
        gop.long_term_freq
    );
    let _ = writeln!(out, "  IDR period:   {}", gop.period_idr);

    let _ = writeln!(out, "Profile");
    let _ = writeln!(
        out,
        "  {} level {} tier {}",
        profile.profile, profile.level, profile.tier
    );

    let _ = writeln!(out, "Motion vector");
    let _ = writeln!(
        out,
        "  Frame {}: ({}, {})",
        mv.frame_index, mv.gm_vector_x, mv.gm_vector_y
    );
    out
}

/// Short encode summary
pub fn render_plan(plan: &EncodePlan, params: &EncoderParams) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "VCU Encoder");
    let _ = writeln!(out, "  Input:   {}", plan.input.display());
    let _ = writeln!(out, "  Output:  {}", plan.output.display());
    let _ = writeln!(
        out,
        "  Size:    {}x{}",
        params.picture.width, params.picture.height
    );
    let _ = writeln!(out, "  Codec:   {}", params.picture.codec);
    let _ = writeln!(out, "  Bitrate: {} kbps", params.rc.bitrate / 1000);
    let _ = writeln!(out, "  GOP:     {}", params.gop.gop_length);
    let _ = writeln!(
        out,
        "  Range:   first={}, max={}",
        plan.first_picture, plan.max_picture
    );
    out
}

/// Known sections plus the rules that map them, for structured output
#[derive(Debug, Serialize)]
pub struct SchemaReport<'a> {
    pub sections: &'a [SectionInfo],
    pub rules: &'a [SchemaRule],
}

pub fn render_sections(sections: &[SectionInfo]) -> String {
    let mut out = String::new();
    for section in sections {
        let _ = writeln!(out, "[{}]", section.name);
        for key in section.keys {
            let _ = writeln!(out, "  {}", key);
        }
    }
    out
}

/// Pixel formats with their FourCC codes, then any extra accepted names
pub fn render_formats(names: &[&str]) -> String {
    let mut out = String::new();
    for format in PIXEL_FORMATS {
        let _ = writeln!(
            out,
            "{:<10} 0x{:08X}  {}",
            format.name, format.fourcc, format.description
        );
    }
    for name in names {
        if !PIXEL_FORMATS.iter().any(|f| f.name == *name) {
            let _ = writeln!(out, "{:<10} (profile shorthand)", name);
        }
    }
    out
}
