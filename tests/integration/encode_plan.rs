use crate::common::helpers::{fixture, parse};
use std::path::PathBuf;
use vcucfg::encode::{EncodeOverrides, EncodePlan, FrameLimit, PLAN_KEYS, PlanError};
use vcucfg::params::unmapped_entries;
use vcucfg::parser::Document;

#[test]
fn fixture_plan() {
    let doc = Document::from_file(fixture("hevc_1080p_cbr.cfg")).unwrap();
    let plan = EncodePlan::resolve(&doc, EncodeOverrides::default()).unwrap();

    assert_eq!(plan.input, PathBuf::from("input_1920x1080.nv12"));
    assert_eq!(plan.output, PathBuf::from("out.hevc"));
    assert_eq!(plan.first_picture, 0);
    assert_eq!(plan.max_picture, FrameLimit::Count(300));
}

#[test]
fn command_line_max_picture_all_overrides_file() {
    let doc = Document::from_file(fixture("hevc_1080p_cbr.cfg")).unwrap();
    let overrides = EncodeOverrides {
        max_picture: Some("all".to_string()),
        ..EncodeOverrides::default()
    };
    let plan = EncodePlan::resolve(&doc, overrides).unwrap();
    assert_eq!(plan.max_picture, FrameLimit::All);
}

#[test]
fn output_override_fills_missing_entry() {
    let doc = parse("[INPUT]\nYUVFile = clip.yuv\n");
    let overrides = EncodeOverrides {
        output: Some(PathBuf::from("clip.avc")),
        ..EncodeOverrides::default()
    };
    let plan = EncodePlan::resolve(&doc, overrides).unwrap();
    assert_eq!(plan.output, PathBuf::from("clip.avc"));
}

#[test]
fn missing_input_is_reported_first() {
    let err = EncodePlan::resolve(&parse(""), EncodeOverrides::default()).unwrap_err();
    assert_eq!(err, PlanError::MissingInput);
}

#[test]
fn only_plan_keys_remain_unmapped_in_fixture() {
    let doc = Document::from_file(fixture("hevc_1080p_cbr.cfg")).unwrap();
    for (section, key) in unmapped_entries(&doc) {
        assert!(
            PLAN_KEYS.contains(&(section.as_str(), key.as_str())),
            "[{}] {} unexpectedly unmapped",
            section,
            key
        );
    }
}
