use crate::common::helpers::{fixture, write_cfg};
use vcucfg::params::fourcc::NV12;
use vcucfg::params::{GdrMode, GopMode, RcMode, Tier, create_parameters};
use vcucfg::parser::{Document, Value};

#[test]
fn fixture_parses_every_section() {
    let doc = Document::from_file(fixture("hevc_1080p_cbr.cfg")).unwrap();

    let names: Vec<&str> = doc.sections().map(|s| s.name()).collect();
    assert_eq!(
        names,
        ["INPUT", "OUTPUT", "SETTINGS", "RATE_CONTROL", "GOP", "RUN"]
    );
    assert_eq!(
        doc.get("INPUT", "YUVFile"),
        Some(&Value::from("input_1920x1080.nv12"))
    );
    assert_eq!(doc.get("RATE_CONTROL", "BitRate"), Some(&Value::Integer(8_000_000)));
    assert_eq!(doc.get("RATE_CONTROL", "FillerData"), Some(&Value::Boolean(false)));
    assert_eq!(doc.get("SETTINGS", "Level"), Some(&Value::Float(5.1)));
}

#[test]
fn fixture_maps_to_parameters() {
    let doc = Document::from_file(fixture("hevc_1080p_cbr.cfg")).unwrap();
    let params = create_parameters(&doc).unwrap();

    assert_eq!(params.picture.width, 1920);
    assert_eq!(params.picture.height, 1080);
    assert_eq!(params.picture.framerate, 60);
    assert_eq!(params.picture.fourcc, NV12);

    assert_eq!(params.rc.mode, RcMode::Cbr);
    assert_eq!(params.rc.bitrate, 8_000_000);
    assert_eq!(params.rc.max_bitrate, 10_000_000);
    assert_eq!(params.rc.cpb_size, 1500);
    assert!(!params.rc.filler_data);

    assert_eq!(params.gop.mode, GopMode::LowDelayP);
    assert_eq!(params.gop.gop_length, 60);
    assert_eq!(params.gop.gdr_mode, GdrMode::Vertical);
    assert_eq!(params.gop.period_idr, 240);

    assert_eq!(params.profile.profile, "HEVC_MAIN");
    assert_eq!(params.profile.level, "5.1");
    assert_eq!(params.profile.tier, Tier::High);
}

#[test]
fn file_and_string_parsing_agree() {
    let text = "[INPUT]\nWidth = 640 # small\n";
    let (_dir, path) = write_cfg(text);
    assert_eq!(
        Document::from_file(&path).unwrap(),
        Document::parse_str(text).unwrap()
    );
}

#[test]
fn missing_file_error_names_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.cfg");
    let err = Document::from_file(&path).unwrap_err();
    let msg = format!("{:#}", err);
    assert!(msg.contains("Failed to read config file"));
    assert!(msg.contains("nope.cfg"));
}

#[test]
fn parse_error_in_file_is_reported_with_context() {
    let (_dir, path) = write_cfg("Width = 1920\n");
    let msg = format!("{:#}", Document::from_file(&path).unwrap_err());
    assert!(msg.contains("Failed to parse config file"));
    assert!(msg.contains("line 1"));
}
