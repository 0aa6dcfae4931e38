use crate::common::helpers::parse;
use vcucfg::params::fourcc::{I420, NV12, P010};
use vcucfg::params::{
    Codec, EncoderParams, Entropy, GopMode, MappingError, RcMode, apply_document,
    create_parameters, schema, supported_sections, unmapped_entries,
};

#[test]
fn end_to_end_scenario() {
    let doc = parse(
        "[INPUT]\nWidth = 1920\nHeight = 1080\n[RATE_CONTROL]\nMode = CBR\nBitRate = 5M\n\
         [GOP]\nGop.Length = 30\n",
    );
    let params = create_parameters(&doc).unwrap();

    assert_eq!(params.picture.width, 1920);
    assert_eq!(params.picture.height, 1080);
    assert_eq!(params.rc.mode, RcMode::Cbr);
    assert_eq!(params.rc.bitrate, 5_000_000);
    assert_eq!(params.gop.gop_length, 30);

    let defaults = EncoderParams::default();
    assert_eq!(params.picture.fourcc, defaults.picture.fourcc);
    assert_eq!(params.rc.max_bitrate, defaults.rc.max_bitrate);
    assert_eq!(params.gop.mode, defaults.gop.mode);
    assert_eq!(params.profile, defaults.profile);
    assert_eq!(params.motion_vector, defaults.motion_vector);
}

#[test]
fn empty_document_gives_defaults() {
    let params = create_parameters(&parse("")).unwrap();
    assert_eq!(params, EncoderParams::default());
}

#[test]
fn unknown_format_falls_back_to_i420() {
    let params = create_parameters(&parse("[INPUT]\nFormat = BOGUS\n")).unwrap();
    assert_eq!(params.picture.fourcc, I420);
    assert_ne!(params.picture.fourcc, NV12);
}

#[test]
fn ten_bit_format() {
    let params = create_parameters(&parse("[INPUT]\nFormat = p010\n")).unwrap();
    assert_eq!(params.picture.fourcc, P010);
}

#[test]
fn capped_vbr_is_not_plain_vbr() {
    let params = create_parameters(&parse("[RATE_CONTROL]\nMode = CAPPED_VBR\n")).unwrap();
    assert_eq!(params.rc.mode, RcMode::CappedVbr);
}

#[test]
fn b_frame_gop_modes() {
    let params = create_parameters(&parse("[GOP]\nGopCtrlMode = DEFAULT_GOP_B\n")).unwrap();
    assert_eq!(params.gop.mode, GopMode::BasicB);
    let params = create_parameters(&parse("[GOP]\nMode = PYRAMIDAL_GOP_B\n")).unwrap();
    assert_eq!(params.gop.mode, GopMode::PyramidalB);
}

#[test]
fn codec_and_entropy_from_settings() {
    let doc = parse("[SETTINGS]\nCodec = H.264\n[RATE_CONTROL]\nEntropy = MODE_CAVLC\n");
    let params = create_parameters(&doc).unwrap();
    assert_eq!(params.picture.codec, Codec::Avc);
    assert_eq!(params.rc.entropy, Entropy::Cavlc);
}

#[test]
fn boolean_fields_accept_numbers_and_words() {
    let doc = parse("[RATE_CONTROL]\nFillerData = 0\nSkipFrame = ENABLE\n[GOP]\nLongTermRef = 1\n");
    let params = create_parameters(&doc).unwrap();
    assert!(!params.rc.filler_data);
    assert!(params.rc.skip_frame);
    assert!(params.gop.long_term_ref);
}

#[test]
fn text_in_integer_field_is_an_error() {
    let err = create_parameters(&parse("[INPUT]\nWidth = wide\n")).unwrap_err();
    assert!(matches!(err, MappingError::NotAnInteger { ref key, .. } if key == "Width"));
}

#[test]
fn apply_document_layers_over_existing_params() {
    let mut params = create_parameters(&parse("[INPUT]\nWidth = 3840\nHeight = 2160\n")).unwrap();
    let applied = apply_document(&parse("[INPUT]\nHeight = 1600\n"), &mut params).unwrap();
    assert_eq!(applied, 1);
    assert_eq!(params.picture.width, 3840);
    assert_eq!(params.picture.height, 1600);
}

#[test]
fn unmapped_entries_are_listed() {
    let doc = parse("[INPUT]\nWidth = 1\nColour = red\n[EXTRA]\nFoo = 1\n");
    assert_eq!(
        unmapped_entries(&doc),
        vec![
            ("INPUT".to_string(), "Colour".to_string()),
            ("EXTRA".to_string(), "Foo".to_string()),
        ]
    );
}

#[test]
fn every_rule_primary_key_is_listed() {
    let sections = supported_sections();
    for rule in schema() {
        let info = sections
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(rule.section))
            .unwrap_or_else(|| panic!("section {} not listed", rule.section));
        let primary = rule.keys[0];
        assert!(info.keys.contains(&primary), "{}.{} not listed", rule.section, primary);
    }
}
