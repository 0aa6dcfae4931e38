use crate::common::helpers::parse;
use vcucfg::parser::{Document, ParseError, Value, parse_value};

#[test]
fn parsing_twice_gives_equal_documents() {
    let text = "[INPUT]\nWidth = 1920\n[GOP]\nGop.Length = 30\nMode = DEFAULT_GOP\n";
    assert_eq!(parse(text), parse(text));
}

#[test]
fn unit_scaling() {
    assert_eq!(parse_value("1K"), Value::Integer(1000));
    assert_eq!(parse_value("1Ki"), Value::Integer(1024));
    assert_eq!(parse_value("1.5M"), Value::Integer(1_500_000));
    assert_eq!(parse_value("2Gi"), Value::Integer(2 * 1024 * 1024 * 1024));
}

#[test]
fn sign_handling() {
    assert_eq!(parse_value("-10"), Value::Integer(-10));
    assert_eq!(parse_value("+7"), Value::Integer(7));
    assert_eq!(parse_value("-0.5"), Value::Float(-0.5));
}

#[test]
fn boolean_vocabulary() {
    for word in ["enable", "YES", "True"] {
        assert_eq!(parse_value(word), Value::Boolean(true), "{word}");
    }
    for word in ["DISABLE", "no", "false"] {
        assert_eq!(parse_value(word), Value::Boolean(false), "{word}");
    }
}

#[test]
fn digits_are_numbers_not_booleans() {
    assert_eq!(parse_value("1"), Value::Integer(1));
    assert_eq!(parse_value("0"), Value::Integer(0));
}

#[test]
fn fallback_to_text() {
    assert_eq!(parse_value("hello"), Value::from("hello"));
    assert_eq!(parse_value(""), Value::from(""));
    assert_eq!(parse_value("12abc"), Value::from("12abc"));
}

#[test]
fn repeated_sections_merge() {
    let doc = parse("[INPUT]\nWidth = 1280\nHeight = 720\n[GOP]\n[input]\nWidth = 1920\n");
    assert_eq!(doc.len(), 2);

    let input = doc.section("INPUT").unwrap();
    assert_eq!(input.len(), 2);
    assert_eq!(input.get("Width"), Some(&Value::Integer(1920)));
    assert_eq!(input.get("Height"), Some(&Value::Integer(720)));
}

#[test]
fn trailing_comments_are_stripped() {
    let doc = parse("[INPUT]\nWidth = 1920 # pixels\n");
    assert_eq!(doc.get("INPUT", "Width"), Some(&Value::Integer(1920)));
}

#[test]
fn assignment_before_any_section_fails() {
    let err = Document::parse_str("Width = 1920").unwrap_err();
    assert_eq!(
        err,
        ParseError::OutsideSection {
            line: 1,
            key: "Width".to_string()
        }
    );
}

#[test]
fn error_reports_the_offending_line() {
    let err = Document::parse_str("# header comment\n\nBitRate = 4M\n[INPUT]\n").unwrap_err();
    assert!(err.to_string().starts_with("line 3"));
}

#[test]
fn value_keeps_everything_after_first_equals() {
    let doc = parse("[SETTINGS]\nName = a=b\n");
    assert_eq!(doc.get("SETTINGS", "Name"), Some(&Value::from("a=b")));
}

#[test]
fn out_of_range_literal_stays_text() {
    assert_eq!(
        parse_value("-9223372036854775808"),
        Value::from("-9223372036854775808")
    );
    assert_eq!(
        parse_value("99999999999999999999"),
        Value::from("99999999999999999999")
    );
}
