//! Token compatibility with URLs already published by the web front-end.

use coursehub_id::legacy::{self, LegacyDecoded, LegacyValue};
use coursehub_id::{
    course_detail_url, decode, encode, id_from_url, is_encoded_id, CourseId, IdError,
};

#[test]
fn roundtrip_first_million_ids() {
    for id in 0..=1_000_000u64 {
        assert_eq!(decode(&encode(id)), Ok(id), "id {id}");
    }
}

#[test]
fn strict_and_legacy_tokens_agree_for_nonzero_ids() {
    for id in (1..=1_000_000u64).step_by(997) {
        let token = encode(id);
        assert_eq!(legacy::encode_id(&LegacyValue::from(id)), token);
        assert_eq!(
            legacy::decode_id(&LegacyValue::from(token.as_str())),
            LegacyDecoded::Number(id as f64)
        );
    }
}

#[test]
fn every_token_is_prefix_plus_three_or_more_digits() {
    for id in [0, 1, 35, 45_655, 45_656, 1_000_000, u64::MAX] {
        let token = encode(id);
        let body = token.strip_prefix("CR").expect("prefix");
        assert!(body.len() >= 3, "{token}");
        assert!(
            body.bytes().all(|b| b.is_ascii_digit() || b.is_ascii_uppercase()),
            "{token}"
        );
    }
}

#[test]
fn zero_boundary() {
    // The front-end could not encode zero; the strict codec can.
    assert_eq!(legacy::encode_id(&LegacyValue::from(0u64)), "");
    assert_eq!(encode(0), "CR0RS");
    assert_eq!(decode("CR0RS"), Ok(0));
}

#[test]
fn small_ids_are_padded_to_three_digits() {
    assert_eq!(encode(1), "CR0RT");
    for id in 1..=35 {
        let token = encode(id);
        assert_eq!(token.len(), 5, "{token}");
        assert!(token.starts_with("CR0"), "{token}");
    }
}

#[test]
fn format_guard() {
    assert!(is_encoded_id("CRAB1"));
    assert!(!is_encoded_id("AB123"));
    assert!(!is_encoded_id(""));
    assert!(!legacy::is_encoded_id(&LegacyValue::Number(42.0)));
}

#[test]
fn malformed_input() {
    assert!(legacy::decode_id(&LegacyValue::from("not-a-token")).is_nan());
    assert!(decode("not-a-token").unwrap_err().is_prefix_error());
    assert_eq!(
        legacy::decode_id(&LegacyValue::from("not-a-token")).into_result(),
        Err(IdError::UnparsableBody {
            body: "NaN".to_string()
        })
    );
}

#[test]
fn course_url_helper() {
    let url = course_detail_url(5);
    assert_eq!(url, format!("/course/{}", encode(5)));
    assert_eq!(id_from_url(&url), Ok(5));

    let legacy_url = legacy::generate_course_detail_url(&LegacyValue::Number(5.0));
    assert_eq!(legacy_url, url);
    assert_eq!(legacy::extract_id_from_url(&legacy_url), LegacyDecoded::Number(5.0));
}

#[test]
fn typed_ids_accept_published_tokens() {
    let id: CourseId = "CR0RX".parse().unwrap();
    assert_eq!(id.value(), 5);
    assert_eq!(id.path(), "/course/CR0RX");
}
