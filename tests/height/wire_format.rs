//! Wire shape of the outbound cross-document message.

use iframe_sizer::HeightMessage;

#[test]
fn test_payload_field_name() {
    let msg = HeightMessage { iframe_height: 842 };
    let value = serde_json::to_value(msg).unwrap();
    assert_eq!(value, serde_json::json!({ "iframeHeight": 842 }));
}

#[test]
fn test_payload_is_flat_json() {
    let msg = HeightMessage { iframe_height: 0 };
    assert_eq!(
        serde_json::to_string(&msg).unwrap(),
        r#"{"iframeHeight":0}"#
    );
}
