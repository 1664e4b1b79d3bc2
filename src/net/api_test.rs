use super::*;
use crate::state::notice::{NoticeLevel, NoticeState};

// =============================================================
// Envelope interpretation
// =============================================================

#[test]
fn success_envelope_yields_the_data_payload() {
    let body = r#"{"code":200,"data":{"token":"t"}}"#;
    let data = parse_envelope(body, "/api/x").expect("success envelope");
    assert_eq!(data, serde_json::json!({"token":"t"}));
}

#[test]
fn success_envelope_without_data_yields_null() {
    let body = r#"{"code":200}"#;
    let data = parse_envelope(body, "/api/x").expect("success envelope");
    assert!(data.is_null());
}

#[test]
fn failure_envelope_carries_message_code_and_url() {
    let body = r#"{"code":403,"message":"password wrong"}"#;
    let err = parse_envelope(body, "/api/auth/login").unwrap_err();
    assert_eq!(
        err,
        ApiError::Failure {
            message: "password wrong".to_owned(),
            code: 403,
            url: "/api/auth/login".to_owned(),
        }
    );
}

#[test]
fn failure_envelope_without_message_gets_a_placeholder() {
    let body = r#"{"code":500}"#;
    let err = parse_envelope(body, "/api/x").unwrap_err();
    match err {
        ApiError::Failure { message, code, .. } => {
            assert_eq!(code, 500);
            assert_eq!(message, "request failed");
        }
        ApiError::Transport(_) => panic!("expected a failure variant"),
    }
}

#[test]
fn non_json_body_is_a_transport_error() {
    let err = parse_envelope("<html>bad gateway</html>", "/api/x").unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
}

// =============================================================
// Payload decoding
// =============================================================

#[test]
fn login_payload_decodes_into_a_token_record() {
    let data = serde_json::json!({
        "token": "tok-9",
        "expire": "2030-01-01T00:00:00+00:00",
        "username": "bob",
        "id": "u-9",
    });
    let record: crate::session::TokenRecord = decode(data, LOGIN_PATH).expect("login payload");
    assert_eq!(record.token, "tok-9");
    assert_eq!(record.username, "bob");
}

#[test]
fn order_history_decodes_pairs_and_integer_keys() {
    let data = serde_json::json!({
        "paidList": [{
            "businessName": "Golden Wok",
            "totalPrice": "32.50",
            "deliveryPrice": 3.0,
            "foodList": {
                "7": {"first": "Dumplings", "second": {"first": 2, "second": 12.5}}
            }
        }],
        "unpaidList": []
    });
    let orders: crate::net::types::AllOrderList = decode(data, ORDERS_PATH).expect("order payload");
    assert_eq!(orders.paid_list.len(), 1);
    assert!(orders.unpaid_list.is_empty());

    let order = &orders.paid_list[0];
    assert_eq!(order.business_name, "Golden Wok");
    let entry = order.food_list.get(&7).expect("food entry");
    assert_eq!(entry.first, "Dumplings");
    assert_eq!(entry.second.first, 2);
}

#[test]
fn malformed_payload_is_a_transport_error() {
    let data = serde_json::json!({"token": 12});
    let err = decode::<crate::session::TokenRecord>(data, LOGIN_PATH).unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
}

// =============================================================
// Reporting policy
// =============================================================

#[test]
fn failure_reports_the_server_message_as_a_warning() {
    let mut notices = NoticeState::default();
    report_api_error(
        &mut notices,
        &ApiError::Failure {
            message: "insufficient balance".to_owned(),
            code: 402,
            url: "/api/orders/pay".to_owned(),
        },
    );
    assert_eq!(notices.notices.len(), 1);
    assert_eq!(notices.notices[0].level, NoticeLevel::Warning);
    assert_eq!(notices.notices[0].text, "insufficient balance");
}

#[test]
fn transport_reports_a_generic_error_notice() {
    let mut notices = NoticeState::default();
    report_api_error(
        &mut notices,
        &ApiError::Transport("connection refused".to_owned()),
    );
    assert_eq!(notices.notices.len(), 1);
    assert_eq!(notices.notices[0].level, NoticeLevel::Error);
    // The raw transport detail never reaches the user.
    assert!(!notices.notices[0].text.contains("connection refused"));
}
