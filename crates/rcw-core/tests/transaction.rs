use rcw_core::error::ValidationError;
use rcw_core::models::transaction::{
    AmountValue, CashTransaction, DATA_TYPE_CASH_PAYMENT, NewCashTransaction,
};
use rcw_core::transaction_id;

fn valid_body() -> serde_json::Value {
    serde_json::json!({
        "user_name": "alice",
        "amount_value": 12.5,
        "purpose": "groceries",
        "currency": "USD"
    })
}

#[test]
fn parses_complete_payload() {
    let body = serde_json::to_vec(&valid_body()).unwrap();
    let new = NewCashTransaction::from_json(&body).unwrap();

    assert_eq!(new.user_name, "alice");
    assert_eq!(new.purpose, "groceries");
    assert_eq!(new.currency, "USD");
    assert_eq!(
        new.amount_value,
        AmountValue::Number(serde_json::Number::from_f64(12.5).unwrap())
    );
}

#[test]
fn textual_amount_is_kept_verbatim() {
    let mut body = valid_body();
    body["amount_value"] = serde_json::json!("12.50");
    let new = NewCashTransaction::from_json(&serde_json::to_vec(&body).unwrap()).unwrap();
    assert_eq!(new.amount_value, AmountValue::Text("12.50".to_string()));
}

#[test]
fn missing_purpose_is_a_validation_error() {
    let mut body = valid_body();
    body.as_object_mut().unwrap().remove("purpose");
    let err = NewCashTransaction::from_json(&serde_json::to_vec(&body).unwrap()).unwrap_err();
    assert_eq!(err, ValidationError::MissingField("purpose"));
    assert_eq!(err.to_string(), "missing required field: purpose");
}

#[test]
fn null_and_blank_fields_count_as_missing() {
    let mut body = valid_body();
    body["user_name"] = serde_json::Value::Null;
    let err = NewCashTransaction::from_json(&serde_json::to_vec(&body).unwrap()).unwrap_err();
    assert_eq!(err, ValidationError::MissingField("user_name"));

    let mut body = valid_body();
    body["currency"] = serde_json::json!("   ");
    let err = NewCashTransaction::from_json(&serde_json::to_vec(&body).unwrap()).unwrap_err();
    assert_eq!(err, ValidationError::MissingField("currency"));
}

#[test]
fn legacy_amount_currency_key_is_not_accepted() {
    let mut body = valid_body();
    let fields = body.as_object_mut().unwrap();
    let currency = fields.remove("currency").unwrap();
    fields.insert("amount_currency".to_string(), currency);
    let err = NewCashTransaction::from_json(&serde_json::to_vec(&body).unwrap()).unwrap_err();
    assert_eq!(err, ValidationError::MissingField("currency"));
}

#[test]
fn wrong_types_are_rejected() {
    let mut body = valid_body();
    body["amount_value"] = serde_json::json!({"value": 1});
    let err = NewCashTransaction::from_json(&serde_json::to_vec(&body).unwrap()).unwrap_err();
    assert!(matches!(err, ValidationError::InvalidField { field: "amount_value", .. }));

    let mut body = valid_body();
    body["purpose"] = serde_json::json!(42);
    let err = NewCashTransaction::from_json(&serde_json::to_vec(&body).unwrap()).unwrap_err();
    assert!(matches!(err, ValidationError::InvalidField { field: "purpose", .. }));
}

#[test]
fn malformed_and_non_object_bodies_are_rejected() {
    assert!(matches!(
        NewCashTransaction::from_json(b"{not json"),
        Err(ValidationError::MalformedJson(_))
    ));
    assert!(matches!(
        NewCashTransaction::from_json(b""),
        Err(ValidationError::MalformedJson(_))
    ));
    assert_eq!(
        NewCashTransaction::from_json(b"[1, 2]"),
        Err(ValidationError::NotAnObject)
    );
}

#[test]
fn create_fills_server_side_fields() {
    let new = NewCashTransaction::from_json(&serde_json::to_vec(&valid_body()).unwrap()).unwrap();
    let before = jiff::Timestamp::now();
    let record = CashTransaction::create(new);

    assert!(transaction_id::is_valid(&record.id));
    assert_eq!(record.data_type, DATA_TYPE_CASH_PAYMENT);
    assert_eq!(record.amount_currency, "USD");
    assert!(record.create_time >= before);
}

#[test]
fn record_serializes_with_stored_field_names() {
    let new = NewCashTransaction::from_json(&serde_json::to_vec(&valid_body()).unwrap()).unwrap();
    let create_time: jiff::Timestamp = "2025-03-01T12:00:00Z".parse().unwrap();
    let record = new.into_record("C-ABCDEF123456".to_string(), create_time);

    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "id": "C-ABCDEF123456",
            "user_name": "alice",
            "amount_value": 12.5,
            "purpose": "groceries",
            "amount_currency": "USD",
            "data_type": "cash payment",
            "create_time": "2025-03-01T12:00:00Z"
        })
    );

    let back: CashTransaction = serde_json::from_value(json).unwrap();
    assert_eq!(back, record);
}
