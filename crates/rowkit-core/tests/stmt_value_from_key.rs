use rowkit_core::stmt::Value;

#[test]
fn decimal_key_is_integer() {
    assert_eq!(Value::from_key("42"), Value::I64(42));
    assert_eq!(Value::from_key("-7"), Value::I64(-7));
}

#[test]
fn padded_decimal_key_is_integer() {
    assert_eq!(Value::from_key(" 9 "), Value::I64(9));
}

#[test]
fn non_numeric_key_stays_text() {
    assert_eq!(Value::from_key("abc-1"), Value::String("abc-1".into()));
    assert_eq!(Value::from_key("1.5"), Value::String("1.5".into()));
}

#[test]
fn option_none_is_null() {
    assert!(Value::from(None::<&str>).is_null());
    assert_eq!(Value::from(Some("x")), Value::String("x".into()));
}
