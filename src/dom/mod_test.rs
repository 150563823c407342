use super::*;

#[test]
fn missing_element_names_selector() {
    let err = DomError::MissingElement { selector: "#onButton".to_owned() };
    assert_eq!(err.to_string(), "missing element: #onButton");
    assert_eq!(err.error_code(), "E_MISSING_ELEMENT");
    assert!(!err.retryable());
}

#[test]
fn js_error_code() {
    let err = DomError::Js("TypeError".to_owned());
    assert_eq!(err.error_code(), "E_JS");
    assert!(err.to_string().contains("TypeError"));
}
