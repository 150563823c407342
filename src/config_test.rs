use super::*;
use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key: &str| map.get(key).cloned()
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_matches_stock_page() {
    let config = SwitchConfig::default();
    assert_eq!(config.checkbox_selector, ".switch input");
    assert_eq!(config.on_button_id, "onButton");
    assert_eq!(config.off_button_id, "offButton");
    assert_eq!(config.bulb_property, "--light-bulb-color");
    assert_eq!(config.on_color, "#fff");
    assert_eq!(config.off_color, "#5a5a5a");
    assert_eq!(config.endpoint_base, "");
}

#[test]
fn empty_lookup_yields_default() {
    let config = SwitchConfig::from_lookup(|_| None).unwrap();
    assert_eq!(config, SwitchConfig::default());
}

#[test]
fn color_for_state() {
    let config = SwitchConfig::default();
    assert_eq!(config.color_for(SwitchState::On), "#fff");
    assert_eq!(config.color_for(SwitchState::Off), "#5a5a5a");
}

#[test]
fn endpoint_for_same_origin() {
    let config = SwitchConfig::default();
    assert_eq!(config.endpoint_for(SwitchState::On), "/on");
    assert_eq!(config.endpoint_for(SwitchState::Off), "/off");
}

// =============================================================
// Overrides
// =============================================================

#[test]
fn overrides_are_trimmed_and_applied() {
    let config = SwitchConfig::from_lookup(lookup_from(&[
        (KEY_CHECKBOX, "  #led-toggle "),
        (KEY_ON_BUTTON, "lightOn"),
        (KEY_BULB_PROPERTY, "--bulb"),
        (KEY_ON_COLOR, "yellow"),
    ]))
    .unwrap();
    assert_eq!(config.checkbox_selector, "#led-toggle");
    assert_eq!(config.on_button_id, "lightOn");
    assert_eq!(config.off_button_id, "offButton");
    assert_eq!(config.bulb_property, "--bulb");
    assert_eq!(config.on_color, "yellow");
    assert_eq!(config.off_color, "#5a5a5a");
}

#[test]
fn endpoint_trailing_slash_is_removed() {
    let config = SwitchConfig::from_lookup(lookup_from(&[(KEY_ENDPOINT, "http://192.168.4.1/")])).unwrap();
    assert_eq!(config.endpoint_base, "http://192.168.4.1");
    assert_eq!(config.endpoint_for(SwitchState::On), "http://192.168.4.1/on");
}

#[test]
fn blank_endpoint_means_same_origin() {
    let config = SwitchConfig::from_lookup(lookup_from(&[(KEY_ENDPOINT, "   ")])).unwrap();
    assert_eq!(config.endpoint_for(SwitchState::Off), "/off");
}

// =============================================================
// Errors
// =============================================================

#[test]
fn blank_value_is_rejected() {
    let err = SwitchConfig::from_lookup(lookup_from(&[(KEY_OFF_COLOR, " ")])).unwrap_err();
    assert_eq!(err, ConfigError::Blank { key: KEY_OFF_COLOR.to_owned() });
    assert_eq!(err.error_code(), "E_CONFIG_BLANK");
    assert!(!err.retryable());
}

#[test]
fn bulb_property_without_dashes_is_rejected() {
    let err = SwitchConfig::from_lookup(lookup_from(&[(KEY_BULB_PROPERTY, "color")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidProperty { value: "color".to_owned() });
    assert_eq!(err.error_code(), "E_CONFIG_INVALID_PROPERTY");
    assert!(err.to_string().contains("--"));
}
