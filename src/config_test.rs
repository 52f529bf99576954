#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn default_config_is_valid() {
    let config = ClockConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.class_prefix, "mh");
    assert_eq!(config.inner_ring_ratio, DEFAULT_INNER_RING_RATIO);
    assert_eq!(config.picked_event, "picked");
}

#[test]
fn from_json_empty_object_uses_defaults() {
    assert_eq!(ClockConfig::from_json("{}").unwrap(), ClockConfig::default());
}

#[test]
fn from_json_overrides_fields() {
    let config =
        ClockConfig::from_json(r#"{"class_prefix":"dp","inner_ring_ratio":0.5,"picked_event":"timepicked"}"#).unwrap();
    assert_eq!(config.class_prefix, "dp");
    assert_eq!(config.inner_ring_ratio, 0.5);
    assert_eq!(config.picked_event, "timepicked");
    assert_eq!(config.class_names().clock, "dp-clock");
}

#[test]
fn from_json_rejects_malformed_json() {
    assert!(matches!(ClockConfig::from_json("{"), Err(ConfigError::Parse(_))));
}

#[test]
fn from_json_rejects_unknown_keys() {
    assert!(matches!(ClockConfig::from_json(r#"{"prefix":"x"}"#), Err(ConfigError::Parse(_))));
}

#[test]
fn from_json_rejects_ratio_out_of_range() {
    for ratio in ["0", "1", "1.5", "-0.2"] {
        let raw = format!(r#"{{"inner_ring_ratio":{ratio}}}"#);
        assert!(matches!(ClockConfig::from_json(&raw), Err(ConfigError::Invalid(_))), "ratio {ratio}");
    }
}

#[test]
fn from_json_rejects_bad_prefix() {
    for prefix in ["", "a b", "x.y", "<script>"] {
        let raw = format!(r#"{{"class_prefix":{prefix:?}}}"#);
        assert!(matches!(ClockConfig::from_json(&raw), Err(ConfigError::Invalid(_))), "prefix {prefix:?}");
    }
}

#[test]
fn from_json_rejects_blank_event() {
    assert!(matches!(
        ClockConfig::from_json(r#"{"picked_event":"  "}"#),
        Err(ConfigError::Invalid(_))
    ));
}

#[test]
fn log_level_accepts_names_in_any_case() {
    assert_eq!(log_level("debug").unwrap(), log::Level::Debug);
    assert_eq!(log_level("WARN").unwrap(), log::Level::Warn);
    assert_eq!(log_level(" trace ").unwrap(), log::Level::Trace);
}

#[test]
fn log_level_rejects_unknown_names() {
    let err = log_level("loud").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(ref msg) if msg.contains("\"loud\"")));
}
