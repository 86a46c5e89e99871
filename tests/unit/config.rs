use super::*;

const MINIMAL: &str = r#"{
    "layout": { "intro_extent": 2, "outro_extent": 2, "per_item_extent": 0.5, "item_count": 3 },
    "gallery": [
        { "id": "record", "order_index": 0 },
        { "id": "earth", "order_index": 1 },
        { "id": "structure", "order_index": 2 }
    ]
}"#;

#[test]
fn minimal_config_builds_with_default_curves() {
    let cfg = ReelConfig::from_json_str(MINIMAL).unwrap();
    assert_eq!(cfg.curves, CurveConfig::default());
    let (resolver, gallery) = cfg.build().unwrap();
    assert_eq!(gallery.len(), 3);
    assert_eq!(resolver.layout().item_count(), 3);
}

#[test]
fn item_count_must_match_gallery() {
    let mut cfg = ReelConfig::from_json_str(MINIMAL).unwrap();
    cfg.gallery.pop();
    assert!(matches!(cfg.validate(), Err(ReelError::Configuration(_))));
}

#[test]
fn parse_errors_are_configuration_errors() {
    let err = ReelConfig::from_json_str("{ not json").unwrap_err();
    assert!(matches!(err, ReelError::Configuration(_)));
    assert!(err.is_fatal());

    let bad_layout = MINIMAL.replace("\"item_count\": 3", "\"item_count\": 1");
    assert!(ReelConfig::from_json_str(&bad_layout).is_err());
}

#[test]
fn missing_file_is_reported_with_path() {
    let err = ReelConfig::from_path("does/not/exist.json").unwrap_err();
    assert!(err.to_string().contains("does/not/exist.json"));
}

#[test]
fn pretty_json_reloads_identically() {
    let cfg = ReelConfig::from_json_str(MINIMAL).unwrap();
    let again = ReelConfig::from_json_str(&cfg.to_json_pretty().unwrap()).unwrap();
    assert_eq!(cfg, again);
}

#[test]
fn malformed_curve_keeps_its_error_kind() {
    let json = MINIMAL.replace(
        "\"layout\"",
        r#""curves": { "intro_background": { "points": [ {"position": 0.5, "value": 0}, {"position": 0.2, "value": 0.5} ] } },
    "layout""#,
    );
    let err = ReelConfig::from_json_str(&json).unwrap_err();
    assert!(matches!(err, ReelError::InvalidCurve(_)), "{err}");
    assert!(err.to_string().contains("curves.intro_background"));
    assert!(err.is_fatal());

    let json = MINIMAL.replace(
        "\"layout\"",
        r#""curves": { "text_sections": [ { "id": "solo", "phase": "intro", "opacity": { "points": [ {"position": 0, "value": 0} ] } } ] },
    "layout""#,
    );
    let err = ReelConfig::from_reader(json.as_bytes()).unwrap_err();
    assert!(matches!(err, ReelError::InvalidCurve(_)), "{err}");
    assert!(err.to_string().contains("text_sections[0].opacity"));
}

#[test]
fn default_text_windows_survive_a_json_round_trip() {
    let cfg = ReelConfig::from_json_str(MINIMAL).unwrap();
    let again = ReelConfig::from_json_str(&cfg.to_json_pretty().unwrap()).unwrap();
    for (a, b) in cfg
        .curves
        .text_sections
        .iter()
        .zip(&again.curves.text_sections)
    {
        assert_eq!(a.opacity.points(), b.opacity.points());
    }
}
