use super::*;

#[test]
fn presets_are_valid() {
    let c = CurveConfig::default();
    c.validate().unwrap();
    assert_eq!(c.rotation.sample(0.5), 180.0);
    assert_eq!(c.intro_background.sample(0.5), 0.5);
    assert_eq!(c.text_sections.len(), 3);
}

#[test]
fn default_text_windows_touch_without_overlap() {
    let c = CurveConfig::default();
    let supports: Vec<_> = c
        .text_sections
        .iter()
        .map(|s| s.opacity.support().unwrap())
        .collect();
    assert_eq!(supports[0].0, 0.0);
    assert_eq!(supports[0].1, supports[1].0);
    assert_eq!(supports[1].1, supports[2].0);
    assert_eq!(supports[2].1, 1.0);
}

#[test]
fn overlapping_windows_are_rejected() {
    let mut c = CurveConfig::default();
    c.text_sections = vec![
        TextSection {
            id: "a".to_string(),
            phase: Phase::Intro,
            opacity: KeyframeCurve::fade_window(0.0, 0.6, 0.2).unwrap(),
        },
        TextSection {
            id: "b".to_string(),
            phase: Phase::Intro,
            opacity: KeyframeCurve::fade_window(0.5, 1.0, 0.2).unwrap(),
        },
    ];
    assert!(matches!(c.validate(), Err(ReelError::Configuration(_))));

    // The same windows in different phases never meet.
    c.text_sections[1].phase = Phase::Outro;
    c.validate().unwrap();
}

#[test]
fn duplicate_section_ids_are_rejected() {
    let mut c = CurveConfig::default();
    c.text_sections[1].id = c.text_sections[0].id.clone();
    assert!(c.validate().is_err());
}

#[test]
fn partial_json_keeps_defaults() {
    let c: CurveConfig = serde_json::from_str(
        r#"{ "rotation": { "points": [ {"position": 0, "value": 0}, {"position": 1, "value": 720} ] } }"#,
    )
    .unwrap();
    assert_eq!(c.rotation.sample(0.5), 360.0);
    assert_eq!(c.text_sections.len(), 3);
    assert!(c.normal_background.is_none());
}

#[test]
fn sections_lit_at_a_phase_edge_are_rejected() {
    let mut c = CurveConfig::default();
    c.text_sections = vec![TextSection {
        id: "held".to_string(),
        phase: Phase::Intro,
        opacity: KeyframeCurve::new([(0.0, 0.0), (0.5, 1.0)]).unwrap(),
    }];
    assert!(matches!(c.validate(), Err(ReelError::Configuration(_))));

    let mut c = CurveConfig::default();
    c.text_sections = vec![TextSection {
        id: "early".to_string(),
        phase: Phase::Outro,
        opacity: KeyframeCurve::linear(1.0, 0.0).unwrap(),
    }];
    assert!(matches!(c.validate(), Err(ReelError::Configuration(_))));

    // A full-phase window that fades in and out is fine in any phase.
    let mut c = CurveConfig::default();
    c.text_sections = vec![TextSection {
        id: "farewell".to_string(),
        phase: Phase::Outro,
        opacity: KeyframeCurve::fade_window(0.0, 1.0, 0.2).unwrap(),
    }];
    c.validate().unwrap();
}

#[test]
fn backgrounds_must_be_dark_towards_the_normal_phase() {
    let mut c = CurveConfig::default();
    c.intro_background = KeyframeCurve::new([(0.0, 0.0), (0.5, 0.5)]).unwrap();
    assert!(matches!(c.validate(), Err(ReelError::Configuration(_))));

    let mut c = CurveConfig::default();
    c.outro_background = KeyframeCurve::linear(0.5, 0.0).unwrap();
    assert!(matches!(c.validate(), Err(ReelError::Configuration(_))));
}
