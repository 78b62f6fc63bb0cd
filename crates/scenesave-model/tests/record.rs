//! Tests for scenesave-model types.

use scenesave_model::SceneFile;

fn record() -> SceneFile {
    SceneFile {
        description: "mpc_human_rig".to_string(),
        discipline: "RIG".to_string(),
        version: 2,
        user: "jf".to_string(),
        note: None,
        extension: "mb".to_string(),
    }
}

#[test]
fn record_serializes() {
    let json = serde_json::to_string(&record()).expect("serialize record");
    let round: SceneFile = serde_json::from_str(&json).expect("deserialize record");
    assert_eq!(round, record());
}

#[test]
fn note_is_omitted_when_absent() {
    let json = serde_json::to_string(&record()).expect("serialize record");
    assert!(!json.contains("note"));

    let with_note = record().with_note(Some("retime".to_string()));
    let json = serde_json::to_string(&with_note).expect("serialize record");
    assert!(json.contains("retime"));
}

#[test]
fn increment_is_side_effect_free() {
    let original = record();
    let next = original.increment(3);
    assert_eq!(original.version, 2);
    assert_eq!(next.version, 5);
}

#[test]
fn override_ignores_prior_version() {
    assert_eq!(record().with_version(5).version, 5);
    assert_eq!(record().with_version(5).increment(0).version, 5);
}
