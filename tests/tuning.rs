//! Loading and applying damping/threshold tuning.
use std::path::PathBuf;

use approx::assert_relative_eq;
use banana::{InvalidArgument, Tuning, TuningError, DEFAULT_VELOCITY_DAMPING};
use rstest::rstest;
use test_utils::circle;

fn scratch_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("banana-{}-{name}", std::process::id()));
    std::fs::write(&path, contents).expect("write scratch tuning file");
    path
}

#[test]
fn partial_document_keeps_defaults() {
    let tuning = Tuning::from_json(r#"{ "rotational_damping": 0.5 }"#).expect("valid tuning");
    assert_eq!(tuning.rotational_damping, 0.5);
    assert_eq!(tuning.velocity_damping, DEFAULT_VELOCITY_DAMPING);
}

#[rstest]
#[case::zero_damping(r#"{ "velocity_damping": 0.0 }"#)]
#[case::amplifying(r#"{ "velocity_damping": 1.01 }"#)]
#[case::negative_threshold(r#"{ "min_velocity": -1.0 }"#)]
fn out_of_range_documents_are_rejected(#[case] source: &str) {
    assert!(matches!(
        Tuning::from_json(source),
        Err(TuningError::Invalid(_))
    ));
}

#[test]
fn body_uses_its_own_damping() {
    let tuning = Tuning {
        velocity_damping: 0.5,
        ..Tuning::default()
    };
    let mut body = circle((0.0, 0.0), 1.0).with_tuning(tuning).expect("valid tuning");
    body.set_velocity(4.0, 0.0);
    body.apply_velocity_damping();
    assert_relative_eq!(body.speed(), 2.0);
}

#[test]
fn invalid_tuning_is_refused_by_body() {
    let tuning = Tuning {
        rotational_damping: -0.5,
        ..Tuning::default()
    };
    let err = circle((0.0, 0.0), 1.0).with_tuning(tuning);
    assert!(matches!(
        err,
        Err(InvalidArgument::DampingOutOfRange {
            name: "rotational_damping",
            ..
        })
    ));
}

#[test]
fn tuning_loads_from_disk() {
    let path = scratch_file("tuning.json", r#"{ "min_velocity": 0.5 }"#);
    let tuning = Tuning::load(&path).expect("tuning file loads");
    std::fs::remove_file(&path).expect("remove scratch file");

    let mut body = circle((0.0, 0.0), 1.0).with_tuning(tuning).expect("valid tuning");
    body.set_velocity(0.3, 0.4);
    body.apply_velocity_damping();
    assert_eq!(body.speed(), 0.0);
}

#[test]
fn missing_file_reports_io_error() {
    let path = std::env::temp_dir().join("banana-no-such-tuning.json");
    assert!(matches!(Tuning::load(&path), Err(TuningError::Io(_))));
}
