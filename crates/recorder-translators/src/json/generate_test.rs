use super::generate_command;
use crate::error::TranslateErrorKind;
use crate::options::GenerateOptions;
use recorder_core::{JointAngleMap, JointSnapshot};
use serde_json::{json, Value};

fn snapshot(entries: &[(&str, f64)], changed: &[&str]) -> JointSnapshot {
    let values = entries
        .iter()
        .map(|(name, angle)| (name.to_string(), *angle))
        .collect::<JointAngleMap>();
    JointSnapshot::from_changes(values, changed.iter().copied())
}

fn decode(text: &str) -> Value {
    serde_json::from_str(text).expect("generated text must be json")
}

#[test]
fn empty_snapshot_generates_nothing() {
    let result = generate_command(&JointSnapshot::default(), &GenerateOptions::new())
        .expect("must generate");
    assert_eq!(result, "");
}

#[test]
fn empty_snapshot_generates_nothing_even_with_duration_and_blocking() {
    let options = GenerateOptions::new()
        .blocking(true)
        .with_fluentnao("nao.")
        .with_keyframe_duration(1.0);
    let result = generate_command(&JointSnapshot::default(), &options).expect("must generate");
    assert_eq!(result, "");
}

#[test]
fn one_changed_joint() {
    let result = generate_command(
        &snapshot(&[("HeadPitch", 0.0)], &["HeadPitch"]),
        &GenerateOptions::new(),
    )
    .expect("must generate");
    let decoded = decode(&result);
    assert_eq!(decoded["changes"]["HeadPitch"], json!(0.0));
    assert!(decoded.get("duration").is_none());
    assert!(decoded.get("is_blocking").is_none());
}

#[test]
fn two_changed_joints() {
    let result = generate_command(
        &snapshot(&[("HeadPitch", 0.0), ("HeadYaw", 0.0)], &["HeadPitch", "HeadYaw"]),
        &GenerateOptions::new(),
    )
    .expect("must generate");
    let decoded = decode(&result);
    assert_eq!(decoded["changes"].as_object().map(|changes| changes.len()), Some(2));
}

#[test]
fn only_changed_joints_with_angles_are_emitted() {
    let result = generate_command(
        &snapshot(
            &[("HeadPitch", 0.5), ("HeadYaw", -0.25), ("LHand", 0.9)],
            &["HeadYaw", "RHand"],
        ),
        &GenerateOptions::new(),
    )
    .expect("must generate");
    assert_eq!(decode(&result), json!({"changes": {"HeadYaw": -0.25}}));
}

#[test]
fn keyframe_with_duration_and_blocking() {
    let options = GenerateOptions::new().blocking(true).with_keyframe_duration(1.0);
    let result = generate_command(
        &snapshot(&[("HeadPitch", 0.0), ("HeadYaw", 0.0)], &["HeadPitch", "HeadYaw"]),
        &options,
    )
    .expect("must generate");
    let decoded = decode(&result);
    assert_eq!(decoded["duration"], json!(1.0));
    assert_eq!(decoded["is_blocking"], json!(true));
}

#[test]
fn non_blocking_flag_is_written_when_requested() {
    let options = GenerateOptions::new().blocking(false);
    let result = generate_command(&snapshot(&[("HeadPitch", 0.1)], &["HeadPitch"]), &options)
        .expect("must generate");
    assert_eq!(decode(&result)["is_blocking"], json!(false));
}

#[test]
fn output_is_a_bare_object() {
    let result = generate_command(
        &snapshot(&[("HeadPitch", 0.1)], &["HeadPitch"]),
        &GenerateOptions::new(),
    )
    .expect("must generate");
    assert!(result.starts_with('{'));
    assert!(decode(&result).is_object());
}

#[test]
fn non_finite_values_fail_serialization() {
    let error = generate_command(
        &snapshot(&[("HeadPitch", f64::NAN)], &["HeadPitch"]),
        &GenerateOptions::new(),
    )
    .expect_err("nan angle must fail");
    assert_eq!(error.kind(), TranslateErrorKind::Serialization);
    assert!(error.to_string().contains("changes.HeadPitch"));

    let options = GenerateOptions::new().with_keyframe_duration(f64::INFINITY);
    let error = generate_command(&snapshot(&[("HeadPitch", 0.0)], &["HeadPitch"]), &options)
        .expect_err("infinite duration must fail");
    assert_eq!(error.kind(), TranslateErrorKind::Serialization);
}

#[test]
fn nan_on_an_unchanged_joint_is_ignored() {
    let result = generate_command(
        &snapshot(&[("HeadPitch", 0.2), ("HeadYaw", f64::NAN)], &["HeadPitch"]),
        &GenerateOptions::new(),
    )
    .expect("unchanged joints are not encoded");
    assert_eq!(decode(&result), json!({"changes": {"HeadPitch": 0.2}}));
}
