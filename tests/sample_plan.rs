use std::error::Error;
use std::path::PathBuf;

use taskplan::config::load_from_path;
use taskplan::plan::try_assign;

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn sample_team_toml_produces_the_expected_plan() -> TestResult {
    let manifest = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let file = load_from_path(manifest.join("demos/sample-team.toml"))?;

    assert_eq!(file.worker.len(), 3);
    assert_eq!(file.task.len(), 5);

    let plan = try_assign(&file.worker, &file.task)?;

    // Processing order: Bug Fix B (5), Upgrade E (5), Feature A (4),
    // Refactor C (3), Optimization D (2).
    //
    // - Bug Fix B  -> Bob (strict, prefers bugs)
    // - Upgrade E  -> unassigned: depends on Feature A, not yet assigned
    // - Feature A  -> Alice (strict, prefers features)
    // - Refactor C -> unassigned: only Bob has skill 9, but 10 + 25 > 30
    // - Optimization D -> Alice (strict; 15 + 20 fits in 40)
    let alice = &plan.assignments["Alice"];
    assert_eq!(
        alice.tasks,
        vec!["Feature A".to_string(), "Optimization D".to_string()]
    );
    assert_eq!(alice.total_hours, 35.0);

    let bob = &plan.assignments["Bob"];
    assert_eq!(bob.tasks, vec!["Bug Fix B".to_string()]);
    assert_eq!(bob.total_hours, 10.0);

    let charlie = &plan.assignments["Charlie"];
    assert!(charlie.tasks.is_empty());
    assert_eq!(charlie.total_hours, 0.0);

    assert_eq!(
        plan.unassigned,
        vec!["Upgrade E".to_string(), "Refactor C".to_string()]
    );
    assert!(plan.error.is_none());

    Ok(())
}

#[test]
fn rendered_plan_uses_camel_case_hours_and_omits_absent_error() -> TestResult {
    let manifest = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let file = load_from_path(manifest.join("demos/sample-team.toml"))?;
    let plan = try_assign(&file.worker, &file.task)?;

    let rendered = serde_json::to_string(&plan)?;
    assert!(rendered.contains("\"totalHours\""));
    assert!(rendered.contains("\"unassigned\""));
    assert!(!rendered.contains("\"error\""));

    Ok(())
}

#[test]
fn empty_plan_file_parses_to_empty_collections() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("empty.toml");
    std::fs::write(&path, "")?;

    let file = load_from_path(&path)?;
    assert!(file.worker.is_empty());
    assert!(file.task.is_empty());

    let plan = try_assign(&file.worker, &file.task)?;
    assert!(plan.assignments.is_empty());
    assert!(plan.unassigned.is_empty());

    Ok(())
}

#[test]
fn loader_rejects_invalid_toml() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("broken.toml");
    std::fs::write(&path, "[[worker]\nname = ")?;

    assert!(load_from_path(&path).is_err());

    Ok(())
}

#[test]
fn loader_rejects_worker_missing_required_fields() -> TestResult {
    // `skill_level` and `max_hours` have no serde defaults, so a worker entry
    // without them fails at parse time.
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("partial.toml");
    std::fs::write(&path, "[[worker]]\nname = \"Alice\"\n")?;

    assert!(load_from_path(&path).is_err());

    Ok(())
}

#[test]
fn loader_reports_missing_file() {
    let missing = PathBuf::from("definitely/does/not/exist.toml");
    assert!(load_from_path(&missing).is_err());
}
