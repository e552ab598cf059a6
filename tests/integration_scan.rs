//! Integration tests for the `verscat scan` command.

mod common;

use assert_cmd::Command;
use common::TestProject;
use predicates::prelude::*;

fn verscat_in(project: &TestProject) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_verscat"));
    cmd.current_dir(project.root()).env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_scan_text_output_is_sorted_and_deduplicated() {
    let project = TestProject::new().unwrap();
    project
        .write_file(
            "build.gradle",
            "dependencies {\n  implementation(\"zeta:z:9.0\")\n  implementation(\"alpha:a:1.0\")\n}\n",
        )
        .unwrap();
    project
        .write_file(
            "core/build.gradle",
            "dependencies {\n  implementation(\"alpha:a:1.0\")\n}\n",
        )
        .unwrap();

    verscat_in(&project)
        .args(["scan"])
        .assert()
        .success()
        .stdout(predicate::str::contains("alpha:a:1.0\n"))
        .stdout(predicate::str::contains("zeta:z:9.0\n"))
        .stdout(predicate::function(|out: &str| {
            let alpha = out.find("alpha:a:1.0").unwrap_or(usize::MAX);
            let zeta = out.find("zeta:z:9.0").unwrap_or(0);
            alpha < zeta
        }))
        .stdout(predicate::function(|out: &str| {
            out.matches("alpha:a:1.0").count() == 1
        }));
}

#[test]
fn test_scan_reports_classifiers() {
    let project = TestProject::new().unwrap();
    project
        .write_file(
            "build.gradle",
            "dependencies {\n  testImplementation(\"group1:name1:4.1.5\")\n  testRuntimeOnly(\"group1:name1:4.1.5:test\")\n}\n",
        )
        .unwrap();

    verscat_in(&project)
        .args(["scan"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "group1:name1:4.1.5 (classifiers: test)",
        ));
}

#[test]
fn test_scan_json_output_parses() {
    let project = TestProject::new().unwrap();
    project
        .write_file(
            "build.gradle",
            "dependencies {\n  implementation(\"g:n:1.0\")\n  implementation(\"org.junit:junit-bom\")\n}\n",
        )
        .unwrap();

    let output = project.run(&["scan", "--format", "json"]).unwrap();
    assert!(output.success, "scan failed: {}", output.stderr);

    let parsed: serde_json::Value = serde_json::from_str(&output.stdout).unwrap();
    let coordinates = parsed.as_array().unwrap();
    assert_eq!(coordinates.len(), 2);

    let versionless = coordinates
        .iter()
        .find(|c| c["name"] == "junit-bom")
        .unwrap();
    assert_eq!(versionless["group"], "org.junit");
    assert!(versionless.get("version").is_none());
    assert_eq!(versionless["classifiers"].as_array().unwrap().len(), 0);
}

#[test]
fn test_scan_empty_project_fails() {
    let project = TestProject::new().unwrap();

    verscat_in(&project)
        .args(["scan"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No Gradle build files"));
}

#[test]
fn test_scan_missing_path_fails() {
    let project = TestProject::new().unwrap();

    verscat_in(&project)
        .args(["scan", "nowhere"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Project directory not found"));
}
