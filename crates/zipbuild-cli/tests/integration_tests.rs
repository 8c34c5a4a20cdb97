//! Integration tests for the zipbuild binary.
//!
//! Stdin is piped, so questions take the line-based path: confirmations
//! read `y`/`n`, the collision menu reads a 1-based number.

use std::fs::{self, File};
use std::path::Path;

use assert_cmd::{Command, cargo};
use predicates::prelude::*;
use tempfile::TempDir;

fn zipbuild(dir: &Path) -> Command {
    let mut cmd = cargo::cargo_bin_cmd!("zipbuild");
    cmd.current_dir(dir)
        .env("XDG_CONFIG_HOME", dir.join(".no-user-config"))
        .env_remove("NO_COLOR")
        .env_remove("RUST_LOG");
    cmd
}

/// A project with `package.json` and a two-file `build/` directory.
fn project() -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("package.json"),
        r#"{ "name": "app", "version": "0.1.0" }"#,
    )
    .unwrap();
    fs::create_dir_all(temp.path().join("build/static")).unwrap();
    fs::write(temp.path().join("build/index.html"), "<html></html>").unwrap();
    fs::write(temp.path().join("build/static/app.js"), "run()").unwrap();
    temp
}

fn zip_names(path: &Path) -> Vec<String> {
    let archive = zip::ZipArchive::new(File::open(path).unwrap()).unwrap();
    archive.file_names().map(str::to_string).collect()
}

fn dist_entries(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir.join("dist"))
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn test_help_flag() {
    let temp = TempDir::new().unwrap();
    zipbuild(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("build-dir"))
        .stdout(predicate::str::contains("zip-dir"))
        .stdout(predicate::str::contains("--format"))
        .stdout(predicate::str::contains("--template"));
}

#[test]
fn test_short_help_flag() {
    let temp = TempDir::new().unwrap();
    zipbuild(temp.path())
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("--name"));
}

#[test]
fn test_version_flag() {
    let temp = TempDir::new().unwrap();
    zipbuild(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_default_run_packs_build_into_dist() {
    let temp = project();
    fs::create_dir(temp.path().join("dist")).unwrap();

    zipbuild(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Archived 2 files to dist/app_0.1.0.zip",
        ));

    let names = zip_names(&temp.path().join("dist/app_0.1.0.zip"));
    assert!(names.iter().any(|n| n == "index.html"));
    assert!(names.iter().any(|n| n == "static/app.js"));
}

#[test]
fn test_positional_dirs_format_and_template() {
    let temp = project();
    fs::rename(temp.path().join("build"), temp.path().join("out")).unwrap();
    fs::create_dir(temp.path().join("backup")).unwrap();

    zipbuild(temp.path())
        .args(["out", "backup", "-f", "tar", "-t", "%NAME%-v%VERSION%.%EXT%"])
        .assert()
        .success()
        .stdout(predicate::str::contains("to backup/app-v0.1.0.tar"));

    let mut archive = tar::Archive::new(File::open(temp.path().join("backup/app-v0.1.0.tar")).unwrap());
    assert!(archive.entries().unwrap().count() >= 2);
}

#[test]
fn test_first_run_creates_dist_and_updates_gitignore() {
    let temp = project();
    fs::write(temp.path().join(".gitignore"), "node_modules").unwrap();

    zipbuild(temp.path())
        .write_stdin("y\ny\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("'dist' created!"))
        .stdout(predicate::str::contains("Done!"));

    assert!(temp.path().join("dist/app_0.1.0.zip").is_file());
    assert_eq!(
        fs::read_to_string(temp.path().join(".gitignore")).unwrap(),
        "node_modules\ndist"
    );
}

#[test]
fn test_first_run_without_gitignore_registration() {
    let temp = project();

    zipbuild(temp.path())
        .write_stdin("y\nn\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Done!").not());

    assert!(!temp.path().join(".gitignore").exists());
    assert!(temp.path().join("dist/app_0.1.0.zip").is_file());
}

#[test]
fn test_declining_dist_creation_says_bye() {
    let temp = project();

    zipbuild(temp.path())
        .write_stdin("n\n")
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Bye!"));

    assert!(!temp.path().join("dist").exists());
}

#[test]
fn test_collision_exit_leaves_existing_archive() {
    let temp = project();
    fs::create_dir(temp.path().join("dist")).unwrap();
    fs::write(temp.path().join("dist/app_0.1.0.zip"), "old").unwrap();

    zipbuild(temp.path())
        .write_stdin("4\n")
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Bye!"));

    assert_eq!(
        fs::read_to_string(temp.path().join("dist/app_0.1.0.zip")).unwrap(),
        "old"
    );
}

#[test]
fn test_collision_overwrite() {
    let temp = project();
    fs::create_dir(temp.path().join("dist")).unwrap();
    fs::write(temp.path().join("dist/app_0.1.0.zip"), "old").unwrap();

    zipbuild(temp.path()).write_stdin("1\n").assert().success();

    assert_eq!(dist_entries(temp.path()), ["app_0.1.0.zip"]);
    assert!(zip_names(&temp.path().join("dist/app_0.1.0.zip")).contains(&"index.html".into()));
}

#[test]
fn test_collision_timestamp_rename() {
    let temp = project();
    fs::create_dir(temp.path().join("dist")).unwrap();
    fs::write(temp.path().join("dist/app_0.1.0.zip"), "old").unwrap();

    zipbuild(temp.path())
        .write_stdin("2\n")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"to dist/app_0\.1\.0_\d+\.zip").unwrap());

    let entries = dist_entries(temp.path());
    assert_eq!(entries.len(), 2);
    assert!(entries.iter().any(|n| n.starts_with("app_0.1.0_") && n.ends_with(".zip")));
}

#[test]
fn test_collision_rename_appends_format_extension() {
    let temp = project();
    fs::create_dir(temp.path().join("dist")).unwrap();
    fs::write(temp.path().join("dist/app_0.1.0.zip"), "old").unwrap();

    zipbuild(temp.path())
        .write_stdin("3\nbackup\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("to dist/backup.zip"));

    assert!(temp.path().join("dist/backup.zip").is_file());
}

#[test]
fn test_name_flag_uses_answer_verbatim() {
    let temp = project();
    fs::create_dir(temp.path().join("dist")).unwrap();

    zipbuild(temp.path())
        .arg("-n")
        .write_stdin("release-candidate.zip\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("to dist/release-candidate.zip"));
}

#[test]
fn test_json_report() {
    let temp = project();
    fs::create_dir(temp.path().join("dist")).unwrap();

    let assert = zipbuild(temp.path())
        .args(["--output-format", "json"])
        .assert()
        .success();

    let report: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(report["filename"], "app_0.1.0.zip");
    assert_eq!(report["format"], "zip");
    assert_eq!(report["relative_path"], "dist/app_0.1.0.zip");
}

#[test]
fn test_local_config_file_sets_defaults() {
    let temp = project();
    fs::create_dir(temp.path().join("releases")).unwrap();
    fs::write(
        temp.path().join("zipbuild.toml"),
        "[defaults]\nformat = \"tar\"\nzip_dir = \"releases\"\n",
    )
    .unwrap();

    zipbuild(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("to releases/app_0.1.0.tar"));
}

#[test]
fn test_flags_override_config_file() {
    let temp = project();
    fs::create_dir(temp.path().join("dist")).unwrap();
    fs::write(
        temp.path().join("zipbuild.toml"),
        "[defaults]\nformat = \"tar\"\n",
    )
    .unwrap();

    zipbuild(temp.path())
        .args(["--format", "zip"])
        .assert()
        .success()
        .stdout(predicate::str::contains("to dist/app_0.1.0.zip"));
}

#[test]
fn test_cargo_manifest_fallback() {
    let temp = project();
    fs::remove_file(temp.path().join("package.json")).unwrap();
    fs::write(
        temp.path().join("Cargo.toml"),
        "[package]\nname = \"native\"\nversion = \"2.0.0\"\n",
    )
    .unwrap();
    fs::create_dir(temp.path().join("dist")).unwrap();

    zipbuild(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("to dist/native_2.0.0.zip"));
}

#[test]
fn test_quiet_prints_nothing_on_success() {
    let temp = project();
    fs::create_dir(temp.path().join("dist")).unwrap();

    zipbuild(temp.path())
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(temp.path().join("dist/app_0.1.0.zip").is_file());
}
