use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::{Command, Stdio};
use tempfile::tempdir;

#[test]
fn test_cli_writes_report_in_working_dir() -> Result<(), Box<dyn std::error::Error>> {
    let source_dir = tempdir()?;
    fs::create_dir(source_dir.path().join("docs"))?;
    fs::write(source_dir.path().join("readme.md"), "# hi")?;
    let work_dir = tempdir()?;

    let mut cmd = Command::cargo_bin("treeview")?;
    cmd.current_dir(work_dir.path()).arg(source_dir.path());
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Directory Structure"))
        .stdout(predicate::str::contains("    ├── docs/"))
        .stdout(predicate::str::contains("    └── readme.md (4.00 B)"))
        .stdout(predicate::str::contains(
            "✓ Tree structure saved to 'directory_structure.txt'",
        ))
        .stdout(predicate::str::contains("✓ Total path: "));

    let report = fs::read_to_string(work_dir.path().join("directory_structure.txt"))?;
    assert!(report.starts_with("Directory Structure\n"));
    assert!(report.contains("Mode: Directories and Files\n"));
    assert!(report.ends_with("    └── readme.md (4.00 B)\n"));
    Ok(())
}

#[test]
fn test_cli_flags() -> Result<(), Box<dyn std::error::Error>> {
    let source_dir = tempdir()?;
    fs::create_dir(source_dir.path().join(".hidden_dir"))?;
    fs::write(source_dir.path().join("file.txt"), "x")?;
    let work_dir = tempdir()?;

    let mut cmd = Command::cargo_bin("treeview")?;
    cmd.current_dir(work_dir.path())
        .arg(source_dir.path())
        .args(["--mode", "dirs-only", "--hidden", "-o", "custom.txt"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("✓ Tree structure saved to 'custom.txt'"));

    let report = fs::read_to_string(work_dir.path().join("custom.txt"))?;
    assert!(report.contains("Mode: Directories Only\n"));
    assert!(report.contains("Hidden items: Shown\n"));
    assert!(report.contains("    └── .hidden_dir/\n"));
    assert!(!report.contains("file.txt"));
    assert!(!work_dir.path().join("directory_structure.txt").exists());
    Ok(())
}

#[test]
fn test_cli_missing_directory() -> Result<(), Box<dyn std::error::Error>> {
    let work_dir = tempdir()?;
    let missing = work_dir.path().join("does-not-exist");

    let mut cmd = Command::cargo_bin("treeview")?;
    cmd.current_dir(work_dir.path()).arg(&missing);
    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: Directory '"))
        .stderr(predicate::str::contains("does not exist!"));

    assert!(!work_dir.path().join("directory_structure.txt").exists());
    Ok(())
}

#[test]
fn test_cli_not_a_directory() -> Result<(), Box<dyn std::error::Error>> {
    let work_dir = tempdir()?;
    let file = work_dir.path().join("plain.txt");
    fs::write(&file, "x")?;

    let mut cmd = Command::cargo_bin("treeview")?;
    cmd.current_dir(work_dir.path()).arg(&file);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("is not a directory!"));

    assert!(!work_dir.path().join("directory_structure.txt").exists());
    Ok(())
}

#[test]
fn test_cli_defaults_to_current_dir_by_name() -> Result<(), Box<dyn std::error::Error>> {
    let work_dir = tempdir()?;
    let proj = work_dir.path().join("proj");
    fs::create_dir(&proj)?;
    fs::create_dir(proj.join("src"))?;

    let mut cmd = Command::cargo_bin("treeview")?;
    cmd.current_dir(&proj).stdin(Stdio::null());
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\n└── proj/\n"))
        .stdout(predicate::str::contains("└── ./").not());

    let report = fs::read_to_string(proj.join("directory_structure.txt"))?;
    assert!(report.contains("\n└── proj/\n"));
    Ok(())
}

#[test]
fn test_cli_interactive_answers() -> Result<(), Box<dyn std::error::Error>> {
    let source_dir = tempdir()?;
    fs::create_dir(source_dir.path().join(".config"))?;
    fs::create_dir(source_dir.path().join("lib"))?;
    fs::write(source_dir.path().join("notes.txt"), "n")?;
    let work_dir = tempdir()?;

    let answers = format!("{}\n1\nY\n", source_dir.path().display());
    let mut cmd = assert_cmd::Command::cargo_bin("treeview")?;
    cmd.current_dir(work_dir.path()).arg("--interactive").write_stdin(answers);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Directory Tree Generator"))
        .stdout(predicate::str::contains("What would you like to show?"));

    let report = fs::read_to_string(work_dir.path().join("directory_structure.txt"))?;
    assert!(report.contains("Mode: Directories Only\n"));
    assert!(report.contains("Hidden items: Shown\n"));
    assert!(report.ends_with("    ├── .config/\n    └── lib/\n"));
    Ok(())
}

#[test]
fn test_cli_interactive_rejects_path_before_other_questions() -> Result<(), Box<dyn std::error::Error>> {
    let work_dir = tempdir()?;
    let missing = work_dir.path().join("missing");

    let mut cmd = assert_cmd::Command::cargo_bin("treeview")?;
    cmd.current_dir(work_dir.path())
        .arg("-i")
        .write_stdin(format!("{}\n1\ny\n", missing.display()));
    cmd.assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Enter directory path"))
        .stdout(predicate::str::contains("What would you like to show?").not())
        .stdout(predicate::str::contains("Show hidden files/folders?").not())
        .stderr(predicate::str::contains("does not exist!"));

    assert!(!work_dir.path().join("directory_structure.txt").exists());
    Ok(())
}
