use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::ffi::OsStr;
use std::fs;
use std::os::unix::ffi::OsStrExt;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn test_cli_recursive_long_listing() -> Result<(), Box<dyn std::error::Error>> {
    let root = tempdir()?;
    fs::create_dir(root.path().join("docs"))?;
    fs::write(root.path().join("docs").join("guide.md"), "# Guide")?;
    fs::write(root.path().join("README"), "hello")?;

    let mut cmd = Command::cargo_bin("lsr")?;
    cmd.arg("-lR").arg(root.path());
    cmd.assert().success().stdout(
        predicate::str::contains(" README\n")
            .and(predicate::str::contains(" docs\n"))
            .and(predicate::str::contains(format!(
                "\n{}:\n",
                root.path().join("docs").display()
            )))
            .and(predicate::str::contains(" guide.md\n")),
    );

    Ok(())
}

#[test]
fn test_cli_long_flags() -> Result<(), Box<dyn std::error::Error>> {
    let root = tempdir()?;
    fs::write(root.path().join(".dotfile"), "")?;
    fs::create_dir(root.path().join("inner"))?;

    let mut cmd = Command::cargo_bin("lsr")?;
    cmd.args(["--almost-all", "--classify", "--recursive"])
        .arg(root.path());
    cmd.assert().success().stdout(
        predicate::str::contains(".dotfile\n")
            .and(predicate::str::contains("inner/\n"))
            .and(predicate::str::contains("\n..\n").not()),
    );

    Ok(())
}

#[test]
fn test_cli_help_lists_flags() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("lsr")?;
    cmd.arg("--help");
    cmd.assert().success().stdout(
        predicate::str::contains("--almost-all")
            .and(predicate::str::contains("--long-format"))
            .and(predicate::str::contains("--recursive")),
    );
    Ok(())
}

#[test]
fn test_cli_bad_color_value() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("lsr")?;
    cmd.arg("--color=sometimes");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("sometimes"))
        .stdout(predicate::str::is_empty());
    Ok(())
}

#[test]
fn test_cli_missing_directory_diagnostic() -> Result<(), Box<dyn std::error::Error>> {
    let root = tempdir()?;
    let missing = root.path().join("nope");

    let mut cmd = Command::cargo_bin("lsr")?;
    cmd.arg(&missing);
    cmd.assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(format!(
            "{}: No such file or directory",
            missing.display()
        )));
    Ok(())
}

#[test]
#[cfg(target_os = "linux")]
fn test_cli_non_utf8_path_and_names() -> Result<(), Box<dyn std::error::Error>> {
    let root = tempdir()?;
    let dir = root.path().join(OsStr::from_bytes(b"dir\xfe"));
    fs::create_dir(&dir)?;
    fs::write(dir.join(OsStr::from_bytes(b"bad\xffname")), "")?;

    let mut cmd = Command::cargo_bin("lsr")?;
    cmd.arg(&dir);
    cmd.assert()
        .success()
        .stdout(predicate::eq(&b"bad\xffname\n"[..]))
        .stderr(predicate::str::is_empty());
    Ok(())
}
