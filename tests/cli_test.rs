//! Integration tests for the chk_plugins binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn setup_dir(config: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("chk_plugins.yml"), config).unwrap();
    temp
}

fn chk_plugins(dir: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("chk_plugins"));
    cmd.current_dir(dir.path())
        .env_remove("CHK_PLUGINS_CONFIG")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("chk_plugins"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("display plugins"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("chk_plugins"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_rejects_arguments() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = chk_plugins(&temp);
    cmd.arg("ginga");
    cmd.assert().failure().code(2);
    Ok(())
}

#[test]
fn missing_interpreter_is_fatal() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_dir(
        r#"
python: chk-plugins-no-such-python
required_plugins:
  - name: pyqtgraph
  - name: PyQt5
"#,
    );
    chk_plugins(&temp)
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::starts_with(
            "Could not run Python interpreter 'chk-plugins-no-such-python':",
        ));
    Ok(())
}

#[test]
fn malformed_config_is_fatal() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_dir("required_plugins: [unclosed");
    chk_plugins(&temp)
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Failed to parse config"));
    Ok(())
}

#[test]
fn explicit_config_path_is_used() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let config = temp.path().join("display.yml");
    fs::write(&config, "python: chk-plugins-no-such-python\n")?;

    chk_plugins(&temp)
        .env("CHK_PLUGINS_CONFIG", &config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("chk-plugins-no-such-python"));
    Ok(())
}

#[test]
fn missing_explicit_config_is_fatal() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    chk_plugins(&temp)
        .env("CHK_PLUGINS_CONFIG", temp.path().join("absent.yml"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("IO error"));
    Ok(())
}

#[test]
fn empty_plugin_list_succeeds() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_dir("python: chk-plugins-no-such-python\nrequired_plugins: []\n");
    chk_plugins(&temp)
        .assert()
        .success()
        .stdout("All required plugins found: \n")
        .stderr(predicate::str::is_empty());
    Ok(())
}

#[cfg(unix)]
#[test]
fn all_plugins_importable_succeeds() -> Result<(), Box<dyn std::error::Error>> {
    // `true` accepts any arguments and exits 0, standing in for a Python
    // that imports everything.
    let temp = setup_dir(
        r#"
python: "true"
required_plugins:
  - name: pyqtgraph
  - name: PyQt5
"#,
    );
    chk_plugins(&temp)
        .assert()
        .success()
        .stdout("All required plugins found: pyqtgraph, PyQt5\n")
        .stderr(predicate::str::is_empty());
    Ok(())
}

#[cfg(unix)]
#[test]
fn failing_imports_list_missing_plugins() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_dir(
        r#"
python: "false"
required_plugins:
  - name: Ginga
    module: ginga
"#,
    );
    chk_plugins(&temp)
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr("Missing required plugins: Ginga\n  Ginga: import of 'ginga' failed\n");
    Ok(())
}

#[cfg(unix)]
#[test]
fn ci_output_is_plain_even_when_colors_are_forced() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_dir("python: \"false\"\nrequired_plugins:\n  - name: PyQt5\n");
    chk_plugins(&temp)
        .env_remove("NO_COLOR")
        .env("CI", "1")
        .env("CLICOLOR_FORCE", "1")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr("Missing required plugins: PyQt5\n  PyQt5: import of 'PyQt5' failed\n");

    let temp = setup_dir("python: \"true\"\nrequired_plugins:\n  - name: PyQt5\n");
    chk_plugins(&temp)
        .env_remove("NO_COLOR")
        .env("CI", "1")
        .env("CLICOLOR_FORCE", "1")
        .assert()
        .success()
        .stdout("All required plugins found: PyQt5\n");
    Ok(())
}

#[cfg(unix)]
#[test]
fn repeated_runs_give_same_output() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_dir("python: \"true\"\nrequired_plugins:\n  - name: ginga\n");
    let first = chk_plugins(&temp).output()?;
    let second = chk_plugins(&temp).output()?;
    assert_eq!(first.status.code(), second.status.code());
    assert_eq!(first.stdout, second.stdout);
    Ok(())
}
