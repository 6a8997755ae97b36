//! Handout and config mode integration tests

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn codeclass(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("codeclass").unwrap();
    cmd.env_remove("CODECLASS_SALUTATION");
    cmd.env_remove("CODECLASS_PROMPT");
    cmd.env_remove("CODECLASS_SHOW_PROMPT");
    cmd.env("XDG_CONFIG_HOME", config_home.path());
    cmd
}

#[test]
fn test_list_shows_both_handouts() {
    let home = TempDir::new().unwrap();
    codeclass(&home)
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains("storyboard"))
        .stdout(predicate::str::contains("repl"))
        .stdout(predicate::str::contains("Code vs Programming Storyboard"));
}

#[test]
fn test_print_repl_handout() {
    let home = TempDir::new().unwrap();
    codeclass(&home)
        .args(["--handout", "repl"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Talk to the Python REPL"))
        .stdout(predicate::str::contains("print(\"Hello, World!\")"));
}

#[test]
fn test_print_storyboard_handout() {
    let home = TempDir::new().unwrap();
    codeclass(&home)
        .args(["--handout", "storyboard"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Code vs Programming Storyboard"))
        .stdout(predicate::str::contains("Hello, "));
}

#[test]
fn test_unknown_handout_fails() {
    let home = TempDir::new().unwrap();
    codeclass(&home)
        .args(["--handout", "quiz"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Unknown handout 'quiz'"));
}

#[test]
fn test_handout_mode_ignores_stdin() {
    let home = TempDir::new().unwrap();
    codeclass(&home)
        .args(["--handout", "repl"])
        .write_stdin("Ada\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("REPL").and(predicate::str::contains("Hello, Ada!").not()));
}

#[test]
fn test_init_config_writes_file_once() {
    let home = TempDir::new().unwrap();

    codeclass(&home)
        .arg("--init-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote default config"));

    let config_path = home.path().join("codeclass").join("config.toml");
    assert!(config_path.exists());

    codeclass(&home)
        .arg("--init-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Config already exists"));
}

#[test]
fn test_config_file_changes_salutation() {
    let home = TempDir::new().unwrap();
    let config_dir = home.path().join("codeclass");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.toml"),
        "[greeting]\nsalutation = \"Hei\"\nprompt = \"Navn? \"\npunctuation = \"!\"\n",
    )
    .unwrap();

    codeclass(&home)
        .write_stdin("Ada\n")
        .assert()
        .success()
        .stdout("Hei, Ada!\n");
}

#[test]
fn test_help_describes_modes() {
    let home = TempDir::new().unwrap();
    codeclass(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("handout"))
        .stdout(predicate::str::contains("salutation"));
}
