use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const COMMENTS: &str = "username,text\n\
alice,hey @x @y @z\n\
bob,hi @x @x @x\n\
carol,@p @q @r\n";

struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("config.toml"), "").unwrap();
        Self { dir }
    }

    fn file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    fn path(&self) -> &Path {
        self.dir.path()
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("giveaway").unwrap();
        cmd.current_dir(self.path())
            .env_remove("GIVEAWAY_CONFIG")
            .arg("--no-color")
            .arg("--config")
            .arg(self.path().join("config.toml"));
        cmd
    }
}

#[test]
fn validate_reports_counts() {
    let ws = Workspace::new();
    let input = ws.file("comments.csv", COMMENTS);

    ws.cmd()
        .arg("validate")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Comments read: 3"))
        .stdout(predicate::str::contains("Valid (3 distinct mentions): 2"))
        .stdout(predicate::str::contains("Invalid: 1"))
        .stdout(predicate::str::contains("=== WINNER ===").not());
}

#[test]
fn validate_lists_rejections() {
    let ws = Workspace::new();
    let input = ws.file("comments.csv", COMMENTS);

    ws.cmd()
        .args(["validate", "--show-rejected"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "row 2 @bob: only 1 distinct mention(s), expected 3",
        ));
}

#[test]
fn draw_with_seed_is_reproducible() {
    let ws = Workspace::new();
    let input = ws.file("comments.csv", COMMENTS);

    let run = || {
        let output = ws
            .cmd()
            .args(["draw", "--seed", "42"])
            .arg(&input)
            .output()
            .unwrap();
        assert!(output.status.success());
        String::from_utf8(output.stdout).unwrap()
    };

    let first = run();
    let second = run();
    assert_eq!(first, second);
    assert!(first.contains("=== WINNER ==="));
    assert!(first.contains("(seed 42)"));
    assert!(first.contains("@alice: 1 ticket(s) (50.0%)"));
    assert!(first.contains("@carol: 1 ticket(s) (50.0%)"));
    assert!(!first.contains("@bob:"));
}

#[test]
fn draw_json_output() {
    let ws = Workspace::new();
    let input = ws.file("comments.csv", COMMENTS);

    let output = ws
        .cmd()
        .args(["draw", "--seed", "7", "--format", "json"])
        .arg(&input)
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["valid"], 2);
    assert_eq!(value["invalid"], 1);
    let winner = value["outcome"]["winner"].as_str().unwrap();
    assert!(winner == "alice" || winner == "carol");
}

#[test]
fn draw_no_chances_flag_hides_table() {
    let ws = Workspace::new();
    let input = ws.file("comments.csv", COMMENTS);

    ws.cmd()
        .args(["draw", "--seed", "3", "--no-chances"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("=== WINNER ==="))
        .stdout(predicate::str::contains("CHANCES PER USER").not());
}

#[test]
fn config_can_hide_chances() {
    let ws = Workspace::new();
    ws.file("config.toml", "[report]\nshow_chances = false\n");
    let input = ws.file("comments.csv", COMMENTS);

    ws.cmd()
        .args(["draw", "--seed", "3"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("=== WINNER ==="))
        .stdout(predicate::str::contains("CHANCES PER USER").not());
}

#[test]
fn seed_beyond_config_range_fails() {
    let ws = Workspace::new();
    let input = ws.file("comments.csv", COMMENTS);

    ws.cmd()
        .args(["draw", "--seed", "17000000000000000000"])
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("draw.seed must be at most"));
}

#[test]
fn draw_with_no_eligible_comments() {
    let ws = Workspace::new();
    let input = ws.file("comments.csv", "username,text\nbob,@a @a @a\ncarol,@b\n");

    ws.cmd()
        .arg("draw")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("No eligible comments"))
        .stdout(predicate::str::contains("=== WINNER ===").not());
}

#[test]
fn draw_missing_column_fails() {
    let ws = Workspace::new();
    let input = ws.file("comments.csv", "username,comment\nalice,@a @b @c\n");

    ws.cmd()
        .arg("draw")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing required column(s): text"));
}

#[test]
fn draw_missing_file_fails() {
    let ws = Workspace::new();

    ws.cmd()
        .args(["draw", "missing.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn mentions_flag_overrides_rule() {
    let ws = Workspace::new();
    let input = ws.file("comments.csv", "username,text\nalice,@a @b\nbob,@a @b @c\n");

    ws.cmd()
        .args(["validate", "--mentions", "2"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Valid (2 distinct mentions): 1"));
}

#[test]
fn config_file_is_applied() {
    let ws = Workspace::new();
    ws.file(
        "config.toml",
        "[source]\nusername_column = \"handle\"\ntext_column = \"body\"\ndelimiter = \";\"\n",
    );
    let input = ws.file("comments.csv", "handle;body\nalice;@a @b @c\n");

    ws.cmd()
        .arg("validate")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Valid (3 distinct mentions): 1"));
}

#[test]
fn draw_writes_markdown_file() {
    let ws = Workspace::new();
    let input = ws.file("comments.csv", COMMENTS);
    let output = ws.path().join("result");

    ws.cmd()
        .args(["draw", "--seed", "1", "--format", "markdown", "--output"])
        .arg(&output)
        .arg(&input)
        .assert()
        .success();

    let content = fs::read_to_string(ws.path().join("result.md")).unwrap();
    assert!(content.starts_with("# Giveaway Draw Report"));
    assert!(content.contains("## Winner"));
}

#[test]
fn config_init_and_show() {
    let ws = Workspace::new();
    let path = ws.path().join("fresh/config.toml");

    Command::cargo_bin("giveaway")
        .unwrap()
        .current_dir(ws.path())
        .args(["--no-color", "--config"])
        .arg(&path)
        .args(["config", "init", "--force"])
        .assert()
        .success();

    Command::cargo_bin("giveaway")
        .unwrap()
        .current_dir(ws.path())
        .args(["--no-color", "--config"])
        .arg(&path)
        .args(["config", "show", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"required_mentions\": 3"));
}
