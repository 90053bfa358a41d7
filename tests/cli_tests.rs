use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A temp config + database pair the binary is pointed at
struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let db_path = dir.path().join("gator.db");
        let config = serde_json::json!({ "db_url": db_path.to_str().unwrap() });
        fs::write(dir.path().join("gatorconfig.json"), config.to_string()).unwrap();

        Self { dir }
    }

    fn config_path(&self) -> PathBuf {
        self.dir.path().join("gatorconfig.json")
    }

    fn gator(&self) -> Command {
        let mut cmd = Command::cargo_bin("gator").unwrap();
        cmd.env("GATOR_CONFIG", self.config_path())
            .env_remove("RUST_LOG");
        cmd
    }

    fn current_user(&self) -> Option<String> {
        let content = fs::read_to_string(self.config_path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        value["current_user_name"].as_str().map(str::to_string)
    }
}

#[test]
fn test_help_lists_usage() {
    Command::cargo_bin("gator")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("gator <COMMAND> [ARGS]..."));
}

#[test]
fn test_no_arguments_is_usage_error() {
    let sandbox = Sandbox::new();

    sandbox
        .gator()
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Not enough arguments"))
        .stderr(predicate::str::contains("addfeed"));
}

#[test]
fn test_unknown_command() {
    let sandbox = Sandbox::new();

    sandbox
        .gator()
        .arg("unfollow")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error: Unknown command: unfollow"));
}

#[test]
fn test_missing_config_file() {
    let dir = TempDir::new().unwrap();

    Command::cargo_bin("gator")
        .unwrap()
        .env("GATOR_CONFIG", dir.path().join("missing.json"))
        .arg("users")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn test_register_then_list_users() {
    let sandbox = Sandbox::new();

    sandbox
        .gator()
        .args(["register", "alice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("User 'alice' created!"));
    sandbox.gator().args(["register", "bob"]).assert().success();

    assert_eq!(sandbox.current_user().as_deref(), Some("bob"));

    sandbox
        .gator()
        .arg("users")
        .assert()
        .success()
        .stdout("* alice\n* bob (current)\n");
}

#[test]
fn test_register_duplicate_fails() {
    let sandbox = Sandbox::new();
    sandbox.gator().args(["register", "alice"]).assert().success();

    sandbox
        .gator()
        .args(["register", "alice"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("User 'alice' already exists"));
}

#[test]
fn test_login_unknown_user_keeps_current() {
    let sandbox = Sandbox::new();
    sandbox.gator().args(["register", "alice"]).assert().success();

    sandbox
        .gator()
        .args(["login", "mallory"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("User 'mallory' does not exist"));

    assert_eq!(sandbox.current_user().as_deref(), Some("alice"));
}

#[test]
fn test_login_requires_argument() {
    let sandbox = Sandbox::new();

    sandbox
        .gator()
        .arg("login")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("login requires a username argument"));
}

#[test]
fn test_feed_workflow() {
    let sandbox = Sandbox::new();
    sandbox.gator().args(["register", "alice"]).assert().success();

    sandbox
        .gator()
        .args(["following"])
        .assert()
        .success()
        .stdout("You are not following any feeds.\n");

    sandbox
        .gator()
        .args(["addfeed", "Blog", "http://example.com/feed.xml"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "You are now following feed 'Blog' as user 'alice'",
        ));

    sandbox
        .gator()
        .arg("feeds")
        .assert()
        .success()
        .stdout("- Blog\n  url: http://example.com/feed.xml\n  created by: alice\n");

    sandbox.gator().args(["register", "bob"]).assert().success();
    sandbox
        .gator()
        .args(["follow", "http://example.com/feed.xml"])
        .assert()
        .success()
        .stdout("Followed feed 'Blog' as user 'bob'\n");

    sandbox
        .gator()
        .arg("following")
        .assert()
        .success()
        .stdout("Feeds you are following:\n* Blog\n");
}

#[test]
fn test_follow_unknown_feed() {
    let sandbox = Sandbox::new();
    sandbox.gator().args(["register", "alice"]).assert().success();

    sandbox
        .gator()
        .args(["follow", "http://example.com/nope.xml"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Could not find feed with url http://example.com/nope.xml",
        ));
}

#[test]
fn test_reset_clears_users_and_feeds() {
    let sandbox = Sandbox::new();
    sandbox.gator().args(["register", "alice"]).assert().success();
    sandbox
        .gator()
        .args(["addfeed", "Blog", "http://example.com/feed.xml"])
        .assert()
        .success();

    sandbox
        .gator()
        .arg("reset")
        .assert()
        .success()
        .stdout("All users deleted successfully.\n");

    sandbox
        .gator()
        .arg("users")
        .assert()
        .success()
        .stdout("No users registered.\n");
    sandbox
        .gator()
        .arg("feeds")
        .assert()
        .success()
        .stdout("No feeds added yet.\n");
}

#[test]
fn test_agg_rejects_non_http_url() {
    let sandbox = Sandbox::new();

    sandbox
        .gator()
        .args(["agg", "ftp://example.com/feed.xml"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid feed URL"));
}
