//! Tests that drive the `fr` binary end to end against a snapshot file.

use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

use serde_json::Value;
use tempfile::TempDir;

const SNAPSHOT: &str = r#"{
    "users": [
        {"id": "u1", "username": "alice"},
        {"id": "u2", "username": "bob"}
    ],
    "posts": [
        {"id": "635b1e0a9f1c2d3e4f506171", "author_id": "u1", "content": "walking the dog",
         "created_at": "2024-03-01T12:30:00Z"},
        {"id": "635b1e0a9f1c2d3e4f506172", "author_id": "u1", "content": "coffee",
         "created_at": "2024-02-01T08:00:00Z"},
        {"id": "635b1e0a9f1c2d3e4f506173", "author_id": "u2", "content": "dog park",
         "created_at": "2024-03-02T18:00:00Z"}
    ],
    "tags": [
        {"label": "dog", "post_ids": [
            {"$oid": "635b1e0a9f1c2d3e4f506171"},
            "635B1E0A9F1C2D3E4F506173"
        ]}
    ]
}"#;

fn fr_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_fr"))
}

/// Temp dir holding a snapshot and an isolated config path.
struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new() -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        fs::write(dir.path().join("snapshot.json"), SNAPSHOT).unwrap();
        Self { dir }
    }

    fn run(&self, args: &[&str]) -> Output {
        Command::new(fr_binary())
            .args(args)
            .env("FR_CONFIG", self.dir.path().join("config.toml"))
            .env("FR_SNAPSHOT", self.dir.path().join("snapshot.json"))
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .output()
            .expect("failed to run fr")
    }

    fn run_json(&self, args: &[&str]) -> Value {
        let mut full = vec!["--json"];
        full.extend_from_slice(args);
        let output = self.run(&full);
        assert!(
            output.status.success(),
            "fr {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        serde_json::from_slice(&output.stdout).expect("stdout is not JSON")
    }
}

fn ids(value: &Value) -> Vec<String> {
    value["posts"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn test_check_prints_render_and_filter() {
    let fx = Fixture::new();
    let output = fx.run(&["check", "&(@alice,!(#dog))"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(
        stdout,
        "And(Author(alice),Not(Tag(dog)))\nfilter: &(@alice,!(#dog))\n"
    );
}

#[test]
fn test_check_syntax_error_exit_code() {
    let fx = Fixture::new();
    let output = fx.run(&["check", "&(@alice,#dog"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("unexpected end of expression at token 7"));
}

#[test]
fn test_eval_json_results() {
    let fx = Fixture::new();

    let value = fx.run_json(&["eval", "#dog"]);
    assert_eq!(value["filter"], "#dog");
    assert_eq!(value["count"], 2);
    assert_eq!(
        ids(&value),
        vec!["635b1e0a9f1c2d3e4f506173", "635b1e0a9f1c2d3e4f506171"]
    );
    assert_eq!(value["posts"][0]["author"], "bob");

    let value = fx.run_json(&["eval", "!(#dog)"]);
    assert_eq!(ids(&value), vec!["635b1e0a9f1c2d3e4f506172"]);

    let value = fx.run_json(&["eval", "&(@alice,#dog)"]);
    assert_eq!(ids(&value), vec!["635b1e0a9f1c2d3e4f506171"]);
    assert_eq!(value["posts"][0]["created_at"], "2024-03-01T12:30:00+00:00");
}

#[test]
fn test_eval_limit_truncates() {
    let fx = Fixture::new();
    let value = fx.run_json(&["eval", "|(@alice,@bob)", "--limit", "1"]);

    assert_eq!(value["count"], 3);
    assert_eq!(value["truncated"], true);
    assert_eq!(ids(&value), vec!["635b1e0a9f1c2d3e4f506173"]);
}

#[test]
fn test_eval_lists_newest_first() {
    let fx = Fixture::new();
    let value = fx.run_json(&["eval", "|(@alice,@bob)", "--all"]);

    assert_eq!(
        ids(&value),
        vec![
            "635b1e0a9f1c2d3e4f506173",
            "635b1e0a9f1c2d3e4f506171",
            "635b1e0a9f1c2d3e4f506172",
        ]
    );
}

#[test]
fn test_eval_table_output() {
    let fx = Fixture::new();
    let output = fx.run(&["eval", "@bob"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("ID"));
    assert!(stdout.contains("635b1e0a"));
    assert!(stdout.contains("@bob"));
    assert!(stdout.contains("dog park"));
}

#[test]
fn test_eval_unknown_name_hint() {
    let fx = Fixture::new();
    let output = fx.run(&["eval", "@alcie"]);

    assert!(output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("no user named 'alcie' (did you mean 'alice'?)"));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout, "No posts found.\n");
}

#[test]
fn test_eval_json_syntax_error() {
    let fx = Fixture::new();
    let output = fx.run(&["--json", "eval", "@alice)"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let value: Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(value["error"]["code"], "SYNTAX_ERROR");
    assert_eq!(value["error"]["token_index"], 2);
}

#[test]
fn test_eval_missing_snapshot_exit_code() {
    let fx = Fixture::new();
    let missing = fx.dir.path().join("absent.json");
    let output = fx.run(&["--snapshot", missing.to_str().unwrap(), "eval", "@alice"]);

    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn test_following_feed() {
    let fx = Fixture::new();

    let value = fx.run_json(&["following", "bob"]);
    assert_eq!(value["filter"], "@bob");
    assert_eq!(ids(&value), vec!["635b1e0a9f1c2d3e4f506173"]);

    let value = fx.run_json(&["following", "alice"]);
    assert_eq!(
        ids(&value),
        vec!["635b1e0a9f1c2d3e4f506171", "635b1e0a9f1c2d3e4f506172"]
    );

    let value = fx.run_json(&["following", "alice", "bob", "--limit", "1"]);
    assert_eq!(value["count"], 3);
    assert_eq!(ids(&value), vec!["635b1e0a9f1c2d3e4f506173"]);

    let value = fx.run_json(&["following"]);
    assert_eq!(value["count"], 0);
    assert!(value.get("filter").is_none());
}

#[test]
fn test_config_init_then_path() {
    let fx = Fixture::new();
    let config_path = fx.dir.path().join("config.toml");

    let value = fx.run_json(&["config", "init"]);
    assert_eq!(value["created"], true);
    assert!(config_path.exists());

    let value = fx.run_json(&["config", "init"]);
    assert_eq!(value["created"], false);

    let value = fx.run_json(&["config", "path"]);
    assert_eq!(value["path"], config_path.display().to_string());
    assert_eq!(value["exists"], true);
}

#[test]
fn test_config_limit_applies_to_eval() {
    let fx = Fixture::new();
    fs::write(
        fx.dir.path().join("config.toml"),
        "version = 1\n[output]\nlimit = 2\n",
    )
    .unwrap();

    let value = fx.run_json(&["eval", "|(@alice,@bob)"]);
    assert_eq!(value["count"], 3);
    assert_eq!(ids(&value).len(), 2);
}

#[test]
fn test_invalid_config_exit_code() {
    let fx = Fixture::new();
    fs::write(fx.dir.path().join("config.toml"), "version = [").unwrap();

    let output = fx.run(&["check", "@alice"]);
    assert_eq!(output.status.code(), Some(5));
}
