use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::{Command, Stdio};

fn run_with_stdin(input: &str, args: &[&str]) -> std::process::Output {
    let mut cmd = Command::cargo_bin("play").expect("binary exists");
    cmd.args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    let mut child = cmd.spawn().expect("spawn");
    {
        let stdin = child.stdin.as_mut().expect("stdin");
        // A process that rejects its flags exits without reading stdin;
        // the resulting broken pipe is not a test failure.
        let _ = stdin.write_all(input.as_bytes());
    }
    child.wait_with_output().expect("wait output")
}

#[test]
fn quits_cleanly_on_command() {
    let output = run_with_stdin("q\n", &["--seed", "1"]);
    assert!(output.status.success(), "process must succeed");
    let stdout = String::from_utf8(output.stdout).expect("utf8 stdout");
    assert!(stdout.contains("[play] commands:"));
    assert!(stdout.contains("level 1 started"));
    assert!(stdout.contains("[play] done."));
}

#[test]
fn unknown_commands_are_tolerated() {
    let output = run_with_stdin("frobnicate\nq\n", &["--seed", "1"]);
    assert!(output.status.success(), "process must succeed");
    let stdout = String::from_utf8(output.stdout).expect("utf8 stdout");
    assert!(stdout.contains("unknown command: frobnicate"));
}

#[test]
fn json_mode_emits_only_parseable_lines() {
    let output = run_with_stdin("state\nq\n", &["--json", "--seed", "7"]);
    assert!(output.status.success(), "process must succeed");
    let stdout = String::from_utf8(output.stdout).expect("utf8 stdout");
    let lines: Vec<&str> = stdout.lines().filter(|l| !l.trim().is_empty()).collect();
    assert!(lines.len() >= 2, "expected start event plus snapshot");
    for line in &lines {
        let parsed: Result<serde_json::Value, _> = serde_json::from_str(line);
        assert!(parsed.is_ok(), "non-JSON line in --json mode: {line}");
    }
    assert!(
        predicate::str::contains("\"tiles\"").eval(&stdout),
        "snapshot line must carry the tile layout"
    );
}

#[test]
fn scrambled_layout_is_deterministic_per_seed() {
    let args = ["--json", "--seed", "42"];
    let out1 = run_with_stdin("state\nq\n", &args);
    let out2 = run_with_stdin("state\nq\n", &args);
    assert!(out1.status.success() && out2.status.success());

    let snap = |raw: &[u8]| -> serde_json::Value {
        let stdout = String::from_utf8(raw.to_vec()).expect("utf8 stdout");
        let line = stdout
            .lines()
            .find(|l| l.contains("\"tiles\""))
            .expect("snapshot line")
            .to_string();
        serde_json::from_str(&line).expect("snapshot json")
    };
    let a = snap(&out1.stdout);
    let b = snap(&out2.stdout);
    assert_eq!(a["tiles"], b["tiles"]);
    assert_eq!(a["empty"], b["empty"]);
    assert_eq!(a["grid_size"], b["grid_size"]);
}

#[test]
fn unscrambled_game_can_be_played_to_a_solve() {
    // Zero scramble iterations leave the board solved at start, so two
    // slides of the tile left of the empty corner solve it again.
    let output = run_with_stdin(
        "m 8\nm 1\nm 8\nq\n",
        &["--json", "--iterations", "0", "--seed", "1"],
    );
    assert!(output.status.success(), "process must succeed");
    let stdout = String::from_utf8(output.stdout).expect("utf8 stdout");
    assert!(predicate::str::contains("MoveApplied").eval(&stdout));
    assert!(predicate::str::contains("MoveRejected").eval(&stdout));
    assert!(predicate::str::contains("Solved").eval(&stdout));
}

#[test]
fn unsupported_grid_size_fails_with_a_message() {
    let output = run_with_stdin("", &["--size", "1"]);
    assert!(!output.status.success(), "size 1 must be rejected");
    let stderr = String::from_utf8(output.stderr).expect("utf8 stderr");
    assert!(stderr.contains("Unsupported grid size"));
}
