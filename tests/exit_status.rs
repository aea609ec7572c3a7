//! Verifies the exit wrapper end to end: hooks run, then the process
//! terminates with the requested status. Needs a real process boundary, so
//! the test re-invokes its own binary filtered down to `exit_child`.

use std::env;
use std::fs;
use std::process::Command;

const CHILD_ENV: &str = "CLEANUP_EXIT_CHILD";
const MARKER_ENV: &str = "CLEANUP_EXIT_MARKER";

#[test]
fn exit_child() {
    // No-op unless re-invoked by exit_runs_hooks_then_reports_status.
    if env::var(CHILD_ENV).is_err() {
        return;
    }
    let marker = env::var(MARKER_ENV).unwrap();

    cleanup::register("marker", move || {
        fs::write(&marker, "swept").unwrap();
    });
    cleanup::exit(7);
}

#[test]
fn exit_runs_hooks_then_reports_status() {
    let dir = tempfile::tempdir().unwrap();
    let marker = dir.path().join("marker");

    let status = Command::new(env::current_exe().unwrap())
        .args(["exit_child", "--exact", "--test-threads=1"])
        .env(CHILD_ENV, "1")
        .env(MARKER_ENV, &marker)
        .status()
        .unwrap();

    assert_eq!(status.code(), Some(7));
    assert_eq!(fs::read_to_string(&marker).unwrap(), "swept");
}
