use std::io::Write;
use std::time::Duration;

use assert_cmd::Command;
use predicates::prelude::*;

fn flipbook() -> Command {
    let mut cmd = Command::cargo_bin("flipbook").unwrap();
    cmd.timeout(Duration::from_secs(10));
    cmd
}

#[test]
fn help_lists_timing_flags() {
    flipbook()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--frames"))
        .stdout(predicate::str::contains("--driver"));
}

#[test]
fn rejects_unknown_driver() {
    flipbook()
        .args(["--driver", "warp", "--quiet"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn zero_frame_count_fails() {
    flipbook()
        .args(["--frames", "0", "--quiet"])
        .assert()
        .failure();
}

#[test]
fn bad_config_file_fails() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{{ not json").unwrap();

    flipbook()
        .args(["--config", file.path().to_str().unwrap(), "--quiet"])
        .assert()
        .failure();
}

#[test]
fn quiet_run_completes() {
    flipbook()
        .args(["--frames", "2", "--loops", "1", "--fps", "100", "--quiet"])
        .write_stdin("")
        .assert()
        .success();
}

#[test]
fn config_file_run_completes() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"frame_count": 3, "loop_count": 2, "frames_per_second": 100.0, "driver_mode": "busy-poll"}}"#
    )
    .unwrap();

    flipbook()
        .args(["--config", file.path().to_str().unwrap(), "--quiet"])
        .write_stdin("")
        .assert()
        .success();
}
