#![allow(dead_code)]
#![allow(deprecated)]

use assert_cmd::Command;
use std::path::Path;

pub fn stusched_cmd() -> Command {
    let mut cmd = Command::cargo_bin("stusched").unwrap();
    cmd.env_remove("STUSCHED_ROOT");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Initialize a schedule in `dir`
pub fn init_schedule(dir: &Path) {
    stusched_cmd().arg("init").arg(dir).assert().success();
}

/// Run a command inside `dir` and return its stdout
pub fn run_in(dir: &Path, args: &[&str]) -> String {
    let output = stusched_cmd()
        .current_dir(dir)
        .args(args)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    String::from_utf8(output).unwrap()
}

/// Pull the id out of an "Added ... [<id>]" line
pub fn added_id(stdout: &str) -> String {
    let start = stdout.rfind('[').expect("no id in output") + 1;
    let end = stdout.rfind(']').expect("no id in output");
    stdout[start..end].to_string()
}

pub fn add_subject(dir: &Path, name: &str, teacher: &str, time: &str, days: &str) -> String {
    let stdout = run_in(
        dir,
        &[
            "subject", "add", "--name", name, "--teacher", teacher, "--time", time, "--days",
            days,
        ],
    );
    added_id(&stdout)
}

pub fn add_exam(dir: &Path, name: &str, date: &str, time: &str, location: &str) -> String {
    let stdout = run_in(
        dir,
        &[
            "exam", "add", "--name", name, "--date", date, "--time", time, "--location",
            location,
        ],
    );
    added_id(&stdout)
}

pub fn snapshot_path(dir: &Path) -> std::path::PathBuf {
    dir.join(".stusched")
        .join("store")
        .join("studentScheduleData.json")
}
