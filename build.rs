//! Build-script metadata injection for `--version` and the menu banner.
//!
//! Dependency-free. Reproducible builds can pin both values through
//! `WAAAYBAR_BUILD_*` or `SOURCE_DATE_EPOCH`; missing tooling yields "unknown".

use std::env;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/index");
    for key in [
        "WAAAYBAR_BUILD_GIT_HASH",
        "WAAAYBAR_BUILD_TIMESTAMP",
        "SOURCE_DATE_EPOCH",
    ] {
        println!("cargo:rerun-if-env-changed={key}");
    }

    let revision = env::var("WAAAYBAR_BUILD_GIT_HASH")
        .ok()
        .or_else(|| git_output(&["describe", "--always", "--dirty", "--abbrev=12"]))
        .unwrap_or_else(|| "unknown".to_string());
    let built_at = env::var("WAAAYBAR_BUILD_TIMESTAMP")
        .ok()
        .or_else(|| env::var("SOURCE_DATE_EPOCH").ok().map(|secs| format!("unix:{secs}")))
        .or_else(utc_date)
        .unwrap_or_else(unix_now);

    println!("cargo:rustc-env=WAAAYBAR_BUILD_GIT_HASH={revision}");
    println!("cargo:rustc-env=WAAAYBAR_BUILD_TIMESTAMP={built_at}");
}

fn git_output(args: &[&str]) -> Option<String> {
    stdout_of("git", args)
}

fn utc_date() -> Option<String> {
    stdout_of("date", &["-u", "+%Y-%m-%dT%H:%M:%SZ"])
}

fn unix_now() -> String {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or(0);
    format!("unix:{secs}")
}

fn stdout_of(program: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(program).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8(output.stdout).ok()?;
    Some(text.trim().to_string()).filter(|value| !value.is_empty())
}
