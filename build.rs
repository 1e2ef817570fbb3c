//! Build script that stamps the binary with its commit hash and build date.

use std::env;
use std::process::Command;

fn git_short_hash() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short=7", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn main() {
    // CI passes these in; local builds fall back to git and the clock
    let commit = env::var("FLAPPY_BUILD_COMMIT")
        .ok()
        .or_else(git_short_hash)
        .unwrap_or_else(|| "unknown".to_string());
    let date = env::var("FLAPPY_BUILD_DATE")
        .unwrap_or_else(|_| chrono::Utc::now().format("%Y-%m-%d").to_string());

    println!("cargo:rustc-env=FLAPPY_COMMIT={}", commit);
    println!("cargo:rustc-env=FLAPPY_DATE={}", date);

    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-env-changed=FLAPPY_BUILD_COMMIT");
    println!("cargo:rerun-if-env-changed=FLAPPY_BUILD_DATE");
}
