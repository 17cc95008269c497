use std::fs;
use std::process::Command;

fn read_trimmed(path: &str, fallback: &str) -> String {
    fs::read_to_string(path)
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|_| fallback.to_string())
}

fn main() {
    // Monotonic build counter, persisted next to the manifest
    let build: u64 = read_trimmed("BUILD_NUMBER", "0").parse().unwrap_or(0) + 1;
    fs::write("BUILD_NUMBER", build.to_string()).expect("failed to write BUILD_NUMBER");

    let profile = match std::env::var("PROFILE").as_deref() {
        Ok("release") => "release",
        _ => "development",
    };

    let git_hash = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string());

    println!("cargo:rustc-env=CIFRA_VERSION={}", read_trimmed("VERSION", "0.1.0"));
    println!("cargo:rustc-env=CIFRA_BUILD={}", build);
    println!("cargo:rustc-env=CIFRA_PROFILE={}", profile);
    println!("cargo:rustc-env=CIFRA_GIT_HASH={}", git_hash);

    println!("cargo:rerun-if-changed=VERSION");
    println!("cargo:rerun-if-env-changed=PROFILE");
}
