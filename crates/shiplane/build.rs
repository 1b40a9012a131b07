use std::process::Command;

use chrono::Utc;

fn main() {
    println!("cargo:rerun-if-changed=../../.git/HEAD");
    println!("cargo:rerun-if-changed=../../.git/refs/tags");

    let version = env!("CARGO_PKG_VERSION");
    let release_tag = format!("shiplane@v{version}");

    // Builds off the release tag report the plain version; everything else
    // carries the commit and build date as semver build metadata.
    let long_version = match git(&["rev-parse", "--short", "HEAD"]) {
        Some(_) if head_is_tagged(&release_tag) => version.to_owned(),
        Some(hash) => format!("{version}+{hash}.{}", Utc::now().format("%Y%m%d")),
        None => format!("{version}+unknown"),
    };

    println!("cargo:rustc-env=SHIPLANE_VERSION={long_version}");
}

fn head_is_tagged(tag: &str) -> bool {
    git(&["tag", "--points-at", "HEAD"])
        .is_some_and(|tags| tags.lines().any(|line| line.trim() == tag))
}

fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let stdout = String::from_utf8(output.stdout).ok()?;
    Some(stdout.trim().to_owned())
}
