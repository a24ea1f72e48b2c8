//! Embeds the git describe output as the reported binary version.

use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/");

    // Fall back to the crate version when building outside a checkout.
    let version = describe_head().unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string());

    println!("cargo:rustc-env=ARTWALL_VERSION={}", version);
}

fn describe_head() -> Option<String> {
    let output = Command::new("git")
        .args(["describe", "--tags", "--always"])
        .output()
        .ok()?;

    if !output.status.success() {
        return None;
    }

    let described = String::from_utf8(output.stdout).ok()?;
    let described = described.trim();

    if described.is_empty() {
        return None;
    }

    // Tags carry a leading 'v' that the version string should not.
    Some(described.strip_prefix('v').unwrap_or(described).to_string())
}
