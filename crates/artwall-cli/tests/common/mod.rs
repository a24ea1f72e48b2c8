use std::path::Path;
use std::process::{Command, Output};

/// Run the CLI binary against an isolated store root.
pub fn run_cli(args: &[&str], root: &Path) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_artwall"));
    cmd.args(args);
    cmd.arg("--root");
    cmd.arg(root);
    cmd.output().expect("Failed to execute CLI")
}

/// Run the CLI and expect success, returning stdout.
pub fn run_cli_success(args: &[&str], root: &Path) -> String {
    let output = run_cli(args, root);
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("CLI command failed: {:?}\nstderr: {}", args, stderr);
    }
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Extract the pagination cursor the CLI reports on stderr, if any.
pub fn next_cursor(output: &Output) -> Option<String> {
    let stderr = String::from_utf8_lossy(&output.stderr);
    stderr.lines().find_map(|line| {
        line.strip_prefix("Next cursor: ")
            .map(|token| token.trim().to_string())
    })
}
