use std::path::Path;
use std::process::{Command, Output};

/// Execute the sector-sync binary at `bin` and return the output
pub fn execute_sector_sync(
    bin: impl AsRef<Path>,
    args: &[&str],
) -> Result<Output, Box<dyn std::error::Error>> {
    let output = Command::new(bin.as_ref())
        .args(args)
        .env("RUST_LOG", "sector_sync=debug")
        .env_remove("SECTOR_SYNC_TABLE")
        .env_remove("SECTOR_SYNC_DIALECT")
        .output()?;
    Ok(output)
}

/// Verify CLI command succeeded
pub fn assert_cli_success(output: &Output, command_desc: &str) {
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let stdout = String::from_utf8_lossy(&output.stdout);
        panic!(
            "{} failed!\nExit code: {:?}\nStdout: {}\nStderr: {}",
            command_desc,
            output.status.code(),
            stdout,
            stderr
        );
    }
}

/// Verify CLI command failed with exit code 1 and an `Error:` line on stderr
pub fn assert_cli_failure(output: &Output, command_desc: &str) {
    let stderr = String::from_utf8_lossy(&output.stderr);
    if output.status.code() != Some(1) || !stderr.contains("Error: ") {
        panic!(
            "{} was expected to fail!\nExit code: {:?}\nStdout: {}\nStderr: {}",
            command_desc,
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            stderr
        );
    }
}
