use std::path::Path;
use std::process::Stdio;

use tokio::process::Command;

use crate::error::VoltError;

/// Clone `url` into `dest` with a history depth of one
pub(super) async fn shallow_clone(
    url: &str,
    reference: Option<&str>,
    dest: &Path,
) -> Result<(), VoltError> {
    if let Some(parent) = dest.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| VoltError::io(parent, e))?;
    }

    let mut cmd = Command::new("git");
    cmd.args(["clone", "--depth", "1"]);
    if let Some(reference) = reference {
        cmd.args(["--branch", reference]);
    }
    cmd.arg(url)
        .arg(dest)
        .env("GIT_TERMINAL_PROMPT", "0")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::piped());

    tracing::debug!("Cloning {} into {}", url, dest.display());

    let output = cmd
        .output()
        .await
        .map_err(|e| VoltError::Fetch(format!("failed to run git: {}", e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(VoltError::Fetch(format!(
            "git clone of {} failed ({}): {}",
            url,
            output.status,
            stderr.trim()
        )));
    }

    Ok(())
}
