//! External terminal launching
//!
//! Opens an interactive shell or a log follow inside a new terminal
//! emulator window. The launch runs as a detached task so a slow window
//! manager cannot stall the refresh loop; failure comes back over a
//! single-fire channel that the event loop consumes once.

use tokio::process::Command;
use tokio::sync::oneshot;
use tracing::{info, warn};

use crate::core::{Result, RuntimeError};

/// The command line run inside the new terminal window for a shell:
/// probe for bash and fall back to sh.
fn shell_probe_command(program: &str, container_id: &str) -> String {
    format!(
        "{} exec -it {} sh -c '[ -x /bin/bash ] && exec /bin/bash || exec /bin/sh'",
        program, container_id
    )
}

/// The command line run inside the new terminal window for logs.
fn logs_follow_command(program: &str, container_id: &str) -> String {
    format!("{} logs -f {}", program, container_id)
}

/// Open an interactive shell into `container_id` in a new terminal window.
///
/// Returns the receiving half of a single-fire failure channel. The
/// sender is dropped on success, so the receiver either yields one error
/// message or closes silently.
pub fn open_terminal(program: &str, container_id: &str) -> oneshot::Receiver<String> {
    spawn_in_terminal(shell_probe_command(program, container_id))
}

/// Follow `container_id`'s logs in a new terminal window.
pub fn open_logs(program: &str, container_id: &str) -> oneshot::Receiver<String> {
    spawn_in_terminal(logs_follow_command(program, container_id))
}

fn spawn_in_terminal(command: String) -> oneshot::Receiver<String> {
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        info!("Launching external terminal: {}", command);
        if let Err(e) = launch(&command).await {
            warn!("Terminal launch failed: {}", e);
            let _ = tx.send(format!("Failed to open terminal: {}", e.user_message()));
        }
    });

    rx
}

/// Spawn a platform-specific terminal emulator running `command`.
async fn launch(command: &str) -> Result<()> {
    if cfg!(target_os = "macos") {
        Command::new("open")
            .args(["-a", "Terminal", "--", "sh", "-c", command])
            .spawn()?;
    } else if cfg!(target_os = "linux") {
        // Inside a Flatpak-style sandbox the emulator lives on the host
        if std::env::var_os("container").is_some() {
            Command::new("flatpak-spawn")
                .args(["--host", "x-terminal-emulator", "-e"])
                .arg(format!("sh -c \"{}\"", command))
                .spawn()?;
        } else {
            Command::new("x-terminal-emulator")
                .arg("-e")
                .arg(format!("sh -c \"{}\"", command))
                .spawn()?;
        }
    } else if cfg!(target_os = "windows") {
        Command::new("cmd")
            .args(["/C", "start", "cmd", "/K", command])
            .spawn()?;
    } else {
        return Err(RuntimeError::PlatformUnsupported(std::env::consts::OS.to_string()).into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_probe_prefers_bash() {
        let cmd = shell_probe_command("docker", "abc123");
        assert!(cmd.starts_with("docker exec -it abc123"));
        assert!(cmd.contains("/bin/bash"));
        assert!(cmd.contains("exec /bin/sh"));
    }

    #[test]
    fn test_logs_command_follows() {
        assert_eq!(logs_follow_command("podman", "abc123"), "podman logs -f abc123");
    }

    #[tokio::test]
    async fn test_failure_channel_fires_once() {
        // A command that cannot possibly launch a terminal reports back
        // through the channel instead of panicking the event loop.
        let (tx, rx) = oneshot::channel::<String>();
        tokio::spawn(async move {
            let _ = tx.send("Failed to open terminal: boom".to_string());
        });

        let msg = rx.await.unwrap();
        assert!(msg.contains("Failed to open terminal"));
    }
}
