//! Desktop integration: phase notifications and the system URL opener

use crate::domain::Phase;
use std::io;
use std::process::{Command, Stdio};

/// Focus playlist opened by the music action
pub const DEFAULT_PLAYLIST_URL: &str = "https://open.spotify.com/playlist/37i9dQZF1DWZeKCadgRdKQ";

/// Send a notification when a phase runs out
/// Currently only implements macOS notifications
pub fn notify_phase_finished(finished: Phase, next: Phase) {
    #[cfg(target_os = "macos")]
    {
        let script = format!(
            r#"display notification "{} {} is up" with title "Focus Timer - {}""#,
            finished.symbol(),
            finished.name(),
            next.title(),
        );

        let _ = Command::new("osascript")
            .arg("-e")
            .arg(&script)
            .output();
    }

    #[cfg(not(target_os = "macos"))]
    {
        // No-op on other platforms
        let _ = (finished, next);
    }
}

/// Platform command that hands a URL to the default browser
fn opener_command(url: &str) -> Command {
    #[cfg(target_os = "macos")]
    {
        let mut cmd = Command::new("open");
        cmd.arg(url);
        cmd
    }

    #[cfg(target_os = "windows")]
    {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", "start", "", url]);
        cmd
    }

    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    {
        let mut cmd = Command::new("xdg-open");
        cmd.arg(url);
        cmd
    }
}

/// Open `url` in a new browser context without waiting for it
pub fn open_url(url: &str) -> io::Result<()> {
    let mut child = opener_command(url)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;

    // Reap the opener in the background so it does not linger as a zombie
    std::thread::spawn(move || {
        let _ = child.wait();
    });
    Ok(())
}
