//! Audio playback via external player binaries
//!
//! Rather than decoding audio in-process, playback shells out to whichever
//! command-line player the host has installed, trying each candidate in a
//! fixed priority order.

use std::path::Path;
use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;
use tokio::time::timeout;

use crate::{Error, Result};

/// Wall-clock limit per player invocation
const PLAY_TIMEOUT: Duration = Duration::from_secs(10);

/// A candidate external audio player
#[derive(Debug, Clone, Copy)]
pub struct Player {
    /// Binary name, resolved via PATH
    pub program: &'static str,
    /// Arguments placed before the file path
    pub args: &'static [&'static str],
}

/// Candidate players in priority order
///
/// The file path is appended as the sole positional argument. Adding a player
/// means adding an entry here.
pub const PLAYERS: &[Player] = &[
    Player { program: "mpg123", args: &[] },
    Player { program: "afplay", args: &[] },
    Player { program: "paplay", args: &[] },
    Player { program: "aplay", args: &[] },
    Player { program: "ffplay", args: &["-nodisp", "-autoexit", "-loglevel", "quiet"] },
];

/// Play an audio file through the first working system player
///
/// # Errors
///
/// Returns [`Error::Playback`] if the file does not exist or no candidate
/// player succeeded.
pub async fn play_file(path: &Path) -> Result<()> {
    play_with(PLAYERS, path).await
}

/// Play an audio file using an explicit candidate list
///
/// Candidates are tried in order; a missing binary, a timeout, or a non-zero
/// exit all mean "try the next one".
///
/// # Errors
///
/// Returns [`Error::Playback`] if the file does not exist or every candidate
/// was skipped.
pub async fn play_with(players: &[Player], path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(Error::Playback(format!(
            "audio file missing: {}",
            path.display()
        )));
    }

    for player in players {
        match try_player(player, path).await {
            Ok(()) => {
                tracing::debug!(player = player.program, "playback succeeded");
                return Ok(());
            }
            Err(reason) => {
                tracing::debug!(player = player.program, %reason, "skipping player");
            }
        }
    }

    Err(Error::Playback(format!(
        "could not play audio file: {}",
        path.display()
    )))
}

/// Run one candidate player to completion
///
/// `Err` carries the skip reason for the caller to log.
async fn try_player(player: &Player, path: &Path) -> std::result::Result<(), String> {
    let child = Command::new(player.program)
        .args(player.args)
        .arg(path)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                "not installed".to_string()
            } else {
                format!("failed to spawn: {e}")
            }
        })?;

    let output = timeout(PLAY_TIMEOUT, child.wait_with_output())
        .await
        .map_err(|_| format!("timed out after {PLAY_TIMEOUT:?}"))?
        .map_err(|e| format!("wait failed: {e}"))?;

    if output.status.success() {
        Ok(())
    } else {
        let code = output.status.code().unwrap_or(-1);
        Err(format!("exited with code {code}"))
    }
}
