//! The file-opener capability.
//!
//! Opening a generated PDF in a viewer is best-effort: the collaborator has
//! no return contract, and failures are logged rather than surfaced as hard
//! errors.

use std::{io, path::Path, process::Command};

/// Launches a viewer for a file.
pub trait FileOpener {
    /// Best-effort launch of the platform viewer for `path`.
    fn open(&self, path: &Path);
}

/// Opens files with the platform's default application.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemOpener;

impl FileOpener for SystemOpener {
    fn open(&self, path: &Path) {
        if let Err(e) = launch(path) {
            log::warn!("failed to open {}: {e}", path.display());
        }
    }
}

/// Spawns the platform launcher without waiting for it.
#[cfg(target_os = "windows")]
fn launch(path: &Path) -> io::Result<()> {
    Command::new("cmd")
        .args(["/C", "start", ""])
        .arg(path)
        .spawn()
        .map(|_| ())
}

/// Spawns the platform launcher without waiting for it.
#[cfg(target_os = "macos")]
fn launch(path: &Path) -> io::Result<()> {
    Command::new("open").arg(path).spawn().map(|_| ())
}

/// Spawns the platform launcher without waiting for it.
#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn launch(path: &Path) -> io::Result<()> {
    Command::new("xdg-open").arg(path).spawn().map(|_| ())
}
