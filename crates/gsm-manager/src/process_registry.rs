//! Server process lifecycle: spawn, track, stop.

use crate::{ManagerError, ProfilePaths, Result};

use gsm_core::{Profile, TrackedProcess};

use std::collections::HashMap;
use std::ffi::OsStr;
use std::sync::Arc;

use log::{info, warn};
use sysinfo::{ProcessesToUpdate, System};
use tokio::sync::RwLock;

/// Result of a start request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartOutcome {
    pub started: bool,
    pub already_running: bool,
}

/// Tracks zero-or-one running server process per profile name.
///
/// The registry is the source of truth for "is this profile's server
/// running". Spawned servers are detached from the manager's own
/// lifecycle: closing the console must not take the game down with it.
#[derive(Clone, Default)]
pub struct ProcessRegistry {
    processes: Arc<RwLock<HashMap<String, TrackedProcess>>>,
}

impl ProcessRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the profile's server.
    ///
    /// Idempotent: if a process is already tracked for this profile the
    /// call reports `already_running` and never spawns a second one.
    pub async fn start(&self, profile: &Profile, paths: &ProfilePaths) -> Result<StartOutcome> {
        if !paths.executable.exists() {
            return Err(ManagerError::not_found(format!(
                "Executable not found: {}",
                paths.executable.display()
            )));
        }

        // Lock held across the spawn so two racing starts cannot both
        // pass the occupancy check.
        let mut processes = self.processes.write().await;

        if processes.contains_key(&profile.name) {
            return Ok(StartOutcome {
                started: false,
                already_running: true,
            });
        }

        let pid = spawn_detached(paths)?;
        info!("Spawned server for profile {} (PID {})", profile.name, pid);

        processes.insert(profile.name.clone(), TrackedProcess::new(&profile.name, pid));

        Ok(StartOutcome {
            started: true,
            already_running: false,
        })
    }

    /// Stop the profile's server, best-effort.
    ///
    /// Targets the tracked PID when we have one; falls back to killing
    /// processes matching the server executable name only when the
    /// server was started outside the console. The tracked entry is
    /// always cleared, even when termination fails (optimistic cleanup).
    pub async fn stop(&self, profile: &Profile, executable_name: &str) -> bool {
        let tracked = self.processes.write().await.remove(&profile.name);

        match tracked {
            Some(process) => {
                info!(
                    "Stopping server for profile {} (PID {})",
                    profile.name, process.pid
                );
                terminate_pid(process.pid)
            }
            None => {
                // Adoption path: the server may have been started by hand.
                let killed = kill_by_name(executable_name);
                if killed == 0 {
                    warn!(
                        "No tracked or discovered process for profile {}",
                        profile.name
                    );
                }
                killed > 0
            }
        }
    }

    /// Drop the tracked entry for a profile whose process exited on its
    /// own (detected by the sampler).
    pub async fn mark_exited(&self, profile_name: &str) -> Option<TrackedProcess> {
        let removed = self.processes.write().await.remove(profile_name);
        if let Some(ref process) = removed {
            info!(
                "Server for profile {} exited (was PID {})",
                profile_name, process.pid
            );
        }
        removed
    }

    pub async fn is_running(&self, profile_name: &str) -> bool {
        self.processes.read().await.contains_key(profile_name)
    }

    pub async fn tracked_pid(&self, profile_name: &str) -> Option<u32> {
        self.processes
            .read()
            .await
            .get(profile_name)
            .map(|p| p.pid)
    }

    pub async fn running(&self) -> Vec<TrackedProcess> {
        self.processes.read().await.values().cloned().collect()
    }
}

/// Spawn the server binary detached: its own session on Unix, no
/// inherited stdio, cwd at the install directory.
fn spawn_detached(paths: &ProfilePaths) -> Result<u32> {
    let mut cmd = std::process::Command::new(&paths.executable);
    cmd.current_dir(&paths.install)
        .stdin(std::process::Stdio::null())
        .stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::null());

    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        unsafe {
            cmd.pre_exec(|| {
                libc::setsid();
                Ok(())
            });
        }
    }

    #[cfg(windows)]
    {
        use std::os::windows::process::CommandExt;
        const DETACHED_PROCESS: u32 = 0x0000_0008;
        const CREATE_NEW_PROCESS_GROUP: u32 = 0x0000_0200;
        cmd.creation_flags(DETACHED_PROCESS | CREATE_NEW_PROCESS_GROUP);
    }

    let child = cmd
        .spawn()
        .map_err(|e| ManagerError::process(format!("Failed to spawn server: {e}")))?;

    let pid = child.id();

    // Detached - the OS owns it from here.
    drop(child);

    Ok(pid)
}

fn terminate_pid(pid: u32) -> bool {
    #[cfg(unix)]
    {
        use nix::sys::signal::{Signal, kill};
        use nix::unistd::Pid;

        kill(Pid::from_raw(pid as i32), Signal::SIGTERM).is_ok()
    }

    #[cfg(windows)]
    {
        std::process::Command::new("taskkill")
            .args(["/F", "/PID", &pid.to_string()])
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
    }
}

/// Kill every process whose executable name matches. Returns the count.
fn kill_by_name(executable_name: &str) -> usize {
    let mut system = System::new();
    system.refresh_processes(ProcessesToUpdate::All, true);

    system
        .processes_by_exact_name(OsStr::new(executable_name))
        .filter(|process| process.kill())
        .count()
}
