use nix::errno::Errno;
use nix::sys::signal::kill;
use nix::unistd::Pid;

/// Non-destructive liveness check for `pid`.
///
/// `kill(pid, None)` delivers no signal and only reports whether delivery
/// would be possible. EPERM means the process exists but belongs to another
/// user, so it counts as alive; ESRCH counts as dead.
pub fn is_alive(pid: i32) -> bool {
    match kill(Pid::from_raw(pid), None) {
        Ok(()) => true,
        Err(Errno::EPERM) => true,
        Err(_) => false,
    }
}
