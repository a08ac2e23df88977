//! Command execution utilities

use crate::error::{DisplayfetchError, Result};
use std::io::Read;
use std::process::{Command, Stdio};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(2000);

const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Execute a command and return its trimmed stdout, killing it once `timeout` passes.
///
/// Fails with `Io` when the program cannot be spawned, `Detection` on a
/// non-zero exit and `Timeout` when the deadline is hit.
pub fn run_command_timeout(program: &str, args: &[&str], timeout: Duration) -> Result<String> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()?;

    let mut stdout = child.stdout.take().ok_or_else(|| {
        DisplayfetchError::detection(format!("Command '{}' has no stdout handle", program))
    })?;

    // Drain stdout concurrently so a chatty child never blocks on a full pipe
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let mut buf = Vec::new();
        let result = stdout.read_to_end(&mut buf).map(|_| buf);
        let _ = tx.send(result);
    });

    let deadline = Instant::now() + timeout;
    let status = loop {
        if let Some(status) = child.try_wait()? {
            break status;
        }
        if Instant::now() >= deadline {
            let _ = child.kill();
            let _ = child.wait();
            return Err(timed_out(program, timeout));
        }
        thread::sleep(POLL_INTERVAL);
    };

    if !status.success() {
        return Err(DisplayfetchError::detection(format!(
            "Command '{}' failed with exit code: {:?}",
            program,
            status.code()
        )));
    }

    // A grandchild may still hold the pipe open; never wait past the deadline for it
    let remaining = deadline.saturating_duration_since(Instant::now());
    let bytes = match rx.recv_timeout(remaining) {
        Ok(result) => result?,
        Err(_) => return Err(timed_out(program, timeout)),
    };

    Ok(String::from_utf8_lossy(&bytes).trim().to_string())
}

fn timed_out(program: &str, timeout: Duration) -> DisplayfetchError {
    DisplayfetchError::Timeout {
        program: program.to_string(),
        timeout_ms: timeout.as_millis() as u64,
    }
}
