use std::io::Write;
use std::process::{Command, Stdio};

use anyhow::{Context, Result};
use tsumiki_ipc::Request;

/// Trait for applying requests to the host (side effects).
/// This abstraction allows mocking in tests.
pub trait WindowManipulator {
    fn send(&mut self, request: Request) -> Result<()>;
    fn exec_command(&mut self, argv: &[String]) -> Result<(), String>;
}

/// Writes requests to the host as JSON lines.
pub struct StdioManipulator<W: Write> {
    out: W,
}

impl<W: Write> StdioManipulator<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> WindowManipulator for StdioManipulator<W> {
    fn send(&mut self, request: Request) -> Result<()> {
        tracing::trace!("Request: {:?}", request);
        serde_json::to_writer(&mut self.out, &request).context("Failed to encode request")?;
        self.out
            .write_all(b"\n")
            .and_then(|_| self.out.flush())
            .context("Failed to write request to host")
    }

    fn exec_command(&mut self, argv: &[String]) -> Result<(), String> {
        spawn_detached(argv)
    }
}

/// Launches `argv` without waiting for it. The child never inherits the
/// protocol stream on stdout.
pub fn spawn_detached(argv: &[String]) -> Result<(), String> {
    let Some((program, args)) = argv.split_first() else {
        return Err("Empty command".to_string());
    };

    let mut cmd = Command::new(program);
    cmd.args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::inherit());
    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        cmd.process_group(0);
    }

    let mut child = cmd
        .spawn()
        .map_err(|e| format!("Failed to spawn {}: {}", program, e))?;
    tracing::info!("Spawned {} (pid={})", argv.join(" "), child.id());

    std::thread::spawn(move || {
        if let Err(e) = child.wait() {
            tracing::warn!("Failed to reap pid {}: {}", child.id(), e);
        }
    });
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stdio_manipulator_writes_json_lines() {
        let mut manipulator = StdioManipulator::new(Vec::new());
        manipulator
            .send(Request::Focus { window: Some(3) })
            .unwrap();
        manipulator.send(Request::Raise { window: 3 }).unwrap();

        let out = String::from_utf8(manipulator.out).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines,
            vec![
                r#"{"type":"focus","window":3}"#,
                r#"{"type":"raise","window":3}"#
            ]
        );
        assert!(out.ends_with('\n'));
    }

    #[test]
    fn test_spawn_rejects_empty_argv() {
        assert!(spawn_detached(&[]).is_err());
    }

    #[test]
    fn test_spawn_reports_missing_program() {
        let argv = vec!["/nonexistent/tsumiki-test-program".to_string()];
        let err = spawn_detached(&argv).unwrap_err();
        assert!(err.contains("Failed to spawn"));
    }
}
