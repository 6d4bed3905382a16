//! Hands serialized configuration to a running Alacritty via `alacritty msg`.

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::Command;

use tracing::{debug, warn};

use crate::data::fields::ConfigFields;
use crate::error::{Error, Result};
use crate::transforms::build::build_payload;

/// Receiver of configuration changes.
///
/// Each call is one independent round trip. Implementations keep no
/// state between calls.
pub trait Dispatcher {
    /// Apply a serialized configuration document.
    fn apply(&self, payload: &str) -> Result<()>;

    /// Drop every runtime override.
    fn reset(&self) -> Result<()>;
}

/// Runs `alacritty msg config`.
#[derive(Debug, Clone)]
pub struct AlacrittyMsg {
    program: PathBuf,
    socket: Option<PathBuf>,
    window_id: Option<String>,
}

impl AlacrittyMsg {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            socket: None,
            window_id: None,
        }
    }

    /// IPC socket to talk to instead of the one Alacritty finds itself.
    pub fn with_socket(mut self, socket: Option<PathBuf>) -> Self {
        self.socket = socket;
        self
    }

    /// Limit changes to one window. Without it every window is affected.
    pub fn with_window_id(mut self, window_id: Option<String>) -> Self {
        self.window_id = window_id;
        self
    }

    /// Arguments for `<program> msg [--socket S] config [-w ID] <tail>`.
    pub fn args(&self, tail: &str) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec!["msg".into()];
        if let Some(socket) = &self.socket {
            args.push("--socket".into());
            args.push(socket.into());
        }
        args.push("config".into());
        if let Some(id) = &self.window_id {
            args.push("-w".into());
            args.push(id.into());
        }
        args.push(tail.into());
        args
    }

    fn run(&self, tail: &str) -> Result<()> {
        let args = self.args(tail);
        let command = display_command(&self.program, &args);
        debug!(%command, "running");

        let output = Command::new(&self.program)
            .args(&args)
            .output()
            .map_err(|source| Error::Spawn {
                program: self.program.display().to_string(),
                source,
            })?;

        if output.status.success() {
            return Ok(());
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        let cause = match stderr.trim() {
            "" => output.status.to_string(),
            msg => format!("{}: {}", output.status, msg),
        };
        warn!(program = %self.program.display(), %cause, "alacritty rejected the request");
        Err(Error::Dispatch {
            program: self.program.display().to_string(),
            command,
            cause,
        })
    }
}

impl Default for AlacrittyMsg {
    fn default() -> Self {
        Self::new("alacritty")
    }
}

impl Dispatcher for AlacrittyMsg {
    fn apply(&self, payload: &str) -> Result<()> {
        self.run(payload)
    }

    fn reset(&self) -> Result<()> {
        self.run("-r")
    }
}

fn display_command(program: &std::path::Path, args: &[OsString]) -> String {
    std::iter::once(program.as_os_str())
        .chain(args.iter().map(OsString::as_os_str))
        .map(|s| s.to_string_lossy())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Build the payload from `fields` and send it.
///
/// Nothing is dispatched when validation or serialization fails. Returns
/// the payload that was applied.
pub fn apply_fields(fields: &ConfigFields, dispatcher: &dyn Dispatcher) -> Result<String> {
    let payload = build_payload(fields)?;
    dispatcher.apply(&payload)?;
    Ok(payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Apply(String),
        Reset,
    }

    #[derive(Default)]
    struct Recorder {
        calls: RefCell<Vec<Call>>,
    }

    impl Dispatcher for Recorder {
        fn apply(&self, payload: &str) -> Result<()> {
            self.calls.borrow_mut().push(Call::Apply(payload.to_string()));
            Ok(())
        }

        fn reset(&self) -> Result<()> {
            self.calls.borrow_mut().push(Call::Reset);
            Ok(())
        }
    }

    #[test]
    fn test_apply_fields_dispatches_payload() {
        let recorder = Recorder::default();
        let fields = ConfigFields {
            cursor_style: "Beam".to_string(),
            window_opacity: 0.8,
            ..Default::default()
        };
        let payload = apply_fields(&fields, &recorder).unwrap();
        assert!(payload.contains(r#"style = "Beam""#));
        assert!(payload.contains("opacity = 0.8"));
        assert_eq!(*recorder.calls.borrow(), vec![Call::Apply(payload)]);
    }

    #[test]
    fn test_invalid_values_never_dispatch() {
        let recorder = Recorder::default();
        for fields in [
            ConfigFields {
                cursor_style: "Bold".to_string(),
                ..Default::default()
            },
            ConfigFields {
                window_startup_mode: "Hidden".to_string(),
                ..Default::default()
            },
            ConfigFields {
                window_decorations: "Rounded".to_string(),
                ..Default::default()
            },
        ] {
            assert!(apply_fields(&fields, &recorder).is_err());
        }
        assert!(recorder.calls.borrow().is_empty());
    }

    #[test]
    fn test_args_plain() {
        let msg = AlacrittyMsg::default();
        assert_eq!(msg.args("-r"), vec!["msg", "config", "-r"]);
    }

    #[test]
    fn test_args_with_socket_and_window() {
        let msg = AlacrittyMsg::default()
            .with_socket(Some(PathBuf::from("/run/user/1000/Alacritty.sock")))
            .with_window_id(Some("94371842".to_string()));
        assert_eq!(
            msg.args("font.size = 12.0"),
            vec![
                "msg",
                "--socket",
                "/run/user/1000/Alacritty.sock",
                "config",
                "-w",
                "94371842",
                "font.size = 12.0",
            ]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_successful_exit() {
        assert!(AlacrittyMsg::new("true").apply("[window]\nopacity = 1.0\n").is_ok());
        assert!(AlacrittyMsg::new("true").reset().is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_exit() {
        let err = AlacrittyMsg::new("false").reset().unwrap_err();
        match err {
            Error::Dispatch {
                program,
                command,
                cause,
            } => {
                assert_eq!(program, "false");
                assert_eq!(command, "false msg config -r");
                assert!(cause.contains("exit status"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_missing_program() {
        let err = AlacrittyMsg::new("/nonexistent/alacritty").reset().unwrap_err();
        assert!(matches!(err, Error::Spawn { .. }));
    }

    #[cfg(unix)]
    fn fake_alacritty(dir: &std::path::Path, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = dir.join("alacritty");
        std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[cfg(unix)]
    #[test]
    fn test_payload_passed_as_single_argument() {
        let dir = tempfile::tempdir().unwrap();
        let log = dir.path().join("args.log");
        let script = fake_alacritty(
            dir.path(),
            &format!("for a in \"$@\"; do printf '%s\\n--\\n' \"$a\" >> '{}'; done", log.display()),
        );

        let payload = "[cursor]\nstyle = \"Beam\"";
        AlacrittyMsg::new(&script).apply(payload).unwrap();

        let recorded = std::fs::read_to_string(&log).unwrap();
        let args: Vec<&str> = recorded.split("\n--\n").filter(|s| !s.is_empty()).collect();
        assert_eq!(args, vec!["msg", "config", payload]);
    }

    #[cfg(unix)]
    #[test]
    fn test_reset_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let log = dir.path().join("calls.log");
        let script = fake_alacritty(dir.path(), &format!("echo \"$*\" >> '{}'", log.display()));

        let msg = AlacrittyMsg::new(&script);
        msg.reset().unwrap();
        msg.reset().unwrap();

        let recorded = std::fs::read_to_string(&log).unwrap();
        let lines: Vec<&str> = recorded.lines().collect();
        assert_eq!(lines, vec!["msg config -r", "msg config -r"]);
    }

    #[derive(Clone, Default)]
    struct Captured(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for Captured {
        type Writer = Captured;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_failure_warning_leaves_out_payload() {
        let captured = Captured::default();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_ansi(false)
            .with_writer(captured.clone())
            .finish();

        let payload = "[font]\nsize = 12.0";
        let err = tracing::subscriber::with_default(subscriber, || {
            AlacrittyMsg::new("false").apply(payload).unwrap_err()
        });

        let logs = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert!(logs.contains("alacritty rejected the request"));
        assert!(!logs.contains("size = 12.0"));
        assert!(!err.to_string().contains("size = 12.0"));
    }

    #[cfg(unix)]
    #[test]
    fn test_stderr_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let script = fake_alacritty(dir.path(), "echo 'no socket found' >&2; exit 3");

        let err = AlacrittyMsg::new(&script).reset().unwrap_err();
        assert!(err.to_string().contains("no socket found"));
    }
}
