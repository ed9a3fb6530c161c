//! What reaches the `tracing` diagnostic channel.
#![cfg(feature = "tracing")]

use std::{
    io,
    sync::{Arc, Mutex},
};
use switchboard::{DispatchTable, SwitchError, missing_case, missing_with};

// ============================================================================
// Log Capture
// ============================================================================

/// An in-memory sink for formatted log lines.
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn lines(&self) -> Vec<String> {
        let bytes = self.0.lock().unwrap();
        String::from_utf8_lossy(&bytes)
            .lines()
            .map(str::to_owned)
            .collect()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `f` with a subscriber writing into a fresh buffer, returning the
/// lines it logged.
fn capture(f: impl FnOnce()) -> Vec<String> {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::TRACE)
        .finish();

    tracing::subscriber::with_default(subscriber, f);
    logs.lines()
}

fn nothing(_: ()) {}

fn switch() -> DispatchTable<&'static str, (), ()> {
    DispatchTable::builder().label("Switch").build()
}

// ============================================================================
// Overwrites
// ============================================================================

#[test]
fn test_first_registration_logs_nothing() {
    let lines = capture(|| {
        let mut table = switch();
        table.register("x", |_: ()| {});
        table.register("y", |_: ()| {});
    });

    assert!(lines.is_empty(), "unexpected log output: {lines:?}");
}

#[test]
fn test_overwrite_logs_one_warning() {
    let lines = capture(|| {
        let mut table = switch();
        table.register("x", |_: ()| {});
        table.register("x", |_: ()| {});
    });

    assert_eq!(lines.len(), 1, "{lines:?}");
    assert!(lines[0].contains(" WARN "));
    assert!(lines[0].contains("switchboard::table"));
    assert!(lines[0].contains("Switch.update: \"x\" already exists and will be overridden."));
}

#[test]
fn test_each_overwrite_logs_once() {
    let lines = capture(|| {
        let mut table = switch();
        table.register("x", |_: ()| {});
        table.update("x", |_: ()| {});
        table.update("default", |_: ()| {});
        table.merge([("x", nothing), ("z", nothing)]);
    });

    let warnings: Vec<_> = lines.iter().filter(|l| l.contains(" WARN ")).collect();
    assert_eq!(warnings.len(), 3, "{lines:?}");
    assert_eq!(lines.len(), 3);
    assert_eq!(
        warnings
            .iter()
            .filter(|l| l.contains("\"default\" already exists"))
            .count(),
        1
    );
}

// ============================================================================
// Missing cases
// ============================================================================

#[test]
fn test_raise_on_missing_is_silent() {
    let lines = capture(|| {
        let table: DispatchTable<&'static str, (), Result<(), SwitchError>> =
            DispatchTable::strict(|_: ()| -> Result<(), SwitchError> { Ok(()) });
        assert!(table.invoke("nothing", ()).is_err());
    });

    assert!(lines.is_empty(), "unexpected log output: {lines:?}");
}

#[test]
fn test_missing_case_reports_before_failing() {
    let lines = capture(|| {
        let table: DispatchTable<&'static str, (), Result<(), SwitchError>> =
            DispatchTable::with_handlers(
                |_: ()| -> Result<(), SwitchError> { Ok(()) },
                missing_case(),
            );
        let err = table.invoke("nothing", ()).unwrap_err();
        assert!(err.is_missing());
        assert_eq!(err.to_string(), "encountered a missing case that cannot be dealt with");
    });

    assert_eq!(lines.len(), 1, "{lines:?}");
    assert!(lines[0].contains(" ERROR "));
    assert!(lines[0].contains("encountered a missing case that cannot be dealt with!"));
}

#[test]
fn test_reported_message_is_separate_from_error() {
    let lines = capture(|| {
        let table: DispatchTable<&'static str, (), Result<(), SwitchError>> =
            DispatchTable::with_handlers(
                |_: ()| -> Result<(), SwitchError> { Ok(()) },
                missing_with("unknown command").reporting("check the command table"),
            );
        let err = table.invoke("launch", ()).unwrap_err();
        assert_eq!(err.to_string(), "unknown command");
        assert!(table.invoke("default", ()).is_ok());
    });

    assert_eq!(lines.len(), 1, "{lines:?}");
    assert!(lines[0].contains("check the command table"));
    assert!(!lines[0].contains("unknown command"));
}
