//! End-to-end session scenarios driven by a replayed key script.

use std::fs;
use std::io;
use std::path::Path;

use keytrack::input::{ReplayKeySource, ReplayStep};
use keytrack::session::{run, Session, SessionOutcome, TrackerConfig};
use keytrack::types::Keystroke;

fn config_in(dir: &Path) -> TrackerConfig {
    TrackerConfig::default().with_log_path(dir.join("keyboard_events.log"))
}

/// Message bodies of a log, timestamps stripped.
fn bodies(log: &str) -> Vec<String> {
    log.lines()
        .map(|l| {
            let (ts, body) = l.split_once(": ").expect("entry has a timestamp");
            assert_eq!(ts.len(), "YYYY-MM-DD HH:MM:SS".len(), "bad timestamp: {}", ts);
            body.to_string()
        })
        .collect()
}

fn key(ch: char) -> ReplayStep {
    ReplayStep::Key(Keystroke::from_char(ch))
}

#[test]
fn test_key_press_is_logged_and_session_continues() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());

    let mut session = Session::open(&config, ReplayKeySource::from_keys("a"), Vec::<u8>::new()).unwrap();
    let outcome = session.run().unwrap();

    // Only the exhausted script stops it; 'a' alone does not.
    assert_eq!(session.source().reads(), 2);
    assert!(matches!(outcome, SessionOutcome::Failed(_)));

    let lines = bodies(&fs::read_to_string(&config.log_path).unwrap());
    assert_eq!(lines[2], "Нажата клавиша: 'a' (код: 97)");
}

#[test]
fn test_q_then_x_terminates() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());

    let outcome = run(&config, ReplayKeySource::from_keys("qx"), Vec::<u8>::new()).unwrap();
    assert_eq!(outcome, SessionOutcome::ExitSequence);

    let lines = bodies(&fs::read_to_string(&config.log_path).unwrap());
    let tail: Vec<&str> = lines[lines.len() - 4..].iter().map(String::as_str).collect();
    assert_eq!(
        tail,
        [
            "Нажата клавиша: 'q' (код: 113)",
            "Нажата клавиша: 'x' (код: 120)",
            "Обнаружена комбинация для выхода (q + x)",
            "=== Сессия завершена ===",
        ]
    );
}

#[test]
fn test_x_then_q_does_not_terminate() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());

    let mut session =
        Session::open(&config, ReplayKeySource::from_keys("xqq"), Vec::<u8>::new()).unwrap();
    let outcome = session.run().unwrap();

    // Still waiting for input after all three keys.
    assert_eq!(session.source().reads(), 4);
    assert!(matches!(outcome, SessionOutcome::Failed(_)));

    let log = fs::read_to_string(&config.log_path).unwrap();
    assert!(!log.contains("Обнаружена комбинация"));
}

#[test]
fn test_read_failure_on_third_key_stops_immediately() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());

    let source = ReplayKeySource::new([
        key('a'),
        key('b'),
        ReplayStep::Fail(io::ErrorKind::NotConnected, "tty detached".into()),
        key('c'),
    ]);
    let mut session = Session::open(&config, source, Vec::<u8>::new()).unwrap();
    let outcome = session.run().unwrap();

    assert_eq!(
        outcome,
        SessionOutcome::Failed("keyboard read failed: tty detached".into())
    );
    assert_eq!(session.source().reads(), 3);
    assert_eq!(session.source().remaining(), 1);

    let lines = bodies(&fs::read_to_string(&config.log_path).unwrap());
    assert_eq!(
        &lines[2..],
        &[
            "Нажата клавиша: 'a' (код: 97)",
            "Нажата клавиша: 'b' (код: 98)",
            "Ошибка: keyboard read failed: tty detached",
            "=== Сессия завершена ===",
        ]
    );
}

#[test]
fn test_new_session_discards_previous_log() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    fs::write(&config.log_path, "2000-01-01 00:00:00: stale entry\n").unwrap();

    run(&config, ReplayKeySource::from_keys("qx"), io::sink()).unwrap();

    let log = fs::read_to_string(&config.log_path).unwrap();
    assert!(!log.contains("stale entry"));
    assert_eq!(bodies(&log)[0], "=== Новая сессия трекера ===");
}

#[test]
fn test_every_entry_reaches_both_sinks() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());

    let mut session =
        Session::open(&config, ReplayKeySource::from_keys("hi qx"), Vec::<u8>::new()).unwrap();
    session.run().unwrap();

    let console = String::from_utf8(session.into_console().unwrap()).unwrap();
    let file = fs::read_to_string(&config.log_path).unwrap();

    let console_lines: Vec<&str> = console.split_terminator("\r\n").collect();
    let file_lines: Vec<&str> = file.lines().collect();
    assert_eq!(console_lines, file_lines);
    assert_eq!(file_lines.len(), 2 + 5 + 1 + 1);
}

#[cfg(target_os = "linux")]
#[test]
fn test_file_sink_failure_still_reaches_console() {
    let full = Path::new("/dev/full");
    if !full.exists() {
        return;
    }
    let config = TrackerConfig::default().with_log_path(full);

    let mut session = Session::open(&config, ReplayKeySource::from_keys("qx"), Vec::<u8>::new()).unwrap();
    let outcome = session.run().unwrap();

    match &outcome {
        SessionOutcome::Failed(reason) => assert!(reason.starts_with("log write failed")),
        other => panic!("unexpected outcome: {:?}", other),
    }
    // The banner write failed, so no key was ever read.
    assert_eq!(session.source().reads(), 0);

    let console = String::from_utf8(session.into_console().unwrap_or_default()).unwrap();
    assert!(console.contains("Ошибка: log write failed"));
    assert!(console.contains("=== Сессия завершена ==="));
}
