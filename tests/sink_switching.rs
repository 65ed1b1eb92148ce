mod common;

use anyhow::Result;
use common::captured_router;
use levelog::{RouterError, Severity, SinkMode};
use std::fs;
use std::path::Path;

#[test]
fn console_to_file_routes_three_lines_to_the_file() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let target = dir.path().join("test.txt");
    let (mut router, out, err) = captured_router();

    router.configure_mode(SinkMode::File, Some(&target))?;
    for n in 1..=3 {
        assert!(router.emit(Severity::Trace, &format!("line {n}"))?);
    }

    let written = fs::read_to_string(&target)?;
    assert_eq!(written.lines().count(), 3);
    assert!(written.ends_with('\n'));
    assert_eq!(out.line_count(), 0);
    assert_eq!(err.line_count(), 0);
    Ok(())
}

#[test]
fn file_lines_are_plain_text_with_labels() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let target = dir.path().join("plain.log");
    let (mut router, _out, _err) = captured_router();

    router.configure_mode(SinkMode::File, Some(&target))?;
    router.emit(Severity::Error, "disk full")?;

    let written = fs::read_to_string(&target)?;
    assert!(written.contains("Error!! disk full"));
    // Console styling never reaches the file sink.
    assert!(!written.contains('\u{1b}'));
    Ok(())
}

#[test]
fn retargeting_routes_only_to_the_new_file() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let first = dir.path().join("a.txt");
    let second = dir.path().join("b.txt");
    let (mut router, _out, _err) = captured_router();

    router.configure_mode(SinkMode::File, Some(&first))?;
    router.emit(Severity::Info, "to a")?;

    router.configure_mode(SinkMode::File, Some(&second))?;
    assert_eq!(router.file_target(), Some(second.as_path()));
    router.emit(Severity::Info, "to b")?;
    router.emit(Severity::Warn, "also to b")?;

    let first_contents = fs::read_to_string(&first)?;
    let second_contents = fs::read_to_string(&second)?;
    assert_eq!(first_contents.lines().count(), 1);
    assert_eq!(second_contents.lines().count(), 2);
    assert!(!first_contents.contains("to b"));
    Ok(())
}

#[test]
fn switching_back_to_console_clears_the_target() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let target = dir.path().join("short-lived.log");
    let (mut router, out, _err) = captured_router();

    router.configure_mode(SinkMode::File, Some(&target))?;
    router.emit(Severity::Info, "to file")?;

    let mode = router.configure_mode(SinkMode::Console, None)?;
    assert_eq!(mode, SinkMode::Console);
    assert_eq!(router.file_target(), None);
    router.emit(Severity::Info, "to console")?;

    assert_eq!(fs::read_to_string(&target)?.lines().count(), 1);
    assert!(out.contents().contains("to console"));
    Ok(())
}

#[test]
fn missing_target_fails_and_previous_sink_survives() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let target = dir.path().join("kept.log");
    let (mut router, _out, _err) = captured_router();

    router.configure_mode(SinkMode::File, Some(&target))?;
    let result = router.configure_mode(SinkMode::File, None);
    assert!(matches!(result, Err(RouterError::MissingFileTarget)));

    // Still in FILE mode against the original target.
    assert_eq!(router.mode(), SinkMode::File);
    assert_eq!(router.file_target(), Some(target.as_path()));
    router.emit(Severity::Info, "still here")?;
    assert!(fs::read_to_string(&target)?.contains("still here"));
    Ok(())
}

#[test]
fn unwritable_target_surfaces_an_io_error() {
    let (mut router, _out, _err) = captured_router();
    let result = router.configure_mode(
        SinkMode::File,
        Some(Path::new("/no-such-directory/levelog/app.log")),
    );
    assert!(matches!(result, Err(RouterError::Io(_))));
    assert_eq!(router.mode(), SinkMode::Console);
}

#[test]
fn reentering_file_mode_appends_to_existing_contents() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let target = dir.path().join("appended.log");
    let (mut router, _out, _err) = captured_router();

    router.configure_mode(SinkMode::File, Some(&target))?;
    router.emit(Severity::Info, "first session")?;
    router.configure_mode(SinkMode::Console, None)?;

    router.configure_mode(SinkMode::File, Some(&target))?;
    router.emit(Severity::Info, "second session")?;

    let written = fs::read_to_string(&target)?;
    assert_eq!(written.lines().count(), 2);
    assert!(written.contains("first session"));
    assert!(written.contains("second session"));
    Ok(())
}

#[test]
fn unknown_mode_string_falls_back_to_console() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let target = dir.path().join("ignored.log");
    let (mut router, _out, err) = captured_router();

    router.configure_mode(SinkMode::File, Some(&target))?;
    let mode = router.configure_mode_str("broadcast", Some(&target))?;

    assert_eq!(mode, SinkMode::Console);
    assert_eq!(router.file_target(), None);
    assert!(err.contents().contains("defaulting to CONSOLE"));
    // The fallback warning went to the console, not the old file.
    assert_eq!(fs::read_to_string(&target)?.lines().count(), 0);
    Ok(())
}

#[test]
fn config_built_router_writes_to_its_file() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let target = dir.path().join("from-config.log");

    let toml = format!(
        "level = \"warn\"\nmode = \"file\"\nfile = {:?}\n",
        target.display().to_string()
    );
    let mut router = levelog::RouterConfig::from_toml_str(&toml)?.build()?;

    assert!(!router.emit(Severity::Info, "filtered")?);
    assert!(router.emit(Severity::Error, "written")?);

    let written = fs::read_to_string(&target)?;
    assert_eq!(written.lines().count(), 1);
    assert!(written.contains("Error!! written"));
    Ok(())
}
