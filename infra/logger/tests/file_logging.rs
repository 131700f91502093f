use dumps_logger::{LevelFilter, Logger};
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn file_logging_writes_json_lines() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempdir()?;
    let log_dir = tmp_dir.path().join("logs");

    let logger = Logger::builder()
        .name("dumps-file-logging")
        .console(false)
        .level(LevelFilter::INFO)
        .path(&log_dir)
        .json_files()
        .init()?;
    assert!(logger.has_file_output());

    tracing::info!(engine = "ue4", "listing rendered");

    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let log_file = fs::read_dir(&log_dir)?
        .flatten()
        .map(|entry| entry.path())
        .find(|path| path.extension().and_then(|ext| ext.to_str()) == Some("log"))
        .expect("log file should be created");

    let contents = fs::read_to_string(&log_file)?;
    assert!(contents.contains("listing rendered"));
    assert!(contents.trim_start().starts_with('{'), "file output should be JSON");

    Ok(())
}
