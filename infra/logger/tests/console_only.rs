use dumps_logger::{LevelFilter, LogFormat, Logger};

#[test]
fn console_only_logger_has_no_file_output() {
    let logger = Logger::builder()
        .name("dumps-console-only")
        .format(LogFormat::Pretty)
        .level(LevelFilter::INFO)
        .init()
        .expect("logger should initialize");

    assert!(!logger.has_file_output());
}
