use homeval::domain::config::LoggingConfig;
use homeval_server::init_logging;
use tempfile::tempdir;

#[test]
fn logging_section_configures_file_output() {
    let dir = tempdir().expect("temp dir");
    let cfg = LoggingConfig {
        filter: Some("info".to_owned()),
        directory: Some(dir.path().to_path_buf()),
        json: true,
        max_files: 2,
    };

    let logger = init_logging(&cfg).expect("logging initializes");
    assert!(logger.guard().is_some());

    assert!(init_logging(&LoggingConfig::default()).is_err());
}
