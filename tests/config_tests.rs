use std::fs;
use std::path::Path;

use tempfile::tempdir;
use vertex_sssp::config::RunConfig;
use vertex_sssp::{DriverConfig, Error};

#[test]
fn test_defaults_follow_driver() {
    let config = RunConfig::from_args(&[]).unwrap();
    let driver = DriverConfig::default();

    assert_eq!(config, RunConfig::default());
    assert_eq!(config.niters, driver.max_passes);
    assert!(!config.scheduler);
    assert!(!config.onlyresult);
    assert!(config.file.is_none());
    assert!(matches!(config.require_file(), Err(Error::Config(_))));
}

#[test]
fn test_key_value_arguments() {
    let config = RunConfig::from_args(&[
        "file=graph.txt",
        "--niters=25",
        "scheduler=1",
        "source=4",
        "window=128",
        "parallel=true",
        "verify=yes",
    ])
    .unwrap();

    assert_eq!(config.require_file().unwrap(), Path::new("graph.txt"));
    assert_eq!(config.niters, 25);
    assert!(config.scheduler);
    assert!(config.parallel);
    assert!(config.verify);

    let driver = config.driver_config();
    assert_eq!(driver.max_passes, 25);
    assert!(driver.scheduling);
    assert_eq!(driver.window_size, 128);
    assert_eq!(driver.source, 4);
}

#[test]
fn test_invalid_arguments() {
    for args in [
        vec!["niters"],
        vec!["niters=-3"],
        vec!["scheduler=maybe"],
        vec!["colour=blue"],
    ] {
        assert!(
            matches!(RunConfig::from_args(&args), Err(Error::Config(_))),
            "{:?} should be rejected",
            args
        );
    }
}

#[test]
fn test_help_flag() {
    for flag in ["help", "--help", "-h"] {
        let config = RunConfig::from_args(&["file=x", flag]).unwrap();
        assert!(config.help, "{} should request help", flag);
    }
    assert!(RunConfig::help().contains("scheduler=0|1"));
}

#[test]
fn test_config_file_then_overrides() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("run.json");
    fs::write(
        &path,
        r#"{ "file": "web.txt", "niters": 7, "scheduler": true, "source": 2 }"#,
    )
    .unwrap();

    let config_arg = format!("config={}", path.display());
    let config = RunConfig::from_args(&["niters=9", &config_arg]).unwrap();

    assert_eq!(config.require_file().unwrap(), Path::new("web.txt"));
    assert_eq!(config.niters, 9, "explicit arguments win over the file");
    assert!(config.scheduler);
    assert_eq!(config.source, 2);
    assert_eq!(config.window, DriverConfig::default().window_size);
}

#[test]
fn test_config_file_errors() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ niters: ").unwrap();
    assert!(matches!(RunConfig::from_file(&path), Err(Error::Config(_))));

    let missing = dir.path().join("missing.json");
    assert!(matches!(RunConfig::from_file(&missing), Err(Error::Io { .. })));
}
