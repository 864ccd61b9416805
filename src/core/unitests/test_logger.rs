use std::fs;
use log::{info, debug, error, LevelFilter};
use serial_test::serial;

use crate::core::logger;
use super::{
    working_path,
    remove_working_path,
};

#[test]
#[serial]
fn test_logger() {
    assert!(logger::setup(LevelFilter::Info, None).is_ok());
    info!("info: testing....");
    error!("error: testing...");
    logger::teardown();
}

#[test]
#[serial]
fn test_logger_file() {
    let path = working_path("test_logger_file");
    let file = format!("{}/contacts.log", path);

    assert!(logger::setup(LevelFilter::Info, Some(&file)).is_ok());
    info!("written to file");
    debug!("filtered out");
    log::logger().flush();
    logger::teardown();

    let data = fs::read_to_string(&file).unwrap();
    assert!(data.contains("[INFO] written to file"));
    assert!(!data.contains("filtered out"));

    remove_working_path(&path);
}

#[test]
#[serial]
fn test_logger_bad_file() {
    let result = logger::setup(LevelFilter::Info, Some("/nonexistent-dir/contacts.log"));
    assert!(result.is_err());
    logger::teardown();
}
