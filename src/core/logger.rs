use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::sync::Mutex;
use once_cell::sync::Lazy;
use log::{
    LevelFilter,
    Metadata,
    Record
};

static MY_LOGGER: MyLogger = MyLogger;
static LOG_FILE: Lazy<Mutex<Option<File>>> = Lazy::new(|| Mutex::new(None));

struct MyLogger;
impl log::Log for MyLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = format!(
            "[{}] [{}] {}",
            record.target(),
            record.level(),
            record.args()
        );

        let Ok(mut guard) = LOG_FILE.lock() else {
            return;
        };
        match guard.as_mut() {
            Some(file) => {
                _ = writeln!(file, "{}", line);
            },
            None => println!("{}", line),
        }
    }

    fn flush(&self) {
        if let Ok(mut guard) = LOG_FILE.lock() {
            if let Some(file) = guard.as_mut() {
                _ = file.flush();
            }
        }
        _ = io::stdout().flush();
    }
}

static NULL_LOGGER: NullLogger = NullLogger;
struct NullLogger;
impl log::Log for NullLogger {
    fn enabled(&self, _: &Metadata) -> bool {
        false
    }
    fn log(&self, _: &Record) {}
    fn flush(&self) {}
}

/// Installs the process-wide logger. Records go to `file` in append mode
/// when given, otherwise to stdout.
pub fn setup(level: LevelFilter, file: Option<&str>) -> crate::core::Result<()> {
    let output = match file {
        Some(path) => Some(OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| {
                crate::Error::Io(format!("Opening log file {} error: {}", path, e))
            })?),
        None => None,
    };

    if let Ok(mut guard) = LOG_FILE.lock() {
        *guard = output;
    }

    _ = log::set_logger(&MY_LOGGER);
    log::set_max_level(level);
    Ok(())
}

pub fn teardown() {
    log::set_max_level(LevelFilter::Off);
    if let Ok(mut guard) = LOG_FILE.lock() {
        guard.take();
    }
    _ = log::set_logger(&NULL_LOGGER);
}
