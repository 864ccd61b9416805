use std::fmt;
use std::fs;
use std::time::Duration;
use serde::Deserialize;
use log::LevelFilter;
use url::Url;

use crate::{
    Error,
    core::{
        config::Config,
        Result
    },
};

pub const DEFAULT_API_URL: &str = "https://contact-management-web-app-backend.onrender.com";

#[derive(Clone, Deserialize)]
struct LogCfg {
    #[serde(rename = "level")]
    level   : String,
    #[serde(rename = "logFile")]
    file    : Option<String>,
}

#[derive(Clone, Deserialize)]
struct FileCfg {
    #[serde(rename = "apiUrl")]
    api_url : Option<String>,
    #[serde(rename = "timeout")]
    timeout : Option<u64>,
    #[serde(rename = "logger")]
    logger  : Option<LogCfg>,
}

pub struct Builder<'a> {
    api_url     : Option<&'a str>,
    timeout     : Option<Duration>,

    log_level   : Option<LevelFilter>,
    log_file    : Option<&'a str>,

    cfg         : Option<FileCfg>,
}

impl<'a> Builder<'a> {
    pub fn new() -> Builder<'a> {
        Self {
            api_url     : None,
            timeout     : None,
            log_level   : None,
            log_file    : None,
            cfg         : None,
        }
    }

    pub fn with_api_url(&mut self, url: &'a str) -> &mut Self {
        self.api_url = Some(url);
        self
    }

    pub fn with_timeout(&mut self, timeout: Duration) -> &mut Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_logger(&mut self, level: LevelFilter, file: Option<&'a str>) -> &mut Self {
        self.log_level = Some(level);
        self.log_file = file;
        self
    }

    pub fn load(&mut self, input: &str) -> Result<&mut Self> {
        let data = fs::read_to_string(input).map_err(|e| {
            Error::Io(format!("Reading config error: {}", e))
        })?;

        let cfg = serde_json::from_str::<FileCfg>(&data).map_err(|e| {
            Error::Argument(format!("bad config, error: {}", e))
        })?;

        self.cfg = Some(cfg);
        Ok(self)
    }

    pub fn build(&mut self) -> Result<Box<dyn Config>> {
        Ok(Box::new(Configuration::new(self)?))
    }
}

impl<'a> Default for Builder<'a> {
    fn default() -> Self {
        Self::new()
    }
}

struct Configuration {
    api_url     : Url,
    timeout     : Option<Duration>,
    log_level   : LevelFilter,
    log_file    : Option<String>,
}

impl Configuration {
    // Explicit builder values take precedence over the loaded file.
    fn new(b: &Builder) -> Result<Self> {
        let file = b.cfg.as_ref();

        let url: &str = match b.api_url {
            Some(v) => v,
            None => file.and_then(|v| v.api_url.as_deref()).unwrap_or(DEFAULT_API_URL),
        };

        let api_url = Url::parse(url)?;
        if api_url.cannot_be_a_base() {
            return Err(Error::Argument(format!("Invalid api url: {}", url)));
        }

        let timeout = b.timeout.or_else(|| {
            file.and_then(|v| v.timeout)
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs)
        });

        let logger = file.and_then(|v| v.logger.as_ref());
        let log_level = match b.log_level {
            Some(level) => level,
            None => logger
                .and_then(|v| v.level.parse::<LevelFilter>().ok())
                .unwrap_or(LevelFilter::Info),
        };

        let log_file = match b.log_file {
            Some(path) => Some(path.to_string()),
            None => logger.and_then(|v| v.file.clone()),
        };

        Ok(Self {
            api_url,
            timeout,
            log_level,
            log_file,
        })
    }
}

impl Config for Configuration {
    fn api_url(&self) -> &Url {
        &self.api_url
    }

    fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    fn log_level(&self) -> LevelFilter {
        self.log_level
    }

    fn log_file(&self) -> Option<&str> {
        self.log_file.as_deref()
    }

    #[cfg(feature = "inspect")]
    fn dump(&self) {
        println!("config: {}", self);
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "apiUrl:{},", self.api_url)?;
        match self.timeout {
            Some(v) => write!(f, "timeout:{}s,", v.as_secs())?,
            None => write!(f, "timeout:none,")?,
        }
        write!(f, "logger:{}", self.log_level)?;
        if let Some(file) = self.log_file.as_ref() {
            write!(f, ",logFile:{}", file)?;
        }
        Ok(())
    }
}
