pub mod config;
pub mod default_configuration;
pub mod error;
pub mod logger;

#[cfg(test)]
mod unitests;

pub type Result<T> = std::result::Result<T, error::Error>;
