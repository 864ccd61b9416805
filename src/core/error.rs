use std::fmt;
use std::io;
use std::result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    Argument(String),
    Io(String),
    Network(String),
    Server(u16),
    Validation(String),
    NotFound(String),
    Protocol(String),
    State(String),
}

impl Error {
    /// Message supplied by the backend in an error body, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Error::Validation(msg) => Some(msg.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Argument(msg)    => write!(f, "{}", msg),
            Error::Io(msg)          => write!(f, "{}", msg),
            Error::Network(msg)     => write!(f, "{}", msg),
            Error::Server(status)   => write!(f, "Server error: http status {}", status),
            Error::Validation(msg)  => write!(f, "{}", msg),
            Error::NotFound(msg)    => write!(f, "{}", msg),
            Error::Protocol(msg)    => write!(f, "{}", msg),
            Error::State(msg)       => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(format!("IO error: {}", err))
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::Argument(format!("Invalid url: {}", err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Protocol(format!("Json error: {}", err))
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Error::Protocol(format!("Http error: deserialize json error {}", err))
        } else {
            Error::Network(format!("Http error: sending http request error {}", err))
        }
    }
}

pub type Result<T> = result::Result<T, Error>;
