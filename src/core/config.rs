use std::time::Duration;
use log::LevelFilter;
use url::Url;

pub trait Config: Send + Sync {
    /// Base endpoint of the remote contact collection, shared by every view.
    fn api_url(&self) -> &Url;

    /// Per-request timeout; `None` leaves requests unbounded.
    fn timeout(&self) -> Option<Duration>;

    fn log_level(&self) -> LevelFilter;
    fn log_file(&self) -> Option<&str>;

    #[cfg(feature = "inspect")]
    fn dump(&self);
}
