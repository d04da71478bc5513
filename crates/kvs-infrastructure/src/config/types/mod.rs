//! Configuration types module

pub mod app;
pub mod logging;
pub mod storage;

pub use app::AppConfig;
pub use logging::LoggingConfig;
pub use storage::StorageConfig;
