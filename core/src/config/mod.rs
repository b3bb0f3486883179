mod load;
mod types;

pub use load::{home_config_path, load_default};
pub use types::{AppConfig, LoggingConfig, WordcountConfig};
