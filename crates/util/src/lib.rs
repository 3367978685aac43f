pub mod config;
pub mod path_processing;
pub mod text_processing;

pub use config::{AppConfig, CONFIG_PATH_ENV, ConfigError, default_config_path, load_config_from_path};
pub use path_processing::expand_tilde;
pub use text_processing::{format_price, truncate_to_width};
