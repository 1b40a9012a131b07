mod config;
mod env;
mod error;
mod file;
mod template;

pub use config::{DeliverSettings, ShiplaneConfig};
pub use env::{EnvSource, ProcessEnv};
pub use error::ConfigError;
pub use template::render_template;

pub const CONFIG_FILE_NAME: &str = "Shiplane.toml";
