pub mod command;
pub mod config;

pub use command::Command;
pub use config::AppConfig;
