pub mod config;

pub use config::{AppConfig, ResizeConfig, StyleConfig, CONFIG_ENV};
