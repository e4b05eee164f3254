pub mod app;

pub use app::{Config, LogFormat, OutputFormat};
