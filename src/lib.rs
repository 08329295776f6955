pub mod archive;
pub mod artifact;
pub mod commands;
pub mod console;
pub mod download;
pub mod error;
pub mod fetch;
pub mod http;
pub mod platform;
pub mod runtime;
pub mod variant;

pub use error::Error;
