//! HTTP access to the build server.

mod client;

pub use client::HttpClient;
