pub mod api;
pub mod config;
pub mod diagnostics;
pub mod fetcher;
pub mod types;
