pub mod config;
pub mod logging;

pub mod error;
pub mod fetcher;
pub mod http;
pub mod manifest;
pub mod storage;
pub mod task;
