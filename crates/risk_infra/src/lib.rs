#![forbid(unsafe_code)]

pub mod config;
pub mod feed;
pub mod present;
pub mod snapshot;
