//! Library components of the `roster` command.

pub mod config;
pub mod export;
pub mod logging;
