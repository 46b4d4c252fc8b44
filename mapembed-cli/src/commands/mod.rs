//! CLI subcommands.

pub mod common;
pub mod config;
pub mod init;
pub mod providers;
pub mod render;
#[cfg(feature = "serve")]
pub mod serve;
