//! CLI command implementations.

pub mod clusters;
pub mod common;
pub mod config;
pub mod init;
pub mod load;
