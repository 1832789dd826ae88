//! CLI command implementations

pub mod copy;
pub mod init;
pub mod validate;
