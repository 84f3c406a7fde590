pub mod analyze;
pub mod config;
pub mod export;
pub mod init;
