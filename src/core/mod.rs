pub mod config;
pub mod log;
pub mod record;
pub mod report;
pub mod status;
