pub mod agency;
pub mod profile;
pub mod service_log;
pub mod status;
