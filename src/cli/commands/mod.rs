pub mod agencies;
pub mod audit;
pub mod batch;
pub mod config;
pub mod db;
pub mod menu;
pub mod record;
pub mod report;
pub mod status;
