pub mod buckets;
pub mod charts;
pub mod config;
pub mod loader;
pub mod output;
pub mod records;
pub mod runner;
pub mod transport;
