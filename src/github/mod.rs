pub mod aggregator;
pub mod client;
pub mod types;
