pub mod alerts;
pub mod config;
pub mod district;
pub mod output;
pub mod pipeline;
pub mod scoring;
pub mod store;
