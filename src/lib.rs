pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod fetcher;
pub mod grid;
pub mod importer;
pub mod link;
pub mod storage;
