//! Adapter implementations
//!
//! Adapters implement the port traits with concrete technologies:
//! - reqwest blocking client for HttpTransport
//! - AlgoScan and AlgoExplorer pagination protocols over HttpTransport
//! - csv crate writer for RecordExporter

pub mod algoexplorer;
pub mod algoscan;
mod amount;
pub mod csv_export;
pub mod http;

#[cfg(test)]
pub mod indexer_mock;
#[cfg(test)]
pub mod scripted;
