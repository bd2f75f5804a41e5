//! Port definitions (hexagonal architecture)
//!
//! Ports define the interfaces for external dependencies. The core domain
//! depends only on these traits, not on concrete implementations.

mod exporter;
mod transport;

pub use exporter::RecordExporter;
pub use transport::HttpTransport;
