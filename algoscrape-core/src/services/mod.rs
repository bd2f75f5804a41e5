//! Service layer - business logic orchestration
//!
//! Services coordinate domain logic and port interactions. Each service
//! focuses on a specific use case.

mod export;
mod fetch;

pub use export::{ExportOutcome, ExportService};
pub use fetch::FetchService;
