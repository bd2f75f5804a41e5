//! Core domain entities
//!
//! Pure data structures with validation logic - no I/O.

mod policy;
mod provider;
mod transaction;
pub mod result;

pub use policy::PageErrorPolicy;
pub use provider::{Endpoint, Provider};
pub use transaction::{FetchResult, TransactionRecord};
