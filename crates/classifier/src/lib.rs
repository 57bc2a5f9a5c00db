// Core classification pipeline for version-2 flow-log records.

// Leaf modules
pub mod proto;
pub mod record;

// Index and aggregation
pub mod classify;
pub mod lookup;

// Re-export commonly used types
pub use classify::{Aggregator, ClassifyError, Summary};
pub use lookup::{LookupError, LookupIndex};
pub use record::FlowRecord;
