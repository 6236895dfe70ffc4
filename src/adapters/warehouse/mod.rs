//! Warehouse adapters - event sink implementations.

mod bigquery;
mod mock;

pub use bigquery::BigQuerySink;
pub use mock::MockEventSink;
