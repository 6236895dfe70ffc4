//! Search adapters - answer provider implementations.

mod discovery_engine;
mod mock;

pub use discovery_engine::DiscoveryEngineProvider;
pub use mock::MockAnswerProvider;
