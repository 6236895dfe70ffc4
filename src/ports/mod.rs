//! Ports - interfaces to external collaborators.
//!
//! The relay owns no algorithmic core; its value is the two managed
//! services it calls. Each is reached through a narrow trait so the chat
//! handler can be exercised with test doubles.

mod answer_provider;
mod event_sink;

pub use answer_provider::{AnswerProvider, ProviderError};
pub use event_sink::{EventSink, SinkError};
