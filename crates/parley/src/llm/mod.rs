//! Provider relay for chat completions.
//!
//! One [`Relay::complete`] call translates the internal conversation into the
//! selected provider's wire format, performs a single upstream request, and
//! extracts the reply text from that provider's response envelope.

mod anthropic;
mod endpoints;
mod error;
mod gemini;
mod openai;
mod relay;

pub use endpoints::Endpoints;
pub use error::RelayError;
pub use relay::{ProviderRequest, Relay};
