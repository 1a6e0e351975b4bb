//! Client for the parley relay.
//!
//! [`RelayClient`] posts conversations to a running relay server and turns any
//! non-success status into a single [`ClientError::RequestFailed`], whatever
//! the provider. [`Conversation`] keeps the ordered history a caller sends with
//! every turn.

mod client;
mod conversation;
mod error;

pub use client::{RelayClient, Target};
pub use conversation::Conversation;
pub use error::{ClientError, REQUEST_FAILED_MESSAGE};
