//! Wire types shared by the parley relay server and its clients.

mod api;
mod message;
mod provider;

pub use api::{ChatBody, ErrorBody, ReplyBody};
pub use message::{ChatMessage, Role};
pub use provider::{Provider, UnknownProvider};
