//! Parley - A stateless relay that forwards chat conversations to hosted LLM providers.

pub mod build_info;
pub mod config;
pub mod handlers;
pub mod llm;
pub mod response;
pub mod server;
