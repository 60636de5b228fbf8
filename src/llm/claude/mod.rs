//! Claude on Vertex AI
//!
//! Non-streaming `rawPredict` client used by the agents.

pub mod client;
pub mod mapper;
pub mod types;

pub use client::{ClaudeClient, ClaudeModel};
