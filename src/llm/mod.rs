//! LLM abstraction layer
//!
//! The minimal client surface the agents run on: provider-neutral message
//! types, the `LlmProvider` trait, a Claude-on-Vertex implementation and the
//! tool registry.

pub mod auth;
pub mod claude;
pub mod core;
pub mod tools;

pub use core::{
    config::GenerationConfig,
    error::LlmError,
    provider::LlmProvider,
    types::{
        ContentBlock, FinishReason, GenerateRequest, GenerateResponse, Message, MessageRole,
        ToolDeclaration, UsageMetadata,
    },
};

pub use claude::{ClaudeClient, ClaudeModel};
pub use tools::{create_tool_declaration, FunctionRegistry, ToolExecutor};
