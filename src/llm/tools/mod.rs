//! Tool execution framework
//!
//! `ToolExecutor` is what the agent loop calls; `FunctionRegistry` is the
//! implementation that maps tool names to typed async Rust functions.

pub mod declaration;
pub mod executor;
pub mod registry;

pub use declaration::create_tool_declaration;
pub use executor::ToolExecutor;
pub use registry::FunctionRegistry;
