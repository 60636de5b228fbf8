// HTTP server modules
pub mod context;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;

pub mod config;

// News feed pipeline
pub mod news;

// Status-check document store
pub mod store;

// AI agents and the LLM layer they run on
pub mod agents;
pub mod llm;
