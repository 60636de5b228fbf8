//! Integration tests against Claude on Vertex AI
//!
//! These tests require valid GCP credentials and will make real API calls.
//! To run these tests:
//! 1. Copy `.env.example` to `.env` and fill in your GCP project ID
//! 2. Ensure you have valid credentials (run `gcloud auth application-default login`)
//! 3. Run: `cargo test --test claude_integration_test -- --ignored`

use std::env;
use std::time::Duration;

use newsdesk::agents::{Agent, AgentConfig, AgentFactory, AgentKind, VertexAgentFactory};
use newsdesk::llm::{
    ClaudeClient, ClaudeModel, ContentBlock, FinishReason, GenerateRequest, GenerationConfig,
    LlmProvider, Message,
};
use newsdesk::news::NewsService;

fn project_id() -> String {
    dotenvy::dotenv().ok();
    env::var("GCP_PROJECT_ID").expect("GCP_PROJECT_ID required in .env")
}

fn location() -> String {
    env::var("GCP_LOCATION").unwrap_or_else(|_| "us-central1".to_string())
}

#[tokio::test]
#[ignore]
async fn test_claude_simple_generation() {
    let client = ClaudeClient::new(project_id(), location(), ClaudeModel::Haiku45)
        .await
        .expect("Failed to create Claude client");

    let request = GenerateRequest {
        messages: vec![Message::user("What is 2+2? Answer with just the number.")],
        tools: None,
        config: GenerationConfig::new(100),
        system: None,
    };

    let response = client.generate(request).await.expect("generation failed");

    println!("Response: {}", response.text());
    assert!(response.text().contains('4'));
    assert_eq!(response.finish_reason, FinishReason::EndTurn);
    assert!(response.usage.total_tokens > 0);
    assert!(response
        .content
        .iter()
        .all(|block| matches!(block, ContentBlock::Text { .. })));
}

#[tokio::test]
#[ignore]
async fn test_search_agent_end_to_end() {
    let config = AgentConfig {
        project_id: Some(project_id()),
        location: location(),
        ..Default::default()
    };
    let news = NewsService::google_news().unwrap();
    let factory = VertexAgentFactory::new(config, news);

    let agent = match factory.build(AgentKind::Search).await {
        Ok(agent) => agent,
        Err(e) => panic!("could not build search agent: {e}"),
    };
    let outcome = tokio::time::timeout(
        Duration::from_secs(120),
        agent.execute("Search for information about: Rust programming language. Provide a comprehensive summary with key findings.", true),
    )
    .await
    .expect("agent timed out");

    println!("Summary: {}", outcome.content);
    assert!(outcome.success, "agent failed: {:?}", outcome.error);
    assert!(!outcome.content.is_empty());
    assert_eq!(outcome.metadata["agent"], "search");
}
