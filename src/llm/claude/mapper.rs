//! Mapping between abstraction types and Claude-specific types

use crate::llm::core::types::{
    ContentBlock, FinishReason, GenerateRequest, GenerateResponse, Message, MessageRole,
    ToolDeclaration, UsageMetadata,
};

use super::types::{
    ClaudeContent, ClaudeContentBlock, ClaudeMessage, ClaudeResponse, ClaudeTool,
    RawPredictRequest,
};

const ANTHROPIC_VERSION: &str = "vertex-2023-10-16";

pub fn to_claude_request(request: GenerateRequest) -> RawPredictRequest {
    RawPredictRequest {
        anthropic_version: ANTHROPIC_VERSION.to_string(),
        max_tokens: request.config.max_tokens,
        messages: request.messages.into_iter().map(to_claude_message).collect(),
        system: request.system,
        tools: request
            .tools
            .filter(|tools| !tools.is_empty())
            .map(|tools| tools.into_iter().map(to_claude_tool).collect()),
        temperature: request.config.temperature,
    }
}

fn to_claude_message(message: Message) -> ClaudeMessage {
    // Tool results travel in user turns for Claude
    let role = match message.role {
        MessageRole::Assistant => "assistant",
        MessageRole::User | MessageRole::Tool => "user",
    }
    .to_string();

    if let [ContentBlock::Text { text }] = message.content.as_slice() {
        return ClaudeMessage {
            role,
            content: ClaudeContent::Text(text.clone()),
        };
    }

    ClaudeMessage {
        role,
        content: ClaudeContent::Blocks(
            message
                .content
                .into_iter()
                .map(to_claude_content_block)
                .collect(),
        ),
    }
}

fn to_claude_content_block(block: ContentBlock) -> ClaudeContentBlock {
    match block {
        ContentBlock::Text { text } => ClaudeContentBlock::Text { text },
        ContentBlock::ToolUse { id, name, input } => ClaudeContentBlock::ToolUse { id, name, input },
        ContentBlock::ToolResult {
            tool_use_id,
            content,
            is_error,
        } => ClaudeContentBlock::ToolResult {
            tool_use_id,
            content,
            is_error: is_error.then_some(true),
        },
    }
}

fn to_claude_tool(tool: ToolDeclaration) -> ClaudeTool {
    ClaudeTool {
        name: tool.name,
        description: tool.description,
        input_schema: tool.input_schema,
    }
}

pub fn from_claude_response(response: ClaudeResponse) -> GenerateResponse {
    let content = response
        .content
        .into_iter()
        .map(|block| match block {
            ClaudeContentBlock::Text { text } => ContentBlock::Text { text },
            ClaudeContentBlock::ToolUse { id, name, input } => {
                ContentBlock::ToolUse { id, name, input }
            }
            ClaudeContentBlock::ToolResult {
                tool_use_id,
                content,
                is_error,
            } => ContentBlock::ToolResult {
                tool_use_id,
                content,
                is_error: is_error.unwrap_or(false),
            },
        })
        .collect();

    GenerateResponse {
        id: response.id,
        content,
        finish_reason: FinishReason::from_stop_reason(response.stop_reason.as_deref()),
        usage: UsageMetadata::new(response.usage.input_tokens, response.usage.output_tokens),
    }
}
