//! Wire contract of the chat collaborator.
//!
//! The chat panel proxies user questions to a remote inference backend.
//! The feature itself is out of scope here; these types pin down the data
//! contract at the boundary so hosts and tests agree on the shape.

use serde::{Deserialize, Serialize};

/// Author of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// One turn of the conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

/// Request body sent to the chat backend: the full conversation so far.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
}

/// Response body returned by the chat backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    /// The assistant's reply text.
    pub message: String,
    /// Reference URLs backing the reply, when the backend provides them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<String>>,
    /// Related image URLs, when the backend provides them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_images: Option<Vec<String>>,
}
