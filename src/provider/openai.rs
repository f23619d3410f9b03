//! OpenAI-backed generative service
//!
//! Reference implementation of `GenerativeService` against the Chat
//! Completions API. List-shaped calls use the JSON response format and are
//! parsed from a fixed payload key; a malformed payload is a parse error the
//! adapters degrade to an empty candidate list.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::OpenAiConfig;
use crate::relevance;
use crate::session::Message;

use super::{GenerativeError, GenerativeService, KnowledgeEntry, transcript};

const API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// At most this many keyword-matched knowledge entries go into a prompt
const CONTEXT_CAP: usize = 5;

/// Chat Completions client
#[derive(Debug)]
pub struct OpenAiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    max_tokens: u32,
    fallback_entries: usize,
}

impl OpenAiClient {
    /// Create a client from configuration; errors when no API key is set
    pub fn from_config(
        config: &OpenAiConfig,
        fallback_entries: usize,
    ) -> Result<Self, GenerativeError> {
        let api_key = config
            .api_key
            .as_ref()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| {
                GenerativeError::NotConfigured("missing api_key in [openai] config".to_string())
            })?;

        Ok(OpenAiClient {
            http: reqwest::Client::new(),
            api_key: api_key.clone(),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            fallback_entries,
        })
    }

    async fn chat(
        &self,
        messages: &[ChatMessage],
        json_mode: bool,
        max_tokens: u32,
        temperature: f32,
    ) -> Result<String, GenerativeError> {
        let request = ChatRequest {
            model: &self.model,
            messages,
            response_format: json_mode.then_some(ResponseFormat { kind: "json_object" }),
            max_tokens: Some(max_tokens),
            temperature,
        };

        let response = self
            .http
            .post(API_URL)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| GenerativeError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(GenerativeError::Api {
                code: status.as_u16(),
                message,
            });
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| GenerativeError::Parse(e.to_string()))?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .map(|s| s.trim().to_string())
            .ok_or_else(|| GenerativeError::Parse("empty completion".to_string()))
    }

    /// Pick the knowledge entries worth inlining into a prompt: keyword
    /// matches against the message, falling back to the first few entries
    fn knowledge_context(&self, message: &str, knowledge: &[KnowledgeEntry]) -> String {
        let relevant = relevance::keyword_filter(
            message,
            knowledge,
            |e| format!("{} {}", e.question, e.answer),
            self.fallback_entries,
        );
        relevant
            .iter()
            .take(CONTEXT_CAP)
            .map(|e| format!("Q: {}\nA: {}", e.question, e.answer))
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

#[async_trait]
impl GenerativeService for OpenAiClient {
    async fn complete(
        &self,
        prompt: &str,
        history: &[Message],
        knowledge: &[KnowledgeEntry],
    ) -> Result<String, GenerativeError> {
        let mut system = "You are an AI assistant helping a customer service agent compose \
                          responses. Based on the conversation history and the agent's partial \
                          input, suggest a completion that is professional, helpful, and \
                          contextually appropriate. Provide only the completion text that \
                          naturally continues from the input."
            .to_string();
        let context = self.knowledge_context(prompt, knowledge);
        if !context.is_empty() {
            system.push_str(" Use this knowledge base information when relevant: ");
            system.push_str(&context);
        }

        let user = format!(
            "Conversation history: {}\n\nAgent's partial input: \"{prompt}\"\n\nComplete this \
             message naturally (provide only the continuation):",
            transcript(history)
        );

        self.chat(&chat_pair(&system, &user), false, 80, 0.6).await
    }

    async fn suggest(
        &self,
        message: &str,
        knowledge: &[KnowledgeEntry],
        history: &[Message],
    ) -> Result<Vec<String>, GenerativeError> {
        let system = "You are an AI customer service assistant generating detailed, contextual \
                      response suggestions. Provide 3 complete, professional responses that \
                      directly address the customer's question, use the knowledge base when \
                      applicable, and offer actionable next steps.";
        let user = format!(
            "Customer message: \"{message}\"\n\nConversation history:\n{}\n\nRelevant knowledge \
             base information:\n{}\n\nRespond in JSON format: {{\"suggestions\": [\"response 1\", \
             \"response 2\", \"response 3\"]}}",
            transcript(history),
            self.knowledge_context(message, knowledge),
        );

        let content = self
            .chat(&chat_pair(system, &user), true, self.max_tokens, 0.6)
            .await?;
        parse_suggestions(&content)
    }

    async fn quick_replies(&self, context: &str) -> Result<Vec<String>, GenerativeError> {
        let system = "You are an AI assistant generating quick reply suggestions for customer \
                      service agents. Based on the message type or context, provide 3 brief, \
                      professional quick replies.";
        let user = format!(
            "Message type/context: \"{context}\"\n\nProvide 3 quick reply suggestions in JSON \
             format: {{\"replies\": [\"reply1\", \"reply2\", \"reply3\"]}}"
        );

        let content = self.chat(&chat_pair(system, &user), true, 300, 0.7).await?;
        parse_replies(&content)
    }

    async fn summarize(&self, history: &[Message]) -> Result<String, GenerativeError> {
        let system = "You are an AI assistant that summarizes customer service conversations. \
                      Provide a concise, professional summary highlighting key points, issues \
                      discussed, and resolution status.";
        let user = format!("Please summarize this conversation:\n\n{}", transcript(history));

        self.chat(&chat_pair(system, &user), false, 200, 0.5).await
    }

    async fn classify_intent(&self, message: &str) -> Result<String, GenerativeError> {
        let system = "You are an AI assistant that classifies customer messages by intent. \
                      Classify the message into one of these categories: greeting, question, \
                      complaint, compliment, goodbye, technical_issue, billing, other.";
        let user =
            format!("Classify this message: \"{message}\"\n\nRespond with JSON: {{\"intent\": \"category\"}}");

        let content = self.chat(&chat_pair(system, &user), true, 50, 0.3).await?;
        Ok(parse_intent(&content))
    }
}

fn chat_pair(system: &str, user: &str) -> [ChatMessage; 2] {
    [
        ChatMessage {
            role: "system".to_string(),
            content: system.to_string(),
        },
        ChatMessage {
            role: "user".to_string(),
            content: user.to_string(),
        },
    ]
}

/// Parse a `{"suggestions": [...]}` payload
pub fn parse_suggestions(content: &str) -> Result<Vec<String>, GenerativeError> {
    #[derive(Deserialize)]
    struct Payload {
        #[serde(default)]
        suggestions: Vec<String>,
    }
    let payload: Payload =
        serde_json::from_str(content).map_err(|e| GenerativeError::Parse(e.to_string()))?;
    Ok(payload.suggestions)
}

/// Parse a `{"replies": [...]}` payload
pub fn parse_replies(content: &str) -> Result<Vec<String>, GenerativeError> {
    #[derive(Deserialize)]
    struct Payload {
        #[serde(default)]
        replies: Vec<String>,
    }
    let payload: Payload =
        serde_json::from_str(content).map_err(|e| GenerativeError::Parse(e.to_string()))?;
    Ok(payload.replies)
}

/// Parse a `{"intent": "..."}` payload; an unreadable label degrades to "other"
pub fn parse_intent(content: &str) -> String {
    #[derive(Deserialize)]
    struct Payload {
        intent: Option<String>,
    }
    serde_json::from_str::<Payload>(content)
        .ok()
        .and_then(|p| p.intent)
        .unwrap_or_else(|| "other".to_string())
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Debug, Clone, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[cfg(test)]
#[path = "openai_tests.rs"]
mod openai_tests;
