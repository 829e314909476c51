//! OpenAI-compatible chat-completions reasoner.
//!
//! Sends the conversation (plus an optional system prompt) and the tool catalog; parses
//! the first choice into a [`ReasoningResponse`]. Tool results are replayed to the model
//! as user messages tagged with the tool name, so the request never depends on
//! provider-side tool-call ids.

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, trace, warn};
use uuid::Uuid;

use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionMessageToolCalls, ChatCompletionRequestMessage,
        ChatCompletionRequestSystemMessage, ChatCompletionRequestUserMessage, ChatCompletionTool,
        ChatCompletionToolChoiceOption, ChatCompletionTools, CreateChatCompletionRequestArgs,
        FunctionObject, ToolChoiceOptions,
    },
    Client,
};

use crate::error::AgentError;
use crate::message::Role;
use crate::reasoning::{Reasoner, ReasoningResponse, ReasoningUsage};
use crate::state::{ConversationState, ToolRequest};
use crate::tools::ToolSpec;

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = config::DEFAULT_MODEL;

/// Reasoner backed by an OpenAI-compatible chat-completions API.
///
/// Credentials come only from the [`OpenAIConfig`] passed in; nothing is read from the
/// process environment here.
pub struct OpenAiReasoner {
    client: Client<OpenAIConfig>,
    model: String,
    system_prompt: Option<String>,
    temperature: Option<f32>,
}

impl OpenAiReasoner {
    pub fn with_config(config: OpenAIConfig, model: impl Into<String>) -> Self {
        Self {
            client: Client::with_config(config),
            model: model.into(),
            system_prompt: None,
            temperature: None,
        }
    }

    /// Builds the client from an API key and optional base URL (e.g. `https://host/v1`).
    pub fn from_credentials(
        api_key: &str,
        base_url: Option<&str>,
        model: impl Into<String>,
    ) -> Self {
        let mut config = OpenAIConfig::new().with_api_key(api_key);
        if let Some(base) = base_url {
            config = config.with_api_base(base.trim_end_matches('/'));
        }
        Self::with_config(config, model)
    }

    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(prompt.into());
        self
    }

    /// Set temperature (0–2). Lower values are more deterministic.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn messages_to_request(&self, state: &ConversationState) -> Vec<ChatCompletionRequestMessage> {
        let system = self.system_prompt.iter().map(|s| {
            ChatCompletionRequestMessage::System(ChatCompletionRequestSystemMessage::from(
                s.as_str(),
            ))
        });
        let turns = state.messages().iter().filter_map(|m| match m.role {
            Role::User => Some(ChatCompletionRequestMessage::User(
                ChatCompletionRequestUserMessage::from(m.content.as_str()),
            )),
            Role::Agent if m.content.trim().is_empty() => None,
            Role::Agent => Some(ChatCompletionRequestMessage::Assistant(
                (m.content.as_str()).into(),
            )),
            Role::Tool => {
                let tool = m.name.as_deref().unwrap_or("tool");
                let text = format!("Result from {}:\n{}", tool, m.content);
                Some(ChatCompletionRequestMessage::User(
                    ChatCompletionRequestUserMessage::from(text.as_str()),
                ))
            }
        });
        system.chain(turns).collect()
    }
}

/// Parses the provider's JSON-string arguments; anything but an object becomes `{}`.
fn parse_tool_arguments(tool: &str, raw: &str) -> Value {
    match serde_json::from_str::<Value>(raw) {
        Ok(v @ Value::Object(_)) => v,
        Ok(other) => {
            warn!(tool, arguments = %other, "Tool arguments are not an object; using {{}}");
            Value::Object(Default::default())
        }
        Err(e) => {
            warn!(tool, error = %e, "Tool arguments are not valid JSON; using {{}}");
            Value::Object(Default::default())
        }
    }
}

#[async_trait]
impl Reasoner for OpenAiReasoner {
    async fn invoke(
        &self,
        state: &ConversationState,
        tools: &[ToolSpec],
    ) -> Result<ReasoningResponse, AgentError> {
        let trace_id = Uuid::new_v4().to_string();
        let mut args = CreateChatCompletionRequestArgs::default();
        args.model(self.model.clone());
        args.messages(self.messages_to_request(state));

        if !tools.is_empty() {
            let chat_tools: Vec<ChatCompletionTools> = tools
                .iter()
                .map(|t| {
                    ChatCompletionTools::Function(ChatCompletionTool {
                        function: FunctionObject {
                            name: t.name.clone(),
                            description: t.description.clone(),
                            parameters: Some(t.input_schema.clone()),
                            ..Default::default()
                        },
                    })
                })
                .collect();
            args.tools(chat_tools);
            args.tool_choice(ChatCompletionToolChoiceOption::Mode(ToolChoiceOptions::Auto));
        }

        if let Some(t) = self.temperature {
            args.temperature(t);
        }

        let request = args.build().map_err(|e| {
            AgentError::ReasoningFailed(format!("request build failed: {}", e))
        })?;

        debug!(
            trace_id = %trace_id,
            model = %self.model,
            message_count = state.len(),
            tools_count = tools.len(),
            "OpenAI chat create"
        );
        if let Ok(js) = serde_json::to_string_pretty(&request) {
            trace!(trace_id = %trace_id, request = %js, "OpenAI request body");
        }

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(|e| AgentError::ReasoningFailed(format!("OpenAI API error: {}", e)))?;

        let choice = response.choices.into_iter().next().ok_or_else(|| {
            AgentError::ReasoningFailed("OpenAI returned no choices".to_string())
        })?;

        let msg = choice.message;
        let content = msg.content.unwrap_or_default();
        let tool_requests: Vec<ToolRequest> = msg
            .tool_calls
            .unwrap_or_default()
            .into_iter()
            .filter_map(|tc| match tc {
                ChatCompletionMessageToolCalls::Function(f) => {
                    let arguments = parse_tool_arguments(&f.function.name, &f.function.arguments);
                    Some(ToolRequest::from_value(f.function.name, arguments).with_id(f.id))
                }
                _ => None,
            })
            .collect();

        let usage = response.usage.map(|u| ReasoningUsage {
            prompt_tokens: u.prompt_tokens,
            completion_tokens: u.completion_tokens,
            total_tokens: u.total_tokens,
        });
        debug!(
            trace_id = %trace_id,
            content_len = content.len(),
            tool_requests = tool_requests.len(),
            usage = ?usage,
            "OpenAI chat response"
        );

        Ok(ReasoningResponse {
            content,
            tool_requests,
            usage,
        })
    }
}
