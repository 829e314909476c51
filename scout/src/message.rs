//! Conversation messages.
//!
//! A [`Message`] is one entry of the append-only conversation: the research request,
//! a model turn, or a tool result. `name` is the producing step (for agent turns) or
//! the tool name (for tool results).

use serde::{Deserialize, Serialize};

/// Who produced a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Agent,
    Tool,
}

/// One entry in the conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Message {
    /// User message (the research request).
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            name: None,
        }
    }

    /// Agent message, unnamed until the loop relabels it with its step.
    pub fn agent(content: impl Into<String>) -> Self {
        Self {
            role: Role::Agent,
            content: content.into(),
            name: None,
        }
    }

    /// Tool result message, named after the tool that produced it.
    pub fn tool(tool_name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: Role::Tool,
            content: content.into(),
            name: Some(tool_name.into()),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// **Scenario**: Constructors set role and name as expected.
    #[test]
    fn constructors_set_role_and_name() {
        let u = Message::user("hi");
        assert_eq!(u.role, Role::User);
        assert!(u.name.is_none());

        let a = Message::agent("thinking").with_name("researcher");
        assert_eq!(a.role, Role::Agent);
        assert_eq!(a.name.as_deref(), Some("researcher"));

        let t = Message::tool("tavily_search", "{}");
        assert_eq!(t.role, Role::Tool);
        assert_eq!(t.name.as_deref(), Some("tavily_search"));
    }

    /// **Scenario**: Serialized role is lowercase and a missing name is omitted.
    #[test]
    fn serializes_lowercase_role_without_empty_name() {
        let v = serde_json::to_value(Message::user("q")).unwrap();
        assert_eq!(v["role"], "user");
        assert!(v.get("name").is_none());
    }
}
