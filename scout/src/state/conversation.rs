//! Append-only conversation for one research run.

use serde::Serialize;

use crate::message::Message;

/// Ordered, append-only message log owned by exactly one run.
///
/// Messages are never removed or reordered. The only in-place edit is
/// [`relabel_last`](ConversationState::relabel_last), which sets the `name` of the most
/// recent message so the router and aggregator can tell which step produced it.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConversationState {
    messages: Vec<Message>,
}

impl ConversationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// State seeded with a single user message.
    pub fn seeded(request: impl Into<String>) -> Self {
        Self {
            messages: vec![Message::user(request)],
        }
    }

    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn extend(&mut self, messages: impl IntoIterator<Item = Message>) {
        self.messages.extend(messages);
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Sets the name of the most recent message and returns it, or `None` when empty.
    pub fn relabel_last(&mut self, name: &str) -> Option<&Message> {
        let last = self.messages.last_mut()?;
        last.name = Some(name.to_string());
        Some(last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::Role;

    /// **Scenario**: Appends keep prior entries and their order intact.
    #[test]
    fn push_preserves_prefix() {
        let mut state = ConversationState::seeded("research Acme");
        let before = state.messages().to_vec();
        state.push(Message::agent("looking"));
        state.push(Message::tool("tavily_search", "{}"));
        assert_eq!(state.len(), 3);
        assert_eq!(&state.messages()[..1], &before[..]);
        assert_eq!(state.last().map(|m| m.role), Some(Role::Tool));
    }

    /// **Scenario**: relabel_last only touches the newest message; empty state yields None.
    #[test]
    fn relabel_last_names_newest_message_only() {
        let mut empty = ConversationState::new();
        assert!(empty.relabel_last("researcher").is_none());

        let mut state = ConversationState::seeded("q");
        state.push(Message::agent("a"));
        let named = state.relabel_last("researcher").cloned();
        assert_eq!(named.and_then(|m| m.name).as_deref(), Some("researcher"));
        assert!(state.messages()[0].name.is_none());
    }
}
