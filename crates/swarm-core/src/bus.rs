//! Append-only message log shared by the router and its workers

use tracing::debug;

use crate::types::{Message, MessageKind};

/// Ordered log of every message exchanged during a session.
///
/// Messages are only ever appended; [`MessageBus::clear`] is the one way to
/// drop them. Workers never see the whole log, only the slice returned by
/// [`MessageBus::get_context_for`].
#[derive(Debug, Default, Clone)]
pub struct MessageBus {
    messages: Vec<Message>,
}

impl MessageBus {
    /// Create an empty message bus
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message and return a copy of it
    pub fn send(
        &mut self,
        from: &str,
        to: &str,
        kind: MessageKind,
        content: impl Into<String>,
    ) -> Message {
        let msg = Message::new(from, to, kind, content);
        debug!(
            "Bus: {} -> {} [{}] ({} chars)",
            msg.from,
            msg.to,
            msg.kind,
            msg.content.len()
        );
        self.messages.push(msg.clone());
        msg
    }

    /// Messages sent by or addressed to `role`, in append order
    pub fn get_context_for(&self, role: &str) -> Vec<Message> {
        self.messages
            .iter()
            .filter(|m| m.involves(role))
            .cloned()
            .collect()
    }

    /// Drop every message
    pub fn clear(&mut self) {
        debug!("Bus: clearing {} messages", self.messages.len());
        self.messages.clear();
    }

    /// The full log in append order
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CODER, RESEARCHER, REVIEWER, ROUTER};

    #[test]
    fn test_bus_creation() {
        let bus = MessageBus::new();
        assert_eq!(bus.len(), 0);
        assert!(bus.is_empty());
    }

    #[test]
    fn test_bus_send() {
        let mut bus = MessageBus::new();
        let sent = bus.send(ROUTER, CODER, MessageKind::Task, "Build a calculator");

        assert_eq!(bus.len(), 1);
        let msg = &bus.messages()[0];
        assert_eq!(msg, &sent);
        assert_eq!(msg.from, "router");
        assert_eq!(msg.to, "coder");
        assert_eq!(msg.kind, MessageKind::Task);
        assert_eq!(msg.content, "Build a calculator");
    }

    #[test]
    fn test_bus_preserves_call_order() {
        let mut bus = MessageBus::new();
        for i in 0..10 {
            bus.send(ROUTER, CODER, MessageKind::Task, format!("task {}", i));
        }
        assert_eq!(bus.len(), 10);
        for (i, msg) in bus.messages().iter().enumerate() {
            assert_eq!(msg.content, format!("task {}", i));
        }
    }

    #[test]
    fn test_bus_accepts_any_role() {
        let mut bus = MessageBus::new();
        bus.send("", "somebody else", MessageKind::Info, "");
        assert_eq!(bus.len(), 1);
    }

    #[test]
    fn test_get_context_for() {
        let mut bus = MessageBus::new();
        bus.send(ROUTER, CODER, MessageKind::Task, "Task 1");
        bus.send(CODER, ROUTER, MessageKind::Result, "Result 1");
        bus.send(ROUTER, REVIEWER, MessageKind::Task, "Task 2");

        let coder = bus.get_context_for(CODER);
        assert_eq!(coder.len(), 2);
        assert_eq!(coder[0].content, "Task 1");
        assert_eq!(coder[1].content, "Result 1");

        let reviewer = bus.get_context_for(REVIEWER);
        assert_eq!(reviewer.len(), 1);
        assert_eq!(reviewer[0].content, "Task 2");

        assert_eq!(bus.get_context_for(ROUTER).len(), 3);
    }

    #[test]
    fn test_get_context_for_unknown_role() {
        let mut bus = MessageBus::new();
        bus.send(ROUTER, CODER, MessageKind::Task, "Task 1");
        assert!(bus.get_context_for(RESEARCHER).is_empty());
        assert!(MessageBus::new().get_context_for(CODER).is_empty());
    }

    #[test]
    fn test_get_context_is_subset_in_order() {
        let mut bus = MessageBus::new();
        bus.send(ROUTER, CODER, MessageKind::Task, "1");
        bus.send(ROUTER, REVIEWER, MessageKind::Task, "2");
        bus.send(REVIEWER, ROUTER, MessageKind::Result, "3");
        bus.send(CODER, ROUTER, MessageKind::Result, "4");
        bus.send(RESEARCHER, CODER, MessageKind::Info, "5");

        let expected: Vec<Message> = bus
            .messages()
            .iter()
            .filter(|m| m.from == CODER || m.to == CODER)
            .cloned()
            .collect();
        let context = bus.get_context_for(CODER);
        assert_eq!(context, expected);
        let contents: Vec<&str> = context.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, vec!["1", "4", "5"]);
    }

    #[test]
    fn test_clear() {
        let mut bus = MessageBus::new();
        bus.send(ROUTER, CODER, MessageKind::Task, "Task");
        bus.send(CODER, ROUTER, MessageKind::Result, "Done");
        bus.clear();
        assert_eq!(bus.len(), 0);

        bus.clear();
        assert!(bus.is_empty());
    }
}
