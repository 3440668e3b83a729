//! The session transcript: an append-only turn store with a clear switch.
//!
//! One transcript exists per interactive session. It survives across
//! exchanges within the session but never across process restarts.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use parlor_types::chat::{Turn, TurnRole};
use parlor_types::llm::Message;

/// Ordered store of conversation turns for a single session.
///
/// The only mutations are appending a turn and clearing all turns.
/// Individual turns are never edited or removed.
#[derive(Debug, Clone)]
pub struct Transcript {
    session_id: Uuid,
    started_at: DateTime<Utc>,
    turns: Vec<Turn>,
}

impl Transcript {
    /// Create an empty transcript with a fresh session id.
    pub fn new() -> Self {
        Self {
            session_id: Uuid::now_v7(),
            started_at: Utc::now(),
            turns: Vec::new(),
        }
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// All turns in conversation order.
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Append a user turn and return a reference to it.
    pub fn push_user(&mut self, content: impl Into<String>) -> &Turn {
        self.turns.push(Turn::user(content));
        self.turns.last().expect("just pushed")
    }

    /// Append an assistant turn and return a reference to it.
    pub fn push_assistant(&mut self, content: impl Into<String>) -> &Turn {
        self.turns.push(Turn::assistant(content));
        self.turns.last().expect("just pushed")
    }

    /// Wipe all turns. The session id and start time are kept; clearing
    /// resets the conversation, not the session.
    pub fn clear(&mut self) {
        self.turns.clear();
    }

    /// Convert the transcript into the ordered message list for a
    /// completion request.
    pub fn to_messages(&self) -> Vec<Message> {
        self.turns
            .iter()
            .map(|turn| Message {
                role: turn.role,
                content: turn.content.clone(),
            })
            .collect()
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_transcript_is_empty() {
        let transcript = Transcript::new();
        assert!(transcript.is_empty());
        assert_eq!(transcript.len(), 0);
    }

    #[test]
    fn test_push_preserves_order() {
        let mut transcript = Transcript::new();
        transcript.push_user("first");
        transcript.push_assistant("second");
        transcript.push_user("third");

        let turns = transcript.turns();
        assert_eq!(turns.len(), 3);
        assert_eq!(turns[0].role, TurnRole::User);
        assert_eq!(turns[0].content, "first");
        assert_eq!(turns[1].role, TurnRole::Assistant);
        assert_eq!(turns[1].content, "second");
        assert_eq!(turns[2].role, TurnRole::User);
        assert_eq!(turns[2].content, "third");
    }

    #[test]
    fn test_clear_wipes_turns_keeps_session() {
        let mut transcript = Transcript::new();
        let session_id = transcript.session_id();
        for i in 0..5 {
            transcript.push_user(format!("message {i}"));
            transcript.push_assistant(format!("reply {i}"));
        }
        assert_eq!(transcript.len(), 10);

        transcript.clear();
        assert!(transcript.is_empty());
        assert_eq!(transcript.session_id(), session_id);
    }

    #[test]
    fn test_clear_empty_transcript_is_noop() {
        let mut transcript = Transcript::new();
        transcript.clear();
        assert!(transcript.is_empty());
    }

    #[test]
    fn test_to_messages_mirrors_turns() {
        let mut transcript = Transcript::new();
        transcript.push_user("Hello");
        transcript.push_assistant("Hi there!");

        let messages = transcript.to_messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, TurnRole::User);
        assert_eq!(messages[0].content, "Hello");
        assert_eq!(messages[1].role, TurnRole::Assistant);
        assert_eq!(messages[1].content, "Hi there!");
    }
}
