use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod assistant;

pub const GREETING: &str = "Welcome to AI React App Builder! I can help you create React components, modify existing code, add new features, and build complete applications. What would you like to build today?";

pub const EXAMPLE_PROMPTS: [&str; 3] = [
    "Create a todo app",
    "Add a dark mode toggle",
    "Build a user dashboard",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Local>,
}

impl ChatMessage {
    /// Local wall-clock time of creation, `HH:MM:SS`.
    pub fn clock_label(&self) -> String {
        self.timestamp.format("%H:%M:%S").to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitRejection {
    Empty,
    AwaitingReply,
}

/// Append-only conversation with the assistant.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
    next_seq: u64,
    awaiting_reply: bool,
}

impl Transcript {
    pub fn seeded() -> Self {
        let mut transcript = Self::default();
        transcript.append(Role::Assistant, GREETING.to_string());
        transcript
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_awaiting_reply(&self) -> bool {
        self.awaiting_reply
    }

    /// Records a user prompt verbatim. Whitespace-only prompts and prompts
    /// sent while a reply is pending are refused.
    pub fn submit(&mut self, prompt: &str) -> Result<&ChatMessage, SubmitRejection> {
        if prompt.trim().is_empty() {
            return Err(SubmitRejection::Empty);
        }
        if self.awaiting_reply {
            return Err(SubmitRejection::AwaitingReply);
        }

        self.awaiting_reply = true;
        Ok(self.append(Role::User, prompt.to_string()))
    }

    pub fn complete(&mut self, content: String) -> &ChatMessage {
        self.awaiting_reply = false;
        self.append(Role::Assistant, content)
    }

    fn append(&mut self, role: Role, content: String) -> &ChatMessage {
        let timestamp = Local::now();
        self.next_seq += 1;
        self.messages.push(ChatMessage {
            id: format!("{}-{}", timestamp.timestamp_millis(), self.next_seq),
            role,
            content,
            timestamp,
        });
        &self.messages[self.messages.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::collections::BTreeSet;

    #[test]
    fn seeded_transcript_starts_with_greeting() {
        let transcript = Transcript::seeded();
        assert_eq!(transcript.messages().len(), 1);
        assert_eq!(transcript.messages()[0].role, Role::Assistant);
        assert_eq!(transcript.messages()[0].content, GREETING);
        assert!(!transcript.is_awaiting_reply());
    }

    #[test]
    fn submit_appends_literal_user_prompt() {
        let mut transcript = Transcript::seeded();
        let message = transcript
            .submit("Create a todo app ")
            .expect("prompt should be accepted");
        assert_eq!(message.role, Role::User);
        assert_eq!(message.content, "Create a todo app ");
        assert!(transcript.is_awaiting_reply());
    }

    #[test]
    fn submit_rejects_blank_and_pending_prompts() {
        let mut transcript = Transcript::seeded();
        assert_eq!(transcript.submit("   ").err(), Some(SubmitRejection::Empty));

        transcript.submit("first").expect("first prompt should be accepted");
        assert_eq!(
            transcript.submit("second").err(),
            Some(SubmitRejection::AwaitingReply)
        );
        assert_eq!(transcript.messages().len(), 2);

        transcript.complete("done".to_string());
        assert!(!transcript.is_awaiting_reply());
        transcript.submit("second").expect("prompt after reply should be accepted");
    }

    #[test]
    fn message_ids_are_unique() {
        let mut transcript = Transcript::seeded();
        for round in 0..5 {
            transcript.submit(&format!("prompt {round}")).expect("prompt accepted");
            transcript.complete(format!("reply {round}"));
        }
        let ids: BTreeSet<_> = transcript.messages().iter().map(|m| m.id.clone()).collect();
        assert_eq!(ids.len(), transcript.messages().len());
    }

    #[test]
    fn clock_label_formats_local_time_of_day() {
        let timestamp = Local
            .with_ymd_and_hms(2024, 1, 2, 13, 5, 9)
            .single()
            .expect("local time should be unambiguous");
        let message = ChatMessage {
            id: "1".to_string(),
            role: Role::User,
            content: String::new(),
            timestamp,
        };
        assert_eq!(message.clock_label(), "13:05:09");
    }

    #[test]
    fn message_id_starts_with_creation_millis() {
        let transcript = Transcript::seeded();
        let greeting = &transcript.messages()[0];
        assert_eq!(
            greeting.id,
            format!("{}-1", greeting.timestamp.timestamp_millis())
        );
    }

    #[test]
    fn role_serializes_as_snake_case() {
        let value = serde_json::to_value(Role::Assistant).expect("role should serialize");
        assert_eq!(value, "assistant");
    }
}
