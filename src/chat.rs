//! Conversation state for the Social Therapist screen.
//!
//! The transcript and pending flag live here and are mutated only through
//! `accept` and `resolve`, so replies always land in send order: a new send
//! is rejected while one is in flight.

use crate::assistant::GREETING;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Guest,
    Therapist,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub role: Role,
    pub text: String,
}

#[derive(Debug)]
pub struct Conversation {
    messages: Vec<Message>,
    pending: bool,
}

impl Conversation {
    /// Seeded with the fixed greeting; rebuilt from scratch every session.
    pub fn new() -> Self {
        Self {
            messages: vec![Message {
                role: Role::Therapist,
                text: GREETING.to_string(),
            }],
            pending: false,
        }
    }

    /// Appends the guest message and marks a request in flight. Returns
    /// false (and changes nothing) for blank input or while pending.
    pub fn accept(&mut self, user_text: &str) -> bool {
        if user_text.trim().is_empty() || self.pending {
            return false;
        }
        self.messages.push(Message {
            role: Role::Guest,
            text: user_text.to_string(),
        });
        self.pending = true;
        true
    }

    /// Appends the therapist reply and clears the pending flag.
    pub fn resolve(&mut self, reply: String) {
        self.messages.push(Message {
            role: Role::Therapist,
            text: reply,
        });
        self.pending = false;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assistant::{CONTEMPLATING_REPLY, TROUBLE_REPLY};

    #[test]
    fn test_new_conversation_starts_with_greeting() {
        let convo = Conversation::new();
        assert_eq!(convo.messages().len(), 1);
        assert_eq!(convo.messages()[0].role, Role::Therapist);
        assert_eq!(convo.messages()[0].text, GREETING);
        assert!(!convo.is_pending());
    }

    #[test]
    fn test_blank_input_is_a_no_op() {
        let mut convo = Conversation::new();
        assert!(!convo.accept(""));
        assert!(!convo.accept("   "));
        assert!(!convo.accept("\t\n"));
        assert_eq!(convo.messages().len(), 1);
        assert!(!convo.is_pending());
    }

    #[test]
    fn test_send_and_resolve_round_trip() {
        let mut convo = Conversation::new();

        assert!(convo.accept("What cocktail do you recommend?"));
        assert_eq!(convo.messages().len(), 2);
        assert_eq!(convo.messages()[1].role, Role::Guest);
        assert!(convo.is_pending());

        convo.resolve("Try the Farmers Daughter!".to_string());
        assert_eq!(convo.messages().len(), 3);
        assert_eq!(convo.messages()[2].role, Role::Therapist);
        assert_eq!(convo.messages()[2].text, "Try the Farmers Daughter!");
        assert!(!convo.is_pending());
    }

    #[test]
    fn test_second_send_rejected_while_pending() {
        let mut convo = Conversation::new();
        assert!(convo.accept("first"));
        assert!(!convo.accept("second"));
        assert_eq!(convo.messages().len(), 2);

        convo.resolve("reply".to_string());
        assert!(convo.accept("second"));
        assert_eq!(convo.messages().len(), 4);
    }

    #[test]
    fn test_fallback_replies_clear_pending() {
        for fallback in [TROUBLE_REPLY, CONTEMPLATING_REPLY] {
            let mut convo = Conversation::new();
            convo.accept("test");
            convo.resolve(fallback.to_string());
            assert_eq!(convo.messages()[2].text, fallback);
            assert!(!convo.is_pending());
        }
    }

    #[test]
    fn test_serial_sends_interleave_in_order() {
        let mut convo = Conversation::new();
        for i in 0..4 {
            assert!(convo.accept(&format!("question {i}")));
            convo.resolve(format!("answer {i}"));
        }

        let messages = convo.messages();
        assert_eq!(messages.len(), 9);
        assert_eq!(messages[0].role, Role::Therapist);
        for i in 0..4 {
            let guest = &messages[1 + i * 2];
            let therapist = &messages[2 + i * 2];
            assert_eq!(guest.role, Role::Guest);
            assert_eq!(guest.text, format!("question {i}"));
            assert_eq!(therapist.role, Role::Therapist);
            assert_eq!(therapist.text, format!("answer {i}"));
        }
    }
}
