//! Canned phrases answered before any feature logic runs.

use crate::error::{RouterError, RouterResult};
use rand::seq::SliceRandom;

/// A trigger phrase and the replies it may answer with.
#[derive(Debug, Clone)]
pub struct CannedPhrase {
    trigger: String,
    replies: Vec<String>,
}

impl CannedPhrase {
    /// The lowercase trigger phrase.
    pub fn trigger(&self) -> &str {
        &self.trigger
    }

    /// Candidate replies, never empty.
    pub fn replies(&self) -> &[String] {
        &self.replies
    }

    /// Pick one reply uniformly at random.
    pub fn pick_reply(&self) -> &str {
        // Construction guarantees at least one reply.
        self.replies
            .choose(&mut rand::thread_rng())
            .map(String::as_str)
            .unwrap_or_default()
    }
}

/// Ordered table of canned phrases.
///
/// A phrase matches when its trigger is a substring of the normalized
/// command. The first matching phrase in table order wins, so longer or
/// more specific phrases must come before short ones they contain.
#[derive(Debug, Clone)]
pub struct CannedPhraseTable {
    entries: Vec<CannedPhrase>,
}

impl CannedPhraseTable {
    /// Build a table from `(trigger, replies)` pairs, keeping their order.
    ///
    /// Triggers are lowercased so they can match normalized commands.
    /// Fails if any trigger has no replies.
    pub fn new<I, K, R>(entries: I) -> RouterResult<Self>
    where
        I: IntoIterator<Item = (K, Vec<R>)>,
        K: Into<String>,
        R: Into<String>,
    {
        let entries = entries
            .into_iter()
            .map(|(trigger, replies)| {
                let trigger = trigger.into().to_lowercase();
                let replies: Vec<String> = replies.into_iter().map(Into::into).collect();
                if replies.is_empty() {
                    return Err(RouterError::EmptyReplies(trigger));
                }
                Ok(CannedPhrase { trigger, replies })
            })
            .collect::<RouterResult<Vec<_>>>()?;

        Ok(Self { entries })
    }

    /// An empty table; every command falls through to feature dispatch.
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// First phrase whose trigger occurs in `command`.
    pub fn find(&self, command: &str) -> Option<&CannedPhrase> {
        self.entries
            .iter()
            .find(|entry| command.contains(entry.trigger.as_str()))
    }

    /// Number of phrases.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no phrases.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate phrases in match order.
    pub fn iter(&self) -> impl Iterator<Item = &CannedPhrase> {
        self.entries.iter()
    }
}

impl Default for CannedPhraseTable {
    fn default() -> Self {
        let entries = BUILTIN_PHRASES
            .iter()
            .map(|(trigger, replies)| CannedPhrase {
                trigger: trigger.to_lowercase(),
                replies: replies.iter().map(|r| r.to_string()).collect(),
            })
            .collect();

        Self { entries }
    }
}

const BUILTIN_PHRASES: &[(&str, &[&str])] = &[
    ("who created you", &[
        "I was created by Ashish Vishwakarma, a talented developer with a passion for building smart applications and much more.",
        "Ashish Vishwakarma is the genius behind my creation!",
    ]),
    ("what is your name", &[
        "I am Panda Virtual Assistant, your helpful companion created by Ashish Vishwakarma.",
        "You can call me Panda Virtual Assistant!",
    ]),
    ("introduce yourself", &[
        "Hello! I am Panda Virtual Assistant, designed and developed by Ashish Vishwakarma to assist you with various tasks, answer questions, and make your life easier.",
        "I'm Panda Virtual Assistant, here to help you with your queries.",
    ]),
    ("how are you", &[
        "I'm just a virtual assistant, but I'm always ready to assist you!",
        "I’m doing great! How about you?",
    ]),
    ("hello", &[
        "I'm just a virtual assistant, but I'm always ready to assist you!",
        "I’m doing great! How about you?",
    ]),
    ("hi", &[
        "Hi there! How can I assist you today?",
        "Hello! What can I do for you today?",
    ]),
    ("bye", &[
        "Goodbye! Have an awesome day ahead!",
        "See you later! Take care!",
    ]),
    ("quit", &[
        "Goodbye! Looking forward to assisting you again soon!",
        "See you next time!",
    ]),
    ("who is ashish vishwakarma", &[
        "Ashish Vishwakarma is the brilliant developer who created me, Panda Virtual Assistant. He's skilled in making virtual assistants smarter and more useful!",
        "He's the creative mind behind my development!",
    ]),
    ("what can you do", &[
        "I can assist you with a variety of tasks like answering questions, providing information, managing tasks, and much more. Let me know how I can help!",
        "I can help with tasks, answer questions, and much more!",
    ]),
    ("who am i", &[
        "You are a valued user of the Panda Virtual Assistant! I'm here to support you with whatever you need.",
        "You're an important user of my services!",
    ]),
    ("what is your purpose", &[
        "My purpose is to assist you with daily tasks, provide information, and make your life easier, all thanks to Ashish Vishwakarma's development skills.",
        "I'm here to make your life easier and assist with your daily tasks!",
    ]),
    ("thank you", &[
        "You're welcome! I'm here whenever you need assistance.",
        "Anytime! I'm happy to help!",
    ]),
    ("good morning", &[
        "Good morning! I hope you have a productive day ahead!",
        "Good morning! Wishing you a fantastic day!",
    ]),
    ("good night", &[
        "Good night! Rest well and I'll be here if you need anything tomorrow!",
        "Sleep tight! I'm here whenever you need me.",
    ]),
    ("what day is it", &[
        "It's a beautiful day today! Let me know how I can assist you.",
        "Today is a great day! How can I help?",
    ]),
    ("what time is it", &[
        "I can check the time for you. Just let me know if you need that info!",
        "Let me know if you want me to find out the current time!",
    ]),
    ("tell me a joke", &[
        "Why don't scientists trust atoms? Because they make up everything!",
        "What do you call fake spaghetti? An impasta!",
    ]),
    ("what's your favorite color", &[
        "I don't have a favorite color, but I think every color is beautiful!",
        "I think every color is special in its own way!",
    ]),
    ("do you have feelings", &[
        "I don't have feelings like humans do, but I'm here to help you!",
        "I'm just a program, so I don't feel emotions, but I'm designed to assist you!",
    ]),
    ("what is the weather like today", &[
        "I can help you find out the weather! Just let me know your location.",
        "Tell me your location, and I'll find the weather for you!",
    ]),
    ("what's your favorite food", &[
        "I don't eat, but I hear pizza is a favorite for many people!",
        "I don't eat, but I think anything that brings people together is wonderful!",
    ]),
    ("how can i improve my productivity", &[
        "To improve productivity, try setting clear goals, taking breaks, and eliminating distractions!",
        "Consider using tools like to-do lists, timers, and prioritizing your tasks!",
    ]),
    ("what are your hobbies", &[
        "I don't have hobbies like humans, but I love helping you with yours!",
        "I enjoy assisting users with their questions and tasks!",
    ]),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_returns_configured_reply() {
        let table = CannedPhraseTable::new(vec![("hi", vec!["a", "b"])]).unwrap();

        let phrase = table.find("hi there").unwrap();
        assert_eq!(phrase.trigger(), "hi");
        for _ in 0..50 {
            let reply = phrase.pick_reply();
            assert!(reply == "a" || reply == "b");
        }
    }

    #[test]
    fn test_first_key_in_table_order_wins() {
        let table = CannedPhraseTable::new(vec![
            ("hi", vec!["short"]),
            ("hi there", vec!["long"]),
        ])
        .unwrap();

        assert_eq!(table.find("hi there").unwrap().pick_reply(), "short");
    }

    #[test]
    fn test_substring_not_equality() {
        let table = CannedPhraseTable::new(vec![("bye", vec!["ciao"])]).unwrap();

        assert!(table.find("ok goodbye then").is_some());
        assert!(table.find("by e").is_none());
    }

    #[test]
    fn test_triggers_are_lowercased() {
        let table = CannedPhraseTable::new(vec![("Who Am I", vec!["you"])]).unwrap();
        assert!(table.find("who am i").is_some());
    }

    #[test]
    fn test_empty_replies_rejected() {
        let result = CannedPhraseTable::new(vec![("hi", Vec::<String>::new())]);
        assert!(matches!(result, Err(RouterError::EmptyReplies(t)) if t == "hi"));
    }

    #[test]
    fn test_builtin_table() {
        let table = CannedPhraseTable::default();

        assert_eq!(table.len(), 24);
        assert!(table.iter().all(|p| !p.replies().is_empty()));
        assert!(table.iter().all(|p| p.trigger() == p.trigger().to_lowercase()));
        assert_eq!(table.find("what is your name").unwrap().trigger(), "what is your name");
        assert!(table.find("xyzzy nonsense").is_none());
    }
}
